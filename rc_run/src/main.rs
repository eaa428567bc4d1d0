use std::{f64::consts::PI, fs::File, io::Write};

use ray_caster::{
    camera::Camera, light::PointLight, material::Material, shape::sphere::Sphere,
    transformation::view_transform, world::World, Color, Matrix, Tuple,
};

fn main() {
    let floor_material = Material {
        color: Color::new(1., 0.9, 0.9),
        specular: 0.,
        ..Default::default()
    };

    // the floor and walls are spheres squashed flat
    let floor = Sphere::default()
        .with_transform(Matrix::scaling(10., 0.01, 10.))
        .with_material(floor_material);

    let left_wall = Sphere::default()
        .with_transform(
            Matrix::identity()
                .scale(10., 0.01, 10.)
                .rotate_x(-PI / 2.)
                .rotate_y(-PI / 4.)
                .translate(0., 0., 5.),
        )
        .with_material(floor_material);

    let right_wall = Sphere::default()
        .with_transform(
            Matrix::identity()
                .scale(10., 0.01, 10.)
                .rotate_x(PI / 2.)
                .rotate_y(PI / 4.)
                .translate(0., 0., 5.),
        )
        .with_material(floor_material);

    let middle_sphere = Sphere::default()
        .with_transform(Matrix::translation(-0.5, 1., 0.5))
        .with_material(Material {
            color: Color::new(0.1, 1., 0.5),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        });

    let right_sphere = Sphere::default()
        .with_transform(
            Matrix::identity()
                .scale(0.5, 0.5, 0.5)
                .translate(1.5, 0.5, -0.5),
        )
        .with_material(Material {
            color: Color::new(0.5, 1., 0.1),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        });

    let left_sphere = Sphere::default()
        .with_transform(
            Matrix::identity()
                .scale(0.33, 0.33, 0.33)
                .translate(-1.5, 0.33, -0.75),
        )
        .with_material(Material {
            color: Color::new(1., 0.8, 0.1),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        });

    let world = World::new(
        vec![
            Box::new(floor),
            Box::new(left_wall),
            Box::new(right_wall),
            Box::new(left_sphere),
            Box::new(middle_sphere),
            Box::new(right_sphere),
        ],
        Some(PointLight::new(
            Tuple::point(-10., 10., -10.),
            Color::white(),
        )),
    );

    let camera_transform = view_transform(
        Tuple::point(0., 1.5, -5.),
        Tuple::point(0., 1., 0.),
        Tuple::vector(0., 1., 0.),
    )
    .expect("Should compute the camera transform");
    let camera = Camera::new(1000, 500, PI / 3.).with_transform(camera_transform);

    let canvas = camera.render(&world).expect("Should render the scene");

    let mut file = File::create("world.ppm").expect("Should create the output file");
    file.write_all(canvas.to_ppm().as_bytes())
        .expect("Should write the output file");
    println!("Wrote world.ppm");
}
