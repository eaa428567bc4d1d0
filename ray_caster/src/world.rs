use crate::{
    intersection::{hit, Computations, Intersect, Intersection},
    light::PointLight,
    material::Material,
    shape::{sphere::Sphere, Shape},
    Color, Matrix, Ray, Result, Tuple,
};

/// The scene: an ordered list of objects, which the world owns, and at most
/// one light source. Intersections borrow their objects from this list.
#[derive(Debug)]
pub struct World {
    pub objects: Vec<Box<dyn Shape>>,
    pub light: Option<PointLight>,
}

impl World {
    pub fn new(objects: Vec<Box<dyn Shape>>, light: Option<PointLight>) -> Self {
        Self { objects, light }
    }

    /// A world with no objects and no light.
    pub fn new_empty() -> Self {
        Self::new(vec![], None)
    }

    /// Shades the intersection captured by comps. A world with no light
    /// source renders black.
    fn shade_hit(&self, comps: &Computations) -> Result<Color> {
        if let Some(light) = self.light {
            comps.object.material().lighting(
                light,
                comps.point,
                comps.eye_vector,
                comps.normal_vector,
            )
        } else {
            Ok(Color::black())
        }
    }

    /// Intersects the world with the given ray and shades the nearest
    /// forward hit. Rays that hit nothing get the background color (black).
    pub fn color_at(&self, ray: &Ray) -> Result<Color> {
        let xs = self.intersect(ray)?;
        match hit(&xs) {
            Some(hit) => self.shade_hit(&hit.prepare_computations(ray)?),
            None => Ok(Color::black()),
        }
    }
}

impl Default for World {
    /// The default world: two concentric spheres at the origin, the outer a
    /// colored unit sphere and the inner scaled to half, lit from
    /// (-10, 10, -10).
    fn default() -> Self {
        let light = PointLight::new(Tuple::point(-10., 10., -10.), Color::white());

        let material = Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        };

        let sphere1 = Box::new(Sphere::default().with_material(material));
        let sphere2 =
            Box::new(Sphere::default().with_transform(Matrix::scaling(0.5, 0.5, 0.5)));

        Self {
            objects: vec![sphere1, sphere2],
            light: Some(light),
        }
    }
}

impl Intersect for World {
    /// Collects the intersections of every object in the scene, ordered by
    /// ascending t.
    fn intersect(&self, ray: &Ray) -> Result<Vec<Intersection<'_>>> {
        let mut xs = vec![];
        for object in &self.objects {
            xs.append(&mut object.intersect(ray)?);
        }
        // stable sort: intersections at equal t keep scene order
        xs.sort_by(|a, b| a.t.total_cmp(&b.t));
        Ok(xs)
    }
}
