use std::fmt::Debug;

use crate::{
    intersection::{Intersect, Intersection, Ray},
    material::Material,
    Matrix, Result, Tuple,
};

#[derive(Debug, PartialEq)]
pub enum ShapeType {
    Sphere,
}

pub trait Shape: Intersect + Send + Sync {
    /// Computes the world-space normal at the given world point.
    ///
    /// The point goes into object space through the inverse transform, the
    /// object-space normal comes back out through the transpose of that
    /// inverse. The plain forward transform would bend normals the wrong way
    /// under non-uniform scaling or shearing.
    fn normal_at(&self, world_point: Tuple) -> Result<Tuple> {
        let transform_inverse = self.transform().inverse()?;
        let object_point = transform_inverse.clone() * world_point;
        let object_normal = self.object_normal_at(object_point);
        let mut world_normal = transform_inverse.transpose() * object_normal;

        // the multiply can smear w away from 0 for non-uniform transforms;
        // the normal is a direction, so pin it back
        world_normal.w = 0.;
        Ok(world_normal.normalize())
    }

    /// Computes the normal in object space.
    fn object_normal_at(&self, object_point: Tuple) -> Tuple;

    /// The object-to-world transform.
    fn transform(&self) -> Matrix;

    /// Gets the object id, unique per instance.
    fn id(&self) -> usize;

    fn shape_type(&self) -> ShapeType;

    fn material(&self) -> Material;

    fn set_material(&mut self, material: Material);
}

impl<'a> PartialEq for dyn Shape + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.shape_type() == other.shape_type() && self.id() == other.id()
    }
}

impl<'a> Debug for dyn Shape + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("type", &self.shape_type())
            .field("id", &self.id())
            .finish()
    }
}

pub mod sphere {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// A unit sphere fixed at the object-space origin. Every size, position,
    /// and orientation variation lives in `transform`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Sphere {
        id: usize,
        transform: Matrix,
        material: Material,
    }

    impl Sphere {
        /// Instantiates a new Sphere with an auto-incrementing id.
        pub fn new(transform: Matrix, material: Material) -> Self {
            static COUNTER: AtomicUsize = AtomicUsize::new(1);
            let id = COUNTER.fetch_add(1, Ordering::Relaxed);
            Self {
                id,
                transform,
                material,
            }
        }

        pub fn with_transform(mut self, transform: Matrix) -> Self {
            self.transform = transform;
            self
        }

        pub fn with_material(mut self, material: Material) -> Self {
            self.material = material;
            self
        }
    }

    impl Default for Sphere {
        fn default() -> Self {
            Self::new(Matrix::identity(), Material::default())
        }
    }

    impl Intersect for Sphere {
        /// Solves the quadratic for the ray against the unit sphere.
        /// Returns both roots in ascending order, even when they coincide
        /// (tangent) or lie behind the ray origin (negative t); an empty Vec
        /// means the ray misses.
        fn intersect(&self, ray: &Ray) -> Result<Vec<Intersection<'_>>> {
            let ray = ray.transform(self.transform.inverse()?);

            // the vector from the sphere's center (the object-space origin)
            // to the ray origin
            let sphere_to_ray = ray.origin - Tuple::point(0., 0., 0.);

            let a = ray.direction.dot(&ray.direction)?;
            let b = 2. * ray.direction.dot(&sphere_to_ray)?;
            let c = sphere_to_ray.dot(&sphere_to_ray)? - 1.;

            let discriminant = b.powi(2) - 4. * a * c;
            if discriminant < 0. {
                return Ok(vec![]);
            }

            let t1 = (-b - discriminant.sqrt()) / (2. * a);
            let t2 = (-b + discriminant.sqrt()) / (2. * a);
            Ok(vec![
                Intersection::new(t1, self),
                Intersection::new(t2, self),
            ])
        }
    }

    impl Shape for Sphere {
        fn object_normal_at(&self, object_point: Tuple) -> Tuple {
            object_point - Tuple::point(0., 0., 0.)
        }

        fn transform(&self) -> Matrix {
            self.transform.clone()
        }

        fn id(&self) -> usize {
            self.id
        }

        fn shape_type(&self) -> ShapeType {
            ShapeType::Sphere
        }

        fn material(&self) -> Material {
            self.material
        }

        fn set_material(&mut self, material: Material) {
            self.material = material;
        }
    }

}
