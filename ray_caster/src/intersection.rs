use crate::{shape::Shape, Matrix, Result, Tuple};

/// Ray.origin is a point, Ray.direction is a vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Origin should be a point, direction should be a vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter t along the ray.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    pub fn transform(&self, matrix: Matrix) -> Self {
        let origin = matrix.clone() * self.origin;
        let direction = matrix * self.direction;
        Self { origin, direction }
    }
}

/// The seam between rays and whatever geometry they can strike. Spheres are
/// the only variant today; new primitives implement this without touching
/// Ray or World.
pub trait Intersect {
    /// Computes the intersections of the given ray with this object.
    fn intersect(&self, ray: &Ray) -> Result<Vec<Intersection<'_>>>;
}

/// One ray/object crossing. Borrows the object it hit from its owner, so a
/// scene mutation made before casting is always what shading observes.
/// t may be negative for crossings behind the ray origin.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a dyn Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a dyn Shape) -> Self {
        Self { t, object }
    }

    /// Precomputes the world-space point where the intersection occurred,
    /// the eye vector (pointing back toward the camera), and the surface
    /// normal. When the ray starts inside the object the normal is flipped
    /// and `inside` is set, so shading always sees an eye-facing normal.
    pub fn prepare_computations(&self, ray: &Ray) -> Result<Computations<'a>> {
        let point = ray.position(self.t);
        let eye_vector = -ray.direction;
        let normal_vector = self.object.normal_at(point)?;

        // a negative dot product means the normal points away from the eye
        let (inside, normal_vector) = if normal_vector.dot(&eye_vector)? < 0. {
            (true, -normal_vector)
        } else {
            (false, normal_vector)
        };

        Ok(Computations {
            t: self.t,
            object: self.object,
            point,
            eye_vector,
            normal_vector,
            inside,
        })
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && self.object == other.object
    }
}

/// Everything shading needs about one intersection, precomputed.
#[derive(Debug, Clone, Copy)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a dyn Shape,
    pub point: Tuple,
    pub eye_vector: Tuple,
    pub normal_vector: Tuple,
    pub inside: bool,
}

/// Picks the intersection a ray actually hits: the one with the smallest
/// non-negative t. Ties keep the first one encountered; None means every
/// intersection lies behind the ray origin.
pub fn hit<'a>(intersections: &[Intersection<'a>]) -> Option<Intersection<'a>> {
    let mut nearest: Option<Intersection> = None;
    for intersection in intersections {
        if intersection.t < 0. {
            continue;
        }
        match nearest {
            Some(found) if found.t <= intersection.t => {}
            _ => nearest = Some(*intersection),
        }
    }
    nearest
}
