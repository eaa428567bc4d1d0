use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{equal, error::RayCasterError, Result};

/// Homogeneous 4-component value: w = 1 marks a point, w = 0 a free vector.
/// Point/vector arithmetic preserves the tag (point - point = vector,
/// point + vector = point, and so on) through plain component arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    pub fn is_point(&self) -> bool {
        equal(self.w, 1.0)
    }

    pub fn is_vector(&self) -> bool {
        equal(self.w, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + self.w.powi(2)).sqrt()
    }

    /// Scales the tuple to unit length.
    ///
    /// Precondition: the magnitude must not be zero. Normalizing a
    /// zero-length vector divides by zero and produces non-finite
    /// components.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
            w: self.w / magnitude,
        }
    }

    pub fn dot(&self, other: &Self) -> Result<f64> {
        // dotting anything but two vectors is a modeling bug, so surface it
        // as an error instead of a number that happens to include w
        if !self.is_vector() || !other.is_vector() {
            return Err(RayCasterError::NonVectorTuple);
        }

        // w is 0 on both sides, nothing to add for it
        Ok(self.x * other.x + self.y * other.y + self.z * other.z)
    }

    pub fn cross(&self, other: &Self) -> Result<Self> {
        if !self.is_vector() || !other.is_vector() {
            return Err(RayCasterError::NonVectorTuple);
        }

        Ok(Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// Reflects this vector around the given normal.
    pub fn reflect(self, normal: Self) -> Result<Self> {
        Ok(self - normal * 2. * self.dot(&normal)?)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        equal(self.x, other.x)
            && equal(self.y, other.y)
            && equal(self.z, other.z)
            && equal(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl Sub for Tuple {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn tuple_with_w_1_is_a_point() {
        let a = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert!(a.is_point());
        assert!(!a.is_vector());
    }

    #[test]
    fn tuple_with_w_0_is_a_vector() {
        let a = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert!(a.is_vector());
        assert!(!a.is_point());
    }

    #[test]
    fn point_factory_sets_w_to_1() {
        let p = Tuple::point(4.0, -4.0, 3.0);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn vector_factory_sets_w_to_0() {
        let v = Tuple::vector(4.0, -4.0, 3.0);
        assert_eq!(v.w, 0.0);
    }

    #[test]
    fn nearly_identical_tuples_are_equal() {
        let a = Tuple::point(1.0, 2.0, -3.0);
        let b = Tuple::point(1.0 + 1e-6, 2.0, -3.0);
        assert_eq!(a, b);
    }

    #[test]
    fn different_tuples_are_not_equal() {
        let a = Tuple::point(1.0, 1.0, -1.0);
        let b = Tuple::point(1.0, 1.0, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn adding_point_and_vector_gives_point() {
        let a1 = Tuple::new(3.0, -2.0, 5.0, 1.0);
        let a2 = Tuple::new(-2.0, 3.0, 1.0, 0.0);
        let sum = a1 + a2;
        assert_eq!(sum, Tuple::new(1.0, 1.0, 6.0, 1.0));
        assert!(sum.is_point());
    }

    #[test]
    fn subtracting_two_points_gives_vector() {
        let p1 = Tuple::point(3.0, 2.0, 1.0);
        let p2 = Tuple::point(5.0, 6.0, 7.0);
        assert_eq!(p1 - p2, Tuple::vector(-2.0, -4.0, -6.0));
    }

    #[test]
    fn subtracting_point_from_itself_gives_zero_vector() {
        let p = Tuple::point(3.0, 2.0, 1.0);
        assert_eq!(p - p, Tuple::vector(0.0, 0.0, 0.0));
    }

    #[test]
    fn subtracting_vector_from_point_gives_point() {
        let p = Tuple::point(3.0, 2.0, 1.0);
        let v = Tuple::vector(5.0, 6.0, 7.0);
        let difference = p - v;
        assert_eq!(difference, Tuple::point(-2.0, -4.0, -6.0));
        assert!(difference.is_point());
    }

    #[test]
    fn subtracting_two_vectors_gives_vector() {
        let v1 = Tuple::vector(3.0, 2.0, 1.0);
        let v2 = Tuple::vector(5.0, 6.0, 7.0);
        assert_eq!(v1 - v2, Tuple::vector(-2.0, -4.0, -6.0));
    }

    #[test]
    fn subtracting_vector_from_zero_vector_negates_it() {
        let zero = Tuple::vector(0.0, 0.0, 0.0);
        let v = Tuple::vector(1.0, -2.0, 3.0);
        assert_eq!(zero - v, Tuple::vector(-1.0, 2.0, -3.0));
    }

    #[test]
    fn negating_a_tuple() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn multiplying_tuple_by_scalar() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
    }

    #[test]
    fn multiplying_tuple_by_fraction() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn dividing_tuple_by_scalar() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn magnitude_of_unit_vectors() {
        assert_eq!(Tuple::vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple::vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple::vector(0.0, 0.0, 1.0).magnitude(), 1.0);
    }

    #[test]
    fn magnitude_of_non_unit_vectors() {
        let v = Tuple::vector(1.0, 2.0, 3.0);
        assert!(equal(v.magnitude(), 14.0_f64.sqrt()));

        let v = Tuple::vector(-1.0, -2.0, -3.0);
        assert!(equal(v.magnitude(), 14.0_f64.sqrt()));
    }

    #[test]
    fn normalizing_vectors() {
        let v = Tuple::vector(4.0, 0.0, 0.0);
        assert_eq!(v.normalize(), Tuple::vector(1.0, 0.0, 0.0));

        let v = Tuple::vector(1.0, 2.0, 3.0);
        assert_eq!(v.normalize(), Tuple::vector(0.26726, 0.53452, 0.80178));
    }

    #[test]
    fn magnitude_of_normalized_vector_is_1() {
        let v = Tuple::vector(1.0, 2.0, 3.0);
        assert!(equal(v.normalize().magnitude(), 1.0));
    }

    #[test]
    fn dot_product_of_two_vectors() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(&b).unwrap(), 20.0);
    }

    #[test]
    fn dot_product_with_a_point_is_an_error() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::point(2.0, 3.0, 4.0);
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn cross_product_of_two_vectors() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross(&b).unwrap(), Tuple::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a).unwrap(), Tuple::vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn cross_product_with_a_point_is_an_error() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::point(2.0, 3.0, 4.0);
        assert!(a.cross(&b).is_err());
    }

    #[test]
    fn reflecting_vector_approaching_at_45_degrees() {
        let v = Tuple::vector(1., -1., 0.);
        let normal = Tuple::vector(0., 1., 0.);
        assert_eq!(v.reflect(normal).unwrap(), Tuple::vector(1., 1., 0.));
    }

    #[test]
    fn reflecting_vector_off_slanted_surface() {
        let v = Tuple::vector(0., -1., 0.);
        let val = 2.0_f64.sqrt() / 2.;
        let normal = Tuple::vector(val, val, 0.);
        assert_eq!(v.reflect(normal).unwrap(), Tuple::vector(1., 0., 0.));
    }
}
