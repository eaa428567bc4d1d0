use crate::{Color, Tuple};

/// A point light source: a position with no size, and an intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Tuple::point(0., 0., 0.), Color::white())
    }
}
