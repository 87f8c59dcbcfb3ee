//! Color lookup capability consumed by materials.

use crate::Color;
use haze_math::Point3;

/// Trait for anything that can answer "what color is this surface point".
///
/// Materials never inspect a texture beyond this single operation.
pub trait Texture: Send + Sync {
    fn value(&self, u: f64, v: f64, p: Point3) -> Color;
}

/// A texture with the same color everywhere.
#[derive(Debug, Clone)]
pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f64, _v: f64, _p: Point3) -> Color {
        self.albedo
    }
}
