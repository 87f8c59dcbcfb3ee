//! Sampling densities over outgoing directions.
//!
//! A `Pdf` is the capability a probabilistic scatter outcome carries:
//! draw a direction, and evaluate the density at a direction. The
//! integrator divides by the sampled density to keep the Monte Carlo
//! estimate unbiased. Materials never look inside a density beyond
//! these two operations, so light-sampling and mixture strategies can
//! be supplied from outside without touching the materials.

use haze_math::sampling::{random_cosine_direction, random_unit_vector};
use haze_math::Vec3;
use rand::RngCore;
use std::f64::consts::PI;

/// A probability density function over directions.
pub trait Pdf: Send + Sync {
    /// Density at the given direction (need not be normalized input).
    fn value(&self, direction: Vec3) -> f64;

    /// Draw a direction distributed according to this density.
    fn sample(&self, rng: &mut dyn RngCore) -> Vec3;
}

/// Orthonormal basis about a normal vector.
pub struct Onb {
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Onb {
    /// Build a basis whose w axis is the (unit) direction of `n`.
    pub fn new(n: Vec3) -> Self {
        let w = n.normalize();

        // Branchless tangent construction (Duff et al.)
        let sign = if w.z >= 0.0 { 1.0 } else { -1.0 };
        let a = -1.0 / (sign + w.z);
        let b = w.x * w.y * a;

        let u = Vec3::new(1.0 + sign * w.x * w.x * a, sign * b, -sign * w.x);
        let v = Vec3::new(b, sign + w.y * w.y * a, -w.y);

        Self { u, v, w }
    }

    pub fn w(&self) -> Vec3 {
        self.w
    }

    /// Transform a vector from this local basis into world space.
    pub fn transform(&self, local: Vec3) -> Vec3 {
        local.x * self.u + local.y * self.v + local.z * self.w
    }
}

/// Cosine-weighted hemisphere density about a surface normal.
pub struct CosinePdf {
    uvw: Onb,
}

impl CosinePdf {
    pub fn new(normal: Vec3) -> Self {
        Self {
            uvw: Onb::new(normal),
        }
    }
}

impl Pdf for CosinePdf {
    fn value(&self, direction: Vec3) -> f64 {
        let cosine = direction.normalize().dot(self.uvw.w());
        (cosine / PI).max(0.0)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.uvw.transform(random_cosine_direction(rng))
    }
}

/// Uniform density over the whole sphere of directions.
pub struct SpherePdf;

impl Pdf for SpherePdf {
    fn value(&self, _direction: Vec3) -> f64 {
        1.0 / (4.0 * PI)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        random_unit_vector(rng)
    }
}
