//! Homogeneous participating medium (fog, smoke).

use crate::hittable::{HitRecord, Hittable};
use crate::material::{Color, Isotropic, Material};
use crate::texture::Texture;
use crate::SceneError;
use haze_math::sampling::gen_f64;
use haze_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// A constant-density medium confined to the interior of a boundary
/// shape. Rays crossing the boundary interact probabilistically: the
/// free-flight distance is drawn from the Beer-Lambert extinction
/// distribution, and every interaction scatters through an isotropic
/// phase function.
pub struct ConstantMedium {
    boundary: Arc<dyn Hittable>,
    phase_function: Arc<dyn Material>,
    neg_inv_density: f64,
}

impl ConstantMedium {
    /// Create a medium bounded by `boundary` with the given density
    /// and scattering albedo texture.
    ///
    /// Fails when `density` is not strictly positive.
    pub fn new(
        boundary: Arc<dyn Hittable>,
        density: f64,
        albedo: Arc<dyn Texture>,
    ) -> Result<Self, SceneError> {
        if density <= 0.0 {
            return Err(SceneError::InvalidDensity(density));
        }

        Ok(Self {
            boundary,
            phase_function: Arc::new(Isotropic::from_texture(albedo)),
            neg_inv_density: -1.0 / density,
        })
    }

    /// Create a medium with a solid scattering color.
    pub fn from_color(
        boundary: Arc<dyn Hittable>,
        density: f64,
        color: Color,
    ) -> Result<Self, SceneError> {
        if density <= 0.0 {
            return Err(SceneError::InvalidDensity(density));
        }

        Ok(Self {
            boundary,
            phase_function: Arc::new(Isotropic::new(color)),
            neg_inv_density: -1.0 / density,
        })
    }

    /// Intersection with an explicit uniform draw `u` in [0, 1).
    ///
    /// The `Hittable` impl feeds this from the thread rng; tests drive
    /// it with a forced draw to make the free-flight distance exact.
    fn hit_with_sample<'a>(
        &'a self,
        ray: &Ray,
        ray_t: Interval,
        u: f64,
        rec: &mut HitRecord<'a>,
    ) -> bool {
        let mut rec1 = HitRecord::default();
        let mut rec2 = HitRecord::default();

        // Entry point over the unrestricted interval, then the exit
        // point starting just past the entry.
        if !self.boundary.hit(ray, Interval::UNIVERSE, &mut rec1) {
            return false;
        }
        if !self
            .boundary
            .hit(ray, Interval::new(rec1.t + 0.0001, f64::INFINITY), &mut rec2)
        {
            return false;
        }

        log::trace!("medium boundary interval: [{}, {}]", rec1.t, rec2.t);

        if rec1.t < ray_t.min {
            rec1.t = ray_t.min;
        }
        if rec2.t > ray_t.max {
            rec2.t = ray_t.max;
        }

        if rec1.t >= rec2.t {
            return false;
        }

        // Never sample behind the ray origin.
        if rec1.t < 0.0 {
            rec1.t = 0.0;
        }

        let ray_length = ray.direction().length();
        let distance_inside_boundary = (rec2.t - rec1.t) * ray_length;
        // Guard ln(0): the draw is clamped away from exactly zero.
        let hit_distance = self.neg_inv_density * u.max(f64::MIN_POSITIVE).ln();

        // Larger density, shorter expected free flight.
        if hit_distance > distance_inside_boundary {
            return false;
        }

        rec.t = rec1.t + hit_distance / ray_length;
        rec.p = ray.at(rec.t);

        log::trace!("medium interaction: distance={hit_distance}, t={}", rec.t);

        // Both are physically meaningless for an isotropic medium.
        rec.normal = Vec3::new(1.0, 0.0, 0.0);
        rec.front_face = true;

        rec.u = 0.0;
        rec.v = 0.0;
        rec.material = self.phase_function.as_ref();

        true
    }
}

impl Hittable for ConstantMedium {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let u = gen_f64(&mut rand::thread_rng());
        self.hit_with_sample(ray, ray_t, u, rec)
    }

    fn bounding_box(&self) -> Aabb {
        self.boundary.bounding_box()
    }
}
