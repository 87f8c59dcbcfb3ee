//! Material scatter protocol and its variants.

use crate::hittable::HitRecord;
use crate::pdf::{CosinePdf, Pdf, SpherePdf};
use crate::texture::{SolidColor, Texture};
use haze_math::sampling::{gen_f64, near_zero, random_in_unit_sphere};
use haze_math::{Point3, Ray, Vec3};
use rand::RngCore;
use std::f64::consts::PI;
use std::sync::Arc;

/// Color type alias (linear RGB, components typically in 0-1)
pub type Color = Vec3;

/// Outcome of a scatter event.
pub enum Scatter {
    /// Deterministic continuation ray; never density-weighted.
    Specular { attenuation: Color, ray: Ray },
    /// Probabilistic continuation: the integrator samples a direction
    /// from the attached density and divides by its value.
    Pdf {
        attenuation: Color,
        pdf: Arc<dyn Pdf>,
    },
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// The defaults model an emitter-only/absorbing material: no scatter,
/// zero density, black emission.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray, or return None if the ray is absorbed.
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        None
    }

    /// Evaluate this material's own preferred density at a given
    /// outgoing ray, for combining sampling strategies.
    fn scattering_pdf(&self, _ray_in: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f64 {
        0.0
    }

    /// Radiance emitted at the hit point regardless of scattering.
    fn emitted(&self, _ray_in: &Ray, _rec: &HitRecord, _u: f64, _v: f64, _p: Point3) -> Color {
        Color::ZERO
    }
}

/// Lambertian (diffuse) material.
pub struct Lambertian {
    albedo: Arc<dyn Texture>,
}

impl Lambertian {
    /// Create a Lambertian material with a solid albedo color.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo: Arc::new(SolidColor::new(albedo)),
        }
    }

    /// Create a Lambertian material from an arbitrary texture.
    pub fn from_texture(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        Some(Scatter::Pdf {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            pdf: Arc::new(CosinePdf::new(rec.normal)),
        })
    }

    fn scattering_pdf(&self, _ray_in: &Ray, rec: &HitRecord, scattered: &Ray) -> f64 {
        let cosine = rec.normal.dot(scattered.direction().normalize());
        if cosine < 0.0 {
            0.0
        } else {
            cosine / PI
        }
    }
}

/// Metal (specular) material.
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough.
    ///   Clamped to [0, 1].
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Effective fuzz after clamping.
    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let mut direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzz can cancel the reflection almost exactly; fall back to
        // the surface normal rather than emit a degenerate ray.
        if near_zero(direction) {
            direction = rec.normal;
        }

        Some(Scatter::Specular {
            attenuation: self.albedo,
            ray: Ray::new(rec.p, direction, ray_in.time()),
        })
    }
}

/// Dielectric (refractive) material such as glass or water.
pub struct Dielectric {
    /// Index of refraction
    ior: f64,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f64) -> Self {
        Self { ior }
    }

    /// Schlick's approximation for reflectance.
    pub fn reflectance(cosine: f64, ior: f64) -> f64 {
        let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        // A dielectric never absorbs; glass is white.
        let attenuation = Color::ONE;
        let refraction_ratio = if rec.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Total internal reflection, otherwise a per-sample coin flip
        // on the Schlick reflectance picks mirror vs. transmission.
        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction =
            if cannot_refract || Self::reflectance(cos_theta, refraction_ratio) > gen_f64(rng) {
                reflect(unit_direction, rec.normal)
            } else {
                refract(unit_direction, rec.normal, refraction_ratio)
            };

        Some(Scatter::Specular {
            attenuation,
            ray: Ray::new(rec.p, direction, ray_in.time()),
        })
    }
}

/// Diffuse light emitter. Never scatters; lights are one-sided.
pub struct DiffuseLight {
    emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    /// Create a diffuse light with a solid emission color.
    pub fn new(emit: Color) -> Self {
        Self {
            emit: Arc::new(SolidColor::new(emit)),
        }
    }

    /// Create a diffuse light from an arbitrary texture.
    pub fn from_texture(emit: Arc<dyn Texture>) -> Self {
        Self { emit }
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, _ray_in: &Ray, rec: &HitRecord, u: f64, v: f64, p: Point3) -> Color {
        if rec.front_face {
            self.emit.value(u, v, p)
        } else {
            Color::ZERO
        }
    }
}

/// Isotropic volumetric phase function.
///
/// Scatters uniformly over the sphere of directions, which is the
/// physically-correct density for an isotropic medium.
pub struct Isotropic {
    albedo: Arc<dyn Texture>,
}

impl Isotropic {
    /// Create an isotropic phase function with a solid albedo color.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo: Arc::new(SolidColor::new(albedo)),
        }
    }

    /// Create an isotropic phase function from an arbitrary texture.
    pub fn from_texture(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }
}

impl Material for Isotropic {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        Some(Scatter::Pdf {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            pdf: Arc::new(SpherePdf),
        })
    }

    fn scattering_pdf(&self, _ray_in: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f64 {
        1.0 / (4.0 * PI)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface with the given ratio of
/// refraction indices.
#[inline]
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
