//! haze - CPU path tracing core.
//!
//! Monte Carlo light transport: geometric intersection against shapes
//! and bounding boxes, material scattering with importance-sampled
//! densities, and homogeneous participating media.

mod camera;
mod error;
mod hittable;
mod material;
mod medium;
mod pdf;
mod renderer;
mod sphere;
mod texture;

pub use camera::Camera;
pub use error::SceneError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, DiffuseLight, Isotropic, Lambertian, Material, Metal, Scatter};
pub use medium::ConstantMedium;
pub use pdf::{CosinePdf, Onb, Pdf, SpherePdf};
pub use renderer::{
    color_to_rgba, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, RenderConfig,
};
pub use sphere::Sphere;
pub use texture::{SolidColor, Texture};

/// Re-export common math types from haze_math
pub use haze_math::{Aabb, Interval, Point3, Ray, Vec3};
