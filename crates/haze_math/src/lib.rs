//! Math primitives for the haze path tracer.
//!
//! Everything here is double precision: the renderer works in `f64`
//! throughout, so `Vec3` is glam's `DVec3`.

pub use glam::DVec3 as Vec3;

/// Semantic alias for positions.
pub type Point3 = Vec3;

mod aabb;
mod interval;
mod ray;
pub mod sampling;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
