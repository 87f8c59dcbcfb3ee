//! Scene construction errors.

use thiserror::Error;

/// Errors raised while assembling a scene.
///
/// Light transport itself is infallible: "no hit" and "no scatter" are
/// ordinary outcomes, not errors. Only construction-time invariant
/// violations are reported here.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("medium density must be positive, got {0}")]
    InvalidDensity(f64),
}
