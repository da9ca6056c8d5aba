//! Error types for disk and sphere operations.

/// Errors that can occur while constructing or projecting points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpsError {
    /// A point was on or outside the unit circle (x² + y² ≥ 1.0).
    #[error("point outside Poincaré disk: x² + y² = {norm_sq:.6} ≥ 1.0")]
    OutsideDisk { norm_sq: f64 },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate in point ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    /// A 3D point was not on the unit sphere within tolerance.
    #[error("point off the unit sphere: X² + Y² + Z² = {norm_sq:.9}")]
    OffSphere { norm_sq: f64 },

    /// A sphere point was not in the open southern hemisphere (Z < 0).
    #[error("point not in the southern hemisphere: Z = {z:.9}")]
    OutsideHemisphere { z: f64 },
}
