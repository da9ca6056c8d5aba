//! # Stereographic projection
//!
//! Lifts the Poincaré disk onto the unit sphere S² ⊂ ℝ³. The disk sits in the
//! equatorial plane and is projected from the north pole (0, 0, 1), so its
//! interior lands on the open southern hemisphere.
//!
//! ## Conversion formulas
//!
//! ```text
//! Disk → Sphere:  d = 1 + x² + y²
//!                 (X, Y, Z) = (2x/d, 2y/d, (x² + y² − 1)/d)
//! Sphere → Disk:  (x, y) = (X/(1 − Z), Y/(1 − Z))
//! ```
//!
//! ## Safety invariant
//!
//! For every valid disk point d > 1, so the forward map never divides by
//! zero, and the image satisfies X² + Y² + Z² = 1 with Z < 0.

use crate::error::OpsError;
use crate::{Point2D, Point3D};

/// Tolerance for "on the unit sphere" checks.
pub const SPHERE_EPS: f64 = 1e-9;

// ─────────────────────────────────────────────
// Disk → Sphere
// ─────────────────────────────────────────────

/// Project a disk point onto the unit sphere.
///
/// ```text
/// X = 2x / (1 + x² + y²)
/// Y = 2y / (1 + x² + y²)
/// Z = (x² + y² − 1) / (1 + x² + y²)
/// ```
///
/// The center maps to the south pole (0, 0, −1).
#[inline]
pub fn stereographic(p: Point2D) -> Point3D {
    let norm_sq = p.norm_sq();
    let denom = 1.0 + norm_sq;
    Point3D::new(
        2.0 * p.x() / denom,
        2.0 * p.y() / denom,
        (norm_sq - 1.0) / denom,
    )
}

/// Validate raw coordinates, then project.
///
/// # Errors
///
/// Returns [`OpsError::OutsideDisk`] if x² + y² ≥ 1.0, or
/// [`OpsError::NonFinite`] for NaN/∞ input.
pub fn project_xy(x: f64, y: f64) -> Result<Point3D, OpsError> {
    Point2D::new(x, y).map(stereographic)
}

// ─────────────────────────────────────────────
// Sphere → Disk
// ─────────────────────────────────────────────

/// Map a point of the open southern hemisphere back to the disk.
///
/// ```text
/// x = X / (1 − Z)
/// y = Y / (1 − Z)
/// ```
///
/// # Errors
///
/// Returns [`OpsError::OffSphere`] if |X² + Y² + Z² − 1| > [`SPHERE_EPS`],
/// [`OpsError::OutsideHemisphere`] if Z ≥ 0 (the image would not be inside
/// the disk).
pub fn inverse_stereographic(p: Point3D) -> Result<Point2D, OpsError> {
    let norm_sq = p.norm_sq();
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > SPHERE_EPS {
        return Err(OpsError::OffSphere { norm_sq });
    }
    if p.z >= 0.0 {
        return Err(OpsError::OutsideHemisphere { z: p.z });
    }
    let denom = 1.0 - p.z;
    Point2D::new(p.x / denom, p.y / denom)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
