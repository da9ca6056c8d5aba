//! # hyperdisk-ops
//!
//! Geometry for the Poincaré disk demo: point types, uniform sampling of the
//! open unit disk, and the stereographic projection onto the unit sphere.
//!
//! ## Core operations
//!
//! | Function | Direction | Purpose |
//! |---|---|---|
//! | [`sampler::sample_disk`] | RNG → Disk | Uniformly distributed disk points |
//! | [`stereo::stereographic`] | Disk → S² | Lift a disk point onto the sphere |
//! | [`stereo::inverse_stereographic`] | S² → Disk | Undo the lift |
//! | [`Point2D::distance`] | Disk × Disk → ℝ⁺ | Euclidean distance (graph threshold) |
//! | [`Point2D::hyperbolic_distance`] | Disk × Disk → ℝ⁺ | Poincaré metric distance |
//!
//! ## Safety invariant
//!
//! Every [`Point2D`] satisfies **x² + y² < 1.0** (open unit disk). The only
//! way to obtain one is through a validating constructor or the sampler.

pub mod error;
pub mod sampler;
pub mod stereo;

use serde::{Deserialize, Serialize};

pub use error::OpsError;
pub use sampler::{sample_disk, sample_point};
pub use stereo::{inverse_stereographic, project_xy, stereographic};

// ─────────────────────────────────────────────
// Point2D
// ─────────────────────────────────────────────

/// A point of the Poincaré disk.
/// Invariant: x² + y² < 1.0 must hold at all times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// Validate raw coordinates and build a disk point.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::NonFinite`] for NaN/∞ coordinates and
    /// [`OpsError::OutsideDisk`] if x² + y² ≥ 1.0.
    pub fn new(x: f64, y: f64) -> Result<Self, OpsError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(OpsError::NonFinite { x, y });
        }
        let norm_sq = x * x + y * y;
        if norm_sq >= 1.0 {
            return Err(OpsError::OutsideDisk { norm_sq });
        }
        Ok(Self { x, y })
    }

    /// Center of the disk.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// x² + y², always < 1.0.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance between two disk points.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Hyperbolic distance in the Poincaré disk model.
    ///
    /// ```text
    /// d(u, v) = acosh(1 + 2‖u−v‖² / ((1−‖u‖²)(1−‖v‖²)))
    /// ```
    pub fn hyperbolic_distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let diff_sq = dx * dx + dy * dy;
        let denom = (1.0 - self.norm_sq()) * (1.0 - other.norm_sq());

        // Clamp to avoid NaN from floating-point drift near the boundary
        let arg = (1.0 + 2.0 * diff_sq / denom).max(1.0);
        arg.acosh()
    }
}

impl TryFrom<[f64; 2]> for Point2D {
    type Error = OpsError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

// ─────────────────────────────────────────────
// Point3D
// ─────────────────────────────────────────────

/// A point in 3D Euclidean space, normally the stereographic image of a
/// [`Point2D`] and therefore on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
