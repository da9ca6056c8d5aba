//! Orthographic camera for the static 3D scene.
//!
//! The camera looks at the origin from elevation `elev` above the XY plane
//! and azimuth `azim` around the Z axis. A data-space point is first
//! normalised into the cube [−1, 1]³ using the scene bounds, then split into
//! screen coordinates (right, up) and a depth along the viewing direction.
//!
//! ```text
//! eye   = ( cos ε·cos φ,  cos ε·sin φ,  sin ε)
//! right = (−sin φ,        cos φ,        0    )
//! up    = (−sin ε·cos φ, −sin ε·sin φ,  cos ε)
//! ```

use hyperdisk_ops::Point3D;

/// Axis-aligned data bounds mapped onto the view cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3D,
    pub max: Point3D,
}

impl Bounds {
    /// Box holding the whole southern hemisphere: x, y ∈ [−1, 1], z ∈ [−1, 0].
    pub const SOUTHERN_HEMISPHERE: Self = Self {
        min: Point3D::new(-1.0, -1.0, -1.0),
        max: Point3D::new(1.0, 1.0, 0.0),
    };

    /// Map a data point into [−1, 1]³.
    pub fn normalise(&self, p: Point3D) -> Point3D {
        Point3D::new(
            unit(p.x, self.min.x, self.max.x),
            unit(p.y, self.min.y, self.max.y),
            unit(p.z, self.min.z, self.max.z),
        )
    }
}

fn unit(v: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span <= 0.0 {
        return 0.0;
    }
    2.0 * (v - lo) / span - 1.0
}

/// A point after projection: screen-plane offsets and distance toward the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub right: f64,
    pub up: f64,
    /// Larger is closer to the viewer.
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Point3D,
    right: Point3D,
    up: Point3D,
    bounds: Bounds,
}

impl Camera {
    /// Default 3D plot view: 30° elevation, −60° azimuth.
    pub const DEFAULT_ELEV_DEG: f64 = 30.0;
    pub const DEFAULT_AZIM_DEG: f64 = -60.0;

    pub fn new(elev_deg: f64, azim_deg: f64, bounds: Bounds) -> Self {
        let (se, ce) = elev_deg.to_radians().sin_cos();
        let (sa, ca) = azim_deg.to_radians().sin_cos();
        Self {
            eye: Point3D::new(ce * ca, ce * sa, se),
            right: Point3D::new(-sa, ca, 0.0),
            up: Point3D::new(-se * ca, -se * sa, ce),
            bounds,
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn project(&self, p: Point3D) -> Projected {
        let q = self.bounds.normalise(p);
        Projected {
            right: dot(q, self.right),
            up: dot(q, self.up),
            depth: dot(q, self.eye),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ELEV_DEG,
            Self::DEFAULT_AZIM_DEG,
            Bounds::SOUTHERN_HEMISPHERE,
        )
    }
}

#[inline]
fn dot(a: Point3D, b: Point3D) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}
