//! Uniform sampling of the open unit disk.
//!
//! Points are drawn in polar form with a square-root radius correction:
//!
//! ```text
//! r = √u₁        u₁ ~ U[0, 1)
//! θ = 2π·u₂      u₂ ~ U[0, 1)
//! (x, y) = (r·cos θ, r·sin θ)
//! ```
//!
//! The area of a disk of radius r grows as r², so drawing r uniformly would
//! pile points up near the center. Taking √u₁ makes P(‖p‖ < r) = r², which is
//! exactly the area fraction.
//!
//! The random source is always passed in by the caller. Production code uses
//! an ordinary `StdRng`; tests hand in a seeded one.

use std::f64::consts::TAU;

use rand::Rng;

use crate::Point2D;

/// Draw one point uniformly from the open unit disk.
///
/// r = √u₁ < 1 for u₁ ∈ [0, 1), but r·cos θ and r·sin θ are rounded
/// independently, so a draw with u₁ within an ulp of 1.0 can land on the
/// circle. Such draws are repeated.
pub fn sample_point<R: Rng + ?Sized>(rng: &mut R) -> Point2D {
    loop {
        let r = rng.gen::<f64>().sqrt();
        let theta = TAU * rng.gen::<f64>();
        if let Ok(p) = Point2D::new(r * theta.cos(), r * theta.sin()) {
            return p;
        }
    }
}

/// Draw `n` independent points uniformly from the open unit disk.
///
/// `n = 0` yields an empty vector.
pub fn sample_disk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point2D> {
    let points: Vec<Point2D> = (0..n).map(|_| sample_point(rng)).collect();
    tracing::debug!(count = points.len(), "sampled disk points");
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_disk(0, &mut rng).is_empty());
    }

    #[test]
    fn returns_exactly_n_points() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(sample_disk(20, &mut rng).len(), 20);
        assert_eq!(sample_disk(1, &mut rng).len(), 1);
    }

    #[test]
    fn all_points_strictly_inside_disk() {
        let mut rng = StdRng::seed_from_u64(3);
        for p in sample_disk(10_000, &mut rng) {
            assert!(p.norm_sq() < 1.0, "({}, {}) outside disk", p.x(), p.y());
        }
    }

    #[test]
    fn same_seed_same_points() {
        let a = sample_disk(50, &mut StdRng::seed_from_u64(42));
        let b = sample_disk(50, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_draws_map_to_origin() {
        // A source that only ever yields 0 gives u₁ = u₂ = 0 → r = 0
        let mut rng = StepRng::new(0, 0);
        let p = sample_point(&mut rng);
        assert_eq!(p, Point2D::origin());
    }

    #[test]
    fn radius_distribution_matches_area() {
        // P(‖p‖ < 0.5) = 0.25 for a uniform disk; without the √ it would be 0.5
        let mut rng = StdRng::seed_from_u64(7);
        let n = 40_000;
        let inner = sample_disk(n, &mut rng)
            .iter()
            .filter(|p| p.norm_sq() < 0.25)
            .count();
        let frac = inner as f64 / n as f64;
        assert!((frac - 0.25).abs() < 0.015, "inner fraction = {frac:.4}");
    }

    #[test]
    fn angle_distribution_is_balanced() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 40_000;
        let points = sample_disk(n, &mut rng);
        let mut quadrants = [0usize; 4];
        for p in &points {
            let q = match (p.x() >= 0.0, p.y() >= 0.0) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            quadrants[q] += 1;
        }
        for (i, &count) in quadrants.iter().enumerate() {
            let frac = count as f64 / n as f64;
            assert!((frac - 0.25).abs() < 0.015, "quadrant {i} fraction = {frac:.4}");
        }
    }
}
