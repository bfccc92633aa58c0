//! Point generation and circle classification.

use serde::{Deserialize, Serialize};

use super::region::{Circle, Region};
use crate::engine::rng::SimRng;
use crate::error::PiResult;

/// One sampled point and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Whether the point lies inside (or on) the circle.
    pub inside: bool,
}

/// Draw an integer point uniformly from the region's inclusive bounds.
///
/// Each coordinate is drawn independently; both endpoints are reachable.
pub fn generate_point(region: &Region, rng: &mut SimRng) -> (i64, i64) {
    let x = rng.gen_range_i64_inclusive(region.left(), region.right());
    let y = rng.gen_range_i64_inclusive(region.top(), region.bottom());
    (x, y)
}

/// Whether `(x, y)` is within the circle, boundary included.
///
/// Equivalent to `sqrt((x-cx)² + (y-cy)²) <= r`, evaluated on doubled
/// integer coordinates so the boundary tie-break is exact.
#[must_use]
pub fn classify(x: i64, y: i64, circle: &Circle) -> bool {
    let (cx2, cy2) = circle.center_doubled();
    let dx = 2 * i128::from(x) - i128::from(cx2);
    let dy = 2 * i128::from(y) - i128::from(cy2);
    let d = i128::from(circle.diameter());
    dx * dx + dy * dy <= d * d
}

/// A region paired with its inscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    region: Region,
    circle: Circle,
}

impl Sampler {
    /// Create a sampler for a square region.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PiError::InvalidRegion`] if the region is not square.
    pub fn new(region: Region) -> PiResult<Self> {
        let circle = region.inscribed_circle()?;
        Ok(Self { region, circle })
    }

    /// The sampling region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// The inscribed circle.
    #[must_use]
    pub const fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Draw and classify one point.
    pub fn sample(&self, rng: &mut SimRng) -> Sample {
        let (x, y) = generate_point(&self.region, rng);
        Sample {
            x,
            y,
            inside: classify(x, y, &self.circle),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn reference_region() -> Region {
        Region::new(20, 280, 20, 280).unwrap()
    }

    fn reference_circle() -> Circle {
        reference_region().inscribed_circle().unwrap()
    }

    #[test]
    fn test_classify_center_inside() {
        assert!(classify(150, 150, &reference_circle()));
    }

    #[test]
    fn test_classify_corner_outside() {
        // distance ≈ 183.8 > 130
        assert!(!classify(20, 20, &reference_circle()));
        assert!(!classify(280, 280, &reference_circle()));
    }

    #[test]
    fn test_classify_boundary_inclusive() {
        // distance == 130 exactly
        let circle = reference_circle();
        assert!(classify(150, 20, &circle));
        assert!(classify(150, 280, &circle));
        assert!(classify(20, 150, &circle));
        assert!(classify(280, 150, &circle));
    }

    #[test]
    fn test_classify_just_past_boundary() {
        assert!(!classify(150, 19, &reference_circle()));
    }

    #[test]
    fn test_classify_zero_radius() {
        let circle = Circle::new(4, 4, 0).unwrap();
        assert!(classify(4, 4, &circle));
        assert!(!classify(4, 5, &circle));
        assert!(!classify(3, 4, &circle));
    }

    #[test]
    fn test_classify_half_integer_center() {
        // Side 5: center (2.5, 2.5), radius 2.5
        let circle = Region::new(0, 5, 0, 5).unwrap().inscribed_circle().unwrap();
        assert!(classify(2, 2, &circle));
        assert!(classify(1, 1, &circle));
        assert!(classify(4, 4, &circle));
        // 2.5² + 0.5² = 6.5 > 6.25
        assert!(!classify(0, 2, &circle));
        assert!(!classify(5, 3, &circle));
    }

    #[test]
    fn test_classify_matches_distance_formula_on_grid() {
        let circle = reference_circle();
        let (cx, cy) = circle.center();
        let r = circle.radius();
        for x in (0..=300).step_by(5) {
            for y in (0..=300).step_by(5) {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                let expected = dx * dx + dy * dy <= r * r;
                assert_eq!(classify(x, y, &circle), expected, "Mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_classify_extreme_points() {
        let circle = reference_circle();
        assert!(!classify(i64::MAX, i64::MAX, &circle));
        assert!(!classify(i64::MIN, 150, &circle));

        let m = crate::estimator::region::MAX_COORDINATE;
        let wide = Circle::new(m, m, m).unwrap();
        assert!(classify(m, 0, &wide));
        assert!(!classify(i64::MAX, m, &wide));
    }

    #[test]
    fn test_generate_point_in_bounds() {
        let region = reference_region();
        let mut rng = SimRng::new(42);
        for _ in 0..10_000 {
            let (x, y) = generate_point(&region, &mut rng);
            assert!(region.contains(x, y), "({x}, {y}) escaped the region");
        }
    }

    #[test]
    fn test_generate_point_reaches_endpoints() {
        let region = Region::new(0, 3, 10, 13).unwrap();
        let mut rng = SimRng::new(42);
        let points: Vec<(i64, i64)> = (0..2000).map(|_| generate_point(&region, &mut rng)).collect();

        assert!(points.iter().any(|&(x, _)| x == 0));
        assert!(points.iter().any(|&(x, _)| x == 3));
        assert!(points.iter().any(|&(_, y)| y == 10));
        assert!(points.iter().any(|&(_, y)| y == 13));
    }

    #[test]
    fn test_sampler_rejects_rectangle() {
        let region = Region::new(0, 10, 0, 20).unwrap();
        assert!(Sampler::new(region).is_err());
    }

    #[test]
    fn test_sampler_sample_consistent_with_classify() {
        let sampler = Sampler::new(reference_region()).unwrap();
        let mut rng = SimRng::new(9);
        for _ in 0..500 {
            let s = sampler.sample(&mut rng);
            assert!(sampler.region().contains(s.x, s.y));
            assert_eq!(s.inside, classify(s.x, s.y, sampler.circle()));
        }
    }
}
