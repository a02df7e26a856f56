use super::{Point2, TOLERANCE};

/// Intersection of a line segment with a full circle in 2D.
///
/// The segment is parameterized as `p0 + t * (p1 - p0)` for `t` in `[0, 1]`
/// and substituted into `|X - center|² = radius²`, giving
/// `a·t² + b·t + c = 0`.
///
/// A discriminant within `disc_tolerance` of zero is treated as a double
/// root (tangency). When there are two roots, the `+√D` root is emitted
/// before the `−√D` root; the order carries no geometric meaning.
///
/// Returns `(point, t)` pairs for every root with `0 <= t <= 1`. A segment
/// whose squared length is below [`TOLERANCE`]² yields no intersections.
#[must_use]
pub fn circle_segment_intersect_2d(
    center: &Point2,
    radius: f64,
    p0: &Point2,
    p1: &Point2,
    disc_tolerance: f64,
) -> Vec<(Point2, f64)> {
    let mut results = Vec::with_capacity(2);

    let d = p1 - p0;
    let a = d.norm_squared();
    if a < TOLERANCE * TOLERANCE {
        return results;
    }

    let f = p0 - center;
    let b = 2.0 * d.dot(&f);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    let roots = if discriminant.abs() <= disc_tolerance {
        // Tangent case: double root.
        vec![-b / (2.0 * a)]
    } else if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        vec![(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)]
    } else {
        return results;
    };

    for t in roots {
        if (0.0..=1.0).contains(&t) {
            results.push((p0 + d * t, t));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::DISCRIMINANT_TOLERANCE;

    fn unit_hits(p0: (f64, f64), p1: (f64, f64)) -> Vec<(Point2, f64)> {
        circle_segment_intersect_2d(
            &Point2::origin(),
            1.0,
            &Point2::new(p0.0, p0.1),
            &Point2::new(p1.0, p1.1),
            DISCRIMINANT_TOLERANCE,
        )
    }

    #[test]
    fn tangent_segment_single_root() {
        let hits = unit_hits((-2.0, 1.0), (2.0, 1.0));
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert!((hits[0].0 - Point2::new(0.0, 1.0)).norm() < 1e-9);
        assert!((hits[0].1 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn crossing_segment_plus_root_first() {
        let hits = unit_hits((-2.0, 0.0), (2.0, 0.0));
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        assert!((hits[0].0 - Point2::new(1.0, 0.0)).norm() < 1e-9);
        assert!((hits[1].0 - Point2::new(-1.0, 0.0)).norm() < 1e-9);
        assert!(hits[0].1 > hits[1].1);
    }

    #[test]
    fn negative_discriminant_misses() {
        assert!(unit_hits((-2.0, 5.0), (2.0, 5.0)).is_empty());
    }

    #[test]
    fn roots_outside_unit_interval_are_dropped() {
        // The infinite line x = 0 crosses the circle at y = ±1, both beyond t = 1.
        assert!(unit_hits((0.0, 3.0), (0.0, 2.0)).is_empty());
    }

    #[test]
    fn segment_ending_inside_keeps_one_root() {
        let hits = unit_hits((-2.0, 0.0), (0.0, 0.0));
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert!((hits[0].0 - Point2::new(-1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn zero_length_segment_is_empty() {
        assert!(unit_hits((1.0, 0.0), (1.0, 0.0)).is_empty());
        assert!(unit_hits((0.3, 0.2), (0.3, 0.2)).is_empty());
    }

    #[test]
    fn zero_radius_circle_on_segment_touches_once() {
        let hits = circle_segment_intersect_2d(
            &Point2::new(0.5, 0.0),
            0.0,
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            DISCRIMINANT_TOLERANCE,
        );
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert!((hits[0].0 - Point2::new(0.5, 0.0)).norm() < 1e-9);
    }
}
