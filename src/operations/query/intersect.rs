use tracing::debug;

use crate::geometry::{Circle, Segment};
use crate::math::intersect_2d::circle_segment_intersect_2d;
use crate::math::{Point2, DISCRIMINANT_TOLERANCE};

/// A circle boundary crossing found on a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// The intersection point.
    pub point: Point2,
    /// Parameter on the segment, in `[0, 1]`.
    pub t: f64,
}

/// Computes where a segment crosses a circle's boundary.
///
/// Yields zero, one (tangency or a single crossing inside the segment) or
/// two points. With two points, the root taken with `+√D` comes first.
/// Degenerate (zero-length) segments never intersect.
#[derive(Debug, Clone, Copy)]
pub struct CircleSegmentIntersect<'a> {
    circle: &'a Circle,
    segment: &'a Segment,
    tolerance: f64,
}

impl<'a> CircleSegmentIntersect<'a> {
    /// Creates a new `CircleSegmentIntersect` query.
    #[must_use]
    pub fn new(circle: &'a Circle, segment: &'a Segment) -> Self {
        Self {
            circle,
            segment,
            tolerance: DISCRIMINANT_TOLERANCE,
        }
    }

    /// Overrides the band around zero in which the discriminant counts as a
    /// tangency.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning the intersection points.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        self.execute_with_params()
            .into_iter()
            .map(|hit| hit.point)
            .collect()
    }

    /// Executes the query, returning points together with their segment
    /// parameters.
    #[must_use]
    pub fn execute_with_params(&self) -> Vec<SegmentHit> {
        if self.segment.is_degenerate() {
            debug!("degenerate segment, no intersection");
            return Vec::new();
        }
        let hits: Vec<SegmentHit> = circle_segment_intersect_2d(
            self.circle.center(),
            self.circle.radius(),
            self.segment.start(),
            self.segment.end(),
            self.tolerance,
        )
        .into_iter()
        .map(|(point, t)| SegmentHit { point, t })
        .collect();
        debug!(count = hits.len(), "circle-segment intersection");
        hits
    }
}
