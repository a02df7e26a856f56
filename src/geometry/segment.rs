use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// An ordered line segment from `start` to `end`.
///
/// Zero-length segments are valid values; see [`Segment::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not finite.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        let finite = |p: &Point2| p.x.is_finite() && p.y.is_finite();
        if !finite(&start) || !finite(&end) {
            return Err(GeometryError::NonFinite("segment endpoint").into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns whether the segment has (near) zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction().norm_squared() < TOLERANCE * TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn length_and_direction() {
        let s = Segment::new(Point2::origin(), Point2::new(3.0, 4.0)).unwrap();
        assert!((s.length() - 5.0).abs() < TOLERANCE);
        assert!((s.direction() - Vector2::new(3.0, 4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let p = Point2::new(0.25, -0.5);
        assert!(Segment::new(p, p).unwrap().is_degenerate());
        assert!(!Segment::new(p, Point2::origin()).unwrap().is_degenerate());
    }

    #[test]
    fn non_finite_endpoint_fails() {
        assert!(Segment::new(Point2::origin(), Point2::new(0.0, f64::NAN)).is_err());
    }
}
