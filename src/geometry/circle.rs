use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::distance;
use crate::math::{Point2, TOLERANCE};

/// A full circle in the XY plane.
///
/// The radius may be zero: a click without a drag commits a point-sized
/// circle, which the intersection solver still handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite, or the radius is
    /// negative or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeometryError::NonFinite("circle center").into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle centered at `center` passing through `rim`.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not finite.
    pub fn through(center: Point2, rim: &Point2) -> Result<Self> {
        Self::new(center, distance(&center, rim))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the circle boundary at angle `t` (radians, CCW from +X).
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
        )
    }

    /// Samples the boundary every `step` radians starting at angle 0.
    ///
    /// The last sample lies strictly before `2π`, so the result is meant to
    /// be drawn as a closed loop. Returns an empty vector for a
    /// non-positive or non-finite `step`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn outline(&self, step: f64) -> Vec<Point2> {
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        // Absorb rounding so that steps dividing 2π evenly do not wrap around.
        let count = (TAU / step - TOLERANCE).ceil() as usize;
        (0..count).map(|i| self.evaluate(i as f64 * step)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn evaluate_at_quarter_turn() {
        let c = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        let p = c.evaluate(FRAC_PI_2);
        assert!((p - Point2::new(1.0, 5.0)).norm() < 1e-9);
    }

    #[test]
    fn through_uses_rim_distance() {
        let c = Circle::through(Point2::origin(), &Point2::new(0.3, 0.4)).unwrap();
        assert!((c.radius() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_is_allowed() {
        let c = Circle::new(Point2::origin(), 0.0).unwrap();
        assert!(c.radius().abs() < f64::EPSILON);
    }

    #[test]
    fn negative_radius_fails() {
        assert!(Circle::new(Point2::origin(), -0.1).is_err());
    }

    #[test]
    fn non_finite_center_fails() {
        assert!(Circle::new(Point2::new(f64::NAN, 0.0), 1.0).is_err());
        assert!(Circle::new(Point2::origin(), f64::INFINITY).is_err());
    }

    #[test]
    fn outline_has_720_samples_at_half_degree() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        let pts = c.outline(PI / 360.0);
        assert_eq!(pts.len(), 720);
        assert!(pts.iter().all(|p| (p.coords.norm() - 1.0).abs() < 1e-9));
    }

    #[test]
    fn outline_rejects_bad_step() {
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        assert!(c.outline(0.0).is_empty());
        assert!(c.outline(f64::NAN).is_empty());
    }
}
