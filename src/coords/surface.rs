use crate::error::{Result, SurfaceError};
use crate::math::Point2;

/// Size of the drawable surface in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceSize {
    width: f64,
    height: f64,
}

impl SurfaceSize {
    /// Creates a new surface size.
    ///
    /// # Errors
    ///
    /// Returns an error unless both dimensions are positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SurfaceError::InvalidSize { width, height }.into());
        }
        Ok(Self { width, height })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Maps a pixel position (top-left origin) to normalized device coordinates.
    ///
    /// Positions outside the surface map outside `[-1, 1]`; no clamping is done.
    #[must_use]
    pub fn to_ndc(&self, px: f64, py: f64) -> Point2 {
        Point2::new(
            (px / self.width) * 2.0 - 1.0,
            1.0 - (py / self.height) * 2.0,
        )
    }

    /// Inverse of [`SurfaceSize::to_ndc`].
    #[must_use]
    pub fn to_pixels(&self, ndc: &Point2) -> (f64, f64) {
        (
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

impl Default for SurfaceSize {
    /// The fixed 700×700 canvas used by the sketch tool.
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 700.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_and_center() {
        let s = SurfaceSize::new(640.0, 480.0).unwrap();

        let tl = s.to_ndc(0.0, 0.0);
        assert_relative_eq!(tl.x, -1.0);
        assert_relative_eq!(tl.y, 1.0);

        let br = s.to_ndc(640.0, 480.0);
        assert_relative_eq!(br.x, 1.0);
        assert_relative_eq!(br.y, -1.0);

        let c = s.to_ndc(320.0, 240.0);
        assert_relative_eq!(c.x, 0.0);
        assert_relative_eq!(c.y, 0.0);
    }

    #[test]
    fn to_pixels_inverts_to_ndc() {
        let s = SurfaceSize::default();
        let (px, py) = s.to_pixels(&s.to_ndc(175.0, 525.0));
        assert_relative_eq!(px, 175.0, epsilon = 1e-9);
        assert_relative_eq!(py, 525.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_empty_or_non_finite_size() {
        assert!(SurfaceSize::new(0.0, 100.0).is_err());
        assert!(SurfaceSize::new(100.0, -1.0).is_err());
        assert!(SurfaceSize::new(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn default_is_700_square() {
        let s = SurfaceSize::default();
        assert_relative_eq!(s.width(), 700.0);
        assert_relative_eq!(s.height(), 700.0);
    }
}
