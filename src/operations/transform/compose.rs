use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;
use crate::math::{Matrix4, Point3, Vector3};

/// Translate / rotate / scale parameters for a planar transform.
///
/// Rotation is about the Z axis; translation and scale act in XY only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trs {
    pub tx: f64,
    pub ty: f64,
    /// Rotation angle in radians.
    pub angle: f64,
    pub sx: f64,
    pub sy: f64,
}

impl Trs {
    #[must_use]
    pub const fn new(tx: f64, ty: f64, angle: f64, sx: f64, sy: f64) -> Self {
        Self {
            tx,
            ty,
            angle,
            sx,
            sy,
        }
    }

    /// The translation matrix `T`.
    #[must_use]
    pub fn translation(&self) -> Matrix4 {
        Matrix4::new_translation(&Vector3::new(self.tx, self.ty, 0.0))
    }

    /// The rotation matrix `R` about +Z.
    #[must_use]
    pub fn rotation(&self) -> Matrix4 {
        Matrix4::from_axis_angle(&Vector3::z_axis(), self.angle)
    }

    /// The scale matrix `S`.
    #[must_use]
    pub fn scale(&self) -> Matrix4 {
        Matrix4::new_nonuniform_scaling(&Vector3::new(self.sx, self.sy, 1.0))
    }
}

impl Default for Trs {
    /// Identity parameters.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0, 1.0)
    }
}

/// Order in which `T`, `R` and `S` are applied to a vertex.
///
/// The name reads left to right in application order: `Trs` translates
/// first, then rotates, then scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformOrder {
    Trs,
    Tsr,
    Rts,
    Rst,
    Str,
    Srt,
}

impl TransformOrder {
    /// All orders, in keyboard-shortcut order (keys 1 through 6).
    pub const ALL: [Self; 6] = [
        Self::Trs,
        Self::Tsr,
        Self::Rts,
        Self::Rst,
        Self::Str,
        Self::Srt,
    ];

    /// Order selected by digit key `digit` (`1` through `6`).
    #[must_use]
    pub fn from_shortcut(digit: u8) -> Option<Self> {
        let slot = usize::from(digit).checked_sub(1)?;
        Self::ALL.get(slot).copied()
    }

    /// Digit key that selects this order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn shortcut(self) -> u8 {
        Self::ALL.iter().position(|o| *o == self).map_or(0, |i| i as u8 + 1)
    }

    /// Returns the three-letter name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Trs => "TRS",
            Self::Tsr => "TSR",
            Self::Rts => "RTS",
            Self::Rst => "RST",
            Self::Str => "STR",
            Self::Srt => "SRT",
        }
    }

    fn sequence(self, trs: &Trs) -> [Matrix4; 3] {
        let (t, r, s) = (trs.translation(), trs.rotation(), trs.scale());
        match self {
            Self::Trs => [t, r, s],
            Self::Tsr => [t, s, r],
            Self::Rts => [r, t, s],
            Self::Rst => [r, s, t],
            Self::Str => [s, t, r],
            Self::Srt => [s, r, t],
        }
    }
}

impl fmt::Display for TransformOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformOrder {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TransformError::UnknownOrder(s.to_owned()))
    }
}

/// Composes `T`, `R` and `S` so that they apply to a vertex in `order`.
///
/// Starting from the identity, each matrix is multiplied in from the left,
/// so `TRS` yields `S · R · T`.
#[must_use]
pub fn compose(order: TransformOrder, trs: &Trs) -> Matrix4 {
    order
        .sequence(trs)
        .iter()
        .fold(Matrix4::identity(), |acc, m| m * acc)
}

/// Applies `parent` after `local`: returns `parent · local`.
#[must_use]
pub fn merge(local: &Matrix4, parent: &Matrix4) -> Matrix4 {
    parent * local
}

/// Transforms a point by a homogeneous 4x4 matrix.
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    matrix.transform_point(point)
}
