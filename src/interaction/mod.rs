//! Pointer-driven circle/segment sketch tool.
//!
//! The tool captures a circle (press at the center, drag out the radius)
//! and then a segment (press at the start, drag to the end). Releasing the
//! segment solves for their intersections. After that, pointer input is
//! ignored until [`SketchState::reset`].
//!
//! Each event updates the state in place or, if rejected, leaves it
//! untouched; the host feeds events in and redraws when
//! [`Update::redraw`] is set.

mod event;
mod state;
pub mod status;

pub use event::{Key, KeyEvent, KeyState, PointerEvent};
pub use state::{Committed, Phase, Preview, SketchState, Update};
pub use status::StatusLines;

use crate::coords::SurfaceSize;
use crate::math::DISCRIMINANT_TOLERANCE;

/// Parameters of a sketch session.
#[derive(Debug, Clone, Copy)]
pub struct SketchConfig {
    /// Surface that pointer coordinates are relative to.
    pub surface: SurfaceSize,
    /// Discriminant band treated as tangency by the solver.
    pub discriminant_tolerance: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            discriminant_tolerance: DISCRIMINANT_TOLERANCE,
        }
    }
}
