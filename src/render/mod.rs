//! Backend-neutral drawing of the sketch tool.
//!
//! [`DrawList::from_state`] turns a [`SketchState`](crate::interaction::SketchState)
//! into an ordered list of primitives in NDC. A host replays the list with
//! its immediate-mode API (clear, upload vertices, draw).

mod color;
mod draw_list;

pub use color::ColorRgba;
pub use draw_list::{DrawCommand, DrawList, Primitive};

use std::f64::consts::PI;

/// Parameters for building a [`DrawList`].
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Background color.
    pub clear_color: ColorRgba,
    /// Angular step between circle outline samples, in radians.
    pub outline_step: f64,
    /// Half-length of the X and Y axis lines.
    pub axis_length: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: ColorRgba::new(0.1, 0.2, 0.3, 1.0),
            outline_step: PI / 360.0,
            axis_length: 0.85,
        }
    }
}
