use tracing::trace;

use crate::interaction::{Key, KeyEvent, KeyState};
use crate::math::Point2;

/// Speed and bounds for [`SquareMover`].
#[derive(Debug, Clone, Copy)]
pub struct MoverConfig {
    /// Distance moved per frame along each axis, in NDC units.
    pub velocity: f64,
    /// Largest absolute offset allowed on each axis.
    pub boundary: f64,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            velocity: 0.01,
            boundary: 0.9,
        }
    }
}

/// Held state of the four arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrowKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ArrowKeys {
    /// Records a key press or release. Returns `false` for non-arrow keys.
    pub fn apply(&mut self, event: KeyEvent) -> bool {
        let held = event.state == KeyState::Pressed;
        let slot = match event.key {
            Key::ArrowUp => &mut self.up,
            Key::ArrowDown => &mut self.down,
            Key::ArrowLeft => &mut self.left,
            Key::ArrowRight => &mut self.right,
            Key::Digit(_) | Key::Letter(_) | Key::Unknown(_) => return false,
        };
        *slot = held;
        true
    }

    /// Per-axis direction in `{-1, 0, 1}`; opposing keys cancel.
    #[must_use]
    pub fn direction(&self) -> (f64, f64) {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        };
        (axis(self.left, self.right), axis(self.down, self.up))
    }
}

/// Offset of a square moved by the arrow keys, advanced once per frame.
#[derive(Debug, Clone, Copy)]
pub struct SquareMover {
    offset: Point2,
    keys: ArrowKeys,
    config: MoverConfig,
}

impl SquareMover {
    #[must_use]
    pub fn new(config: MoverConfig) -> Self {
        Self {
            offset: Point2::origin(),
            keys: ArrowKeys::default(),
            config,
        }
    }

    /// Current offset from the surface center.
    #[must_use]
    pub fn offset(&self) -> Point2 {
        self.offset
    }

    #[must_use]
    pub fn keys(&self) -> &ArrowKeys {
        &self.keys
    }

    /// Feeds a keyboard event. Returns whether it was an arrow key.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        self.keys.apply(event)
    }

    /// Advances one frame: moves along held directions, then clamps each
    /// axis to `±boundary`.
    pub fn step(&mut self) -> Point2 {
        let (dx, dy) = self.keys.direction();
        let b = self.config.boundary;
        self.offset.x = (self.offset.x + dx * self.config.velocity).clamp(-b, b);
        self.offset.y = (self.offset.y + dy * self.config.velocity).clamp(-b, b);
        trace!(x = self.offset.x, y = self.offset.y, "square moved");
        self.offset
    }
}

impl Default for SquareMover {
    fn default() -> Self {
        Self::new(MoverConfig::default())
    }
}
