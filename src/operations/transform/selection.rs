use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::interaction::{Key, KeyEvent, KeyState};
use crate::math::Matrix4;

use super::compose::{compose, TransformOrder, Trs};

/// Translation applied to the demo square on both axes.
const OFFSET: f64 = 0.5;

/// Uniform scale applied to the demo square.
const SCALE: f64 = 0.3;

/// Rotation speed in radians per second (one turn every two seconds).
const ANGULAR_SPEED: f64 = PI;

/// Digit key that clears the selection.
const CLEAR_KEY: u8 = 7;

/// Keyboard-driven comparison of transform orders on a spinning square.
///
/// Digits `1` to `6` pick a [`TransformOrder`] and start the spin; `7`
/// clears the order, stops the spin and resets the angle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformSelection {
    order: Option<TransformOrder>,
    animating: bool,
    angle: f64,
}

impl TransformSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn order(&self) -> Option<TransformOrder> {
        self.order
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current rotation angle in radians, in `[0, 2π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Feeds a keyboard event. Returns whether it changed the selection.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let (KeyState::Pressed, Key::Digit(digit)) = (event.state, event.key) else {
            return false;
        };
        if digit == CLEAR_KEY {
            self.order = None;
            self.animating = false;
            self.angle = 0.0;
        } else if let Some(order) = TransformOrder::from_shortcut(digit) {
            self.order = Some(order);
            self.animating = true;
        } else {
            return false;
        }
        debug!(order = ?self.order, "transform order selected");
        true
    }

    /// Advances the spin by `delta` seconds while animating.
    pub fn advance(&mut self, delta: f64) {
        if self.animating {
            self.angle = (self.angle + ANGULAR_SPEED * delta).rem_euclid(TAU);
        }
    }

    /// Model matrix of the square: the selected order applied to the
    /// current parameters, or the identity when nothing is selected.
    #[must_use]
    pub fn transform(&self) -> Matrix4 {
        self.order.map_or_else(Matrix4::identity, |order| {
            compose(order, &Trs::new(OFFSET, OFFSET, self.angle, SCALE, SCALE))
        })
    }

    /// Overlay text, e.g. `3: RTS` or `NO TRANSFORMATION`.
    #[must_use]
    pub fn status(&self) -> String {
        match self.order {
            Some(order) => format!("{}: {order}", order.shortcut()),
            None => "NO TRANSFORMATION".to_owned(),
        }
    }
}
