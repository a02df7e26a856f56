/// Pointer event in surface pixels (top-left origin, +Y down).
///
/// Coordinates are carried on every variant so the state machine never
/// depends on an external "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

impl PointerEvent {
    /// Returns the pixel position carried by the event.
    #[inline]
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => (x, y),
        }
    }
}

/// Keyboard key identifier.
///
/// Only the keys the demos react to are named.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Top-row digit `0`–`9`.
    Digit(u8),
    /// Letter key, reported lowercase.
    Letter(char),
    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    #[must_use]
    pub const fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }

    #[must_use]
    pub const fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
        }
    }
}
