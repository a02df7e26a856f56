/// Tracks animation-frame timestamps.
///
/// Timestamps are in milliseconds, as delivered by a display-refresh
/// callback. The first tick defines both the start and the previous frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
}

/// Timing for one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Time since the previous tick.
    pub delta: f64,
    /// Time since the first tick.
    pub elapsed: f64,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `now_ms` and returns its timing.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let start = *self.start_ms.get_or_insert(now_ms);
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        FrameTime {
            delta: (now_ms - last) / 1000.0,
            elapsed: (now_ms - start) / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        let t = clock.tick(1234.0);
        assert_relative_eq!(t.delta, 0.0);
        assert_relative_eq!(t.elapsed, 0.0);
    }

    #[test]
    fn tracks_delta_and_elapsed() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        clock.tick(1016.0);
        let t = clock.tick(1048.0);
        assert_relative_eq!(t.delta, 0.032, epsilon = 1e-12);
        assert_relative_eq!(t.elapsed, 0.048, epsilon = 1e-12);
    }
}
