//! glsketch replay: drives the sketch tool with a scripted pointer session.
//!
//! Usage:
//! ```text
//! cargo run --example replay                 # one INFO line per frame
//! RUST_LOG=replay=info,glsketch=debug cargo run --example replay
//! ```
//!
//! Prints the overlay text and a summary of each frame's draw list.

use glsketch::coords::SurfaceSize;
use glsketch::interaction::{PointerEvent, SketchConfig, SketchState};
use glsketch::math::Point2;
use glsketch::render::{DrawList, RenderConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Press,
    Drag,
    Release,
}

/// Circle centered on the surface, then a segment across it, in NDC.
const SESSION: [(Gesture, f64, f64); 8] = [
    (Gesture::Press, 0.0, 0.0),
    (Gesture::Drag, 0.25, 0.0),
    (Gesture::Drag, 0.5, 0.0),
    (Gesture::Release, 0.5, 0.0),
    (Gesture::Press, -0.8, 0.15),
    (Gesture::Drag, 0.1, 0.05),
    (Gesture::Drag, 0.9, -0.1),
    (Gesture::Release, 0.9, -0.1),
];

/// Converts a scripted gesture into the pixel event a window would deliver.
fn pointer_event(gesture: Gesture, ndc: Point2, surface: &SurfaceSize) -> PointerEvent {
    let (x, y) = surface.to_pixels(&ndc);
    match gesture {
        Gesture::Press => PointerEvent::Down { x, y },
        Gesture::Drag => PointerEvent::Move { x, y },
        Gesture::Release => PointerEvent::Up { x, y },
    }
}

/// Builds the log filter from a `RUST_LOG` value.
///
/// Default: WARN for everything, INFO for replay and glsketch. A valid
/// `RUST_LOG` replaces the defaults entirely (e.g. `RUST_LOG=glsketch=trace`).
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            EnvFilter::default()
                .add_directive(LevelFilter::WARN.into())
                .add_directive("replay=info".parse().unwrap_or_default())
                .add_directive("glsketch=info".parse().unwrap_or_default())
        })
}

fn main() -> glsketch::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let config = SketchConfig::default();
    let render_config = RenderConfig::default();
    let mut state = SketchState::new();

    for (gesture, x, y) in SESSION {
        let event = pointer_event(gesture, Point2::new(x, y), &config.surface);
        let update = state.apply(event, &config)?;
        if update.redraw {
            let list = DrawList::from_state(&state, &render_config);
            let vertices: usize = list.commands.iter().map(|c| c.vertices.len()).sum();
            tracing::info!(
                phase = ?state.phase(),
                commands = list.commands.len(),
                vertices,
                "frame"
            );
        }
    }

    let status = state.status();
    for line in [status.circle, status.segment, status.intersections]
        .into_iter()
        .flatten()
    {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gestures_map_back_to_their_ndc_position() {
        let surface = SurfaceSize::default();
        let event = pointer_event(Gesture::Release, Point2::new(0.9, -0.1), &surface);
        assert!(matches!(event, PointerEvent::Up { .. }));
        let (x, y) = event.position();
        let ndc = surface.to_ndc(x, y);
        assert!((ndc - Point2::new(0.9, -0.1)).norm() < 1e-12);
    }

    #[test]
    fn default_filter_lets_frame_lines_through() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_replaces_defaults() {
        let filter = log_filter(Some("glsketch=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter(Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
