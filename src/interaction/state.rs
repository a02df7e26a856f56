use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{Circle, Segment};
use crate::math::Point2;
use crate::operations::query::CircleSegmentIntersect;

use super::event::PointerEvent;
use super::status::{circle_line, intersections_line, segment_line, StatusLines};
use super::SketchConfig;

/// Where the sketch tool is in its capture sequence.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a press.
    #[default]
    Idle,
    /// Dragging out the circle radius from its center.
    DrawingCircle,
    /// Dragging out the segment from its start.
    DrawingSegment,
    /// Circle and segment committed; pointer input is ignored.
    Done,
}

/// The shape under construction while the pointer is held down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Preview {
    Circle(Circle),
    Segment(Segment),
}

/// What a pointer event changed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Update {
    /// The draw list is stale.
    pub redraw: bool,
    /// A shape was committed by this event.
    pub committed: Option<Committed>,
}

impl Update {
    const IGNORED: Self = Self {
        redraw: false,
        committed: None,
    };
    const REDRAW: Self = Self {
        redraw: true,
        committed: None,
    };

    /// Returns whether the event had no effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        *self == Self::IGNORED
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Committed {
    Circle,
    Segment,
}

/// Complete state of the circle/segment sketch tool.
///
/// Updated only through [`SketchState::apply`] and [`SketchState::reset`].
/// A rejected event never changes the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchState {
    phase: Phase,
    /// Press position of the shape being drawn.
    anchor: Option<Point2>,
    /// Latest pointer position while drawing.
    cursor: Option<Point2>,
    circle: Option<Circle>,
    segment: Option<Segment>,
    intersections: Vec<Point2>,
}

impl SketchState {
    /// Creates an empty sketch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The committed circle, if any.
    #[must_use]
    pub fn circle(&self) -> Option<&Circle> {
        self.circle.as_ref()
    }

    /// The committed segment, if any.
    #[must_use]
    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    /// Intersections computed when the segment was committed.
    #[must_use]
    pub fn intersections(&self) -> &[Point2] {
        &self.intersections
    }

    /// Number of committed shapes (0, 1 or 2).
    #[must_use]
    pub fn committed_count(&self) -> usize {
        usize::from(self.circle.is_some()) + usize::from(self.segment.is_some())
    }

    /// The live shape between press and release, once the pointer has a
    /// position to measure against.
    #[must_use]
    pub fn preview(&self) -> Option<Preview> {
        let (anchor, cursor) = (self.anchor?, self.cursor?);
        match self.phase {
            Phase::DrawingCircle => Circle::through(anchor, &cursor).ok().map(Preview::Circle),
            Phase::DrawingSegment => Segment::new(anchor, cursor).ok().map(Preview::Segment),
            Phase::Idle | Phase::Done => None,
        }
    }

    /// Overlay text describing the committed shapes.
    #[must_use]
    pub fn status(&self) -> StatusLines {
        StatusLines {
            circle: self.circle.as_ref().map(circle_line),
            segment: self.segment.as_ref().map(segment_line),
            intersections: self
                .segment
                .is_some()
                .then(|| intersections_line(&self.intersections)),
        }
    }

    /// Discards every shape and returns to an empty [`Phase::Idle`].
    pub fn reset(&mut self) {
        debug!("sketch reset");
        *self = Self::default();
    }

    /// Applies one pointer event.
    ///
    /// Events that mean nothing in the current phase (a move or release
    /// while idle, a press while drawing, anything once done) leave the
    /// state untouched and return an ignored [`Update`]; their coordinates
    /// are never inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if an event that would be consumed carries a
    /// non-finite position. The state is left as it was.
    pub fn apply(&mut self, event: PointerEvent, config: &SketchConfig) -> Result<Update> {
        let drawing = matches!(self.phase, Phase::DrawingCircle | Phase::DrawingSegment);
        let consumed = match event {
            PointerEvent::Down { .. } => self.phase == Phase::Idle,
            PointerEvent::Move { .. } | PointerEvent::Up { .. } => drawing,
        };
        if !consumed {
            return Ok(Update::IGNORED);
        }

        let (px, py) = event.position();
        if !(px.is_finite() && py.is_finite()) {
            return Err(GeometryError::NonFinite("pointer position").into());
        }
        let point = config.surface.to_ndc(px, py);

        match (self.phase, event) {
            (Phase::Idle, PointerEvent::Down { .. }) => Ok(self.press(point)),
            (_, PointerEvent::Move { .. }) => {
                trace!(x = point.x, y = point.y, "preview");
                self.cursor = Some(point);
                Ok(Update::REDRAW)
            }
            (Phase::DrawingCircle, PointerEvent::Up { .. }) => self.commit_circle(point),
            (Phase::DrawingSegment, PointerEvent::Up { .. }) => {
                self.commit_segment(point, config.discriminant_tolerance)
            }
            _ => Ok(Update::IGNORED),
        }
    }

    fn press(&mut self, point: Point2) -> Update {
        let next = match self.committed_count() {
            0 => Phase::DrawingCircle,
            1 => Phase::DrawingSegment,
            _ => return Update::IGNORED,
        };
        debug!(from = ?self.phase, to = ?next, x = point.x, y = point.y, "press");
        self.phase = next;
        self.anchor = Some(point);
        self.cursor = None;
        Update::REDRAW
    }

    fn commit_circle(&mut self, release: Point2) -> Result<Update> {
        let center = self.anchor.unwrap_or(release);
        let circle = Circle::through(center, &release)?;
        debug!(
            cx = circle.center().x,
            cy = circle.center().y,
            radius = circle.radius(),
            "circle committed"
        );
        self.circle = Some(circle);
        self.anchor = None;
        self.cursor = None;
        self.phase = Phase::Idle;
        Ok(Update {
            redraw: true,
            committed: Some(Committed::Circle),
        })
    }

    fn commit_segment(&mut self, release: Point2, tolerance: f64) -> Result<Update> {
        let start = self.anchor.unwrap_or(release);
        let segment = Segment::new(start, release)?;
        self.intersections = match &self.circle {
            Some(circle) => CircleSegmentIntersect::new(circle, &segment)
                .with_tolerance(tolerance)
                .execute(),
            None => Vec::new(),
        };
        debug!(
            length = segment.length(),
            hits = self.intersections.len(),
            "segment committed"
        );
        self.segment = Some(segment);
        self.anchor = None;
        self.cursor = None;
        self.phase = Phase::Done;
        Ok(Update {
            redraw: true,
            committed: Some(Committed::Segment),
        })
    }
}
