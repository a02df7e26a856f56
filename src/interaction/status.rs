use std::fmt::Write as _;

use crate::geometry::{Circle, Segment};
use crate::math::Point2;

/// Text shown in the three overlay lines next to the surface.
///
/// A line is `None` until the data it describes exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLines {
    pub circle: Option<String>,
    pub segment: Option<String>,
    pub intersections: Option<String>,
}

/// `Circle: center (x, y) radius = r`
#[must_use]
pub fn circle_line(circle: &Circle) -> String {
    format!(
        "Circle: center ({:.2}, {:.2}) radius = {:.2}",
        circle.center().x,
        circle.center().y,
        circle.radius()
    )
}

/// `Line segment: (x1, y1) ~ (x2, y2)`
#[must_use]
pub fn segment_line(segment: &Segment) -> String {
    format!(
        "Line segment: ({:.2}, {:.2}) ~ ({:.2}, {:.2})",
        segment.start().x,
        segment.start().y,
        segment.end().x,
        segment.end().y
    )
}

/// `No Intersection`, or the point count followed by each point.
#[must_use]
pub fn intersections_line(points: &[Point2]) -> String {
    if points.is_empty() {
        return "No Intersection".to_owned();
    }
    let mut text = format!("Intersection Points: {}", points.len());
    for (i, p) in points.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(text, " Point {}: ({:.2}, {:.2})", i + 1, p.x, p.y);
    }
    text
}
