use crate::interaction::{Preview, SketchState};
use crate::math::Point2;

use super::{ColorRgba, RenderConfig};

/// How a command's vertices are assembled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// Closed polyline through every vertex.
    LineLoop,
    /// Independent segments from consecutive vertex pairs.
    Lines,
    /// One point per vertex.
    Points,
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub color: ColorRgba,
    pub vertices: Vec<Point2>,
}

impl DrawCommand {
    #[must_use]
    pub fn new(primitive: Primitive, color: ColorRgba, vertices: Vec<Point2>) -> Self {
        Self {
            primitive,
            color,
            vertices,
        }
    }

    /// Vertex data as tightly packed `x, y` pairs, ready for a vertex buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32])
            .collect()
    }
}

/// A full frame: clear, then every command in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear_color: ColorRgba,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Builds the frame for `state`.
    ///
    /// Order: committed circle, committed segment, live preview,
    /// intersection points, then the axes on top.
    #[must_use]
    pub fn from_state(state: &SketchState, config: &RenderConfig) -> Self {
        let mut commands = Vec::new();

        if let Some(circle) = state.circle() {
            commands.push(DrawCommand::new(
                Primitive::LineLoop,
                ColorRgba::PURPLE,
                circle.outline(config.outline_step),
            ));
        }

        if let Some(segment) = state.segment() {
            commands.push(DrawCommand::new(
                Primitive::Lines,
                ColorRgba::SKY,
                vec![*segment.start(), *segment.end()],
            ));
        }

        match state.preview() {
            Some(Preview::Circle(circle)) => commands.push(DrawCommand::new(
                Primitive::LineLoop,
                ColorRgba::PREVIEW_GRAY,
                circle.outline(config.outline_step),
            )),
            Some(Preview::Segment(segment)) => commands.push(DrawCommand::new(
                Primitive::Lines,
                ColorRgba::PREVIEW_GRAY,
                vec![*segment.start(), *segment.end()],
            )),
            None => {}
        }

        if !state.intersections().is_empty() {
            commands.push(DrawCommand::new(
                Primitive::Points,
                ColorRgba::YELLOW,
                state.intersections().to_vec(),
            ));
        }

        let l = config.axis_length;
        commands.push(DrawCommand::new(
            Primitive::Lines,
            ColorRgba::RED,
            vec![Point2::new(-l, 0.0), Point2::new(l, 0.0)],
        ));
        commands.push(DrawCommand::new(
            Primitive::Lines,
            ColorRgba::GREEN,
            vec![Point2::new(0.0, -l), Point2::new(0.0, l)],
        ));

        Self {
            clear_color: config.clear_color,
            commands,
        }
    }
}
