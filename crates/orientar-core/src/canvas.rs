//! Recording canvas that captures draw commands.
//!
//! [`RecordingCanvas`] implements the [`Canvas`] trait and records all
//! paint operations as [`DrawCommand`]s. Tests inspect the recorded list
//! and the browser backend replays it against a 2d context.

use crate::color::Color;
use crate::draw::{BoxStyle, DrawCommand, FillRule, StrokeStyle, Transform2D};
use crate::geometry::{CornerRadius, Point, Rect};
use crate::widget::{Canvas, TextStyle};

/// A canvas that records draw commands instead of rendering directly.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the canvas empty.
    #[must_use]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands and stacks.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
    }

    /// Current accumulated transform, if any transforms are pushed.
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .iter()
            .fold(Transform2D::identity(), |acc, t| acc.then(t))
    }

    /// Current innermost clip rect, if any clips are pushed.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Depth of the clip stack.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Depth of the transform stack.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Record a raw command.
    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Record a rounded rectangle with an explicit corner radius struct.
    pub fn fill_rect_with_radius(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.add_command(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: BoxStyle::fill(color),
        });
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.add_command(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.add_command(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.add_command(DrawCommand::stroked_rect(rect, color, width));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.add_command(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.add_command(DrawCommand::line(from, to, color, width));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.add_command(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.add_command(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(color, width),
        });
    }

    fn fill_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    ) {
        self.add_command(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            color,
        });
    }

    fn draw_path(&mut self, points: &[Point], color: Color, width: f32) {
        self.add_command(DrawCommand::Path {
            points: points.to_vec(),
            closed: false,
            style: StrokeStyle {
                color,
                width,
                ..Default::default()
            },
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.add_command(DrawCommand::Fill {
            path: points.to_vec(),
            color,
            rule: FillRule::NonZero,
        });
    }

    fn draw_image(&mut self, source: &str, bounds: Rect) {
        self.add_command(DrawCommand::Image {
            source: source.to_string(),
            bounds,
            sampling: crate::draw::Sampling::default(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.transform_stack.push(transform);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect_records_command() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::RED);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, style, .. } => {
                assert_eq!(bounds.width, 100.0);
                assert_eq!(style.fill, Some(Color::RED));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_draw_text_records_command() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("hello", Point::new(10.0, 20.0), &TextStyle::default());

        match &canvas.commands()[0] {
            DrawCommand::Text { content, position, .. } => {
                assert_eq!(content, "hello");
                assert_eq!(*position, Point::new(10.0, 20.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fill_arc_records_arc() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_arc(Point::new(5.0, 5.0), 4.0, 0.0, 1.0, Color::BLUE);

        match &canvas.commands()[0] {
            DrawCommand::Arc { radius, color, .. } => {
                assert_eq!(*radius, 4.0);
                assert_eq!(*color, Color::BLUE);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fill_polygon_records_fill() {
        let mut canvas = RecordingCanvas::new();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        canvas.fill_polygon(&points, Color::GREEN);

        match &canvas.commands()[0] {
            DrawCommand::Fill { path, rule, .. } => {
                assert_eq!(path.len(), 3);
                assert_eq!(*rule, FillRule::NonZero);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_draw_image_records_source() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_image("/assets/uni.webp", Rect::new(0.0, 0.0, 320.0, 180.0));

        match &canvas.commands()[0] {
            DrawCommand::Image { source, bounds, .. } => {
                assert_eq!(source, "/assets/uni.webp");
                assert_eq!(bounds.width, 320.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_take_commands_drains() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clip_stack() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.clip_depth(), 0);
        assert!(canvas.current_clip().is_none());

        canvas.push_clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(canvas.clip_depth(), 1);
        assert_eq!(canvas.current_clip(), Some(Rect::new(0.0, 0.0, 50.0, 50.0)));

        canvas.pop_clip();
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_transform_stack() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(10.0, 20.0));
        assert_eq!(canvas.transform_depth(), 1);

        let current = canvas.current_transform();
        assert_eq!(current.apply(Point::ORIGIN), Point::new(10.0, 20.0));

        canvas.pop_transform();
        assert_eq!(canvas.transform_depth(), 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        canvas.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        canvas.push_transform(Transform2D::identity());

        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.clip_depth(), 0);
        assert_eq!(canvas.transform_depth(), 0);
    }
}
