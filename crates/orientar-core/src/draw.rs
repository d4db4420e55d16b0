//! Draw command system for rendering.
//!
//! Paint produces a list of [`DrawCommand`]s which a backend (canvas2d in
//! the browser, the recording canvas in tests) executes in order.

use crate::color::Color;
use crate::geometry::{CornerRadius, Point, Rect};
use crate::widget::TextStyle;
use serde::{Deserialize, Serialize};

/// A drawing command for the rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a path (polyline, optionally closed)
    Path {
        /// Path points
        points: Vec<Point>,
        /// Whether to close the path
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },
    /// Fill a path
    Fill {
        /// Path points
        path: Vec<Point>,
        /// Fill color
        color: Color,
        /// Fill rule
        rule: FillRule,
    },
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style (fill and/or stroke)
        style: BoxStyle,
    },
    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },
    /// Draw a filled arc (pie slice), angles in radians
    Arc {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Start angle
        start_angle: f32,
        /// End angle
        end_angle: f32,
        /// Fill color
        color: Color,
    },
    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position (baseline start)
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Draw an image resolved by the backend from its source URL
    Image {
        /// Image source URL or path
        source: String,
        /// Destination bounds
        bounds: Rect,
        /// Sampling mode
        sampling: Sampling,
    },
    /// Group of commands with optional transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Option<Transform2D>,
    },
    /// Clip subsequent commands to a rectangle
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Commands to clip
        children: Vec<DrawCommand>,
    },
    /// Apply opacity to commands
    Opacity {
        /// Opacity value (0.0 to 1.0)
        value: f32,
        /// Commands to apply opacity to
        children: Vec<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a simple filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a rounded filled rectangle.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked rectangle.
    #[must_use]
    pub fn stroked_rect(bounds: Rect, color: Color, width: f32) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(color, width),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a line.
    #[must_use]
    pub fn line(from: Point, to: Point, color: Color, width: f32) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            style: StrokeStyle {
                color,
                width,
                ..Default::default()
            },
        }
    }

    /// Wrap commands in a transform group.
    #[must_use]
    pub fn with_transform(children: Vec<DrawCommand>, transform: Transform2D) -> Self {
        Self::Group {
            children,
            transform: Some(transform),
        }
    }

    /// Wrap commands with opacity.
    #[must_use]
    pub fn with_opacity(children: Vec<DrawCommand>, opacity: f32) -> Self {
        Self::Opacity {
            value: opacity.clamp(0.0, 1.0),
            children,
        }
    }

    /// Wrap commands with a clip.
    #[must_use]
    pub fn with_clip(children: Vec<DrawCommand>, bounds: Rect) -> Self {
        Self::Clip { bounds, children }
    }
}

/// Stroke style for paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Dash pattern (empty for solid)
    pub dash: Vec<f32>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            dash: Vec::new(),
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at line end
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending past line end
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled corner
    Bevel,
}

/// Fill rule for paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    /// Non-zero winding rule
    #[default]
    NonZero,
    /// Even-odd rule
    EvenOdd,
}

/// Box style combining fill and stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None for no fill)
    pub fill: Option<Color>,
    /// Stroke (None for no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Drop shadow (None for no shadow)
    pub shadow: Option<Shadow>,
}

impl BoxStyle {
    /// Create a fill-only style.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            shadow: None,
        }
    }

    /// Create a stroke-only style.
    #[must_use]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(StrokeStyle {
                color,
                width,
                ..Default::default()
            }),
            shadow: None,
        }
    }

    /// Add a shadow to this style.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Drop shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.25),
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
        }
    }
}

/// Image sampling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sampling {
    /// Nearest neighbor (pixelated)
    Nearest,
    /// Bilinear interpolation (smooth)
    #[default]
    Bilinear,
}

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale transform.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Create a rotation transform (radians).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For a point p: `a.then(b).apply(p)` equals `b.apply(a.apply(p))`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect_command() {
        let cmd = DrawCommand::filled_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::RED);
        match cmd {
            DrawCommand::Rect { bounds, style, .. } => {
                assert_eq!(bounds.width, 100.0);
                assert_eq!(style.fill, Some(Color::RED));
                assert!(style.stroke.is_none());
            }
            _ => panic!("expected Rect command"),
        }
    }

    #[test]
    fn test_stroked_rect_command() {
        let cmd = DrawCommand::stroked_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLUE, 2.0);
        match cmd {
            DrawCommand::Rect { style, .. } => {
                assert!(style.fill.is_none());
                let stroke = style.stroke.unwrap();
                assert_eq!(stroke.color, Color::BLUE);
                assert_eq!(stroke.width, 2.0);
            }
            _ => panic!("expected Rect command"),
        }
    }

    #[test]
    fn test_line_command() {
        let cmd = DrawCommand::line(
            Point::ORIGIN,
            Point::new(10.0, 10.0),
            Color::BLACK,
            1.0,
        );
        match cmd {
            DrawCommand::Path { points, closed, .. } => {
                assert_eq!(points.len(), 2);
                assert!(!closed);
            }
            _ => panic!("expected Path command"),
        }
    }

    #[test]
    fn test_with_opacity_clamps() {
        let cmd = DrawCommand::with_opacity(vec![], 1.5);
        match cmd {
            DrawCommand::Opacity { value, .. } => assert_eq!(value, 1.0),
            _ => panic!("expected Opacity command"),
        }
    }

    #[test]
    fn test_box_style_with_shadow() {
        let style = BoxStyle::fill(Color::WHITE).with_shadow(Shadow::default());
        assert!(style.shadow.is_some());
        let shadow = style.shadow.unwrap();
        assert_eq!(shadow.offset_y, 2.0);
        assert_eq!(shadow.blur, 4.0);
    }

    #[test]
    fn test_transform_identity() {
        let t = Transform2D::identity();
        let p = Point::new(5.0, 7.0);
        assert_eq!(t.apply(p), p);
    }

    #[test]
    fn test_transform_translate_applies_offset() {
        let t = Transform2D::translate(10.0, 20.0);
        assert_eq!(t.apply(Point::ORIGIN), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_transform_then_matches_sequential_application() {
        let a = Transform2D::translate(1.0, 2.0);
        let b = Transform2D::scale(2.0, 3.0);
        let p = Point::new(4.0, 5.0);
        assert_eq!(a.then(&b).apply(p), b.apply(a.apply(p)));
        // Order matters: the translation gets scaled.
        assert_eq!(a.then(&b).apply(Point::ORIGIN), Point::new(2.0, 6.0));
    }

    #[test]
    fn test_transform_rotate_quarter_turn() {
        let t = Transform2D::rotate(std::f32::consts::FRAC_PI_2);
        let rotated = t.apply(Point::new(1.0, 0.0));
        assert!((rotated.x - 0.0).abs() < 1e-6);
        assert!((rotated.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_arc_command_serializes() {
        let cmd = DrawCommand::Arc {
            center: Point::new(50.0, 50.0),
            radius: 20.0,
            start_angle: 0.0,
            end_angle: std::f32::consts::PI,
            color: Color::GREEN,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }

    #[test]
    fn test_image_command_by_source() {
        let cmd = DrawCommand::Image {
            source: "/assets/campus.webp".to_string(),
            bounds: Rect::new(0.0, 0.0, 320.0, 180.0),
            sampling: Sampling::default(),
        };
        match cmd {
            DrawCommand::Image { source, sampling, .. } => {
                assert_eq!(source, "/assets/campus.webp");
                assert_eq!(sampling, Sampling::Bilinear);
            }
            _ => panic!("expected Image command"),
        }
    }
}
