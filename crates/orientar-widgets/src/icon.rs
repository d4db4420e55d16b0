//! Icon widget for the site's navigational and status glyphs.
//!
//! Icons are sketched from canvas primitives (lines, circles, polygons)
//! rather than vector path tables, which keeps the set small and
//! resolution-independent.

use orientar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// The glyphs the site's chrome needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Search,
    User,
    Bell,
    Menu,
    Cross,
    CaretDown,
    CaretRight,
    ArrowLeft,
    ArrowRight,
    Check,
    Warning,
    Heart,
    Pin,
    Calendar,
    Eye,
    Home,
}

impl IconName {
    /// All glyphs, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Search,
        Self::User,
        Self::Bell,
        Self::Menu,
        Self::Cross,
        Self::CaretDown,
        Self::CaretRight,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Check,
        Self::Warning,
        Self::Heart,
        Self::Pin,
        Self::Calendar,
        Self::Eye,
        Self::Home,
    ];

    /// Kebab-case name as used in host attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::User => "user",
            Self::Bell => "bell",
            Self::Menu => "menu",
            Self::Cross => "cross",
            Self::CaretDown => "caret-down",
            Self::CaretRight => "caret-right",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::Check => "check",
            Self::Warning => "warning",
            Self::Heart => "heart",
            Self::Pin => "pin",
            Self::Calendar => "calendar",
            Self::Eye => "eye",
            Self::Home => "home",
        }
    }

    /// Parse a kebab-case name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == name)
    }
}

/// Icon widget.
#[derive(Clone, Serialize, Deserialize)]
pub struct Icon {
    /// Which glyph to draw
    name: IconName,
    /// Edge length in pixels
    size: f32,
    /// Glyph color
    color: Color,
    /// Stroke width for line-based glyphs
    stroke_width: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name (icons are decorative unless named)
    accessible_name_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Icon {
    /// Create a new icon.
    #[must_use]
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: 20.0,
            color: Color::NAVY,
            stroke_width: 1.8,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set edge length.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(8.0);
        self
    }

    /// Set glyph color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set stroke width.
    #[must_use]
    pub const fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name (marks the icon as meaningful, not decorative).
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get the glyph name.
    #[must_use]
    pub const fn name(&self) -> IconName {
        self.name
    }

    #[allow(clippy::too_many_lines)]
    fn draw_glyph(&self, canvas: &mut dyn Canvas) {
        let b = self.bounds;
        let w = self.stroke_width;
        let c = self.color;
        let cx = b.x + b.width / 2.0;
        let cy = b.y + b.height / 2.0;
        let r = b.width.min(b.height) / 2.0;

        match self.name {
            IconName::Search => {
                canvas.stroke_circle(Point::new(cx - r * 0.15, cy - r * 0.15), r * 0.55, c, w);
                canvas.draw_line(
                    Point::new(cx + r * 0.3, cy + r * 0.3),
                    Point::new(cx + r * 0.85, cy + r * 0.85),
                    c,
                    w,
                );
            }
            IconName::User => {
                canvas.fill_circle(Point::new(cx, cy - r * 0.35), r * 0.35, c);
                canvas.fill_arc(
                    Point::new(cx, cy + r * 0.9),
                    r * 0.8,
                    std::f32::consts::PI,
                    std::f32::consts::TAU,
                    c,
                );
            }
            IconName::Bell => {
                canvas.fill_arc(
                    Point::new(cx, cy + r * 0.25),
                    r * 0.65,
                    std::f32::consts::PI,
                    std::f32::consts::TAU,
                    c,
                );
                canvas.draw_line(
                    Point::new(cx - r * 0.75, cy + r * 0.3),
                    Point::new(cx + r * 0.75, cy + r * 0.3),
                    c,
                    w,
                );
                canvas.fill_circle(Point::new(cx, cy + r * 0.6), r * 0.18, c);
            }
            IconName::Menu => {
                for dy in [-0.5, 0.0, 0.5] {
                    canvas.draw_line(
                        Point::new(cx - r * 0.7, cy + r * dy),
                        Point::new(cx + r * 0.7, cy + r * dy),
                        c,
                        w,
                    );
                }
            }
            IconName::Cross => {
                canvas.draw_line(
                    Point::new(cx - r * 0.6, cy - r * 0.6),
                    Point::new(cx + r * 0.6, cy + r * 0.6),
                    c,
                    w,
                );
                canvas.draw_line(
                    Point::new(cx + r * 0.6, cy - r * 0.6),
                    Point::new(cx - r * 0.6, cy + r * 0.6),
                    c,
                    w,
                );
            }
            IconName::CaretDown => {
                canvas.fill_polygon(
                    &[
                        Point::new(cx - r * 0.5, cy - r * 0.25),
                        Point::new(cx + r * 0.5, cy - r * 0.25),
                        Point::new(cx, cy + r * 0.35),
                    ],
                    c,
                );
            }
            IconName::CaretRight => {
                canvas.fill_polygon(
                    &[
                        Point::new(cx - r * 0.25, cy - r * 0.5),
                        Point::new(cx + r * 0.35, cy),
                        Point::new(cx - r * 0.25, cy + r * 0.5),
                    ],
                    c,
                );
            }
            IconName::ArrowLeft => {
                canvas.draw_line(
                    Point::new(cx + r * 0.7, cy),
                    Point::new(cx - r * 0.7, cy),
                    c,
                    w,
                );
                canvas.draw_path(
                    &[
                        Point::new(cx - r * 0.2, cy - r * 0.5),
                        Point::new(cx - r * 0.7, cy),
                        Point::new(cx - r * 0.2, cy + r * 0.5),
                    ],
                    c,
                    w,
                );
            }
            IconName::ArrowRight => {
                canvas.draw_line(
                    Point::new(cx - r * 0.7, cy),
                    Point::new(cx + r * 0.7, cy),
                    c,
                    w,
                );
                canvas.draw_path(
                    &[
                        Point::new(cx + r * 0.2, cy - r * 0.5),
                        Point::new(cx + r * 0.7, cy),
                        Point::new(cx + r * 0.2, cy + r * 0.5),
                    ],
                    c,
                    w,
                );
            }
            IconName::Check => {
                canvas.draw_path(
                    &[
                        Point::new(cx - r * 0.6, cy),
                        Point::new(cx - r * 0.15, cy + r * 0.45),
                        Point::new(cx + r * 0.6, cy - r * 0.45),
                    ],
                    c,
                    w,
                );
            }
            IconName::Warning => {
                canvas.fill_polygon(
                    &[
                        Point::new(cx, cy - r * 0.75),
                        Point::new(cx + r * 0.8, cy + r * 0.6),
                        Point::new(cx - r * 0.8, cy + r * 0.6),
                    ],
                    c,
                );
            }
            IconName::Heart => {
                canvas.fill_circle(Point::new(cx - r * 0.32, cy - r * 0.2), r * 0.36, c);
                canvas.fill_circle(Point::new(cx + r * 0.32, cy - r * 0.2), r * 0.36, c);
                canvas.fill_polygon(
                    &[
                        Point::new(cx - r * 0.65, cy),
                        Point::new(cx + r * 0.65, cy),
                        Point::new(cx, cy + r * 0.7),
                    ],
                    c,
                );
            }
            IconName::Pin => {
                canvas.fill_circle(Point::new(cx, cy - r * 0.25), r * 0.45, c);
                canvas.fill_polygon(
                    &[
                        Point::new(cx - r * 0.35, cy),
                        Point::new(cx + r * 0.35, cy),
                        Point::new(cx, cy + r * 0.8),
                    ],
                    c,
                );
            }
            IconName::Calendar => {
                let frame = Rect::new(cx - r * 0.65, cy - r * 0.55, r * 1.3, r * 1.2);
                canvas.stroke_rect(frame, c, w);
                canvas.draw_line(
                    Point::new(frame.x, frame.y + r * 0.35),
                    Point::new(frame.x + frame.width, frame.y + r * 0.35),
                    c,
                    w,
                );
                canvas.draw_line(
                    Point::new(cx - r * 0.3, frame.y - r * 0.2),
                    Point::new(cx - r * 0.3, frame.y + r * 0.1),
                    c,
                    w,
                );
                canvas.draw_line(
                    Point::new(cx + r * 0.3, frame.y - r * 0.2),
                    Point::new(cx + r * 0.3, frame.y + r * 0.1),
                    c,
                    w,
                );
            }
            IconName::Eye => {
                canvas.draw_path(
                    &[
                        Point::new(cx - r * 0.8, cy),
                        Point::new(cx, cy - r * 0.45),
                        Point::new(cx + r * 0.8, cy),
                    ],
                    c,
                    w,
                );
                canvas.draw_path(
                    &[
                        Point::new(cx - r * 0.8, cy),
                        Point::new(cx, cy + r * 0.45),
                        Point::new(cx + r * 0.8, cy),
                    ],
                    c,
                    w,
                );
                canvas.fill_circle(Point::new(cx, cy), r * 0.2, c);
            }
            IconName::Home => {
                canvas.fill_polygon(
                    &[
                        Point::new(cx - r * 0.8, cy),
                        Point::new(cx, cy - r * 0.7),
                        Point::new(cx + r * 0.8, cy),
                    ],
                    c,
                );
                canvas.stroke_rect(Rect::new(cx - r * 0.55, cy, r * 1.1, r * 0.7), c, w);
            }
        }
    }
}

impl Widget for Icon {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Icon"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.size, self.size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.draw_glyph(canvas);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.accessible_name_value.is_some() {
            AccessibleRole::Image
        } else {
            AccessibleRole::Generic
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
