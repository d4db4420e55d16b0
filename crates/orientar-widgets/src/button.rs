//! Button widget with the site's three visual priorities.

use orientar_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, CornerRadius, Event, Key, MouseButton, Point, Rect, Size, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Visual priority of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonPriority {
    /// Solid navy fill, white text
    #[default]
    Primary,
    /// White fill, navy border and text
    Secondary,
    /// No fill or border, navy text
    Tertiary,
}

/// Message emitted when the button is activated.
#[derive(Debug, Clone)]
pub struct ButtonClicked;

/// Button widget with label and click handling.
#[derive(Clone, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    label: String,
    /// Visual priority
    priority: ButtonPriority,
    /// Corner radius
    corner_radius: CornerRadius,
    /// Padding
    padding: f32,
    /// Font size
    font_size: f32,
    /// Whether button is disabled
    disabled: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name (overrides label)
    accessible_name: Option<String>,
    /// Current hover state
    #[serde(skip)]
    hovered: bool,
    /// Current pressed state
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Button {
    /// Create a new primary button with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            priority: ButtonPriority::Primary,
            corner_radius: CornerRadius::uniform(8.0),
            padding: 12.0,
            font_size: 14.0,
            disabled: false,
            test_id_value: None,
            accessible_name: None,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set visual priority.
    #[must_use]
    pub const fn priority(mut self, priority: ButtonPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set corner radius.
    #[must_use]
    pub const fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set padding.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }

    /// Get the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the priority.
    #[must_use]
    pub const fn get_priority(&self) -> ButtonPriority {
        self.priority
    }

    /// Fill, border, and text colors for the current priority and state.
    fn palette(&self) -> (Option<Color>, Option<Color>, Color) {
        if self.disabled {
            return (
                Some(Color::rgb(0.85, 0.85, 0.85)),
                None,
                Color::rgb(0.55, 0.55, 0.55),
            );
        }

        let navy = if self.pressed {
            Color::new(0.07, 0.11, 0.28, 1.0)
        } else if self.hovered {
            Color::new(0.14, 0.2, 0.46, 1.0)
        } else {
            Color::NAVY
        };

        match self.priority {
            ButtonPriority::Primary => (Some(navy), None, Color::WHITE),
            ButtonPriority::Secondary => (Some(Color::WHITE), Some(navy), navy),
            ButtonPriority::Tertiary => (None, None, navy),
        }
    }

    /// Estimate text size.
    fn estimate_text_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        let width = self.label.len() as f32 * char_width;
        let height = self.font_size * 1.2;
        Size::new(width, height)
    }
}

impl Widget for Button {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Button"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let text_size = self.estimate_text_size();
        let size = Size::new(
            text_size.width + self.padding * 2.0,
            text_size.height + self.padding * 2.0,
        );
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let (fill, border, text_color) = self.palette();

        if let Some(color) = fill {
            canvas.fill_rounded_rect(self.bounds, self.corner_radius.top_left, color);
        }
        if let Some(color) = border {
            canvas.stroke_rect(self.bounds, color, 1.5);
        }

        let text_size = self.estimate_text_size();
        let text_pos = Point::new(
            self.bounds.x + (self.bounds.width - text_size.width) / 2.0,
            self.bounds.y + (self.bounds.height - text_size.height) / 2.0,
        );
        let style = TextStyle {
            size: self.font_size,
            color: text_color,
            weight: FontWeight::Medium,
            ..Default::default()
        };
        canvas.draw_text(&self.label, text_pos, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseEnter => {
                self.hovered = true;
                None
            }
            Event::MouseLeave => {
                self.hovered = false;
                self.pressed = false;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.bounds.contains_point(position) {
                    self.pressed = true;
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed;
                self.pressed = false;

                if was_pressed && self.bounds.contains_point(position) {
                    Some(Box::new(ButtonClicked))
                } else {
                    None
                }
            }
            Event::KeyDown {
                key: Key::Enter | Key::Space,
            } => {
                self.pressed = true;
                None
            }
            Event::KeyUp {
                key: Key::Enter | Key::Space,
            } => {
                // A release without the matching press stays silent.
                if self.pressed {
                    self.pressed = false;
                    Some(Box::new(ButtonClicked))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name.as_deref().or(Some(&self.label))
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
