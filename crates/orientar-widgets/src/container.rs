//! Container widget for grouping and styling children.

use orientar_core::{
    widget::LayoutResult, Canvas, Color, Constraints, CornerRadius, Event, Rect, Size, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Container widget for grouping and styling children.
#[derive(Serialize, Deserialize)]
pub struct Container {
    /// Background color
    pub background: Option<Color>,
    /// Corner radius for rounded corners
    pub corner_radius: CornerRadius,
    /// Border color
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Padding (all sides)
    pub padding: f32,
    /// Minimum width constraint
    pub min_width: Option<f32>,
    /// Minimum height constraint
    pub min_height: Option<f32>,
    /// Maximum width constraint
    pub max_width: Option<f32>,
    /// Maximum height constraint
    pub max_height: Option<f32>,
    /// Children widgets
    #[serde(skip)]
    children: Vec<Box<dyn Widget>>,
    /// Test ID for this widget
    test_id_value: Option<String>,
    /// Cached bounds after layout
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            background: None,
            corner_radius: CornerRadius::ZERO,
            border_color: None,
            border_width: 1.0,
            padding: 0.0,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl Container {
    /// Create a new empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the border.
    #[must_use]
    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border_color = Some(color);
        self.border_width = width.max(0.0);
        self
    }

    /// Set uniform padding on all sides.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set minimum height.
    #[must_use]
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Set maximum width.
    #[must_use]
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set maximum height.
    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }
}

impl Widget for Container {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Container"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let padding2 = self.padding * 2.0;

        let child_constraints = Constraints::new(
            0.0,
            (constraints.max_width - padding2).max(0.0),
            0.0,
            (constraints.max_height - padding2).max(0.0),
        );

        let mut child_size = Size::ZERO;
        for child in &self.children {
            let size = child.measure(child_constraints);
            child_size.width = child_size.width.max(size.width);
            child_size.height = child_size.height.max(size.height);
        }

        let mut size = Size::new(child_size.width + padding2, child_size.height + padding2);

        if let Some(min_w) = self.min_width {
            size.width = size.width.max(min_w);
        }
        if let Some(min_h) = self.min_height {
            size.height = size.height.max(min_h);
        }
        if let Some(max_w) = self.max_width {
            size.width = size.width.min(max_w);
        }
        if let Some(max_h) = self.max_height {
            size.height = size.height.min(max_h);
        }

        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;

        let child_bounds = bounds.inset(self.padding);
        for child in &mut self.children {
            child.layout(child_bounds);
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(color) = self.background {
            canvas.fill_rounded_rect(self.bounds, self.corner_radius.top_left, color);
        }
        if let Some(color) = self.border_color {
            canvas.stroke_rect(self.bounds, color, self.border_width);
        }

        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
