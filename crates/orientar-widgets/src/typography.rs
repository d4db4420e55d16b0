//! Typography widget for styled text content.

use orientar_core::{
    widget::{AccessibleRole, FontFamily, FontStyle, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Text variants the site uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypographyVariant {
    /// Page title
    Heading1,
    /// Section title
    Heading2,
    /// Subsection title
    Heading3,
    /// Body copy
    #[default]
    Body,
    /// Small auxiliary text
    Caption,
}

impl TypographyVariant {
    /// Default font size for this variant.
    #[must_use]
    pub const fn font_size(self) -> f32 {
        match self {
            Self::Heading1 => 32.0,
            Self::Heading2 => 24.0,
            Self::Heading3 => 20.0,
            Self::Body => 16.0,
            Self::Caption => 13.0,
        }
    }

    /// Default font weight for this variant.
    #[must_use]
    pub const fn font_weight(self) -> FontWeight {
        match self {
            Self::Heading1 => FontWeight::Bold,
            Self::Heading2 | Self::Heading3 => FontWeight::Semibold,
            Self::Body | Self::Caption => FontWeight::Normal,
        }
    }

    /// Default font family for this variant.
    #[must_use]
    pub const fn font_family(self) -> FontFamily {
        match self {
            Self::Heading1 | Self::Heading2 | Self::Heading3 => FontFamily::Display,
            Self::Body | Self::Caption => FontFamily::Sans,
        }
    }

    /// Whether this variant is a heading level.
    #[must_use]
    pub const fn is_heading(self) -> bool {
        matches!(self, Self::Heading1 | Self::Heading2 | Self::Heading3)
    }
}

/// Typography widget for displaying styled text.
#[derive(Clone, Serialize, Deserialize)]
pub struct Typography {
    /// Text content
    content: String,
    /// Variant driving size/weight/family defaults
    variant: TypographyVariant,
    /// Text color
    color: Color,
    /// Font size override
    size_override: Option<f32>,
    /// Font weight override
    weight_override: Option<FontWeight>,
    /// Font style
    font_style: FontStyle,
    /// Line height multiplier
    line_height: f32,
    /// Maximum width before wrapping (None = no wrapping)
    max_width: Option<f32>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Typography {
    /// Create body text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TypographyVariant::Body,
            color: Color::BLACK,
            size_override: None,
            weight_override: None,
            font_style: FontStyle::Normal,
            line_height: 1.2,
            max_width: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Create a heading of the given level (clamped to 1..=3).
    #[must_use]
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        let variant = match level {
            0 | 1 => TypographyVariant::Heading1,
            2 => TypographyVariant::Heading2,
            _ => TypographyVariant::Heading3,
        };
        Self::new(content).variant(variant)
    }

    /// Set the variant.
    #[must_use]
    pub const fn variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Override the variant's font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.size_override = Some(size);
        self
    }

    /// Override the variant's font weight.
    #[must_use]
    pub const fn font_weight(mut self, weight: FontWeight) -> Self {
        self.weight_override = Some(weight);
        self
    }

    /// Set font style.
    #[must_use]
    pub const fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    /// Set line height multiplier.
    #[must_use]
    pub const fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Set maximum width for text wrapping.
    #[must_use]
    pub const fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the variant.
    #[must_use]
    pub const fn get_variant(&self) -> TypographyVariant {
        self.variant
    }

    fn effective_size(&self) -> f32 {
        self.size_override.unwrap_or(self.variant.font_size())
    }

    fn effective_weight(&self) -> FontWeight {
        self.weight_override.unwrap_or(self.variant.font_weight())
    }

    /// Estimate text size (simplified, real font metrics live in the
    /// rendering backend).
    fn estimate_size(&self, max_width: f32) -> Size {
        let font_size = self.effective_size();
        let char_width = font_size * 0.6;
        let line_height = font_size * self.line_height;

        if self.content.is_empty() {
            return Size::new(0.0, line_height);
        }

        let total_width = self.content.len() as f32 * char_width;

        if let Some(max_w) = self.max_width {
            let effective_max = max_w.min(max_width);
            if total_width > effective_max {
                let lines = (total_width / effective_max).ceil();
                return Size::new(effective_max, lines * line_height);
            }
        }

        Size::new(total_width.min(max_width), line_height)
    }
}

impl Widget for Typography {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Typography"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let size = self.estimate_size(constraints.max_width);
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: self.effective_size(),
            color: self.color,
            weight: self.effective_weight(),
            style: self.font_style,
            family: self.variant.font_family(),
        };

        canvas.draw_text(&self.content, self.bounds.origin(), &style);
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
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.variant.is_heading() {
            AccessibleRole::Heading
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
