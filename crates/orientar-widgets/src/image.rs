//! Image widget for photos and illustration assets.

use orientar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// How the image should be scaled to fit its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageFit {
    /// Scale to fill the container, may crop
    #[default]
    Cover,
    /// Scale to fit entirely within container, may have letterboxing
    Contain,
    /// Stretch to fill container exactly (may distort)
    Fill,
    /// Don't scale, display at natural size
    None,
}

/// Image widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Image source URI
    source: String,
    /// Alternative text for accessibility
    alt: String,
    /// How to fit the image
    fit: ImageFit,
    /// Intrinsic width (natural size)
    width: Option<f32>,
    /// Intrinsic height (natural size)
    height: Option<f32>,
    /// Corner radius for rounded crops
    corner_radius: f32,
    /// Whether image is loading
    #[serde(skip)]
    loading: bool,
    /// Whether image failed to load
    #[serde(skip)]
    error: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            source: String::new(),
            alt: String::new(),
            fit: ImageFit::Cover,
            width: None,
            height: None,
            corner_radius: 0.0,
            loading: false,
            error: false,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl Image {
    /// Create a new image with source.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Set the alt text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Set how the image should fit.
    #[must_use]
    pub const fn fit(mut self, fit: ImageFit) -> Self {
        self.fit = fit;
        self
    }

    /// Set the intrinsic width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(0.0));
        self
    }

    /// Set the intrinsic height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height.max(0.0));
        self
    }

    /// Set both width and height.
    #[must_use]
    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the image source.
    #[must_use]
    pub fn get_source(&self) -> &str {
        &self.source
    }

    /// Get the alt text.
    #[must_use]
    pub fn get_alt(&self) -> &str {
        &self.alt
    }

    /// Get the fit mode.
    #[must_use]
    pub const fn get_fit(&self) -> ImageFit {
        self.fit
    }

    /// Set loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set error state.
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Check if image failed to load.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// Calculate aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0.0 => Some(w / h),
            _ => None,
        }
    }

    /// Calculate the display rect inside the container for the current fit.
    fn display_rect(&self) -> Rect {
        let container = self.bounds.size();
        let intrinsic = Size::new(
            self.width.unwrap_or(container.width),
            self.height.unwrap_or(container.height),
        );

        let display = match self.fit {
            ImageFit::Fill => container,
            ImageFit::None => intrinsic,
            ImageFit::Contain => {
                let scale =
                    (container.width / intrinsic.width).min(container.height / intrinsic.height);
                Size::new(intrinsic.width * scale, intrinsic.height * scale)
            }
            ImageFit::Cover => {
                let scale =
                    (container.width / intrinsic.width).max(container.height / intrinsic.height);
                Size::new(intrinsic.width * scale, intrinsic.height * scale)
            }
        };

        Rect::new(
            self.bounds.x + (container.width - display.width) / 2.0,
            self.bounds.y + (container.height - display.height) / 2.0,
            display.width,
            display.height,
        )
    }
}

impl Widget for Image {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Image"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = Size::new(self.width.unwrap_or(100.0), self.height.unwrap_or(100.0));
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.source.is_empty() || self.loading || self.error {
            let color = if self.error {
                Color::new(0.9, 0.7, 0.7, 1.0)
            } else {
                Color::new(0.9, 0.9, 0.9, 1.0)
            };
            canvas.fill_rect(self.bounds, color);
            return;
        }

        let display = self.display_rect();
        // Cover scaling can overflow the container, so crop to bounds.
        let needs_clip = display.width > self.bounds.width + 0.5
            || display.height > self.bounds.height + 0.5;
        if needs_clip {
            canvas.push_clip(self.bounds);
        }
        canvas.draw_image(&self.source, display);
        if needs_clip {
            canvas.pop_clip();
        }
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

    fn is_interactive(&self) -> bool {
        false
    }

    fn accessible_name(&self) -> Option<&str> {
        if self.alt.is_empty() {
            None
        } else {
            Some(&self.alt)
        }
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
