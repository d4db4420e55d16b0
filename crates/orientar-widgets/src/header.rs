//! Site header: brand, navigation links, and the session area.

use orientar_core::{
    widget::{AccessibleRole, FontFamily, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::f32::consts::{PI, TAU};

/// Message emitted when a navigation entry (or the brand) is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelected {
    /// Route of the activated entry
    pub route: String,
}

/// Message emitted when the logout action is activated.
#[derive(Debug, Clone)]
pub struct LogoutRequested;

/// A single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Visible label
    pub label: String,
    /// Route the entry points at
    pub route: String,
}

impl NavItem {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
        }
    }
}

/// Interactive regions of the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderRegion {
    Brand,
    Nav(usize),
    Logout,
}

/// Header widget.
#[derive(Clone, Serialize, Deserialize)]
pub struct Header {
    /// Brand wordmark
    brand: String,
    /// Route the brand links to
    brand_route: String,
    /// Optional brand logo source
    logo_source: Option<String>,
    /// Navigation entries
    items: Vec<NavItem>,
    /// Route currently highlighted as active
    active_route: Option<String>,
    /// Logout button label
    logout_label: String,
    /// Whether the session area is shown
    show_session: bool,
    /// Bar background
    background: Color,
    /// Foreground color for text and glyphs
    foreground: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Region under the last mouse press
    #[serde(skip)]
    pressed: Option<HeaderRegion>,
}

impl Header {
    const BAR_HEIGHT: f32 = 64.0;
    const PADDING_X: f32 = 24.0;
    const NAV_FONT_SIZE: f32 = 14.0;
    const NAV_ITEM_PADDING: f32 = 12.0;

    /// Create a new header with a brand wordmark.
    #[must_use]
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            brand_route: "/".to_string(),
            logo_source: None,
            items: Vec::new(),
            active_route: None,
            logout_label: "Cerrar sesion".to_string(),
            show_session: true,
            background: Color::NAVY,
            foreground: Color::WHITE,
            test_id_value: None,
            bounds: Rect::default(),
            pressed: None,
        }
    }

    /// Set the route the brand links to.
    #[must_use]
    pub fn brand_route(mut self, route: impl Into<String>) -> Self {
        self.brand_route = route.into();
        self
    }

    /// Set the brand logo source.
    #[must_use]
    pub fn logo(mut self, source: impl Into<String>) -> Self {
        self.logo_source = Some(source.into());
        self
    }

    /// Append a navigation entry.
    #[must_use]
    pub fn nav_item(mut self, label: impl Into<String>, route: impl Into<String>) -> Self {
        self.items.push(NavItem::new(label, route));
        self
    }

    /// Replace all navigation entries.
    #[must_use]
    pub fn nav_items(mut self, items: Vec<NavItem>) -> Self {
        self.items = items;
        self
    }

    /// Mark a route as active.
    #[must_use]
    pub fn active_route(mut self, route: impl Into<String>) -> Self {
        self.active_route = Some(route.into());
        self
    }

    /// Set the logout button label.
    #[must_use]
    pub fn logout_label(mut self, label: impl Into<String>) -> Self {
        self.logout_label = label.into();
        self
    }

    /// Hide the session area entirely.
    #[must_use]
    pub const fn without_session(mut self) -> Self {
        self.show_session = false;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the brand wordmark.
    #[must_use]
    pub fn get_brand(&self) -> &str {
        &self.brand
    }

    /// Get the navigation entries.
    #[must_use]
    pub fn get_items(&self) -> &[NavItem] {
        &self.items
    }

    /// Update the active route at runtime.
    pub fn set_active_route(&mut self, route: Option<String>) {
        self.active_route = route;
    }

    fn brand_rect(&self) -> Rect {
        let logo_width = if self.logo_source.is_some() { 40.0 } else { 0.0 };
        let text_width = self.brand.chars().count() as f32 * 18.0 * 0.6;
        Rect::new(
            self.bounds.x + Self::PADDING_X,
            self.bounds.y,
            logo_width + text_width,
            self.bounds.height,
        )
    }

    fn nav_item_width(item: &NavItem) -> f32 {
        (item.label.chars().count() as f32).mul_add(
            Self::NAV_FONT_SIZE * 0.6,
            2.0 * Self::NAV_ITEM_PADDING,
        )
    }

    fn nav_item_rect(&self, index: usize) -> Rect {
        let brand = self.brand_rect();
        let mut x = brand.x + brand.width + 40.0;
        for item in self.items.iter().take(index) {
            x += Self::nav_item_width(item);
        }
        let width = self
            .items
            .get(index)
            .map_or(0.0, Self::nav_item_width);
        Rect::new(x, self.bounds.y, width, self.bounds.height)
    }

    fn logout_rect(&self) -> Rect {
        let width = (self.logout_label.chars().count() as f32).mul_add(13.0 * 0.6, 28.0);
        Rect::new(
            self.bounds.x + self.bounds.width - Self::PADDING_X - width,
            self.bounds.y + (self.bounds.height - 36.0) / 2.0,
            width,
            36.0,
        )
    }

    fn user_glyph_center(&self) -> Point {
        let logout = self.logout_rect();
        Point::new(logout.x - 28.0, self.bounds.y + self.bounds.height / 2.0)
    }

    fn region_at(&self, position: &Point) -> Option<HeaderRegion> {
        if self.brand_rect().contains_point(position) {
            return Some(HeaderRegion::Brand);
        }
        for index in 0..self.items.len() {
            if self.nav_item_rect(index).contains_point(position) {
                return Some(HeaderRegion::Nav(index));
            }
        }
        if self.show_session && self.logout_rect().contains_point(position) {
            return Some(HeaderRegion::Logout);
        }
        None
    }

    fn activate(&self, region: HeaderRegion) -> Option<Box<dyn Any + Send>> {
        match region {
            HeaderRegion::Brand => Some(Box::new(NavSelected {
                route: self.brand_route.clone(),
            })),
            HeaderRegion::Nav(index) => {
                let item = self.items.get(index)?;
                Some(Box::new(NavSelected {
                    route: item.route.clone(),
                }))
            }
            HeaderRegion::Logout => Some(Box::new(LogoutRequested)),
        }
    }

    fn is_active(&self, item: &NavItem) -> bool {
        self.active_route.as_deref() == Some(item.route.as_str())
    }
}

impl Widget for Header {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Header"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.max_width, Self::BAR_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background);

        let brand = self.brand_rect();
        let center_y = self.bounds.y + self.bounds.height / 2.0;
        let mut text_x = brand.x;
        if let Some(source) = &self.logo_source {
            canvas.draw_image(source, Rect::new(brand.x, center_y - 16.0, 32.0, 32.0));
            text_x += 40.0;
        }
        let brand_style = TextStyle {
            size: 18.0,
            color: self.foreground,
            weight: FontWeight::Semibold,
            family: FontFamily::Display,
            ..Default::default()
        };
        canvas.draw_text(&self.brand, Point::new(text_x, center_y - 9.0), &brand_style);

        for (index, item) in self.items.iter().enumerate() {
            let rect = self.nav_item_rect(index);
            let active = self.is_active(item);
            let style = TextStyle {
                size: Self::NAV_FONT_SIZE,
                color: self.foreground,
                weight: if active {
                    FontWeight::Semibold
                } else {
                    FontWeight::Normal
                },
                ..Default::default()
            };
            canvas.draw_text(
                &item.label,
                Point::new(rect.x + Self::NAV_ITEM_PADDING, center_y - 7.0),
                &style,
            );
            if active {
                canvas.fill_rect(
                    Rect::new(
                        rect.x + Self::NAV_ITEM_PADDING,
                        center_y + 12.0,
                        rect.width - 2.0 * Self::NAV_ITEM_PADDING,
                        2.0,
                    ),
                    self.foreground,
                );
            }
        }

        if self.show_session {
            let head = self.user_glyph_center();
            canvas.fill_circle(Point::new(head.x, head.y - 4.0), 4.0, self.foreground);
            canvas.fill_arc(Point::new(head.x, head.y + 7.0), 7.0, PI, TAU, self.foreground);

            let logout = self.logout_rect();
            canvas.stroke_rect(logout, self.foreground, 1.5);
            let label_style = TextStyle {
                size: 13.0,
                color: self.foreground,
                weight: FontWeight::Medium,
                ..Default::default()
            };
            canvas.draw_text(
                &self.logout_label,
                Point::new(logout.x + 14.0, logout.y + 10.0),
                &label_style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.pressed = self.region_at(position);
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let pressed = self.pressed.take()?;
                if self.region_at(position) == Some(pressed) {
                    self.activate(pressed)
                } else {
                    None
                }
            }
            Event::MouseLeave => {
                self.pressed = None;
                None
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
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.brand)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Navigation
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orientar_core::{DrawCommand, RecordingCanvas};

    fn sample_header() -> Header {
        let mut header = Header::new("UniNavigator")
            .brand_route("/home")
            .nav_item("Inicio", "/home")
            .nav_item("Universidades", "/universidades")
            .nav_item("Becas", "/becas")
            .active_route("/becas");
        header.layout(Rect::new(0.0, 0.0, 1200.0, 64.0));
        header
    }

    fn click(header: &mut Header, at: Point) -> Option<Box<dyn Any + Send>> {
        header.event(&Event::MouseDown {
            position: at,
            button: MouseButton::Left,
        });
        header.event(&Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        })
    }

    // ===== Construction Tests =====

    #[test]
    fn test_header_new() {
        let header = Header::new("UniNavigator");
        assert_eq!(header.get_brand(), "UniNavigator");
        assert!(header.get_items().is_empty());
    }

    #[test]
    fn test_header_nav_items_builder() {
        let header = sample_header();
        assert_eq!(header.get_items().len(), 3);
        assert_eq!(header.get_items()[1].route, "/universidades");
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_nav_click_emits_route() {
        let mut header = sample_header();
        let target = header.nav_item_rect(1).center();

        let msg = click(&mut header, target).unwrap();
        let nav = msg.downcast::<NavSelected>().unwrap();
        assert_eq!(nav.route, "/universidades");
    }

    #[test]
    fn test_brand_click_emits_brand_route() {
        let mut header = sample_header();
        let target = header.brand_rect().center();

        let msg = click(&mut header, target).unwrap();
        let nav = msg.downcast::<NavSelected>().unwrap();
        assert_eq!(nav.route, "/home");
    }

    #[test]
    fn test_logout_click_emits_logout() {
        let mut header = sample_header();
        let target = header.logout_rect().center();

        let msg = click(&mut header, target).unwrap();
        assert!(msg.downcast::<LogoutRequested>().is_ok());
    }

    #[test]
    fn test_release_on_other_region_is_ignored() {
        let mut header = sample_header();
        let down = header.nav_item_rect(0).center();
        let up = header.nav_item_rect(2).center();

        header.event(&Event::MouseDown {
            position: down,
            button: MouseButton::Left,
        });
        let msg = header.event(&Event::MouseUp {
            position: up,
            button: MouseButton::Left,
        });
        assert!(msg.is_none());
    }

    #[test]
    fn test_click_on_empty_bar_does_nothing() {
        let mut header = sample_header();
        let msg = click(&mut header, Point::new(1100.0, 5.0));
        assert!(msg.is_none());
    }

    #[test]
    fn test_hidden_session_ignores_logout_area() {
        let mut header = Header::new("UniNavigator").without_session();
        header.layout(Rect::new(0.0, 0.0, 1200.0, 64.0));
        let target = header.logout_rect().center();

        let msg = click(&mut header, target);
        assert!(msg.is_none());
    }

    // ===== Active Route Tests =====

    #[test]
    fn test_active_route_paints_underline() {
        let header = sample_header();
        let mut canvas = RecordingCanvas::new();
        header.paint(&mut canvas);

        // Bar background plus exactly one active underline.
        let filled_rects = canvas
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { style, .. } if style.fill.is_some()))
            .count();
        assert_eq!(filled_rects, 2);
    }

    #[test]
    fn test_set_active_route_at_runtime() {
        let mut header = sample_header();
        let first = header.get_items()[0].clone();
        header.set_active_route(Some("/home".to_string()));
        assert!(header.is_active(&first));
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_includes_all_labels() {
        let header = sample_header();
        let mut canvas = RecordingCanvas::new();
        header.paint(&mut canvas);

        let texts: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert!(texts.iter().any(|t| t == "UniNavigator"));
        assert!(texts.iter().any(|t| t == "Inicio"));
        assert!(texts.iter().any(|t| t == "Cerrar sesion"));
    }

    #[test]
    fn test_header_accessible_role_is_navigation() {
        let header = Header::new("UniNavigator");
        assert_eq!(header.accessible_role(), AccessibleRole::Navigation);
        assert_eq!(header.accessible_name(), Some("UniNavigator"));
    }

    #[test]
    fn test_header_measure_fills_width() {
        let header = Header::new("UniNavigator");
        let size = header.measure(Constraints::new(0.0, 1024.0, 0.0, 768.0));
        assert!((size.width - 1024.0).abs() < f32::EPSILON);
        assert!((size.height - 64.0).abs() < f32::EPSILON);
    }
}
