//! Site footer: link columns, a subscribe box, legal links, and social links.

use orientar_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Message emitted when any footer link is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLinkSelected {
    /// Route of the activated link
    pub route: String,
}

/// Message emitted when the subscribe box is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeRequested {
    /// Email address entered by the visitor
    pub email: String,
}

/// A single footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Visible label
    pub label: String,
    /// Route the link points at
    pub route: String,
}

impl FooterLink {
    /// Create a footer link.
    #[must_use]
    pub fn new(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
        }
    }
}

/// A heading with a stack of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading
    pub heading: String,
    /// Links in the column
    pub links: Vec<FooterLink>,
}

/// The subscribe box state.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SubscribeBox {
    heading: String,
    placeholder: String,
    #[serde(skip)]
    email: String,
    #[serde(skip)]
    focused: bool,
}

/// Interactive regions of the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FooterRegion {
    Link { column: usize, row: usize },
    Legal(usize),
    Social(usize),
}

/// Footer widget.
#[derive(Clone, Serialize, Deserialize)]
pub struct Footer {
    /// Link columns
    columns: Vec<FooterColumn>,
    /// Legal links on the bottom strip
    legal: Vec<FooterLink>,
    /// Social links on the bottom strip
    social: Vec<FooterLink>,
    /// Optional subscribe box
    subscribe: Option<SubscribeBox>,
    /// Optional brand logo source
    logo_source: Option<String>,
    /// Background color
    background: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Region under the last mouse press
    #[serde(skip)]
    pressed: Option<FooterRegion>,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    const PADDING: f32 = 32.0;
    const BOTTOM_HEIGHT: f32 = 72.0;
    const LINK_HEIGHT: f32 = 28.0;
    const LINK_FONT_SIZE: f32 = 14.0;

    /// Create an empty footer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            legal: Vec::new(),
            social: Vec::new(),
            subscribe: None,
            logo_source: None,
            background: Color::SURFACE,
            test_id_value: None,
            bounds: Rect::default(),
            pressed: None,
        }
    }

    /// Append a link column.
    #[must_use]
    pub fn column(mut self, heading: impl Into<String>, links: Vec<FooterLink>) -> Self {
        self.columns.push(FooterColumn {
            heading: heading.into(),
            links,
        });
        self
    }

    /// Append a legal link to the bottom strip.
    #[must_use]
    pub fn legal_link(mut self, label: impl Into<String>, route: impl Into<String>) -> Self {
        self.legal.push(FooterLink::new(label, route));
        self
    }

    /// Append a social link to the bottom strip.
    #[must_use]
    pub fn social_link(mut self, name: impl Into<String>, route: impl Into<String>) -> Self {
        self.social.push(FooterLink::new(name, route));
        self
    }

    /// Enable the subscribe box.
    #[must_use]
    pub fn subscribe(mut self, heading: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.subscribe = Some(SubscribeBox {
            heading: heading.into(),
            placeholder: placeholder.into(),
            email: String::new(),
            focused: false,
        });
        self
    }

    /// Set the brand logo source.
    #[must_use]
    pub fn logo(mut self, source: impl Into<String>) -> Self {
        self.logo_source = Some(source.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the link columns.
    #[must_use]
    pub fn get_columns(&self) -> &[FooterColumn] {
        &self.columns
    }

    /// Current subscribe box contents.
    #[must_use]
    pub fn subscribe_email(&self) -> Option<&str> {
        self.subscribe.as_ref().map(|s| s.email.as_str())
    }

    /// Whether the subscribe box has focus.
    #[must_use]
    pub fn subscribe_focused(&self) -> bool {
        self.subscribe.as_ref().is_some_and(|s| s.focused)
    }

    fn slot_count(&self) -> usize {
        self.columns.len() + usize::from(self.subscribe.is_some())
    }

    fn slot_width(&self) -> f32 {
        let slots = self.slot_count().max(1) as f32;
        (self.bounds.width - 2.0 * Self::PADDING) / slots
    }

    fn slot_x(&self, slot: usize) -> f32 {
        (slot as f32).mul_add(self.slot_width(), self.bounds.x + Self::PADDING)
    }

    fn top_y(&self) -> f32 {
        self.bounds.y + Self::PADDING
    }

    fn link_rect(&self, column: usize, row: usize) -> Rect {
        let label_width = self.columns.get(column).and_then(|c| c.links.get(row)).map_or(
            0.0,
            |link| link.label.chars().count() as f32 * Self::LINK_FONT_SIZE * 0.6,
        );
        Rect::new(
            self.slot_x(column),
            (row as f32).mul_add(Self::LINK_HEIGHT, self.top_y() + 40.0),
            label_width,
            Self::LINK_HEIGHT - 6.0,
        )
    }

    fn subscribe_input_rect(&self) -> Rect {
        let slot = self.columns.len();
        Rect::new(
            self.slot_x(slot),
            self.top_y() + 40.0,
            self.slot_width() - 16.0,
            36.0,
        )
    }

    fn divider_y(&self) -> f32 {
        self.bounds.y + self.bounds.height - Self::BOTTOM_HEIGHT
    }

    fn bottom_center_y(&self) -> f32 {
        self.divider_y() + Self::BOTTOM_HEIGHT / 2.0
    }

    fn legal_rect(&self, index: usize) -> Rect {
        let mut x = self.bounds.x + Self::PADDING + 72.0;
        for link in self.legal.iter().take(index) {
            x += (link.label.chars().count() as f32).mul_add(13.0 * 0.6, 24.0);
        }
        let width = self.legal.get(index).map_or(0.0, |link| {
            link.label.chars().count() as f32 * 13.0 * 0.6
        });
        Rect::new(x, self.bottom_center_y() - 10.0, width, 20.0)
    }

    fn social_rect(&self, index: usize) -> Rect {
        let count = self.social.len();
        let x = (count.saturating_sub(index) as f32).mul_add(
            -36.0,
            self.bounds.x + self.bounds.width - Self::PADDING,
        );
        Rect::new(x, self.bottom_center_y() - 14.0, 28.0, 28.0)
    }

    fn region_at(&self, position: &Point) -> Option<FooterRegion> {
        for (column, col) in self.columns.iter().enumerate() {
            for row in 0..col.links.len() {
                if self.link_rect(column, row).contains_point(position) {
                    return Some(FooterRegion::Link { column, row });
                }
            }
        }
        for index in 0..self.legal.len() {
            if self.legal_rect(index).contains_point(position) {
                return Some(FooterRegion::Legal(index));
            }
        }
        for index in 0..self.social.len() {
            if self.social_rect(index).contains_point(position) {
                return Some(FooterRegion::Social(index));
            }
        }
        None
    }

    fn route_of(&self, region: FooterRegion) -> Option<&str> {
        match region {
            FooterRegion::Link { column, row } => self
                .columns
                .get(column)
                .and_then(|c| c.links.get(row))
                .map(|link| link.route.as_str()),
            FooterRegion::Legal(index) => self.legal.get(index).map(|l| l.route.as_str()),
            FooterRegion::Social(index) => self.social.get(index).map(|l| l.route.as_str()),
        }
    }

    fn handle_subscribe_key(&mut self, key: Key) -> Option<Box<dyn Any + Send>> {
        let boxed = self.subscribe.as_mut()?;
        if !boxed.focused {
            return None;
        }
        match key {
            Key::Enter if !boxed.email.is_empty() => {
                let email = std::mem::take(&mut boxed.email);
                Some(Box::new(SubscribeRequested { email }))
            }
            Key::Backspace => {
                boxed.email.pop();
                None
            }
            Key::Escape => {
                boxed.focused = false;
                None
            }
            _ => None,
        }
    }
}

impl Widget for Footer {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Footer"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let longest = self
            .columns
            .iter()
            .map(|c| c.links.len())
            .max()
            .unwrap_or(0);
        let top = (longest as f32).mul_add(Self::LINK_HEIGHT, 64.0);
        constraints.constrain(Size::new(
            constraints.max_width,
            top + Self::BOTTOM_HEIGHT + 2.0 * Self::PADDING,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background);

        let heading_style = TextStyle {
            size: 15.0,
            color: Color::BLACK,
            weight: FontWeight::Bold,
            ..Default::default()
        };
        let link_style = TextStyle {
            size: Self::LINK_FONT_SIZE,
            color: Color::TEXT_GRAY,
            ..Default::default()
        };

        for (column, col) in self.columns.iter().enumerate() {
            let x = self.slot_x(column);
            canvas.draw_text(&col.heading, Point::new(x, self.top_y()), &heading_style);
            for (row, link) in col.links.iter().enumerate() {
                let rect = self.link_rect(column, row);
                canvas.draw_text(&link.label, Point::new(rect.x, rect.y), &link_style);
            }
        }

        if let Some(boxed) = &self.subscribe {
            let x = self.slot_x(self.columns.len());
            canvas.draw_text(&boxed.heading, Point::new(x, self.top_y()), &heading_style);

            let input = self.subscribe_input_rect();
            canvas.fill_rect(input, Color::WHITE);
            let border = if boxed.focused {
                Color::NAVY
            } else {
                Color::BORDER_GRAY
            };
            canvas.stroke_rect(input, border, if boxed.focused { 2.0 } else { 1.0 });

            let (text, color) = if boxed.email.is_empty() {
                (boxed.placeholder.as_str(), Color::TEXT_GRAY)
            } else {
                (boxed.email.as_str(), Color::BLACK)
            };
            canvas.draw_text(
                text,
                Point::new(input.x + 10.0, input.y + 10.0),
                &TextStyle {
                    size: Self::LINK_FONT_SIZE,
                    color,
                    ..Default::default()
                },
            );
        }

        let divider_y = self.divider_y();
        canvas.draw_line(
            Point::new(self.bounds.x + Self::PADDING, divider_y),
            Point::new(self.bounds.x + self.bounds.width - Self::PADDING, divider_y),
            Color::BORDER_GRAY,
            1.0,
        );

        if let Some(source) = &self.logo_source {
            let logo = Rect::new(
                self.bounds.x + Self::PADDING,
                self.bottom_center_y() - 20.0,
                56.0,
                40.0,
            );
            canvas.fill_rect(logo, Color::NAVY);
            canvas.draw_image(source, logo);
        }

        let legal_style = TextStyle {
            size: 13.0,
            color: Color::TEXT_GRAY,
            ..Default::default()
        };
        for (index, link) in self.legal.iter().enumerate() {
            let rect = self.legal_rect(index);
            canvas.draw_text(&link.label, Point::new(rect.x, rect.y + 3.0), &legal_style);
        }

        for (index, link) in self.social.iter().enumerate() {
            let rect = self.social_rect(index);
            let center = rect.center();
            canvas.stroke_circle(center, 13.0, Color::TEXT_GRAY, 1.5);
            if let Some(initial) = link.label.chars().next() {
                canvas.draw_text(
                    &initial.to_uppercase().to_string(),
                    Point::new(center.x - 4.0, center.y - 7.0),
                    &legal_style,
                );
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let over_input = self.subscribe.is_some()
                    && self.subscribe_input_rect().contains_point(position);
                if let Some(boxed) = self.subscribe.as_mut() {
                    boxed.focused = over_input;
                }
                if !over_input {
                    self.pressed = self.region_at(position);
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let pressed = self.pressed.take()?;
                if self.region_at(position) == Some(pressed) {
                    let route = self.route_of(pressed)?.to_string();
                    Some(Box::new(FooterLinkSelected { route }))
                } else {
                    None
                }
            }
            Event::MouseLeave => {
                self.pressed = None;
                None
            }
            Event::TextInput { text } => {
                let boxed = self.subscribe.as_mut()?;
                if boxed.focused {
                    boxed.email.push_str(text);
                }
                None
            }
            Event::KeyDown { key } => self.handle_subscribe_key(*key),
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

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ContentInfo
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
