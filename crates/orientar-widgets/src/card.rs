//! Card widget: image, title, body copy, and an optional action button.

use crate::button::ButtonPriority;
use orientar_core::{
    widget::{AccessibleRole, FontFamily, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Card flavors the site uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardKind {
    /// Image, title, and body only
    #[default]
    Default,
    /// Adds an action button at the bottom
    WithButton,
}

/// Message emitted when the card's action button is activated.
#[derive(Debug, Clone)]
pub struct CardButtonClicked;

/// Card widget.
#[derive(Clone, Serialize, Deserialize)]
pub struct Card {
    /// Optional cover image source
    image_source: Option<String>,
    /// Card title
    title: String,
    /// Body copy
    body: String,
    /// Card flavor
    kind: CardKind,
    /// Action button label
    button_label: String,
    /// Action button priority
    button_priority: ButtonPriority,
    /// Preferred width
    width: f32,
    /// Background color
    background: Color,
    /// Border color
    border_color: Color,
    /// Corner radius
    corner_radius: f32,
    /// Inner padding
    padding: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Action button pressed state
    #[serde(skip)]
    button_pressed: bool,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            image_source: None,
            title: title.into(),
            body: body.into(),
            kind: CardKind::Default,
            button_label: "Ver mas".to_string(),
            button_priority: ButtonPriority::Primary,
            width: 280.0,
            background: Color::WHITE,
            border_color: Color::BORDER_GRAY,
            corner_radius: 12.0,
            padding: 16.0,
            test_id_value: None,
            bounds: Rect::default(),
            button_pressed: false,
        }
    }

    /// Set the cover image source.
    #[must_use]
    pub fn image(mut self, source: impl Into<String>) -> Self {
        self.image_source = Some(source.into());
        self
    }

    /// Set the card flavor.
    #[must_use]
    pub const fn kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the action button label and priority (implies a button card).
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, priority: ButtonPriority) -> Self {
        self.kind = CardKind::WithButton;
        self.button_label = label.into();
        self.button_priority = priority;
        self
    }

    /// Set preferred width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(120.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the flavor.
    #[must_use]
    pub const fn get_kind(&self) -> CardKind {
        self.kind
    }

    /// Whether the card carries a cover image.
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image_source.is_some()
    }

    /// Height of the cover image area.
    fn image_height(&self) -> f32 {
        if self.image_source.is_some() {
            self.bounds.width * 9.0 / 16.0
        } else {
            0.0
        }
    }

    /// Rect of the action button at the bottom of the card.
    fn action_rect(&self) -> Rect {
        let width = 2.0f32.mul_add(-self.padding, self.bounds.width);
        Rect::new(
            self.bounds.x + self.padding,
            self.bounds.y + self.bounds.height - self.padding - 36.0,
            width,
            36.0,
        )
    }

    fn preferred_height(&self) -> f32 {
        let image = if self.image_source.is_some() {
            self.width * 9.0 / 16.0
        } else {
            0.0
        };
        let action = if self.kind == CardKind::WithButton {
            52.0
        } else {
            0.0
        };
        image + 120.0 + action
    }
}

impl Widget for Card {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Card"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.width, self.preferred_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rounded_rect(self.bounds, self.corner_radius, self.background);
        canvas.stroke_rect(self.bounds, self.border_color, 1.0);

        let mut cursor_y = self.bounds.y;
        if let Some(source) = &self.image_source {
            let image_rect = Rect::new(
                self.bounds.x,
                self.bounds.y,
                self.bounds.width,
                self.image_height(),
            );
            canvas.draw_image(source, image_rect);
            cursor_y += image_rect.height;
        }

        let title_style = TextStyle {
            size: 18.0,
            color: Color::BLACK,
            weight: FontWeight::Semibold,
            family: FontFamily::Display,
            ..Default::default()
        };
        canvas.draw_text(
            &self.title,
            Point::new(self.bounds.x + self.padding, cursor_y + self.padding),
            &title_style,
        );

        let body_style = TextStyle {
            size: 14.0,
            color: Color::TEXT_GRAY,
            ..Default::default()
        };
        canvas.draw_text(
            &self.body,
            Point::new(self.bounds.x + self.padding, cursor_y + self.padding + 28.0),
            &body_style,
        );

        if self.kind == CardKind::WithButton {
            let action = self.action_rect();
            let (fill, border, text_color) = match self.button_priority {
                ButtonPriority::Primary => (Some(Color::NAVY), None, Color::WHITE),
                ButtonPriority::Secondary => (Some(Color::WHITE), Some(Color::NAVY), Color::NAVY),
                ButtonPriority::Tertiary => (None, None, Color::NAVY),
            };
            if let Some(color) = fill {
                canvas.fill_rounded_rect(action, 8.0, color);
            }
            if let Some(color) = border {
                canvas.stroke_rect(action, color, 1.5);
            }
            let label_style = TextStyle {
                size: 14.0,
                color: text_color,
                weight: FontWeight::Medium,
                ..Default::default()
            };
            let label_width = self.button_label.len() as f32 * 14.0 * 0.6;
            canvas.draw_text(
                &self.button_label,
                Point::new(
                    action.x + (action.width - label_width) / 2.0,
                    action.y + 9.0,
                ),
                &label_style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.kind != CardKind::WithButton {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.action_rect().contains_point(position) {
                    self.button_pressed = true;
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.button_pressed;
                self.button_pressed = false;

                if was_pressed && self.action_rect().contains_point(position) {
                    Some(Box::new(CardButtonClicked))
                } else {
                    None
                }
            }
            Event::MouseLeave => {
                self.button_pressed = false;
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
        self.kind == CardKind::WithButton
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Group
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
    use orientar_core::{DrawCommand, RecordingCanvas, Widget};

    fn laid_out_card(card: Card) -> Card {
        let mut c = card;
        c.layout(Rect::new(0.0, 0.0, 280.0, 300.0));
        c
    }

    #[test]
    fn test_card_new() {
        let c = Card::new("Medicina", "Conoce el programa");
        assert_eq!(c.title(), "Medicina");
        assert_eq!(c.get_kind(), CardKind::Default);
        assert!(!c.has_image());
    }

    #[test]
    fn test_card_action_implies_button_kind() {
        let c = Card::new("Becas", "Postula ahora").action("Postular", ButtonPriority::Secondary);
        assert_eq!(c.get_kind(), CardKind::WithButton);
        assert_eq!(c.button_label, "Postular");
        assert_eq!(c.button_priority, ButtonPriority::Secondary);
    }

    #[test]
    fn test_card_measure_grows_with_content() {
        let plain = Card::new("T", "B");
        let with_image = Card::new("T", "B").image("/img/campus.webp");
        let constraints = Constraints::loose(Size::new(1000.0, 1000.0));

        let plain_size = plain.measure(constraints);
        let image_size = with_image.measure(constraints);
        assert!(image_size.height > plain_size.height);
    }

    #[test]
    fn test_card_paint_includes_image_command() {
        let c = laid_out_card(Card::new("U. Andina", "Campus central").image("/img/andina.webp"));
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);

        let image = canvas.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::Image { source, .. } => Some(source.clone()),
            _ => None,
        });
        assert_eq!(image.as_deref(), Some("/img/andina.webp"));
    }

    #[test]
    fn test_card_paint_title_and_body() {
        let c = laid_out_card(Card::new("Titulo", "Cuerpo"));
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);

        let texts: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"Titulo"));
        assert!(texts.contains(&"Cuerpo"));
    }

    #[test]
    fn test_card_button_click_fires() {
        let mut c = laid_out_card(
            Card::new("Becas", "Postula").action("Postular", ButtonPriority::Primary),
        );
        let action = c.action_rect();
        let center = action.center();

        c.event(&Event::MouseDown {
            position: center,
            button: MouseButton::Left,
        });
        let msg = c.event(&Event::MouseUp {
            position: center,
            button: MouseButton::Left,
        });
        assert!(msg.unwrap().downcast::<CardButtonClicked>().is_ok());
    }

    #[test]
    fn test_card_release_outside_action_does_not_fire() {
        let mut c = laid_out_card(
            Card::new("Becas", "Postula").action("Postular", ButtonPriority::Primary),
        );
        let center = c.action_rect().center();

        c.event(&Event::MouseDown {
            position: center,
            button: MouseButton::Left,
        });
        let msg = c.event(&Event::MouseUp {
            position: Point::new(5.0, 5.0),
            button: MouseButton::Left,
        });
        assert!(msg.is_none());
    }

    #[test]
    fn test_default_card_ignores_clicks() {
        let mut c = laid_out_card(Card::new("Info", "Sin accion"));
        let msg = c.event(&Event::MouseDown {
            position: Point::new(140.0, 150.0),
            button: MouseButton::Left,
        });
        assert!(msg.is_none());
        assert!(!c.is_interactive());
    }

    #[test]
    fn test_card_accessible_name_is_title() {
        let c = Card::new("Ingenieria", "detalle");
        assert_eq!(Widget::accessible_name(&c), Some("Ingenieria"));
        assert_eq!(c.accessible_role(), AccessibleRole::Group);
    }
}
