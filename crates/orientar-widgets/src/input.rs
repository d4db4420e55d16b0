//! Input widget for single-line text entry.
//!
//! The value is a controlled mirror like the dropdown's: the host owns
//! it, edits report back through [`InputChanged`] and the host re-syncs
//! via [`Input::set_value`].

use orientar_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Message emitted on every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChanged {
    /// The new text value
    pub value: String,
}

/// Message emitted when Enter is pressed while focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSubmitted {
    /// The submitted text value
    pub value: String,
}

/// Single-line text input.
#[derive(Serialize, Deserialize)]
pub struct Input {
    /// Current text value (host-controlled mirror)
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Whether the input is disabled
    disabled: bool,
    /// Whether to mask the text (password mode)
    masked: bool,
    /// Maximum length (0 = unlimited)
    max_length: usize,
    /// Text style
    text_style: TextStyle,
    /// Placeholder text color
    placeholder_color: Color,
    /// Background color
    background_color: Color,
    /// Border color
    border_color: Color,
    /// Focused border color
    focus_border_color: Color,
    /// Padding
    padding: f32,
    /// Minimum width
    min_width: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether focused
    #[serde(skip)]
    focused: bool,
    /// Cursor position as a byte offset, always on a char boundary
    #[serde(skip)]
    cursor: usize,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    /// Create a new empty input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            masked: false,
            max_length: 0,
            text_style: TextStyle::default(),
            placeholder_color: Color::TEXT_GRAY,
            background_color: Color::WHITE,
            border_color: Color::BORDER_GRAY,
            focus_border_color: Color::NAVY,
            padding: 10.0,
            min_width: 160.0,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            focused: false,
            cursor: 0,
        }
    }

    /// Set the current value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.enforce_max_length();
        self.cursor = self.value.len();
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set password mode.
    #[must_use]
    pub const fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Set maximum length in characters.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self.enforce_max_length();
        self.clamp_cursor();
        self
    }

    /// Set padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(0.0);
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
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Re-synchronize the controlled value from the host.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.enforce_max_length();
        self.clamp_cursor();
    }

    /// Get current value.
    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Get placeholder.
    #[must_use]
    pub fn get_placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position as a byte offset into the value.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Check if focused.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Get display text (dots in password mode).
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Truncate the value to `max_length` characters.
    fn enforce_max_length(&mut self) {
        if self.max_length == 0 {
            return;
        }
        if let Some((byte, _)) = self.value.char_indices().nth(self.max_length) {
            self.value.truncate(byte);
        }
    }

    /// Pull the cursor back onto a char boundary inside the value.
    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.value.len());
        while !self.value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    /// Insert text at cursor.
    fn insert_text(&mut self, text: &str) -> bool {
        let mut changed = false;
        for c in text.chars() {
            if self.max_length > 0 && self.value.chars().count() >= self.max_length {
                break;
            }
            self.value.insert(self.cursor, c);
            self.cursor += c.len_utf8();
            changed = true;
        }
        changed
    }

    /// Delete character before cursor.
    fn backspace(&mut self) -> bool {
        let Some(prev) = self.value[..self.cursor].chars().next_back() else {
            return false;
        };
        self.cursor -= prev.len_utf8();
        self.value.remove(self.cursor);
        true
    }

    /// Delete character at cursor.
    fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        true
    }

    fn changed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(InputChanged {
            value: self.value.clone(),
        }))
    }
}

impl Widget for Input {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn type_name(&self) -> &'static str {
        "Input"
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = 2.0f32.mul_add(self.padding, self.text_style.size);
        let width = self.min_width.max(constraints.min_width);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background_color);

        let border_color = if self.focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        canvas.stroke_rect(self.bounds, border_color, 1.0);

        let position = Point::new(self.bounds.x + self.padding, self.bounds.y + self.padding);
        if self.value.is_empty() {
            let mut placeholder_style = self.text_style.clone();
            placeholder_style.color = self.placeholder_color;
            canvas.draw_text(&self.placeholder, position, &placeholder_style);
        } else {
            let display = self.display_text();
            canvas.draw_text(&display, position, &self.text_style);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseDown { position, .. } => {
                let was_focused = self.focused;
                self.focused = self.bounds.contains_point(position);
                if self.focused && !was_focused {
                    self.cursor = self.value.len();
                }
                None
            }
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            Event::TextInput { text } if self.focused => {
                if self.insert_text(text) {
                    self.changed()
                } else {
                    None
                }
            }
            Event::KeyDown { key } if self.focused => match key {
                Key::Backspace => {
                    if self.backspace() {
                        self.changed()
                    } else {
                        None
                    }
                }
                Key::Delete => {
                    if self.delete() {
                        self.changed()
                    } else {
                        None
                    }
                }
                Key::Left => {
                    if let Some(prev) = self.value[..self.cursor].chars().next_back() {
                        self.cursor -= prev.len_utf8();
                    }
                    None
                }
                Key::Right => {
                    if let Some(next) = self.value[self.cursor..].chars().next() {
                        self.cursor += next.len_utf8();
                    }
                    None
                }
                Key::Home => {
                    self.cursor = 0;
                    None
                }
                Key::End => {
                    self.cursor = self.value.len();
                    None
                }
                Key::Enter => Some(Box::new(InputSubmitted {
                    value: self.value.clone(),
                })),
                _ => None,
            },
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
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TextInput
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
    use orientar_core::Widget;

    fn focused_input(input: Input) -> Input {
        let mut i = input;
        i.layout(Rect::new(0.0, 0.0, 200.0, 36.0));
        i.event(&Event::FocusIn);
        i
    }

    #[test]
    fn test_input_new() {
        let input = Input::new();
        assert!(input.is_empty());
        assert!(!input.is_focused());
        assert!(!input.masked);
    }

    #[test]
    fn test_input_builder() {
        let input = Input::new()
            .value("correo@uni.edu")
            .placeholder("Correo electronico")
            .masked(false)
            .max_length(64)
            .min_width(240.0)
            .with_test_id("email")
            .with_accessible_name("Correo");

        assert_eq!(input.get_value(), "correo@uni.edu");
        assert_eq!(input.get_placeholder(), "Correo electronico");
        assert_eq!(Widget::test_id(&input), Some("email"));
        assert_eq!(input.accessible_name(), Some("Correo"));
    }

    #[test]
    fn test_input_value_truncated_to_max_length() {
        let input = Input::new().max_length(4).value("abcdef");
        assert_eq!(input.get_value(), "abcd");
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn test_typing_emits_changed() {
        let mut input = focused_input(Input::new());

        let msg = input.event(&Event::TextInput {
            text: "h".to_string(),
        });
        let msg = msg.unwrap().downcast::<InputChanged>().unwrap();
        assert_eq!(msg.value, "h");

        input.event(&Event::TextInput {
            text: "ola".to_string(),
        });
        assert_eq!(input.get_value(), "hola");
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn test_typing_unfocused_is_ignored() {
        let mut input = Input::new();
        input.layout(Rect::new(0.0, 0.0, 200.0, 36.0));

        let msg = input.event(&Event::TextInput {
            text: "x".to_string(),
        });
        assert!(msg.is_none());
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut input = focused_input(Input::new().value("abc"));

        let msg = input.event(&Event::KeyDown {
            key: Key::Backspace,
        });
        assert!(msg.is_some());
        assert_eq!(input.get_value(), "ab");

        // Empty value: backspace is a silent no-op.
        input.event(&Event::KeyDown {
            key: Key::Backspace,
        });
        input.event(&Event::KeyDown {
            key: Key::Backspace,
        });
        let msg = input.event(&Event::KeyDown {
            key: Key::Backspace,
        });
        assert!(msg.is_none());
        assert!(input.is_empty());
    }

    #[test]
    fn test_cursor_navigation_and_mid_insert() {
        let mut input = focused_input(Input::new().value("ac"));

        input.event(&Event::KeyDown { key: Key::Left });
        assert_eq!(input.cursor_position(), 1);

        input.event(&Event::TextInput {
            text: "b".to_string(),
        });
        assert_eq!(input.get_value(), "abc");

        input.event(&Event::KeyDown { key: Key::Home });
        assert_eq!(input.cursor_position(), 0);
        input.event(&Event::KeyDown { key: Key::End });
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = focused_input(Input::new().value("abc"));
        input.event(&Event::KeyDown { key: Key::Home });

        let msg = input.event(&Event::KeyDown { key: Key::Delete });
        assert!(msg.is_some());
        assert_eq!(input.get_value(), "bc");
    }

    #[test]
    fn test_enter_submits_current_value() {
        let mut input = focused_input(Input::new().value("busqueda"));

        let msg = input.event(&Event::KeyDown { key: Key::Enter });
        let msg = msg.unwrap().downcast::<InputSubmitted>().unwrap();
        assert_eq!(msg.value, "busqueda");
    }

    #[test]
    fn test_multibyte_editing_keeps_char_boundaries() {
        let mut input = focused_input(Input::new());
        input.event(&Event::TextInput {
            text: "año".to_string(),
        });
        assert_eq!(input.get_value(), "año");

        input.event(&Event::KeyDown { key: Key::Left });
        let msg = input.event(&Event::KeyDown {
            key: Key::Backspace,
        });
        assert!(msg.is_some());
        assert_eq!(input.get_value(), "ao");
    }

    #[test]
    fn test_max_length_counts_chars_not_bytes() {
        let input = Input::new().max_length(2).value("ñandu");
        assert_eq!(input.get_value(), "ña");
    }

    #[test]
    fn test_masked_display() {
        let input = Input::new().masked(true).value("clave");
        assert_eq!(input.display_text(), "\u{2022}".repeat(5));
        assert_eq!(input.get_value(), "clave");
    }

    #[test]
    fn test_max_length_blocks_insert() {
        let mut input = focused_input(Input::new().max_length(3).value("abc"));

        let msg = input.event(&Event::TextInput {
            text: "d".to_string(),
        });
        assert!(msg.is_none());
        assert_eq!(input.get_value(), "abc");
    }

    #[test]
    fn test_click_focuses_and_click_away_blurs() {
        let mut input = Input::new().value("texto");
        input.layout(Rect::new(0.0, 0.0, 200.0, 36.0));

        input.event(&Event::MouseDown {
            position: Point::new(50.0, 18.0),
            button: orientar_core::MouseButton::Left,
        });
        assert!(input.is_focused());
        assert_eq!(input.cursor_position(), 5);

        input.event(&Event::MouseDown {
            position: Point::new(500.0, 500.0),
            button: orientar_core::MouseButton::Left,
        });
        assert!(!input.is_focused());
    }

    #[test]
    fn test_set_value_resyncs_and_clamps_cursor() {
        let mut input = focused_input(Input::new().value("largo"));
        assert_eq!(input.cursor_position(), 5);

        input.set_value("ab");
        assert_eq!(input.get_value(), "ab");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut input = Input::new().disabled(true);
        input.layout(Rect::new(0.0, 0.0, 200.0, 36.0));

        assert!(input.event(&Event::FocusIn).is_none());
        assert!(input
            .event(&Event::TextInput {
                text: "x".to_string()
            })
            .is_none());
        assert!(input.is_empty());
        assert!(!Widget::is_focusable(&input));
    }

    #[test]
    fn test_input_accessible_role() {
        let input = Input::new();
        assert_eq!(input.accessible_role(), AccessibleRole::TextInput);
    }
}
