//! Input events delivered to widgets.
//!
//! The browser bridge folds DOM mouse, pointer, and touch input into the
//! mouse variants here, so widget logic handles one positional vocabulary.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// An input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to a position
    MouseMove {
        /// Cursor position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Cursor position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Cursor position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Scroll wheel or trackpad scroll
    Scroll {
        /// Horizontal delta
        delta_x: f32,
        /// Vertical delta
        delta_y: f32,
    },
    /// Key pressed
    KeyDown {
        /// Which key
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Which key
        key: Key,
    },
    /// Text input (post-IME, printable characters)
    TextInput {
        /// The input text
        text: String,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
    /// Cursor entered widget bounds
    MouseEnter,
    /// Cursor left widget bounds
    MouseLeave,
    /// Viewport resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left (primary) button
    Left,
    /// Right (secondary) button
    Right,
    /// Middle (wheel) button
    Middle,
}

/// Keys the widgets respond to.
///
/// Printable characters arrive as [`Event::TextInput`]; this enum covers
/// navigation and editing keys only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space bar
    Space,
    /// Delete (forward)
    Delete,
    /// Home
    Home,
    /// End
    End,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
}

impl Event {
    /// Check if this is a mouse event.
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseMove { .. }
                | Self::MouseDown { .. }
                | Self::MouseUp { .. }
                | Self::MouseEnter
                | Self::MouseLeave
        )
    }

    /// Check if this is a keyboard event.
    #[must_use]
    pub const fn is_keyboard(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. } | Self::KeyUp { .. } | Self::TextInput { .. }
        )
    }

    /// Check if this is a focus event.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusIn | Self::FocusOut)
    }

    /// Get the position if this is a positional event.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_move() {
        let e = Event::MouseMove {
            position: Point::new(100.0, 200.0),
        };
        assert!(e.is_mouse());
        assert_eq!(e.position(), Some(Point::new(100.0, 200.0)));
    }

    #[test]
    fn test_mouse_down_button() {
        let e = Event::MouseDown {
            position: Point::new(50.0, 50.0),
            button: MouseButton::Left,
        };
        if let Event::MouseDown { button, .. } = e {
            assert_eq!(button, MouseButton::Left);
        } else {
            panic!("Expected MouseDown event");
        }
    }

    #[test]
    fn test_key_down() {
        let e = Event::KeyDown { key: Key::Enter };
        assert!(e.is_keyboard());
        assert_eq!(e.position(), None);
    }

    #[test]
    fn test_text_input() {
        let e = Event::TextInput {
            text: "hola".to_string(),
        };
        assert!(e.is_keyboard());
        assert!(!e.is_mouse());
    }

    #[test]
    fn test_focus_events() {
        assert!(Event::FocusIn.is_focus());
        assert!(Event::FocusOut.is_focus());
        assert!(!Event::FocusIn.is_mouse());
    }

    #[test]
    fn test_scroll() {
        let e = Event::Scroll {
            delta_x: 0.0,
            delta_y: -10.0,
        };
        if let Event::Scroll { delta_y, .. } = e {
            assert_eq!(delta_y, -10.0);
        } else {
            panic!("Expected Scroll event");
        }
    }

    #[test]
    fn test_event_json_roundtrip() {
        let e = Event::MouseDown {
            position: Point::new(10.0, 20.0),
            button: MouseButton::Right,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }

    #[test]
    fn test_key_json_roundtrip() {
        for key in [Key::Enter, Key::Escape, Key::Up, Key::Down] {
            let json = serde_json::to_string(&key).unwrap();
            let back: Key = serde_json::from_str(&json).unwrap();
            assert_eq!(key, back);
        }
    }

    #[test]
    fn test_resize() {
        let e = Event::Resize {
            width: 800.0,
            height: 600.0,
        };
        assert!(!e.is_mouse());
        assert!(!e.is_keyboard());
        assert!(!e.is_focus());
    }
}
