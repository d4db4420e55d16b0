//! DOM event conversion.
//!
//! Mouse, pointer, keyboard, and focus events become core [`Event`]s here,
//! so widgets never see a `web_sys` type. Whether a navigation key gets
//! `preventDefault` is the element's call, made through the widget's own
//! key-consumption report.

use crate::adapter::key_from_code;
use orientar_core::{Event, MouseButton, Point};
use web_sys::{KeyboardEvent, MouseEvent, PointerEvent};

/// Convert a `web_sys` mouse event to a core event.
pub fn mouse_event_to_orientar(event: &MouseEvent, event_type: &str) -> Event {
    let position = Point::new(event.offset_x() as f32, event.offset_y() as f32);
    let button = button_from_code(event.button());

    match event_type {
        "mousedown" => Event::MouseDown { position, button },
        "mouseup" => Event::MouseUp { position, button },
        "mouseenter" => Event::MouseEnter,
        "mouseleave" => Event::MouseLeave,
        _ => Event::MouseMove { position },
    }
}

/// Convert a `web_sys` pointer event to a core event.
///
/// Pointer events unify mouse, touch, and pen input; positions are
/// relative to the listening element.
pub fn pointer_event_to_orientar(event: &PointerEvent, event_type: &str) -> Event {
    let position = Point::new(event.offset_x() as f32, event.offset_y() as f32);
    let button = button_from_code(event.button());

    match event_type {
        "pointerdown" => Event::MouseDown { position, button },
        "pointerup" => Event::MouseUp { position, button },
        "pointerenter" => Event::MouseEnter,
        "pointerleave" | "pointercancel" => Event::MouseLeave,
        _ => Event::MouseMove { position },
    }
}

/// Convert a `web_sys` keyboard event to a core event.
///
/// Returns `None` for codes the widgets have no binding for; printable
/// characters go through [`text_input_event`] instead.
pub fn keyboard_event_to_orientar(event: &KeyboardEvent, event_type: &str) -> Option<Event> {
    let key = key_from_code(&event.code())?;

    match event_type {
        "keyup" => Some(Event::KeyUp { key }),
        _ => Some(Event::KeyDown { key }),
    }
}

/// Text input from a keyboard event: single printable characters only.
pub fn text_input_event(event: &KeyboardEvent) -> Option<Event> {
    let key = event.key();
    if key.chars().count() == 1 && !event.ctrl_key() && !event.alt_key() && !event.meta_key() {
        Some(Event::TextInput { text: key })
    } else {
        None
    }
}

/// Convert a focus transition to a core event.
pub fn focus_event_to_orientar(event_type: &str) -> Event {
    match event_type {
        "blur" | "focusout" => Event::FocusOut,
        _ => Event::FocusIn,
    }
}

fn button_from_code(button: i16) -> MouseButton {
    match button {
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::Left,
    }
}
