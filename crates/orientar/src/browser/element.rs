//! Custom element host for the dropdown widget.
//!
//! One `DropdownElement` instance backs one `<orientar-dropdown>` host
//! element. It owns the widget state, paints into a canvas inside the
//! host's shadow root, reflects open and highlight state onto ARIA
//! attributes, and reports committed selections as a composed `change`
//! CustomEvent with a `{value, label}` detail.
//!
//! The JS side stays a thin shim: the custom element class constructs
//! this type and forwards `connectedCallback`, `disconnectedCallback`,
//! and `attributeChangedCallback` verbatim.

use super::canvas2d::Canvas2DRenderer;
use super::events::{
    focus_event_to_orientar, keyboard_event_to_orientar, pointer_event_to_orientar,
};
use crate::adapter::{normalize_options, ChangeDetail, DropdownAria, ElementSpec};
use orientar_core::{Constraints, Event, MouseButton, Point, Rect, RecordingCanvas, Widget};
use orientar_widgets::{Dropdown, DropdownChanged};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, CustomEvent, CustomEventInit, FocusEvent, HtmlCanvasElement, HtmlElement,
    KeyboardEvent, PointerEvent, ShadowRootInit, ShadowRootMode,
};

/// Render width when the host provides no layout constraint of its own.
const DEFAULT_WIDTH: f32 = 280.0;

/// State shared between the element and its event closures.
struct Shared {
    widget: RefCell<Dropdown>,
    renderer: Canvas2DRenderer,
    canvas: HtmlCanvasElement,
    host: HtmlElement,
    on_change: RefCell<Option<js_sys::Function>>,
}

impl Shared {
    /// Feed one event to the widget, then repaint and re-sync ARIA.
    fn deliver(&self, event: &Event) {
        let message = self.widget.borrow_mut().event(event);
        if let Some(message) = message {
            if let Some(change) = message.downcast_ref::<DropdownChanged>() {
                self.dispatch_change(change);
            }
        }
        self.render();
        self.sync_aria();
    }

    fn render(&self) {
        let mut widget = self.widget.borrow_mut();

        let constraints = Constraints::new(DEFAULT_WIDTH, DEFAULT_WIDTH, 0.0, f32::INFINITY);
        let size = widget.measure(constraints);
        let rows = if widget.is_open() {
            widget.option_count() as f32 + 1.0
        } else {
            1.0
        };

        // The canvas grows to fit the open panel and shrinks back on
        // close. Resizing also clears it, so a full repaint follows.
        self.canvas.set_width(size.width as u32);
        self.canvas.set_height((size.height * rows) as u32);

        widget.layout(Rect::new(0.0, 0.0, size.width, size.height));
        let mut recording = RecordingCanvas::new();
        widget.paint(&mut recording);
        drop(widget);

        self.renderer.clear();
        self.renderer.render(recording.commands());
    }

    fn sync_aria(&self) {
        let aria = DropdownAria::of(&self.widget.borrow());
        self.host
            .set_attribute("aria-expanded", if aria.expanded { "true" } else { "false" })
            .ok();
        match &aria.active_descendant {
            Some(id) => {
                self.host.set_attribute("aria-activedescendant", id).ok();
            }
            None => {
                self.host.remove_attribute("aria-activedescendant").ok();
            }
        }
    }

    fn dispatch_change(&self, change: &DropdownChanged) {
        let detail = ChangeDetail::from(change);
        let json = serde_json::to_string(&detail).unwrap_or_default();
        let detail_js = js_sys::JSON::parse(&json).unwrap_or(JsValue::NULL);

        let init = CustomEventInit::new();
        init.set_detail(&detail_js);
        init.set_bubbles(true);
        init.set_composed(true);
        if let Ok(event) = CustomEvent::new_with_event_init_dict("change", &init) {
            self.host.dispatch_event(&event).ok();
        }

        // Cloned out so a callback that replaces itself cannot hit a
        // borrow held across the call.
        let callback = self.on_change.borrow().clone();
        if let Some(callback) = callback {
            let _ = callback.call1(&JsValue::NULL, &detail_js);
        }
    }
}

/// Bridge between an `<orientar-dropdown>` host element and the widget.
#[wasm_bindgen]
pub struct DropdownElement {
    shared: Rc<Shared>,
    document_pointerdown: Option<Closure<dyn FnMut(PointerEvent)>>,
    _canvas_pointerdown: Closure<dyn FnMut(PointerEvent)>,
    _canvas_pointermove: Closure<dyn FnMut(PointerEvent)>,
    _keydown: Closure<dyn FnMut(KeyboardEvent)>,
    _focus: Closure<dyn FnMut(FocusEvent)>,
    _blur: Closure<dyn FnMut(FocusEvent)>,
}

#[wasm_bindgen]
impl DropdownElement {
    /// Tag name the element registers under.
    #[wasm_bindgen(js_name = tagName)]
    pub fn tag_name() -> String {
        ElementSpec::DROPDOWN.tag_name.to_string()
    }

    /// Attribute names the host must observe.
    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> js_sys::Array {
        ElementSpec::DROPDOWN
            .observed_attributes
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    /// Attach to a host element.
    ///
    /// Creates the shadow root and canvas, seeds the widget from the
    /// host's `placeholder`, `value`, and `aria-label` attributes, and
    /// wires the pointer, keyboard, and focus listeners.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<DropdownElement, JsValue> {
        console_error_panic_hook::set_once();

        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let shadow = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(|_| "Failed to attach shadow root")?;
        let canvas = document
            .create_element("canvas")
            .map_err(|_| "Failed to create canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;
        shadow
            .append_child(&canvas)
            .map_err(|_| "Failed to mount canvas")?;

        host.set_attribute("role", "combobox").ok();
        host.set_attribute("aria-haspopup", "listbox").ok();
        host.set_attribute("aria-expanded", "false").ok();
        if !host.has_attribute("tabindex") {
            host.set_attribute("tabindex", "0").ok();
        }

        let mut widget = Dropdown::new();
        if let Some(placeholder) = host.get_attribute("placeholder") {
            widget = widget.placeholder(placeholder);
        }
        if let Some(value) = host.get_attribute("value") {
            widget = widget.value(value);
        }
        if let Some(label) = host.get_attribute("aria-label") {
            widget = widget.with_accessible_name(label);
        }

        let renderer = Canvas2DRenderer::new(canvas.clone()).map_err(|e| JsValue::from_str(&e))?;

        let shared = Rc::new(Shared {
            widget: RefCell::new(widget),
            renderer,
            canvas,
            host,
            on_change: RefCell::new(None),
        });

        let canvas_pointerdown = {
            let shared = Rc::clone(&shared);
            Closure::new(move |e: PointerEvent| {
                shared.host.focus().ok();
                let event = pointer_event_to_orientar(&e, "pointerdown");
                shared.deliver(&event);
            })
        };
        shared
            .canvas
            .add_event_listener_with_callback(
                "pointerdown",
                canvas_pointerdown.as_ref().unchecked_ref(),
            )
            .ok();

        let canvas_pointermove = {
            let shared = Rc::clone(&shared);
            Closure::new(move |e: PointerEvent| {
                // Hover only highlights rows, so a closed panel has
                // nothing to repaint.
                if !shared.widget.borrow().is_open() {
                    return;
                }
                let event = pointer_event_to_orientar(&e, "pointermove");
                shared.deliver(&event);
            })
        };
        shared
            .canvas
            .add_event_listener_with_callback(
                "pointermove",
                canvas_pointermove.as_ref().unchecked_ref(),
            )
            .ok();

        let keydown = {
            let shared = Rc::clone(&shared);
            Closure::new(move |e: KeyboardEvent| {
                let Some(event) = keyboard_event_to_orientar(&e, "keydown") else {
                    return;
                };
                if let Event::KeyDown { key } = &event {
                    if shared.widget.borrow().handles_key(*key) {
                        e.prevent_default();
                    }
                }
                shared.deliver(&event);
            })
        };
        shared
            .host
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .ok();

        let focus = {
            let shared = Rc::clone(&shared);
            Closure::new(move |_e: FocusEvent| {
                shared.deliver(&focus_event_to_orientar("focus"));
            })
        };
        shared
            .host
            .add_event_listener_with_callback("focus", focus.as_ref().unchecked_ref())
            .ok();

        let blur = {
            let shared = Rc::clone(&shared);
            Closure::new(move |_e: FocusEvent| {
                shared.deliver(&focus_event_to_orientar("blur"));
            })
        };
        shared
            .host
            .add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())
            .ok();

        shared.render();
        shared.sync_aria();

        Ok(Self {
            shared,
            document_pointerdown: None,
            _canvas_pointerdown: canvas_pointerdown,
            _canvas_pointermove: canvas_pointermove,
            _keydown: keydown,
            _focus: focus,
            _blur: blur,
        })
    }

    /// Host connected to the document.
    ///
    /// Registers the document-level pointer listener that dismisses the
    /// open panel when the user presses outside the host. Composed
    /// events retarget to the host before they reach the document, so
    /// `host.contains` still distinguishes inside from outside.
    pub fn connected(&mut self) {
        if self.document_pointerdown.is_some() {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        let shared = Rc::clone(&self.shared);
        let cb = Closure::new(move |e: PointerEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if shared.host.contains(target.as_ref()) {
                return;
            }
            // A press anywhere else lands outside the widget's bounds
            // and dismisses without a change event.
            shared.deliver(&Event::MouseDown {
                position: Point::new(-1.0, -1.0),
                button: MouseButton::Left,
            });
        });
        document
            .add_event_listener_with_callback("pointerdown", cb.as_ref().unchecked_ref())
            .ok();
        self.document_pointerdown = Some(cb);

        self.shared.render();
        self.shared.sync_aria();
    }

    /// Host removed from the document.
    pub fn disconnected(&mut self) {
        let Some(cb) = self.document_pointerdown.take() else {
            return;
        };
        if let Some(document) = window().and_then(|w| w.document()) {
            document
                .remove_event_listener_with_callback("pointerdown", cb.as_ref().unchecked_ref())
                .ok();
        }
    }

    /// Observed attribute changed on the host.
    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&self, name: &str, value: Option<String>) {
        if !ElementSpec::DROPDOWN.observes(name) {
            return;
        }
        match name {
            "placeholder" => {
                self.shared
                    .widget
                    .borrow_mut()
                    .set_placeholder(value.unwrap_or_default());
            }
            "value" => {
                self.shared.widget.borrow_mut().set_value(value);
            }
            _ => {}
        }
        self.shared.render();
        self.shared.sync_aria();
    }

    /// Replace the option list from a JSON array.
    ///
    /// Accepts strings and `{value, label}` objects; anything else is
    /// rejected as a whole and the current options stay in place.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&self, options: &JsValue) {
        let Some(parsed) = parse_json_value(options) else {
            web_sys::console::warn_1(&JsValue::from_str(
                "orientar-dropdown: ignoring options: not valid JSON",
            ));
            return;
        };
        match normalize_options(&parsed) {
            Ok(list) => {
                self.shared.widget.borrow_mut().set_options(list);
                self.shared.render();
                self.shared.sync_aria();
            }
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "orientar-dropdown: ignoring options: {err}"
                )));
            }
        }
    }

    /// Register a callback for committed selections.
    ///
    /// The callback receives the same `{value, label}` object the
    /// `change` CustomEvent carries in its detail.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&self, callback: Option<js_sys::Function>) {
        *self.shared.on_change.borrow_mut() = callback;
    }

    /// Currently selected value, if any.
    pub fn value(&self) -> Option<String> {
        self.shared
            .widget
            .borrow()
            .selected_value()
            .map(String::from)
    }
}

/// Round-trip a `JsValue` through JSON into a `serde_json` value.
fn parse_json_value(value: &JsValue) -> Option<serde_json::Value> {
    let json = js_sys::JSON::stringify(value).ok()?;
    let json = json.as_string()?;
    serde_json::from_str(&json).ok()
}
