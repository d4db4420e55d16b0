//! WASM application entry point.

use super::canvas2d::Canvas2DRenderer;
use super::events::{keyboard_event_to_orientar, pointer_event_to_orientar};
use orientar_core::{Constraints, DrawCommand, RecordingCanvas, Rect, Size, Widget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement, KeyboardEvent, PointerEvent};

/// Main application runner for browser pages.
#[wasm_bindgen]
pub struct App {
    renderer: Canvas2DRenderer,
    canvas: HtmlCanvasElement,
    width: f32,
    height: f32,
    pointerdown_callback: Option<Closure<dyn FnMut(PointerEvent)>>,
    pointermove_callback: Option<Closure<dyn FnMut(PointerEvent)>>,
    keydown_callback: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

#[wasm_bindgen]
impl App {
    /// Create a new app attached to a canvas element by ID.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();

        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| format!("Canvas '{}' not found", canvas_id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;

        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let renderer = Canvas2DRenderer::new(canvas.clone()).map_err(|e| JsValue::from_str(&e))?;

        Ok(Self {
            renderer,
            canvas,
            width,
            height,
            pointerdown_callback: None,
            pointermove_callback: None,
            keydown_callback: None,
        })
    }

    /// Register a pointerdown handler that receives event JSON.
    pub fn on_pointerdown(&mut self, callback: js_sys::Function) {
        let cb = Closure::new(move |e: PointerEvent| {
            let event = pointer_event_to_orientar(&e, "pointerdown");
            let json = serde_json::to_string(&event).unwrap_or_default();
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
        });
        self.canvas
            .add_event_listener_with_callback("pointerdown", cb.as_ref().unchecked_ref())
            .ok();
        self.pointerdown_callback = Some(cb);
    }

    /// Register a pointermove handler.
    pub fn on_pointermove(&mut self, callback: js_sys::Function) {
        let cb = Closure::new(move |e: PointerEvent| {
            let event = pointer_event_to_orientar(&e, "pointermove");
            let json = serde_json::to_string(&event).unwrap_or_default();
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
        });
        self.canvas
            .add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref())
            .ok();
        self.pointermove_callback = Some(cb);
    }

    /// Register a keydown handler. Keys without a widget binding are skipped.
    pub fn on_keydown(&mut self, callback: js_sys::Function) {
        let document = window().and_then(|w| w.document());
        if let Some(doc) = document {
            let cb = Closure::new(move |e: KeyboardEvent| {
                if let Some(event) = keyboard_event_to_orientar(&e, "keydown") {
                    let json = serde_json::to_string(&event).unwrap_or_default();
                    let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
                }
            });
            doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
                .ok();
            self.keydown_callback = Some(cb);
        }
    }

    /// Get canvas width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Clear the canvas.
    pub fn clear(&self) {
        self.renderer.clear();
    }

    /// Render draw commands from JSON.
    pub fn render_json(&self, json: &str) -> Result<(), JsValue> {
        let commands: Vec<DrawCommand> = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
        self.renderer.render(&commands);
        Ok(())
    }

    /// Render the career exploration demo page (WASM export).
    pub fn render_demo(&self) {
        use orientar_widgets::{Card, Column, Dropdown, DropdownOption, Typography};

        let mut widget = Column::new()
            .gap(24.0)
            .child(Typography::heading(1, "Explora carreras"))
            .child(
                Dropdown::new()
                    .placeholder("Selecciona una carrera")
                    .option(DropdownOption::new("med", "Medicina"))
                    .option(DropdownOption::new("ing", "Ingenieria de Sistemas")),
            )
            .child(Card::new(
                "Medicina",
                "Ciencias de la salud con alta demanda en hospitales y clinicas.",
            ));

        self.render_widget(&mut widget);
    }
}

impl App {
    /// Render a widget tree (plain Rust API).
    pub fn render_widget<W: Widget>(&self, widget: &mut W) {
        let constraints = Constraints::loose(Size::new(self.width, self.height));
        let size = widget.measure(constraints);
        let bounds = Rect::new(0.0, 0.0, size.width, size.height);
        widget.layout(bounds);

        let mut canvas = RecordingCanvas::new();
        widget.paint(&mut canvas);

        self.renderer.clear();
        self.renderer.render(canvas.commands());
    }

    /// Render raw draw commands.
    pub fn render_commands(&self, commands: &[DrawCommand]) {
        self.renderer.clear();
        self.renderer.render(commands);
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
