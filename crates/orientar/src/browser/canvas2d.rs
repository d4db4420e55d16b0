//! Canvas2D renderer - renders DrawCommands to HTML5 Canvas.

use orientar_core::{
    BoxStyle, Color, CornerRadius, DrawCommand, FillRule, FontStyle, LineCap, LineJoin, Point,
    Rect, Sampling, StrokeStyle, TextStyle,
};
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, CanvasWindingRule, HtmlCanvasElement, HtmlImageElement};

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Images by source URL, created on first use. An image not yet
    /// loaded is skipped for the frame and painted on a later one.
    images: RefCell<HashMap<String, HtmlImageElement>>,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self {
            canvas,
            ctx,
            images: RefCell::new(HashMap::new()),
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Clear the canvas.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Render a list of draw commands.
    pub fn render(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            self.render_command(cmd);
        }
    }

    fn render_command(&self, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Rect {
                bounds,
                radius,
                style,
            } => {
                self.draw_rect(bounds, radius, style);
            }
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => {
                self.draw_circle(center, *radius, style);
            }
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                self.draw_text(content, position, style);
            }
            DrawCommand::Path {
                points,
                closed,
                style,
            } => {
                self.draw_path(points, *closed, style);
            }
            DrawCommand::Group {
                children,
                transform,
            } => {
                self.ctx.save();
                if let Some(t) = transform {
                    self.ctx
                        .transform(
                            f64::from(t.matrix[0]),
                            f64::from(t.matrix[1]),
                            f64::from(t.matrix[2]),
                            f64::from(t.matrix[3]),
                            f64::from(t.matrix[4]),
                            f64::from(t.matrix[5]),
                        )
                        .ok();
                }
                for child in children {
                    self.render_command(child);
                }
                self.ctx.restore();
            }
            DrawCommand::Clip { bounds, children } => {
                self.ctx.save();
                self.ctx.begin_path();
                self.ctx.rect(
                    f64::from(bounds.x),
                    f64::from(bounds.y),
                    f64::from(bounds.width),
                    f64::from(bounds.height),
                );
                self.ctx.clip();
                for child in children {
                    self.render_command(child);
                }
                self.ctx.restore();
            }
            DrawCommand::Opacity { value, children } => {
                self.ctx.save();
                self.ctx.set_global_alpha(f64::from(*value));
                for child in children {
                    self.render_command(child);
                }
                self.ctx.restore();
            }
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                color,
            } => {
                self.draw_arc(center, *radius, *start_angle, *end_angle, color);
            }
            DrawCommand::Fill { path, color, rule } => {
                self.draw_fill(path, color, *rule);
            }
            DrawCommand::Image {
                source,
                bounds,
                sampling,
            } => {
                self.draw_image(source, bounds, *sampling);
            }
        }
    }

    fn draw_rect(&self, bounds: &Rect, radius: &CornerRadius, style: &BoxStyle) {
        self.ctx.begin_path();
        if radius.is_zero() {
            self.ctx.rect(
                f64::from(bounds.x),
                f64::from(bounds.y),
                f64::from(bounds.width),
                f64::from(bounds.height),
            );
        } else {
            self.rounded_rect(bounds, radius);
        }
        self.paint_box(style);
    }

    fn rounded_rect(&self, bounds: &Rect, radius: &CornerRadius) {
        let x = f64::from(bounds.x);
        let y = f64::from(bounds.y);
        let w = f64::from(bounds.width);
        let h = f64::from(bounds.height);
        let tl = f64::from(radius.top_left);
        let tr = f64::from(radius.top_right);
        let br = f64::from(radius.bottom_right);
        let bl = f64::from(radius.bottom_left);

        self.ctx.move_to(x + tl, y);
        self.ctx.line_to(x + w - tr, y);
        self.ctx.arc_to(x + w, y, x + w, y + tr, tr).ok();
        self.ctx.line_to(x + w, y + h - br);
        self.ctx.arc_to(x + w, y + h, x + w - br, y + h, br).ok();
        self.ctx.line_to(x + bl, y + h);
        self.ctx.arc_to(x, y + h, x, y + h - bl, bl).ok();
        self.ctx.line_to(x, y + tl);
        self.ctx.arc_to(x, y, x + tl, y, tl).ok();
        self.ctx.close_path();
    }

    fn draw_circle(&self, center: &Point, radius: f32, style: &BoxStyle) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.paint_box(style);
    }

    fn paint_box(&self, style: &BoxStyle) {
        if let Some(fill) = style.fill {
            if let Some(shadow) = &style.shadow {
                self.ctx.save();
                self.ctx.set_shadow_color(&color_to_css(&shadow.color));
                self.ctx.set_shadow_offset_x(f64::from(shadow.offset_x));
                self.ctx.set_shadow_offset_y(f64::from(shadow.offset_y));
                self.ctx.set_shadow_blur(f64::from(shadow.blur));
                self.ctx.set_fill_style_str(&color_to_css(&fill));
                self.ctx.fill();
                self.ctx.restore();
            } else {
                self.ctx.set_fill_style_str(&color_to_css(&fill));
                self.ctx.fill();
            }
        }

        if let Some(stroke) = &style.stroke {
            self.apply_stroke(stroke);
            self.ctx.stroke();
        }
    }

    fn apply_stroke(&self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&color_to_css(&style.color));
        self.ctx.set_line_width(f64::from(style.width));
        self.ctx.set_line_cap(match style.cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        });
        self.ctx.set_line_join(match style.join {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        });
        // An empty segment list resets any dash left by a previous stroke.
        let segments: js_sys::Array = style
            .dash
            .iter()
            .map(|d| JsValue::from_f64(f64::from(*d)))
            .collect();
        self.ctx.set_line_dash(&segments).ok();
    }

    fn draw_text(&self, content: &str, position: &Point, style: &TextStyle) {
        let italic = if matches!(style.style, FontStyle::Italic) {
            "italic "
        } else {
            ""
        };
        let font = format!(
            "{}{} {}px {}",
            italic,
            style.weight.css_value(),
            style.size,
            style.family.css_stack()
        );
        self.ctx.set_font(&font);
        self.ctx.set_fill_style_str(&color_to_css(&style.color));
        self.ctx
            .fill_text(
                content,
                f64::from(position.x),
                f64::from(position.y + style.size),
            )
            .ok();
    }

    fn draw_path(&self, points: &[Point], closed: bool, style: &StrokeStyle) {
        if points.is_empty() {
            return;
        }

        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(points[0].x), f64::from(points[0].y));
        for p in points.iter().skip(1) {
            self.ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
        if closed {
            self.ctx.close_path();
        }

        self.apply_stroke(style);
        self.ctx.stroke();
    }

    fn draw_arc(&self, center: &Point, radius: f32, start_angle: f32, end_angle: f32, color: &Color) {
        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(center.x), f64::from(center.y));
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                f64::from(start_angle),
                f64::from(end_angle),
            )
            .ok();
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx.fill();
    }

    fn draw_fill(&self, path: &[Point], color: &Color, rule: FillRule) {
        if path.is_empty() {
            return;
        }

        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(path[0].x), f64::from(path[0].y));
        for p in path.iter().skip(1) {
            self.ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
        self.ctx.close_path();

        self.ctx.set_fill_style_str(&color_to_css(color));
        match rule {
            FillRule::NonZero => self.ctx.fill(),
            FillRule::EvenOdd => self
                .ctx
                .fill_with_canvas_winding_rule(CanvasWindingRule::Evenodd),
        }
    }

    fn draw_image(&self, source: &str, bounds: &Rect, sampling: Sampling) {
        let mut images = self.images.borrow_mut();
        let image = match images.entry(source.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let Ok(image) = HtmlImageElement::new() else {
                    return;
                };
                image.set_src(source);
                entry.insert(image)
            }
        };

        if image.complete() && image.natural_width() > 0 {
            self.ctx
                .set_image_smoothing_enabled(matches!(sampling, Sampling::Bilinear));
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    f64::from(bounds.x),
                    f64::from(bounds.y),
                    f64::from(bounds.width),
                    f64::from(bounds.height),
                )
                .ok();
        }
    }
}

fn color_to_css(color: &Color) -> String {
    format!(
        "rgba({},{},{},{})",
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        color.a
    )
}
