use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes;
use super::Surface;
use crate::config::FieldConfig;
use crate::connections::Connection;
use crate::debug_log;
use crate::particle::Particle;

/// [`Surface`] backed by a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    sphere_inner: String,
    sphere_outer: String,
    line_width: f64,
    config: FieldConfig,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, config: &FieldConfig) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasSurface {
            canvas,
            context,
            sphere_inner: config.rgba(1.0),
            sphere_outer: config.rgba(0.0),
            line_width: config.line_width,
            config: config.clone(),
        })
    }

    /// Resize the backing store.  Setting the size also clears the canvas.
    pub fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, connection: &Connection) {
        let stroke = self.config.rgba(connection.opacity);
        shapes::draw_line(&self.context, connection.from, connection.to, &stroke, self.line_width);
    }

    fn sphere(&mut self, particle: &Particle) {
        if let Err(e) = shapes::draw_sphere(
            &self.context,
            (particle.x, particle.y),
            particle.radius,
            particle.opacity,
            &self.sphere_inner,
            &self.sphere_outer,
        ) {
            debug_log!("Failed to draw sphere at ({}, {}): {:?}", particle.x, particle.y, e);
        }
    }
}
