//! dom_utils.rs – thin helper layer for the few DOM lookups the field needs.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Fetch a `<canvas>` element by id.
pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("<canvas id='{}'> not found", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a <canvas>", id)))
}

/// Size the background has to cover: the viewport width and the full
/// scrollable height of the document, so the effect runs behind the whole
/// page rather than only the first screen.
pub fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = document()?
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    Ok((width, height))
}
