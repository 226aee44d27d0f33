use wasm_bindgen::prelude::*;

pub mod animator;
pub mod canvas;
pub mod config;
pub mod connections;
pub mod constants; // Module for compiled-in defaults
pub mod dom_utils;
pub mod fade;
pub mod field;
pub mod macros;
pub mod messages;
pub mod particle;
pub mod pointer;
pub mod state;
pub mod ui;
pub mod update;
pub mod utils;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let canvas_id = config::current().canvas_id;

    // Pages that load the module without the background canvas (or that want
    // to call `configure()` first and attach themselves) are left alone.
    if dom_utils::document()?.get_element_by_id(&canvas_id).is_none() {
        debug_log!("No #{} on this page, waiting for attach()", canvas_id);
        return Ok(());
    }

    state::attach(&canvas_id)
}

/// Replace the configuration with one read from a plain JS object; missing
/// fields take their defaults.  Takes effect on the next `attach()`.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let parsed: config::FieldConfig = serde_wasm_bindgen::from_value(options)?;
    config::set(parsed);
    Ok(())
}

/// Attach the sphere field to a canvas, by default the configured one.
#[wasm_bindgen]
pub fn attach(canvas_id: Option<String>) -> Result<(), JsValue> {
    let canvas_id = canvas_id.unwrap_or_else(|| config::current().canvas_id);
    state::attach(&canvas_id)
}

/// Stop the animation and remove all listeners and timers.
#[wasm_bindgen]
pub fn detach() {
    state::detach();
}
