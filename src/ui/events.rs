//! Global event handlers for the attached field.
//!
//! Unlike one-off page widgets these listeners are kept (not `forget()`-ed)
//! so `detach()` can remove them again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use crate::{messages::Message, state::dispatch_global_message};

/// A registered window listener and the closure backing it.
pub struct Listener {
    pub event: &'static str,
    pub callback: Closure<dyn FnMut(Event)>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Attach the pointer and resize handlers to `window`.
pub fn register_listeners() -> Result<Vec<Listener>, JsValue> {
    let window = crate::dom_utils::window()?;
    let listeners = vec![pointer_listener(), resize_listener()];
    for listener in &listeners {
        window.add_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref())?;
    }
    Ok(listeners)
}

pub fn remove_listeners(listeners: &[Listener]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    for listener in listeners {
        let _ = window.remove_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref());
    }
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

fn pointer_listener() -> Listener {
    let callback = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
            dispatch_global_message(Message::PointerMoved {
                x: f64::from(mouse.client_x()),
                y: f64::from(mouse.client_y()),
            });
        }
    }));
    Listener { event: "mousemove", callback }
}

fn resize_listener() -> Listener {
    let callback = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        dispatch_global_message(Message::ViewportChanged);
    }));
    Listener { event: "resize", callback }
}
