pub mod events;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::messages::Message;
use crate::state::{dispatch_global_message, is_loop_current};

type FrameClosure = Closure<dyn FnMut()>;

// Display-synchronised loop.  Each frame dispatches an AnimationFrame message
// and reschedules itself for as long as `loop_id` is the attached loop.
pub fn setup_animation_loop(loop_id: u32) {
    let f: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !is_loop_current(loop_id) {
            // Break the Rc cycle so the closure can be freed.
            f.borrow_mut().take();
            return;
        }

        dispatch_global_message(Message::AnimationFrame);

        if let Err(e) = request_frame(&f) {
            web_sys::console::error_1(&format!("request_animation_frame failed: {:?}", e).into());
        }
    }) as Box<dyn FnMut()>));

    if let Err(e) = request_frame(&g) {
        web_sys::console::error_1(&format!("request_animation_frame failed: {:?}", e).into());
    }
}

fn request_frame(slot: &Rc<RefCell<Option<FrameClosure>>>) -> Result<i32, JsValue> {
    let window = crate::dom_utils::window()?;
    let slot = slot.borrow();
    let callback = slot
        .as_ref()
        .ok_or_else(|| JsValue::from_str("animation frame closure already dropped"))?;
    let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(id)
}
