//! Browser-side owner of the attached field.
//!
//! Exactly one field can be attached at a time.  Its animator, canvas
//! surface, timers and event listeners all live in [`AppState`] inside the
//! `APP_STATE` thread-local, so tearing it down is a single `take()`.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsValue;

use crate::animator::FieldAnimator;
use crate::canvas::CanvasSurface;
use crate::config;
use crate::debug_log;
use crate::dom_utils;
use crate::messages::{Command, Message};
use crate::ui;
use crate::ui::events::Listener;
use crate::update::update;
use crate::utils::now_ms;

pub struct AppState {
    pub animator: FieldAnimator,
    pub surface: CanvasSurface,
    /// Identifies the animation loop that belongs to this attachment, so a
    /// frame scheduled by a previous attachment stops instead of drawing.
    pub loop_id: u32,
    pub running: bool,
    fade_timer: Option<Interval>,
    resize_timer: Option<Timeout>,
    listeners: Vec<Listener>,
}

thread_local! {
    pub static APP_STATE: RefCell<Option<AppState>> = RefCell::new(None);
    static NEXT_LOOP_ID: Cell<u32> = Cell::new(0);
}

/// Attach the field to the `<canvas>` with the given id, replacing any
/// previous attachment.
pub fn attach(canvas_id: &str) -> Result<(), JsValue> {
    detach();

    let config = config::current();
    let canvas = dom_utils::canvas_by_id(canvas_id)?;
    let surface = CanvasSurface::new(canvas, &config)?;
    let (width, height) = dom_utils::viewport_size()?;
    surface.resize(width, height);

    let mut animator = FieldAnimator::from_entropy(config, width, height);
    animator.start(width, height, now_ms());

    let loop_id = NEXT_LOOP_ID.with(|id| {
        id.set(id.get().wrapping_add(1));
        id.get()
    });

    let listeners = ui::events::register_listeners()?;

    APP_STATE.with(|slot| {
        *slot.borrow_mut() = Some(AppState {
            animator,
            surface,
            loop_id,
            running: true,
            fade_timer: None,
            resize_timer: None,
            listeners,
        });
    });

    execute_command(Command::StartFadeTimer);
    ui::setup_animation_loop(loop_id);

    debug_log!("Sphere field attached to #{} ({}x{})", canvas_id, width, height);
    Ok(())
}

/// Tear down the attached field: timers, listeners and the frame loop.
pub fn detach() {
    let attached = APP_STATE.with(|slot| slot.borrow().is_some());
    if !attached {
        return;
    }

    dispatch_global_message(Message::Detach);

    if let Some(state) = APP_STATE.with(|slot| slot.borrow_mut().take()) {
        ui::events::remove_listeners(&state.listeners);
        debug_log!("Sphere field detached");
    }
}

/// Whether frames for the loop with this id should keep being scheduled.
pub fn is_loop_current(loop_id: u32) -> bool {
    APP_STATE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(false, |state| state.running && state.loop_id == loop_id)
    })
}

/// Feed a message through the reducer and execute the resulting commands.
/// Messages arriving while nothing is attached are dropped.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_mut() {
            Some(state) => update(&mut state.animator, &mut state.surface, msg, now_ms()),
            None => Vec::new(),
        }
    });

    // The borrow is released before executing: timer callbacks created here
    // dispatch again later.
    for cmd in commands {
        execute_command(cmd);
    }
}

fn execute_command(cmd: Command) {
    APP_STATE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(state) = slot.as_mut() else {
            return;
        };

        match cmd {
            Command::StartFadeTimer => {
                let tick_ms = state.animator.config().fade_tick_ms;
                // Replacing the handle drops, and so cancels, the old timer.
                state.fade_timer = Some(Interval::new(tick_ms, || {
                    dispatch_global_message(Message::FadeTick);
                }));
            }
            Command::StopFadeTimer => {
                state.fade_timer = None;
            }
            Command::ScheduleResize => {
                let debounce_ms = state.animator.config().resize_debounce_ms;
                state.resize_timer = Some(Timeout::new(debounce_ms, || match dom_utils::viewport_size() {
                    Ok((width, height)) => dispatch_global_message(Message::ResizeSettled { width, height }),
                    Err(e) => web_sys::console::warn_1(&format!("Failed to read viewport size: {:?}", e).into()),
                }));
            }
            Command::CancelResize => {
                state.resize_timer = None;
            }
            Command::ResizeSurface { width, height } => {
                state.surface.resize(width, height);
            }
            Command::StopLoop => {
                state.running = false;
            }
        }
    });
}
