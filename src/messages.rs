// src/messages.rs
//
// Browser events the sphere field reacts to, and the side effects the
// reducer asks the browser glue to perform in response.
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// `requestAnimationFrame` fired.
    AnimationFrame,

    /// Global `mousemove`, client coordinates.
    PointerMoved { x: f64, y: f64 },

    /// Raw `resize` event, before debouncing.
    ViewportChanged,

    /// The viewport has been quiet for the debounce interval.
    ResizeSettled { width: f64, height: f64 },

    /// The fade interval timer fired.
    FadeTick,

    /// The field is being torn down.
    Detach,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// (Re)start the repeating fade timer, replacing any running one.
    StartFadeTimer,

    /// Stop the fade timer if it is running.
    StopFadeTimer,

    /// (Re)start the resize debounce timeout.
    ScheduleResize,

    /// Drop a pending resize debounce.
    CancelResize,

    /// Set the canvas backing store to a new size.
    ResizeSurface { width: f64, height: f64 },

    /// Stop rescheduling animation frames.
    StopLoop,
}
