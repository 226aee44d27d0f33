//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console, debug builds only.
///
/// Release builds compile the call away so hot paths (fade ticks, resize
/// handling) stay silent in production.  Native builds (unit tests) have no
/// console and skip it too.
///
/// ```rust,ignore
/// debug_log!("re-initialised {} spheres", count);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) && cfg!(target_arch = "wasm32") {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}
