//! Utility helpers shared across the browser glue.

/// Current timestamp in **milliseconds** since UNIX epoch.
///
/// Fades only look at differences between two readings, so wall-clock time
/// from `Date.now()` is precise enough and needs no extra web-sys features.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
