//! Runtime configuration for the sphere field.
//!
//! Every tunable defaults to the values in [`crate::constants`].  A page can
//! replace the configuration before (re)attaching by calling the exported
//! `configure()` with a plain JS object, e.g.
//! `configure({ maxParticles: 120, sphereRgb: [20, 40, 80] })`.  Fields the
//! object leaves out take their defaults, not the values of an earlier call.

use std::cell::RefCell;

use serde::Deserialize;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub canvas_id: String,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub density_divisor: f64,
    pub max_particles: usize,
    pub base_connection_distance: f64,
    pub pointer_boost_radius: f64,
    pub pointer_boost_exponent: i32,
    pub pointer_boost_multiplier: f64,
    pub pointer_interaction_radius: f64,
    pub line_width: f64,
    pub fade_step: f64,
    pub fade_tick_ms: u32,
    pub resize_debounce_ms: u32,
    pub sphere_rgb: (u8, u8, u8),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            max_speed: MAX_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            density_divisor: DENSITY_DIVISOR,
            max_particles: MAX_PARTICLES,
            base_connection_distance: BASE_CONNECTION_DISTANCE,
            pointer_boost_radius: POINTER_BOOST_RADIUS,
            pointer_boost_exponent: POINTER_BOOST_EXPONENT,
            pointer_boost_multiplier: POINTER_BOOST_MULTIPLIER,
            pointer_interaction_radius: POINTER_INTERACTION_RADIUS,
            line_width: CONNECTION_LINE_WIDTH,
            fade_step: FADE_STEP,
            fade_tick_ms: FADE_TICK_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            sphere_rgb: DEFAULT_SPHERE_RGB,
        }
    }
}

impl FieldConfig {
    /// Return a copy with nonsensical values pulled back into range.
    ///
    /// Values coming from JS are not trusted: a zero divisor would divide by
    /// zero in the population formula, and an empty or overflowing radius or
    /// speed range would make `gen_range` panic.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        // `gen_range(-max..=max)` overflows when the span is not finite.
        if !(self.max_speed >= 0.0 && (2.0 * self.max_speed).is_finite()) {
            self.max_speed = defaults.max_speed;
        }
        if !(self.min_radius.is_finite() && self.min_radius > 0.0) {
            self.min_radius = defaults.min_radius;
        }
        if !(self.max_radius.is_finite() && self.max_radius > self.min_radius) {
            self.max_radius = self.min_radius + (defaults.max_radius - defaults.min_radius);
        }
        // Huge radii swallow the repair above and leave an empty range.
        let span = self.max_radius - self.min_radius;
        if !(span.is_finite() && span > 0.0) {
            self.min_radius = defaults.min_radius;
            self.max_radius = defaults.max_radius;
        }
        if !(self.density_divisor.is_finite() && self.density_divisor > 0.0) {
            self.density_divisor = defaults.density_divisor;
        }
        if !(self.base_connection_distance.is_finite() && self.base_connection_distance > 0.0) {
            self.base_connection_distance = defaults.base_connection_distance;
        }
        if !(self.pointer_boost_radius.is_finite() && self.pointer_boost_radius > 0.0) {
            self.pointer_boost_radius = defaults.pointer_boost_radius;
        }
        if !(self.pointer_boost_multiplier.is_finite() && self.pointer_boost_multiplier >= 0.0) {
            self.pointer_boost_multiplier = defaults.pointer_boost_multiplier;
        }
        // A negative exponent turns the boost into a blow-up near the rim.
        self.pointer_boost_exponent = self.pointer_boost_exponent.max(0);
        if !(self.fade_step.is_finite() && self.fade_step > 0.0) {
            self.fade_step = defaults.fade_step;
        }
        self.fade_tick_ms = self.fade_tick_ms.max(1);
        if self.canvas_id.is_empty() {
            self.canvas_id = defaults.canvas_id;
        }
        self
    }

    /// Opacity change per millisecond during a fade.
    pub fn fade_rate_per_ms(&self) -> f64 {
        self.fade_step / f64::from(self.fade_tick_ms)
    }

    /// Time a full 0 → 1 (or 1 → 0) fade takes.
    pub fn fade_duration_ms(&self) -> f64 {
        1.0 / self.fade_rate_per_ms()
    }

    /// CSS colour string for the sphere colour at the given alpha.
    pub fn rgba(&self, alpha: f64) -> String {
        let (r, g, b) = self.sphere_rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

thread_local! {
    pub static FIELD_CONFIG: RefCell<FieldConfig> = RefCell::new(FieldConfig::default());
}

/// Snapshot of the active configuration.
pub fn current() -> FieldConfig {
    FIELD_CONFIG.with(|cfg| cfg.borrow().clone())
}

/// Replace the active configuration.
pub fn set(config: FieldConfig) {
    FIELD_CONFIG.with(|cfg| *cfg.borrow_mut() = config.validated());
}
