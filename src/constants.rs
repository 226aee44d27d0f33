//! Compiled-in defaults for the sphere field.  These are the single source of
//! truth for `FieldConfig::default()`.

// Motion
pub const MAX_SPEED: f64 = 0.3;
pub const MIN_RADIUS: f64 = 2.0;
pub const MAX_RADIUS: f64 = 12.0;

// Population
pub const DENSITY_DIVISOR: f64 = 10_000.0; // one sphere per 10k px²
pub const MAX_PARTICLES: usize = 200;

// Connections
pub const BASE_CONNECTION_DISTANCE: f64 = 300.0;
pub const POINTER_BOOST_RADIUS: f64 = 400.0;
pub const POINTER_BOOST_EXPONENT: i32 = 5;
pub const POINTER_BOOST_MULTIPLIER: f64 = 0.7;
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

// Pointer
pub const POINTER_INTERACTION_RADIUS: f64 = 100.0;

// Fades
pub const FADE_STEP: f64 = 0.04;
pub const FADE_TICK_MS: u32 = 10;

// Resize
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

// DOM / colours
pub const DEFAULT_CANVAS_ID: &str = "myCanvas";
pub const DEFAULT_SPHERE_RGB: (u8, u8, u8) = (0, 0, 0);
