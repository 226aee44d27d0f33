//! Pairwise proximity lines between spheres.
//!
//! Two spheres are linked when they are closer than a threshold.  The
//! threshold starts at the base connection distance and grows by up to
//! `pointer_boost_multiplier` (70% by default) as the midpoint of the pair
//! gets closer to the pointer, following a `(1 - d / r)^5` falloff.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::PointerState;

/// One line to draw, endpoints taken from the sphere centres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

/// Connection threshold for a pair whose midpoint is `pointer_distance` away
/// from the pointer (`None` when the pointer has never been seen).
pub fn threshold(pointer_distance: Option<f64>, config: &FieldConfig) -> f64 {
    let base = config.base_connection_distance;
    match pointer_distance {
        Some(d) if d < config.pointer_boost_radius => {
            let falloff = (1.0 - d / config.pointer_boost_radius).powi(config.pointer_boost_exponent);
            base * (1.0 + falloff * config.pointer_boost_multiplier)
        }
        _ => base,
    }
}

/// Evaluate a single pair, returning the line if the pair is close enough.
pub fn connect(a: &Particle, b: &Particle, pointer: &PointerState, config: &FieldConfig) -> Option<Connection> {
    let distance = (a.x - b.x).hypot(a.y - b.y);
    let mid_x = (a.x + b.x) / 2.0;
    let mid_y = (a.y + b.y) / 2.0;
    let limit = threshold(pointer.distance_to(mid_x, mid_y), config);

    if distance < limit {
        let opacity = (1.0 - distance / limit).min(a.opacity).min(b.opacity);
        Some(Connection {
            from: (a.x, a.y),
            to: (b.x, b.y),
            opacity,
        })
    } else {
        None
    }
}

/// All lines for the current positions, every unordered pair visited once.
pub fn collect(particles: &[Particle], pointer: &PointerState, config: &FieldConfig) -> Vec<Connection> {
    let mut lines = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(line) = connect(a, b, pointer, config) {
                lines.push(line);
            }
        }
    }
    lines
}
