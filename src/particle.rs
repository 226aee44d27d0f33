//! A single drifting sphere and the free functions that move it.

use rand::Rng;

use crate::config::FieldConfig;

/// Plain data record for one sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, radius: f64, speed_x: f64, speed_y: f64) -> Self {
        Particle {
            x,
            y,
            radius,
            speed_x,
            speed_y,
            opacity: 0.0,
        }
    }
}

/// Create an invisible sphere at a uniform-random spot inside the viewport.
pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
    let radius = rng.gen_range(config.min_radius..config.max_radius);
    let x = uniform(rng, width);
    let y = uniform(rng, height);
    let speed_x = rng.gen_range(-config.max_speed..=config.max_speed);
    let speed_y = rng.gen_range(-config.max_speed..=config.max_speed);
    Particle::new(x, y, radius, speed_x, speed_y)
}

// `gen_range` rejects empty ranges, a zero-width viewport is legal here.
fn uniform<R: Rng>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// Move one step and bounce off the viewport edges.
///
/// The reflection is applied after the move, so a sphere may overlap an
/// edge by up to one step before it turns around.
pub fn advance(p: &mut Particle, width: f64, height: f64, max_speed: f64) {
    p.x += p.speed_x;
    p.y += p.speed_y;

    if p.x + p.radius > width || p.x - p.radius < 0.0 {
        p.speed_x = -p.speed_x;
    }
    if p.y + p.radius > height || p.y - p.radius < 0.0 {
        p.speed_y = -p.speed_y;
    }

    clamp_speed(p, max_speed);
}

pub fn clamp_speed(p: &mut Particle, max_speed: f64) {
    p.speed_x = p.speed_x.clamp(-max_speed, max_speed);
    p.speed_y = p.speed_y.clamp(-max_speed, max_speed);
}
