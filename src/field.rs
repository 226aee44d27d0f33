//! The sphere collection and the viewport it lives in.

use rand::Rng;

use crate::config::FieldConfig;
use crate::particle::{self, Particle};

/// Number of spheres for a viewport: one per `density_divisor` square
/// pixels, capped at `max_particles`.
pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
    let area = (width * height).max(0.0);
    let by_area = (area / config.density_divisor).floor();
    if by_area.is_finite() {
        (by_area as usize).min(config.max_particles)
    } else {
        0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
    /// Bumped on every (re)initialisation.
    pub generation: u64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> Self {
        ParticleField {
            particles: Vec::new(),
            width,
            height,
            generation: 0,
        }
    }

    /// Replace the collection with a fresh, fully transparent population
    /// sized for `width` × `height`.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64, config: &FieldConfig) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, height, config);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(particle::spawn(rng, width, height, config));
        }
        self.generation += 1;
    }

    /// Move every sphere one step.
    pub fn advance(&mut self, max_speed: f64) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            particle::advance(p, w, h, max_speed);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
