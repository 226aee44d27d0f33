//! Opacity ramps for the whole field.
//!
//! A transition moves every sphere's opacity towards its target at a fixed
//! rate per elapsed millisecond, clamped to `[0, 1]`.  The step only depends
//! on wall-clock time between ticks, so a throttled timer (background tab,
//! slow frame) delays the fade but never makes it overshoot.  Because the
//! ramp starts from whatever opacity each sphere currently has, a cancelled
//! transition can be resumed or reversed at any point.

use crate::particle::Particle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

impl FadeDirection {
    pub fn target(self) -> f64 {
        match self {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FadeTransition {
    direction: FadeDirection,
    rate_per_ms: f64,
    last_tick_ms: f64,
}

impl FadeTransition {
    pub fn new(direction: FadeDirection, rate_per_ms: f64, now_ms: f64) -> Self {
        FadeTransition {
            direction,
            rate_per_ms,
            last_tick_ms: now_ms,
        }
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// Apply the opacity change for the time elapsed since the previous
    /// tick.  Returns `true` once every sphere sits exactly on the target.
    pub fn tick(&mut self, particles: &mut [Particle], now_ms: f64) -> bool {
        let elapsed = (now_ms - self.last_tick_ms).max(0.0);
        self.last_tick_ms = now_ms.max(self.last_tick_ms);
        let delta = elapsed * self.rate_per_ms;

        let target = self.direction.target();
        for p in particles.iter_mut() {
            p.opacity = match self.direction {
                FadeDirection::In => (p.opacity + delta).min(target),
                FadeDirection::Out => (p.opacity - delta).max(target),
            }
            .clamp(0.0, 1.0);
        }

        is_settled(particles, self.direction)
    }
}

/// Whether every sphere has reached the direction's target.  An empty field
/// is trivially settled.
pub fn is_settled(particles: &[Particle], direction: FadeDirection) -> bool {
    let target = direction.target();
    particles.iter().all(|p| p.opacity == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 0.004; // 0.04 per 10 ms

    fn field(opacities: &[f64]) -> Vec<Particle> {
        opacities
            .iter()
            .map(|&opacity| Particle {
                opacity,
                ..Particle::new(0.0, 0.0, 2.0, 0.0, 0.0)
            })
            .collect()
    }

    #[test]
    fn fade_in_reaches_exactly_one() {
        let mut particles = field(&[0.0, 0.0, 0.0]);
        let mut fade = FadeTransition::new(FadeDirection::In, RATE, 0.0);

        let mut now = 0.0;
        let mut done = false;
        while !done {
            now += 10.0;
            done = fade.tick(&mut particles, now);
            assert!(particles.iter().all(|p| (0.0..=1.0).contains(&p.opacity)));
        }
        assert!(now >= 250.0 && now <= 260.0);
        assert!(particles.iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn fade_out_never_goes_negative() {
        let mut particles = field(&[0.03, 0.5]);
        let mut fade = FadeTransition::new(FadeDirection::Out, RATE, 100.0);

        assert!(!fade.tick(&mut particles, 110.0));
        assert_eq!(particles[0].opacity, 0.0);
        assert!((particles[1].opacity - 0.46).abs() < 1e-9);
    }

    #[test]
    fn long_gap_between_ticks_does_not_overshoot() {
        let mut particles = field(&[0.2]);
        let mut fade = FadeTransition::new(FadeDirection::In, RATE, 0.0);
        assert!(fade.tick(&mut particles, 10_000.0));
        assert_eq!(particles[0].opacity, 1.0);
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let mut particles = field(&[0.5]);
        let mut fade = FadeTransition::new(FadeDirection::In, RATE, 1_000.0);
        assert!(!fade.tick(&mut particles, 900.0));
        assert_eq!(particles[0].opacity, 0.5);
    }

    #[test]
    fn resumes_from_partial_opacity() {
        let mut particles = field(&[0.0]);
        let mut fade_in = FadeTransition::new(FadeDirection::In, RATE, 0.0);
        fade_in.tick(&mut particles, 100.0);
        assert!((particles[0].opacity - 0.4).abs() < 1e-9);

        let mut fade_out = FadeTransition::new(FadeDirection::Out, RATE, 100.0);
        assert!(fade_out.tick(&mut particles, 200.0));
        assert_eq!(particles[0].opacity, 0.0);
    }

    #[test]
    fn empty_field_is_settled() {
        let mut fade = FadeTransition::new(FadeDirection::Out, RATE, 0.0);
        assert!(fade.tick(&mut [], 0.0));
    }
}
