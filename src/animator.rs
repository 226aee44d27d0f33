//! The owning context for one attached sphere field.
//!
//! `FieldAnimator` holds everything the effect mutates (the spheres, the
//! pointer, the active fade and the random source) and exposes the frame,
//! fade and resize operations.  It never touches the browser: time comes in
//! as a millisecond timestamp and drawing goes through a [`Surface`], so the
//! browser glue in `state` and `ui` stays a thin shell around it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::Surface;
use crate::config::FieldConfig;
use crate::connections;
use crate::debug_log;
use crate::fade::{FadeDirection, FadeTransition};
use crate::field::ParticleField;
use crate::particle;
use crate::pointer::PointerState;

/// Runs once when a fade settles, with the animator and the settle time.
pub type FadeCallback = Box<dyn FnOnce(&mut FieldAnimator, f64)>;

/// Lifecycle of the sphere set.
///
/// `Empty → FadingIn → Steady → FadingOut → Empty`, with a fresh population
/// created between `Empty` and `FadingIn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    FadingIn,
    Steady,
    FadingOut,
}

/// Result of a fade tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeProgress {
    /// No fade was active.
    Idle,
    Running,
    /// The fade in this direction settled on this tick.
    Completed(FadeDirection),
}

struct ActiveFade {
    transition: FadeTransition,
    on_complete: Option<FadeCallback>,
}

pub struct FieldAnimator {
    config: FieldConfig,
    field: ParticleField,
    pointer: PointerState,
    fade: Option<ActiveFade>,
    rng: StdRng,
}

impl FieldAnimator {
    /// An empty field for a `width` × `height` surface.
    pub fn new(config: FieldConfig, width: f64, height: f64, rng: StdRng) -> Self {
        let config = config.validated();
        FieldAnimator {
            pointer: PointerState::new(config.pointer_interaction_radius),
            field: ParticleField::new(width, height),
            fade: None,
            rng,
            config,
        }
    }

    pub fn from_entropy(config: FieldConfig, width: f64, height: f64) -> Self {
        Self::new(config, width, height, StdRng::from_entropy())
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn phase(&self) -> Phase {
        match &self.fade {
            Some(active) => match active.transition.direction() {
                FadeDirection::In => Phase::FadingIn,
                FadeDirection::Out => Phase::FadingOut,
            },
            None if self.field.is_empty() => Phase::Empty,
            None => Phase::Steady,
        }
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    /// Replace the population with fresh, invisible spheres for the given
    /// viewport size.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.field.initialize(&mut self.rng, width, height, &self.config);
        debug_log!(
            "Sphere field generation {}: {} spheres for {}x{}",
            self.field.generation,
            self.field.len(),
            width,
            height
        );
    }

    /// First population after attach: initialise and fade in.
    pub fn start(&mut self, width: f64, height: f64, now_ms: f64) {
        self.initialize(width, height);
        self.run_fade(FadeDirection::In, now_ms, None);
    }

    /// Move every sphere one step.
    pub fn advance_frame(&mut self) {
        self.field.advance(self.config.max_speed);
    }

    /// Draw the current positions without moving anything: clear, all
    /// connection lines, then every sphere.
    pub fn render_frame<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.field.width, self.field.height);
        self.draw_connections(surface);
        for p in &self.field.particles {
            surface.sphere(p);
        }
    }

    /// One animation-loop iteration.
    ///
    /// Lines are computed from the positions before anything moves this
    /// frame; afterwards each sphere is advanced and drawn immediately at
    /// its new position.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.field.width, self.field.height);
        self.draw_connections(surface);

        let (w, h) = (self.field.width, self.field.height);
        let max_speed = self.config.max_speed;
        for p in &mut self.field.particles {
            particle::advance(p, w, h, max_speed);
            surface.sphere(p);
        }
    }

    fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S) {
        for line in connections::collect(&self.field.particles, &self.pointer, &self.config) {
            surface.line(&line);
        }
    }

    /// Start ramping every sphere towards the direction's target, replacing
    /// any fade in flight.  `on_complete` runs once, after the ramp settles
    /// (and, for a fade-out, after the collection has been cleared).
    pub fn run_fade(&mut self, direction: FadeDirection, now_ms: f64, on_complete: Option<FadeCallback>) {
        if self.cancel_fades() {
            debug_log!("Fade replaced by a new {:?} fade", direction);
        }
        self.fade = Some(ActiveFade {
            transition: FadeTransition::new(direction, self.config.fade_rate_per_ms(), now_ms),
            on_complete,
        });
    }

    /// Drop the fade in flight, if any, along with its completion callback.
    /// Opacities stay where they are.
    pub fn cancel_fades(&mut self) -> bool {
        self.fade.take().is_some()
    }

    /// Advance the active fade to `now_ms`.
    pub fn tick_fade(&mut self, now_ms: f64) -> FadeProgress {
        let Some(mut active) = self.fade.take() else {
            return FadeProgress::Idle;
        };

        if !active.transition.tick(&mut self.field.particles, now_ms) {
            self.fade = Some(active);
            return FadeProgress::Running;
        }

        let direction = active.transition.direction();
        if direction == FadeDirection::Out {
            self.field.clear();
        }
        debug_log!("Fade {:?} settled", direction);

        if let Some(callback) = active.on_complete.take() {
            callback(self, now_ms);
        }
        FadeProgress::Completed(direction)
    }

    /// Adopt a new surface size: spheres keep bouncing inside the new bounds
    /// while they fade out, then a population sized for the new area fades in.
    pub fn resize(&mut self, width: f64, height: f64, now_ms: f64) {
        self.field.width = width;
        self.field.height = height;
        self.run_fade(
            FadeDirection::Out,
            now_ms,
            Some(Box::new(move |animator: &mut FieldAnimator, settled_at: f64| {
                animator.initialize(width, height);
                animator.run_fade(FadeDirection::In, settled_at, None);
            })),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, RecordingSurface};
    use std::cell::Cell;
    use std::rc::Rc;

    fn animator(width: f64, height: f64) -> FieldAnimator {
        FieldAnimator::new(FieldConfig::default(), width, height, StdRng::seed_from_u64(42))
    }

    /// Tick every 10 ms until no fade is active; returns the final time.
    fn settle(animator: &mut FieldAnimator, mut now: f64) -> f64 {
        let mut guard = 0;
        while animator.is_fading() {
            now += 10.0;
            animator.tick_fade(now);
            guard += 1;
            assert!(guard < 10_000, "fade never settled");
        }
        now
    }

    #[test]
    fn new_animator_is_empty() {
        let a = animator(800.0, 600.0);
        assert_eq!(a.phase(), Phase::Empty);
        assert!(!a.is_fading());
    }

    #[test]
    fn start_fades_in_to_full_opacity() {
        let mut a = animator(800.0, 600.0);
        a.start(800.0, 600.0, 0.0);
        assert_eq!(a.phase(), Phase::FadingIn);
        assert_eq!(a.field().len(), 48);

        settle(&mut a, 0.0);
        assert_eq!(a.phase(), Phase::Steady);
        assert!(a.field().particles.iter().all(|p| (1.0 - p.opacity) <= 0.04));
        assert!(a.field().particles.iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn fade_out_clears_and_fires_callback_once() {
        let mut a = animator(800.0, 600.0);
        a.start(800.0, 600.0, 0.0);
        let now = settle(&mut a, 0.0);

        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        a.run_fade(
            FadeDirection::Out,
            now,
            Some(Box::new(move |_: &mut FieldAnimator, _: f64| counter.set(counter.get() + 1))),
        );
        let end = settle(&mut a, now);

        assert!(a.field().is_empty());
        assert_eq!(a.phase(), Phase::Empty);
        assert_eq!(fired.get(), 1);

        // Further ticks are idle and do not re-fire.
        assert_eq!(a.tick_fade(end + 10.0), FadeProgress::Idle);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn new_fade_cancels_previous_callback() {
        let mut a = animator(400.0, 400.0);
        a.start(400.0, 400.0, 0.0);

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        a.run_fade(FadeDirection::Out, 0.0, Some(Box::new(move |_: &mut FieldAnimator, _: f64| flag.set(true))));
        a.run_fade(FadeDirection::In, 0.0, None);
        settle(&mut a, 0.0);

        assert!(!fired.get());
        assert_eq!(a.phase(), Phase::Steady);
    }

    #[test]
    fn fade_out_of_empty_field_completes_immediately() {
        let mut a = animator(50.0, 50.0);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        a.run_fade(
            FadeDirection::Out,
            0.0,
            Some(Box::new(move |_: &mut FieldAnimator, _: f64| counter.set(counter.get() + 1))),
        );
        assert_eq!(a.tick_fade(10.0), FadeProgress::Completed(FadeDirection::Out));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn resize_mid_fade_in_starts_new_cycle() {
        let mut a = animator(1000.0, 1000.0);
        a.start(1000.0, 1000.0, 0.0);
        a.tick_fade(100.0);
        assert_eq!(a.phase(), Phase::FadingIn);
        let before = a.field().generation;

        // Raw resize event: the fade-in stops where it is.
        assert!(a.cancel_fades());
        assert_eq!(a.phase(), Phase::Steady);

        // Debounce fired.
        a.resize(500.0, 400.0, 300.0);
        assert_eq!(a.phase(), Phase::FadingOut);

        let mut now = 300.0;
        while a.phase() == Phase::FadingOut {
            now += 10.0;
            a.tick_fade(now);
        }
        assert_eq!(a.phase(), Phase::FadingIn);
        assert_eq!(a.field().generation, before + 1);
        assert_eq!(a.field().len(), 20);
        assert!(a.field().particles.iter().all(|p| p.opacity == 0.0));
        assert!(a
            .field()
            .particles
            .iter()
            .all(|p| p.x < 500.0 && p.y < 400.0));

        settle(&mut a, now);
        assert_eq!(a.phase(), Phase::Steady);
        assert!(a.field().particles.iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn frame_draws_lines_before_spheres() {
        let mut a = animator(300.0, 300.0);
        a.start(300.0, 300.0, 0.0);
        settle(&mut a, 0.0);
        let before: Vec<_> = a.field().particles.clone();

        let mut surface = RecordingSurface::new();
        a.frame(&mut surface);

        assert_eq!(surface.calls[0], DrawCall::Clear { width: 300.0, height: 300.0 });
        let first_sphere = surface
            .calls
            .iter()
            .position(|c| matches!(c, DrawCall::Sphere(_)))
            .unwrap();
        assert!(surface.calls[first_sphere..]
            .iter()
            .all(|c| matches!(c, DrawCall::Sphere(_))));

        // Lines use the pre-update positions, spheres the updated ones.
        let line_ends: Vec<_> = surface.lines().map(|l| l.from).collect();
        assert!(line_ends
            .iter()
            .all(|end| before.iter().any(|p| (p.x, p.y) == *end)));
        let drawn: Vec<_> = surface.spheres().copied().collect();
        assert_eq!(drawn, a.field().particles);
    }

    #[test]
    fn render_frame_does_not_move_spheres() {
        let mut a = animator(300.0, 300.0);
        a.start(300.0, 300.0, 0.0);
        let before = a.field().particles.clone();

        let mut surface = RecordingSurface::new();
        a.render_frame(&mut surface);
        assert_eq!(a.field().particles, before);
        assert_eq!(surface.spheres().count(), before.len());

        a.advance_frame();
        assert_ne!(a.field().particles, before);
    }

    #[test]
    fn invisible_spheres_draw_invisible_lines() {
        let mut a = animator(300.0, 300.0);
        a.initialize(300.0, 300.0);
        let mut surface = RecordingSurface::new();
        a.render_frame(&mut surface);
        assert!(surface.lines().all(|l| l.opacity == 0.0));
    }
}
