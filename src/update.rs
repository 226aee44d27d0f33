// src/update.rs
//
use crate::animator::{FadeProgress, FieldAnimator};
use crate::canvas::Surface;
use crate::debug_log;
use crate::messages::{Command, Message};

/// Apply one message to the animator and collect the browser side effects
/// it requires.  `now_ms` is the time the message is handled at; `surface`
/// is only drawn to on `AnimationFrame`.
pub fn update<S: Surface + ?Sized>(
    animator: &mut FieldAnimator,
    surface: &mut S,
    msg: Message,
    now_ms: f64,
) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::AnimationFrame => {
            animator.frame(surface);
        }
        Message::PointerMoved { x, y } => {
            animator.pointer_moved(x, y);
        }
        Message::ViewportChanged => {
            // Any fade in flight stops right away; opacities are resumable so
            // nothing needs to be rolled back.
            animator.cancel_fades();
            commands.push(Command::StopFadeTimer);
            commands.push(Command::ScheduleResize);
        }
        Message::ResizeSettled { width, height } => {
            debug_log!("Viewport settled at {}x{}", width, height);
            commands.push(Command::ResizeSurface { width, height });
            animator.resize(width, height, now_ms);
            commands.push(Command::StartFadeTimer);
        }
        Message::FadeTick => match animator.tick_fade(now_ms) {
            FadeProgress::Running => {}
            // A settled fade-out chains straight into the fade-in, which
            // keeps the same timer running.
            FadeProgress::Completed(_) if animator.is_fading() => {}
            FadeProgress::Completed(_) | FadeProgress::Idle => {
                commands.push(Command::StopFadeTimer);
            }
        },
        Message::Detach => {
            animator.cancel_fades();
            commands.push(Command::StopFadeTimer);
            commands.push(Command::CancelResize);
            commands.push(Command::StopLoop);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::Phase;
    use crate::canvas::RecordingSurface;
    use crate::config::FieldConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn started(width: f64, height: f64) -> FieldAnimator {
        let mut a = FieldAnimator::new(FieldConfig::default(), width, height, StdRng::seed_from_u64(9));
        a.start(width, height, 0.0);
        a
    }

    #[test]
    fn fade_ticks_stop_timer_when_settled() {
        let mut a = started(600.0, 400.0);
        let mut surface = RecordingSurface::new();

        let mut now = 0.0;
        let mut stopped = false;
        for _ in 0..100 {
            now += 10.0;
            let cmds = update(&mut a, &mut surface, Message::FadeTick, now);
            if cmds.contains(&Command::StopFadeTimer) {
                stopped = true;
                break;
            }
        }
        assert!(stopped);
        assert_eq!(a.phase(), Phase::Steady);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn viewport_change_cancels_fade_and_debounces() {
        let mut a = started(600.0, 400.0);
        let mut surface = RecordingSurface::new();

        let cmds = update(&mut a, &mut surface, Message::ViewportChanged, 50.0);
        assert_eq!(cmds, vec![Command::StopFadeTimer, Command::ScheduleResize]);
        assert!(!a.is_fading());
    }

    #[test]
    fn settled_resize_runs_full_cycle_on_one_timer() {
        let mut a = started(600.0, 400.0);
        let mut surface = RecordingSurface::new();
        let generation = a.field().generation;

        update(&mut a, &mut surface, Message::ViewportChanged, 20.0);
        let cmds = update(
            &mut a,
            &mut surface,
            Message::ResizeSettled { width: 300.0, height: 200.0 },
            220.0,
        );
        assert_eq!(
            cmds,
            vec![
                Command::ResizeSurface { width: 300.0, height: 200.0 },
                Command::StartFadeTimer
            ]
        );
        assert_eq!(a.phase(), Phase::FadingOut);

        let mut now = 220.0;
        let mut saw_fade_in = false;
        loop {
            now += 10.0;
            let cmds = update(&mut a, &mut surface, Message::FadeTick, now);
            if a.phase() == Phase::FadingIn {
                saw_fade_in = true;
                assert!(cmds.is_empty());
            }
            if cmds.contains(&Command::StopFadeTimer) {
                break;
            }
        }
        assert!(saw_fade_in);
        assert_eq!(a.field().generation, generation + 1);
        assert_eq!(a.field().len(), 6);
        assert!(a.field().particles.iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn animation_frame_draws() {
        let mut a = started(600.0, 400.0);
        let mut surface = RecordingSurface::new();
        update(&mut a, &mut surface, Message::AnimationFrame, 0.0);
        assert_eq!(surface.spheres().count(), a.field().len());
    }

    #[test]
    fn pointer_move_is_recorded() {
        let mut a = started(600.0, 400.0);
        let mut surface = RecordingSurface::new();
        let cmds = update(&mut a, &mut surface, Message::PointerMoved { x: 12.0, y: 34.0 }, 0.0);
        assert!(cmds.is_empty());
        assert_eq!(a.pointer().position, Some((12.0, 34.0)));
    }

    #[test]
    fn detach_stops_everything() {
        let mut a = started(600.0, 400.0);
        let mut surface = RecordingSurface::new();
        let cmds = update(&mut a, &mut surface, Message::Detach, 0.0);
        assert_eq!(
            cmds,
            vec![Command::StopFadeTimer, Command::CancelResize, Command::StopLoop]
        );
        assert!(!a.is_fading());
    }
}
