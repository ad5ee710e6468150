//! The badge state machine.
//!
//! `OsdEngine` owns the animation state, opacity and badge text. It is driven
//! by two inputs, key events and timer callbacks, both delivered on the UI
//! thread, and it drives the scheduler and the overlay in response.
//!
//! | State     | Key event                          | Animation tick           | Stay timer      |
//! |-----------|------------------------------------|--------------------------|-----------------|
//! | Hidden    | show, start fading in              | -                        | -               |
//! | FadingIn  | update text, keep fading in        | step up; at 255 hold     | -               |
//! | Visible   | update text, restart hold          | -                        | start fading out|
//! | FadingOut | snap to 255, restart hold          | step down; at 0 hide     | -               |

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::fade::{FadeCurve, FadeDirection};
use super::state::AnimationState;
use crate::events::KeyStateEvent;
use crate::model::constants::*;
use crate::render::BadgeContent;
use crate::scheduler::{Scheduler, TimerPurpose};
use crate::ui::{Frame, Overlay};

/// Fade curve and timer intervals for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub curve: FadeCurve,
    /// Animation tick interval.
    pub tick: Duration,
    /// Time spent fully visible before fading out.
    pub hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            curve: FadeCurve::default(),
            tick: Duration::from_millis(DEFAULT_TICK_MS as u64),
            hold: Duration::from_millis(DEFAULT_HOLD_MS as u64),
        }
    }
}

impl Timing {
    /// Upper bound on the time one full fade takes.
    pub fn max_fade_duration(&self) -> Duration {
        self.tick * self.curve.max_ticks()
    }
}

/// Process-wide badge context. Mutated only on the UI thread.
#[derive(Debug)]
pub struct OsdEngine {
    state: AnimationState,
    opacity: u8,
    content: BadgeContent,
    timing: Timing,
}

impl OsdEngine {
    /// Fresh context: hidden, transparent, no text.
    pub fn new(timing: Timing) -> Self {
        Self {
            state: AnimationState::Hidden,
            opacity: 0,
            content: BadgeContent::default(),
            timing,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn content(&self) -> &BadgeContent {
        &self.content
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Accept a key event from the hook.
    pub fn handle_key_event<S, O>(
        &mut self,
        event: KeyStateEvent,
        scheduler: &mut S,
        overlay: &mut O,
    ) where
        S: Scheduler + ?Sized,
        O: Overlay + ?Sized,
    {
        debug!(key = %event.key, on = event.is_on, state = %self.state, "key event");
        self.content = BadgeContent::from_event(&event);
        reposition(overlay);

        match self.state {
            AnimationState::Hidden => {
                self.set_state(AnimationState::FadingIn);
                overlay.show();
                scheduler.arm(TimerPurpose::AnimationTick, self.timing.tick);
            }
            AnimationState::FadingIn => {
                // Hold starts once fully visible.
                scheduler.disarm(TimerPurpose::StayVisible);
            }
            AnimationState::Visible | AnimationState::FadingOut => {
                scheduler.disarm(TimerPurpose::AnimationTick);
                self.opacity = u8::MAX;
                self.set_state(AnimationState::Visible);
                scheduler.arm(TimerPurpose::StayVisible, self.timing.hold);
            }
        }

        self.present(overlay);
    }

    /// Accept a timer callback.
    pub fn handle_timer<S, O>(
        &mut self,
        purpose: TimerPurpose,
        scheduler: &mut S,
        overlay: &mut O,
    ) where
        S: Scheduler + ?Sized,
        O: Overlay + ?Sized,
    {
        match purpose {
            TimerPurpose::AnimationTick => self.on_animation_tick(scheduler, overlay),
            TimerPurpose::StayVisible => self.on_stay_expired(scheduler),
        }
    }

    /// Release timers and take the badge off screen. The engine is back in
    /// its initial state afterwards.
    pub fn teardown<S, O>(&mut self, scheduler: &mut S, overlay: &mut O)
    where
        S: Scheduler + ?Sized,
        O: Overlay + ?Sized,
    {
        scheduler.disarm_all();
        if self.state.is_on_screen() {
            overlay.hide();
        }
        self.state = AnimationState::Hidden;
        self.opacity = 0;
        self.content = BadgeContent::default();
    }

    fn on_animation_tick<S, O>(&mut self, scheduler: &mut S, overlay: &mut O)
    where
        S: Scheduler + ?Sized,
        O: Overlay + ?Sized,
    {
        let direction = match self.state {
            AnimationState::FadingIn => FadeDirection::In,
            AnimationState::FadingOut => FadeDirection::Out,
            AnimationState::Hidden | AnimationState::Visible => {
                // Stale tick queued before the fade ended.
                scheduler.disarm(TimerPurpose::AnimationTick);
                return;
            }
        };

        self.opacity = self.timing.curve.advance(self.opacity, direction);
        trace!(opacity = self.opacity, state = %self.state, "tick");

        if self.opacity == direction.target() {
            scheduler.disarm(TimerPurpose::AnimationTick);
            match direction {
                FadeDirection::In => {
                    self.set_state(AnimationState::Visible);
                    scheduler.arm(TimerPurpose::StayVisible, self.timing.hold);
                }
                FadeDirection::Out => {
                    self.set_state(AnimationState::Hidden);
                    overlay.hide();
                    return;
                }
            }
        }

        self.present(overlay);
    }

    fn on_stay_expired<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        scheduler.disarm(TimerPurpose::StayVisible);
        if self.state == AnimationState::Visible {
            self.set_state(AnimationState::FadingOut);
            scheduler.arm(TimerPurpose::AnimationTick, self.timing.tick);
        }
    }

    fn set_state(&mut self, next: AnimationState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, opacity = self.opacity, "state change");
            self.state = next;
        }
    }

    fn present<O: Overlay + ?Sized>(&self, overlay: &mut O) {
        let frame = Frame {
            content: &self.content,
            opacity: self.opacity,
        };
        if let Err(e) = overlay.present(frame) {
            warn!(error = %e, "frame skipped");
        }
    }
}

fn reposition<O: Overlay + ?Sized>(overlay: &mut O) {
    if let Err(e) = overlay.reposition() {
        debug!(error = %e, "keeping last badge position");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OsdError, Result};
    use crate::events::ToggleKey;
    use crate::scheduler::VirtualScheduler;

    #[derive(Default)]
    struct NullOverlay {
        shown: u32,
        hidden: u32,
        presented: Vec<u8>,
        fail_reposition: bool,
    }

    impl Overlay for NullOverlay {
        fn reposition(&mut self) -> Result<()> {
            if self.fail_reposition {
                Err(OsdError::Positioning)
            } else {
                Ok(())
            }
        }
        fn show(&mut self) {
            self.shown += 1;
        }
        fn present(&mut self, frame: Frame<'_>) -> Result<()> {
            self.presented.push(frame.opacity);
            Ok(())
        }
        fn hide(&mut self) {
            self.hidden += 1;
        }
    }

    fn caps(on: bool) -> KeyStateEvent {
        KeyStateEvent::new(ToggleKey::CapsLock, on)
    }

    #[test]
    fn starts_hidden_and_empty() {
        let engine = OsdEngine::new(Timing::default());
        assert_eq!(engine.state(), AnimationState::Hidden);
        assert_eq!(engine.opacity(), 0);
        assert!(engine.content().is_empty());
    }

    #[test]
    fn event_while_hidden_starts_fade_in() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay::default();

        engine.handle_key_event(caps(true), &mut sched, &mut overlay);

        assert_eq!(engine.state(), AnimationState::FadingIn);
        assert_eq!(overlay.shown, 1);
        assert!(sched.is_armed(TimerPurpose::AnimationTick));
        assert!(!sched.is_armed(TimerPurpose::StayVisible));
        assert_eq!(engine.content().text(), "CapsLock: ON");
    }

    #[test]
    fn fade_in_completes_into_hold() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay::default();
        engine.handle_key_event(caps(true), &mut sched, &mut overlay);

        for _ in 0..11 {
            sched.step(|p, s| engine.handle_timer(p, s, &mut overlay));
        }

        assert_eq!(engine.state(), AnimationState::Visible);
        assert_eq!(engine.opacity(), 255);
        assert!(!sched.is_armed(TimerPurpose::AnimationTick));
        assert_eq!(
            sched.interval(TimerPurpose::StayVisible),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn stay_expiry_starts_fade_out() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay::default();
        engine.handle_key_event(caps(true), &mut sched, &mut overlay);

        // Fade in (110ms) plus the hold (1500ms)
        sched.advance(Duration::from_millis(1610), |p, s| {
            engine.handle_timer(p, s, &mut overlay)
        });

        assert_eq!(engine.state(), AnimationState::FadingOut);
        assert!(!sched.is_armed(TimerPurpose::StayVisible));
        assert!(sched.is_armed(TimerPurpose::AnimationTick));
    }

    #[test]
    fn fade_out_hides_at_zero() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay::default();
        engine.handle_key_event(caps(false), &mut sched, &mut overlay);

        sched.advance(Duration::from_secs(5), |p, s| {
            engine.handle_timer(p, s, &mut overlay)
        });

        assert_eq!(engine.state(), AnimationState::Hidden);
        assert_eq!(engine.opacity(), 0);
        assert_eq!(overlay.hidden, 1);
        assert_eq!(sched.next_due(), None);
        // The last frame presented before hiding was still visible.
        assert!(overlay.presented.last().copied().unwrap_or(0) > 0);
    }

    #[test]
    fn positioning_failure_is_not_fatal() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay {
            fail_reposition: true,
            ..Default::default()
        };

        engine.handle_key_event(caps(true), &mut sched, &mut overlay);
        assert_eq!(engine.state(), AnimationState::FadingIn);
        assert!(sched.is_armed(TimerPurpose::AnimationTick));
    }

    #[test]
    fn stale_tick_while_visible_is_disarmed() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay::default();

        sched.arm(TimerPurpose::AnimationTick, Duration::from_millis(10));
        engine.handle_timer(TimerPurpose::AnimationTick, &mut sched, &mut overlay);

        assert_eq!(engine.state(), AnimationState::Hidden);
        assert!(!sched.is_armed(TimerPurpose::AnimationTick));
        assert!(overlay.presented.is_empty());
    }

    #[test]
    fn teardown_releases_everything() {
        let mut engine = OsdEngine::new(Timing::default());
        let mut sched = VirtualScheduler::new();
        let mut overlay = NullOverlay::default();
        engine.handle_key_event(caps(true), &mut sched, &mut overlay);

        engine.teardown(&mut sched, &mut overlay);

        assert_eq!(sched.next_due(), None);
        assert_eq!(overlay.hidden, 1);
        assert_eq!(engine.state(), AnimationState::Hidden);
        assert_eq!(engine.opacity(), 0);
        assert!(engine.content().is_empty());
    }

    #[test]
    fn max_fade_duration_for_defaults() {
        assert_eq!(
            Timing::default().max_fade_duration(),
            Duration::from_millis(110)
        );
    }
}
