//! Shared fakes for the integration tests.
#![allow(dead_code)]

use std::time::Duration;

use lockosd::animation::{AnimationState, OsdEngine};
use lockosd::events::{KeyStateEvent, ToggleKey};
use lockosd::render::{TextExtent, TextMeasure};
use lockosd::scheduler::VirtualScheduler;
use lockosd::ui::{Frame, Overlay};
use lockosd::{OsdError, Result};

/// One call made on the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayCall {
    Reposition,
    Show,
    Present { text: String, opacity: u8 },
    Hide,
}

/// Overlay double that records every call.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub calls: Vec<OverlayCall>,
    /// Reject every frame after recording it.
    pub fail_present: bool,
}

impl RecordingOverlay {
    /// Opacities of every presented frame, in order.
    pub fn opacities(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OverlayCall::Present { opacity, .. } => Some(*opacity),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &OverlayCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            OverlayCall::Present { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Overlay for RecordingOverlay {
    fn reposition(&mut self) -> Result<()> {
        self.calls.push(OverlayCall::Reposition);
        Ok(())
    }

    fn show(&mut self) {
        self.calls.push(OverlayCall::Show);
    }

    fn present(&mut self, frame: Frame<'_>) -> Result<()> {
        self.calls.push(OverlayCall::Present {
            text: frame.content.text().to_string(),
            opacity: frame.opacity,
        });
        if self.fail_present {
            return Err(OsdError::Present("compositor rejected the frame".into()));
        }
        Ok(())
    }

    fn hide(&mut self) {
        self.calls.push(OverlayCall::Hide);
    }
}

/// Fixed-advance text measurer: 9px per char, 25px lines.
pub struct FixedAdvance;

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str) -> Result<TextExtent> {
        Ok(TextExtent {
            width: text.chars().count() as f32 * 9.0,
            height: 25.0,
        })
    }
}

/// Engine wired to a virtual clock and a recording overlay.
pub struct Harness {
    pub engine: OsdEngine,
    pub sched: VirtualScheduler,
    pub overlay: RecordingOverlay,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_engine(OsdEngine::new(Default::default()))
    }

    pub fn with_engine(engine: OsdEngine) -> Self {
        Self {
            engine,
            sched: VirtualScheduler::new(),
            overlay: RecordingOverlay::default(),
        }
    }

    pub fn press(&mut self, key: ToggleKey, on: bool) {
        self.engine.handle_key_event(
            KeyStateEvent::new(key, on),
            &mut self.sched,
            &mut self.overlay,
        );
    }

    /// Deliver the next due timer. Returns false when nothing is armed.
    pub fn step(&mut self) -> bool {
        let engine = &mut self.engine;
        let overlay = &mut self.overlay;
        self.sched
            .step(|p, s| engine.handle_timer(p, s, overlay))
            .is_some()
    }

    pub fn advance(&mut self, by: Duration) {
        let engine = &mut self.engine;
        let overlay = &mut self.overlay;
        self.sched
            .advance(by, |p, s| engine.handle_timer(p, s, overlay));
    }

    /// Step until `state` is reached, returning how many timers fired.
    /// Panics after `limit` steps.
    pub fn step_until(&mut self, state: AnimationState, limit: u32) -> u32 {
        for n in 0..limit {
            if self.engine.state() == state {
                return n;
            }
            assert!(self.step(), "nothing armed before reaching {state}");
        }
        assert_eq!(self.engine.state(), state, "not reached in {limit} steps");
        limit
    }

    /// Step through every armed timer, recording state and opacity after
    /// each one. Panics after `limit` steps.
    pub fn trace_until_idle(&mut self, limit: u32) -> Vec<(AnimationState, u8)> {
        let mut trace = vec![(self.state(), self.opacity())];
        for _ in 0..limit {
            if !self.step() {
                return trace;
            }
            trace.push((self.state(), self.opacity()));
        }
        panic!("still armed after {limit} steps");
    }

    pub fn state(&self) -> AnimationState {
        self.engine.state()
    }

    pub fn opacity(&self) -> u8 {
        self.engine.opacity()
    }
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}
