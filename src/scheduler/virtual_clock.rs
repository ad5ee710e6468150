//! Deterministic scheduler running on virtual time.
//!
//! Mirrors `SetTimer` semantics: armed timers are periodic until disarmed,
//! re-arming replaces the previous timer, and due timers fire one at a time
//! in due order. Used by tests to drive the engine without a message loop.

use std::time::Duration;

use super::{Scheduler, TimerPurpose};

/// Shortest period accepted, so a zero interval cannot stall `advance`.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmedTimer {
    interval: Duration,
    due: Duration,
}

/// Virtual-time implementation of [`Scheduler`].
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    timers: [Option<ArmedTimer>; 2],
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_armed(&self, purpose: TimerPurpose) -> bool {
        self.timers[purpose.index()].is_some()
    }

    /// Interval `purpose` is armed with, if any.
    pub fn interval(&self, purpose: TimerPurpose) -> Option<Duration> {
        self.timers[purpose.index()].map(|t| t.interval)
    }

    /// The earliest armed timer. Ties go to the animation tick.
    pub fn next_due(&self) -> Option<(TimerPurpose, Duration)> {
        TimerPurpose::ALL
            .into_iter()
            .filter_map(|p| self.timers[p.index()].map(|t| (p, t.due)))
            .min_by_key(|(_, due)| *due)
    }

    /// Move virtual time forward by `by`, delivering every timer that comes
    /// due on the way. The callback may arm or disarm timers.
    pub fn advance(&mut self, by: Duration, mut on_fire: impl FnMut(TimerPurpose, &mut Self)) {
        let until = self.now + by;
        while let Some((purpose, due)) = self.next_due() {
            if due > until {
                break;
            }
            self.now = due;
            if let Some(timer) = self.timers[purpose.index()].as_mut() {
                timer.due = due + timer.interval;
            }
            on_fire(purpose, self);
        }
        self.now = until;
    }

    /// Advance to the next due timer and deliver it. Returns the purpose
    /// that fired, or `None` when nothing is armed.
    pub fn step(&mut self, on_fire: impl FnOnce(TimerPurpose, &mut Self)) -> Option<TimerPurpose> {
        let (purpose, due) = self.next_due()?;
        self.now = due;
        if let Some(timer) = self.timers[purpose.index()].as_mut() {
            timer.due = due + timer.interval;
        }
        on_fire(purpose, self);
        Some(purpose)
    }
}

impl Scheduler for VirtualScheduler {
    fn arm(&mut self, purpose: TimerPurpose, interval: Duration) {
        let interval = interval.max(MIN_INTERVAL);
        self.timers[purpose.index()] = Some(ArmedTimer {
            interval,
            due: self.now + interval,
        });
    }

    fn disarm(&mut self, purpose: TimerPurpose) {
        self.timers[purpose.index()] = None;
    }
}
