//! Cooperative timers bound to the UI thread.
//!
//! The engine arms and disarms timers by purpose. Callbacks are delivered on
//! the thread that owns the engine, one at a time, so engine state needs no
//! locking.

pub mod virtual_clock;

use std::fmt;
use std::time::Duration;

pub use virtual_clock::VirtualScheduler;

/// What a timer is for. At most one timer per purpose is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    /// Short periodic timer driving fade steps.
    AnimationTick,
    /// Single-shot countdown while the badge is fully visible.
    StayVisible,
}

impl TimerPurpose {
    pub const ALL: [TimerPurpose; 2] = [TimerPurpose::AnimationTick, TimerPurpose::StayVisible];

    /// Timer id used with `SetTimer` / `KillTimer`.
    pub fn id(&self) -> usize {
        match self {
            TimerPurpose::AnimationTick => 1,
            TimerPurpose::StayVisible => 2,
        }
    }

    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub(crate) fn index(&self) -> usize {
        self.id() - 1
    }
}

impl fmt::Display for TimerPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerPurpose::AnimationTick => f.write_str("animation-tick"),
            TimerPurpose::StayVisible => f.write_str("stay-visible"),
        }
    }
}

/// Timer facility driven by the UI thread's loop.
pub trait Scheduler {
    /// Arm `purpose` to fire every `interval`, replacing any live timer of
    /// the same purpose.
    fn arm(&mut self, purpose: TimerPurpose, interval: Duration);

    /// Cancel `purpose`. Disarming an idle purpose is a no-op.
    fn disarm(&mut self, purpose: TimerPurpose);

    /// Cancel every purpose.
    fn disarm_all(&mut self) {
        for purpose in TimerPurpose::ALL {
            self.disarm(purpose);
        }
    }
}
