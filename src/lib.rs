//! Lock key on-screen indicator.
//!
//! Everything outside `platform` is pure Rust with no FFI so the animation
//! engine, layout and config can be exercised by normal integration tests.

pub mod animation;
pub mod error;
pub mod events;
pub mod input;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod storage;
pub mod ui;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the types most callers need
pub use animation::{AnimationState, FadeCurve, OsdEngine, Timing};
pub use error::{OsdError, Result};
pub use events::{EventBus, EventPublisher, KeyStateEvent, OsdEvent, ToggleKey};
pub use model::OsdSettings;
pub use scheduler::{Scheduler, TimerPurpose};

/// Clamp a value to [lo, hi]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
