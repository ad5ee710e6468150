//! Badge animation: visibility states, fade curves and the engine tying
//! them to timers and the overlay.

pub mod engine;
pub mod fade;
pub mod state;

pub use engine::{OsdEngine, Timing};
pub use fade::{FadeCurve, FadeDirection};
pub use state::AnimationState;
