//! UI-thread runtime for Windows.
//!
//! - `state`: thread-local runtime (engine, timers, overlay, event bus)
//! - `dispatch`: routes `WM_TIMER` and wake messages into the engine
//! - `timers`: `Scheduler` over `SetTimer`/`KillTimer`
//! - `wake`: cross-thread event hand-off

pub mod dispatch;
pub mod state;
pub mod timers;
pub mod wake;

pub use dispatch::{dispatch_events, dispatch_timer, teardown, Dispatch};
pub use state::{install_runtime, take_runtime, with_runtime, WindowsRuntimeState, STATE};
pub use timers::WindowTimers;
pub use wake::{install_waker, WM_OSD_WAKE};
