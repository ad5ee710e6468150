//! Event dispatcher for Windows.
//!
//! ```text
//! WM_TIMER     → dispatch_timer()  → OsdEngine::handle_timer
//! WM_OSD_WAKE  → dispatch_events() → OsdEngine::handle_key_event
//! ```
//!
//! Both run on the UI thread inside the window procedure.

use tracing::{debug, info};

use super::state::{take_runtime, with_runtime};
use crate::events::OsdEvent;
use crate::scheduler::TimerPurpose;

/// What the window procedure should do after draining the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Shutdown,
}

/// Forward a `WM_TIMER` id to the engine. Unknown ids are ignored.
pub fn dispatch_timer(timer_id: usize) {
    let Some(purpose) = TimerPurpose::from_id(timer_id) else {
        debug!(timer_id, "ignoring foreign timer");
        return;
    };
    with_runtime(|rt| rt.engine.handle_timer(purpose, &mut rt.timers, &mut rt.overlay));
}

/// Drain every pending event in arrival order.
///
/// Key events queued behind a shutdown request are dropped.
pub fn dispatch_events() -> Dispatch {
    with_runtime(|rt| {
        while let Some(event) = rt.bus.try_recv() {
            match event {
                OsdEvent::KeyChanged(key_event) => {
                    rt.engine
                        .handle_key_event(key_event, &mut rt.timers, &mut rt.overlay);
                }
                OsdEvent::Shutdown => {
                    info!("shutdown requested");
                    return Dispatch::Shutdown;
                }
            }
        }
        Dispatch::Continue
    })
    .unwrap_or(Dispatch::Continue)
}

/// Stop timers, hide the badge and drop the runtime.
pub fn teardown() {
    if let Some(mut rt) = take_runtime() {
        rt.engine.teardown(&mut rt.timers, &mut rt.overlay);
        debug!("runtime released");
    }
}
