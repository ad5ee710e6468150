//! Windows runtime state management.
//!
//! Everything the window procedure touches lives in one thread-local slot on
//! the UI thread. The hook thread never reaches in here; it goes through the
//! event bus (see `wake`).

use std::cell::RefCell;

use tracing::warn;

use super::timers::WindowTimers;
use crate::animation::OsdEngine;
use crate::events::EventBus;
use crate::platform::windows::ui::overlay::OverlayWindow;

/// Runtime owned by the UI thread for the life of the message loop.
pub struct WindowsRuntimeState {
    pub engine: OsdEngine,
    pub timers: WindowTimers,
    pub overlay: OverlayWindow,
    pub bus: EventBus,
}

thread_local! {
    /// Empty before startup and after teardown.
    pub static STATE: RefCell<Option<WindowsRuntimeState>> = const { RefCell::new(None) };
}

/// Move the runtime into the thread-local slot.
pub fn install_runtime(state: WindowsRuntimeState) {
    STATE.with(|s| *s.borrow_mut() = Some(state));
}

/// Take the runtime back out, leaving the slot empty.
pub fn take_runtime() -> Option<WindowsRuntimeState> {
    STATE.with(|s| s.borrow_mut().take())
}

/// Run `f` against the runtime.
///
/// Returns `None` when no runtime is installed, or when called re-entrantly
/// from a message sent while the runtime is already borrowed.
pub fn with_runtime<R>(f: impl FnOnce(&mut WindowsRuntimeState) -> R) -> Option<R> {
    STATE.with(|s| match s.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            warn!("runtime busy, message dropped");
            None
        }
    })
}
