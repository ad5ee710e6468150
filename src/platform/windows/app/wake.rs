//! Cross-thread hand-off into the UI thread.
//!
//! Callers outside the UI thread (the keyboard hook, the console control
//! handler) publish an event on the bus and post `WM_OSD_WAKE` to the overlay
//! window. The window procedure then drains the bus in order.

use std::sync::OnceLock;

use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{PostMessageW, WM_APP};

use crate::events::{EventPublisher, OsdEvent};

/// Posted to the overlay window when events are waiting on the bus.
pub const WM_OSD_WAKE: u32 = WM_APP + 1;

/// Publisher plus the window to wake.
pub struct Waker {
    publisher: EventPublisher,
    // HWND is not Send; the raw value is only ever handed back to Win32.
    hwnd: isize,
}

static WAKER: OnceLock<Waker> = OnceLock::new();

/// Register the bus publisher and target window. Only the first call has an
/// effect.
pub fn install_waker(publisher: EventPublisher, hwnd: HWND) {
    let _ = WAKER.set(Waker {
        publisher,
        hwnd: hwnd.0 as isize,
    });
}

/// Hand `event` to the UI thread. Safe to call from any thread; never blocks.
pub fn send(event: OsdEvent) {
    if let Some(waker) = WAKER.get() {
        waker.publisher.publish(event);
        let hwnd = HWND(waker.hwnd as *mut _);
        // Fails only if the window is already gone.
        let _ = unsafe { PostMessageW(Some(hwnd), WM_OSD_WAKE, WPARAM(0), LPARAM(0)) };
    }
}
