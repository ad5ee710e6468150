//! `Scheduler` backed by Win32 window timers.
//!
//! Each `TimerPurpose` maps to a fixed timer id on the overlay window, so
//! `SetTimer` with an id that is already running replaces it. `WM_TIMER`
//! arrives through the message loop on the UI thread.

use std::time::Duration;

use tracing::warn;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{KillTimer, SetTimer};

use crate::scheduler::{Scheduler, TimerPurpose};

/// Timers owned by the overlay window.
pub struct WindowTimers {
    hwnd: HWND,
}

impl WindowTimers {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl Scheduler for WindowTimers {
    fn arm(&mut self, purpose: TimerPurpose, interval: Duration) {
        let ms = interval.as_millis().clamp(1, u32::MAX as u128) as u32;
        let id = unsafe { SetTimer(Some(self.hwnd), purpose.id(), ms, None) };
        if id == 0 {
            warn!(%purpose, ms, "SetTimer failed");
        }
    }

    fn disarm(&mut self, purpose: TimerPurpose) {
        // Fails only when the timer is not running.
        let _ = unsafe { KillTimer(Some(self.hwnd), purpose.id()) };
    }
}
