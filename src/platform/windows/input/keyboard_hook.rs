//! Global low-level keyboard hook.
//!
//! The hook runs on the thread that installed it, between message-loop
//! iterations, and must return quickly. It only classifies key-ups, reads the
//! toggle bit and hands an event to the UI side through `wake::send`.

use std::sync::atomic::{AtomicIsize, Ordering};
use std::sync::OnceLock;

use tracing::debug;
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::GetKeyState;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, KBDLLHOOKSTRUCT,
    WH_KEYBOARD_LL, WM_KEYUP, WM_SYSKEYUP,
};

use crate::error::Result;
use crate::events::{OsdEvent, ToggleKey};
use crate::input::KeyFilter;
use crate::platform::windows::app::wake;

/// Global keyboard hook handle (must be static for the hook callback).
pub static KEYBOARD_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Keys the hook reports. Set once before the hook is installed.
static FILTER: OnceLock<KeyFilter> = OnceLock::new();

/// Low-level keyboard hook procedure.
pub extern "system" fn keyboard_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode >= 0 && matches!(wparam.0 as u32, WM_KEYUP | WM_SYSKEYUP) {
            let info = &*(lparam.0 as *const KBDLLHOOKSTRUCT);
            if let Some(filter) = FILTER.get() {
                if let Some(event) = filter.event_for(info.vkCode, toggle_state) {
                    wake::send(OsdEvent::KeyChanged(event));
                }
            }
        }

        let hook = KEYBOARD_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}

/// Low bit of `GetKeyState` is the toggle state.
fn toggle_state(key: ToggleKey) -> bool {
    unsafe { GetKeyState(key.vk_code() as i32) & 1 != 0 }
}

/// Installed hook; unhooks on drop.
pub struct KeyboardHook {
    handle: HHOOK,
}

impl KeyboardHook {
    /// Install the hook on the calling thread, which must pump messages.
    ///
    /// The filter is fixed for the process; a second install keeps the first
    /// filter.
    pub fn install(filter: KeyFilter) -> Result<Self> {
        if FILTER.set(filter).is_err() {
            debug!("key filter already set");
        }
        let handle =
            unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), None, 0)? };
        KEYBOARD_HOOK.store(handle.0 as isize, Ordering::SeqCst);
        debug!("keyboard hook installed");
        Ok(Self { handle })
    }
}

impl Drop for KeyboardHook {
    fn drop(&mut self) {
        KEYBOARD_HOOK.store(0, Ordering::SeqCst);
        let _ = unsafe { UnhookWindowsHookEx(self.handle) };
        debug!("keyboard hook removed");
    }
}
