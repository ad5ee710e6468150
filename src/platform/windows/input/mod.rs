//! Input handling for Windows (low-level keyboard hook).

pub mod keyboard_hook;

pub use keyboard_hook::{keyboard_hook_proc, KeyboardHook, KEYBOARD_HOOK};
