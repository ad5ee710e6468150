//! Events handed from the keyboard hook to the UI thread.
//!
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use std::fmt;

use crate::model::constants::*;

/// A keyboard key whose press flips a persistent on/off state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKey {
    CapsLock,
    NumLock,
    ScrollLock,
}

impl ToggleKey {
    pub const ALL: [ToggleKey; 3] = [
        ToggleKey::CapsLock,
        ToggleKey::NumLock,
        ToggleKey::ScrollLock,
    ];

    /// Name shown on the badge.
    pub fn label(&self) -> &'static str {
        match self {
            ToggleKey::CapsLock => "CapsLock",
            ToggleKey::NumLock => "NumLock",
            ToggleKey::ScrollLock => "ScrollLock",
        }
    }

    /// Win32 virtual-key code.
    pub fn vk_code(&self) -> u32 {
        match self {
            ToggleKey::CapsLock => VK_CAPSLOCK,
            ToggleKey::NumLock => VK_NUMLOCK,
            ToggleKey::ScrollLock => VK_SCROLLLOCK,
        }
    }

    pub fn from_vk_code(vk: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.vk_code() == vk)
    }
}

impl fmt::Display for ToggleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A watched key changed state. Created once by the key source, consumed once
/// by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStateEvent {
    pub key: ToggleKey,
    pub is_on: bool,
}

impl KeyStateEvent {
    pub fn new(key: ToggleKey, is_on: bool) -> Self {
        Self { key, is_on }
    }

    /// Status word for the badge.
    pub fn status(&self) -> &'static str {
        if self.is_on {
            STATUS_ON
        } else {
            STATUS_OFF
        }
    }
}

/// Messages delivered to the UI thread's loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsdEvent {
    /// A watched toggle key was released.
    KeyChanged(KeyStateEvent),

    /// Stop the loop (console Ctrl+C, logoff).
    Shutdown,
}
