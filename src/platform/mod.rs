//! Platform-specific implementations.
//!
//! Only Windows is supported: the indicator depends on low-level keyboard
//! hooks and layered windows. Each platform submodule provides:
//! - Input handling (global keyboard hook)
//! - UI components (layered overlay window, Direct2D renderer)
//! - App runtime (UI-thread state, window timers)

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "windows")]
pub use self::windows::*;
