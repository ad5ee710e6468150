//! Windows-specific implementation using Win32 API and Direct2D.
//!
//! This module contains all Windows-specific code:
//! - App runtime (thread-local state, window timers, wake messages)
//! - Input handling (low-level keyboard hook)
//! - UI components (layered overlay window, Direct2D/DirectWrite renderer)

pub mod app;
pub mod input;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ui::*;
