//! UI components for Windows.

pub mod monitor;
pub mod overlay;

pub use monitor::pointer_work_area;
pub use overlay::*;
