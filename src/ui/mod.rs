//! Presentation seam between the engine and the screen.
//!
//! ## overlay.rs
//! - `Overlay` trait implemented by the platform layered window
//!
//! ## placement.rs
//! - `badge_origin`: monitor-relative badge position

pub mod overlay;
pub mod placement;

pub use overlay::{Frame, Overlay};
pub use placement::badge_origin;
