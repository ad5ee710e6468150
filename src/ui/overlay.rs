//! The engine's view of the on-screen badge.
//!
//! The platform layer implements [`Overlay`] on top of a layered window; tests
//! implement it with a recorder.

use crate::error::Result;
use crate::render::BadgeContent;

/// One composited frame: what to draw and how opaque the whole badge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub content: &'a BadgeContent,
    /// Constant alpha applied to the whole surface, 0..=255.
    pub opacity: u8,
}

/// Presentation surface for the badge.
pub trait Overlay {
    /// Move the badge onto the monitor under the pointer.
    ///
    /// An error leaves the badge at its last position.
    fn reposition(&mut self) -> Result<()>;

    /// Make the window visible without activating it.
    fn show(&mut self);

    /// Re-render the full badge and blend it with `frame.opacity`.
    fn present(&mut self, frame: Frame<'_>) -> Result<()>;

    /// Remove the badge from the screen.
    fn hide(&mut self);
}
