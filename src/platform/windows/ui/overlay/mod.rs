//! Badge overlay: layered window, Direct2D renderer and GDI plumbing.

pub mod gdi;
pub mod renderer;
pub mod window;

pub use renderer::D2dRenderer;
pub use window::OverlayWindow;
