//! Keyboard input filtering (platform independent).
//!
//! The hook that feeds this lives in `platform::windows::input`.

pub mod key_filter;

pub use key_filter::KeyFilter;
