//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the settings definition and configuration constants.
//!
//! File persistence lives in `storage`.

pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{KeySettings, OsdSettings};
