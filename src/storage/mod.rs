//! Configuration storage.
//!
//! Persists settings to a JSON file in %APPDATA%/LockOsd/config.json

pub mod config;

pub use config::{config_path, load_or_init};
