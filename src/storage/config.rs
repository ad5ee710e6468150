//! JSON configuration file.
//!
//! Stores settings in %APPDATA%/LockOsd/config.json
//!
//! Read once at startup. A missing file is created with defaults so users
//! have something to edit; an invalid file is left untouched and defaults are
//! used for the run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{OsdError, Result};
use crate::model::constants::*;
use crate::model::OsdSettings;

/// Get config file path: %APPDATA%/LockOsd/config.json
pub fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Ensure the config directory exists.
fn ensure_config_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Load and validate settings from `path`.
///
/// The top level must be a JSON object; anything else is a config error.
pub fn load(path: &Path) -> Result<OsdSettings> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    if !value.is_object() {
        return Err(OsdError::Config(serde::de::Error::custom(
            "expected a JSON object at the top level",
        )));
    }
    let mut settings: OsdSettings = serde_json::from_value(value)?;
    settings.validate();
    Ok(settings)
}

/// Write `settings` to `path` as pretty JSON.
pub fn save(path: &Path, settings: &OsdSettings) -> Result<()> {
    ensure_config_dir(path)?;
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings, falling back to defaults.
///
/// Never fails: configuration problems must not keep the indicator from
/// starting.
pub fn load_or_init(path: &Path) -> OsdSettings {
    match load(path) {
        Ok(settings) => {
            info!(path = %path.display(), "config loaded");
            settings
        }
        Err(OsdError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            let settings = OsdSettings::default();
            match save(path, &settings) {
                Ok(()) => info!(path = %path.display(), "wrote default config"),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not write default config")
                }
            }
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "using default settings");
            OsdSettings::default()
        }
    }
}
