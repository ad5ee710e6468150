//! Error taxonomy for the indicator.
//!
//! Only the startup variants (`Config`, `Io`, `Platform`) ever abort the
//! program. The per-frame variants are logged by the engine and dropped.

use thiserror::Error;

/// Errors produced by the indicator.
#[derive(Debug, Error)]
pub enum OsdError {
    /// Pointer position or monitor geometry could not be queried.
    #[error("pointer or monitor geometry unavailable")]
    Positioning,

    /// Surface, brush or font allocation failed for this frame.
    #[error("failed to render badge: {0}")]
    Render(String),

    /// The compositor rejected the layered-window update.
    #[error("failed to present badge: {0}")]
    Present(String),

    /// The config file is not valid JSON for `OsdSettings`.
    #[error("invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A startup call into the OS failed.
    #[error("platform call failed: {0}")]
    Platform(String),
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for OsdError {
    fn from(e: windows::core::Error) -> Self {
        OsdError::Platform(e.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OsdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(OsdError::from(io), OsdError::Io(_)));
    }

    #[test]
    fn display_includes_detail() {
        let e = OsdError::Render("CreateSolidColorBrush".into());
        assert_eq!(e.to_string(), "failed to render badge: CreateSolidColorBrush");
    }
}
