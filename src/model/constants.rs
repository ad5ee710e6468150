//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! timing defaults, and validation limits.

// === Badge Defaults ===

/// Default badge width in pixels.
pub const DEFAULT_WIDTH: i32 = 175;

/// Default badge height in pixels.
pub const DEFAULT_HEIGHT: i32 = 60;

/// Default corner radius in pixels.
pub const DEFAULT_CORNER_RADIUS: f32 = 20.0;

/// Default distance from the bottom of the work area to the badge top edge.
pub const DEFAULT_BOTTOM_OFFSET: i32 = 75;

/// Default background color: black at alpha 80.
pub const DEFAULT_BACKGROUND: &str = "#00000050";

/// Default label color: opaque white.
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// Default status color when the key is ON.
pub const DEFAULT_ON_COLOR: &str = "#00FF00";

/// Default status color when the key is OFF.
pub const DEFAULT_OFF_COLOR: &str = "#FF3232";

/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

// === Timing Defaults ===

/// Default opacity step per animation tick.
pub const DEFAULT_FADE_STEP: u8 = 25;

/// Default animation tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 10;

/// Default time the badge stays fully visible, in milliseconds.
pub const DEFAULT_HOLD_MS: u32 = 1500;

/// Smallest step the eased curve will ever take.
pub const EASED_MIN_STEP: u8 = 3;

// === Text ===

/// Delimiter between the key name and its status.
pub const STATUS_DELIMITER: char = ':';

/// Status text for an enabled key.
pub const STATUS_ON: &str = "ON";

/// Status text for a disabled key.
pub const STATUS_OFF: &str = "OFF";

/// Widest status string, used for stable horizontal centering.
pub const WIDEST_STATUS: &str = STATUS_OFF;

// === Validation Limits ===

/// Minimum badge side in pixels.
pub const MIN_SIDE: i32 = 16;

/// Maximum badge side in pixels.
pub const MAX_SIDE: i32 = 2000;

/// Minimum font size in points.
pub const MIN_FONT_SIZE: f32 = 4.0;

/// Maximum font size in points.
pub const MAX_FONT_SIZE: f32 = 200.0;

/// Minimum animation tick interval in milliseconds.
pub const MIN_TICK_MS: u32 = 1;

/// Maximum animation tick interval in milliseconds.
pub const MAX_TICK_MS: u32 = 1000;

/// Maximum hold duration in milliseconds.
pub const MAX_HOLD_MS: u32 = 60_000;

// === Virtual-key codes ===

/// Win32 virtual-key code for Caps Lock.
pub const VK_CAPSLOCK: u32 = 0x14;

/// Win32 virtual-key code for Num Lock.
pub const VK_NUMLOCK: u32 = 0x90;

/// Win32 virtual-key code for Scroll Lock.
pub const VK_SCROLLLOCK: u32 = 0x91;

// === Storage ===

/// Directory name under `%APPDATA%`.
pub const CONFIG_DIR_NAME: &str = "LockOsd";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";
