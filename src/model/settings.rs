//! Indicator settings (pure Rust, no FFI).
//!
//! This module defines the settings structure that is serialized to/from
//! the JSON config file. Values are read once at startup and are constant
//! for the rest of the run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::animation::{FadeCurve, Timing};
use crate::clamp;
use crate::events::ToggleKey;
use crate::input::KeyFilter;
use crate::render::Rgba;

/// Which toggle keys raise the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub caps_lock: bool,
    pub num_lock: bool,
    pub scroll_lock: bool,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            caps_lock: true,
            num_lock: true,
            scroll_lock: false,
        }
    }
}

impl KeySettings {
    pub fn is_enabled(&self, key: ToggleKey) -> bool {
        match key {
            ToggleKey::CapsLock => self.caps_lock,
            ToggleKey::NumLock => self.num_lock,
            ToggleKey::ScrollLock => self.scroll_lock,
        }
    }
}

/// Complete indicator settings, serializable to/from config.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsdSettings {
    /// Badge width in pixels.
    pub width: i32,
    /// Badge height in pixels.
    pub height: i32,
    /// Corner radius in pixels.
    pub corner_radius: f32,
    /// Distance from the work-area bottom to the badge top edge.
    pub bottom_offset: i32,
    /// Background color, `#RRGGBBAA`.
    pub background: String,
    /// Key name color.
    pub text_color: String,
    /// Status color when ON.
    pub on_color: String,
    /// Status color when OFF.
    pub off_color: String,
    pub font_family: String,
    /// Font size in points.
    pub font_size: f32,
    /// Opacity change per animation tick.
    pub fade_step: u8,
    /// Animation tick interval in milliseconds.
    pub tick_ms: u32,
    /// Time at full opacity before fading out, in milliseconds.
    pub hold_ms: u32,
    /// Use the eased fade curve instead of a constant step.
    pub eased: bool,
    pub keys: KeySettings,
}

impl Default for OsdSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            corner_radius: DEFAULT_CORNER_RADIUS,
            bottom_offset: DEFAULT_BOTTOM_OFFSET,
            background: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            on_color: DEFAULT_ON_COLOR.to_string(),
            off_color: DEFAULT_OFF_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            fade_step: DEFAULT_FADE_STEP,
            tick_ms: DEFAULT_TICK_MS,
            hold_ms: DEFAULT_HOLD_MS,
            eased: false,
            keys: KeySettings::default(),
        }
    }
}

impl OsdSettings {
    /// Validates and clamps all values to valid ranges.
    ///
    /// Unparseable colors and an empty font family fall back to defaults.
    pub fn validate(&mut self) {
        self.width = clamp(self.width, MIN_SIDE, MAX_SIDE);
        self.height = clamp(self.height, MIN_SIDE, MAX_SIDE);
        let max_radius = self.width.min(self.height) as f32 / 2.0;
        self.corner_radius = if self.corner_radius.is_finite() {
            clamp(self.corner_radius, 0.0, max_radius)
        } else {
            DEFAULT_CORNER_RADIUS.min(max_radius)
        };
        self.font_size = if self.font_size.is_finite() {
            clamp(self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            DEFAULT_FONT_SIZE
        };
        self.fade_step = self.fade_step.max(1);
        self.tick_ms = clamp(self.tick_ms, MIN_TICK_MS, MAX_TICK_MS);
        self.hold_ms = self.hold_ms.min(MAX_HOLD_MS);

        fix_color(&mut self.background, DEFAULT_BACKGROUND);
        fix_color(&mut self.text_color, DEFAULT_TEXT_COLOR);
        fix_color(&mut self.on_color, DEFAULT_ON_COLOR);
        fix_color(&mut self.off_color, DEFAULT_OFF_COLOR);

        if self.font_family.trim().is_empty() {
            self.font_family = DEFAULT_FONT_FAMILY.to_string();
        }
    }

    pub fn background_color(&self) -> Rgba {
        color_or(&self.background, DEFAULT_BACKGROUND)
    }

    pub fn text_rgba(&self) -> Rgba {
        color_or(&self.text_color, DEFAULT_TEXT_COLOR)
    }

    pub fn on_rgba(&self) -> Rgba {
        color_or(&self.on_color, DEFAULT_ON_COLOR)
    }

    pub fn off_rgba(&self) -> Rgba {
        color_or(&self.off_color, DEFAULT_OFF_COLOR)
    }

    pub fn fade_curve(&self) -> FadeCurve {
        if self.eased {
            FadeCurve::Eased {
                step: self.fade_step,
            }
        } else {
            FadeCurve::Linear {
                step: self.fade_step,
            }
        }
    }

    /// Animation timing derived from the settings.
    pub fn timing(&self) -> Timing {
        Timing {
            curve: self.fade_curve(),
            tick: Duration::from_millis(self.tick_ms as u64),
            hold: Duration::from_millis(self.hold_ms as u64),
        }
    }

    /// Filter accepting the enabled toggle keys.
    pub fn key_filter(&self) -> KeyFilter {
        KeyFilter::new(
            ToggleKey::ALL
                .into_iter()
                .filter(|key| self.keys.is_enabled(*key)),
        )
    }
}

fn fix_color(value: &mut String, default: &str) {
    if Rgba::from_hex(value).is_none() {
        *value = default.to_string();
    }
}

fn color_or(value: &str, default: &str) -> Rgba {
    Rgba::from_hex(value)
        .or_else(|| Rgba::from_hex(default))
        .unwrap_or(Rgba::TRANSPARENT)
}
