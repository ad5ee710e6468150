//! Platform-independent parts of badge rendering.
//!
//! The Direct2D renderer in `platform::windows::ui::overlay` consumes these:
//! - `content`: badge text and its label/status split
//! - `layout`: stable text placement
//! - `geometry`: rounded background outline
//! - `color`: straight-alpha colors

pub mod color;
pub mod content;
pub mod geometry;
pub mod layout;

pub use color::Rgba;
pub use content::{BadgeContent, BadgeSegments};
pub use geometry::{PointF, PointI, RectI, RoundedRectPath};
pub use layout::{BadgeLayout, TextExtent, TextMeasure};

/// Everything the renderer needs besides the text, fixed for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    pub width: i32,
    pub height: i32,
    pub corner_radius: f32,
    pub background: Rgba,
    pub text: Rgba,
    pub on: Rgba,
    pub off: Rgba,
    pub font_family: String,
    pub font_size: f32,
}

impl BadgeStyle {
    pub fn from_settings(settings: &crate::model::OsdSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            corner_radius: settings.corner_radius,
            background: settings.background_color(),
            text: settings.text_rgba(),
            on: settings.on_rgba(),
            off: settings.off_rgba(),
            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
        }
    }

    /// Background outline for this badge size.
    pub fn outline(&self) -> RoundedRectPath {
        RoundedRectPath::new(self.width as f32, self.height as f32, self.corner_radius)
    }

    /// Status color for `segments`.
    pub fn status_color(&self, segments: &BadgeSegments<'_>) -> Rgba {
        if segments.is_on() {
            self.on
        } else {
            self.off
        }
    }
}
