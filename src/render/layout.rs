//! Horizontal and vertical placement of the badge text.
//!
//! The text block is centered as if the status were always the widest status
//! word, so the label never moves when the status flips between ON and OFF.

use super::content::BadgeSegments;
use super::geometry::PointF;
use crate::error::Result;
use crate::model::constants::WIDEST_STATUS;

/// Size of a run of text in the badge font.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    /// Advance width including trailing whitespace.
    pub width: f32,
    pub height: f32,
}

/// Measures strings in the badge font.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Result<TextExtent>;
}

/// Where each text segment is drawn inside the badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLayout {
    pub label_origin: PointF,
    pub status_origin: PointF,
    /// Extent of the label, for the draw call's layout box.
    pub label_extent: TextExtent,
    /// Extent reserved for the status (the widest status word).
    pub status_extent: TextExtent,
}

impl BadgeLayout {
    /// Lay out `segments` inside a `width` x `height` badge.
    ///
    /// Label and status are separated by half a space.
    pub fn compute<M: TextMeasure + ?Sized>(
        segments: &BadgeSegments<'_>,
        measurer: &M,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let label = measurer.measure(segments.label)?;
        let widest = measurer.measure(WIDEST_STATUS)?;
        let space = measurer.measure(" ")?;

        let gap = space.width / 2.0;
        let stable_width = label.width + gap + widest.width;
        let start_x = (width - stable_width) / 2.0;
        let start_y = (height - label.height) / 2.0;

        Ok(Self {
            label_origin: PointF::new(start_x, start_y),
            status_origin: PointF::new(start_x + label.width + gap, start_y),
            label_extent: label,
            status_extent: widest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::content::BadgeContent;

    /// Fixed 10px advance per char, 20px line height.
    struct Monospace;

    impl TextMeasure for Monospace {
        fn measure(&self, text: &str) -> Result<TextExtent> {
            Ok(TextExtent {
                width: text.chars().count() as f32 * 10.0,
                height: 20.0,
            })
        }
    }

    #[test]
    fn centers_stable_width() {
        let content = BadgeContent::new("CapsLock: ON");
        let layout =
            BadgeLayout::compute(&content.segments().unwrap(), &Monospace, 175.0, 60.0).unwrap();
        // label 90 + gap 5 + "OFF" 30 = 125
        assert_eq!(layout.label_origin, PointF::new(25.0, 20.0));
        assert_eq!(layout.status_origin, PointF::new(120.0, 20.0));
    }

    #[test]
    fn status_flip_does_not_move_label() {
        let on = BadgeContent::new("CapsLock: ON");
        let off = BadgeContent::new("CapsLock: OFF");
        let a = BadgeLayout::compute(&on.segments().unwrap(), &Monospace, 175.0, 60.0).unwrap();
        let b = BadgeLayout::compute(&off.segments().unwrap(), &Monospace, 175.0, 60.0).unwrap();
        assert_eq!(a.label_origin, b.label_origin);
        assert_eq!(a.status_origin, b.status_origin);
    }

    #[test]
    fn measurement_error_propagates() {
        struct Broken;
        impl TextMeasure for Broken {
            fn measure(&self, _: &str) -> Result<TextExtent> {
                Err(crate::OsdError::Render("no font".into()))
            }
        }
        let content = BadgeContent::new("NumLock: ON");
        let result = BadgeLayout::compute(&content.segments().unwrap(), &Broken, 175.0, 60.0);
        assert!(result.is_err());
    }
}
