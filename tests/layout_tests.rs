//! Badge text placement and styling, checked against every supported key.
#![allow(clippy::field_reassign_with_default)]

mod common;

use common::FixedAdvance;
use lockosd::events::{KeyStateEvent, ToggleKey};
use lockosd::model::OsdSettings;
use lockosd::render::{BadgeContent, BadgeLayout, BadgeStyle, Rgba};

fn layout_for(key: ToggleKey, on: bool, style: &BadgeStyle) -> BadgeLayout {
    let content = BadgeContent::from_event(&KeyStateEvent::new(key, on));
    let segments = content.segments().expect("event text has a delimiter");
    BadgeLayout::compute(
        &segments,
        &FixedAdvance,
        style.width as f32,
        style.height as f32,
    )
    .expect("fixed measurer never fails")
}

#[test]
fn label_start_is_identical_for_on_and_off() {
    let style = BadgeStyle::from_settings(&OsdSettings::default());
    for key in ToggleKey::ALL {
        let on = layout_for(key, true, &style);
        let off = layout_for(key, false, &style);
        assert_eq!(on.label_origin, off.label_origin, "{key} label moved");
        assert_eq!(on.status_origin, off.status_origin, "{key} status moved");
    }
}

#[test]
fn default_badge_fits_every_key() {
    let style = BadgeStyle::from_settings(&OsdSettings::default());
    for key in ToggleKey::ALL {
        let layout = layout_for(key, false, &style);
        let right = layout.status_origin.x + layout.status_extent.width;
        assert!(layout.label_origin.x >= 0.0, "{key} starts off the badge");
        assert!(right <= style.width as f32, "{key} runs off the badge");
    }
}

#[test]
fn text_block_is_vertically_centered() {
    let style = BadgeStyle::from_settings(&OsdSettings::default());
    let layout = layout_for(ToggleKey::CapsLock, true, &style);
    // (60 - 25) / 2
    assert_eq!(layout.label_origin.y, 17.5);
    assert_eq!(layout.status_origin.y, layout.label_origin.y);
}

#[test]
fn label_and_status_separated_by_half_a_space() {
    let style = BadgeStyle::from_settings(&OsdSettings::default());
    let layout = layout_for(ToggleKey::NumLock, true, &style);
    let gap = layout.status_origin.x - (layout.label_origin.x + layout.label_extent.width);
    assert_eq!(gap, 4.5);
}

#[test]
fn status_color_follows_state() {
    let style = BadgeStyle::from_settings(&OsdSettings::default());
    let on = BadgeContent::new("CapsLock: ON");
    let off = BadgeContent::new("CapsLock: OFF");

    assert_eq!(
        style.status_color(&on.segments().unwrap()),
        Rgba::opaque(0x00, 0xFF, 0x00)
    );
    assert_eq!(
        style.status_color(&off.segments().unwrap()),
        Rgba::opaque(0xFF, 0x32, 0x32)
    );
}

#[test]
fn style_uses_configured_colors() {
    let mut settings = OsdSettings::default();
    settings.background = "#10203040".to_string();
    settings.on_color = "#0000FF".to_string();
    let style = BadgeStyle::from_settings(&settings);

    assert_eq!(style.background, Rgba::new(0x10, 0x20, 0x30, 0x40));
    assert_eq!(style.on, Rgba::opaque(0, 0, 0xFF));
    assert_eq!(style.outline().radius(), settings.corner_radius);
}

#[test]
fn empty_content_has_no_segments() {
    assert!(BadgeContent::default().segments().is_none());
}
