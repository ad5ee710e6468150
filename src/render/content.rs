//! Badge text and its split into label and status segments.

use crate::events::KeyStateEvent;
use crate::model::constants::*;

/// Text currently shown on the badge, e.g. `"CapsLock: ON"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeContent {
    text: String,
}

/// The two differently colored parts of the badge text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSegments<'a> {
    /// Key name including the delimiter, e.g. `"CapsLock:"`.
    pub label: &'a str,
    /// Status word, e.g. `"ON"`.
    pub status: &'a str,
}

impl BadgeSegments<'_> {
    pub fn is_on(&self) -> bool {
        self.status == STATUS_ON
    }
}

impl BadgeContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_event(event: &KeyStateEvent) -> Self {
        Self::new(format!(
            "{}{} {}",
            event.key.label(),
            STATUS_DELIMITER,
            event.status()
        ))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split at the first delimiter. `None` means the badge shows no text.
    pub fn segments(&self) -> Option<BadgeSegments<'_>> {
        let pos = self.text.find(STATUS_DELIMITER)?;
        let (label, rest) = self.text.split_at(pos + STATUS_DELIMITER.len_utf8());
        let status = rest.strip_prefix(' ').unwrap_or(rest);
        Some(BadgeSegments { label, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ToggleKey;

    #[test]
    fn from_event_formats_label_and_status() {
        let on = BadgeContent::from_event(&KeyStateEvent::new(ToggleKey::CapsLock, true));
        let off = BadgeContent::from_event(&KeyStateEvent::new(ToggleKey::NumLock, false));
        assert_eq!(on.text(), "CapsLock: ON");
        assert_eq!(off.text(), "NumLock: OFF");
    }

    #[test]
    fn segments_split_at_first_delimiter() {
        let content = BadgeContent::new("ScrollLock: OFF");
        let segments = content.segments().unwrap();
        assert_eq!(segments.label, "ScrollLock:");
        assert_eq!(segments.status, "OFF");
        assert!(!segments.is_on());
    }

    #[test]
    fn only_first_delimiter_splits() {
        let content = BadgeContent::new("A: B: C");
        let segments = content.segments().unwrap();
        assert_eq!(segments.label, "A:");
        assert_eq!(segments.status, "B: C");
    }

    #[test]
    fn missing_delimiter_has_no_segments() {
        assert_eq!(BadgeContent::new("CapsLock ON").segments(), None);
        assert_eq!(BadgeContent::default().segments(), None);
    }

    #[test]
    fn status_without_space_is_kept_whole() {
        let content = BadgeContent::new("NumLock:ON");
        let segments = content.segments().unwrap();
        assert_eq!(segments.status, "ON");
        assert!(segments.is_on());
    }
}
