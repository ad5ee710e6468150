//! Filtering of raw key-up notifications down to watched toggle keys.

use crate::events::{KeyStateEvent, ToggleKey};

/// The set of toggle keys that raise the badge.
///
/// `Copy` and lock-free so the hook callback can consult it without touching
/// any UI-thread state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyFilter {
    caps_lock: bool,
    num_lock: bool,
    scroll_lock: bool,
}

impl KeyFilter {
    pub fn new(keys: impl IntoIterator<Item = ToggleKey>) -> Self {
        let mut filter = Self::default();
        for key in keys {
            match key {
                ToggleKey::CapsLock => filter.caps_lock = true,
                ToggleKey::NumLock => filter.num_lock = true,
                ToggleKey::ScrollLock => filter.scroll_lock = true,
            }
        }
        filter
    }

    pub fn watches(&self, key: ToggleKey) -> bool {
        match key {
            ToggleKey::CapsLock => self.caps_lock,
            ToggleKey::NumLock => self.num_lock,
            ToggleKey::ScrollLock => self.scroll_lock,
        }
    }

    /// Map a virtual-key code to a watched toggle key.
    pub fn classify(&self, vk_code: u32) -> Option<ToggleKey> {
        ToggleKey::from_vk_code(vk_code).filter(|key| self.watches(*key))
    }

    /// Build the event for a key-up, querying the toggle state only for
    /// watched keys.
    pub fn event_for(
        &self,
        vk_code: u32,
        toggle_state: impl FnOnce(ToggleKey) -> bool,
    ) -> Option<KeyStateEvent> {
        let key = self.classify(vk_code)?;
        Some(KeyStateEvent::new(key, toggle_state(key)))
    }

    pub fn is_empty(&self) -> bool {
        !(self.caps_lock || self.num_lock || self.scroll_lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::*;

    #[test]
    fn classify_accepts_enabled_keys_only() {
        let filter = KeyFilter::new([ToggleKey::CapsLock, ToggleKey::NumLock]);
        assert_eq!(filter.classify(VK_CAPSLOCK), Some(ToggleKey::CapsLock));
        assert_eq!(filter.classify(VK_NUMLOCK), Some(ToggleKey::NumLock));
        assert_eq!(filter.classify(VK_SCROLLLOCK), None);
    }

    #[test]
    fn classify_ignores_other_keys() {
        let filter = KeyFilter::new(ToggleKey::ALL);
        assert_eq!(filter.classify(0x41), None);
        assert_eq!(filter.classify(0x0D), None);
    }

    #[test]
    fn event_for_queries_state_of_matched_key() {
        let filter = KeyFilter::new([ToggleKey::NumLock]);
        let event = filter.event_for(VK_NUMLOCK, |key| key == ToggleKey::NumLock);
        assert_eq!(event, Some(KeyStateEvent::new(ToggleKey::NumLock, true)));
    }

    #[test]
    fn event_for_skips_state_query_for_unwatched_keys() {
        let filter = KeyFilter::new([ToggleKey::CapsLock]);
        let event = filter.event_for(VK_SCROLLLOCK, |_| panic!("must not be queried"));
        assert_eq!(event, None);
    }

    #[test]
    fn empty_filter_watches_nothing() {
        let filter = KeyFilter::default();
        assert!(filter.is_empty());
        for key in ToggleKey::ALL {
            assert_eq!(filter.classify(key.vk_code()), None);
        }
    }
}
