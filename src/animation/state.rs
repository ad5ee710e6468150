//! Visibility lifecycle of the badge.

use std::fmt;

/// The four states of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Not on screen; opacity is 0.
    #[default]
    Hidden,
    /// Opacity rising toward 255.
    FadingIn,
    /// Fully opaque, hold countdown running.
    Visible,
    /// Opacity falling toward 0.
    FadingOut,
}

impl AnimationState {
    /// True whenever the window should be shown.
    pub fn is_on_screen(&self) -> bool {
        !matches!(self, AnimationState::Hidden)
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationState::Hidden => write!(f, "Hidden"),
            AnimationState::FadingIn => write!(f, "FadingIn"),
            AnimationState::Visible => write!(f, "Visible"),
            AnimationState::FadingOut => write!(f, "FadingOut"),
        }
    }
}
