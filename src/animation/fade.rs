//! Opacity step computation.
//!
//! Every curve guarantees progress of at least one unit per tick toward the
//! target, never overshoots it, and reaches it within [`FadeCurve::max_ticks`]
//! ticks.

use crate::model::constants::EASED_MIN_STEP;

/// Direction of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Toward 255.
    In,
    /// Toward 0.
    Out,
}

impl FadeDirection {
    pub fn target(&self) -> u8 {
        match self {
            FadeDirection::In => u8::MAX,
            FadeDirection::Out => 0,
        }
    }

    /// Distance from `opacity` to the target.
    pub fn remaining(&self, opacity: u8) -> u8 {
        match self {
            FadeDirection::In => u8::MAX - opacity,
            FadeDirection::Out => opacity,
        }
    }
}

/// How far opacity moves on each animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeCurve {
    /// Fixed step per tick.
    Linear { step: u8 },
    /// Step scaled by `0.5 + 1.5 * remaining / 255`: fast while far from the
    /// target, slow near it, never below `EASED_MIN_STEP`.
    Eased { step: u8 },
}

impl Default for FadeCurve {
    fn default() -> Self {
        FadeCurve::Linear {
            step: crate::model::constants::DEFAULT_FADE_STEP,
        }
    }
}

impl FadeCurve {
    /// Step size when `remaining` units separate opacity from the target.
    pub fn step_for(&self, remaining: u8) -> u8 {
        match *self {
            FadeCurve::Linear { step } => step.max(1),
            FadeCurve::Eased { step } => {
                let fraction = remaining as f32 / u8::MAX as f32;
                let scaled = (step as f32 * (0.5 + 1.5 * fraction)).round();
                (scaled.min(u8::MAX as f32) as u8).max(EASED_MIN_STEP)
            }
        }
    }

    /// Opacity after one tick in `direction`, clamped to the target.
    pub fn advance(&self, opacity: u8, direction: FadeDirection) -> u8 {
        let step = self.step_for(direction.remaining(opacity));
        match direction {
            FadeDirection::In => opacity.saturating_add(step),
            FadeDirection::Out => opacity.saturating_sub(step),
        }
    }

    /// Upper bound on the ticks a full 0..=255 fade takes.
    pub fn max_ticks(&self) -> u32 {
        // Steps only shrink as the target nears, so the smallest step is the
        // one taken with nothing remaining.
        let min_step = self.step_for(0) as u32;
        (u8::MAX as u32).div_ceil(min_step)
    }
}
