// SPDX-License-Identifier: MPL-2.0
//! Caption opacity domain type.
//!
//! The overlay's background is always black at exactly this alpha, so the
//! color is derived here rather than stored separately.

use crate::config::DEFAULT_CAPTION_OPACITY;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Caption background opacity, always within `[0, 1]`.
///
/// # Example
///
/// ```
/// use iced_caption::ui::state::CaptionOpacity;
///
/// let opacity = CaptionOpacity::new(0.8);
/// assert_eq!(opacity.value(), 0.8);
///
/// // Values outside the range are clamped
/// let too_high = CaptionOpacity::new(1.5);
/// assert_eq!(too_high.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionOpacity(f32);

impl CaptionOpacity {
    /// Creates a new opacity value, clamping to `[0, 1]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// The caption background: black with this alpha.
    #[must_use]
    pub fn background(self) -> Color {
        Color {
            a: self.0,
            ..palette::BLACK
        }
    }
}

impl Default for CaptionOpacity {
    fn default() -> Self {
        Self(DEFAULT_CAPTION_OPACITY)
    }
}
