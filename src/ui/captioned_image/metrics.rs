// SPDX-License-Identifier: MPL-2.0
//! Text measurement for caption edit validation.
//!
//! The caption must fit on a single line, so growing edits are checked
//! against the overlay width. Measurement goes through an explicit
//! capability so tests can supply exact fake fonts.

use crate::ui::design_tokens::{sizing, typography};

/// Measures rendered text width in logical pixels.
pub trait MeasureText {
    fn text_width(&self, text: &str) -> f32;
}

/// Average glyph advance relative to the font size for the default UI font.
/// An approximation; the margin in [`caption_fits`] absorbs the error.
const AVG_ADVANCE_RATIO: f32 = 0.5;

/// Width estimation for the default UI font at a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    size: f32,
}

impl FontMetrics {
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::new(typography::BODY_LG)
    }
}

impl MeasureText for FontMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * AVG_ADVANCE_RATIO
    }
}

/// Whether text of the given measured width, plus the caption margin, fits
/// inside an overlay of the given width.
#[must_use]
pub fn caption_fits(measured_width: f32, overlay_width: f32) -> bool {
    measured_width + sizing::CAPTION_TEXT_MARGIN <= overlay_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_when_margin_is_available() {
        assert!(caption_fits(70.0, 100.0)); // 70 + 16 <= 100
    }

    #[test]
    fn rejected_when_margin_would_overflow() {
        assert!(!caption_fits(95.0, 100.0)); // 95 + 16 > 100
    }

    #[test]
    fn exact_fit_is_accepted() {
        assert!(caption_fits(84.0, 100.0)); // 84 + 16 == 100
    }

    #[test]
    fn font_metrics_scale_with_length_and_size() {
        let metrics = FontMetrics::new(16.0);
        assert_eq!(metrics.text_width(""), 0.0);
        assert_eq!(metrics.text_width("ab"), 16.0);
        assert!(metrics.text_width("abcd") > metrics.text_width("ab"));
    }
}
