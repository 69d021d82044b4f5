// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Animation**: Fixed durations

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Placeholder text in the caption field.
    pub const TEXT_PLACEHOLDER: f32 = 0.7;
    /// Selection highlight in the caption field.
    pub const TEXT_SELECTION: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

pub mod sizing {
    /// Fixed height of the caption overlay.
    pub const CAPTION_HEIGHT: f32 = 32.0;

    /// Horizontal margin the caption text must leave free inside the
    /// overlay for an edit to be accepted.
    pub const CAPTION_TEXT_MARGIN: f32 = 16.0;

    /// Height of the bottom controls bar in the demo application.
    pub const CONTROLS_BAR_HEIGHT: f32 = 48.0;

    /// Width of the opacity slider in the demo application.
    pub const SLIDER_WIDTH: f32 = 200.0;
}

pub mod typography {
    /// Standard body - labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Large body - the caption field itself
    pub const BODY_LG: f32 = 16.0;

    /// Caption - hints, empty-state text
    pub const CAPTION: f32 = 12.0;
}

pub mod animation {
    use std::time::Duration;

    /// Duration of the caption slide toward/away from the keyboard anchor.
    pub const CAPTION_SLIDE: Duration = Duration::from_millis(300);

    /// Tick interval while a slide is in flight.
    pub const TICK: Duration = Duration::from_millis(16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_overlay_geometry_tokens() {
        assert_eq!(sizing::CAPTION_HEIGHT, 32.0);
        assert_eq!(sizing::CAPTION_TEXT_MARGIN, 16.0);
    }

    #[test]
    fn slide_lasts_300_ms() {
        assert_eq!(animation::CAPTION_SLIDE.as_millis(), 300);
    }

    #[test]
    fn opacity_levels_are_valid_alpha() {
        for level in [
            opacity::TRANSPARENT,
            opacity::TEXT_PLACEHOLDER,
            opacity::TEXT_SELECTION,
            opacity::OPAQUE,
        ] {
            assert!((0.0..=1.0).contains(&level));
        }
    }
}
