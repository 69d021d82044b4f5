// SPDX-License-Identifier: MPL-2.0
//! Styles for the caption overlay: a translucent black band with white,
//! light-on-dark text suited for legibility over an image.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::state::CaptionOpacity;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Style for the caption text field. The background alpha always mirrors
/// the configured caption opacity.
pub fn field(caption_opacity: CaptionOpacity) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme: &Theme, _status: text_input::Status| text_input::Style {
        background: Background::Color(caption_opacity.background()),
        border: Border::default(),
        icon: palette::WHITE,
        placeholder: Color {
            a: opacity::TEXT_PLACEHOLDER,
            ..palette::WHITE
        },
        value: palette::WHITE,
        selection: Color {
            a: opacity::TEXT_SELECTION,
            ..palette::WHITE
        },
    }
}
