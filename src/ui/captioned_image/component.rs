// SPDX-License-Identifier: MPL-2.0
//! Constructors, public tunables, and the view wrapper for the
//! captioned-image facade.

use crate::config::Config;
use crate::media::ImageData;
use crate::ui::design_tokens::sizing;
use crate::ui::state::{CaptionOpacity, GestureState};
use iced::widget::text_input;
use iced::{Element, Point, Rectangle, Size};

use super::{view, FontMetrics, MeasureText, Message, State};

/// Overlay geometry for a view of the given size: full width, fixed
/// height, centered horizontally, centered vertically on the anchor.
#[must_use]
pub(super) fn overlay_rect(bounds: Size, anchor_y: f32) -> Rectangle {
    Rectangle::new(
        Point::new(0.0, anchor_y - sizing::CAPTION_HEIGHT / 2.0),
        Size::new(bounds.width, sizing::CAPTION_HEIGHT),
    )
}

impl State {
    /// Creates the view for the given bounds: caption hidden, default
    /// opacity, anchor at the vertical midpoint.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        let anchor_y = bounds.height / 2.0;
        Self {
            image: None,
            text: String::new(),
            opacity: CaptionOpacity::default(),
            anchor_y,
            keyboard_anchor: None,
            visible: false,
            editing: false,
            bounds,
            display_anchor: anchor_y,
            slide: None,
            gesture: GestureState::default(),
            overlay: overlay_rect(bounds, anchor_y),
            input_id: text_input::Id::unique(),
            metrics: Box::new(FontMetrics::default()),
        }
    }

    /// Reconstructs the view from persisted settings; everything else is
    /// reset to defaults.
    #[must_use]
    pub fn from_config(config: &Config, bounds: Size) -> Self {
        let mut state = Self::new(bounds);
        if let Some(opacity) = config.caption_opacity {
            state.set_opacity(opacity);
        }
        state.keyboard_anchor = config.keyboard_anchor;
        state
    }

    /// Replaces the text measurement capability.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Box<dyn MeasureText>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the image shown behind the caption.
    pub fn set_image(&mut self, image: ImageData) {
        self.image = Some(image);
    }

    /// Sets the caption background opacity, clamped to `[0, 1]`. The
    /// overlay background color follows immediately.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = CaptionOpacity::new(opacity);
    }

    /// Sets or clears the anchor the caption slides to while editing.
    pub fn set_keyboard_anchor(&mut self, anchor: Option<f32>) {
        self.keyboard_anchor = anchor;
    }

    /// The anchor the caption slides to while editing, if configured.
    #[must_use]
    pub fn keyboard_anchor(&self) -> Option<f32> {
        self.keyboard_anchor
    }

    /// Render the captioned image view.
    pub fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }
}
