// SPDX-License-Identifier: MPL-2.0
//! Image view with an editable, draggable caption overlay.
//!
//! This module follows the "state down, messages up" pattern. A tap (press
//! and release without movement) toggles caption editing; a drag moves the
//! caption's vertical anchor in real time; while editing, an optional
//! keyboard anchor slides the caption to a reserved position and back.
//!
//! All state is ephemeral and scoped to the component's lifetime.

use crate::ui::state::{CaptionOpacity, Gesture, GestureState, Slide};
use iced::widget::text_input;
use iced::{Rectangle, Size};
use std::time::Instant;

mod component;
mod messages;
mod metrics;
mod view;

pub use messages::{Event, Message};
pub use metrics::{caption_fits, FontMetrics, MeasureText};

/// State of the captioned image view.
pub struct State {
    /// Image shown behind the caption, if one is loaded.
    image: Option<crate::media::ImageData>,
    /// User-entered caption text; empty means "no caption".
    text: String,
    /// Caption background translucency.
    opacity: CaptionOpacity,
    /// Y-coordinate the caption overlay is centered on (view coordinates).
    anchor_y: f32,
    /// Alternate anchor used while the caption is being edited.
    keyboard_anchor: Option<f32>,
    /// Whether the caption overlay is shown at all.
    visible: bool,
    /// Whether the caption currently accepts keystrokes.
    editing: bool,
    /// Last known view size.
    bounds: Size,
    /// Anchor actually rendered; diverges from `anchor_y` during slides.
    display_anchor: f32,
    /// In-flight slide toward or away from the keyboard anchor.
    slide: Option<Slide>,
    /// Tap/drag recognition.
    gesture: GestureState,
    /// Overlay geometry from the last layout pass.
    overlay: Rectangle,
    /// Focus handle of the caption field.
    input_id: text_input::Id,
    /// Text measurement used by edit validation.
    metrics: Box<dyn MeasureText>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("text", &self.text)
            .field("anchor_y", &self.anchor_y)
            .field("keyboard_anchor", &self.keyboard_anchor)
            .field("visible", &self.visible)
            .field("editing", &self.editing)
            .field("overlay", &self.overlay)
            .finish()
    }
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PointerMoved(position) => {
                if let Some(y) = self.gesture.track(position) {
                    self.drag_to(y);
                }
                Event::None
            }
            Message::Pressed => {
                self.gesture.press();
                Event::None
            }
            Message::Released => match self.gesture.release() {
                Gesture::Tap => self.toggle_editing(),
                Gesture::Drag | Gesture::None => Event::None,
            },
            Message::InputChanged(proposed) => {
                if self.accepts_edit(&proposed) {
                    self.text = proposed;
                }
                Event::None
            }
            Message::ReturnPressed => {
                if self.editing {
                    self.stop_editing();
                    Event::FocusReleased
                } else {
                    Event::None
                }
            }
            Message::Resized(size) => {
                self.bounds = size;
                self.layout();
                Event::None
            }
            Message::Tick(now) => {
                self.advance(now);
                Event::None
            }
        }
    }

    /// Tap handler: release focus when editing, otherwise show and focus
    /// the caption.
    fn toggle_editing(&mut self) -> Event {
        if self.editing {
            self.stop_editing();
            Event::FocusReleased
        } else {
            self.visible = true;
            self.editing = true;
            if let Some(target) = self.keyboard_anchor {
                self.slide = Some(Slide::new(self.display_anchor, target, Instant::now()));
            }
            Event::FocusRequested(self.input_id.clone())
        }
    }

    /// Ends editing: the caption stays visible only when it has text, and
    /// slides back to its anchor if the keyboard anchor had moved it.
    fn stop_editing(&mut self) {
        self.editing = false;
        self.visible = !self.text.is_empty();
        if self.keyboard_anchor.is_some() {
            self.slide = Some(Slide::new(self.display_anchor, self.anchor_y, Instant::now()));
        }
    }

    /// Drag handler: the overlay tracks the pointer's y on every update.
    /// No clamping; the caption may be dragged outside the visible bounds.
    fn drag_to(&mut self, y: f32) {
        self.anchor_y = y;
        self.display_anchor = y;
        self.slide = None;
        self.layout();
    }

    /// Edit validation: shrinking proposals are deletions and always pass;
    /// growing proposals must leave the caption margin free inside the
    /// overlay's current width.
    fn accepts_edit(&self, proposed: &str) -> bool {
        if proposed.chars().count() <= self.text.chars().count() {
            return true;
        }
        caption_fits(self.metrics.text_width(proposed), self.overlay.width)
    }

    /// Advances the slide animation and drops it once finished.
    fn advance(&mut self, now: Instant) {
        if let Some(slide) = self.slide {
            self.display_anchor = slide.sample(now);
            if slide.is_finished(now) {
                self.slide = None;
            }
            self.layout();
        }
    }

    /// Recomputes the overlay geometry from the current state. Idempotent.
    fn layout(&mut self) {
        self.overlay = component::overlay_rect(self.bounds, self.display_anchor);
    }

    /// The caption text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the caption currently accepts keystrokes.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the caption overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The caption's vertical anchor.
    #[must_use]
    pub fn anchor_y(&self) -> f32 {
        self.anchor_y
    }

    /// The overlay rectangle from the last layout pass.
    #[must_use]
    pub fn overlay(&self) -> Rectangle {
        self.overlay
    }

    /// The caption background opacity.
    #[must_use]
    pub fn opacity(&self) -> CaptionOpacity {
        self.opacity
    }

    /// Whether a slide animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    pub(crate) fn image(&self) -> Option<&crate::media::ImageData> {
        self.image.as_ref()
    }

    pub(crate) fn input_id(&self) -> &text_input::Id {
        &self.input_id
    }
}
