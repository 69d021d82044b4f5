// SPDX-License-Identifier: MPL-2.0
//! Captioned-image message/event types re-exported by the facade.

use iced::widget::text_input;
use iced::{Point, Size};
use std::time::Instant;

/// Messages emitted by the captioned-image widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved, in view coordinates.
    PointerMoved(Point),
    /// Pointer button pressed at the last reported position.
    Pressed,
    /// Pointer button released.
    Released,
    /// The caption field proposed a new text value.
    InputChanged(String),
    /// Return pressed inside the caption field.
    ReturnPressed,
    /// The view geometry changed.
    Resized(Size),
    /// Animation tick while a slide is in flight.
    Tick(Instant),
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The caption field should receive input focus.
    FocusRequested(text_input::Id),
    /// The caption field gave up input focus.
    FocusReleased,
}
