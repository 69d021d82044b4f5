// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition state.
//!
//! Iced's `mouse_area` reports raw press/move/release, so tap and drag are
//! told apart here: a press followed by movement beyond a small slop is a
//! drag, anything else is a tap on release.

use iced::Point;

/// Movement beyond this distance (in logical pixels) turns a press into a drag.
const TAP_SLOP: f32 = 8.0;

/// How a completed press/release sequence is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
    /// Release without a matching press (e.g. the press landed outside the view).
    None,
}

/// Tracks the pointer and classifies presses as taps or drags.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Last known pointer position in view coordinates.
    cursor: Point,
    /// Position where the current press started, if any.
    origin: Option<Point>,
    /// Whether the current press has exceeded the tap slop.
    dragging: bool,
}

impl GestureState {
    /// Records a pointer move and, while a drag is in progress, returns the
    /// vertical coordinate the dragged element should follow.
    pub fn track(&mut self, position: Point) -> Option<f32> {
        self.cursor = position;
        let origin = self.origin?;
        if !self.dragging && origin.distance(position) > TAP_SLOP {
            self.dragging = true;
        }
        self.dragging.then_some(position.y)
    }

    /// Starts a press at the last known pointer position.
    pub fn press(&mut self) {
        self.origin = Some(self.cursor);
        self.dragging = false;
    }

    /// Ends the press and classifies it.
    pub fn release(&mut self) -> Gesture {
        let pressed = self.origin.take().is_some();
        let dragged = std::mem::take(&mut self.dragging);
        match (pressed, dragged) {
            (true, false) => Gesture::Tap,
            (true, true) => Gesture::Drag,
            (false, _) => Gesture::None,
        }
    }

    /// Whether a press is currently active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }
}
