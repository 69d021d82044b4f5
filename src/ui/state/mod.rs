// SPDX-License-Identifier: MPL-2.0
//! Reusable UI interaction state.
//!
//! Keeps pointer-gesture recognition and animation bookkeeping separate from
//! the component that consumes them.

pub mod animation;
pub mod gesture;
pub mod opacity;

pub use animation::Slide;
pub use gesture::{Gesture, GestureState};
pub use opacity::CaptionOpacity;
