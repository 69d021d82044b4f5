// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`captioned_image`] - Image view with the editable caption overlay
//! - [`state`] - Reusable interaction state (gesture recognition, slides)
//! - [`styles`] - Centralized styling for the caption overlay
//! - [`design_tokens`] - Design system constants (colors, sizing, timing)

pub mod captioned_image;
pub mod design_tokens;
pub mod state;
pub mod styles;
