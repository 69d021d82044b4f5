// SPDX-License-Identifier: MPL-2.0
//! `iced_caption` is an image view with an editable caption overlay, built
//! with the Iced GUI framework.
//!
//! Clicking the image toggles caption editing, dragging repositions the
//! caption vertically, and an optional "keyboard anchor" slides the caption
//! out of the way while it is being edited. The component follows the
//! Elm-style "state down, messages up" pattern; see [`ui::captioned_image`].
//!
//! All entry points are driven by the Iced runtime and execute on its main
//! event loop; nothing in this crate spawns threads or holds locks.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
