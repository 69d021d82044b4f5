// SPDX-License-Identifier: MPL-2.0
//! Rendering for the captioned image view.
//!
//! The image (or an empty-state hint) fills the view; when visible, the
//! caption overlay is layered on top at the geometry from the last layout
//! pass. The whole stack sits inside a `mouse_area` so taps and drags are
//! observed anywhere over the image, including over the caption itself.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, mouse_area, text, text_input, Column, Image, Space, Stack};
use iced::{alignment, ContentFit, Element, Length};

use super::{Message, State};

pub(super) fn render(state: &State) -> Element<'_, Message> {
    let backdrop: Element<'_, Message> = match state.image() {
        Some(data) => Image::new(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => empty_state(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop);

    if state.is_visible() {
        layers = layers.push(positioned_caption(state));
    }

    mouse_area(layers)
        .on_move(Message::PointerMoved)
        .on_press(Message::Pressed)
        .on_release(Message::Released)
        .into()
}

/// The caption field at the overlay rectangle computed by the layout pass.
fn positioned_caption(state: &State) -> Element<'_, Message> {
    let rect = state.overlay();

    let field = text_input("Add a caption", state.text())
        .id(state.input_id().clone())
        .on_input_maybe(state.is_editing().then_some(Message::InputChanged))
        .on_submit(Message::ReturnPressed)
        .size(typography::BODY_LG)
        .padding([0.0, spacing::XS])
        .style(styles::caption::field(state.opacity()));

    // The column clips at the top edge; the anchor itself is unclamped, so
    // a caption dragged above the view simply leaves the visible area.
    Column::new()
        .width(Length::Fill)
        .push(Space::with_height(Length::Fixed(rect.y.max(0.0))))
        .push(
            container(field)
                .width(Length::Fill)
                .height(Length::Fixed(rect.height))
                .align_y(alignment::Vertical::Center),
        )
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        text("No image loaded — pass an image path on the command line")
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
