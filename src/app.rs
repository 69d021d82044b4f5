// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the captioned image view.
//!
//! The `App` struct owns the component state and translates its events into
//! runtime side effects: focus tasks for the caption field, the animation
//! tick subscription, and persistence of the opacity preference. Everything
//! runs on the Iced main event loop.

use crate::config::{self, Config};
use crate::media;
use crate::ui::captioned_image::{self, Event as CaptionEvent};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{container, row, slider, text, text_input, Column};
use iced::{event, time, window, Element, Length, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Root Iced application state.
pub struct App {
    viewer: captioned_image::State,
    config: Config,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Caption(captioned_image::Message),
    OpacityChanged(f32),
    OpacityReleased,
    WindowResized(Size),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Caption opacity override in `[0, 1]`.
    pub opacity: Option<f32>,
    /// Y-coordinate the caption slides to while editing.
    pub keyboard_anchor: Option<f32>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings: {}", err);
            Config::default()
        });
        if let Some(opacity) = flags.opacity {
            config.caption_opacity = Some(opacity);
        }
        if let Some(anchor) = flags.keyboard_anchor {
            config.keyboard_anchor = Some(anchor);
        }

        let bounds = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT - sizing::CONTROLS_BAR_HEIGHT);
        let mut viewer = captioned_image::State::from_config(&config, bounds);

        if let Some(path) = &flags.file_path {
            match media::load(path) {
                Ok(image) => viewer.set_image(image),
                Err(err) => eprintln!("Failed to load image {}: {}", path, err),
            }
        }

        (Self { viewer, config }, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Iced Caption")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Caption(message) => match self.viewer.update(message) {
                CaptionEvent::FocusRequested(id) => text_input::focus(id),
                CaptionEvent::FocusReleased | CaptionEvent::None => Task::none(),
            },
            Message::OpacityChanged(value) => {
                self.viewer.set_opacity(value);
                Task::none()
            }
            Message::OpacityReleased => {
                self.config.caption_opacity = Some(self.viewer.opacity().value());
                if let Err(err) = config::save(&self.config) {
                    eprintln!("Failed to save settings: {}", err);
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                let bounds = Size::new(
                    size.width,
                    (size.height - sizing::CONTROLS_BAR_HEIGHT).max(0.0),
                );
                self.viewer
                    .update(captioned_image::Message::Resized(bounds));
                Task::none()
            }
            Message::Tick(now) => {
                self.viewer.update(captioned_image::Message::Tick(now));
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let viewer = self.viewer.view().map(Message::Caption);

        let controls = row![
            text("Caption opacity").size(typography::BODY),
            slider(0.0..=1.0, self.viewer.opacity().value(), Message::OpacityChanged)
                .step(0.05)
                .on_release(Message::OpacityReleased)
                .width(Length::Fixed(sizing::SLIDER_WIDTH)),
        ]
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center);

        Column::new()
            .push(
                container(viewer)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(
                container(controls)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::CONTROLS_BAR_HEIGHT))
                    .align_y(iced::alignment::Vertical::Center)
                    .padding([0.0, spacing::MD]),
            )
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let resize_subscription = event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        let tick_subscription = if self.viewer.is_animating() {
            time::every(crate::ui::design_tokens::animation::TICK).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([resize_subscription, tick_subscription])
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_settings() {
        let flags = Flags {
            file_path: None,
            opacity: Some(0.9),
            keyboard_anchor: Some(180.0),
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.viewer.opacity().value(), 0.9);
        assert_eq!(app.viewer.keyboard_anchor(), Some(180.0));
    }

    #[test]
    fn resize_reserves_room_for_the_controls_bar() {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::WindowResized(Size::new(640.0, 480.0)));
        assert_eq!(app.viewer.overlay().width, 640.0);
    }

    #[test]
    fn opacity_slider_drives_the_caption_background() {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::OpacityChanged(0.2));
        assert_eq!(app.viewer.opacity().background().a, 0.2);
    }
}
