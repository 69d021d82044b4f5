// SPDX-License-Identifier: MPL-2.0
use iced_caption::app::{self, App, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        opacity: args.opt_value_from_str("--opacity").unwrap_or(None),
        keyboard_anchor: args.opt_value_from_str("--keyboard-anchor").unwrap_or(None),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(app::WINDOW_WIDTH, app::WINDOW_HEIGHT))
        .run_with(move || App::new(flags))
}
