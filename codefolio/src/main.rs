mod app;
mod config;
mod routers;
mod shared;
mod storage;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}
