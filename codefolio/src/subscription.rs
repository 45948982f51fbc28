use std::time::Duration;

use iced::{Subscription, window};

use super::{App, AppEvent};
use crate::widgets::status_bar::{StatusBarEvent, StatusBarIntent};

const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Build the active subscription set.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);
    let clock = iced::time::every(CLOCK_TICK).map(|_| {
        AppEvent::StatusBar(StatusBarEvent::Intent(StatusBarIntent::Tick {
            now: chrono::Local::now().fixed_offset(),
        }))
    });

    Subscription::batch([win_subs, key_subs, clock])
}
