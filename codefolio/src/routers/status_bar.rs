use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::status_bar::StatusBarEvent;

pub(crate) fn route(app: &mut App, event: StatusBarEvent) -> Task<AppEvent> {
    match event {
        StatusBarEvent::Intent(intent) => app
            .widgets
            .status_bar
            .reduce(intent)
            .map(AppEvent::StatusBar),
    }
}
