use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::routers::breakpoint;
use crate::widgets::breakpoint::{BreakpointEvent, BreakpointIntent};

/// Feed window resizes into the breakpoint observer.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Resized(size) => {
            breakpoint::route_intent(app, BreakpointIntent::Resized(size))
        },
        _ => Task::none(),
    }
}

/// Query the initial viewport size of the latest window.
pub(crate) fn request_size() -> Task<AppEvent> {
    window::latest().and_then(window::size).map(|size| {
        AppEvent::Breakpoint(BreakpointEvent::Intent(
            BreakpointIntent::Resized(size),
        ))
    })
}
