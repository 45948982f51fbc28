use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::breakpoint::{
    BreakpointEffect, BreakpointEvent, BreakpointIntent,
};
use crate::widgets::sidebar::SidebarIntent;

pub(crate) fn route(app: &mut App, event: BreakpointEvent) -> Task<AppEvent> {
    match event {
        BreakpointEvent::Intent(intent) => route_intent(app, intent),
        BreakpointEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a breakpoint intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: BreakpointIntent,
) -> Task<AppEvent> {
    app.widgets
        .breakpoint
        .reduce(intent)
        .map(AppEvent::Breakpoint)
}

fn route_effect(app: &mut App, effect: BreakpointEffect) -> Task<AppEvent> {
    match effect {
        BreakpointEffect::DeviceClassChanged(device) => {
            routers::sidebar::route_intent(
                app,
                SidebarIntent::DeviceClassChanged(device),
            )
        },
    }
}
