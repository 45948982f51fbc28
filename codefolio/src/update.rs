use iced::Task;

use super::{App, AppEvent};
use crate::routers;
use crate::widgets::recent::RecentIntent;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => ready(app),
        AppEvent::Breakpoint(event) => routers::breakpoint::route(app, event),
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        AppEvent::Tabs(event) => routers::tabs::route(app, event),
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Recent(event) => routers::recent::route(app, event),
        AppEvent::Contact(event) => routers::contact::route(app, event),
        AppEvent::Pages(event) => routers::pages::route(app, event),
        AppEvent::StatusBar(event) => routers::status_bar::route(app, event),
        AppEvent::Keyboard(event) => routers::keyboard::route(app, event),
        AppEvent::Window(event) => routers::window::route(app, event),
    }
}

/// Load the persisted logs, measure the window and settle the initial
/// route.
fn ready(app: &mut App) -> Task<AppEvent> {
    let load = routers::recent::route_intent(app, RecentIntent::Load);
    let measure = routers::window::request_size();
    let route = app.widgets.navigation.current().clone();
    let settle = routers::flow::navigation::route_settled(app, route);

    Task::batch([load, measure, settle])
}
