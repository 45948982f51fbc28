use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::shared::route::{HOME_PATH, Route};
use crate::widgets::contact::ContactIntent;
use crate::widgets::navigation::NavigationIntent;
use crate::widgets::pages::PagesIntent;
use crate::widgets::recent::RecentIntent;
use crate::widgets::sidebar::SidebarIntent;
use crate::widgets::tabs::TabsIntent;
use crate::widgets::tabs::model::tab_for_route;

/// Run the side channels of a settled route, in order: tab registry,
/// recent-files and history logs, sidebar. Leaving the contact page also
/// cancels an in-flight submission, leaving home closes the about modal.
pub(crate) fn route_settled(app: &mut App, route: Route) -> Task<AppEvent> {
    let path = route.path();
    let mut tasks = Vec::with_capacity(5);

    tasks.push(routers::tabs::route_intent(
        app,
        TabsIntent::Ensure {
            route: route.clone(),
        },
    ));

    let name = app
        .widgets
        .tabs
        .label_for_path(&path)
        .map(str::to_string)
        .unwrap_or_else(|| tab_for_route(&route, app.widgets.pages.catalog()).label);
    tasks.push(routers::recent::route_intent(
        app,
        RecentIntent::Record { name, path },
    ));

    tasks.push(routers::sidebar::route_intent(app, SidebarIntent::RouteSettled));

    if !route.is_email() {
        tasks.push(routers::contact::route_intent(app, ContactIntent::Cancel));
    }

    if route != Route::Home {
        tasks.push(routers::pages::route_intent(app, PagesIntent::CloseAbout));
    }

    Task::batch(tasks)
}

/// Step back through history. With nothing behind the current route, fall
/// back to home.
pub(crate) fn go_back_or_home(app: &mut App) -> Task<AppEvent> {
    if app.widgets.navigation.vm().can_go_back {
        routers::navigation::route_intent(app, NavigationIntent::Back)
    } else {
        routers::navigation::navigate(app, String::from(HOME_PATH))
    }
}
