use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::tabs::TabsIntent;

/// Close the active tab: navigate to its neighbour first, then drop it
/// once the new route is current.
pub(crate) fn close_active(
    app: &mut App,
    tab_id: String,
    path: String,
) -> Task<AppEvent> {
    let navigate = routers::navigation::navigate(app, path);
    let remove = routers::tabs::route_intent(app, TabsIntent::Remove { tab_id });

    Task::batch([navigate, remove])
}
