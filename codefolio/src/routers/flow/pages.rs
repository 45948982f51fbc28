use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::tabs::TabsIntent;

/// Rebuild the tab set after the catalog was reloaded, keeping the current
/// route open.
pub(crate) fn catalog_reloaded(app: &mut App) -> Task<AppEvent> {
    let route = app.widgets.navigation.current().clone();

    let reset = routers::tabs::route_intent(app, TabsIntent::Reset);
    let ensure = routers::tabs::route_intent(app, TabsIntent::Ensure { route });

    Task::batch([reset, ensure])
}
