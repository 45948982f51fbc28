mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{TabsEffect, TabsEvent, TabsIntent};
use self::model::TabsViewModel;
pub(crate) use self::reducer::TabsCtx;
use self::state::TabsState;

/// Tab registry synchronized with settled routes.
pub(crate) struct TabsWidget {
    state: TabsState,
}

impl TabsWidget {
    /// Create the registry holding only the home tab.
    pub(crate) fn new() -> Self {
        Self {
            state: TabsState::default(),
        }
    }

    /// Reduce a tabs intent into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: TabsIntent,
        ctx: &TabsCtx<'_>,
    ) -> Task<TabsEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Produce the tab bar view model; the active tab follows the route.
    pub(crate) fn vm(&self, current_path: &str) -> TabsViewModel {
        TabsViewModel {
            tabs: self.state.tabs().to_vec(),
            active_tab_id: self
                .state
                .find_by_path(current_path)
                .map(|tab| tab.id.clone()),
        }
    }

    /// Label of the tab open at `path`.
    pub(crate) fn label_for_path(&self, path: &str) -> Option<&str> {
        self.state
            .find_by_path(path)
            .map(|tab| tab.label.as_str())
    }
}
