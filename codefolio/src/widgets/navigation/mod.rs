mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
use iced::Task;
use model::NavigationViewModel;
use state::NavigationState;

use crate::shared::route::Route;

/// Owner of the current route and its history stacks.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: NavigationState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> NavigationViewModel {
        NavigationViewModel {
            can_go_back: self.state.can_go_back(),
            can_go_forward: self.state.can_go_forward(),
        }
    }

    pub(crate) fn current(&self) -> &Route {
        self.state.current()
    }

    pub(crate) fn current_path(&self) -> &str {
        self.state.current_path()
    }
}
