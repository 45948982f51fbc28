mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{StatusBarEvent, StatusBarIntent};
use iced::Task;
use model::StatusBarViewModel;
use state::StatusBarState;

/// Editor-style status bar with a local wall clock.
#[derive(Default)]
pub(crate) struct StatusBarWidget {
    state: StatusBarState,
}

impl StatusBarWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reduce(
        &mut self,
        event: StatusBarIntent,
    ) -> Task<StatusBarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> StatusBarViewModel {
        StatusBarViewModel {
            version: env!("CARGO_PKG_VERSION"),
            clock: self.state.clock().to_string(),
        }
    }
}
