mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{RecentEffect, RecentEvent, RecentIntent};
use iced::Task;
use model::RecentViewModel;
pub(crate) use reducer::RecentCtx;
use state::RecentState;

use crate::storage::StoragePort;

/// Recent-files and history logs persisted through a storage port.
pub(crate) struct RecentWidget {
    state: RecentState,
}

impl RecentWidget {
    pub(crate) fn new(storage: Box<dyn StoragePort>) -> Self {
        Self {
            state: RecentState::new(storage),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: RecentIntent,
        ctx: &RecentCtx,
    ) -> Task<RecentEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> RecentViewModel {
        RecentViewModel {
            recent_files: self.state.recent_files().to_vec(),
            history: self.state.history().to_vec(),
        }
    }

    /// Visited paths, most recent first.
    pub(crate) fn history(&self) -> &[String] {
        self.state.history()
    }
}
