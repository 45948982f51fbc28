mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use model::{ExplorerSection, SidebarViewModel};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Sidebar controller owning visibility and explorer state.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the sidebar open, as on desktop.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx<'_>,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            open: self.state.is_open(),
            collapsed: self.state.is_collapsed(),
            device: self.state.device(),
            show_overlay: self.state.shows_overlay(),
            portfolio_expanded: self
                .state
                .is_expanded(ExplorerSection::Portfolio),
            projects_expanded: self.state.is_expanded(ExplorerSection::Projects),
            contact_expanded: self.state.is_expanded(ExplorerSection::Contact),
        }
    }
}
