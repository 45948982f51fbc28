mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{PagesEffect, PagesEvent, PagesIntent};
use iced::Task;
use state::PagesState;
pub(crate) use state::CatalogLoader;

use crate::shared::content::Catalog;

/// Portfolio pages backed by the content catalog and the app-level error
/// boundary.
pub(crate) struct PagesWidget {
    state: PagesState,
}

impl PagesWidget {
    pub(crate) fn new(loader: CatalogLoader) -> Self {
        Self {
            state: PagesState::new(loader),
        }
    }

    pub(crate) fn reduce(&mut self, event: PagesIntent) -> Task<PagesEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        self.state.catalog()
    }

    pub(crate) fn fault(&self) -> Option<&str> {
        self.state.fault()
    }

    pub(crate) fn about_open(&self) -> bool {
        self.state.about_open()
    }
}
