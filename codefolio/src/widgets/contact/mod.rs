mod client;
mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use client::ContactClient;
pub(crate) use event::{ContactEffect, ContactEvent, ContactIntent};
use iced::Task;
use model::ContactViewModel;
pub(crate) use reducer::ContactCtx;
use state::ContactState;

/// Contact form submitting through the mail relay.
#[derive(Default)]
pub(crate) struct ContactWidget {
    state: ContactState,
}

impl ContactWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reduce(
        &mut self,
        event: ContactIntent,
        ctx: &ContactCtx<'_>,
    ) -> Task<ContactEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> ContactViewModel {
        ContactViewModel {
            fields: self.state.fields().clone(),
            status: self.state.status().clone(),
        }
    }
}
