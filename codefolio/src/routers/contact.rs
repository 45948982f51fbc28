use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::contact::{
    ContactCtx, ContactEffect, ContactEvent, ContactIntent,
};

pub(crate) fn route(app: &mut App, event: ContactEvent) -> Task<AppEvent> {
    match event {
        ContactEvent::Intent(intent) => route_intent(app, intent),
        ContactEvent::Effect(effect) => {
            route_effect(effect);
            Task::none()
        },
    }
}

/// Route a contact intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: ContactIntent,
) -> Task<AppEvent> {
    let ctx = ContactCtx {
        client: &app.contact_client,
    };
    app.widgets.contact.reduce(intent, &ctx).map(AppEvent::Contact)
}

fn route_effect(effect: ContactEffect) {
    match effect {
        ContactEffect::Delivered => log::info!("contact message delivered"),
        ContactEffect::Failed { cause } => {
            log::warn!("contact submission failed: {cause}");
        },
    }
}
