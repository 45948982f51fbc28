use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::flow;
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};

pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => route_intent(app, intent),
        NavigationEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Apply a navigation intent. The route is current once this returns.
pub(crate) fn route_intent(
    app: &mut App,
    intent: NavigationIntent,
) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(intent)
        .map(AppEvent::Navigation)
}

/// Shorthand for navigating to `path`.
pub(crate) fn navigate(app: &mut App, path: String) -> Task<AppEvent> {
    route_intent(app, NavigationIntent::Navigate { path })
}

fn route_effect(app: &mut App, effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::Settled { route } => {
            flow::navigation::route_settled(app, route)
        },
    }
}
