use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::navigation;
use crate::shared::clock::unix_millis;
use crate::widgets::recent::{
    RecentCtx, RecentEffect, RecentEvent, RecentIntent,
};

pub(crate) fn route(app: &mut App, event: RecentEvent) -> Task<AppEvent> {
    match event {
        RecentEvent::Intent(intent) => route_intent(app, intent),
        RecentEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a recent-files intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: RecentIntent,
) -> Task<AppEvent> {
    let ctx = RecentCtx {
        now_ms: unix_millis(),
    };
    app.widgets.recent.reduce(intent, &ctx).map(AppEvent::Recent)
}

fn route_effect(app: &mut App, effect: RecentEffect) -> Task<AppEvent> {
    match effect {
        RecentEffect::Navigate { path } => navigation::navigate(app, path),
    }
}
