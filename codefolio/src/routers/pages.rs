use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::{flow, navigation};
use crate::widgets::pages::{PagesEffect, PagesEvent, PagesIntent};

pub(crate) fn route(app: &mut App, event: PagesEvent) -> Task<AppEvent> {
    match event {
        PagesEvent::Intent(intent) => route_intent(app, intent),
        PagesEvent::Effect(effect) => route_effect(app, effect),
    }
}

pub(crate) fn route_intent(app: &mut App, intent: PagesIntent) -> Task<AppEvent> {
    app.widgets.pages.reduce(intent).map(AppEvent::Pages)
}

fn route_effect(app: &mut App, effect: PagesEffect) -> Task<AppEvent> {
    match effect {
        PagesEffect::Navigate { path } => navigation::navigate(app, path),
        PagesEffect::Back => flow::navigation::go_back_or_home(app),
        PagesEffect::Reloaded => flow::pages::catalog_reloaded(app),
    }
}
