use iced::Task;
use iced::widget::operation::snap_to_end;

use crate::app::{App, AppEvent};
use crate::routers::{flow, navigation};
use crate::widgets::tabs::view::tab_bar::TAB_BAR_SCROLL_ID;
use crate::widgets::tabs::{TabsCtx, TabsEffect, TabsEvent, TabsIntent};

pub(crate) fn route(app: &mut App, event: TabsEvent) -> Task<AppEvent> {
    match event {
        TabsEvent::Intent(intent) => route_intent(app, intent),
        TabsEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a tabs intent through the widget reducer with the current route
/// as context.
pub(crate) fn route_intent(app: &mut App, intent: TabsIntent) -> Task<AppEvent> {
    let widgets = &mut app.widgets;
    let ctx = TabsCtx {
        catalog: widgets.pages.catalog(),
        current_path: widgets.navigation.current_path(),
    };

    widgets.tabs.reduce(intent, &ctx).map(AppEvent::Tabs)
}

fn route_effect(app: &mut App, effect: TabsEffect) -> Task<AppEvent> {
    match effect {
        TabsEffect::Added { .. } => snap_to_end(TAB_BAR_SCROLL_ID),
        TabsEffect::NavigateRequested { path } => navigation::navigate(app, path),
        TabsEffect::RedirectRequested { tab_id, path } => {
            flow::tabs::close_active(app, tab_id, path)
        },
    }
}
