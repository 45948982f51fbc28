use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::navigation;
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => route_intent(app, intent),
        SidebarEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a sidebar intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: SidebarIntent,
) -> Task<AppEvent> {
    let widgets = &mut app.widgets;
    let ctx = SidebarCtx {
        current_path: widgets.navigation.current_path(),
    };

    widgets.sidebar.reduce(intent, &ctx).map(AppEvent::Sidebar)
}

fn route_effect(app: &mut App, effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::Navigate { path } => navigation::navigate(app, path),
    }
}
