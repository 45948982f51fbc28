use iced::Task;
use iced::keyboard::{self, Key, Modifiers, key};

use crate::app::{App, AppEvent};
use crate::routers::{navigation, pages, sidebar};
use crate::widgets::navigation::NavigationIntent;
use crate::widgets::pages::PagesIntent;
use crate::widgets::sidebar::SidebarIntent;

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    Back,
    Forward,
    ToggleSidebar,
    Dismiss,
}

pub(crate) fn route(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    match shortcut(&event) {
        Some(Shortcut::Back) => {
            navigation::route_intent(app, NavigationIntent::Back)
        },
        Some(Shortcut::Forward) => {
            navigation::route_intent(app, NavigationIntent::Forward)
        },
        Some(Shortcut::ToggleSidebar) => {
            sidebar::route_intent(app, SidebarIntent::ToggleOpen)
        },
        Some(Shortcut::Dismiss) => {
            pages::route_intent(app, PagesIntent::CloseAbout)
        },
        None => Task::none(),
    }
}

/// Map a key press to a shortcut: `Alt+Left`, `Alt+Right`, `Ctrl+B` and
/// `Escape`.
pub(crate) fn shortcut(event: &keyboard::Event) -> Option<Shortcut> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return None;
    };

    match_key(key.as_ref(), *modifiers)
}

fn match_key(key: Key<&str>, modifiers: Modifiers) -> Option<Shortcut> {
    match key {
        Key::Named(key::Named::ArrowLeft) if modifiers.alt() => {
            Some(Shortcut::Back)
        },
        Key::Named(key::Named::ArrowRight) if modifiers.alt() => {
            Some(Shortcut::Forward)
        },
        Key::Character(c)
            if modifiers.command() && c.eq_ignore_ascii_case("b") =>
        {
            Some(Shortcut::ToggleSidebar)
        },
        Key::Named(key::Named::Escape) => Some(Shortcut::Dismiss),
        _ => None,
    }
}
