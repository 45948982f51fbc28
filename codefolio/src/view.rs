use iced::widget::{Column, Space, Stack, column, container, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::shared::route::Route;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::breakpoint::DeviceClass;
use crate::widgets::contact::view::contact_form;
use crate::widgets::navigation::view::toolbar;
use crate::widgets::pages::model::resolve;
use crate::widgets::pages::view::{self as pages_view, about_modal, fallback};
use crate::widgets::recent::view::recent_list;
use crate::widgets::sidebar::model::{ACTIVITY_BAR_WIDTH, SidebarViewModel};
use crate::widgets::sidebar::view::{activity_bar, explorer, overlay};
use crate::widgets::status_bar::view::status_bar;
use crate::widgets::tabs::view::tab_bar;

const SEPARATOR_WIDTH: f32 = 1.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());

    // A broken catalog replaces the whole shell.
    if let Some(fault) = app.widgets.pages.fault() {
        return fallback::view(fault, theme_props).map(AppEvent::Pages);
    }

    let current_path = app.widgets.navigation.current_path();
    let sidebar_vm = app.widgets.sidebar.vm();

    let activity = activity_bar::view(activity_bar::ActivityBarProps {
        current_path,
        explorer_open: sidebar_vm.shows_inline_explorer()
            || sidebar_vm.shows_drawer(),
        theme: theme_props,
    })
    .map(AppEvent::Sidebar);

    let mut body = row![activity].height(Length::Fill);
    if sidebar_vm.shows_inline_explorer() {
        body = body
            .push(view_explorer_panel(app, sidebar_vm, theme_props))
            .push(view_separator(theme_props));
    }
    body = body.push(view_editor(app, theme_props));

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![body.into()];
    if sidebar_vm.shows_drawer() {
        layers.push(view_drawer(app, sidebar_vm, theme_props));
    }
    let on_home = *app.widgets.navigation.current() == Route::Home;
    if on_home && app.widgets.pages.about_open() {
        let catalog = app.widgets.pages.catalog();
        layers.push(
            about_modal::view(about_modal::AboutModalProps {
                profile: &catalog.profile,
                about: &catalog.about,
                theme: theme_props,
            })
            .map(AppEvent::Pages),
        );
    }

    let status = status_bar::view(status_bar::StatusBarProps {
        vm: app.widgets.status_bar.vm(),
        viewport: app.widgets.breakpoint.vm(),
        active_label: app.widgets.tabs.label_for_path(current_path),
        theme: theme_props,
    })
    .map(AppEvent::StatusBar);

    column![
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
        status,
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Explorer tree with the recent-files footer.
fn view_explorer_panel<'a>(
    app: &'a App,
    sidebar_vm: SidebarViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let current_path = app.widgets.navigation.current_path();

    let tree = explorer::view(explorer::ExplorerProps {
        vm: sidebar_vm,
        catalog: app.widgets.pages.catalog(),
        current_path,
        theme: theme_props,
    })
    .map(AppEvent::Sidebar);

    let recent = recent_list::view(recent_list::RecentListProps {
        vm: app.widgets.recent.vm(),
        current_path,
        theme: theme_props,
    })
    .map(AppEvent::Recent);

    Column::new()
        .push(tree)
        .push(recent)
        .width(Length::Fixed(sidebar_vm.explorer_width()))
        .height(Length::Fill)
        .into()
}

/// Mobile drawer over the content, with a backdrop that closes it.
fn view_drawer<'a>(
    app: &'a App,
    sidebar_vm: SidebarViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    row![
        Space::new().width(Length::Fixed(ACTIVITY_BAR_WIDTH)),
        view_explorer_panel(app, sidebar_vm, theme_props),
        overlay::view().map(AppEvent::Sidebar),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Toolbar, tab bar and routed page content.
fn view_editor<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.palette();
    let compact = app.widgets.breakpoint.device() == DeviceClass::Mobile;

    let toolbar = toolbar::view(toolbar::ToolbarProps {
        vm: app.widgets.navigation.vm(),
        theme: theme_props,
    })
    .map(AppEvent::Navigation);

    let tabs = tab_bar::view(tab_bar::TabBarProps {
        vm: app
            .widgets
            .tabs
            .vm(app.widgets.navigation.current_path()),
        compact,
        theme: theme_props,
    })
    .map(AppEvent::Tabs);

    let header = container(row![toolbar, tabs].height(Length::Shrink))
        .width(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        });

    column![header, view_page(app, theme_props)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.palette();
    let route = app.widgets.navigation.current();
    let catalog = app.widgets.pages.catalog();

    let content = if route.is_email() {
        contact_form::view(contact_form::ContactFormProps {
            vm: app.widgets.contact.vm(),
            mailbox: catalog.profile.email.as_str(),
            theme: theme_props,
        })
        .map(AppEvent::Contact)
    } else {
        pages_view::view(pages_view::PageProps {
            page: resolve(route, catalog),
            history: app.widgets.recent.history(),
            theme: theme_props,
        })
        .map(AppEvent::Pages)
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.background.into()),
            ..Default::default()
        })
        .into()
}

fn view_separator<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.palette();
    container(Space::new())
        .width(Length::Fixed(SEPARATOR_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            ..Default::default()
        })
        .into()
}
