#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::config::AppConfig;
use crate::shared::content::load_embedded;
use crate::shared::ui::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::breakpoint::{BreakpointEvent, BreakpointWidget};
use crate::widgets::contact::{ContactClient, ContactEvent, ContactWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::pages::{PagesEvent, PagesWidget};
use crate::widgets::recent::{RecentEvent, RecentWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::status_bar::{StatusBarEvent, StatusBarWidget};
use crate::widgets::tabs::{TabsEvent, TabsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
const APP_TITLE: &str = "Codefolio";

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    Breakpoint(BreakpointEvent),
    Navigation(NavigationEvent),
    Tabs(TabsEvent),
    Sidebar(SidebarEvent),
    Recent(RecentEvent),
    Contact(ContactEvent),
    Pages(PagesEvent),
    StatusBar(StatusBarEvent),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) contact_client: ContactClient,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = AppConfig::from_env();
        let contact_client = ContactClient::new(&config.api_url);
        log::info!(
            "contact form posts to {}; {:?} storage in {}",
            contact_client.endpoint(),
            config.storage,
            config.data_dir.display()
        );

        let widgets = Widgets {
            breakpoint: BreakpointWidget::new(),
            navigation: NavigationWidget::new(),
            tabs: TabsWidget::new(),
            sidebar: SidebarWidget::new(),
            recent: RecentWidget::new(config.open_storage()),
            contact: ContactWidget::new(),
            pages: PagesWidget::new(load_embedded),
            status_bar: StatusBarWidget::new(),
        };

        let app = App {
            theme_manager: ThemeManager::new(),
            contact_client,
            widgets,
        };

        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Window title follows the active tab.
    pub(crate) fn title(&self) -> String {
        let path = self.widgets.navigation.current_path();
        match self.widgets.tabs.label_for_path(path) {
            Some(label) => format!("{label} - {APP_TITLE}"),
            None => String::from(APP_TITLE),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
