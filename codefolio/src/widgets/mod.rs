pub(crate) mod breakpoint;
pub(crate) mod contact;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod recent;
pub(crate) mod sidebar;
pub(crate) mod status_bar;
pub(crate) mod tabs;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) breakpoint: breakpoint::BreakpointWidget,
    pub(crate) navigation: navigation::NavigationWidget,
    pub(crate) tabs: tabs::TabsWidget,
    pub(crate) sidebar: sidebar::SidebarWidget,
    pub(crate) recent: recent::RecentWidget,
    pub(crate) contact: contact::ContactWidget,
    pub(crate) pages: pages::PagesWidget,
    pub(crate) status_bar: status_bar::StatusBarWidget,
}
