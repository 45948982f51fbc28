use super::model::ExplorerSection;
use crate::widgets::breakpoint::DeviceClass;

/// Intent events handled by the sidebar controller.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    ToggleOpen,
    ToggleCollapsed,
    OverlayPressed,
    DeviceClassChanged(DeviceClass),
    RouteSettled,
    ToggleSection(ExplorerSection),
    /// Activity bar item or explorer file pressed.
    Select { path: String },
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    Navigate { path: String },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    Intent(SidebarIntent),
    Effect(SidebarEffect),
}
