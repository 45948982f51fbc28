use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx<'a> {
    pub(crate) current_path: &'a str,
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::ToggleOpen => {
            state.toggle_open();
            Task::none()
        },
        SidebarIntent::ToggleCollapsed => {
            state.toggle_collapsed();
            Task::none()
        },
        SidebarIntent::OverlayPressed => {
            state.close();
            Task::none()
        },
        SidebarIntent::DeviceClassChanged(device) => {
            state.apply_device_class(device);
            log::debug!(
                "sidebar re-evaluated for {}: open={} collapsed={}",
                device.label(),
                state.is_open(),
                state.is_collapsed()
            );
            Task::none()
        },
        SidebarIntent::RouteSettled => {
            if state.close_for_route() {
                log::debug!("mobile sidebar closed after navigation");
            }
            Task::none()
        },
        SidebarIntent::ToggleSection(section) => {
            state.toggle_section(section);
            Task::none()
        },
        SidebarIntent::Select { path } => {
            if path == ctx.current_path {
                Task::none()
            } else {
                Task::done(SidebarEvent::Effect(SidebarEffect::Navigate {
                    path,
                }))
            }
        },
    }
}
