use super::model::ExplorerSection;
use crate::widgets::breakpoint::DeviceClass;

/// Sidebar visibility plus explorer section expansion.
#[derive(Debug)]
pub(super) struct SidebarState {
    open: bool,
    collapsed: bool,
    device: DeviceClass,
    portfolio_expanded: bool,
    projects_expanded: bool,
    contact_expanded: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            open: true,
            collapsed: false,
            device: DeviceClass::Desktop,
            portfolio_expanded: true,
            projects_expanded: true,
            contact_expanded: false,
        }
    }
}

impl SidebarState {
    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub(super) fn device(&self) -> DeviceClass {
        self.device
    }

    pub(super) fn is_expanded(&self, section: ExplorerSection) -> bool {
        match section {
            ExplorerSection::Portfolio => self.portfolio_expanded,
            ExplorerSection::Projects => self.projects_expanded,
            ExplorerSection::Contact => self.contact_expanded,
        }
    }

    pub(super) fn shows_overlay(&self) -> bool {
        self.device == DeviceClass::Mobile && self.open
    }

    /// Force the layout belonging to `device`.
    pub(super) fn apply_device_class(&mut self, device: DeviceClass) {
        self.device = device;
        match device {
            DeviceClass::Desktop => {
                self.open = true;
                self.collapsed = false;
            },
            DeviceClass::Tablet => {
                self.open = false;
                self.collapsed = false;
            },
            DeviceClass::Mobile => {
                self.collapsed = true;
            },
        }
    }

    pub(super) fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub(super) fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub(super) fn close(&mut self) {
        self.open = false;
    }

    /// Close the mobile drawer once navigation lands. Returns whether the
    /// sidebar was closed.
    pub(super) fn close_for_route(&mut self) -> bool {
        if self.shows_overlay() {
            self.open = false;
            return true;
        }
        false
    }

    pub(super) fn toggle_section(&mut self, section: ExplorerSection) {
        let flag = match section {
            ExplorerSection::Portfolio => &mut self.portfolio_expanded,
            ExplorerSection::Projects => &mut self.projects_expanded,
            ExplorerSection::Contact => &mut self.contact_expanded,
        };
        *flag = !*flag;
    }
}
