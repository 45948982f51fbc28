use crate::shared::content::Catalog;
use crate::shared::route::{
    EMAIL_PATH, EXPERIENCE_PATH, HOME_PATH, PROJECTS_PATH, SKILLS_PATH,
};
use crate::widgets::breakpoint::DeviceClass;

pub(crate) const ACTIVITY_BAR_WIDTH: f32 = 48.0;
pub(crate) const EXPLORER_WIDTH_DESKTOP: f32 = 256.0;
pub(crate) const EXPLORER_WIDTH_TABLET: f32 = 224.0;
pub(crate) const EXPLORER_WIDTH_MOBILE: f32 = 280.0;

/// Entries of the activity bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivityItem {
    Home,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl ActivityItem {
    pub(crate) const ALL: [ActivityItem; 5] = [
        ActivityItem::Home,
        ActivityItem::Skills,
        ActivityItem::Projects,
        ActivityItem::Experience,
        ActivityItem::Contact,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            ActivityItem::Home => "Portfolio Home",
            ActivityItem::Skills => "Technical Skills",
            ActivityItem::Projects => "My Projects",
            ActivityItem::Experience => "Work Experience",
            ActivityItem::Contact => "Contact Me",
        }
    }

    pub(crate) fn path(self) -> &'static str {
        match self {
            ActivityItem::Home => HOME_PATH,
            ActivityItem::Skills => SKILLS_PATH,
            ActivityItem::Projects => PROJECTS_PATH,
            ActivityItem::Experience => EXPERIENCE_PATH,
            ActivityItem::Contact => EMAIL_PATH,
        }
    }

    /// Whether the item is highlighted for `current_path`.
    pub(crate) fn is_active(self, current_path: &str) -> bool {
        match self {
            ActivityItem::Projects => {
                current_path == PROJECTS_PATH
                    || current_path.starts_with("/Projects/")
            },
            item => current_path == item.path(),
        }
    }
}

/// Collapsible groups of the explorer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExplorerSection {
    Portfolio,
    Projects,
    Contact,
}

impl ExplorerSection {
    pub(crate) const ALL: [ExplorerSection; 3] = [
        ExplorerSection::Portfolio,
        ExplorerSection::Projects,
        ExplorerSection::Contact,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            ExplorerSection::Portfolio => "PORTFOLIO",
            ExplorerSection::Projects => "PROJECTS",
            ExplorerSection::Contact => "CONTACT",
        }
    }
}

/// A file row of the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExplorerFile {
    pub(crate) label: String,
    pub(crate) path: String,
}

impl ExplorerFile {
    fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Extension used to pick the row icon tint.
    pub(crate) fn extension(&self) -> &str {
        self.label.rsplit_once('.').map_or("", |(_, ext)| ext)
    }
}

/// Files listed under `section`.
pub(crate) fn explorer_files(
    section: ExplorerSection,
    catalog: &Catalog,
) -> Vec<ExplorerFile> {
    match section {
        ExplorerSection::Portfolio => vec![
            ExplorerFile::new("index.html", HOME_PATH),
            ExplorerFile::new("experience.css", EXPERIENCE_PATH),
            ExplorerFile::new("skills.js", SKILLS_PATH),
            ExplorerFile::new("projects.ts", PROJECTS_PATH),
        ],
        ExplorerSection::Projects => catalog
            .projects
            .iter()
            .map(|project| {
                ExplorerFile::new(
                    format!("{}.tsx", project.short_name),
                    project.path(),
                )
            })
            .collect(),
        ExplorerSection::Contact => {
            vec![ExplorerFile::new("Email.tsx", EMAIL_PATH)]
        },
    }
}

/// Read-only snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarViewModel {
    pub(crate) open: bool,
    pub(crate) collapsed: bool,
    pub(crate) device: DeviceClass,
    pub(crate) show_overlay: bool,
    pub(crate) portfolio_expanded: bool,
    pub(crate) projects_expanded: bool,
    pub(crate) contact_expanded: bool,
}

impl SidebarViewModel {
    pub(crate) fn is_expanded(&self, section: ExplorerSection) -> bool {
        match section {
            ExplorerSection::Portfolio => self.portfolio_expanded,
            ExplorerSection::Projects => self.projects_expanded,
            ExplorerSection::Contact => self.contact_expanded,
        }
    }

    /// Explorer drawn inline next to the activity bar.
    pub(crate) fn shows_inline_explorer(&self) -> bool {
        self.device != DeviceClass::Mobile && self.open && !self.collapsed
    }

    /// Explorer drawn as a drawer above the page content.
    pub(crate) fn shows_drawer(&self) -> bool {
        self.device == DeviceClass::Mobile && self.open
    }

    pub(crate) fn explorer_width(&self) -> f32 {
        match self.device {
            DeviceClass::Desktop => EXPLORER_WIDTH_DESKTOP,
            DeviceClass::Tablet => EXPLORER_WIDTH_TABLET,
            DeviceClass::Mobile => EXPLORER_WIDTH_MOBILE,
        }
    }
}
