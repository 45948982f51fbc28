use crate::shared::content::{Catalog, parse_ordinal};
use crate::shared::route::{
    EMAIL_PATH, EXPERIENCE_PATH, HOME_PATH, PROJECTS_PATH, Route, SKILLS_PATH,
};

pub(crate) const HOME_TAB_ID: &str = "home";
const UNTITLED_LABEL: &str = "untitled";
const PROJECT_FALLBACK_NAME: &str = "Project";

/// Display category of a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TabIcon {
    Home,
    Briefcase,
    Code,
    Folder,
    Mail,
    React,
    Blank,
}

/// An open "file" in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tab {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) path: String,
    pub(crate) icon: TabIcon,
}

impl Tab {
    fn fixed(id: &str, label: &str, path: &str, icon: TabIcon) -> Self {
        Self {
            id: String::from(id),
            label: String::from(label),
            path: String::from(path),
            icon,
        }
    }

    pub(crate) fn home() -> Self {
        Self::fixed(HOME_TAB_ID, "index.html", HOME_PATH, TabIcon::Home)
    }

    pub(crate) fn is_home(&self) -> bool {
        self.id == HOME_TAB_ID
    }
}

/// Derive the tab describing `route`.
pub(crate) fn tab_for_route(route: &Route, catalog: &Catalog) -> Tab {
    match route {
        Route::Home => Tab::home(),
        Route::Experience => Tab::fixed(
            "experience",
            "experience.css",
            EXPERIENCE_PATH,
            TabIcon::Briefcase,
        ),
        Route::Skills => {
            Tab::fixed("skills", "skills.js", SKILLS_PATH, TabIcon::Code)
        },
        Route::Projects => {
            Tab::fixed("projects", "projects.ts", PROJECTS_PATH, TabIcon::Folder)
        },
        Route::Email => {
            Tab::fixed("email", "Email.tsx", EMAIL_PATH, TabIcon::Mail)
        },
        Route::Project { segment } => Tab {
            id: format!("project-{segment}"),
            label: format!("{}.tsx", project_name(segment, catalog)),
            path: route.path(),
            icon: TabIcon::React,
        },
        Route::Unknown { path } => Tab {
            id: format!("untitled:{path}"),
            label: String::from(UNTITLED_LABEL),
            path: path.clone(),
            icon: TabIcon::Blank,
        },
    }
}

/// Resolve the display name of a project segment: catalog slug first,
/// then a legacy 1-based ordinal, then a title-cased segment.
pub(crate) fn project_name(segment: &str, catalog: &Catalog) -> String {
    if let Some(project) = catalog.project_by_segment(segment) {
        return project.short_name.clone();
    }

    if let Some(ordinal) = parse_ordinal(segment) {
        return catalog
            .project_by_ordinal(ordinal)
            .map(|project| project.short_name.clone())
            .unwrap_or_else(|| format!("{PROJECT_FALLBACK_NAME}-{segment}"));
    }

    let name = title_case(segment);
    if name.trim().is_empty() {
        String::from(PROJECT_FALLBACK_NAME)
    } else {
        name
    }
}

fn title_case(segment: &str) -> String {
    let mut name = String::with_capacity(segment.len());
    let mut at_word_start = true;

    for ch in segment.chars() {
        match ch {
            '[' | ']' | '{' | '}' | '(' | ')' => {},
            '-' | '_' | ' ' => {
                name.push(' ');
                at_word_start = true;
            },
            ch if at_word_start && ch.is_alphanumeric() => {
                name.extend(ch.to_uppercase());
                at_word_start = false;
            },
            ch => {
                name.push(ch);
                at_word_start = !ch.is_alphanumeric();
            },
        }
    }

    name.trim().to_string()
}

/// View model for the tab bar.
#[derive(Debug, Clone)]
pub(crate) struct TabsViewModel {
    pub(crate) tabs: Vec<Tab>,
    pub(crate) active_tab_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{TabIcon, project_name, tab_for_route};
    use crate::shared::content::{Catalog, parse_ordinal};
    use crate::shared::route::Route;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"projects": [
                {"slug": "kama-ayurveda", "short_name": "KamaAyurveda",
                 "title": "Kama Ayurveda E-Commerce Platform"},
                {"slug": "dozee-healthcare", "short_name": "DozeeHealthcare",
                 "title": "Dozee Healthcare Platform"}
            ]}"#,
        )
        .expect("test catalog should parse")
    }

    #[test]
    fn given_static_routes_when_mapped_then_fixed_tabs_are_returned() {
        let catalog = catalog();

        let skills = tab_for_route(&Route::Skills, &catalog);
        assert_eq!(skills.id, "skills");
        assert_eq!(skills.label, "skills.js");
        assert_eq!(skills.icon, TabIcon::Code);

        let email = tab_for_route(&Route::Email, &catalog);
        assert_eq!(email.label, "Email.tsx");
        assert_eq!(email.path, "/Email");
    }

    #[test]
    fn given_known_slug_when_mapped_then_short_name_label_is_used() {
        let tab = tab_for_route(&Route::parse("/Projects/kama-ayurveda"), &catalog());

        assert_eq!(tab.id, "project-kama-ayurveda");
        assert_eq!(tab.label, "KamaAyurveda.tsx");
        assert_eq!(tab.path, "/Projects/kama-ayurveda");
        assert_eq!(tab.icon, TabIcon::React);
    }

    #[test]
    fn given_numeric_segment_when_resolved_then_ordinal_is_one_based() {
        let catalog = catalog();

        assert_eq!(project_name("2", &catalog), "DozeeHealthcare");
        assert_eq!(project_name("9", &catalog), "Project-9");
        assert_eq!(project_name("0", &catalog), "Project-0");
    }

    #[test]
    fn given_signed_segment_when_resolved_then_it_is_not_an_ordinal() {
        let catalog = catalog();

        assert_eq!(project_name("+1", &catalog), "+1");
    }

    #[test]
    fn given_unmapped_segment_when_resolved_then_name_is_title_cased() {
        let catalog = catalog();

        assert_eq!(project_name("my-cool_app", &catalog), "My Cool App");
        assert_eq!(project_name("[beta]-site", &catalog), "Beta Site");
        assert_eq!(project_name("()", &catalog), "Project");
    }

    #[test]
    fn given_unknown_route_when_mapped_then_untitled_tab_keeps_path_identity() {
        let catalog = catalog();

        let first = tab_for_route(&Route::parse("/nowhere"), &catalog);
        let second = tab_for_route(&Route::parse("/elsewhere"), &catalog);

        assert_eq!(first.label, "untitled");
        assert_eq!(first.icon, TabIcon::Blank);
        assert_ne!(first.id, second.id);
    }
}
