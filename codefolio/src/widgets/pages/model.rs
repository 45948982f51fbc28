use crate::shared::content::{
    About, Catalog, ExperienceEntry, Profile, Project, SkillCategory,
    parse_ordinal,
};
use crate::shared::route::{
    EMAIL_PATH, EXPERIENCE_PATH, PROJECTS_PATH, Route, SKILLS_PATH,
};

pub(crate) const FALLBACK_TITLE: &str = "Oops! Something went wrong";
const MISSING_PROFILE: &str = "Profile content is unavailable.";
const MISSING_EXPERIENCE: &str = "Experience content is unavailable.";
const MISSING_SKILLS: &str = "Skills content is unavailable.";
const MISSING_PROJECTS: &str = "Project content is unavailable.";

/// Entry point card on the home page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuickLink {
    pub(crate) title: &'static str,
    pub(crate) path: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) const QUICK_LINKS: [QuickLink; 4] = [
    QuickLink {
        title: "Skills",
        path: SKILLS_PATH,
        description: "Explore my technical expertise and tools I master",
    },
    QuickLink {
        title: "Projects",
        path: PROJECTS_PATH,
        description: "Discover my portfolio of innovative solutions",
    },
    QuickLink {
        title: "Experience",
        path: EXPERIENCE_PATH,
        description: "Journey through my professional career path",
    },
    QuickLink {
        title: "Contact",
        path: EMAIL_PATH,
        description: "Let's connect and build something amazing",
    },
];

/// Content resolved for a route.
#[derive(Debug, Clone)]
pub(crate) enum Page<'a> {
    Home {
        profile: &'a Profile,
        about: &'a About,
    },
    Experience {
        entries: &'a [ExperienceEntry],
    },
    Skills {
        categories: &'a [SkillCategory],
    },
    Projects {
        projects: &'a [Project],
    },
    ProjectDetail {
        project: &'a Project,
        others: Vec<&'a Project>,
    },
    ProjectNotFound {
        segment: String,
    },
    Contact,
    NotFound {
        path: String,
    },
    /// Content required by the page is missing.
    Unavailable {
        reason: &'static str,
    },
}

/// Resolve the page for `route`. Never fails: missing content resolves to
/// [`Page::Unavailable`] and unknown slugs to [`Page::ProjectNotFound`].
pub(crate) fn resolve<'a>(route: &Route, catalog: &'a Catalog) -> Page<'a> {
    match route {
        Route::Home if catalog.profile.name.trim().is_empty() => {
            Page::Unavailable {
                reason: MISSING_PROFILE,
            }
        },
        Route::Home => Page::Home {
            profile: &catalog.profile,
            about: &catalog.about,
        },
        Route::Experience if catalog.experience.is_empty() => {
            Page::Unavailable {
                reason: MISSING_EXPERIENCE,
            }
        },
        Route::Experience => Page::Experience {
            entries: &catalog.experience,
        },
        Route::Skills if catalog.skills.is_empty() => Page::Unavailable {
            reason: MISSING_SKILLS,
        },
        Route::Skills => Page::Skills {
            categories: &catalog.skills,
        },
        Route::Projects | Route::Project { .. }
            if catalog.projects.is_empty() =>
        {
            Page::Unavailable {
                reason: MISSING_PROJECTS,
            }
        },
        Route::Projects => Page::Projects {
            projects: &catalog.projects,
        },
        Route::Project { segment } => match find_project(segment, catalog) {
            Some(project) => Page::ProjectDetail {
                project,
                others: catalog
                    .projects
                    .iter()
                    .filter(|other| other.slug != project.slug)
                    .collect(),
            },
            None => Page::ProjectNotFound {
                segment: segment.clone(),
            },
        },
        Route::Email => Page::Contact,
        Route::Unknown { path } => Page::NotFound { path: path.clone() },
    }
}

fn find_project<'a>(segment: &str, catalog: &'a Catalog) -> Option<&'a Project> {
    catalog.project_by_segment(segment).or_else(|| {
        parse_ordinal(segment)
            .and_then(|ordinal| catalog.project_by_ordinal(ordinal))
    })
}
