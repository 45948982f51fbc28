/// Pages reachable through the navigation shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) enum Route {
    #[default]
    Home,
    Experience,
    Skills,
    Projects,
    Project { segment: String },
    Email,
    Unknown { path: String },
}

pub(crate) const HOME_PATH: &str = "/";
pub(crate) const EXPERIENCE_PATH: &str = "/Experience";
pub(crate) const SKILLS_PATH: &str = "/Skills";
pub(crate) const PROJECTS_PATH: &str = "/Projects";
pub(crate) const EMAIL_PATH: &str = "/Email";

impl Route {
    /// Parse a location string into a route.
    ///
    /// Query and fragment parts are ignored and trailing slashes are
    /// trimmed. Matching is case-sensitive.
    pub(crate) fn parse(location: &str) -> Self {
        let path = normalize(location);

        match path.as_str() {
            HOME_PATH => Route::Home,
            EXPERIENCE_PATH => Route::Experience,
            SKILLS_PATH => Route::Skills,
            PROJECTS_PATH => Route::Projects,
            EMAIL_PATH => Route::Email,
            _ => match path.strip_prefix("/Projects/") {
                Some(segment) if !segment.is_empty() && !segment.contains('/') => {
                    Route::Project {
                        segment: segment.to_string(),
                    }
                },
                _ => Route::Unknown { path },
            },
        }
    }

    /// Return the canonical path for this route.
    pub(crate) fn path(&self) -> String {
        match self {
            Route::Home => String::from(HOME_PATH),
            Route::Experience => String::from(EXPERIENCE_PATH),
            Route::Skills => String::from(SKILLS_PATH),
            Route::Projects => String::from(PROJECTS_PATH),
            Route::Project { segment } => format!("{PROJECTS_PATH}/{segment}"),
            Route::Email => String::from(EMAIL_PATH),
            Route::Unknown { path } => path.clone(),
        }
    }

    pub(crate) fn is_email(&self) -> bool {
        matches!(self, Route::Email)
    }
}

fn normalize(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim();

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        String::from(HOME_PATH)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn given_known_paths_when_parsed_then_static_routes_are_returned() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/Experience"), Route::Experience);
        assert_eq!(Route::parse("/Skills"), Route::Skills);
        assert_eq!(Route::parse("/Projects"), Route::Projects);
        assert_eq!(Route::parse("/Email"), Route::Email);
    }

    #[test]
    fn given_project_segment_when_parsed_then_project_route_keeps_segment() {
        assert_eq!(
            Route::parse("/Projects/kama-ayurveda"),
            Route::Project {
                segment: String::from("kama-ayurveda"),
            }
        );
    }

    #[test]
    fn given_query_fragment_and_trailing_slash_when_parsed_then_they_are_ignored()
     {
        assert_eq!(Route::parse("/Skills/?tab=all#top"), Route::Skills);
        assert_eq!(Route::parse("/Projects/"), Route::Projects);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn given_wrong_case_or_nested_path_when_parsed_then_route_is_unknown() {
        assert_eq!(
            Route::parse("/skills"),
            Route::Unknown {
                path: String::from("/skills"),
            }
        );
        assert_eq!(
            Route::parse("/Projects/a/b"),
            Route::Unknown {
                path: String::from("/Projects/a/b"),
            }
        );
    }

    #[test]
    fn given_route_when_rendered_then_path_parses_back_to_same_route() {
        let route = Route::parse("/Projects/3");
        assert_eq!(route.path(), "/Projects/3");
        assert_eq!(Route::parse(&route.path()), route);
    }
}
