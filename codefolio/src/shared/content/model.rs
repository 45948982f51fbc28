use std::collections::HashSet;

use serde::Deserialize;

use super::errors::CatalogError;

/// Static portfolio content rendered by the pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Catalog {
    #[serde(default)]
    pub(crate) profile: Profile,
    #[serde(default)]
    pub(crate) about: About,
    #[serde(default)]
    pub(crate) projects: Vec<Project>,
    #[serde(default)]
    pub(crate) experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub(crate) skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Profile {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) role: String,
    #[serde(default)]
    pub(crate) tagline: String,
    #[serde(default)]
    pub(crate) summary: String,
    #[serde(default)]
    pub(crate) location: String,
    #[serde(default)]
    pub(crate) email: String,
}

/// Extended profile shown by the About Me modal.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct About {
    #[serde(default)]
    pub(crate) experience: String,
    #[serde(default)]
    pub(crate) phone: String,
    #[serde(default)]
    pub(crate) linkedin: String,
    #[serde(default)]
    pub(crate) github: String,
    /// Fields of the `about-me.js` card, values as source literals.
    #[serde(default)]
    pub(crate) snippet: Vec<SnippetField>,
    #[serde(default)]
    pub(crate) expertise: Vec<ExpertiseGroup>,
    #[serde(default)]
    pub(crate) achievements: Vec<String>,
    #[serde(default)]
    pub(crate) interests: Vec<Interest>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SnippetField {
    pub(crate) key: String,
    pub(crate) value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExpertiseGroup {
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Interest {
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) description: String,
}

/// Project case study addressed by `/Projects/<slug>`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Project {
    pub(crate) slug: String,
    pub(crate) short_name: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) link: Option<String>,
    #[serde(default)]
    pub(crate) skills: Vec<String>,
    #[serde(default)]
    pub(crate) features: Vec<String>,
}

impl Project {
    /// Return whether a URL segment addresses this project, either by its
    /// slug or by its slugified title.
    pub(crate) fn matches_segment(&self, segment: &str) -> bool {
        segment.eq_ignore_ascii_case(&self.slug)
            || segment.eq_ignore_ascii_case(&slugify(&self.title))
    }

    /// Canonical route path of the detail page.
    pub(crate) fn path(&self) -> String {
        format!("/Projects/{}", self.slug)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExperienceEntry {
    pub(crate) company: String,
    #[serde(default)]
    pub(crate) location: String,
    pub(crate) position: String,
    #[serde(default)]
    pub(crate) duration: String,
    #[serde(default)]
    pub(crate) achievements: Vec<String>,
    #[serde(default)]
    pub(crate) technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SkillCategory {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Skill {
    pub(crate) name: String,
    pub(crate) level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillLevel {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Beginner => "Beginner",
        }
    }

    /// Fill ratio used by the level meter.
    pub(crate) fn ratio(self) -> f32 {
        match self {
            SkillLevel::Expert => 1.0,
            SkillLevel::Advanced => 0.75,
            SkillLevel::Intermediate => 0.5,
            SkillLevel::Beginner => 0.25,
        }
    }
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub(crate) fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.slug.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: project.slug.clone(),
                });
            }
        }
        Ok(())
    }

    /// Find the project addressed by a URL segment.
    pub(crate) fn project_by_segment(&self, segment: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.matches_segment(segment))
    }

    /// Resolve a legacy 1-based ordinal into a project.
    pub(crate) fn project_by_ordinal(&self, ordinal: usize) -> Option<&Project> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.projects.get(index))
    }
}

/// Parse a legacy ordinal segment. Only plain ASCII digits qualify, so
/// signed or padded forms stay slugs.
pub(crate) fn parse_ordinal(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit())
    {
        return None;
    }
    segment.parse().ok()
}

/// Lower-case `value` and collapse runs of non-alphanumerics into `-`.
pub(crate) fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::{Catalog, SkillLevel, parse_ordinal, slugify};
    use crate::shared::content::CatalogError;

    const SAMPLE: &str = r#"{
        "projects": [
            {"slug": "kama-ayurveda", "short_name": "KamaAyurveda",
             "title": "Kama Ayurveda E-Commerce Platform"},
            {"slug": "dozee", "short_name": "Dozee", "title": "Dozee"}
        ],
        "skills": [
            {"title": "Frontend", "skills": [{"name": "Rust", "level": "Advanced"}]}
        ]
    }"#;

    #[test]
    fn given_title_with_punctuation_when_slugified_then_runs_collapse_to_dash() {
        assert_eq!(
            slugify("Kama Ayurveda E-Commerce Platform"),
            "kama-ayurveda-e-commerce-platform"
        );
        assert_eq!(slugify("  HDFC (BaaS)  "), "hdfc-baas");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn given_slug_or_title_segment_when_looked_up_then_project_is_found() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample should parse");

        let by_slug = catalog
            .project_by_segment("Kama-Ayurveda")
            .expect("slug lookup should be case-insensitive");
        assert_eq!(by_slug.short_name, "KamaAyurveda");

        let by_title = catalog
            .project_by_segment("kama-ayurveda-e-commerce-platform")
            .expect("title slug lookup should match");
        assert_eq!(by_title.slug, "kama-ayurveda");

        assert!(catalog.project_by_segment("unknown").is_none());
    }

    #[test]
    fn given_ordinal_when_looked_up_then_index_is_one_based() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample should parse");

        assert!(catalog.project_by_ordinal(0).is_none());
        assert_eq!(
            catalog
                .project_by_ordinal(2)
                .map(|project| project.short_name.as_str()),
            Some("Dozee")
        );
        assert!(catalog.project_by_ordinal(3).is_none());
    }

    #[test]
    fn given_skill_levels_when_parsed_then_levels_map_to_ratios() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample should parse");
        let level = catalog.skills[0].skills[0].level;

        assert_eq!(level, SkillLevel::Advanced);
        assert_eq!(level.label(), "Advanced");
        assert!(level.ratio() > SkillLevel::Intermediate.ratio());
    }

    #[test]
    fn given_duplicate_slug_when_parsed_then_catalog_is_rejected() {
        let raw = r#"{"projects": [
            {"slug": "a", "short_name": "A", "title": "A"},
            {"slug": "A", "short_name": "B", "title": "B"}
        ]}"#;

        let err = Catalog::from_json(raw).expect_err("duplicate must fail");
        assert!(matches!(err, CatalogError::DuplicateSlug { .. }));
    }

    #[test]
    fn given_malformed_document_when_parsed_then_json_error_is_returned() {
        let err = Catalog::from_json("{ nope").expect_err("must fail");
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn given_digit_segments_when_parsed_then_only_plain_digits_are_ordinals() {
        assert_eq!(parse_ordinal("1"), Some(1));
        assert_eq!(parse_ordinal("01"), Some(1));
        assert_eq!(parse_ordinal("+1"), None);
        assert_eq!(parse_ordinal("-1"), None);
        assert_eq!(parse_ordinal(" 1"), None);
        assert_eq!(parse_ordinal(""), None);
    }
}
