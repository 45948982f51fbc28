mod errors;
mod model;

pub(crate) use errors::CatalogError;
pub(crate) use model::{
    About, Catalog, ExperienceEntry, Profile, Project, SkillCategory,
    SkillLevel, parse_ordinal,
};

const CONTENT_JSON: &str = include_str!("../../../assets/content.json");

/// Parse the catalog shipped with the binary.
pub(crate) fn load_embedded() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CONTENT_JSON)
}
