use thiserror::Error;

/// Errors raised while loading the embedded content catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("content catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("project slug `{slug}` is declared more than once")]
    DuplicateSlug { slug: String },
    #[error("project `{title}` has an empty slug")]
    EmptySlug { title: String },
}
