use crate::shared::content::{Catalog, CatalogError};

/// Source of the catalog document.
pub(crate) type CatalogLoader = fn() -> Result<Catalog, CatalogError>;

/// Loaded catalog and the app-level fault, if any.
pub(super) struct PagesState {
    catalog: Catalog,
    fault: Option<String>,
    loader: CatalogLoader,
    about_open: bool,
}

impl PagesState {
    pub(super) fn new(loader: CatalogLoader) -> Self {
        let mut state = Self {
            catalog: Catalog::default(),
            fault: None,
            loader,
            about_open: false,
        };
        state.reload();
        state
    }

    pub(super) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(super) fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Re-run the loader. On failure the previous catalog is kept and the
    /// fault is recorded.
    pub(super) fn reload(&mut self) -> bool {
        match (self.loader)() {
            Ok(catalog) => {
                log::info!(
                    "catalog loaded: {} projects, {} roles",
                    catalog.projects.len(),
                    catalog.experience.len()
                );
                self.catalog = catalog;
                self.fault = None;
                true
            },
            Err(err) => {
                log::warn!("catalog failed to load: {err}");
                self.fault = Some(err.to_string());
                false
            },
        }
    }

    pub(super) fn clear_fault(&mut self) {
        self.fault = None;
    }

    pub(super) fn about_open(&self) -> bool {
        self.about_open
    }

    /// Returns `true` when the modal was closed before.
    pub(super) fn open_about(&mut self) -> bool {
        !std::mem::replace(&mut self.about_open, true)
    }

    /// Returns `true` when the modal was open before.
    pub(super) fn close_about(&mut self) -> bool {
        std::mem::replace(&mut self.about_open, false)
    }
}
