use std::path::{Path, PathBuf};

use crate::storage::{JsonFileStore, MemoryStore, StoragePort};

const API_URL_VAR: &str = "CODEFOLIO_API_URL";
const DATA_DIR_VAR: &str = "CODEFOLIO_DATA_DIR";
const STORAGE_VAR: &str = "CODEFOLIO_STORAGE";

pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Backend used for the recent-files and history logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageKind {
    File,
    Memory,
}

/// Desktop settings resolved once at start-up.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) api_url: String,
    pub(crate) data_dir: PathBuf,
    pub(crate) storage: StorageKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            data_dir: default_data_dir(),
            storage: StorageKind::File,
        }
    }
}

impl AppConfig {
    /// Read settings from process environment variables.
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through a variable lookup. Invalid values are
    /// logged and replaced with defaults.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(API_URL_VAR)) {
            if value.starts_with("http://") || value.starts_with("https://") {
                config.api_url = value.trim_end_matches('/').to_string();
            } else {
                log::warn!(
                    "{API_URL_VAR}={value:?} is not an http(s) URL, using {DEFAULT_API_URL}"
                );
            }
        }

        if let Some(value) = non_blank(lookup(DATA_DIR_VAR)) {
            config.data_dir = PathBuf::from(value);
        }

        if let Some(value) = non_blank(lookup(STORAGE_VAR)) {
            match value.to_ascii_lowercase().as_str() {
                "file" => config.storage = StorageKind::File,
                "memory" => config.storage = StorageKind::Memory,
                _ => log::warn!(
                    "{STORAGE_VAR}={value:?} is not `file` or `memory`, using file storage"
                ),
            }
        }

        config
    }

    /// Build the storage backend selected by this configuration.
    pub(crate) fn open_storage(&self) -> Box<dyn StoragePort> {
        match self.storage {
            StorageKind::File => Box::new(JsonFileStore::new(&self.data_dir)),
            StorageKind::Memory => Box::new(MemoryStore::default()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn default_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("codefolio");
    }
    std::env::temp_dir().join("codefolio")
}
