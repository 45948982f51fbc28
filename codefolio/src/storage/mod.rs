mod errors;
mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub(crate) use errors::StorageError;
pub(crate) use file::JsonFileStore;
pub(crate) use memory::MemoryStore;

/// Key-value persistence for raw JSON documents.
pub(crate) trait StoragePort {
    /// Load the payload stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`.
    fn store(&mut self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// Read a JSON list, falling back to an empty list when the key is absent,
/// unreadable or malformed.
pub(crate) fn read_list<T: DeserializeOwned>(
    storage: &dyn StoragePort,
    key: &str,
) -> Vec<T> {
    let payload = match storage.load(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("failed to read `{key}`, starting empty: {err}");
            return Vec::new();
        },
    };

    match serde_json::from_str(&payload) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("stored `{key}` is malformed, starting empty: {err}");
            Vec::new()
        },
    }
}

/// Serialize and write a JSON list.
pub(crate) fn write_list<T: Serialize>(
    storage: &mut dyn StoragePort,
    key: &str,
    list: &[T],
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(list)?;
    storage.store(key, &payload)
}
