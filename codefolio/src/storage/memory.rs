use std::collections::HashMap;

use super::{StorageError, StoragePort};

/// Volatile store for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, String>,
}

impl StoragePort for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
