use super::model::{
    HISTORY_KEY, HISTORY_LIMIT, RECENT_FILES_KEY, RECENT_FILES_LIMIT,
    RecentFileEntry, upsert,
};
use crate::storage::{StorageError, StoragePort, read_list, write_list};

/// Both logs plus the port they persist through.
pub(super) struct RecentState {
    storage: Box<dyn StoragePort>,
    recent_files: Vec<RecentFileEntry>,
    history: Vec<String>,
}

impl RecentState {
    pub(super) fn new(storage: Box<dyn StoragePort>) -> Self {
        Self {
            storage,
            recent_files: Vec::new(),
            history: Vec::new(),
        }
    }

    pub(super) fn recent_files(&self) -> &[RecentFileEntry] {
        &self.recent_files
    }

    pub(super) fn history(&self) -> &[String] {
        &self.history
    }

    pub(super) fn load(&mut self) {
        self.recent_files = read_list(self.storage.as_ref(), RECENT_FILES_KEY);
        self.history = read_list(self.storage.as_ref(), HISTORY_KEY);
    }

    /// Upsert into the recent-files log. The in-memory copy is updated
    /// even when the write fails.
    pub(super) fn record_recent(
        &mut self,
        entry: RecentFileEntry,
    ) -> Result<(), StorageError> {
        let list: Vec<RecentFileEntry> =
            read_list(self.storage.as_ref(), RECENT_FILES_KEY);
        self.recent_files =
            upsert(list, entry, RECENT_FILES_LIMIT, |item| item.path.as_str());
        write_list(self.storage.as_mut(), RECENT_FILES_KEY, &self.recent_files)
    }

    pub(super) fn record_history(
        &mut self,
        path: String,
    ) -> Result<(), StorageError> {
        let list: Vec<String> = read_list(self.storage.as_ref(), HISTORY_KEY);
        self.history = upsert(list, path, HISTORY_LIMIT, String::as_str);
        write_list(self.storage.as_mut(), HISTORY_KEY, &self.history)
    }
}
