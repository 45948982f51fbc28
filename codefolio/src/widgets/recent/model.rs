use serde::{Deserialize, Serialize};

pub(crate) const RECENT_FILES_KEY: &str = "recentFiles";
pub(crate) const RECENT_FILES_LIMIT: usize = 10;
pub(crate) const HISTORY_KEY: &str = "history";
pub(crate) const HISTORY_LIMIT: usize = 4;

/// A visited "file" shown in the explorer footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RecentFileEntry {
    pub(crate) name: String,
    pub(crate) path: String,
    /// Unix time in milliseconds.
    pub(crate) timestamp: u64,
}

/// Remove any entry sharing `entry`'s path, prepend `entry` and truncate
/// to `limit`.
pub(crate) fn upsert<T, F>(
    mut list: Vec<T>,
    entry: T,
    limit: usize,
    path_of: F,
) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    list.retain(|existing| path_of(existing) != path_of(&entry));
    list.insert(0, entry);
    list.truncate(limit);
    list
}

/// Read-only snapshot of both logs.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecentViewModel {
    pub(crate) recent_files: Vec<RecentFileEntry>,
    pub(crate) history: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::upsert;

    fn identity(path: &String) -> &str {
        path.as_str()
    }

    #[test]
    fn given_existing_path_when_upserted_then_entry_moves_to_head() {
        let list = vec![
            String::from("/Skills"),
            String::from("/"),
            String::from("/Email"),
        ];

        let list = upsert(list, String::from("/"), 4, identity);

        assert_eq!(list, vec!["/", "/Skills", "/Email"]);
    }

    #[test]
    fn given_full_list_when_upserted_then_oldest_entry_is_dropped() {
        let list: Vec<String> =
            ["/a", "/b", "/c", "/d"].iter().map(|p| p.to_string()).collect();

        let list = upsert(list, String::from("/e"), 4, identity);

        assert_eq!(list, vec!["/e", "/a", "/b", "/c"]);
    }

    #[test]
    fn given_duplicate_at_tail_of_full_list_when_upserted_then_no_other_entry_is_lost()
     {
        let list: Vec<String> =
            ["/a", "/b", "/c", "/d"].iter().map(|p| p.to_string()).collect();

        let list = upsert(list, String::from("/d"), 4, identity);

        assert_eq!(list, vec!["/d", "/a", "/b", "/c"]);
    }
}
