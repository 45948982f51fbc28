use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StorageError, StoragePort};

/// Store keeping one `<key>.json` document per key in a directory.
#[derive(Debug, Clone)]
pub(crate) struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StoragePort for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        write_atomic(&path, payload.as_bytes())?;
        Ok(())
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, data)?;
    fs::rename(tmp_path, path)
}
