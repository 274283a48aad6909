//! Filesystem storage backend
//!
//! Stores each logical key as `{key}.json` under a root directory. Writes
//! go to a temporary file first and are renamed into place, so a key is
//! never observed half-written.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::storage::{StorageBackend, StorageError};

/// File-per-key backend rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStorageBackend {
    root: PathBuf,
}

impl FileStorageBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("failed to read '{key}': {e}"))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("failed to create store root: {e}")))?;
        let path = self.key_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)
            .map_err(|e| StorageError::Io(format!("failed to write '{key}': {e}")))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("failed to commit '{key}': {e}")))?;
        debug!(key, bytes = value.len(), "persisted storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("failed to remove '{key}': {e}"))),
        }
    }
}
