//! In-memory storage backend for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{StorageBackend, StorageError};

/// Shared-map backend; clones observe the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorageBackend {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let data = self
            .data
            .lock()
            .map_err(|e| StorageError::Io(format!("store poisoned: {e}")))?;
        Ok(data.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| StorageError::Io(format!("store poisoned: {e}")))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| StorageError::Io(format!("store poisoned: {e}")))?;
        data.remove(key);
        Ok(())
    }
}
