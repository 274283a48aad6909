//! Insertion history log
//!
//! Bounded, most-recent-first log of past insertions, persisted under the
//! `jsonMapperHistory` key and independent of worksheet state. The bound
//! is FIFO: the oldest entry is evicted regardless of access.

use tracing::debug;
use uuid::Uuid;

use crate::models::HistoryEntry;
use crate::storage::{keys, StorageBackend, StorageError};
use crate::store::StoreError;

/// Maximum number of retained history entries.
pub const HISTORY_LIMIT: usize = 20;

/// Storage-backed insertion log.
pub struct HistoryLog<B: StorageBackend> {
    backend: B,
    entries: Vec<HistoryEntry>,
}

impl<B: StorageBackend> HistoryLog<B> {
    /// Load the log from storage; absent storage yields an empty log.
    pub fn load(backend: B) -> Result<Self, StoreError> {
        let entries = match backend.read(keys::HISTORY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(format!("history: {e}")))?,
            None => Vec::new(),
        };
        Ok(Self { backend, entries })
    }

    /// Prepend an entry, truncate to [`HISTORY_LIMIT`], and persist.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist()?;
        debug!(entries = self.entries.len(), "appended history entry");
        Ok(())
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry by id.
    pub fn find(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the log and remove its persisted state.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.backend.remove(keys::HISTORY)?;
        debug!("cleared history");
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries)
            .map_err(|e| StorageError::Serialization(format!("history: {e}")))?;
        self.backend.write(keys::HISTORY, &raw)
    }
}
