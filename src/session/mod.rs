//! Session restore
//!
//! Snapshots transient form state (raw JSON input, chosen identifier,
//! match policy) under the `jsonMapperData` key so an interrupted session
//! can be restored. Snapshots older than 24 hours are ignored. Saving is
//! idempotent and touches no other persistence key, so the periodic
//! auto-save and the teardown save can fire in any order relative to
//! store mutations.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::MatchPolicy;
use crate::storage::{keys, StorageBackend, StorageError};

/// How long a saved session remains restorable.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Transient form state persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Raw JSON input text
    pub json_input: String,
    /// Chosen identifier value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(flatten)]
    pub policy: MatchPolicy,
    pub timestamp: DateTime<Utc>,
}

impl SessionState {
    pub fn new(json_input: impl Into<String>, identifier: Option<String>, policy: MatchPolicy) -> Self {
        Self {
            json_input: json_input.into(),
            identifier,
            policy,
            timestamp: Utc::now(),
        }
    }

    /// Whether this snapshot is still within the restore window at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.timestamp < Duration::hours(SESSION_TTL_HOURS)
    }
}

/// Storage-backed session snapshot.
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist a snapshot.
    pub fn save(&self, state: &SessionState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)
            .map_err(|e| StorageError::Serialization(format!("session: {e}")))?;
        self.backend.write(keys::SESSION, &raw)
    }

    /// Load the saved snapshot if one exists and is less than 24 hours
    /// old. A corrupt snapshot is treated as absent.
    pub fn load(&self) -> Result<Option<SessionState>, StorageError> {
        let Some(raw) = self.backend.read(keys::SESSION)? else {
            return Ok(None);
        };
        let state: SessionState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("discarding unreadable session snapshot: {e}");
                return Ok(None);
            }
        };
        if !state.is_fresh(Utc::now()) {
            debug!("saved session is older than {SESSION_TTL_HOURS}h, ignoring");
            return Ok(None);
        }
        Ok(Some(state))
    }

    /// Remove the saved snapshot.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(keys::SESSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorageBackend;

    #[test]
    fn round_trips_fresh_sessions() {
        let store = SessionStore::new(MemoryStorageBackend::new());
        let state = SessionState::new("{\"a\":1}", Some("Foo.pdf".into()), MatchPolicy::default());
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn stale_sessions_are_ignored() {
        let store = SessionStore::new(MemoryStorageBackend::new());
        let mut state = SessionState::new("{}", None, MatchPolicy::default());
        state.timestamp = Utc::now() - Duration::hours(SESSION_TTL_HOURS + 1);
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_snapshot_reads_as_absent() {
        let backend = MemoryStorageBackend::new();
        backend.write(keys::SESSION, "not json").unwrap();
        let store = SessionStore::new(backend);
        assert_eq!(store.load().unwrap(), None);
    }
}
