//! Persistent stores
//!
//! Each store owns a clone of the storage backend and a cached in-memory
//! view of its state. Every mutating operation persists the full state
//! synchronously before returning; lookups that reference an unknown id
//! are silent no-ops reported as `Ok(false)` so callers can still tell
//! them apart from applied mutations.

pub mod history;
pub mod identifiers;
pub mod worksheets;

use crate::storage::StorageError;
use crate::validation::ValidationError;

/// Error from a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Row insertion referenced a worksheet id that does not exist
    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),
}

pub use history::{HistoryLog, HISTORY_LIMIT};
pub use identifiers::IdentifierRegistry;
pub use worksheets::{WorksheetStore, DEFAULT_WORKSHEET_ID};
