//! Durable key-value storage
//!
//! Stores persist their state under logical string keys through a
//! [`StorageBackend`]. The execution model is single-writer: every
//! operation runs to completion before the next is dispatched, so the
//! backends perform plain read-then-write with no locking or versioning.

pub mod filesystem;
pub mod memory;

/// Error from the durable store.
///
/// Surfaced distinctly from computation failures so a caller can tell a
/// failed write apart from invalid input; the row already built in memory
/// is never silently discarded.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Synchronous durable key-value store.
///
/// `write` must be durable before it returns: a crash immediately after a
/// successful call never loses that call's effect. Implementations are
/// cheap to clone; clones observe the same underlying store.
pub trait StorageBackend {
    /// Read the value at `key`, `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably write `value` at `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Logical keys of the persisted state layout.
pub mod keys {
    /// Mapping from worksheet id to worksheet
    pub const WORKSHEETS: &str = "worksheets";
    /// Id of the current worksheet
    pub const CURRENT_WORKSHEET: &str = "currentWorksheet";
    /// Bounded insertion history, most recent first
    pub const HISTORY: &str = "jsonMapperHistory";
    /// Known identifier values
    pub const IDENTIFIERS: &str = "pdfNamesList";
    /// Transient form state for session restore
    pub const SESSION: &str = "jsonMapperData";
}

pub use filesystem::FileStorageBackend;
pub use memory::MemoryStorageBackend;
