//! JSON Field-Mapping SDK - field-mapping and persistence engine for
//! JSON-to-spreadsheet workflows
//!
//! Provides:
//! - Flattening of nested JSON documents into a flat field space
//! - Matching of flattened fields against a fixed spreadsheet schema
//! - Named, switchable worksheets persisted in a durable key-value store
//! - A bounded insertion history log
//! - CSV / JSON / clipboard export
//!
//! The [`Mapper`] service ties these together; UI layers hold a reference
//! to it and feed it raw JSON text, the chosen identifier, and the active
//! match policy.

#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod import;
pub mod mapping;
pub mod models;
pub mod service;
pub mod session;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use export::{ClipboardExporter, CsvExporter, ExportError, JsonExporter};
pub use import::{flatten, flatten_document, FlatMap, ImportError};
pub use mapping::FieldMatcher;
pub use service::Mapper;
pub use session::{SessionState, SessionStore};
pub use storage::{FileStorageBackend, MemoryStorageBackend, StorageBackend, StorageError};
pub use store::{
    HistoryLog, IdentifierRegistry, StoreError, WorksheetStore, DEFAULT_WORKSHEET_ID,
    HISTORY_LIMIT,
};
pub use validation::{InsertReadiness, ValidationError};

// Re-export models
pub use models::{
    FieldMapping, HistoryEntry, MappingReport, MatchPolicy, MatchType, Row, Schema, Worksheet,
};
