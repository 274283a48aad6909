//! Import functionality
//!
//! Parses raw JSON text and flattens it into the flat field space the
//! matcher operates on.

pub mod flatten;

/// Error during import
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ImportError {
    /// Input text is not valid JSON; no partial flatten is produced.
    #[error("Parse error: {0}")]
    ParseError(String),
}

pub use flatten::{flatten, flatten_document, FlatMap};
