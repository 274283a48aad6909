//! Input validation for schema construction and row insertion.
//!
//! Validation failures are recovered locally by the caller: the service
//! layer reports them as a disabled insert state rather than a fault.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MappingReport;

/// Errors that can occur while validating schema definitions or insertions.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Schema was constructed with no columns
    #[error("schema must contain at least one column")]
    EmptySchema,

    /// Schema contains the same column name twice
    #[error("duplicate schema column: {0}")]
    DuplicateColumn(String),

    /// The designated identifier column is not part of the schema
    #[error("identifier column '{0}' is not in the schema")]
    MissingIdentifierColumn(String),

    /// A mapped field targets a column outside the fixed schema
    #[error("unknown schema column: {0}")]
    UnknownColumn(String),

    /// Insertion was attempted without an identifier value
    #[error("no identifier selected")]
    MissingIdentifier,

    /// Insertion was attempted before any document was processed
    #[error("no document has been processed")]
    NoDocument,

    /// Insertion was attempted but no field achieved a match
    #[error("no fields mapped to a schema column")]
    NoMappedFields,
}

/// Whether an insertion can currently proceed.
///
/// Mirrors the states a UI would use to enable or disable its insert
/// action; computed from the last mapping report and the chosen
/// identifier without raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertReadiness {
    /// An identifier is selected and at least one field mapped
    Ready,
    /// No identifier value has been chosen
    MissingIdentifier,
    /// No valid document has been processed yet
    NoDocument,
    /// A document was processed but nothing matched the schema
    NoMappedFields,
}

impl InsertReadiness {
    /// Evaluate readiness from the current report and identifier choice.
    ///
    /// The identifier check takes priority, then the presence of a
    /// report, then whether the report mapped anything.
    pub fn assess(report: Option<&MappingReport>, identifier: Option<&str>) -> Self {
        let identifier = identifier.map(str::trim).filter(|s| !s.is_empty());
        if identifier.is_none() {
            return InsertReadiness::MissingIdentifier;
        }
        match report {
            None => InsertReadiness::NoDocument,
            Some(report) if report.is_empty() => InsertReadiness::NoDocument,
            Some(report) if !report.has_mapped_fields() => InsertReadiness::NoMappedFields,
            Some(_) => InsertReadiness::Ready,
        }
    }

    pub fn is_ready(self) -> bool {
        self == InsertReadiness::Ready
    }
}
