//! Insertion history model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::FieldMapping;

/// Snapshot of one successful insertion.
///
/// Entries are independent of worksheet state: deleting a worksheet or a
/// row leaves its history entries in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    /// Identifier column value the row was inserted with
    pub identifier: String,
    /// The mapped fields as they were inserted
    pub mapped_fields: Vec<FieldMapping>,
    pub timestamp: DateTime<Utc>,
    /// Number of mapped fields at insertion time
    pub field_count: usize,
}

impl HistoryEntry {
    pub fn new(identifier: impl Into<String>, mapped_fields: Vec<FieldMapping>) -> Self {
        let field_count = mapped_fields.len();
        Self {
            id: Uuid::new_v4(),
            identifier: identifier.into(),
            mapped_fields,
            timestamp: Utc::now(),
            field_count,
        }
    }
}
