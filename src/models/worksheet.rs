//! Worksheet model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Row;

/// A named, ordered collection of rows.
///
/// Worksheets are persisted across process restarts; the `default`
/// worksheet always exists and cannot be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    /// Store-unique worksheet id
    pub id: String,
    /// Display name
    pub name: String,
    /// Rows in insertion order
    #[serde(default)]
    pub rows: Vec<Row>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Worksheet {
    pub(crate) fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            rows: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
