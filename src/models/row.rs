//! Row model
//!
//! Rows are created only through worksheet insertion and are immutable
//! afterwards except for deletion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{FieldMapping, Schema};
use crate::validation::ValidationError;

/// One spreadsheet row: a value for every schema column plus a synthetic id.
///
/// Unmapped columns hold the empty string. The cell map is keyed by column
/// name and covers the schema exactly; construction rejects values aimed
/// at columns outside the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Synthetic unique row id
    pub id: Uuid,
    #[serde(flatten)]
    cells: Map<String, Value>,
}

impl Row {
    /// Build a row for `schema`: seed every column to the empty string,
    /// apply each mapped field's value at its target column, then set the
    /// identifier column.
    ///
    /// Fields without a target column are skipped; a field whose target is
    /// not a schema column is rejected.
    pub(crate) fn build(
        schema: &Schema,
        identifier_value: &str,
        mapped_fields: &[FieldMapping],
    ) -> Result<Self, ValidationError> {
        let mut cells = Map::new();
        for column in schema.columns() {
            cells.insert(column.clone(), Value::String(String::new()));
        }
        for field in mapped_fields {
            let Some(column) = field.spreadsheet_column.as_deref() else {
                continue;
            };
            if !schema.contains(column) {
                return Err(ValidationError::UnknownColumn(column.to_string()));
            }
            cells.insert(column.to_string(), field.value.clone());
        }
        cells.insert(
            schema.identifier_column().to_string(),
            Value::String(identifier_value.to_string()),
        );
        Ok(Self {
            id: Uuid::new_v4(),
            cells,
        })
    }

    /// Value at `column`, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// All cells keyed by column name, in schema order.
    pub fn cells(&self) -> &Map<String, Value> {
        &self.cells
    }

    /// The identifier column value.
    pub fn identifier<'a>(&'a self, schema: &Schema) -> Option<&'a str> {
        self.cells
            .get(schema.identifier_column())
            .and_then(Value::as_str)
    }
}
