//! JSON export
//!
//! Pretty-printed structured object for a single insertion result:
//! `{identifier, exportDate, mappedData}` with the identifier column
//! included in `mappedData`.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::export::ExportError;
use crate::models::{FieldMapping, Schema};

pub struct JsonExporter;

impl JsonExporter {
    pub fn export(
        identifier_value: &str,
        mapped_fields: &[FieldMapping],
        schema: &Schema,
    ) -> Result<String, ExportError> {
        let mut mapped_data = Map::new();
        mapped_data.insert(
            schema.identifier_column().to_string(),
            Value::String(identifier_value.to_string()),
        );
        for field in mapped_fields {
            if let Some(column) = field.spreadsheet_column.as_deref() {
                mapped_data.insert(column.to_string(), field.value.clone());
            }
        }

        let mut document = Map::new();
        document.insert(
            "identifier".to_string(),
            Value::String(identifier_value.to_string()),
        );
        document.insert(
            "exportDate".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        document.insert("mappedData".to_string(), Value::Object(mapped_data));

        serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
