//! Clipboard export
//!
//! Two tab-separated lines (header, values) for direct paste into a
//! spreadsheet application. Columns are limited to the identifier plus
//! the fields that actually mapped, not the full schema.

use crate::export::value_text;
use crate::models::{FieldMapping, Schema};

pub struct ClipboardExporter;

impl ClipboardExporter {
    pub fn export(
        identifier_value: &str,
        mapped_fields: &[FieldMapping],
        schema: &Schema,
    ) -> String {
        let mut headers = vec![schema.identifier_column().to_string()];
        let mut values = vec![identifier_value.to_string()];
        for field in mapped_fields {
            if let Some(column) = field.spreadsheet_column.as_deref() {
                headers.push(column.to_string());
                values.push(value_text(&field.value));
            }
        }
        format!("{}\n{}", headers.join("\t"), values.join("\t"))
    }
}
