//! CSV export
//!
//! One header line of column names followed by one line per row, `\n`
//! separated. Every data field is wrapped in double quotes with internal
//! double quotes doubled.

use chrono::{DateTime, Utc};

use crate::export::value_text;
use crate::models::{FieldMapping, Row, Schema};

pub struct CsvExporter;

impl CsvExporter {
    /// Export rows against the full schema column set.
    pub fn export_rows(rows: &[Row], schema: &Schema) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(schema.columns().join(","));
        for row in rows {
            let cells: Vec<String> = schema
                .columns()
                .iter()
                .map(|column| {
                    let text = row.get(column).map(value_text).unwrap_or_default();
                    quote(&text)
                })
                .collect();
            lines.push(cells.join(","));
        }
        lines.join("\n")
    }

    /// Export a single not-yet-inserted result as one CSV row over the
    /// full schema, identifier column included.
    pub fn export_single(
        identifier_value: &str,
        mapped_fields: &[FieldMapping],
        schema: &Schema,
    ) -> String {
        let header = schema.columns().join(",");
        let cells: Vec<String> = schema
            .columns()
            .iter()
            .map(|column| {
                if column == schema.identifier_column() {
                    return quote(identifier_value);
                }
                let text = mapped_fields
                    .iter()
                    .find(|field| field.spreadsheet_column.as_deref() == Some(column))
                    .map(|field| value_text(&field.value))
                    .unwrap_or_default();
                quote(&text)
            })
            .collect();
        format!("{header}\n{}", cells.join(","))
    }

    /// Download filename for a worksheet export: the sanitized worksheet
    /// name plus the date, e.g. `My_Sheet_2026-08-28.csv`.
    pub fn filename(worksheet_name: &str, date: DateTime<Utc>) -> String {
        let sanitized: String = worksheet_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{sanitized}_{}.csv", date.format("%Y-%m-%d"))
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
