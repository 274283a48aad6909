//! Export functionality
//!
//! Serializes rows and mapping results to downloadable CSV or JSON text
//! and to a tab-separated clipboard form.

pub mod clipboard;
pub mod csv;
pub mod json;

use serde_json::Value;

/// Error during export
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Render a cell value as plain text: strings bare, numbers and booleans
/// via their display form, arrays comma-joined, null empty.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

pub use clipboard::ClipboardExporter;
pub use csv::CsvExporter;
pub use json::JsonExporter;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_text_forms() {
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!("abc")), "abc");
        assert_eq!(value_text(&json!(22)), "22");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!([1, "a", null])), "1,a,");
    }
}
