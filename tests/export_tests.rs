//! Exporter tests

use json_mapper_sdk::export::{ClipboardExporter, CsvExporter, JsonExporter};
use json_mapper_sdk::models::{FieldMapping, MatchType, Schema};
use json_mapper_sdk::storage::MemoryStorageBackend;
use json_mapper_sdk::store::{WorksheetStore, DEFAULT_WORKSHEET_ID};
use serde_json::json;

fn schema() -> Schema {
    Schema::new(
        "PDF_Name",
        vec![
            "PDF_Name".into(),
            "total_patients".into(),
            "study_design".into(),
        ],
    )
    .unwrap()
}

fn mapped(column: &str, value: serde_json::Value) -> FieldMapping {
    FieldMapping {
        json_field: column.to_string(),
        spreadsheet_column: Some(column.to_string()),
        match_type: MatchType::Exact,
        value,
    }
}

/// Split a CSV line into unquoted, unescaped fields. Assumes fields do
/// not contain commas, which holds for the fixtures here.
fn unquote_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|field| {
            let field = field
                .strip_prefix('"')
                .and_then(|f| f.strip_suffix('"'))
                .unwrap_or(field);
            field.replace("\"\"", "\"")
        })
        .collect()
}

#[test]
fn csv_round_trips_header_and_values() {
    let mut store = WorksheetStore::load(MemoryStorageBackend::new(), schema()).unwrap();
    store
        .insert_row(
            DEFAULT_WORKSHEET_ID,
            "Foo.pdf",
            &[
                mapped("total_patients", json!(22)),
                mapped("study_design", json!("He said \"hi\"")),
            ],
        )
        .unwrap();

    let csv = CsvExporter::export_rows(&store.current().rows, &schema());
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        unquote_line(lines[0]),
        vec!["PDF_Name", "total_patients", "study_design"]
    );
    assert_eq!(
        unquote_line(lines[1]),
        vec!["Foo.pdf", "22", "He said \"hi\""]
    );
    // embedded quote is doubled on the wire
    assert!(lines[1].contains("\"He said \"\"hi\"\"\""));
}

#[test]
fn csv_of_empty_worksheet_is_just_the_header() {
    let store = WorksheetStore::load(MemoryStorageBackend::new(), schema()).unwrap();
    let csv = CsvExporter::export_rows(&store.current().rows, &schema());
    assert_eq!(csv, "PDF_Name,total_patients,study_design");
}

#[test]
fn single_row_csv_covers_the_full_schema() {
    let csv = CsvExporter::export_single(
        "Foo.pdf",
        &[mapped("total_patients", json!(22))],
        &schema(),
    );
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        unquote_line(lines[1]),
        vec!["Foo.pdf", "22", ""]
    );
}

#[test]
fn json_export_structure() {
    let text = JsonExporter::export(
        "Foo.pdf",
        &[mapped("total_patients", json!(22))],
        &schema(),
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["identifier"], json!("Foo.pdf"));
    assert_eq!(parsed["mappedData"]["total_patients"], json!(22));
    assert_eq!(parsed["mappedData"]["PDF_Name"], json!("Foo.pdf"));
}

#[test]
fn clipboard_export_is_two_tab_separated_lines() {
    let text = ClipboardExporter::export(
        "Foo.pdf",
        &[
            mapped("total_patients", json!(22)),
            mapped("study_design", json!("retrospective")),
        ],
        &schema(),
    );
    assert_eq!(
        text,
        "PDF_Name\ttotal_patients\tstudy_design\nFoo.pdf\t22\tretrospective"
    );
}
