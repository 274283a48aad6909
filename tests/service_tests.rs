//! End-to-end mapper tests
//!
//! Drive the full pipeline over the in-memory backend: process a
//! document, insert it, and check history, exports and session restore.

use json_mapper_sdk::models::{MatchPolicy, MatchType, Schema};
use json_mapper_sdk::service::Mapper;
use json_mapper_sdk::storage::MemoryStorageBackend;
use json_mapper_sdk::store::{StoreError, DEFAULT_WORKSHEET_ID};
use json_mapper_sdk::validation::{InsertReadiness, ValidationError};
use serde_json::json;

const DOCUMENT: &str = r#"{
    "study": {
        "design": "retrospective",
        "total_patients": 45
    },
    "outcomes": {
        "mortality_rate": "12%"
    },
    "unrelated_field": true
}"#;

fn schema() -> Schema {
    Schema::new(
        "PDF_Name",
        vec![
            "PDF_Name".into(),
            "total_patients".into(),
            "study_design".into(),
            "mortality_rate".into(),
        ],
    )
    .unwrap()
}

fn mapper() -> Mapper<MemoryStorageBackend> {
    Mapper::open(MemoryStorageBackend::new(), schema()).unwrap()
}

#[test]
fn process_then_insert_then_export() {
    let mut mapper = mapper();
    let report = mapper.process_document(DOCUMENT).unwrap();

    assert_eq!(report.total_fields(), 4);
    assert_eq!(report.mapped_count(), 3);
    assert_eq!(report.unmapped_count(), 1);

    let row = mapper.insert("Lindeskog2018.pdf").unwrap();
    assert_eq!(row.get("PDF_Name"), Some(&json!("Lindeskog2018.pdf")));
    assert_eq!(row.get("total_patients"), Some(&json!(45)));
    assert_eq!(row.get("mortality_rate"), Some(&json!("12%")));

    assert_eq!(mapper.history().len(), 1);
    assert_eq!(mapper.history().entries()[0].identifier, "Lindeskog2018.pdf");

    let csv = mapper.export_worksheet_csv();
    assert!(csv.starts_with("PDF_Name,"));
    assert!(csv.contains("\"Lindeskog2018.pdf\""));

    let exported = mapper.export_last_json().unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed["identifier"], json!("Lindeskog2018.pdf"));
    assert_eq!(parsed["mappedData"]["total_patients"], json!(45));

    let clipboard = mapper.export_last_clipboard().unwrap();
    assert_eq!(clipboard.lines().count(), 2);
    assert!(clipboard.contains('\t'));
}

#[test]
fn readiness_tracks_document_and_identifier_state() {
    let mut mapper = mapper();
    assert_eq!(
        mapper.insert_readiness(Some("Foo.pdf")),
        InsertReadiness::NoDocument
    );
    assert_eq!(
        mapper.insert_readiness(None),
        InsertReadiness::MissingIdentifier
    );

    let _ = mapper
        .process_document(r#"{"nothing_matches_here": 1}"#)
        .unwrap();
    assert_eq!(
        mapper.insert_readiness(Some("Foo.pdf")),
        InsertReadiness::NoMappedFields
    );

    let _ = mapper.process_document(DOCUMENT).unwrap();
    assert_eq!(
        mapper.insert_readiness(Some("Foo.pdf")),
        InsertReadiness::Ready
    );
    assert!(mapper.insert_readiness(Some("Foo.pdf")).is_ready());

    mapper.clear_document();
    assert_eq!(
        mapper.insert_readiness(Some("Foo.pdf")),
        InsertReadiness::NoDocument
    );
}

#[test]
fn insert_validates_its_preconditions() {
    let mut mapper = mapper();
    assert!(matches!(
        mapper.insert("Foo.pdf"),
        Err(StoreError::Validation(ValidationError::NoDocument))
    ));

    let _ = mapper.process_document(DOCUMENT).unwrap();
    assert!(matches!(
        mapper.insert("   "),
        Err(StoreError::Validation(ValidationError::MissingIdentifier))
    ));

    let _ = mapper
        .process_document(r#"{"nothing_matches_here": 1}"#)
        .unwrap();
    assert!(matches!(
        mapper.insert("Foo.pdf"),
        Err(StoreError::Validation(ValidationError::NoMappedFields))
    ));
    assert_eq!(mapper.worksheets().current().row_count(), 0);
    assert!(mapper.history().is_empty());
}

#[test]
fn inserts_land_in_the_current_worksheet() {
    let mut mapper = mapper();
    let id = mapper.worksheets_mut().create("Stroke Studies").unwrap();

    let _ = mapper.process_document(DOCUMENT).unwrap();
    mapper.insert("Foo.pdf").unwrap();

    assert_eq!(mapper.worksheets().get(&id).unwrap().row_count(), 1);
    assert_eq!(
        mapper
            .worksheets()
            .get(DEFAULT_WORKSHEET_ID)
            .unwrap()
            .row_count(),
        0
    );
}

#[test]
fn load_from_history_reprocesses_a_past_insertion() {
    let mut mapper = mapper();
    let _ = mapper.process_document(DOCUMENT).unwrap();
    mapper.insert("Foo.pdf").unwrap();
    let entry_id = mapper.history().entries()[0].id;

    mapper.clear_document();
    let (identifier, report) = mapper.load_from_history(entry_id).unwrap();
    assert_eq!(identifier, "Foo.pdf");
    assert_eq!(report.mapped_count(), 3);
    assert!(mapper.last_report().is_some());

    assert!(mapper.load_from_history(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn session_restore_adopts_policy_and_reprocesses() {
    let backend = MemoryStorageBackend::new();
    {
        let mut mapper = Mapper::open(backend.clone(), schema()).unwrap();
        mapper.set_policy(MatchPolicy {
            exact_match: true,
            partial_match: false,
            case_insensitive: true,
        });
        let _ = mapper.process_document(DOCUMENT).unwrap();
        mapper.save_session(DOCUMENT, Some("Foo.pdf")).unwrap();
    }

    let mut mapper = Mapper::open(backend, schema()).unwrap();
    assert!(mapper.last_report().is_none());

    let state = mapper.restore_session().unwrap().unwrap();
    assert_eq!(state.identifier.as_deref(), Some("Foo.pdf"));
    assert!(!mapper.policy().partial_match);

    // With partial matching off, "design" no longer reaches study_design.
    let report = mapper.last_report().unwrap();
    assert_eq!(report.mapped_count(), 2);
    assert!(report
        .mappings()
        .iter()
        .filter(|m| m.match_type.is_match())
        .all(|m| m.match_type == MatchType::Exact));

    mapper.clear_session().unwrap();
    assert!(mapper.restore_session().unwrap().is_none());
}

#[test]
fn identifier_registry_is_available_through_the_mapper() {
    let mut mapper = mapper();
    assert!(mapper.identifiers().contains("Lindeskog2018.pdf"));
    assert!(mapper.identifiers_mut().add("Brand2024.pdf").unwrap());
    assert!(!mapper.identifiers_mut().add("Brand2024.pdf").unwrap());
    assert!(mapper.identifiers_mut().remove("Brand2024.pdf").unwrap());
    assert!(!mapper.identifiers_mut().remove("Brand2024.pdf").unwrap());
}

#[test]
fn clinical_schema_drives_the_default_cli_surface() {
    let schema = Schema::clinical_study();
    let mut mapper = Mapper::open(MemoryStorageBackend::new(), schema).unwrap();
    let report = mapper
        .process_document(r#"{"study": {"total_patients": 45}}"#)
        .unwrap();
    assert_eq!(report.mapped_count(), 1);
    let row = mapper.insert("Foo.pdf").unwrap();
    assert_eq!(row.get("total_patients"), Some(&json!(45)));
    assert_eq!(row.get("PDF_Name"), Some(&json!("Foo.pdf")));
}
