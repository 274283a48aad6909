//! Mapper service
//!
//! The core facade a UI layer holds a reference to: it owns the schema,
//! the active match policy, the persistent stores, and the result of the
//! last processed document and last insertion. There is no ambient global
//! instance; callers construct one and pass it where it is needed.

use tracing::info;
use uuid::Uuid;

use crate::export::{ClipboardExporter, CsvExporter, ExportError, JsonExporter};
use crate::import::{flatten, flatten_document, ImportError};
use crate::mapping::FieldMatcher;
use crate::models::{FieldMapping, HistoryEntry, MappingReport, MatchPolicy, Row, Schema};
use crate::session::{SessionState, SessionStore};
use crate::storage::StorageBackend;
use crate::store::{HistoryLog, IdentifierRegistry, StoreError, WorksheetStore};
use crate::validation::{InsertReadiness, ValidationError};

/// Snapshot of the last successful insertion, kept for export.
#[derive(Debug, Clone)]
struct LastInsert {
    identifier: String,
    mapped_fields: Vec<FieldMapping>,
}

/// Field-mapping and persistence engine.
///
/// Data flow: raw JSON text is flattened, matched against the schema
/// under the active policy, and on [`Mapper::insert`] written as a
/// row into the current worksheet and appended to the history log.
pub struct Mapper<B: StorageBackend + Clone> {
    schema: Schema,
    policy: MatchPolicy,
    worksheets: WorksheetStore<B>,
    history: HistoryLog<B>,
    identifiers: IdentifierRegistry<B>,
    session: SessionStore<B>,
    last_report: Option<MappingReport>,
    last_insert: Option<LastInsert>,
}

impl<B: StorageBackend + Clone> Mapper<B> {
    /// Open the engine over a storage backend, loading (or seeding) all
    /// persisted state.
    pub fn open(backend: B, schema: Schema) -> Result<Self, StoreError> {
        let worksheets = WorksheetStore::load(backend.clone(), schema.clone())?;
        let history = HistoryLog::load(backend.clone())?;
        let identifiers = IdentifierRegistry::load(backend.clone())?;
        let session = SessionStore::new(backend);
        Ok(Self {
            schema,
            policy: MatchPolicy::default(),
            worksheets,
            history,
            identifiers,
            session,
            last_report: None,
            last_insert: None,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Change the match policy. Takes effect on the next processed
    /// document; the last report is kept as-is.
    pub fn set_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    /// Flatten and match one JSON document, remembering the report for
    /// insertion and export.
    pub fn process_document(&mut self, text: &str) -> Result<MappingReport, ImportError> {
        let fields = flatten_document(text)?;
        let report = FieldMatcher::new(&self.schema, self.policy).map_document(&fields);
        self.last_report = Some(report.clone());
        Ok(report)
    }

    /// Drop the last processed document.
    pub fn clear_document(&mut self) {
        self.last_report = None;
    }

    /// The report of the last processed document, if any.
    pub fn last_report(&self) -> Option<&MappingReport> {
        self.last_report.as_ref()
    }

    /// Whether an insertion can proceed with `identifier`.
    pub fn insert_readiness(&self, identifier: Option<&str>) -> InsertReadiness {
        InsertReadiness::assess(self.last_report.as_ref(), identifier)
    }

    /// Insert the last processed document into the current worksheet
    /// under `identifier` and append a history entry.
    ///
    /// Fails with a [`ValidationError`] when no identifier is given, no
    /// document has been processed, or no field mapped to a column.
    pub fn insert(&mut self, identifier: &str) -> Result<Row, StoreError> {
        if identifier.trim().is_empty() {
            return Err(ValidationError::MissingIdentifier.into());
        }
        let report = self
            .last_report
            .as_ref()
            .ok_or(ValidationError::NoDocument)?;
        let mapped_fields: Vec<FieldMapping> = report.mapped_fields().cloned().collect();
        if mapped_fields.is_empty() {
            return Err(ValidationError::NoMappedFields.into());
        }

        let worksheet_id = self.worksheets.current_id().to_string();
        let row = self
            .worksheets
            .insert_row(&worksheet_id, identifier, &mapped_fields)?;
        self.history
            .append(HistoryEntry::new(identifier, mapped_fields.clone()))?;
        self.last_insert = Some(LastInsert {
            identifier: identifier.to_string(),
            mapped_fields,
        });
        info!(identifier, worksheet = %worksheet_id, "insertion completed");
        Ok(row)
    }

    /// Rebuild the document of a past insertion and reprocess it under
    /// the current policy. Returns the identifier it was inserted with
    /// and the fresh report, or `None` for an unknown entry id.
    pub fn load_from_history(&mut self, entry_id: Uuid) -> Option<(String, MappingReport)> {
        let entry = self.history.find(entry_id)?;
        let identifier = entry.identifier.clone();
        let mut document = serde_json::Map::new();
        for field in &entry.mapped_fields {
            document.insert(field.json_field.clone(), field.value.clone());
        }
        let fields = flatten(&serde_json::Value::Object(document));
        let report = FieldMatcher::new(&self.schema, self.policy).map_document(&fields);
        self.last_report = Some(report.clone());
        Some((identifier, report))
    }

    // --- session restore ---

    /// Snapshot the transient form state. Called by the embedding layer
    /// on its auto-save interval and on teardown; saving twice in a row
    /// is harmless.
    pub fn save_session(
        &self,
        json_input: &str,
        identifier: Option<&str>,
    ) -> Result<(), StoreError> {
        let state = SessionState::new(
            json_input,
            identifier.map(str::to_string),
            self.policy,
        );
        self.session.save(&state)?;
        Ok(())
    }

    /// Restore the saved session if it is under 24 hours old: adopts its
    /// policy, reprocesses its document when parseable, and returns the
    /// state for the embedding layer to redisplay.
    pub fn restore_session(&mut self) -> Result<Option<SessionState>, StoreError> {
        let Some(state) = self.session.load()? else {
            return Ok(None);
        };
        self.policy = state.policy;
        if !state.json_input.is_empty() {
            // Invalid saved input surfaces as an absent report, exactly
            // as it would after live typing.
            let _ = self.process_document(&state.json_input);
        }
        Ok(Some(state))
    }

    /// Remove the saved session snapshot.
    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.session.clear()?;
        Ok(())
    }

    // --- stores ---

    pub fn worksheets(&self) -> &WorksheetStore<B> {
        &self.worksheets
    }

    pub fn worksheets_mut(&mut self) -> &mut WorksheetStore<B> {
        &mut self.worksheets
    }

    pub fn history(&self) -> &HistoryLog<B> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryLog<B> {
        &mut self.history
    }

    pub fn identifiers(&self) -> &IdentifierRegistry<B> {
        &self.identifiers
    }

    pub fn identifiers_mut(&mut self) -> &mut IdentifierRegistry<B> {
        &mut self.identifiers
    }

    // --- export ---

    /// CSV of the current worksheet over the full schema.
    pub fn export_worksheet_csv(&self) -> String {
        CsvExporter::export_rows(&self.worksheets.current().rows, &self.schema)
    }

    /// Download filename for the current worksheet's CSV export.
    pub fn worksheet_csv_filename(&self) -> String {
        CsvExporter::filename(&self.worksheets.current().name, chrono::Utc::now())
    }

    /// Pretty JSON of the last insertion, `None` before any insert.
    pub fn export_last_json(&self) -> Result<Option<String>, ExportError> {
        let Some(last) = self.last_insert.as_ref() else {
            return Ok(None);
        };
        JsonExporter::export(&last.identifier, &last.mapped_fields, &self.schema).map(Some)
    }

    /// Tab-separated clipboard text of the last insertion.
    pub fn export_last_clipboard(&self) -> Option<String> {
        self.last_insert.as_ref().map(|last| {
            ClipboardExporter::export(&last.identifier, &last.mapped_fields, &self.schema)
        })
    }

    /// Single-row CSV of the last insertion over the full schema.
    pub fn export_last_csv(&self) -> Option<String> {
        self.last_insert.as_ref().map(|last| {
            CsvExporter::export_single(&last.identifier, &last.mapped_fields, &self.schema)
        })
    }
}
