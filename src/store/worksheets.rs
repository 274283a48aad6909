//! Worksheet store
//!
//! Named, switchable collections of rows persisted under the
//! `worksheets` and `currentWorksheet` storage keys. The `default`
//! worksheet always exists and cannot be deleted; exactly one worksheet
//! is current at any time.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::models::{FieldMapping, Row, Schema, Worksheet};
use crate::storage::{keys, StorageBackend, StorageError};
use crate::store::StoreError;
use uuid::Uuid;

/// Id of the undeletable default worksheet.
pub const DEFAULT_WORKSHEET_ID: &str = "default";

/// Storage-backed worksheet collection.
pub struct WorksheetStore<B: StorageBackend> {
    backend: B,
    schema: Schema,
    worksheets: BTreeMap<String, Worksheet>,
    current: String,
}

impl<B: StorageBackend> WorksheetStore<B> {
    /// Load the store, seeding the default worksheet when storage is
    /// empty. A persisted current pointer that no longer resolves falls
    /// back to `default`.
    pub fn load(backend: B, schema: Schema) -> Result<Self, StoreError> {
        let mut worksheets: BTreeMap<String, Worksheet> = match backend.read(keys::WORKSHEETS)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(format!("worksheets: {e}")))?,
            None => BTreeMap::new(),
        };
        if !worksheets.contains_key(DEFAULT_WORKSHEET_ID) {
            worksheets.insert(
                DEFAULT_WORKSHEET_ID.to_string(),
                Worksheet::new(DEFAULT_WORKSHEET_ID, "Default Worksheet"),
            );
        }
        let current = match backend.read(keys::CURRENT_WORKSHEET)? {
            Some(raw) => serde_json::from_str::<String>(&raw)
                .map_err(|e| StorageError::Serialization(format!("currentWorksheet: {e}")))?,
            None => DEFAULT_WORKSHEET_ID.to_string(),
        };
        let current = if worksheets.contains_key(&current) {
            current
        } else {
            DEFAULT_WORKSHEET_ID.to_string()
        };
        Ok(Self {
            backend,
            schema,
            worksheets,
            current,
        })
    }

    /// Create a worksheet, make it current, and persist.
    ///
    /// Ids are millisecond timestamps, bumped until unique so two creates
    /// in the same millisecond cannot collide.
    pub fn create(&mut self, name: &str) -> Result<String, StoreError> {
        let mut millis = Utc::now().timestamp_millis();
        while self.worksheets.contains_key(&millis.to_string()) {
            millis += 1;
        }
        let id = millis.to_string();
        self.worksheets
            .insert(id.clone(), Worksheet::new(id.clone(), name));
        self.current = id.clone();
        self.persist()?;
        info!(worksheet = %id, name, "created worksheet");
        Ok(id)
    }

    /// Make `id` the current worksheet. Returns `Ok(false)` without any
    /// effect when the id does not exist.
    pub fn switch_current(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.worksheets.contains_key(id) {
            return Ok(false);
        }
        self.current = id.to_string();
        self.persist()?;
        debug!(worksheet = %id, "switched current worksheet");
        Ok(true)
    }

    /// Delete a worksheet. The default worksheet and unknown ids are
    /// no-ops reported as `Ok(false)`. Deleting the current worksheet
    /// resets the current pointer to `default`.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        if id == DEFAULT_WORKSHEET_ID || !self.worksheets.contains_key(id) {
            return Ok(false);
        }
        self.worksheets.remove(id);
        if self.current == id {
            self.current = DEFAULT_WORKSHEET_ID.to_string();
        }
        self.persist()?;
        info!(worksheet = %id, "deleted worksheet");
        Ok(true)
    }

    /// Build a row from the mapped fields and append it to `worksheet_id`.
    ///
    /// All schema columns are seeded to the empty string, mapped values
    /// applied at their target columns, and the identifier column set
    /// last. Bumps the worksheet's modified timestamp and persists before
    /// returning the created row.
    pub fn insert_row(
        &mut self,
        worksheet_id: &str,
        identifier_value: &str,
        mapped_fields: &[FieldMapping],
    ) -> Result<Row, StoreError> {
        let row = Row::build(&self.schema, identifier_value, mapped_fields)?;
        let worksheet = self
            .worksheets
            .get_mut(worksheet_id)
            .ok_or_else(|| StoreError::WorksheetNotFound(worksheet_id.to_string()))?;
        worksheet.rows.push(row.clone());
        worksheet.modified_at = Utc::now();
        self.persist()?;
        info!(
            worksheet = %worksheet_id,
            identifier = %identifier_value,
            fields = mapped_fields.len(),
            "inserted row"
        );
        Ok(row)
    }

    /// Remove the row with `row_id` from `worksheet_id`. Unknown
    /// worksheet or row ids are no-ops reported as `Ok(false)`.
    pub fn delete_row(&mut self, worksheet_id: &str, row_id: Uuid) -> Result<bool, StoreError> {
        let Some(worksheet) = self.worksheets.get_mut(worksheet_id) else {
            return Ok(false);
        };
        let before = worksheet.rows.len();
        worksheet.rows.retain(|row| row.id != row_id);
        if worksheet.rows.len() == before {
            return Ok(false);
        }
        worksheet.modified_at = Utc::now();
        self.persist()?;
        debug!(worksheet = %worksheet_id, row = %row_id, "deleted row");
        Ok(true)
    }

    /// Id of the current worksheet.
    pub fn current_id(&self) -> &str {
        &self.current
    }

    /// The current worksheet.
    pub fn current(&self) -> &Worksheet {
        self.worksheets
            .get(&self.current)
            .or_else(|| self.worksheets.get(DEFAULT_WORKSHEET_ID))
            .expect("default worksheet always exists")
    }

    /// Worksheet by id.
    pub fn get(&self, id: &str) -> Option<&Worksheet> {
        self.worksheets.get(id)
    }

    /// All worksheets keyed by id.
    pub fn worksheets(&self) -> impl Iterator<Item = (&str, &Worksheet)> {
        self.worksheets.iter().map(|(id, ws)| (id.as_str(), ws))
    }

    pub fn len(&self) -> usize {
        self.worksheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// The schema rows are shaped against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    // Durably writes the whole store; called by every mutation before it
    // returns so a crash never loses a completed call.
    fn persist(&self) -> Result<(), StorageError> {
        let worksheets = serde_json::to_string(&self.worksheets)
            .map_err(|e| StorageError::Serialization(format!("worksheets: {e}")))?;
        let current = serde_json::to_string(&self.current)
            .map_err(|e| StorageError::Serialization(format!("currentWorksheet: {e}")))?;
        self.backend.write(keys::WORKSHEETS, &worksheets)?;
        self.backend.write(keys::CURRENT_WORKSHEET, &current)?;
        Ok(())
    }
}
