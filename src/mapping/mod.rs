//! Field matching
//!
//! Maps each flattened JSON field to at most one schema column under a
//! configurable [`MatchPolicy`]. Matching is a pure function of the flat
//! fields, the schema order, and the policy: re-running it with the same
//! inputs yields the same report.

use serde_json::Value;

use crate::import::FlatMap;
use crate::models::{FieldMapping, MappingReport, MatchPolicy, MatchType, Schema};

/// Matches flattened fields against a fixed schema.
///
/// Exact matching always takes priority over partial. Each field is
/// resolved independently and the first matching column in schema order
/// wins; two fields may map to the same column, which is accepted
/// behavior rather than an error.
pub struct FieldMatcher<'a> {
    schema: &'a Schema,
    policy: MatchPolicy,
}

impl<'a> FieldMatcher<'a> {
    pub fn new(schema: &'a Schema, policy: MatchPolicy) -> Self {
        Self { schema, policy }
    }

    /// Produce the ordered mapping report for one flattened document.
    pub fn map_document(&self, fields: &FlatMap) -> MappingReport {
        let mappings = fields
            .iter()
            .map(|(name, value)| self.map_field(name, value))
            .collect();
        MappingReport::new(mappings)
    }

    fn map_field(&self, name: &str, value: &Value) -> FieldMapping {
        if self.policy.exact_match {
            if let Some(column) = self.exact_target(name) {
                return FieldMapping {
                    json_field: name.to_string(),
                    spreadsheet_column: Some(column.to_string()),
                    match_type: MatchType::Exact,
                    value: value.clone(),
                };
            }
        }
        if self.policy.partial_match {
            if let Some(column) = self.partial_target(name) {
                return FieldMapping {
                    json_field: name.to_string(),
                    spreadsheet_column: Some(column.to_string()),
                    match_type: MatchType::Partial,
                    value: value.clone(),
                };
            }
        }
        FieldMapping {
            json_field: name.to_string(),
            spreadsheet_column: None,
            match_type: MatchType::None,
            value: value.clone(),
        }
    }

    fn exact_target(&self, field: &str) -> Option<&'a str> {
        let field = self.fold(field);
        self.schema
            .columns()
            .iter()
            .find(|column| self.fold(column) == field)
            .map(String::as_str)
    }

    fn partial_target(&self, field: &str) -> Option<&'a str> {
        let field = self.fold(field);
        self.schema
            .columns()
            .iter()
            .find(|column| {
                let column = self.fold(column);
                column.contains(&field) || field.contains(&column)
            })
            .map(String::as_str)
    }

    fn fold(&self, name: &str) -> String {
        if self.policy.case_insensitive {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}
