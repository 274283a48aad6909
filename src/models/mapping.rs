//! Match policy, per-field mapping outcome, and the mapping report

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Schema;

/// How a flattened JSON field matched a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Field name equals the column name
    Exact,
    /// Field name and column name contain each other as a substring
    Partial,
    /// No column matched
    None,
}

impl MatchType {
    /// Whether this outcome binds the field to a column.
    pub fn is_match(self) -> bool {
        self != MatchType::None
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Partial => write!(f, "partial"),
            MatchType::None => write!(f, "none"),
        }
    }
}

/// Configuration governing the field matcher. All options default to
/// enabled; exact matching always takes priority over partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPolicy {
    /// Accept columns whose name equals the field name
    #[serde(default = "default_true")]
    pub exact_match: bool,
    /// Accept columns related to the field name by substring containment
    #[serde(default = "default_true")]
    pub partial_match: bool,
    /// Fold case before comparing names
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            exact_match: true,
            partial_match: true,
            case_insensitive: true,
        }
    }
}

/// Outcome of matching one flattened field against the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Flattened JSON field name (last path segment)
    pub json_field: String,
    /// Target column, absent when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_column: Option<String>,
    /// How the column was found
    pub match_type: MatchType,
    /// Leaf value carried from the flattened document
    pub value: Value,
}

/// Ordered result of matching one JSON document against the schema.
///
/// One entry per flattened field, in document order. Used for preview,
/// statistics, and as the input to row insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use = "mapping reports should be inspected or inserted"]
pub struct MappingReport {
    mappings: Vec<FieldMapping>,
}

impl MappingReport {
    pub fn new(mappings: Vec<FieldMapping>) -> Self {
        Self { mappings }
    }

    /// All per-field outcomes in document order.
    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Total number of flattened fields.
    pub fn total_fields(&self) -> usize {
        self.mappings.len()
    }

    /// Number of fields bound to a column.
    pub fn mapped_count(&self) -> usize {
        self.mapped_fields().count()
    }

    /// Number of fields with no column.
    pub fn unmapped_count(&self) -> usize {
        self.total_fields() - self.mapped_count()
    }

    pub fn exact_count(&self) -> usize {
        self.mappings
            .iter()
            .filter(|m| m.match_type == MatchType::Exact)
            .count()
    }

    pub fn partial_count(&self) -> usize {
        self.mappings
            .iter()
            .filter(|m| m.match_type == MatchType::Partial)
            .count()
    }

    /// Only the fields that bound to a column.
    pub fn mapped_fields(&self) -> impl Iterator<Item = &FieldMapping> {
        self.mappings.iter().filter(|m| m.match_type.is_match())
    }

    /// Whether at least one field bound to a column.
    pub fn has_mapped_fields(&self) -> bool {
        self.mappings.iter().any(|m| m.match_type.is_match())
    }

    /// Plain-text analysis of the report, suitable for a details view.
    pub fn details(&self, schema: &Schema) -> String {
        let mut out = String::new();
        out.push_str("FIELD MAPPING ANALYSIS\n");
        out.push_str("========================\n\n");
        out.push_str(&format!("Total JSON fields: {}\n", self.total_fields()));
        out.push_str(&format!("Mapped fields: {}\n", self.mapped_count()));
        out.push_str(&format!("Unmapped fields: {}\n\n", self.unmapped_count()));
        out.push_str("MAPPING DETAILS:\n");
        out.push_str("----------------\n");
        for mapping in &self.mappings {
            let column = mapping
                .spreadsheet_column
                .as_deref()
                .unwrap_or("NO MATCH");
            out.push_str(&format!(
                "{} -> {} [{}]\n",
                mapping.json_field,
                column,
                mapping.match_type.to_string().to_uppercase()
            ));
        }
        out.push_str("\nAVAILABLE SPREADSHEET COLUMNS:\n");
        out.push_str("------------------------------\n");
        out.push_str(&schema.columns().join(", "));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report() -> MappingReport {
        MappingReport::new(vec![
            FieldMapping {
                json_field: "total_patients".into(),
                spreadsheet_column: Some("total_patients".into()),
                match_type: MatchType::Exact,
                value: json!(22),
            },
            FieldMapping {
                json_field: "age".into(),
                spreadsheet_column: Some("age_info".into()),
                match_type: MatchType::Partial,
                value: json!("53 years"),
            },
            FieldMapping {
                json_field: "unrelated".into(),
                spreadsheet_column: None,
                match_type: MatchType::None,
                value: json!(null),
            },
        ])
    }

    #[test]
    fn statistics() {
        let report = report();
        assert_eq!(report.total_fields(), 3);
        assert_eq!(report.mapped_count(), 2);
        assert_eq!(report.unmapped_count(), 1);
        assert_eq!(report.exact_count(), 1);
        assert_eq!(report.partial_count(), 1);
        assert!(report.has_mapped_fields());
    }

    #[test]
    fn policy_defaults_enabled_and_missing_fields_default_true() {
        assert_eq!(
            MatchPolicy::default(),
            MatchPolicy {
                exact_match: true,
                partial_match: true,
                case_insensitive: true
            }
        );
        let parsed: MatchPolicy = serde_json::from_str(r#"{"partialMatch": false}"#).unwrap();
        assert!(parsed.exact_match);
        assert!(!parsed.partial_match);
        assert!(parsed.case_insensitive);
    }

    #[test]
    fn details_lists_every_field() {
        let schema = Schema::new(
            "total_patients",
            vec!["total_patients".into(), "age_info".into()],
        )
        .unwrap();
        let text = report().details(&schema);
        assert!(text.contains("Total JSON fields: 3"));
        assert!(text.contains("total_patients -> total_patients [EXACT]"));
        assert!(text.contains("unrelated -> NO MATCH [NONE]"));
        assert!(text.contains("total_patients, age_info"));
    }
}
