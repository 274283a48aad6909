//! Target schema model
//!
//! A schema is the fixed, ordered set of spreadsheet columns that flattened
//! JSON fields are matched against. It is immutable for the lifetime of a
//! session; rows are always shaped against it.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Ordered spreadsheet column set with a designated identifier column.
///
/// The column set is closed: rows and mapped fields are validated against
/// it at construction time, so a value can never land outside the schema.
///
/// # Example
///
/// ```rust
/// use json_mapper_sdk::models::Schema;
///
/// let schema = Schema::new("id", vec!["id".into(), "total_patients".into()]).unwrap();
/// assert!(schema.contains("total_patients"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    identifier_column: String,
    columns: Vec<String>,
}

impl Schema {
    /// Create a schema from an identifier column and an ordered column list.
    ///
    /// Fails if the column list is empty, contains duplicates, or does not
    /// include the identifier column.
    pub fn new(
        identifier_column: impl Into<String>,
        columns: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let identifier_column = identifier_column.into();
        if columns.is_empty() {
            return Err(ValidationError::EmptySchema);
        }
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].contains(column) {
                return Err(ValidationError::DuplicateColumn(column.clone()));
            }
        }
        if !columns.contains(&identifier_column) {
            return Err(ValidationError::MissingIdentifierColumn(identifier_column));
        }
        Ok(Self {
            identifier_column,
            columns,
        })
    }

    /// The default 28-column clinical study extraction schema, identified
    /// by the `PDF_Name` column.
    pub fn clinical_study() -> Self {
        let columns = [
            "PDF_Name",
            "study_design",
            "total_patients",
            "age_info",
            "gender_distribution",
            "initial_neurological_status",
            "inclusion_exclusion_criteria",
            "procedure_type",
            "additional_procedures",
            "timing_of_surgery",
            "criteria_for_intervention",
            "neurological_status_measures",
            "functional_outcome_measures",
            "survival_rates",
            "complications",
            "assessment_timepoints",
            "min_followup",
            "max_followup",
            "median_mean_followup",
            "neurological_improvement",
            "functional_outcomes",
            "mortality_rates",
            "research_question",
            "indication_for_surgery",
            "any_non_cerebellar_stroke_areas",
            "peak_swell_window",
            "stroke_volume",
            "predictors_poor_outcome_surgical_group",
        ];
        // Known-good column set, constructed directly.
        Self {
            identifier_column: "PDF_Name".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Name of the mandatory identifier column.
    pub fn identifier_column(&self) -> &str {
        &self.identifier_column
    }

    /// Whether `column` is part of the schema (exact name comparison).
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_column_list() {
        assert!(matches!(
            Schema::new("id", Vec::new()),
            Err(ValidationError::EmptySchema)
        ));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let result = Schema::new("id", vec!["id".into(), "a".into(), "a".into()]);
        assert!(matches!(result, Err(ValidationError::DuplicateColumn(c)) if c == "a"));
    }

    #[test]
    fn rejects_missing_identifier_column() {
        let result = Schema::new("missing", vec!["a".into(), "b".into()]);
        assert!(matches!(
            result,
            Err(ValidationError::MissingIdentifierColumn(c)) if c == "missing"
        ));
    }

    #[test]
    fn clinical_study_schema_shape() {
        let schema = Schema::clinical_study();
        assert_eq!(schema.len(), 28);
        assert_eq!(schema.identifier_column(), "PDF_Name");
        assert_eq!(schema.columns()[0], "PDF_Name");
        assert!(schema.contains("total_patients"));
    }
}
