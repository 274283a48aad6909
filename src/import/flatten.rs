//! JSON flattening
//!
//! Converts an arbitrarily nested JSON document into a flat mapping from
//! field name to leaf value. Nested objects are walked depth-first in
//! document key order (`serde_json` preserve_order); every non-object
//! leaf (scalars, arrays, null) is bound under the *last* dot-separated
//! segment of its path, deliberately discarding positional context to
//! maximize match probability against a flat schema.
//!
//! When two nested paths collapse to the same final segment the later one
//! overwrites the earlier (last-write-wins). This loses data and is kept
//! for compatibility with the original tool's behavior.

use serde_json::{Map, Value};

use crate::import::ImportError;

/// Flat field space: final path segment to leaf value, in document order.
pub type FlatMap = Map<String, Value>;

/// Parse `text` as JSON and flatten it.
///
/// Returns [`ImportError::ParseError`] for invalid JSON, which callers
/// surface as an invalid-input status distinct from an empty flatten.
pub fn flatten_document(text: &str) -> Result<FlatMap, ImportError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ImportError::ParseError(e.to_string()))?;
    Ok(flatten(&value))
}

/// Flatten a parsed JSON value.
///
/// A top-level array is iterated by index: object elements are walked
/// like nested objects, any other element is bound under its index.
/// Arrays nested deeper in the document stay leaves. A top-level scalar
/// has no named path and flattens to an empty map.
pub fn flatten(value: &Value) -> FlatMap {
    let mut out = FlatMap::new();
    match value {
        Value::Object(fields) => walk(fields, "", &mut out),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let path = index.to_string();
                match item {
                    Value::Object(nested) => walk(nested, &path, &mut out),
                    leaf => {
                        out.insert(path, leaf.clone());
                    }
                }
            }
        }
        _ => {}
    }
    out
}

fn walk(fields: &Map<String, Value>, prefix: &str, out: &mut FlatMap) {
    for (key, child) in fields {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match child {
            Value::Object(nested) => walk(nested, &path, out),
            leaf => {
                // Keys may themselves contain dots; the binding name is
                // always the final segment of the full path.
                let final_key = path.rsplit('.').next().unwrap_or(path.as_str());
                out.insert(final_key.to_string(), leaf.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn binds_leaves_under_final_segment() {
        let flat = flatten(&json!({
            "study_design": "retrospective",
            "patient_characteristics": {
                "total_patients": 22,
                "age_info": "median 53"
            }
        }));
        assert_eq!(flat.len(), 3);
        assert_eq!(flat["study_design"], json!("retrospective"));
        assert_eq!(flat["total_patients"], json!(22));
        assert_eq!(flat["age_info"], json!("median 53"));
    }

    #[test]
    fn arrays_and_null_are_leaves() {
        let flat = flatten(&json!({"outcomes": {"scores": [1, 2, 3], "notes": null}}));
        assert_eq!(flat["scores"], json!([1, 2, 3]));
        assert_eq!(flat["notes"], json!(null));
    }

    #[test]
    fn later_path_overwrites_shared_final_segment() {
        let flat = flatten(&json!({"a": {"x": 1}, "b": {"x": 2}}));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["x"], json!(2));
    }

    #[test]
    fn dotted_key_binds_under_its_final_segment() {
        let flat = flatten(&json!({"outer": {"a.b": 7}}));
        assert_eq!(flat["b"], json!(7));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            flatten_document("{not json"),
            Err(ImportError::ParseError(_))
        ));
    }

    #[test]
    fn empty_and_scalar_documents_flatten_empty() {
        assert!(flatten_document("{}").unwrap().is_empty());
        assert!(flatten_document("[]").unwrap().is_empty());
        assert!(flatten_document("42").unwrap().is_empty());
    }

    #[test]
    fn top_level_array_is_walked_by_index() {
        let flat = flatten_document(r#"[{"total_patients": 5}]"#).unwrap();
        assert_eq!(flat["total_patients"], json!(5));

        let flat = flatten(&json!([{"study": {"age_info": "53"}}, "note", [1, 2]]));
        assert_eq!(flat["age_info"], json!("53"));
        assert_eq!(flat["1"], json!("note"));
        // deeper arrays remain leaves even inside a top-level array
        assert_eq!(flat["2"], json!([1, 2]));
    }
}
