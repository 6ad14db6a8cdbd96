//! Row extraction: per-record path resolution and flattening.

use crate::error::Error;
use crate::tabulate::discover::discover_fields;
use crate::tabulate::types::{FieldSelection, Table, TabulateConfig};
use serde_json::Value;

/// Select the Record Set from a parsed document.
///
/// An object with an `items` array is an API envelope and unwraps to that
/// array; a bare array is used directly; anything else becomes a
/// single-record set.
pub fn record_set(doc: &Value) -> &[Value] {
    if let Some(items) = doc.get("items").and_then(Value::as_array) {
        return items;
    }
    match doc {
        Value::Array(records) => records,
        other => std::slice::from_ref(other),
    }
}

/// Resolve a dot-separated field path against one record.
///
/// Integer segments index into arrays; other segments look up object
/// keys. Any miss (absent key, out-of-range index, or a scalar reached
/// with segments remaining) resolves to `None`, never an error.
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = match current {
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Flatten a non-scalar value into a single descriptive string.
///
/// - object: `"key: value"` entries joined by `"; "`, insertion order,
///   one level deep (nested containers render as compact JSON);
/// - array of strings: elements joined by `", "`;
/// - non-empty array of objects: per element, `"key: value"` pairs over
///   the first element's key set (missing keys become empty strings)
///   joined by `", "`, elements joined by `" | "`;
/// - any other array, including an empty one: plain string forms joined
///   by `", "`.
///
/// Scalars are returned as their plain text form unchanged.
pub fn flatten_value(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{}: {}", key, plain_text(value)))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Array(items) => {
            if !items.is_empty() && items.iter().all(Value::is_string) {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            } else if !items.is_empty() && items.iter().all(Value::is_object) {
                // Column set comes from the first element; later elements
                // missing a key contribute an empty value for it.
                let keys: Vec<&String> = match items.first() {
                    Some(Value::Object(first)) => first.keys().collect(),
                    _ => Vec::new(),
                };
                items
                    .iter()
                    .map(|item| {
                        keys.iter()
                            .map(|key| {
                                let text =
                                    item.get(key.as_str()).map(plain_text).unwrap_or_default();
                                format!("{}: {}", key, text)
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            } else {
                items.iter().map(plain_text).collect::<Vec<_>>().join(", ")
            }
        }
        scalar => plain_text(scalar),
    }
}

/// Plain text form of a value: strings bare, numbers and booleans
/// canonical, null empty, containers as compact JSON.
pub(crate) fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        container => container.to_string(),
    }
}

/// Extract rows for the given paths from every record.
///
/// Cells keep their native JSON type; only non-scalar values are
/// rewritten, and only when `flatten` is on. Every row has exactly one
/// cell per path, in path order.
pub fn extract_rows(paths: &[String], records: &[Value], flatten: bool) -> Vec<Vec<Value>> {
    records
        .iter()
        .map(|record| {
            paths
                .iter()
                .map(|path| match resolve_path(record, path) {
                    None => Value::Null,
                    Some(value) if flatten && (value.is_object() || value.is_array()) => {
                        Value::String(flatten_value(value))
                    }
                    Some(value) => value.clone(),
                })
                .collect()
        })
        .collect()
}

/// Tabulate a parsed JSON document into a header plus rows.
///
/// Resolves the field selection (running discovery against the first
/// record when all fields were requested) and extracts one row per
/// record. Discovery against an empty Record Set is rejected up front.
pub fn tabulate(doc: &Value, config: &TabulateConfig) -> Result<Table, Error> {
    let records = record_set(doc);

    let header = match &config.selection {
        FieldSelection::Fields(fields) => fields.clone(),
        FieldSelection::AllFields => {
            let sample = records.first().ok_or(Error::EmptyRecordSet)?;
            discover_fields(sample)
        }
    };

    let rows = extract_rows(&header, records, config.flatten);
    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwrapping() {
        let doc = json!({"items": [{"id": 1}, {"id": 2}], "found": 2, "pages": 1});
        let records = record_set(&doc);
        assert_eq!(records, &[json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_bare_array_is_the_record_set() {
        let doc = json!([{"id": 1}]);
        assert_eq!(record_set(&doc).len(), 1);
    }

    #[test]
    fn test_single_object_becomes_one_record() {
        let doc = json!({"id": 1});
        let records = record_set(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], doc);
    }

    #[test]
    fn test_resolve_nested_key() {
        let record = json!({"salary": {"from": 100}});
        assert_eq!(resolve_path(&record, "salary.from"), Some(&json!(100)));
    }

    #[test]
    fn test_resolve_array_index() {
        let record = json!({"tags": ["x", "y"]});
        assert_eq!(resolve_path(&record, "tags.0"), Some(&json!("x")));
        assert_eq!(resolve_path(&record, "tags.1"), Some(&json!("y")));
    }

    #[test]
    fn test_resolve_misses_yield_none() {
        let record = json!({"tags": ["x"], "salary": {"from": 100}});
        // Absent key, out-of-range index, non-numeric index, and a path
        // continuing through a scalar all fail the same way.
        assert_eq!(resolve_path(&record, "name"), None);
        assert_eq!(resolve_path(&record, "tags.5"), None);
        assert_eq!(resolve_path(&record, "tags.first"), None);
        assert_eq!(resolve_path(&record, "salary.from.amount"), None);
    }

    #[test]
    fn test_flatten_mapping() {
        let value = json!({"x": 2, "y": 3});
        assert_eq!(flatten_value(&value), "x: 2; y: 3");
    }

    #[test]
    fn test_flatten_mapping_is_one_level_deep() {
        let value = json!({"x": 2, "inner": {"a": 1}});
        assert_eq!(flatten_value(&value), "x: 2; inner: {\"a\":1}");
    }

    #[test]
    fn test_flatten_string_list() {
        assert_eq!(flatten_value(&json!(["ops", "eng"])), "ops, eng");
    }

    #[test]
    fn test_flatten_list_of_mappings() {
        let value = json!([{"k": 1}, {"k": 2}]);
        assert_eq!(flatten_value(&value), "k: 1 | k: 2");
    }

    #[test]
    fn test_flatten_list_of_mappings_uses_first_element_keys() {
        let value = json!([{"k": 1, "extra": "a"}, {"k": 2}]);
        assert_eq!(flatten_value(&value), "k: 1, extra: a | k: 2, extra: ");
    }

    #[test]
    fn test_flatten_mixed_and_empty_lists() {
        assert_eq!(flatten_value(&json!([1, "a", true])), "1, a, true");
        assert_eq!(flatten_value(&json!([])), "");
    }

    #[test]
    fn test_flatten_is_identity_on_scalars() {
        assert_eq!(flatten_value(&json!("plain")), "plain");
        assert_eq!(flatten_value(&json!(7)), "7");
    }

    #[test]
    fn test_rows_match_header_arity() {
        let doc = json!({"items": [
            {"a": 1, "b": {"x": 2, "y": 3}},
            {"a": 4},
            {"b": null}
        ]});
        let config = TabulateConfig::new(
            FieldSelection::Fields(vec!["a".to_string(), "b".to_string()]),
            true,
            ',',
        )
        .unwrap();

        let table = tabulate(&doc, &config).unwrap();
        assert_eq!(table.rows.len(), 3);
        for row in &table.rows {
            assert_eq!(row.len(), table.header.len());
        }
    }

    #[test]
    fn test_flatten_applies_only_to_resolved_containers() {
        let doc = json!({"a": 1, "b": {"x": 2, "y": 3}, "tags": ["x", "y"]});
        let config = TabulateConfig::new(
            FieldSelection::Fields(vec![
                "a".to_string(),
                "b".to_string(),
                "tags.0".to_string(),
            ]),
            true,
            ',',
        )
        .unwrap();

        let table = tabulate(&doc, &config).unwrap();
        // Scalar cells keep their native type; only `b` is flattened.
        assert_eq!(table.rows[0][0], json!(1));
        assert_eq!(table.rows[0][1], json!("x: 2; y: 3"));
        assert_eq!(table.rows[0][2], json!("x"));
    }

    #[test]
    fn test_flatten_off_keeps_containers() {
        let doc = json!({"b": {"x": 2}});
        let config =
            TabulateConfig::new(FieldSelection::Fields(vec!["b".to_string()]), false, ',')
                .unwrap();

        let table = tabulate(&doc, &config).unwrap();
        assert_eq!(table.rows[0][0], json!({"x": 2}));
    }

    #[test]
    fn test_missing_paths_become_null_cells() {
        let doc = json!([{"a": 1}]);
        let config = TabulateConfig::new(
            FieldSelection::Fields(vec!["a".to_string(), "nope.deep".to_string()]),
            true,
            ',',
        )
        .unwrap();

        let table = tabulate(&doc, &config).unwrap();
        assert_eq!(table.rows[0], vec![json!(1), Value::Null]);
    }

    #[test]
    fn test_discovery_on_empty_record_set_is_rejected() {
        let doc = json!({"items": [], "found": 0, "pages": 0});
        let config = TabulateConfig::new(FieldSelection::AllFields, true, ',').unwrap();
        assert!(matches!(
            tabulate(&doc, &config),
            Err(Error::EmptyRecordSet)
        ));
    }

    #[test]
    fn test_all_fields_header_comes_from_first_record() {
        let doc = json!([
            {"name": "A", "salary": {"from": 100}},
            {"name": "B", "city": "X"}
        ]);
        let config = TabulateConfig::new(FieldSelection::AllFields, true, ',').unwrap();

        let table = tabulate(&doc, &config).unwrap();
        assert_eq!(table.header, vec!["name", "salary", "salary.from"]);
        // The second record has no salary, so those cells are null.
        assert_eq!(table.rows[1], vec![json!("B"), Value::Null, Value::Null]);
    }
}
