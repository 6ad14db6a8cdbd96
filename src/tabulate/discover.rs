//! Field-path discovery by depth-first traversal of a sample record.

use serde_json::Value;

/// Discover every field path reachable in `sample`, in depth-first
/// pre-order. The result is deterministic for a given input and is used
/// verbatim as the table header.
///
/// Object keys each contribute a path (including keys whose value is a
/// nested container), then the walk descends. Arrays whose first element
/// is an object are treated as arrays of records and descended per index,
/// so a two-element array field yields index-qualified paths like
/// `posts.0.title`, `posts.1.title`. Paths are not de-duplicated across
/// indices; extraction relies on the index-qualified form. Discovery
/// mirrors the shape of the one sample it is given, so records with more
/// array elements than the sample contribute no extra columns.
pub fn discover_fields(sample: &Value) -> Vec<String> {
    let mut fields = Vec::new();
    walk(sample, &mut Vec::new(), &mut fields);
    fields
}

fn walk(node: &Value, path: &mut Vec<String>, fields: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                path.push(key.clone());
                fields.push(path.join("."));
                walk(value, path, fields);
                path.pop();
            }
        }
        Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                walk(item, path, fields);
                path.pop();
            }
        }
        // Scalars and scalar arrays terminate the walk; their own paths
        // were already recorded by the enclosing object.
        _ => {}
    }
}
