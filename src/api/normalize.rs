//! Envelope heuristics for catalog responses
//!
//! The catalog API does not use a fixed envelope key, so lists and detail
//! records are located by shape. With several array (or object) fields the
//! first one in document order wins, which may not be the intended one.

use serde_json::{Map, Value};

/// Extract the list carried by a response
///
/// - an array payload is returned as-is
/// - an object payload yields its first array-valued field
/// - anything else yields an empty list
pub fn extract_list(payload: &Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items.clone(),
        Value::Object(fields) => fields
            .values()
            .find_map(|value| value.as_array())
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Locate a single plant record inside a detail response
///
/// Tried in order: an object under `"data"`, the first non-array object
/// field (for a bare array, the first object element), then the first
/// element of [`extract_list`] if it is an object.
pub fn find_detail_record(payload: &Value) -> Option<Map<String, Value>> {
    match payload {
        Value::Object(fields) => {
            if let Some(Value::Object(data)) = fields.get("data") {
                return Some(data.clone());
            }
            if let Some(record) = fields.values().find_map(Value::as_object) {
                return Some(record.clone());
            }
        }
        Value::Array(items) => {
            if let Some(record) = items.iter().find_map(Value::as_object) {
                return Some(record.clone());
            }
        }
        _ => {}
    }

    extract_list(payload)
        .into_iter()
        .next()
        .and_then(|first| match first {
            Value::Object(record) => Some(record),
            _ => None,
        })
}
