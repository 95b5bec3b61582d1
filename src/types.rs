//! Common types used throughout platform clients

use std::collections::HashMap;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Pull the human-readable `message` out of an API error body.
///
/// GitHub validation failures nest the useful text under `errors[].message`;
/// those are appended after the top-level message.
pub fn error_message(body: &JsonValue) -> Option<String> {
    let top = body.get("message").and_then(JsonValue::as_str);

    let nested: Vec<&str> = body
        .get("errors")
        .and_then(JsonValue::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(JsonValue::as_str))
                .collect()
        })
        .unwrap_or_default();

    match (top, nested.is_empty()) {
        (Some(top), true) => Some(top.to_string()),
        (Some(top), false) => Some(format!("{top}: {}", nested.join("; "))),
        (None, false) => Some(nested.join("; ")),
        (None, true) => None,
    }
}
