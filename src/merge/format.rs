use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashSet;

/// Formats accepted for `datatype.string` variables.
static ALLOWED_FORMATS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["json", "markdown", "html"]));

/// Fallback assigned to unrecognized string formats.
pub const DEFAULT_STRING_FORMAT: &str = "text";

/// Reset unrecognized `variable_string_format` values to the default.
///
/// Walks the tree depth-first. An object value carrying a
/// `variable_string_format` key is checked when its `type` is
/// `datatype.string` and is not descended into further; everything
/// else is recursed. Never fails: unrecognized shapes pass through
/// untouched.
pub fn normalize_string_formats(node: &mut Value) {
    match node {
        Value::Object(map) => {
            for value in map.values_mut() {
                if carries_format(value) {
                    normalize_carrier(value);
                } else {
                    normalize_string_formats(value);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                normalize_string_formats(item);
            }
        }
        _ => {}
    }
}

fn carries_format(value: &Value) -> bool {
    value
        .as_object()
        .map_or(false, |obj| obj.contains_key("variable_string_format"))
}

fn normalize_carrier(value: &mut Value) {
    let obj = match value.as_object_mut() {
        Some(obj) => obj,
        None => return,
    };

    if obj.get("type").and_then(Value::as_str) != Some("datatype.string") {
        return;
    }

    let recognized = obj
        .get("variable_string_format")
        .and_then(Value::as_str)
        .map_or(false, |format| ALLOWED_FORMATS.contains(format));

    if !recognized {
        obj.insert(
            "variable_string_format".to_string(),
            Value::String(DEFAULT_STRING_FORMAT.to_string()),
        );
    }
}
