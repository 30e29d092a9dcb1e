use serde_json::{Map, Value};

/// Identity fields owned by the modification side.
const IDENTITY_KEYS: [&str; 3] = ["name", "title", "display_name"];

/// Copy the workflow identity fields from the modified document into
/// the corrected one.
///
/// Only runs when the modified document has a top-level `workflow`
/// key. The corrected document gets an object at `workflow` (an empty
/// one replaces anything that is not an object), then `name`, `title`
/// and `display_name` are copied verbatim when present in the modified
/// workflow. Other keys under the corrected workflow are untouched.
pub fn copy_workflow_identity(modified: &Value, corrected: &mut Value) {
    let mod_workflow = match modified.get("workflow") {
        Some(workflow) => workflow,
        None => return,
    };
    let corrected_map = match corrected.as_object_mut() {
        Some(map) => map,
        None => return,
    };

    if !corrected_map
        .get("workflow")
        .map_or(false, Value::is_object)
    {
        corrected_map.insert("workflow".to_string(), Value::Object(Map::new()));
    }

    let source = match mod_workflow.as_object() {
        Some(map) => map,
        None => return,
    };
    let target = match corrected_map.get_mut("workflow").and_then(Value::as_object_mut) {
        Some(map) => map,
        None => return,
    };

    for key in IDENTITY_KEYS {
        if let Some(value) = source.get(key) {
            target.insert(key.to_string(), value.clone());
        }
    }
}
