use super::MergeError;
use serde_json::{Map, Value};

/// Overlay the modified tree onto the original's structure, in place.
///
/// Every key of the original ends up present in `modified`; keys the
/// user added survive untouched. After the per-key pass, a `variables`
/// array shared by both trees is rebuilt in the original's order (see
/// [`rebuild_variables`]). Shape conflicts between the two trees are
/// reported as [`MergeError::ShapeMismatch`] with the JSON path of the
/// offending node.
pub fn correct_structure(orig: &Value, modified: &mut Value) -> Result<(), MergeError> {
    merge_node(orig, modified, "$")
}

fn merge_node(orig: &Value, node: &mut Value, path: &str) -> Result<(), MergeError> {
    match orig {
        Value::Object(orig_map) => {
            let node_map = match node {
                Value::Object(map) => map,
                other => return Err(shape_mismatch(path, "object", other)),
            };

            for (key, orig_value) in orig_map {
                let child_path = format!("{path}.{key}");
                match node_map.get_mut(key) {
                    Some(existing) => merge_node(orig_value, existing, &child_path)?,
                    None => {
                        // Missing keys adopt the original subtree verbatim.
                        node_map.insert(key.clone(), orig_value.clone());
                    }
                }
            }

            if let Some(orig_vars) = orig_map.get("variables") {
                if node_map.contains_key("variables") {
                    rebuild_variables(orig_vars, node_map, path)?;
                }
            }

            Ok(())
        }
        Value::Array(orig_items) => {
            // Only arrays of objects are merged positionally. Empty
            // arrays and arrays of scalars keep the edited value.
            if orig_items.first().map_or(false, Value::is_object) {
                let node_items = match node {
                    Value::Array(items) => items,
                    other => return Err(shape_mismatch(path, "array", other)),
                };

                for (i, orig_item) in orig_items.iter().enumerate() {
                    if i < node_items.len() {
                        let child_path = format!("{path}[{i}]");
                        merge_node(orig_item, &mut node_items[i], &child_path)?;
                    } else {
                        node_items.push(orig_item.clone());
                    }
                }
            }

            Ok(())
        }
        // Scalars and null: the edited value wins.
        _ => Ok(()),
    }
}

/// Rebuild the merged `variables` array in the original's order.
///
/// Modified entries are indexed by `properties.name` (a later duplicate
/// name overwrites an earlier one). Each named original variable emits
/// the matching modified entry, with its `description` forced to the
/// original's: present in the original means overwritten, absent means
/// removed. Original variables without a name or without a match emit
/// nothing.
fn rebuild_variables(
    orig_vars: &Value,
    node_map: &mut Map<String, Value>,
    path: &str,
) -> Result<(), MergeError> {
    let vars_path = format!("{path}.variables");

    let orig_items = match orig_vars {
        Value::Array(items) => items,
        other => return Err(shape_mismatch(&vars_path, "array", other)),
    };

    let node_vars = match node_map.get_mut("variables") {
        Some(value) => value,
        None => return Ok(()),
    };

    let mod_items = match std::mem::replace(node_vars, Value::Array(Vec::new())) {
        Value::Array(items) => items,
        other => return Err(shape_mismatch(&vars_path, "array", &other)),
    };

    let mut by_name: Map<String, Value> = Map::new();
    for (i, item) in mod_items.into_iter().enumerate() {
        let item_path = format!("{vars_path}[{i}]");
        let name = variable_name(&item, &item_path)?.map(str::to_string);
        if let Some(name) = name {
            by_name.insert(name, item);
        }
    }

    let mut corrected_vars = Vec::new();
    for (i, orig_var) in orig_items.iter().enumerate() {
        let item_path = format!("{vars_path}[{i}]");
        let name = match variable_name(orig_var, &item_path)? {
            Some(name) => name,
            None => continue,
        };
        let matched = match by_name.get(name) {
            Some(found) => found,
            None => continue,
        };

        let mut corrected_var = matched.clone();
        let orig_description = orig_var
            .get("properties")
            .and_then(|props| props.get("description"));

        // The index only admits entries with an object under
        // "properties", so this always finds one.
        if let Some(props) = corrected_var
            .get_mut("properties")
            .and_then(Value::as_object_mut)
        {
            match orig_description {
                Some(description) => {
                    props.insert("description".to_string(), description.clone());
                }
                None => {
                    props.remove("description");
                }
            }
        }

        corrected_vars.push(corrected_var);
    }

    *node_vars = Value::Array(corrected_vars);
    Ok(())
}

/// Extract a variable entry's identity, `properties.name`.
///
/// Entries that are not objects, have no `properties`, or carry no
/// string name are unnamed (`None`). A `properties` value that is not
/// an object is a shape mismatch.
fn variable_name<'a>(var: &'a Value, path: &str) -> Result<Option<&'a str>, MergeError> {
    let obj = match var.as_object() {
        Some(obj) => obj,
        None => return Ok(None),
    };
    let props = match obj.get("properties") {
        Some(props) => props,
        None => return Ok(None),
    };
    let props = match props.as_object() {
        Some(props) => props,
        None => {
            return Err(shape_mismatch(
                &format!("{path}.properties"),
                "object",
                props,
            ))
        }
    };

    Ok(props.get("name").and_then(Value::as_str))
}

fn shape_mismatch(path: &str, expected: &'static str, found: &Value) -> MergeError {
    MergeError::ShapeMismatch {
        path: path.to_string(),
        expected,
        found: value_kind(found),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
