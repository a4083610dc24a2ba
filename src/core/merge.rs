use serde_json::{Map, Value};

/// Recursively merges `overlay` on top of `base`, overlay winning on conflicts.
///
/// Only JSON objects are merged key-by-key; every other value (scalars and
/// arrays alike) is replaced wholesale. Keys present only in `base` are kept.
/// The function is deterministic and side-effect free so figure building and
/// theming can consume the exact same merge semantics.
#[must_use]
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(deep_merge_maps(base_map, overlay_map))
        }
        _ => overlay.clone(),
    }
}

/// Object-level form of [`deep_merge`], the shape layout merging works on.
#[must_use]
pub fn deep_merge_maps(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, overlay_value) in overlay {
        match (merged.get(key), overlay_value) {
            (Some(Value::Object(base_inner)), Value::Object(overlay_inner)) => {
                let inner = deep_merge_maps(base_inner, overlay_inner);
                merged.insert(key.clone(), Value::Object(inner));
            }
            _ => {
                merged.insert(key.clone(), overlay_value.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_scalar_replaces_nested_object() {
        let base = json!({"axis": {"grid": true}});
        let overlay = json!({"axis": 3});
        assert_eq!(deep_merge(&base, &overlay), json!({"axis": 3}));
    }

    #[test]
    fn arrays_are_replaced_wholesale() {
        let base = json!({"range": [0, 10], "keep": 1});
        let overlay = json!({"range": [5]});
        assert_eq!(deep_merge(&base, &overlay), json!({"range": [5], "keep": 1}));
    }
}
