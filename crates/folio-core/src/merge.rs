//! Deep-merge of JSON values.
//!
//! Used to seed portfolio content from a template's defaults and to
//! layer user styling over template styling.
//!
//! # Rules
//!
//! For each key in the source object:
//!
//! - a non-null, non-array object recurses into the target's value for that
//!   key (an absent or non-object target value is replaced by an empty
//!   object first);
//! - anything else (scalars, `null`, arrays) overwrites the target value.
//!
//! Arrays are never merged element-wise.
//!
//! ```
//! use folio_core::merge::deep_merge;
//! use serde_json::json;
//!
//! let mut target = json!({"about": {"bio": "old", "name": "Ada"}, "tags": [1, 2]});
//! deep_merge(&mut target, &json!({"about": {"bio": "new"}, "tags": [3]}));
//!
//! assert_eq!(target, json!({"about": {"bio": "new", "name": "Ada"}, "tags": [3]}));
//! ```

use serde_json::{Map, Value};

/// Merge `source` into `target` in place.
///
/// If `source` is not an object it replaces `target` outright.
pub fn deep_merge(target: &mut Value, source: &Value) {
    let Value::Object(source_map) = source else {
        *target = source.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(target_map) = target else {
        return;
    };

    for (key, source_value) in source_map {
        if source_value.is_object() {
            let slot = target_map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            deep_merge(slot, source_value);
        } else {
            target_map.insert(key.clone(), source_value.clone());
        }
    }
}

/// Return a new value holding `source` merged over `base`.
pub fn merged(base: &Value, source: &Value) -> Value {
    let mut result = base.clone();
    deep_merge(&mut result, source);
    result
}
