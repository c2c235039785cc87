use serde_json::{Value, map::Entry};

/// Deep-merges `overrides` into `base`.
///
/// Objects merge key by key. Any other override value, including arrays and
/// `null`, replaces the base value outright.
pub fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.entry(key) {
                    Entry::Occupied(mut entry) => merge_json(entry.get_mut(), value),
                    Entry::Vacant(entry) => {
                        entry.insert(value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_merge_nested_objects() {
        let mut base = json!({ "a": { "b": 1, "c": 2 }, "d": 3 });
        merge_json(&mut base, json!({ "a": { "c": 20, "e": 5 } }));

        assert_eq!(base, json!({ "a": { "b": 1, "c": 20, "e": 5 }, "d": 3 }));
    }

    #[test]
    fn test_merge_replaces_non_objects() {
        let mut base = json!({ "a": { "b": 1 }, "list": [1, 2] });
        merge_json(&mut base, json!({ "a": 7, "list": [3] }));

        assert_eq!(base, json!({ "a": 7, "list": [3] }));
    }

    #[test]
    fn test_merge_keeps_key_order() {
        let mut base = json!({ "xs": 1, "sm": 2, "md": 3 });
        merge_json(&mut base, json!({ "sm": 20 }));

        let keys: Vec<_> = base.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["xs", "sm", "md"]);
    }
}
