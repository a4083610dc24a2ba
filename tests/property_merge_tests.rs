use plotdoc::{deep_merge, deep_merge_maps};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_map() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,3}", arb_value(), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn empty_overlay_is_identity(base in arb_map()) {
        prop_assert_eq!(deep_merge_maps(&base, &Map::new()), base);
    }

    #[test]
    fn empty_base_yields_overlay(overlay in arb_map()) {
        prop_assert_eq!(deep_merge_maps(&Map::new(), &overlay), overlay);
    }

    #[test]
    fn merge_is_right_biased(base in arb_map(), overlay in arb_map()) {
        let merged = deep_merge_maps(&base, &overlay);
        for (key, overlay_value) in &overlay {
            let both_objects =
                matches!(base.get(key), Some(Value::Object(_))) && overlay_value.is_object();
            if !both_objects {
                prop_assert_eq!(merged.get(key), Some(overlay_value));
            }
        }
    }

    #[test]
    fn base_only_keys_survive(base in arb_map(), overlay in arb_map()) {
        let merged = deep_merge_maps(&base, &overlay);
        for (key, base_value) in &base {
            if !overlay.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(base_value));
            }
        }
    }

    #[test]
    fn remerging_own_output_is_stable(base in arb_map(), overlay in arb_map()) {
        let merged = deep_merge_maps(&base, &overlay);
        prop_assert_eq!(deep_merge_maps(&merged, &overlay), merged.clone());
        prop_assert_eq!(deep_merge_maps(&merged, &Map::new()), merged);
    }

    #[test]
    fn value_form_agrees_with_map_form(base in arb_map(), overlay in arb_map()) {
        let merged = deep_merge_maps(&base, &overlay);
        prop_assert_eq!(
            deep_merge(&Value::Object(base), &Value::Object(overlay)),
            Value::Object(merged)
        );
    }
}
