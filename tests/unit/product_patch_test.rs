// Property-based tests for partial update payloads
//
// The identifier is always stripped, and only a payload without any keys
// counts as empty. Keys sent as null or unknown to this layer still count.

use catalog::products::models::UpdateProductRequest;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

fn patch_strategy() -> impl Strategy<Value = UpdateProductRequest> {
    (
        proptest::option::of(proptest::option::of(any::<i64>())),
        proptest::option::of(proptest::option::of("[a-zA-Z ]{1,40}")),
        proptest::option::of(proptest::option::of(0u32..1_000_000)),
        proptest::collection::btree_set("x_[a-z]{1,8}", 0..3),
    )
        .prop_map(|(id, name, cents, extra_keys)| UpdateProductRequest {
            id,
            name,
            price: cents.map(|c| c.map(|c| Decimal::new(i64::from(c), 2))),
            other: extra_keys
                .into_iter()
                .map(|k| (k, Value::Bool(false)))
                .collect::<Map<String, Value>>(),
        })
}

proptest! {
    #[test]
    fn test_changes_keep_every_known_field_but_id(patch in patch_strategy()) {
        let name = patch.name.clone().flatten();
        let price = patch.price.flatten();

        let changes = patch.into_changes();

        prop_assert_eq!(changes.name, name);
        prop_assert_eq!(changes.price, price);
    }

    #[test]
    fn test_empty_only_without_keys(patch in patch_strategy()) {
        let has_keys = patch.id.is_some()
            || patch.name.is_some()
            || patch.price.is_some()
            || !patch.other.is_empty();
        prop_assert_eq!(patch.is_empty(), !has_keys);
    }

    #[test]
    fn test_key_count_matches_raw_json(patch in patch_strategy()) {
        let raw = serde_json::to_value(&patch).unwrap();
        let parsed: UpdateProductRequest = serde_json::from_value(raw.clone()).unwrap();

        prop_assert_eq!(parsed.key_count(), raw.as_object().unwrap().len());
    }
}

#[test]
fn test_id_only_payload_is_not_empty_but_changes_nothing() {
    let patch: UpdateProductRequest = serde_json::from_str(r#"{"id": 999}"#).unwrap();

    assert!(!patch.is_empty());
    assert!(patch.into_changes().is_empty());
}

#[test]
fn test_null_and_unknown_keys_count_as_present() {
    for body in [r#"{"name":null}"#, r#"{"available":false}"#, r#"{"id":null}"#] {
        let patch: UpdateProductRequest = serde_json::from_str(body).unwrap();
        assert_eq!(patch.key_count(), 1, "{}", body);
        assert!(patch.into_changes().is_empty(), "{}", body);
    }
}
