//! Property-based tests for the accessor/builder pair.
//!
//! Uses `proptest` to generate random values and verify the laws that hold
//! for arbitrary input:
//!
//! - A wrapped `{k: v}` mapping always yields `v` for `k`, whatever the default.
//! - A missing path always yields the default.
//! - Builder and accessor round-trip every non-omitted key.
//! - The omission law: `set(k, v, Some(v))` never produces `k`.
//! - `get_string` trimming is idempotent.

use datakit_core::{Container, DataBuilder, DataContainer, Map, Value};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Strategies
// ============================================================================

/// A mapping key: non-empty, limited alphabet and length.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

/// A scalar value of any tag, including awkward strings.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(Value::from),
        (-1_000_000i64..1_000_000i64, 1u32..4u32).prop_map(|(mantissa, decimals)| {
            Value::from(mantissa as f64 / 10f64.powi(decimals as i32))
        }),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
        Just(json!("0")),
        Just(json!("42")),
        Just(json!("")),
        Just(json!(" padded ")),
    ]
}

/// A value that may also be a flat sequence or mapping of scalars.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_scalar(),
        prop::collection::vec(arb_scalar(), 0..5).prop_map(Value::Array),
        prop::collection::vec((arb_key(), arb_scalar()), 0..5).prop_map(|entries| {
            Value::Object(entries.into_iter().collect::<Map<String, Value>>())
        }),
    ]
}

// ============================================================================
// Accessor laws
// ============================================================================

proptest! {
    #[test]
    fn present_key_always_resolves(key in arb_key(), value in arb_value(), default in arb_scalar()) {
        let mut map = Map::new();
        map.insert(key.clone(), value.clone());
        let container = DataContainer::new(Value::Object(map));

        prop_assert_eq!(container.get(key.as_str()), Some(&value));
        // The default plays no role when the key is present.
        let _ = default;
    }

    #[test]
    fn missing_path_yields_typed_defaults(key in arb_key(), b in any::<bool>(), n in any::<i64>(), f in -1e9f64..1e9f64) {
        let container = DataContainer::new(json!({}));
        prop_assert_eq!(container.get(key.as_str()), None);
        prop_assert_eq!(container.get_bool(key.as_str(), b), b);
        prop_assert_eq!(container.get_i64(key.as_str(), n), n);
        prop_assert_eq!(container.get_f64(key.as_str(), f), f);
    }

    #[test]
    fn get_string_trim_is_idempotent(key in arb_key(), value in arb_value()) {
        let mut map = Map::new();
        map.insert(key.clone(), value);
        let container = DataContainer::new(Value::Object(map));

        let once = container.get_string(key.as_str(), "");
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn traversal_never_panics_on_arbitrary_paths(value in arb_value(), k1 in arb_key(), k2 in arb_key()) {
        let container = DataContainer::new(value);
        let _ = container.get([k1.as_str(), k2.as_str()]);
        let _ = container.get_object(k1.as_str());
        let _ = container.get_object_array(k2.as_str());
    }
}

// ============================================================================
// Builder laws
// ============================================================================

proptest! {
    #[test]
    fn round_trip_through_accessor(key in arb_key(), value in arb_value()) {
        let mut builder = DataBuilder::new();
        builder.set(key.clone(), value.clone(), None);
        let container = DataContainer::new(builder.into_value());
        prop_assert_eq!(container.get(key.as_str()), Some(&value));
    }

    #[test]
    fn omission_law(key in arb_key(), value in arb_value()) {
        let mut builder = DataBuilder::new();
        builder.set(key.clone(), value.clone(), Some(value));
        prop_assert!(!builder.data().contains_key(&key));
    }

    #[test]
    fn non_matching_sentinel_inserts(key in arb_key(), value in arb_value(), sentinel in arb_value()) {
        prop_assume!(value != sentinel);
        let mut builder = DataBuilder::new();
        builder.set(key.clone(), value.clone(), Some(sentinel));
        prop_assert_eq!(builder.data().get(&key), Some(&value));
    }

    #[test]
    fn typed_setters_store_the_target_type(key in arb_key(), value in arb_value()) {
        let mut builder = DataBuilder::new();
        builder.set_bool(key.clone(), value.clone(), None);
        prop_assert!(builder.data().get(&key).is_some_and(Value::is_boolean));

        let mut builder = DataBuilder::new();
        builder.set_i64(key.clone(), value.clone(), None);
        prop_assert!(builder.data().get(&key).is_some_and(Value::is_i64));

        let mut builder = DataBuilder::new();
        builder.set_string(key.clone(), value, None);
        prop_assert!(builder.data().get(&key).is_some_and(Value::is_string));
    }
}
