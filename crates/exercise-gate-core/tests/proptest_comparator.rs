// crates/exercise-gate-core/tests/proptest_comparator.rs
// ============================================================================
// Module: Comparator Property-Based Tests
// Description: Property tests for comparator correctness and stability.
// Purpose: Check equality laws across wide input ranges without panics.
// ============================================================================

//! Property-based tests for comparator invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use exercise_gate_core::Comparison;
use exercise_gate_core::runtime::comparator::semantic_eq;
use exercise_gate_core::runtime::comparator::values_match;
use proptest::prelude::*;
use serde_json::Value;

fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(|v| { serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number) }),
        "[a-z]{0,6}".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0 .. 4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Semantic equality is reflexive.
    #[test]
    fn semantic_eq_is_reflexive(value in json_value_strategy(3)) {
        prop_assert!(semantic_eq(&value, &value));
    }

    /// Semantic equality is symmetric.
    #[test]
    fn semantic_eq_is_symmetric(left in json_value_strategy(2), right in json_value_strategy(2)) {
        prop_assert_eq!(semantic_eq(&left, &right), semantic_eq(&right, &left));
    }

    /// Reversing a sequence never breaks unordered equality.
    #[test]
    fn unordered_accepts_reversal(items in prop::collection::vec(json_value_strategy(1), 0 .. 8)) {
        let forward = Value::Array(items.clone());
        let mut reversed_items = items;
        reversed_items.reverse();
        let reversed = Value::Array(reversed_items);
        prop_assert!(values_match(&Comparison::Unordered, &[], &forward, &reversed));
    }

    /// Integers equal their float spelling when exactly representable.
    #[test]
    fn integers_equal_float_spelling(value in -1_000_000i64 .. 1_000_000) {
        let int = Value::Number(value.into());
        let float = serde_json::Number::from_f64(f64::from(i32::try_from(value).unwrap()))
            .map(Value::Number)
            .unwrap();
        prop_assert!(semantic_eq(&int, &float));
    }
}
