// crates/exercise-gate-core/src/runtime/comparator.rs
// ============================================================================
// Module: Exercise Gate Comparator
// Description: Semantic comparison of observed and expected candidate results.
// Purpose: Decide pass/fail under the comparison declared by a topic contract.
// Dependencies: crate::core, bigdecimal, serde_json
// ============================================================================

//! ## Overview
//! Equality is structural for sequences and maps and value-based for
//! scalars. Numbers compare through decimal parsing, so `240` equals `240.0`
//! and no float rounding leaks into integer comparisons. Order-insensitivity
//! is opt-in per contract and applies to the top-level sequence only.
//!
//! A rejection only matches an expected rejection of the same kind; a value
//! never matches a rejection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Number;
use serde_json::Value;

use crate::core::Comparison;
use crate::core::Expected;
use crate::core::Observation;

// ============================================================================
// SECTION: Observation Comparison
// ============================================================================

/// Returns true when `observed` satisfies `expected` under `comparison`.
///
/// `inputs` are the call inputs (or step arguments) and are only consulted by
/// [`Comparison::Property`] checks.
#[must_use]
pub fn observation_matches(
    comparison: &Comparison,
    inputs: &[Value],
    expected: &Expected,
    observed: &Observation,
) -> bool {
    match (expected, observed) {
        (Expected::Rejected(want), Observation::Rejected(got)) => want == got,
        (Expected::Value(want), Observation::Value(got)) => {
            values_match(comparison, inputs, want, got)
        }
        _ => false,
    }
}

/// Compares two semantic values under a comparison.
#[must_use]
pub fn values_match(
    comparison: &Comparison,
    inputs: &[Value],
    expected: &Value,
    observed: &Value,
) -> bool {
    match comparison {
        Comparison::Exact => semantic_eq(expected, observed),
        Comparison::Unordered => unordered_eq(expected, observed),
        Comparison::Approximate {
            epsilon,
        } => approx_eq(expected, observed, *epsilon),
        Comparison::Property(check) => check(inputs, expected, observed),
    }
}

// ============================================================================
// SECTION: Equality
// ============================================================================

/// Deep structural equality with decimal-aware numbers.
#[must_use]
pub fn semantic_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => numbers_eq(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| semantic_eq(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, l)| right.get(key).is_some_and(|r| semantic_eq(l, r)))
        }
        _ => left == right,
    }
}

/// Multiset equality over top-level sequences; exact otherwise.
fn unordered_eq(expected: &Value, observed: &Value) -> bool {
    let (Value::Array(expected), Value::Array(observed)) = (expected, observed) else {
        return semantic_eq(expected, observed);
    };
    if expected.len() != observed.len() {
        return false;
    }
    let mut claimed = vec![false; observed.len()];
    expected.iter().all(|want| {
        let slot = observed
            .iter()
            .enumerate()
            .find(|(index, got)| !claimed[*index] && semantic_eq(want, got))
            .map(|(index, _)| index);
        slot.is_some_and(|index| {
            claimed[index] = true;
            true
        })
    })
}

/// Structural equality with numbers allowed to differ by `epsilon`.
fn approx_eq(expected: &Value, observed: &Value, epsilon: f64) -> bool {
    match (expected, observed) {
        (Value::Number(want), Value::Number(got)) => match (want.as_f64(), got.as_f64()) {
            (Some(want), Some(got)) => (want - got).abs() <= epsilon,
            _ => numbers_eq(want, got),
        },
        (Value::Array(want), Value::Array(got)) => {
            want.len() == got.len()
                && want.iter().zip(got).all(|(w, g)| approx_eq(w, g, epsilon))
        }
        (Value::Object(want), Value::Object(got)) => {
            want.len() == got.len()
                && want
                    .iter()
                    .all(|(key, w)| got.get(key).is_some_and(|g| approx_eq(w, g, epsilon)))
        }
        _ => expected == observed,
    }
}

// ============================================================================
// SECTION: Numeric Helpers
// ============================================================================

/// Decimal-aware number equality.
fn numbers_eq(left: &Number, right: &Number) -> bool {
    match (decimal_from_number(left), decimal_from_number(right)) {
        (Some(left), Some(right)) => left == right,
        _ => left == right,
    }
}

/// Parses a JSON number into a decimal.
fn decimal_from_number(number: &Number) -> Option<BigDecimal> {
    BigDecimal::from_str(&number.to_string()).ok()
}
