// crates/exercise-gate-catalog/src/topics/linear_search.rs
// ============================================================================
// Module: Linear Search
// Description: Index lookup by scanning an unsorted integer sequence.
// Purpose: Provide the `linear-search` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(items: seq<int>, target: int) -> int`: the first index holding
//! `target`, or a `not_found` rejection.

use exercise_gate_core::Callable;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::absent;
use super::call;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "linear-search",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Scans left to right.
#[must_use]
pub fn iterative(items: &[i64], target: i64) -> Option<usize> {
    items.iter().position(|&item| item == target)
}

/// Searches the left half, then the right half; depth grows with `log n`.
#[must_use]
pub fn recursive(items: &[i64], target: i64) -> Option<usize> {
    match items {
        [] => None,
        [only] => (*only == target).then_some(0),
        _ => {
            let (left, right) = items.split_at(items.len() / 2);
            recursive(left, target)
                .or_else(|| recursive(right, target).map(|index| left.len() + index))
        }
    }
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::Int), ValueShape::Int],
        ValueShape::Int,
    )
}

/// Stub that never finds anything.
fn stub() -> Callable {
    absent(RejectionKind::NotFound)
}

/// Iterative variant.
fn iterative_candidate() -> Callable {
    Callable::typed(|(items, target): (Vec<i64>, i64)| {
        iterative(&items, target).ok_or(RejectionKind::NotFound)
    })
}

/// Recursive variant.
fn recursive_candidate() -> Callable {
    Callable::typed(|(items, target): (Vec<i64>, i64)| {
        recursive(&items, target).ok_or(RejectionKind::NotFound)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    let sample = json!([13, 9, 21, 15, 39, 19, 27]);
    let large: Vec<i64> = (0 .. 1000).collect();
    vec![
        call(json!([sample, 21]), Expected::value(json!(2))),
        call(json!([sample, 99]), Expected::not_found()),
        call(json!([[], 1]), Expected::not_found()),
        call(json!([[5], 5]), Expected::value(json!(0))),
        call(json!([[5], 3]), Expected::not_found()),
        call(json!([[4, 7, 4], 4]), Expected::value(json!(0))),
        call(json!([large, 500]), Expected::value(json!(500))),
    ]
}
