// crates/exercise-gate-catalog/src/topics/merge_sort.rs
// ============================================================================
// Module: Merge Sort
// Description: Stable ascending sort by merging sorted runs.
// Purpose: Provide the `merge-sort` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(items: seq<int>) -> seq<int>`: a new ascending copy of `items`.

use exercise_gate_core::Callable;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::sentinel;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "merge-sort",
    contract,
    fixtures,
    stub,
    solutions: &[("top-down", top_down_candidate), ("bottom-up", bottom_up_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Splits in half, sorts both halves recursively, and merges them.
#[must_use]
pub fn top_down(items: &[i64]) -> Vec<i64> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let (left, right) = items.split_at(items.len() / 2);
    merge(&top_down(left), &top_down(right))
}

/// Merges runs of width 1, 2, 4, ... until one run remains.
#[must_use]
pub fn bottom_up(items: &[i64]) -> Vec<i64> {
    let mut runs: Vec<Vec<i64>> = items.iter().map(|&item| vec![item]).collect();
    while runs.len() > 1 {
        runs = runs
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => merge(left, right),
                [single] => single.clone(),
                _ => Vec::new(),
            })
            .collect();
    }
    runs.pop().unwrap_or_default()
}

/// Merges two ascending runs, taking from the left run on ties.
fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i ..]);
    merged.extend_from_slice(&right[j ..]);
    merged
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::Int)],
        ValueShape::seq(ValueShape::Int),
    )
}

/// Stub that always returns an empty sequence.
fn stub() -> Callable {
    sentinel(json!([]))
}

/// Top-down variant.
fn top_down_candidate() -> Callable {
    Callable::typed(|(items,): (Vec<i64>,)| Ok::<_, RejectionKind>(top_down(&items)))
}

/// Bottom-up variant.
fn bottom_up_candidate() -> Callable {
    Callable::typed(|(items,): (Vec<i64>,)| Ok::<_, RejectionKind>(bottom_up(&items)))
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(
            json!([[38, 27, 43, 3, 9, 82, 10]]),
            Expected::value(json!([3, 9, 10, 27, 38, 43, 82])),
        ),
        call(json!([[5, -2, 0, -2, 7]]), Expected::value(json!([-2, -2, 0, 5, 7]))),
        call(json!([[1, 2, 3, 4]]), Expected::value(json!([1, 2, 3, 4]))),
        call(json!([[4, 3, 2, 1]]), Expected::value(json!([1, 2, 3, 4]))),
        call(json!([[42]]), Expected::value(json!([42]))),
        call(json!([[]]), Expected::value(json!([]))),
    ]
}
