// crates/exercise-gate-catalog/src/topics/binary_search.rs
// ============================================================================
// Module: Binary Search
// Description: Index lookup in an ascending integer sequence.
// Purpose: Provide the `binary-search` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(items: seq<int>, target: int) -> int`: the index of `target` in the
//! ascending `items`, or a `not_found` rejection.

use std::cmp::Ordering;

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
    id: "binary-search",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Loop-based binary search over a half-open window.
#[must_use]
pub fn iterative(items: &[i64], target: i64) -> Option<usize> {
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Recursive binary search over a half-open window.
#[must_use]
pub fn recursive(items: &[i64], target: i64) -> Option<usize> {
    search_window(items, target, 0, items.len())
}

/// Searches `items[low .. high]`.
fn search_window(items: &[i64], target: i64, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }
    let mid = low + (high - low) / 2;
    match items[mid].cmp(&target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_window(items, target, mid + 1, high),
        Ordering::Greater => search_window(items, target, low, mid),
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
    let sample = json!([-1, 0, 2, 4, 6, 8]);
    vec![
        call(json!([sample, 4]), Expected::value(json!(3))),
        call(json!([sample, -1]), Expected::value(json!(0))),
        call(json!([sample, 8]), Expected::value(json!(5))),
        call(json!([sample, 3]), Expected::not_found()),
        call(json!([[], 1]), Expected::not_found()),
        call(json!([[1], 1]), Expected::value(json!(0))),
        call(json!([[1, 2], 2]), Expected::value(json!(1))),
        call(json!([[1_000_000, 2_000_000, 3_000_000], 2_000_000]), Expected::value(json!(1))),
        call(json!([[-5000, -3000, -1000, 0, 1000], -3000]), Expected::value(json!(1))),
    ]
}
