// crates/exercise-gate-catalog/src/topics/quick_sort.rs
// ============================================================================
// Module: Quick Sort
// Description: In-place ascending sort by Lomuto partitioning.
// Purpose: Provide the `quick-sort` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(items: seq<int>) -> seq<int>`: an ascending copy of `items`. Both
//! variants partition identically around the last element; the iterative
//! variant replaces the call stack with an explicit stack of ranges.

use std::mem;

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
    id: "quick-sort",
    contract,
    fixtures,
    stub,
    solutions: &[("recursive", recursive_candidate), ("iterative", iterative_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Sorts `items` in place, recursing into the smaller partition and looping
/// on the larger one so depth stays logarithmic.
pub fn recursive(mut items: &mut [i64]) {
    while items.len() > 1 {
        let pivot = partition(items);
        let (left, rest) = mem::take(&mut items).split_at_mut(pivot);
        let (_, right) = rest.split_at_mut(1);
        if left.len() < right.len() {
            recursive(left);
            items = right;
        } else {
            recursive(right);
            items = left;
        }
    }
}

/// Sorts `items` in place with an explicit stack of half-open ranges.
pub fn iterative(items: &mut [i64]) {
    let mut pending = vec![(0, items.len())];
    while let Some((low, high)) = pending.pop() {
        if high - low <= 1 {
            continue;
        }
        let pivot = low + partition(&mut items[low .. high]);
        pending.push((pivot + 1, high));
        pending.push((low, pivot));
    }
}

/// Partitions around the last element and returns its final index.
fn partition(items: &mut [i64]) -> usize {
    let last = items.len() - 1;
    let pivot = items[last];
    let mut store = 0;
    for index in 0 .. last {
        if items[index] < pivot {
            items.swap(index, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
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

/// Recursive variant.
fn recursive_candidate() -> Callable {
    Callable::typed(|(mut items,): (Vec<i64>,)| {
        recursive(&mut items);
        Ok::<_, RejectionKind>(items)
    })
}

/// Iterative variant.
fn iterative_candidate() -> Callable {
    Callable::typed(|(mut items,): (Vec<i64>,)| {
        iterative(&mut items);
        Ok::<_, RejectionKind>(items)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(
            json!([[20, 13, 3, 2, 10, 1, 5, 6]]),
            Expected::value(json!([1, 2, 3, 5, 6, 10, 13, 20])),
        ),
        call(
            json!([[64, 34, 25, 12, 22, 11, 90, 5]]),
            Expected::value(json!([5, 11, 12, 22, 25, 34, 64, 90])),
        ),
        call(json!([[3, 6, 8, 10, 1, 2, 1]]), Expected::value(json!([1, 1, 2, 3, 6, 8, 10]))),
        call(json!([[7, 7, 7]]), Expected::value(json!([7, 7, 7]))),
        call(json!([[42]]), Expected::value(json!([42]))),
        call(json!([[]]), Expected::value(json!([]))),
    ]
}
