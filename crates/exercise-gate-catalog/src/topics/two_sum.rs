// crates/exercise-gate-catalog/src/topics/two_sum.rs
// ============================================================================
// Module: Two Sum
// Description: Pair of indices whose values add up to a target.
// Purpose: Provide the `two-sum` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(items: seq<int>, target: int) -> (int, int)`: indices `[i, j]` with
//! `i < j` and `items[i] + items[j] == target`, compared in order. When no
//! pair exists the answer is a `not_found` rejection.

use std::collections::HashMap;

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
    id: "two-sum",
    contract,
    fixtures,
    stub,
    solutions: &[("hash-map", hash_map_candidate), ("brute-force", brute_force_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Single pass remembering the first index of every value seen so far.
#[must_use]
pub fn hash_map(items: &[i64], target: i64) -> Option<[usize; 2]> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(items.len());
    for (j, &item) in items.iter().enumerate() {
        if let Some(complement) = target.checked_sub(item)
            && let Some(&i) = seen.get(&complement)
        {
            return Some([i, j]);
        }
        seen.entry(item).or_insert(j);
    }
    None
}

/// Checks every pair in index order.
#[must_use]
pub fn brute_force(items: &[i64], target: i64) -> Option<[usize; 2]> {
    (0 .. items.len()).find_map(|i| {
        (i + 1 .. items.len())
            .find(|&j| items[i].checked_add(items[j]) == Some(target))
            .map(|j| [i, j])
    })
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::Int), ValueShape::Int],
        ValueShape::tuple([ValueShape::Int, ValueShape::Int]),
    )
}

/// Stub that never finds a pair.
fn stub() -> Callable {
    absent(RejectionKind::NotFound)
}

/// Hash-map variant.
fn hash_map_candidate() -> Callable {
    Callable::typed(|(items, target): (Vec<i64>, i64)| {
        hash_map(&items, target).ok_or(RejectionKind::NotFound)
    })
}

/// Brute-force variant.
fn brute_force_candidate() -> Callable {
    Callable::typed(|(items, target): (Vec<i64>, i64)| {
        brute_force(&items, target).ok_or(RejectionKind::NotFound)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures; each has exactly one valid pair.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(json!([[2, 7, 11, 15], 9]), Expected::value(json!([0, 1]))),
        call(json!([[3, 2, 4], 6]), Expected::value(json!([1, 2]))),
        call(json!([[3, 3], 6]), Expected::value(json!([0, 1]))),
        call(json!([[-3, 4, 3, 90], 0]), Expected::value(json!([0, 2]))),
        call(json!([[1, 2, 3], 7]), Expected::not_found()),
        call(json!([[], 0]), Expected::not_found()),
    ]
}
