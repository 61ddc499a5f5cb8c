// crates/exercise-gate-catalog/src/topics/knapsack_01.rs
// ============================================================================
// Module: 0/1 Knapsack
// Description: Best total value of whole items within a weight capacity.
// Purpose: Provide the `knapsack-0-1` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(weights: seq<int>, values: seq<int>, capacity: int) -> int`. Each item is
//! taken whole or not at all. A negative capacity counts as zero.
//! Mismatched lengths, negative weights, and capacities above
//! [`MAX_CAPACITY`] are invalid input.

use std::collections::HashMap;

use exercise_gate_core::Callable;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::index;
use super::sentinel;
use super::within_depth;

/// Largest capacity accepted; bounds the tabulated row.
pub const MAX_CAPACITY: usize = 1_000_000;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "knapsack-0-1",
    contract,
    fixtures,
    stub,
    solutions: &[("memoized", memoized_candidate), ("tabulated", tabulated_candidate)],
};

/// Validated item with its weight and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Non-negative weight.
    pub weight: usize,
    /// Value gained when taken.
    pub value: i64,
}

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Top-down search memoized on `(item, remaining)`.
#[must_use]
pub fn memoized(items: &[Item], capacity: usize) -> i64 {
    Memo {
        items,
        seen: HashMap::new(),
    }
    .best(0, capacity)
}

/// Per-call memo table.
struct Memo<'a> {
    /// Items under consideration.
    items: &'a [Item],
    /// Best value per `(item, remaining)`.
    seen: HashMap<(usize, usize), i64>,
}

impl Memo<'_> {
    /// Best value using items from `position` onward.
    fn best(&mut self, position: usize, remaining: usize) -> i64 {
        let Some(item) = self.items.get(position).copied() else {
            return 0;
        };
        if let Some(&known) = self.seen.get(&(position, remaining)) {
            return known;
        }
        let without = self.best(position + 1, remaining);
        let with = if item.weight <= remaining {
            item.value.saturating_add(self.best(position + 1, remaining - item.weight))
        } else {
            i64::MIN
        };
        let best = without.max(with);
        self.seen.insert((position, remaining), best);
        best
    }
}

/// Bottom-up single-row table indexed by capacity.
#[must_use]
pub fn tabulated(items: &[Item], capacity: usize) -> i64 {
    let mut best = vec![0_i64; capacity + 1];
    for item in items {
        for room in (item.weight ..= capacity).rev() {
            let with = best[room - item.weight].saturating_add(item.value);
            if with > best[room] {
                best[room] = with;
            }
        }
    }
    best[capacity]
}

/// Validates the raw inputs into items and a capacity.
fn decode(
    weights: Vec<i64>,
    values: Vec<i64>,
    capacity: i64,
) -> Result<(Vec<Item>, usize), RejectionKind> {
    if weights.len() != values.len() {
        return Err(RejectionKind::InvalidInput);
    }
    let capacity = index(capacity.max(0))?;
    if capacity > MAX_CAPACITY {
        return Err(RejectionKind::InvalidInput);
    }
    let items = weights
        .into_iter()
        .zip(values)
        .map(|(weight, value)| {
            Ok(Item {
                weight: index(weight)?,
                value,
            })
        })
        .collect::<Result<Vec<_>, RejectionKind>>()?;
    Ok((items, capacity))
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::Int), ValueShape::seq(ValueShape::Int), ValueShape::Int],
        ValueShape::Int,
    )
}

/// Stub that never packs anything.
fn stub() -> Callable {
    sentinel(json!(0))
}

/// Memoized variant.
fn memoized_candidate() -> Callable {
    Callable::typed(|(weights, values, capacity): (Vec<i64>, Vec<i64>, i64)| {
        let (items, capacity) = decode(weights, values, capacity)?;
        within_depth(items.len())?;
        Ok::<_, RejectionKind>(memoized(&items, capacity))
    })
}

/// Tabulated variant.
fn tabulated_candidate() -> Callable {
    Callable::typed(|(weights, values, capacity): (Vec<i64>, Vec<i64>, i64)| {
        let (items, capacity) = decode(weights, values, capacity)?;
        Ok::<_, RejectionKind>(tabulated(&items, capacity))
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(json!([[1, 3, 4, 5], [1, 4, 5, 7], 7]), Expected::value(json!(9))),
        call(json!([[10, 20, 30], [60, 100, 120], 50]), Expected::value(json!(220))),
        call(json!([[], [], 10]), Expected::value(json!(0))),
        call(json!([[1, 2, 3], [10, 20, 30], 0]), Expected::value(json!(0))),
        call(json!([[5, 6], [10, 12], 4]), Expected::value(json!(0))),
        call(json!([[2, 3, 4], [3, 4, 5], -1]), Expected::value(json!(0))),
        call(json!([[1, 2], [3], 5]), Expected::Rejected(RejectionKind::InvalidInput)),
    ]
}
