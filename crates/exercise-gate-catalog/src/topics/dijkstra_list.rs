// crates/exercise-gate-catalog/src/topics/dijkstra_list.rs
// ============================================================================
// Module: Dijkstra (Adjacency List)
// Description: Single-source shortest paths over non-negative weights.
// Purpose: Provide the `dijkstra-list` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(graph: map<seq<(text, int)>>, start: text) -> map<int?>`: the shortest
//! distance from `start` to every vertex named in the graph, `null` for
//! unreachable vertices. Negative weights are rejected as invalid input.
//! The frontier is the catalog's own [`MinHeap`].

use std::collections::BTreeMap;

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
use crate::structures::MinHeap;

/// Weighted, labelled adjacency list.
pub type WeightedGraph = BTreeMap<String, Vec<(String, i64)>>;

/// Distance per vertex; `None` when unreachable.
pub type Distances = BTreeMap<String, Option<i64>>;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "dijkstra-list",
    contract,
    fixtures,
    stub,
    solutions: &[("binary-heap", binary_heap_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Dijkstra with lazy deletion of stale heap entries.
///
/// # Errors
///
/// Returns [`RejectionKind::InvalidInput`] for negative weights or when a
/// distance overflows.
pub fn shortest_paths(graph: &WeightedGraph, start: &str) -> Result<Distances, RejectionKind> {
    let mut distances: Distances = BTreeMap::new();
    for (vertex, edges) in graph {
        distances.insert(vertex.clone(), None);
        for (next, weight) in edges {
            if *weight < 0 {
                return Err(RejectionKind::InvalidInput);
            }
            distances.entry(next.clone()).or_insert(None);
        }
    }
    distances.insert(start.to_string(), Some(0));

    let mut frontier = MinHeap::new();
    frontier.insert((0_i64, start.to_string()));
    while let Some((distance, vertex)) = frontier.extract_min() {
        if distances.get(&vertex).copied().flatten().is_some_and(|best| distance > best) {
            continue;
        }
        for (next, weight) in graph.get(&vertex).into_iter().flatten() {
            let candidate = distance.checked_add(*weight).ok_or(RejectionKind::InvalidInput)?;
            let slot = distances.entry(next.clone()).or_insert(None);
            if slot.is_none_or(|known| candidate < known) {
                *slot = Some(candidate);
                frontier.insert((candidate, next.clone()));
            }
        }
    }
    Ok(distances)
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![
            ValueShape::map(ValueShape::seq(ValueShape::tuple([
                ValueShape::Text,
                ValueShape::Int,
            ]))),
            ValueShape::Text,
        ],
        ValueShape::map(ValueShape::optional(ValueShape::Int)),
    )
}

/// Stub that reports no distances.
fn stub() -> Callable {
    sentinel(json!({}))
}

/// Binary-heap variant.
fn binary_heap_candidate() -> Callable {
    Callable::typed(|(graph, start): (WeightedGraph, String)| shortest_paths(&graph, &start))
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(
            json!([
                {
                    "A": [["B", 2], ["D", 6]],
                    "B": [["C", 3], ["D", 7]],
                    "C": [["E", 5]],
                    "D": [["C", 1], ["E", 2]],
                    "E": []
                },
                "A"
            ]),
            Expected::value(json!({"A": 0, "B": 2, "C": 5, "D": 6, "E": 8})),
        ),
        call(
            json!([
                {"A": [["B", 4], ["C", 2]], "B": [["D", 5]], "C": [["B", 1], ["D", 8]], "D": []},
                "A"
            ]),
            Expected::value(json!({"A": 0, "B": 3, "C": 2, "D": 8})),
        ),
        call(
            json!([{"A": [["B", 1]], "B": [], "C": [["D", 1]], "D": []}, "A"]),
            Expected::value(json!({"A": 0, "B": 1, "C": null, "D": null})),
        ),
        call(
            json!([
                {
                    "A": [["B", 4], ["C", 2]],
                    "B": [["C", 1], ["D", 5]],
                    "C": [["D", 8], ["E", 10]],
                    "D": [["E", 2]],
                    "E": [["A", 7]]
                },
                "A"
            ]),
            Expected::value(json!({"A": 0, "B": 4, "C": 2, "D": 9, "E": 11})),
        ),
        call(
            json!([{"A": [["B", -1]], "B": []}, "A"]),
            Expected::Rejected(RejectionKind::InvalidInput),
        ),
    ]
}
