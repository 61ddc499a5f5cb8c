// crates/exercise-gate-catalog/src/topics/graph_list_bfs.rs
// ============================================================================
// Module: Graph BFS
// Description: Breadth-first visiting order over a labelled adjacency list.
// Purpose: Provide the `graph-list-bfs` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(graph: map<seq<text>>, start: text) -> seq<text>`: vertices reachable
//! from `start` in breadth-first order, expanding neighbours in list order.
//! Neighbours without an adjacency entry are treated as sinks.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::VecDeque;
use std::iter;

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
use super::within_depth;

/// Labelled adjacency list.
pub type Graph = BTreeMap<String, Vec<String>>;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "graph-list-bfs",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Queue-driven BFS.
#[must_use]
pub fn iterative(graph: &Graph, start: &str) -> Vec<String> {
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.to_string());
        for next in graph.get(vertex).into_iter().flatten() {
            if visited.insert(next.as_str()) {
                queue.push_back(next.as_str());
            }
        }
    }
    order
}

/// Number of distinct vertex labels, keys and neighbours alike.
pub(crate) fn vertex_count(graph: &Graph) -> usize {
    graph
        .iter()
        .flat_map(|(vertex, neighbours)| iter::once(vertex).chain(neighbours))
        .collect::<BTreeSet<_>>()
        .len()
}

/// BFS that recurses once per frontier level.
#[must_use]
pub fn recursive(graph: &Graph, start: &str) -> Vec<String> {
    let mut visited = BTreeSet::from([start]);
    let mut order = Vec::new();
    expand_level(graph, vec![start], &mut visited, &mut order);
    order
}

/// Emits `frontier` and recurses on the next level.
fn expand_level<'a>(
    graph: &'a Graph,
    frontier: Vec<&'a str>,
    visited: &mut BTreeSet<&'a str>,
    order: &mut Vec<String>,
) {
    if frontier.is_empty() {
        return;
    }
    let mut next_level = Vec::new();
    for vertex in frontier {
        order.push(vertex.to_string());
        for next in graph.get(vertex).into_iter().flatten() {
            if visited.insert(next.as_str()) {
                next_level.push(next.as_str());
            }
        }
    }
    expand_level(graph, next_level, visited, order);
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::map(ValueShape::seq(ValueShape::Text)), ValueShape::Text],
        ValueShape::seq(ValueShape::Text),
    )
}

/// Stub that visits nothing.
fn stub() -> Callable {
    sentinel(json!([]))
}

/// Iterative variant.
fn iterative_candidate() -> Callable {
    Callable::typed(|(graph, start): (Graph, String)| {
        Ok::<_, RejectionKind>(iterative(&graph, &start))
    })
}

/// Recursive variant.
fn recursive_candidate() -> Callable {
    Callable::typed(|(graph, start): (Graph, String)| {
        within_depth(vertex_count(&graph))?;
        Ok::<_, RejectionKind>(recursive(&graph, &start))
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(
            json!([
                {"A": ["B", "C"], "B": ["D", "E"], "C": ["F"], "D": [], "E": [], "F": []},
                "A"
            ]),
            Expected::value(json!(["A", "B", "C", "D", "E", "F"])),
        ),
        call(
            json!([
                {
                    "0": ["1", "2"], "1": ["0", "3", "4"], "2": ["0", "4"],
                    "3": ["1"], "4": ["1", "2"]
                },
                "0"
            ]),
            Expected::value(json!(["0", "1", "2", "3", "4"])),
        ),
        call(
            json!([{"A": ["B"], "B": ["A"], "C": ["D"], "D": ["C"]}, "A"]),
            Expected::value(json!(["A", "B"])),
        ),
        call(
            json!([{"A": ["B", "C"], "B": ["A", "D"], "C": ["A", "D"], "D": ["B", "C"]}, "A"]),
            Expected::value(json!(["A", "B", "C", "D"])),
        ),
        call(json!([{"A": []}, "A"]), Expected::value(json!(["A"]))),
    ]
}
