// crates/exercise-gate-catalog/src/topics/graph_list_dfs.rs
// ============================================================================
// Module: Graph DFS
// Description: Depth-first pre-order over a labelled adjacency list.
// Purpose: Provide the `graph-list-dfs` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(graph: map<seq<text>>, start: text) -> seq<text>`: vertices reachable
//! from `start` in depth-first pre-order, following neighbours in list
//! order. The iterative variant pushes neighbours in reverse and skips
//! visited vertices on pop, which reproduces the recursive order exactly.

use std::collections::BTreeSet;

use exercise_gate_core::Callable;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::graph_list_bfs::Graph;
use super::graph_list_bfs::vertex_count;
use super::sentinel;
use super::within_depth;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "graph-list-dfs",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Explicit-stack DFS.
#[must_use]
pub fn iterative(graph: &Graph, start: &str) -> Vec<String> {
    let mut visited = BTreeSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();
    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        order.push(vertex.to_string());
        for next in graph.get(vertex).into_iter().flatten().rev() {
            if !visited.contains(next.as_str()) {
                stack.push(next.as_str());
            }
        }
    }
    order
}

/// Recursive DFS.
#[must_use]
pub fn recursive(graph: &Graph, start: &str) -> Vec<String> {
    let mut visited = BTreeSet::new();
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    order
}

/// Visits `vertex` and then each unvisited neighbour.
fn visit<'a>(
    graph: &'a Graph,
    vertex: &'a str,
    visited: &mut BTreeSet<&'a str>,
    order: &mut Vec<String>,
) {
    if !visited.insert(vertex) {
        return;
    }
    order.push(vertex.to_string());
    for next in graph.get(vertex).into_iter().flatten() {
        visit(graph, next, visited, order);
    }
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
            json!([{"A": ["B", "C"], "B": ["D", "E"], "C": [], "D": [], "E": []}, "A"]),
            Expected::value(json!(["A", "B", "D", "E", "C"])),
        ),
        call(
            json!([
                {
                    "0": ["1", "2"], "1": ["0", "3", "4"], "2": ["0"],
                    "3": ["1"], "4": ["1", "5"], "5": ["4"]
                },
                "0"
            ]),
            Expected::value(json!(["0", "1", "3", "4", "5", "2"])),
        ),
        call(
            json!([{"X": ["Y", "Z"], "Y": ["X"], "Z": ["X"]}, "X"]),
            Expected::value(json!(["X", "Y", "Z"])),
        ),
        call(
            json!([
                {
                    "1": ["2", "3", "4"], "2": ["1", "5", "6"], "3": ["1"], "4": ["1", "7", "8"],
                    "5": ["2"], "6": ["2"], "7": ["4"], "8": ["4"]
                },
                "1"
            ]),
            Expected::value(json!(["1", "2", "5", "6", "3", "4", "7", "8"])),
        ),
        call(json!([{"A": []}, "A"]), Expected::value(json!(["A"]))),
    ]
}
