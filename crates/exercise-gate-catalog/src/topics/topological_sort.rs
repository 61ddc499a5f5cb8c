// crates/exercise-gate-catalog/src/topics/topological_sort.rs
// ============================================================================
// Module: Topological Sort
// Description: Vertex ordering of a directed graph consistent with its edges.
// Purpose: Provide the `topological-sort` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(vertices: int, edges: seq<(int, int)>) -> seq<int>`: an order of
//! `0 .. vertices` in which every edge `(u, v)` places `u` before `v`, or
//! `[]` when the graph has a cycle. Many orders are valid, so fixtures are
//! judged by [`is_valid_order`] rather than by equality.

use std::collections::VecDeque;

use exercise_gate_core::Callable;
use exercise_gate_core::Comparison;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::Value;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::index;
use super::sentinel;
use super::vertex;
use super::within_depth;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "topological-sort",
    contract,
    fixtures,
    stub,
    solutions: &[("dfs", dfs_candidate), ("kahn", kahn_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// DFS visit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not yet visited.
    Fresh,
    /// On the current DFS path.
    Active,
    /// Fully explored.
    Done,
}

/// Reverse DFS post-order; `None` when a cycle is found.
#[must_use]
pub fn dfs(vertices: usize, edges: &[(usize, usize)]) -> Option<Vec<usize>> {
    let successors = successors(vertices, edges);
    let mut marks = vec![Mark::Fresh; vertices];
    let mut post_order = Vec::with_capacity(vertices);
    for root in 0 .. vertices {
        if marks[root] == Mark::Fresh && !visit(root, &successors, &mut marks, &mut post_order) {
            return None;
        }
    }
    post_order.reverse();
    Some(post_order)
}

/// Recursive DFS step; returns false on a back edge.
fn visit(
    vertex: usize,
    successors: &[Vec<usize>],
    marks: &mut [Mark],
    post_order: &mut Vec<usize>,
) -> bool {
    marks[vertex] = Mark::Active;
    for &next in &successors[vertex] {
        let mark = marks[next];
        match mark {
            Mark::Active => return false,
            Mark::Fresh if !visit(next, successors, marks, post_order) => return false,
            Mark::Fresh | Mark::Done => {}
        }
    }
    marks[vertex] = Mark::Done;
    post_order.push(vertex);
    true
}

/// Kahn's algorithm; `None` when a cycle leaves vertices unplaced.
#[must_use]
pub fn kahn(vertices: usize, edges: &[(usize, usize)]) -> Option<Vec<usize>> {
    let successors = successors(vertices, edges);
    let mut in_degree = vec![0_usize; vertices];
    for &(_, to) in edges {
        in_degree[to] += 1;
    }
    let mut ready: VecDeque<usize> = (0 .. vertices).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(vertices);
    while let Some(next) = ready.pop_front() {
        order.push(next);
        for &to in &successors[next] {
            in_degree[to] -= 1;
            if in_degree[to] == 0 {
                ready.push_back(to);
            }
        }
    }
    (order.len() == vertices).then_some(order)
}

/// Successor lists in edge order.
fn successors(vertices: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut successors = vec![Vec::new(); vertices];
    for &(from, to) in edges {
        successors[from].push(to);
    }
    successors
}

/// Returns true when `order` lists every vertex once and respects every edge.
#[must_use]
pub fn is_valid_order(vertices: usize, edges: &[(usize, usize)], order: &[usize]) -> bool {
    let mut position = vec![None; vertices];
    for (slot, &vertex) in order.iter().enumerate() {
        match position.get_mut(vertex) {
            Some(entry) if entry.is_none() => *entry = Some(slot),
            _ => return false,
        }
    }
    order.len() == vertices
        && edges.iter().all(|&(from, to)| match (position[from], position[to]) {
            (Some(before), Some(after)) => before < after,
            _ => false,
        })
}

// ============================================================================
// SECTION: Acceptance
// ============================================================================

/// Accepts `[]` exactly when `[]` is expected, otherwise any valid order.
fn accepts(inputs: &[Value], expected: &Value, observed: &Value) -> bool {
    let Ok((vertices, edges)) = decode(inputs) else {
        return false;
    };
    let Some(observed) = observed.as_array() else {
        return false;
    };
    let expects_cycle = expected.as_array().is_some_and(Vec::is_empty) && vertices > 0;
    if expects_cycle {
        return observed.is_empty();
    }
    let order: Option<Vec<usize>> = observed
        .iter()
        .map(|value| value.as_u64().and_then(|v| usize::try_from(v).ok()))
        .collect();
    order.is_some_and(|order| is_valid_order(vertices, &edges, &order))
}

/// Decodes and validates `(vertices, edges)` from semantic inputs.
fn decode(inputs: &[Value]) -> Result<(usize, Vec<(usize, usize)>), RejectionKind> {
    let (vertices, edges): (i64, Vec<(i64, i64)>) =
        serde_json::from_value(Value::Array(inputs.to_vec()))
            .map_err(|_| RejectionKind::InvalidInput)?;
    validate(vertices, edges)
}

/// Validates vertex count and edge endpoints.
fn validate(
    vertices: i64,
    edges: Vec<(i64, i64)>,
) -> Result<(usize, Vec<(usize, usize)>), RejectionKind> {
    let count = index(vertices)?;
    let edges = edges
        .into_iter()
        .map(|(from, to)| Ok((vertex(from, count)?, vertex(to, count)?)))
        .collect::<Result<Vec<_>, RejectionKind>>()?;
    Ok((count, edges))
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract judged by [`is_valid_order`].
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![
            ValueShape::Int,
            ValueShape::seq(ValueShape::tuple([ValueShape::Int, ValueShape::Int])),
        ],
        ValueShape::seq(ValueShape::Int),
    )
    .with_comparison(Comparison::Property(accepts))
}

/// Stub that always claims a cycle.
fn stub() -> Callable {
    sentinel(json!([]))
}

/// DFS variant.
fn dfs_candidate() -> Callable {
    Callable::typed(|(vertices, edges): (i64, Vec<(i64, i64)>)| {
        let (count, edges) = validate(vertices, edges)?;
        within_depth(count)?;
        Ok::<_, RejectionKind>(dfs(count, &edges).unwrap_or_default())
    })
}

/// Kahn variant.
fn kahn_candidate() -> Callable {
    Callable::typed(|(vertices, edges): (i64, Vec<(i64, i64)>)| {
        let (count, edges) = validate(vertices, edges)?;
        Ok::<_, RejectionKind>(kahn(count, &edges).unwrap_or_default())
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures; the expected orders are one valid answer each.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(json!([4, [[0, 1], [0, 2], [1, 3], [2, 3]]]), Expected::value(json!([0, 1, 2, 3]))),
        call(
            json!([6, [[5, 2], [5, 0], [4, 0], [4, 1], [2, 3], [3, 1]]]),
            Expected::value(json!([5, 4, 2, 3, 1, 0])),
        ),
        call(json!([3, [[0, 1], [1, 2], [2, 0]]]), Expected::value(json!([]))),
        call(json!([2, [[1, 1]]]), Expected::value(json!([]))),
        call(json!([5, []]), Expected::value(json!([0, 1, 2, 3, 4]))),
        call(json!([0, []]), Expected::value(json!([]))),
    ]
}
