// crates/exercise-gate-catalog/src/topics/articulation_points.rs
// ============================================================================
// Module: Articulation Points
// Description: Cut vertices of an undirected graph via Tarjan's low-link.
// Purpose: Provide the `articulation-points` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(adjacency: seq<seq<int>>) -> seq<int>`: every vertex whose removal
//! disconnects its component. Vertices are `0 .. adjacency.len()`; the
//! result is compared as a set. Discovery times and low links live in a
//! per-call [`LowLink`] context.

use exercise_gate_core::Callable;
use exercise_gate_core::Comparison;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::sentinel;
use super::vertex;
use super::within_depth;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "articulation-points",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Low-Link Context
// ============================================================================

/// DFS bookkeeping for one search.
#[derive(Debug)]
struct LowLink<'a> {
    /// Validated adjacency lists.
    graph: &'a [Vec<usize>],
    /// Discovery time per vertex.
    discovered: Vec<Option<usize>>,
    /// Lowest discovery time reachable per vertex.
    low: Vec<usize>,
    /// Next discovery time.
    clock: usize,
    /// Cut-vertex flags.
    cut: Vec<bool>,
}

impl<'a> LowLink<'a> {
    /// Creates a context for `graph`.
    fn new(graph: &'a [Vec<usize>]) -> Self {
        Self {
            graph,
            discovered: vec![None; graph.len()],
            low: vec![0; graph.len()],
            clock: 0,
            cut: vec![false; graph.len()],
        }
    }

    /// Stamps `vertex` with the next discovery time.
    fn discover(&mut self, vertex: usize) -> usize {
        let time = self.clock;
        self.discovered[vertex] = Some(time);
        self.low[vertex] = time;
        self.clock += 1;
        time
    }

    /// Flagged vertices in ascending order.
    fn into_cut_vertices(self) -> Vec<usize> {
        self.cut.iter().enumerate().filter_map(|(vertex, &cut)| cut.then_some(vertex)).collect()
    }

    /// Recursive Tarjan visit; returns the number of DFS children.
    fn visit(&mut self, vertex: usize, parent: Option<usize>) -> usize {
        let time = self.discover(vertex);
        let graph = self.graph;
        let mut children = 0;
        for &next in &graph[vertex] {
            match self.discovered[next] {
                None => {
                    children += 1;
                    self.visit(next, Some(vertex));
                    self.low[vertex] = self.low[vertex].min(self.low[next]);
                    if parent.is_some() && self.low[next] >= time {
                        self.cut[vertex] = true;
                    }
                }
                Some(seen) if Some(next) != parent => {
                    self.low[vertex] = self.low[vertex].min(seen);
                }
                Some(_) => {}
            }
        }
        children
    }
}

/// Explicit-stack frame of the iterative search.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Vertex being expanded.
    vertex: usize,
    /// DFS parent.
    parent: Option<usize>,
    /// Next neighbour position to examine.
    cursor: usize,
}

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Tarjan's search with recursion.
#[must_use]
pub fn recursive(graph: &[Vec<usize>]) -> Vec<usize> {
    let mut context = LowLink::new(graph);
    for root in 0 .. graph.len() {
        if context.discovered[root].is_none() && context.visit(root, None) > 1 {
            context.cut[root] = true;
        }
    }
    context.into_cut_vertices()
}

/// Tarjan's search with an explicit frame stack; same visiting order.
#[must_use]
pub fn iterative(graph: &[Vec<usize>]) -> Vec<usize> {
    let mut context = LowLink::new(graph);
    for root in 0 .. graph.len() {
        if context.discovered[root].is_some() {
            continue;
        }
        context.discover(root);
        let mut root_children = 0;
        let mut stack = vec![Frame {
            vertex: root,
            parent: None,
            cursor: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            if let Some(&next) = graph[vertex].get(frame.cursor) {
                frame.cursor += 1;
                let parent = frame.parent;
                match context.discovered[next] {
                    None => {
                        if vertex == root {
                            root_children += 1;
                        }
                        context.discover(next);
                        stack.push(Frame {
                            vertex: next,
                            parent: Some(vertex),
                            cursor: 0,
                        });
                    }
                    Some(seen) if Some(next) != parent => {
                        context.low[vertex] = context.low[vertex].min(seen);
                    }
                    Some(_) => {}
                }
                continue;
            }
            stack.pop();
            if let Some(parent) = stack.last() {
                let up = parent.vertex;
                context.low[up] = context.low[up].min(context.low[vertex]);
                let up_time = context.discovered[up].unwrap_or_default();
                if parent.parent.is_some() && context.low[vertex] >= up_time {
                    context.cut[up] = true;
                }
            }
        }
        if root_children > 1 {
            context.cut[root] = true;
        }
    }
    context.into_cut_vertices()
}

/// Converts semantic adjacency lists into validated vertex indices.
fn decode_graph(adjacency: Vec<Vec<i64>>) -> Result<Vec<Vec<usize>>, RejectionKind> {
    let count = adjacency.len();
    adjacency
        .into_iter()
        .map(|neighbours| {
            neighbours.into_iter().map(|neighbour| vertex(neighbour, count)).collect()
        })
        .collect()
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract; the result order is irrelevant.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::seq(ValueShape::Int))],
        ValueShape::seq(ValueShape::Int),
    )
    .with_comparison(Comparison::Unordered)
}

/// Stub that reports no cut vertices.
fn stub() -> Callable {
    sentinel(json!([]))
}

/// Iterative variant.
fn iterative_candidate() -> Callable {
    Callable::typed(|(adjacency,): (Vec<Vec<i64>>,)| {
        decode_graph(adjacency).map(|graph| iterative(&graph))
    })
}

/// Recursive variant.
fn recursive_candidate() -> Callable {
    Callable::typed(|(adjacency,): (Vec<Vec<i64>>,)| {
        let graph = decode_graph(adjacency)?;
        within_depth(graph.len())?;
        Ok::<_, RejectionKind>(recursive(&graph))
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(json!([[[1, 2], [0, 2, 3], [0, 1], [1]]]), Expected::value(json!([1]))),
        call(json!([[[1, 3], [0, 2], [1, 3], [2, 0]]]), Expected::value(json!([]))),
        call(json!([[[1], [0, 2], [1, 3], [2]]]), Expected::value(json!([2, 1]))),
        call(
            json!([[[1, 2], [0, 2], [0, 1, 3, 4], [2, 4], [2, 3]]]),
            Expected::value(json!([2])),
        ),
        call(json!([[[1, 2, 3], [0], [0], [0]]]), Expected::value(json!([0]))),
        call(json!([[[1], [0, 2], [1], [4], [3]]]), Expected::value(json!([1]))),
        call(json!([[]]), Expected::value(json!([]))),
    ]
}
