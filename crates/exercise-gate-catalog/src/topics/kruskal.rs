// crates/exercise-gate-catalog/src/topics/kruskal.rs
// ============================================================================
// Module: Kruskal
// Description: Minimum spanning forest by ascending edge weight.
// Purpose: Provide the `kruskal` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(vertices: int, edges: seq<(int, int, int)>) -> seq<(int, int, int)>`:
//! the edges of a minimum spanning forest, each as given in the input,
//! compared as a set.

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
use super::index;
use super::sentinel;
use super::vertex;

/// Weighted undirected edge `(u, v, weight)`.
pub type Edge = (usize, usize, i64);

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "kruskal",
    contract,
    fixtures,
    stub,
    solutions: &[("union-find", union_find_candidate)],
};

// ============================================================================
// SECTION: Disjoint Sets
// ============================================================================

/// Union-find with path halving and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Parent per element.
    parent: Vec<usize>,
    /// Upper bound on tree height per root.
    rank: Vec<u8>,
}

impl DisjointSets {
    /// Creates `count` singleton sets.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0 .. count).collect(),
            rank: vec![0; count],
        }
    }

    /// Representative of the set containing `element`.
    pub fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            self.parent[element] = self.parent[self.parent[element]];
            element = self.parent[element];
        }
        element
    }

    /// Merges the sets of `a` and `b`; returns false when already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }
        true
    }
}

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Kruskal's algorithm; ties keep input order.
#[must_use]
pub fn minimum_spanning_forest(vertices: usize, edges: &[Edge]) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|&(_, _, weight)| weight);
    let mut sets = DisjointSets::new(vertices);
    sorted.into_iter().filter(|&(u, v, _)| sets.union(u, v)).collect()
}

/// Validates vertex count and edge endpoints.
fn validate(
    vertices: i64,
    edges: Vec<(i64, i64, i64)>,
) -> Result<(usize, Vec<Edge>), RejectionKind> {
    let count = index(vertices)?;
    let edges = edges
        .into_iter()
        .map(|(u, v, weight)| Ok((vertex(u, count)?, vertex(v, count)?, weight)))
        .collect::<Result<Vec<_>, RejectionKind>>()?;
    Ok((count, edges))
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract; the edge order is irrelevant.
fn contract() -> Contract {
    let edge = ValueShape::tuple([ValueShape::Int, ValueShape::Int, ValueShape::Int]);
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::Int, ValueShape::seq(edge.clone())],
        ValueShape::seq(edge),
    )
    .with_comparison(Comparison::Unordered)
}

/// Stub that selects no edges.
fn stub() -> Callable {
    sentinel(json!([]))
}

/// Union-find variant.
fn union_find_candidate() -> Callable {
    Callable::typed(|(vertices, edges): (i64, Vec<(i64, i64, i64)>)| {
        let (count, edges) = validate(vertices, edges)?;
        Ok::<_, RejectionKind>(minimum_spanning_forest(count, &edges))
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures; every expected forest is unique.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(
            json!([4, [[0, 1, 10], [0, 2, 6], [0, 3, 5], [1, 3, 15], [2, 3, 4]]]),
            Expected::value(json!([[2, 3, 4], [0, 3, 5], [0, 1, 10]])),
        ),
        call(
            json!([5, [[0, 1, 2], [0, 3, 6], [1, 2, 3], [1, 3, 8], [1, 4, 5], [2, 4, 7]]]),
            Expected::value(json!([[0, 1, 2], [1, 2, 3], [1, 4, 5], [0, 3, 6]])),
        ),
        call(json!([4, [[0, 1, 1], [2, 3, 2]]]), Expected::value(json!([[2, 3, 2], [0, 1, 1]]))),
        call(json!([3, []]), Expected::value(json!([]))),
    ]
}
