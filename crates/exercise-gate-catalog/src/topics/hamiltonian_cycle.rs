// crates/exercise-gate-catalog/src/topics/hamiltonian_cycle.rs
// ============================================================================
// Module: Hamiltonian Cycle
// Description: Backtracking search for a cycle through every vertex.
// Purpose: Provide the `hamiltonian-cycle` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(matrix: seq<seq<int>>) -> seq<int>`: the first Hamiltonian cycle found
//! from vertex 0, trying successors in ascending order, closed by repeating
//! vertex 0. A single vertex forms the trivial cycle `[0, 0]`. When no cycle
//! exists the result is a `not_found` rejection.

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
use super::within_depth;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "hamiltonian-cycle",
    contract,
    fixtures,
    stub,
    solutions: &[("backtracking", backtracking_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Finds a Hamiltonian cycle in a square boolean adjacency matrix.
#[must_use]
pub fn backtracking(matrix: &[Vec<bool>]) -> Option<Vec<usize>> {
    let count = matrix.len();
    match count {
        0 => return None,
        1 => return Some(vec![0, 0]),
        _ => {}
    }
    let mut path = Vec::with_capacity(count + 1);
    let mut used = vec![false; count];
    path.push(0);
    used[0] = true;
    if extend(matrix, &mut path, &mut used) {
        path.push(0);
        Some(path)
    } else {
        None
    }
}

/// Extends the partial path; returns true once it closes into a cycle.
fn extend(matrix: &[Vec<bool>], path: &mut Vec<usize>, used: &mut [bool]) -> bool {
    let Some(&last) = path.last() else {
        return false;
    };
    if path.len() == matrix.len() {
        return matrix[last][0];
    }
    for next in 1 .. matrix.len() {
        if !matrix[last][next] || used[next] {
            continue;
        }
        path.push(next);
        used[next] = true;
        if extend(matrix, path, used) {
            return true;
        }
        used[next] = false;
        path.pop();
    }
    false
}

/// Converts a 0/1 matrix into booleans; non-square input is invalid.
fn decode_matrix(rows: Vec<Vec<i64>>) -> Result<Vec<Vec<bool>>, RejectionKind> {
    let count = rows.len();
    rows.into_iter()
        .map(|row| {
            if row.len() == count {
                Ok(row.into_iter().map(|cell| cell != 0).collect())
            } else {
                Err(RejectionKind::InvalidInput)
            }
        })
        .collect()
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::seq(ValueShape::Int))],
        ValueShape::seq(ValueShape::Int),
    )
}

/// Stub that never finds a cycle.
fn stub() -> Callable {
    absent(RejectionKind::NotFound)
}

/// Backtracking variant.
fn backtracking_candidate() -> Callable {
    Callable::typed(|(rows,): (Vec<Vec<i64>>,)| {
        let matrix = decode_matrix(rows)?;
        within_depth(matrix.len())?;
        backtracking(&matrix).ok_or(RejectionKind::NotFound)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(
            json!([[
                [0, 1, 0, 1, 0],
                [1, 0, 1, 1, 1],
                [0, 1, 0, 0, 1],
                [1, 1, 0, 0, 1],
                [0, 1, 1, 1, 0]
            ]]),
            Expected::value(json!([0, 1, 2, 4, 3, 0])),
        ),
        call(
            json!([[[0, 1, 0, 0], [1, 0, 1, 0], [0, 1, 0, 1], [0, 0, 1, 0]]]),
            Expected::not_found(),
        ),
        call(json!([[[0]]]), Expected::value(json!([0, 0]))),
        call(json!([[[0, 1, 1], [1, 0, 1], [1, 1, 0]]]), Expected::value(json!([0, 1, 2, 0]))),
        call(json!([[]]), Expected::not_found()),
        call(json!([[[0, 1], [1]]]), Expected::Rejected(RejectionKind::InvalidInput)),
    ]
}
