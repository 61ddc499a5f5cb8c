// crates/exercise-gate-catalog/tests/deep_inputs.rs
// ============================================================================
// Module: Deep Input Tests
// Description: Large inputs sent to the recursive variants.
// ============================================================================
//! ## Overview
//! Feeds each recursive variant an input deep enough to exhaust a default
//! thread stack. Variants that recurse logarithmically must still pass. The
//! rest must answer `invalid_input` above [`MAX_RECURSION_DEPTH`] and the
//! right value at the limit.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::time::Duration;

use exercise_gate_catalog::builtin_registry;
use exercise_gate_catalog::topics;
use exercise_gate_catalog::topics::MAX_RECURSION_DEPTH;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::Outcome;
use exercise_gate_core::OutcomeStatus;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::Step;
use exercise_gate_core::Verifier;
use exercise_gate_core::VerifierConfig;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Verifies one fixture against a built-in variant.
fn verify(topic: &str, variant: &str, fixture: &Fixture) -> Outcome {
    let registry = builtin_registry().expect("registry");
    let candidate = registry
        .list(topic)
        .find(|candidate| candidate.variant_name.as_str() == variant)
        .unwrap_or_else(|| panic!("missing {topic}/{variant}"));
    let contract = (topics::find(topic).expect("topic").contract)();
    let verifier = Verifier::new(VerifierConfig {
        fixture_timeout: Duration::from_secs(60),
    });
    verifier.verify_fixture(&contract, candidate, 0, fixture)
}

fn assert_passes(topic: &str, variant: &str, fixture: &Fixture) {
    let outcome = verify(topic, variant, fixture);
    assert_eq!(outcome.status, OutcomeStatus::Pass, "{topic}/{variant}: {outcome:?}");
}

fn too_deep() -> Expected {
    Expected::Rejected(RejectionKind::InvalidInput)
}

/// Directed path `v0 -> v1 -> ...` keyed by string labels.
fn labelled_path(count: usize) -> Value {
    let graph: serde_json::Map<String, Value> = (0 .. count)
        .map(|vertex| {
            let next: Vec<String> =
                (vertex + 1 < count).then(|| format!("v{}", vertex + 1)).into_iter().collect();
            (format!("v{vertex}"), json!(next))
        })
        .collect();
    Value::Object(graph)
}

/// Undirected path adjacency over `0 .. count`.
fn path_adjacency(count: usize) -> Value {
    let rows: Vec<Vec<usize>> = (0 .. count)
        .map(|vertex| {
            let mut row = Vec::new();
            if vertex > 0 {
                row.push(vertex - 1);
            }
            if vertex + 1 < count {
                row.push(vertex + 1);
            }
            row
        })
        .collect();
    json!(rows)
}

/// Level-order encoding of a tree where every node only has a right child.
fn right_skewed(count: usize) -> Value {
    let mut levels = Vec::with_capacity(count * 2);
    for value in 1 ..= count {
        if value > 1 {
            levels.push(Value::Null);
        }
        levels.push(json!(value));
    }
    Value::Array(levels)
}

// ============================================================================
// SECTION: Restructured Recursion
// ============================================================================

/// Recursive linear search splits its range, so millions of items stay shallow.
#[test]
fn recursive_linear_search_handles_millions() {
    let count = 2_000_000_i64;
    let items: Vec<i64> = (0 .. count).collect();
    let fixture =
        Fixture::call(vec![json!(items), json!(count - 1)], Expected::value(json!(count - 1)));
    assert_passes("linear-search", "recursive", &fixture);
}

/// Recursive quick sort recurses on the smaller side of each partition.
#[test]
fn recursive_quick_sort_handles_presorted_input() {
    let ascending: Vec<i64> = (0 .. 12_000).collect();
    let descending: Vec<i64> = ascending.iter().rev().copied().collect();
    for input in [&ascending, &descending] {
        let fixture = Fixture::call(vec![json!(input)], Expected::value(json!(ascending)));
        assert_passes("quick-sort", "recursive", &fixture);
    }
}

// ============================================================================
// SECTION: Depth Limit
// ============================================================================

/// Graph walks reject graphs with more vertices than the recursion limit.
#[test]
fn recursive_graph_walks_reject_oversized_graphs() {
    let graph = labelled_path(MAX_RECURSION_DEPTH + 1);
    let fixture = Fixture::call(vec![graph, json!("v0")], too_deep());
    assert_passes("graph-list-dfs", "recursive", &fixture);
    assert_passes("graph-list-bfs", "recursive", &fixture);
}

/// Depth-first walk at the limit still visits the whole path.
#[test]
fn recursive_dfs_walks_path_at_limit() {
    let order: Vec<String> =
        (0 .. MAX_RECURSION_DEPTH).map(|vertex| format!("v{vertex}")).collect();
    let fixture = Fixture::call(
        vec![labelled_path(MAX_RECURSION_DEPTH), json!("v0")],
        Expected::value(json!(order)),
    );
    assert_passes("graph-list-dfs", "recursive", &fixture);
}

/// Recursive articulation points reject long paths and solve them at the limit.
#[test]
fn recursive_articulation_points_bounds_depth() {
    let over = Fixture::call(vec![path_adjacency(MAX_RECURSION_DEPTH + 1)], too_deep());
    assert_passes("articulation-points", "recursive", &over);

    let cuts: Vec<usize> = (1 .. MAX_RECURSION_DEPTH - 1).collect();
    let at = Fixture::call(
        vec![path_adjacency(MAX_RECURSION_DEPTH)],
        Expected::value(json!(cuts)),
    );
    assert_passes("articulation-points", "recursive", &at);
}

/// Depth-first topological sort rejects long chains.
#[test]
fn dfs_topological_sort_rejects_long_chains() {
    let count = MAX_RECURSION_DEPTH + 1;
    let edges: Vec<[usize; 2]> = (1 .. count).map(|vertex| [vertex - 1, vertex]).collect();
    let fixture = Fixture::call(vec![json!(count), json!(edges)], too_deep());
    assert_passes("topological-sort", "dfs", &fixture);
}

/// Memoized knapsack bounds the item count it recurses over.
#[test]
fn memoized_knapsack_bounds_item_count() {
    let over = vec![1_i64; MAX_RECURSION_DEPTH + 1];
    let fixture = Fixture::call(vec![json!(over), json!(over), json!(5)], too_deep());
    assert_passes("knapsack-0-1", "memoized", &fixture);

    let at = vec![1_i64; MAX_RECURSION_DEPTH];
    let fixture = Fixture::call(vec![json!(at), json!(at), json!(5)], Expected::value(json!(5)));
    assert_passes("knapsack-0-1", "memoized", &fixture);
}

/// Recursive traversal rejects trees with more nodes than the limit.
#[test]
fn recursive_traversal_bounds_skewed_trees() {
    let over = Fixture::call(vec![right_skewed(MAX_RECURSION_DEPTH + 1), json!("in")], too_deep());
    assert_passes("binary-tree-traversal", "recursive", &over);

    let values: Vec<usize> = (1 ..= MAX_RECURSION_DEPTH).collect();
    let at = Fixture::call(
        vec![right_skewed(MAX_RECURSION_DEPTH), json!("in")],
        Expected::value(json!(values)),
    );
    assert_passes("binary-tree-traversal", "recursive", &at);
}

/// The recursive trie walk refuses words longer than the limit.
#[test]
fn recursive_trie_rejects_long_words() {
    let word = "a".repeat(MAX_RECURSION_DEPTH + 1);
    let fixture = Fixture::script(Vec::new(), vec![
        Step::expect("insert", vec![json!(word)], too_deep()),
        Step::expect("search", vec![json!("a")], Expected::value(json!(false))),
    ]);
    assert_passes("trie", "recursive", &fixture);
    let iterative = Fixture::script(Vec::new(), vec![
        Step::run("insert", vec![json!(word)]),
        Step::expect("starts_with", vec![json!("aaa")], Expected::value(json!(true))),
    ]);
    assert_passes("trie", "iterative", &iterative);
}
