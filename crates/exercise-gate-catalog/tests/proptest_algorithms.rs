// crates/exercise-gate-catalog/tests/proptest_algorithms.rs
// ============================================================================
// Module: Algorithm Property-Based Tests
// Description: Cross-checks between variants of the same algorithm.
// Purpose: Catch divergence between variants over random inputs.
// ============================================================================

//! Property-based tests for native algorithm variants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use exercise_gate_catalog::structures::MinHeap;
use exercise_gate_catalog::structures::Sift;
use exercise_gate_catalog::topics::articulation_points;
use exercise_gate_catalog::topics::binary_search;
use exercise_gate_catalog::topics::knapsack_01;
use exercise_gate_catalog::topics::knapsack_01::Item;
use exercise_gate_catalog::topics::merge_sort;
use exercise_gate_catalog::topics::quick_sort;
use exercise_gate_catalog::topics::topological_sort;
use exercise_gate_catalog::topics::two_sum;
use proptest::prelude::*;

/// Simple undirected graphs with symmetric adjacency lists.
fn undirected_graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1_usize .. 12).prop_flat_map(|count| {
        proptest::collection::vec((0 .. count, 0 .. count), 0 .. 24).prop_map(move |pairs| {
            let mut graph = vec![Vec::new(); count];
            for (u, v) in pairs {
                if u != v && !graph[u].contains(&v) {
                    graph[u].push(v);
                    graph[v].push(u);
                }
            }
            graph
        })
    })
}

/// Acyclic edge sets where every edge points to a higher vertex.
fn forward_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize .. 10).prop_flat_map(|count| {
        let edges = proptest::collection::vec((0 .. count, 0 .. count), 0 .. 20)
            .prop_map(|pairs| pairs.into_iter().filter(|(u, v)| u < v).collect::<Vec<_>>());
        (Just(count), edges)
    })
}

proptest! {
    #[test]
    fn binary_search_variants_agree(
        mut items in proptest::collection::vec(-1000_i64 .. 1000, 0 .. 64),
        target in -1000_i64 .. 1000,
    ) {
        items.sort_unstable();
        items.dedup();
        let iterative = binary_search::iterative(&items, target);
        prop_assert_eq!(iterative, binary_search::recursive(&items, target));
        prop_assert_eq!(iterative, items.binary_search(&target).ok());
    }

    #[test]
    fn two_sum_pairs_are_valid(
        items in proptest::collection::vec(-100_i64 .. 100, 0 .. 32),
        target in -200_i64 .. 200,
    ) {
        let fast = two_sum::hash_map(&items, target);
        let slow = two_sum::brute_force(&items, target);
        prop_assert_eq!(fast.is_some(), slow.is_some());
        for [i, j] in fast.into_iter().chain(slow) {
            prop_assert!(i < j);
            prop_assert_eq!(items[i] + items[j], target);
        }
    }

    #[test]
    fn sorts_match_std(items in proptest::collection::vec(any::<i64>(), 0 .. 128)) {
        let mut expected = items.clone();
        expected.sort_unstable();
        prop_assert_eq!(&merge_sort::top_down(&items), &expected);
        prop_assert_eq!(&merge_sort::bottom_up(&items), &expected);
        let mut recursive = items.clone();
        quick_sort::recursive(&mut recursive);
        prop_assert_eq!(&recursive, &expected);
        let mut iterative = items;
        quick_sort::iterative(&mut iterative);
        prop_assert_eq!(&iterative, &expected);
    }

    #[test]
    fn articulation_variants_agree(graph in undirected_graph()) {
        prop_assert_eq!(
            articulation_points::iterative(&graph),
            articulation_points::recursive(&graph)
        );
    }

    #[test]
    fn topological_orders_are_valid((count, edges) in forward_edges()) {
        let dfs = topological_sort::dfs(count, &edges).expect("forward edges are acyclic");
        let kahn = topological_sort::kahn(count, &edges).expect("forward edges are acyclic");
        prop_assert!(topological_sort::is_valid_order(count, &edges, &dfs));
        prop_assert!(topological_sort::is_valid_order(count, &edges, &kahn));
    }

    #[test]
    fn knapsack_variants_agree(
        items in proptest::collection::vec((0_usize .. 20, 0_i64 .. 100), 0 .. 12),
        capacity in 0_usize .. 60,
    ) {
        let items: Vec<Item> =
            items.into_iter().map(|(weight, value)| Item { weight, value }).collect();
        prop_assert_eq!(
            knapsack_01::memoized(&items, capacity),
            knapsack_01::tabulated(&items, capacity)
        );
    }

    #[test]
    fn heaps_drain_sorted(items in proptest::collection::vec(any::<i32>(), 0 .. 64)) {
        let mut expected = items.clone();
        expected.sort_unstable();
        for sift in [Sift::Iterative, Sift::Recursive] {
            let mut heap = MinHeap::with_sift(sift);
            for item in &items {
                heap.insert(*item);
            }
            let drained: Vec<i32> = std::iter::from_fn(|| heap.extract_min()).collect();
            prop_assert_eq!(&drained, &expected);
        }
    }
}
