// crates/exercise-gate-catalog/src/tests.rs
// ============================================================================
// Module: Catalog Test Lint Configuration
// Description: Shared test-only lint relaxations and container unit checks.
// Purpose: Allow panic-based assertions in tests; cover the containers.
// Dependencies: exercise-gate-catalog
// ============================================================================

//! ## Overview
//! Unit checks for the generic containers behind the stateful topics and
//! for the native algorithms that topic adapters wrap.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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

use crate::structures::LinkedQueue;
use crate::structures::LinkedStack;
use crate::structures::LruCache;
use crate::structures::MinHeap;
use crate::structures::Queue;
use crate::structures::RingBuffer;
use crate::structures::Sift;
use crate::structures::Stack;
use crate::structures::Trie;
use crate::structures::Walk;
use crate::topics::binary_tree_traversal;
use crate::topics::binary_tree_traversal::Order;
use crate::topics::binary_tree_traversal::Tree;
use crate::topics::kruskal::DisjointSets;
use crate::topics::topological_sort;

// ============================================================================
// SECTION: Stacks
// ============================================================================

/// Both stacks are LIFO and report emptiness.
#[test]
fn stacks_are_lifo() {
    let mut vec_stack = Stack::new();
    let mut linked = LinkedStack::new();
    for value in 1 ..= 3 {
        vec_stack.push(value);
        linked.push(value);
    }
    assert_eq!(vec_stack.peek(), Some(&3));
    assert_eq!(linked.peek(), Some(&3));
    assert_eq!(linked.len(), 3);
    for expected in (1 ..= 3).rev() {
        assert_eq!(vec_stack.pop(), Some(expected));
        assert_eq!(linked.pop(), Some(expected));
    }
    assert!(vec_stack.is_empty());
    assert!(linked.is_empty());
    assert_eq!(linked.pop(), None);
}

/// Dropping a long linked stack does not recurse per node.
#[test]
fn linked_stack_drops_long_chains() {
    let mut linked = LinkedStack::new();
    for value in 0 .. 200_000 {
        linked.push(value);
    }
    drop(linked);
}

// ============================================================================
// SECTION: Queues
// ============================================================================

/// The array queue wraps around and returns rejected elements when full.
#[test]
fn array_queue_wraps_and_bounds() {
    let mut queue = Queue::with_capacity(2);
    assert_eq!(queue.enqueue(1), Ok(()));
    assert_eq!(queue.enqueue(2), Ok(()));
    assert_eq!(queue.enqueue(3), Err(3));
    assert!(queue.is_full());
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.enqueue(4), Ok(()));
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

/// The linked queue reuses freed slots and keeps FIFO order.
#[test]
fn linked_queue_reuses_slots() {
    let mut queue = LinkedQueue::with_capacity(3);
    for round in 0 .. 10 {
        assert_eq!(queue.enqueue(round), Ok(()));
        assert_eq!(queue.enqueue(round + 100), Ok(()));
        assert_eq!(queue.dequeue(), Some(round));
        assert_eq!(queue.dequeue(), Some(round + 100));
    }
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
}

/// A zero-capacity queue is always full.
#[test]
fn zero_capacity_queues_reject_everything() {
    let mut array = Queue::with_capacity(0);
    let mut linked = LinkedQueue::with_capacity(0);
    assert_eq!(array.enqueue(1), Err(1));
    assert_eq!(linked.enqueue(1), Err(1));
    assert!(array.is_full() && array.is_empty());
    assert!(linked.is_full() && linked.is_empty());
}

// ============================================================================
// SECTION: Ring Buffer
// ============================================================================

/// Writing past capacity evicts the oldest element.
#[test]
fn ring_buffer_overwrites_oldest() {
    let mut buffer = RingBuffer::with_capacity(2);
    assert_eq!(buffer.enqueue(1), None);
    assert_eq!(buffer.enqueue(2), None);
    assert_eq!(buffer.enqueue(3), Some(1));
    assert_eq!(buffer.count(), 2);
    assert_eq!(buffer.dequeue(), Some(2));
    assert_eq!(buffer.dequeue(), Some(3));
    assert_eq!(buffer.dequeue(), None);
}

/// A zero-capacity ring buffer evicts immediately.
#[test]
fn ring_buffer_zero_capacity() {
    let mut buffer = RingBuffer::with_capacity(0);
    assert_eq!(buffer.enqueue(7), Some(7));
    assert!(buffer.is_empty());
    assert_eq!(buffer.dequeue(), None);
}

// ============================================================================
// SECTION: Min-Heap
// ============================================================================

/// Both sift strategies extract in ascending order, duplicates included.
#[test]
fn heaps_extract_in_order() {
    for sift in [Sift::Iterative, Sift::Recursive] {
        let mut heap = MinHeap::with_sift(sift);
        for value in [5, 3, 9, 1, 3, 8, 2, 7] {
            heap.insert(value);
        }
        assert_eq!(heap.peek(), Some(&1));
        let mut drained = Vec::new();
        while let Some(value) = heap.extract_min() {
            drained.push(value);
        }
        assert_eq!(drained, vec![1, 2, 3, 3, 5, 7, 8, 9]);
        assert!(heap.is_empty());
    }
}

// ============================================================================
// SECTION: Trie
// ============================================================================

/// Both walks count words with multiplicity and ignore absent erasures.
#[test]
fn tries_count_with_multiplicity() {
    for walk in [Walk::Iterative, Walk::Recursive] {
        let mut trie = Trie::with_walk(walk);
        trie.insert("apple");
        trie.insert("apple");
        trie.insert("apps");
        trie.erase("ape");
        assert_eq!(trie.count_words_equal_to("apple"), 2);
        assert_eq!(trie.count_words_starting_with("app"), 3);
        trie.erase("apple");
        assert_eq!(trie.count_words_equal_to("apple"), 1);
        assert!(trie.search("apps"));
        assert!(!trie.search("app"));
        assert!(trie.starts_with("ap"));
        assert!(!trie.starts_with("b"));
    }
}

/// Unicode words are stored per character.
#[test]
fn trie_handles_unicode() {
    let mut trie = Trie::new();
    trie.insert("über");
    assert!(trie.starts_with("ü"));
    assert_eq!(trie.count_words_starting_with("üb"), 1);
}

// ============================================================================
// SECTION: LRU Cache
// ============================================================================

/// Reads refresh recency so the other entry is evicted.
#[test]
fn lru_get_refreshes_recency() {
    let mut cache = LruCache::with_capacity(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(&1));
    cache.put("c", 3);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.get(&"c"), Some(&3));
    assert_eq!(cache.len(), 2);
}

/// Updating an existing key does not evict.
#[test]
fn lru_update_keeps_size() {
    let mut cache = LruCache::with_capacity(2);
    cache.put(1, 1);
    cache.put(2, 2);
    cache.put(1, 10);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&1), Some(&10));
    assert_eq!(cache.get(&2), Some(&2));
}

/// A zero-capacity cache stores nothing.
#[test]
fn lru_zero_capacity() {
    let mut cache = LruCache::with_capacity(0);
    cache.put(1, 1);
    assert!(cache.is_empty());
    assert_eq!(cache.get(&1), None);
}

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Level-order decoding skips children of absent nodes.
#[test]
fn tree_decoding_skips_absent_children() {
    let tree = Tree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
    assert_eq!(binary_tree_traversal::recursive(&tree, Order::In), vec![1, 3, 2]);
    assert_eq!(binary_tree_traversal::iterative(&tree, Order::In), vec![1, 3, 2]);
    assert_eq!(binary_tree_traversal::iterative(&tree, Order::Post), vec![3, 2, 1]);
}

/// Union-find joins each pair once.
#[test]
fn disjoint_sets_detect_cycles() {
    let mut sets = DisjointSets::new(4);
    assert!(sets.union(0, 1));
    assert!(sets.union(2, 3));
    assert!(sets.union(1, 3));
    assert!(!sets.union(0, 2));
    assert_eq!(sets.find(0), sets.find(3));
}

/// Order validation rejects duplicates, omissions, and violated edges.
#[test]
fn order_validation_is_strict() {
    let edges = [(0, 1), (1, 2)];
    assert!(topological_sort::is_valid_order(3, &edges, &[0, 1, 2]));
    assert!(!topological_sort::is_valid_order(3, &edges, &[0, 2, 1]));
    assert!(!topological_sort::is_valid_order(3, &edges, &[0, 1]));
    assert!(!topological_sort::is_valid_order(3, &edges, &[0, 1, 1]));
    assert!(!topological_sort::is_valid_order(3, &edges, &[0, 1, 5]));
}
