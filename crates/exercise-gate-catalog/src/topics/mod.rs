// crates/exercise-gate-catalog/src/topics/mod.rs
// ============================================================================
// Module: Topic Catalog
// Description: Built-in exercise topics and shared adapter helpers.
// Purpose: Describe each topic as contract, stub, solutions, and fixtures.
// Dependencies: exercise-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Every topic module exposes a [`TopicDefinition`]: a contract builder, a
//! fixture builder, a stub that always answers with a fixed sentinel, and
//! one or more solution variants. Native algorithms are public functions on
//! plain Rust types; the `Callable` wrappers decode semantic values into
//! those types and encode results back.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod articulation_points;
pub mod binary_search;
pub mod binary_tree_traversal;
pub mod dijkstra_list;
pub mod graph_list_bfs;
pub mod graph_list_dfs;
pub mod hamiltonian_cycle;
pub mod knapsack_01;
pub mod knapsack_fractional;
pub mod kruskal;
pub mod linear_search;
pub mod lru_cache;
pub mod merge_sort;
pub mod min_heap;
pub mod queue;
pub mod quick_sort;
pub mod ring_buffer;
pub mod stack;
pub mod topological_sort;
pub mod trie;
pub mod two_sum;

// ============================================================================
// SECTION: Imports
// ============================================================================

use exercise_gate_core::Callable;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::Observation;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::Session;
use exercise_gate_core::Step;
use exercise_gate_core::encode_value;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Definitions
// ============================================================================

/// Builder for a solution variant, paired with its variant name.
pub type SolutionEntry = (&'static str, fn() -> Callable);

/// Static description of one built-in topic.
#[derive(Debug, Clone, Copy)]
pub struct TopicDefinition {
    /// Topic identifier.
    pub id: &'static str,
    /// Contract builder.
    pub contract: fn() -> Contract,
    /// Built-in fixture list.
    pub fixtures: fn() -> Vec<Fixture>,
    /// Sentinel stub.
    pub stub: fn() -> Callable,
    /// Solution variants in registration order.
    pub solutions: &'static [SolutionEntry],
}

/// Every built-in topic.
pub const ALL: &[TopicDefinition] = &[
    articulation_points::DEFINITION,
    binary_search::DEFINITION,
    binary_tree_traversal::DEFINITION,
    dijkstra_list::DEFINITION,
    graph_list_bfs::DEFINITION,
    graph_list_dfs::DEFINITION,
    hamiltonian_cycle::DEFINITION,
    knapsack_01::DEFINITION,
    knapsack_fractional::DEFINITION,
    kruskal::DEFINITION,
    linear_search::DEFINITION,
    lru_cache::DEFINITION,
    merge_sort::DEFINITION,
    min_heap::DEFINITION,
    queue::DEFINITION,
    quick_sort::DEFINITION,
    ring_buffer::DEFINITION,
    stack::DEFINITION,
    topological_sort::DEFINITION,
    trie::DEFINITION,
    two_sum::DEFINITION,
];

/// Looks up a built-in topic by identifier.
#[must_use]
pub fn find(topic_id: &str) -> Option<&'static TopicDefinition> {
    ALL.iter().find(|definition| definition.id == topic_id)
}

// ============================================================================
// SECTION: Stubs
// ============================================================================

/// Pure stub that ignores its inputs and always returns `sentinel`.
pub(crate) fn sentinel(sentinel: Value) -> Callable {
    Callable::pure(move |_| Ok(Observation::Value(sentinel.clone())))
}

/// Pure stub that always reports `kind`.
pub(crate) fn absent(kind: RejectionKind) -> Callable {
    Callable::pure(move |_| Ok(Observation::Rejected(kind)))
}

/// Session that answers every operation with the same observation.
struct SentinelSession {
    /// Fixed reply.
    reply: Observation,
}

impl Session for SentinelSession {
    fn apply(&mut self, _op: &str, _args: &[Value]) -> Result<Observation, CandidateFault> {
        Ok(self.reply.clone())
    }
}

/// Stateful stub whose sessions answer every operation with `reply`.
pub(crate) fn sentinel_session(reply: Observation) -> Callable {
    Callable::stateful(move |_| {
        Ok(Box::new(SentinelSession {
            reply: reply.clone(),
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Adapter Helpers
// ============================================================================

/// Encodes a present value.
pub(crate) fn reply<R: Serialize + ?Sized>(value: &R) -> Result<Observation, CandidateFault> {
    encode_value(value).map(Observation::Value)
}

/// Encodes an optional value, reporting `kind` when absent.
pub(crate) fn reply_or<R: Serialize>(
    value: Option<R>,
    kind: RejectionKind,
) -> Result<Observation, CandidateFault> {
    value.map_or(Ok(Observation::Rejected(kind)), |value| reply(&value))
}

/// Deepest call chain a recursive variant may build before rejecting its input.
pub const MAX_RECURSION_DEPTH: usize = 10_000;

/// Rejects an input whose recursion depth can reach `depth` frames when that
/// exceeds [`MAX_RECURSION_DEPTH`].
pub(crate) const fn within_depth(depth: usize) -> Result<(), RejectionKind> {
    if depth > MAX_RECURSION_DEPTH { Err(RejectionKind::InvalidInput) } else { Ok(()) }
}

/// Converts a semantic integer into an index or count.
pub(crate) fn index(value: i64) -> Result<usize, RejectionKind> {
    usize::try_from(value).map_err(|_| RejectionKind::InvalidInput)
}

/// Converts a semantic integer into a vertex of a graph with `count` vertices.
pub(crate) fn vertex(value: i64, count: usize) -> Result<usize, RejectionKind> {
    index(value).and_then(|vertex| {
        if vertex < count { Ok(vertex) } else { Err(RejectionKind::InvalidInput) }
    })
}

// ============================================================================
// SECTION: Fixture Helpers
// ============================================================================

/// Call fixture from a JSON array of positional inputs.
pub(crate) fn call(inputs: Value, expected: Expected) -> Fixture {
    Fixture::call(positional(inputs), expected)
}

/// Script step whose result is not checked.
pub(crate) fn run(op: &str, args: Value) -> Step {
    Step::run(op, positional(args))
}

/// Script step whose result must match `expected`.
pub(crate) fn check(op: &str, args: Value, expected: Expected) -> Step {
    Step::expect(op, positional(args), expected)
}

/// Script step expecting a value.
pub(crate) fn yields(op: &str, args: Value, expected: Value) -> Step {
    check(op, args, Expected::value(expected))
}

/// Splits a JSON array into positional values.
fn positional(values: Value) -> Vec<Value> {
    match values {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}
