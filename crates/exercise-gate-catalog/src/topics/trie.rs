// crates/exercise-gate-catalog/src/topics/trie.rs
// ============================================================================
// Module: Trie Topic
// Description: Session adapter for the counting prefix tree.
// Purpose: Provide the `trie` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Words are counted with multiplicity: inserting a word twice and erasing
//! it once leaves one occurrence. Erasing an absent word is a no-op. The
//! recursive walk rejects words longer than [`MAX_RECURSION_DEPTH`](super::MAX_RECURSION_DEPTH)
//! characters as invalid input.

use exercise_gate_core::Callable;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::Contract;
use exercise_gate_core::Fixture;
use exercise_gate_core::Observation;
use exercise_gate_core::OperationSpec;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::Session;
use exercise_gate_core::ValueShape;
use exercise_gate_core::decode_args;
use exercise_gate_core::expect_no_args;
use serde_json::Value;
use serde_json::json;

use super::TopicDefinition;
use super::reply;
use super::run;
use super::sentinel_session;
use super::within_depth;
use super::yields;
use crate::structures::Trie;
use crate::structures::Walk;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "trie",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Session
// ============================================================================

/// Session over one trie.
struct TrieSession {
    /// Backing trie.
    trie: Trie,
    /// Walk the trie was built with.
    walk: Walk,
}

impl Session for TrieSession {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        let (word,): (String,) = decode_args(args)?;
        if self.walk == Walk::Recursive && within_depth(word.chars().count()).is_err() {
            return Ok(Observation::Rejected(RejectionKind::InvalidInput));
        }
        match op {
            "insert" => {
                self.trie.insert(&word);
                Ok(Observation::unit())
            }
            "erase" => {
                self.trie.erase(&word);
                Ok(Observation::unit())
            }
            "search" => reply(&self.trie.search(&word)),
            "starts_with" => reply(&self.trie.starts_with(&word)),
            "count_words_equal_to" => reply(&self.trie.count_words_equal_to(&word)),
            "count_words_starting_with" => reply(&self.trie.count_words_starting_with(&word)),
            _ => Err(CandidateFault::unsupported_operation(op)),
        }
    }
}

/// Constructor for sessions walking with `walk`.
fn session(walk: Walk) -> Callable {
    Callable::stateful(move |init| {
        expect_no_args(init)?;
        Ok(Box::new(TrieSession {
            trie: Trie::with_walk(walk),
            walk,
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract; every operation takes one word.
fn contract() -> Contract {
    let word = || vec![ValueShape::Text];
    Contract::stateful(DEFINITION.id, Vec::new())
        .with_operation("insert", OperationSpec::new(word(), ValueShape::Any))
        .with_operation("erase", OperationSpec::new(word(), ValueShape::Any))
        .with_operation("search", OperationSpec::new(word(), ValueShape::Bool))
        .with_operation("starts_with", OperationSpec::new(word(), ValueShape::Bool))
        .with_operation("count_words_equal_to", OperationSpec::new(word(), ValueShape::Int))
        .with_operation("count_words_starting_with", OperationSpec::new(word(), ValueShape::Int))
}

/// Stub whose every operation answers `false`.
fn stub() -> Callable {
    sentinel_session(Observation::Value(json!(false)))
}

/// Iterative walk variant.
fn iterative_candidate() -> Callable {
    session(Walk::Iterative)
}

/// Recursive walk variant.
fn recursive_candidate() -> Callable {
    session(Walk::Recursive)
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in scripts.
fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture::script(Vec::new(), vec![
            run("insert", json!("apple")),
            yields("search", json!("apple"), json!(true)),
            yields("search", json!("app"), json!(false)),
            yields("starts_with", json!("app"), json!(true)),
            run("insert", json!("app")),
            yields("search", json!("app"), json!(true)),
        ]),
        Fixture::script(Vec::new(), vec![
            run("insert", json!("apple")),
            run("insert", json!("apple")),
            run("insert", json!("apps")),
            yields("count_words_equal_to", json!("apple"), json!(2)),
            yields("count_words_starting_with", json!("app"), json!(3)),
            run("erase", json!("apple")),
            yields("count_words_equal_to", json!("apple"), json!(1)),
            yields("count_words_starting_with", json!("app"), json!(2)),
        ]),
        Fixture::script(Vec::new(), vec![
            run("insert", json!("car")),
            run("erase", json!("cat")),
            run("erase", json!("ca")),
            yields("count_words_equal_to", json!("car"), json!(1)),
            run("erase", json!("car")),
            yields("search", json!("car"), json!(false)),
            yields("starts_with", json!("c"), json!(false)),
        ]),
        Fixture::script(Vec::new(), vec![
            yields("search", json!(""), json!(false)),
            yields("starts_with", json!(""), json!(false)),
            run("insert", json!("")),
            yields("search", json!(""), json!(true)),
            yields("count_words_starting_with", json!(""), json!(1)),
        ]),
    ]
}
