// crates/exercise-gate-catalog/src/topics/stack.rs
// ============================================================================
// Module: Stack Topic
// Description: Session adapters for the vector and linked-list stacks.
// Purpose: Provide the `stack` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Operations: `push(int)`, `pop() -> int`, `peek() -> int`,
//! `is_empty() -> bool`, `size() -> int`. Popping or peeking an empty stack
//! is an `empty` rejection.

use exercise_gate_core::Callable;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
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
use super::check;
use super::reply;
use super::reply_or;
use super::run;
use super::sentinel_session;
use super::yields;
use crate::structures::LinkedStack;
use crate::structures::Stack;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "stack",
    contract,
    fixtures,
    stub,
    solutions: &[("vec", vec_candidate), ("linked-list", linked_list_candidate)],
};

// ============================================================================
// SECTION: Sessions
// ============================================================================

/// Operations shared by both stack variants.
trait Lifo: Default {
    /// Pushes on top.
    fn push(&mut self, value: i64);
    /// Pops the top.
    fn pop(&mut self) -> Option<i64>;
    /// Reads the top.
    fn peek(&self) -> Option<i64>;
    /// Element count.
    fn len(&self) -> usize;
}

impl Lifo for Stack<i64> {
    fn push(&mut self, value: i64) {
        Self::push(self, value);
    }

    fn pop(&mut self) -> Option<i64> {
        Self::pop(self)
    }

    fn peek(&self) -> Option<i64> {
        Self::peek(self).copied()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl Lifo for LinkedStack<i64> {
    fn push(&mut self, value: i64) {
        Self::push(self, value);
    }

    fn pop(&mut self) -> Option<i64> {
        Self::pop(self)
    }

    fn peek(&self) -> Option<i64> {
        Self::peek(self).copied()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

/// Session over one stack instance.
struct StackSession<S> {
    /// Backing stack.
    stack: S,
}

impl<S: Lifo> Session for StackSession<S> {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "push" => {
                let (value,): (i64,) = decode_args(args)?;
                self.stack.push(value);
                Ok(Observation::unit())
            }
            "pop" => {
                expect_no_args(args)?;
                reply_or(self.stack.pop(), RejectionKind::Empty)
            }
            "peek" => {
                expect_no_args(args)?;
                reply_or(self.stack.peek(), RejectionKind::Empty)
            }
            "is_empty" => {
                expect_no_args(args)?;
                reply(&(self.stack.len() == 0))
            }
            "size" => {
                expect_no_args(args)?;
                reply(&self.stack.len())
            }
            _ => Err(CandidateFault::unsupported_operation(op)),
        }
    }
}

/// Constructor for a session over a fresh `S`.
fn session<S: Lifo + 'static>() -> Callable {
    Callable::stateful(|init| {
        expect_no_args(init)?;
        Ok(Box::new(StackSession {
            stack: S::default(),
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::stateful(DEFINITION.id, Vec::new())
        .with_operation("push", OperationSpec::new(vec![ValueShape::Int], ValueShape::Any))
        .with_operation("pop", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("peek", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("is_empty", OperationSpec::new(Vec::new(), ValueShape::Bool))
        .with_operation("size", OperationSpec::new(Vec::new(), ValueShape::Int))
}

/// Stub whose every operation answers `empty`.
fn stub() -> Callable {
    sentinel_session(Observation::Rejected(RejectionKind::Empty))
}

/// Vector-backed variant.
fn vec_candidate() -> Callable {
    session::<Stack<i64>>()
}

/// Linked-list variant.
fn linked_list_candidate() -> Callable {
    session::<LinkedStack<i64>>()
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in scripts.
fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture::script(Vec::new(), vec![
            run("push", json!([10])),
            run("push", json!([20])),
            yields("peek", Value::Null, json!(20)),
        ]),
        Fixture::script(Vec::new(), vec![
            run("push", json!([10])),
            run("push", json!([20])),
            yields("pop", Value::Null, json!(20)),
            yields("pop", Value::Null, json!(10)),
            check("pop", Value::Null, Expected::empty()),
        ]),
        Fixture::script(Vec::new(), vec![
            run("push", json!([10])),
            yields("peek", Value::Null, json!(10)),
            run("push", json!([20])),
            yields("peek", Value::Null, json!(20)),
            yields("size", Value::Null, json!(2)),
        ]),
        Fixture::script(Vec::new(), vec![
            yields("is_empty", Value::Null, json!(true)),
            run("push", json!([10])),
            yields("is_empty", Value::Null, json!(false)),
            run("pop", Value::Null),
            yields("is_empty", Value::Null, json!(true)),
        ]),
        Fixture::script(Vec::new(), vec![check("pop", Value::Null, Expected::empty())]),
        Fixture::script(Vec::new(), vec![check("peek", Value::Null, Expected::empty())]),
    ]
}
