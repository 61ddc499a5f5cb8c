// crates/exercise-gate-catalog/src/topics/ring_buffer.rs
// ============================================================================
// Module: Ring Buffer Topic
// Description: Session adapter for the overwriting ring buffer.
// Purpose: Provide the `ring-buffer` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Constructed with a capacity. `enqueue` overwrites the oldest element when
//! full and never rejects.

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
use super::queue::capacity;
use super::reply;
use super::reply_or;
use super::run;
use super::sentinel_session;
use super::yields;
use crate::structures::RingBuffer;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "ring-buffer",
    contract,
    fixtures,
    stub,
    solutions: &[("array", array_candidate)],
};

// ============================================================================
// SECTION: Session
// ============================================================================

/// Session over one ring buffer.
struct RingSession {
    /// Backing buffer.
    buffer: RingBuffer<i64>,
}

impl Session for RingSession {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "enqueue" => {
                let (value,): (i64,) = decode_args(args)?;
                self.buffer.enqueue(value);
                Ok(Observation::unit())
            }
            "dequeue" => {
                expect_no_args(args)?;
                reply_or(self.buffer.dequeue(), RejectionKind::Empty)
            }
            "is_empty" => {
                expect_no_args(args)?;
                reply(&self.buffer.is_empty())
            }
            "is_full" => {
                expect_no_args(args)?;
                reply(&self.buffer.is_full())
            }
            "count" => {
                expect_no_args(args)?;
                reply(&self.buffer.count())
            }
            _ => Err(CandidateFault::unsupported_operation(op)),
        }
    }
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::stateful(DEFINITION.id, vec![ValueShape::Int])
        .with_operation("enqueue", OperationSpec::new(vec![ValueShape::Int], ValueShape::Any))
        .with_operation("dequeue", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("is_empty", OperationSpec::new(Vec::new(), ValueShape::Bool))
        .with_operation("is_full", OperationSpec::new(Vec::new(), ValueShape::Bool))
        .with_operation("count", OperationSpec::new(Vec::new(), ValueShape::Int))
}

/// Stub whose every operation answers `empty`.
fn stub() -> Callable {
    sentinel_session(Observation::Rejected(RejectionKind::Empty))
}

/// Array variant.
fn array_candidate() -> Callable {
    Callable::stateful(|init| {
        Ok(Box::new(RingSession {
            buffer: RingBuffer::with_capacity(capacity(init)?),
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in scripts.
fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture::script(vec![json!(3)], vec![
            run("enqueue", json!([1])),
            run("enqueue", json!([2])),
            run("enqueue", json!([3])),
            yields("dequeue", Value::Null, json!(1)),
            yields("dequeue", Value::Null, json!(2)),
            yields("dequeue", Value::Null, json!(3)),
            check("dequeue", Value::Null, Expected::empty()),
        ]),
        Fixture::script(vec![json!(3)], vec![
            run("enqueue", json!([1])),
            run("enqueue", json!([2])),
            run("enqueue", json!([3])),
            run("enqueue", json!([4])),
            yields("dequeue", Value::Null, json!(2)),
            yields("dequeue", Value::Null, json!(3)),
            yields("dequeue", Value::Null, json!(4)),
        ]),
        Fixture::script(vec![json!(3)], vec![
            run("enqueue", json!([1])),
            run("enqueue", json!([2])),
            run("enqueue", json!([3])),
            run("enqueue", json!([4])),
            yields("dequeue", Value::Null, json!(2)),
            run("enqueue", json!([5])),
            yields("dequeue", Value::Null, json!(3)),
            yields("dequeue", Value::Null, json!(4)),
            yields("dequeue", Value::Null, json!(5)),
            yields("is_empty", Value::Null, json!(true)),
        ]),
        Fixture::script(vec![json!(3)], vec![
            yields("is_empty", Value::Null, json!(true)),
            yields("is_full", Value::Null, json!(false)),
            run("enqueue", json!([1])),
            yields("count", Value::Null, json!(1)),
            yields("is_empty", Value::Null, json!(false)),
            yields("is_full", Value::Null, json!(false)),
            run("enqueue", json!([2])),
            run("enqueue", json!([3])),
            yields("is_full", Value::Null, json!(true)),
            run("dequeue", Value::Null),
            yields("is_full", Value::Null, json!(false)),
            yields("count", Value::Null, json!(2)),
        ]),
    ]
}
