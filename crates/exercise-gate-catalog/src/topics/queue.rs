// crates/exercise-gate-catalog/src/topics/queue.rs
// ============================================================================
// Module: Queue Topic
// Description: Session adapters for the bounded array and linked queues.
// Purpose: Provide the `queue` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Constructed with a capacity. Operations: `enqueue(int)`, `dequeue() -> int`,
//! `peek() -> int`, `is_empty() -> bool`, `is_full() -> bool`,
//! `size() -> int`. Enqueueing at capacity is a `full` rejection; reading an
//! empty queue is an `empty` rejection.

use exercise_gate_core::Callable;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::FaultKind;
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
use crate::structures::LinkedQueue;
use crate::structures::Queue;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "queue",
    contract,
    fixtures,
    stub,
    solutions: &[("array", array_candidate), ("linked-list", linked_list_candidate)],
};

// ============================================================================
// SECTION: Sessions
// ============================================================================

/// Operations shared by both queue variants.
trait Fifo {
    /// Empty queue bounded by `capacity`.
    fn bounded(capacity: usize) -> Self;
    /// Appends at the back; false when full.
    fn enqueue(&mut self, value: i64) -> bool;
    /// Removes the front.
    fn dequeue(&mut self) -> Option<i64>;
    /// Reads the front.
    fn peek(&self) -> Option<i64>;
    /// Element count.
    fn len(&self) -> usize;
    /// True at capacity.
    fn is_full(&self) -> bool;
}

impl Fifo for Queue<i64> {
    fn bounded(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn enqueue(&mut self, value: i64) -> bool {
        Self::enqueue(self, value).is_ok()
    }

    fn dequeue(&mut self) -> Option<i64> {
        Self::dequeue(self)
    }

    fn peek(&self) -> Option<i64> {
        Self::peek(self).copied()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_full(&self) -> bool {
        Self::is_full(self)
    }
}

impl Fifo for LinkedQueue<i64> {
    fn bounded(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn enqueue(&mut self, value: i64) -> bool {
        Self::enqueue(self, value).is_ok()
    }

    fn dequeue(&mut self) -> Option<i64> {
        Self::dequeue(self)
    }

    fn peek(&self) -> Option<i64> {
        Self::peek(self).copied()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_full(&self) -> bool {
        Self::is_full(self)
    }
}

/// Session over one queue instance.
struct QueueSession<Q> {
    /// Backing queue.
    queue: Q,
}

impl<Q: Fifo> Session for QueueSession<Q> {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "enqueue" => {
                let (value,): (i64,) = decode_args(args)?;
                if self.queue.enqueue(value) {
                    Ok(Observation::unit())
                } else {
                    Ok(Observation::Rejected(RejectionKind::Full))
                }
            }
            "dequeue" => {
                expect_no_args(args)?;
                reply_or(self.queue.dequeue(), RejectionKind::Empty)
            }
            "peek" => {
                expect_no_args(args)?;
                reply_or(self.queue.peek(), RejectionKind::Empty)
            }
            "is_empty" => {
                expect_no_args(args)?;
                reply(&(self.queue.len() == 0))
            }
            "is_full" => {
                expect_no_args(args)?;
                reply(&self.queue.is_full())
            }
            "size" => {
                expect_no_args(args)?;
                reply(&self.queue.len())
            }
            _ => Err(CandidateFault::unsupported_operation(op)),
        }
    }
}

/// Decodes a non-negative capacity constructor argument.
pub(crate) fn capacity(init: &[Value]) -> Result<usize, CandidateFault> {
    let (capacity,): (i64,) = decode_args(init)?;
    usize::try_from(capacity).map_err(|_| {
        CandidateFault::new(FaultKind::Decode, format!("capacity {capacity} is negative"))
    })
}

/// Constructor for a session over a fresh `Q`.
fn session<Q: Fifo + 'static>() -> Callable {
    Callable::stateful(|init| {
        Ok(Box::new(QueueSession {
            queue: Q::bounded(capacity(init)?),
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::stateful(DEFINITION.id, vec![ValueShape::Int])
        .with_operation("enqueue", OperationSpec::new(vec![ValueShape::Int], ValueShape::Any))
        .with_operation("dequeue", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("peek", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("is_empty", OperationSpec::new(Vec::new(), ValueShape::Bool))
        .with_operation("is_full", OperationSpec::new(Vec::new(), ValueShape::Bool))
        .with_operation("size", OperationSpec::new(Vec::new(), ValueShape::Int))
}

/// Stub whose every operation answers `empty`.
fn stub() -> Callable {
    sentinel_session(Observation::Rejected(RejectionKind::Empty))
}

/// Circular-array variant.
fn array_candidate() -> Callable {
    session::<Queue<i64>>()
}

/// Linked-list variant.
fn linked_list_candidate() -> Callable {
    session::<LinkedQueue<i64>>()
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in scripts.
fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture::script(vec![json!(5)], vec![
            run("enqueue", json!([10])),
            yields("peek", Value::Null, json!(10)),
        ]),
        Fixture::script(vec![json!(5)], vec![
            run("enqueue", json!([10])),
            yields("dequeue", Value::Null, json!(10)),
            yields("is_empty", Value::Null, json!(true)),
        ]),
        Fixture::script(vec![json!(5)], vec![
            run("enqueue", json!([10])),
            run("enqueue", json!([20])),
            yields("peek", Value::Null, json!(10)),
        ]),
        Fixture::script(vec![json!(5)], vec![
            yields("is_empty", Value::Null, json!(true)),
            run("enqueue", json!([10])),
            yields("is_empty", Value::Null, json!(false)),
        ]),
        Fixture::script(vec![json!(2)], vec![
            run("enqueue", json!([10])),
            run("enqueue", json!([20])),
            yields("is_full", Value::Null, json!(true)),
            check("enqueue", json!([30]), Expected::full()),
            yields("size", Value::Null, json!(2)),
        ]),
        Fixture::script(vec![json!(5)], vec![check("peek", Value::Null, Expected::empty())]),
        Fixture::script(vec![json!(5)], vec![check("dequeue", Value::Null, Expected::empty())]),
        Fixture::script(vec![json!(3)], vec![
            run("enqueue", json!([1])),
            run("enqueue", json!([2])),
            yields("dequeue", Value::Null, json!(1)),
            run("enqueue", json!([3])),
            yields("is_full", Value::Null, json!(false)),
            run("enqueue", json!([4])),
            yields("is_full", Value::Null, json!(true)),
            yields("dequeue", Value::Null, json!(2)),
            yields("dequeue", Value::Null, json!(3)),
            yields("dequeue", Value::Null, json!(4)),
            yields("is_empty", Value::Null, json!(true)),
        ]),
    ]
}
