// crates/exercise-gate-catalog/src/topics/min_heap.rs
// ============================================================================
// Module: Min-Heap Topic
// Description: Session adapter for the binary min-heap.
// Purpose: Provide the `min-heap` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `insert`, `extract_min`, `peek`, `size`, and `is_empty` over one heap per
//! script. Extracting or peeking an empty heap reports `empty`.

use exercise_gate_core::Callable;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::Observation;
use exercise_gate_core::OperationSpec;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::Session;
use exercise_gate_core::Step;
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
use crate::structures::MinHeap;
use crate::structures::Sift;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "min-heap",
    contract,
    fixtures,
    stub,
    solutions: &[("iterative", iterative_candidate), ("recursive", recursive_candidate)],
};

// ============================================================================
// SECTION: Session
// ============================================================================

/// Session over one heap.
struct HeapSession {
    /// Backing heap.
    heap: MinHeap<i64>,
}

impl Session for HeapSession {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "insert" => {
                let (value,): (i64,) = decode_args(args)?;
                self.heap.insert(value);
                Ok(Observation::unit())
            }
            "extract_min" => {
                expect_no_args(args)?;
                reply_or(self.heap.extract_min(), RejectionKind::Empty)
            }
            "peek" => {
                expect_no_args(args)?;
                reply_or(self.heap.peek(), RejectionKind::Empty)
            }
            "size" => {
                expect_no_args(args)?;
                reply(&self.heap.len())
            }
            "is_empty" => {
                expect_no_args(args)?;
                reply(&self.heap.is_empty())
            }
            _ => Err(CandidateFault::unsupported_operation(op)),
        }
    }
}

/// Constructor for sessions sifting with `sift`.
fn session(sift: Sift) -> Callable {
    Callable::stateful(move |init| {
        expect_no_args(init)?;
        Ok(Box::new(HeapSession {
            heap: MinHeap::with_sift(sift),
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::stateful(DEFINITION.id, Vec::new())
        .with_operation("insert", OperationSpec::new(vec![ValueShape::Int], ValueShape::Any))
        .with_operation("extract_min", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("peek", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("size", OperationSpec::new(Vec::new(), ValueShape::Int))
        .with_operation("is_empty", OperationSpec::new(Vec::new(), ValueShape::Bool))
}

/// Stub whose every operation answers `empty`.
fn stub() -> Callable {
    sentinel_session(Observation::Rejected(RejectionKind::Empty))
}

/// Iterative sifting variant.
fn iterative_candidate() -> Callable {
    session(Sift::Iterative)
}

/// Recursive sifting variant.
fn recursive_candidate() -> Callable {
    session(Sift::Recursive)
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in scripts.
fn fixtures() -> Vec<Fixture> {
    let seeded = |tail: Vec<Step>| {
        let mut steps =
            vec![run("insert", json!([5])), run("insert", json!([3])), run("insert", json!([7]))];
        steps.extend(tail);
        Fixture::script(Vec::new(), steps)
    };
    vec![
        seeded(vec![yields("size", Value::Null, json!(3))]),
        seeded(vec![
            yields("extract_min", Value::Null, json!(3)),
            yields("size", Value::Null, json!(2)),
        ]),
        seeded(vec![yields("peek", Value::Null, json!(3)), yields("size", Value::Null, json!(3))]),
        Fixture::script(Vec::new(), vec![check("extract_min", Value::Null, Expected::empty())]),
        Fixture::script(Vec::new(), vec![check("peek", Value::Null, Expected::empty())]),
        Fixture::script(Vec::new(), vec![
            run("insert", json!([9])),
            run("insert", json!([-2])),
            run("insert", json!([4])),
            run("insert", json!([-2])),
            run("insert", json!([0])),
            yields("extract_min", Value::Null, json!(-2)),
            yields("extract_min", Value::Null, json!(-2)),
            yields("extract_min", Value::Null, json!(0)),
            yields("extract_min", Value::Null, json!(4)),
            yields("extract_min", Value::Null, json!(9)),
            yields("is_empty", Value::Null, json!(true)),
        ]),
    ]
}
