// crates/exercise-gate-core/tests/verifier.rs
// ============================================================================
// Module: Verifier Tests
// Description: Pass/Fail/Error/Timeout classification of candidate runs.
// ============================================================================
//! ## Overview
//! Exercises the verifier with small in-test candidates: correct and stub
//! searches, ordered and unordered outputs, panicking and non-terminating
//! candidates, stateful scripts, and kind mismatches.

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

use exercise_gate_core::Callable;
use exercise_gate_core::Candidate;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::CandidateKind;
use exercise_gate_core::Comparison;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::FaultKind;
use exercise_gate_core::Fixture;
use exercise_gate_core::Observation;
use exercise_gate_core::OperationSpec;
use exercise_gate_core::OutcomeStatus;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::Session;
use exercise_gate_core::Step;
use exercise_gate_core::TopicId;
use exercise_gate_core::ValueShape;
use exercise_gate_core::VariantName;
use exercise_gate_core::Verifier;
use exercise_gate_core::VerifierConfig;
use exercise_gate_core::decode_args;
use exercise_gate_core::expect_no_args;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn candidate(topic: &str, variant: &str, kind: CandidateKind, callable: Callable) -> Candidate {
    Candidate {
        topic_id: TopicId::new(topic),
        variant_name: VariantName::new(variant),
        kind,
        callable,
    }
}

fn search_contract() -> Contract {
    Contract::pure(
        "binary-search",
        vec![ValueShape::seq(ValueShape::Int), ValueShape::Int],
        ValueShape::Int,
    )
}

fn search_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::call(vec![json!([-1, 0, 2, 4, 6, 8]), json!(4)], Expected::value(json!(3))),
        Fixture::call(vec![json!([-1, 0, 2, 4, 6, 8]), json!(3)], Expected::not_found()),
        Fixture::call(vec![json!([1]), json!(1)], Expected::value(json!(0))),
    ]
}

fn linear_search() -> Callable {
    Callable::typed(|(items, target): (Vec<i64>, i64)| {
        items.iter().position(|item| *item == target).ok_or(RejectionKind::NotFound)
    })
}

fn fast_verifier() -> Verifier {
    Verifier::new(VerifierConfig {
        fixture_timeout: Duration::from_millis(500),
    })
}

/// Minimal stack session for script tests.
struct VecStack(Vec<Value>);

impl Session for VecStack {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "push" => {
                let (value,): (Value,) = decode_args(args)?;
                self.0.push(value);
                Ok(Observation::unit())
            }
            "pop" => {
                expect_no_args(args)?;
                Ok(Observation::from_option(self.0.pop(), RejectionKind::Empty))
            }
            other => Err(CandidateFault::unsupported_operation(other)),
        }
    }
}

fn stack_contract() -> Contract {
    Contract::stateful("stack", Vec::new())
        .with_operation("push", OperationSpec::new(vec![ValueShape::Any], ValueShape::Any))
        .with_operation("pop", OperationSpec::new(Vec::new(), ValueShape::Any))
}

fn stack_fixture() -> Fixture {
    Fixture::script(
        Vec::new(),
        vec![
            Step::run("push", vec![json!(1)]),
            Step::run("push", vec![json!(2)]),
            Step::expect("pop", Vec::new(), Expected::value(json!(2))),
            Step::expect("pop", Vec::new(), Expected::value(json!(1))),
            Step::expect("pop", Vec::new(), Expected::empty()),
        ],
    )
}

// ============================================================================
// SECTION: Pure Candidates
// ============================================================================

/// A correct candidate passes every fixture.
#[test]
fn correct_candidate_passes() {
    let solution = candidate("binary-search", "linear", CandidateKind::Solution, linear_search());
    let outcomes = fast_verifier().verify(&search_contract(), &solution, &search_fixtures());
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|outcome| outcome.status == OutcomeStatus::Pass));
    assert_eq!(outcomes[0].observed, Some(Observation::Value(json!(3))));
}

/// A sentinel stub fails where the sentinel differs and passes where it coincides.
#[test]
fn stub_fails_without_erroring() {
    let stub = candidate(
        "binary-search",
        "stub",
        CandidateKind::Stub,
        Callable::typed(|(_items, _target): (Vec<i64>, i64)| -> Result<usize, RejectionKind> {
            Err(RejectionKind::NotFound)
        }),
    );
    let outcomes = fast_verifier().verify(&search_contract(), &stub, &search_fixtures());
    let statuses: Vec<_> = outcomes.iter().map(|outcome| outcome.status).collect();
    assert_eq!(statuses, vec![OutcomeStatus::Fail, OutcomeStatus::Pass, OutcomeStatus::Fail]);
}

/// Ordered outputs reject swapped pairs.
#[test]
fn ordered_contract_rejects_reversed_pair() {
    let contract = Contract::pure(
        "two-sum",
        vec![ValueShape::seq(ValueShape::Int), ValueShape::Int],
        ValueShape::seq(ValueShape::Int),
    );
    let fixtures =
        vec![Fixture::call(vec![json!([2, 7, 11, 15]), json!(9)], Expected::value(json!([0, 1])))];
    let reversed = candidate(
        "two-sum",
        "reversed",
        CandidateKind::Solution,
        Callable::typed(|(_nums, _target): (Vec<i64>, i64)| Ok(vec![1, 0])),
    );
    let outcomes = fast_verifier().verify(&contract, &reversed, &fixtures);
    assert_eq!(outcomes[0].status, OutcomeStatus::Fail);
}

/// Unordered outputs accept permutations and reject different sets.
#[test]
fn unordered_contract_accepts_permutations() {
    let contract = Contract::pure(
        "articulation-points",
        vec![ValueShape::seq(ValueShape::seq(ValueShape::Int))],
        ValueShape::seq(ValueShape::Int),
    )
    .with_comparison(Comparison::Unordered);
    let fixtures = vec![Fixture::call(
        vec![json!([[1, 2, 3], [0, 2], [0, 1], [0, 4], [3]])],
        Expected::value(json!([0, 3])),
    )];
    let permuted = candidate(
        "articulation-points",
        "permuted",
        CandidateKind::Solution,
        Callable::typed(|(_graph,): (Vec<Vec<usize>>,)| Ok(vec![3, 0])),
    );
    let wrong = candidate(
        "articulation-points",
        "wrong",
        CandidateKind::Solution,
        Callable::typed(|(_graph,): (Vec<Vec<usize>>,)| Ok(vec![3])),
    );
    let verifier = fast_verifier();
    assert_eq!(verifier.verify(&contract, &permuted, &fixtures)[0].status, OutcomeStatus::Pass);
    assert_eq!(verifier.verify(&contract, &wrong, &fixtures)[0].status, OutcomeStatus::Fail);
}

/// Re-running a pure candidate yields identical outcomes.
#[test]
fn pure_verification_is_idempotent() {
    let solution = candidate("binary-search", "linear", CandidateKind::Solution, linear_search());
    let verifier = fast_verifier();
    let first = verifier.verify(&search_contract(), &solution, &search_fixtures());
    let second = verifier.verify(&search_contract(), &solution, &search_fixtures());
    assert_eq!(first, second);
}

// ============================================================================
// SECTION: Faults
// ============================================================================

/// A panic is captured as an error, not propagated.
#[test]
fn panic_is_captured_as_error() {
    let panicking = candidate(
        "binary-search",
        "panics",
        CandidateKind::Solution,
        Callable::pure(|_| panic!("index out of range")),
    );
    let outcomes = fast_verifier().verify(&search_contract(), &panicking, &search_fixtures());
    assert!(outcomes.iter().all(|outcome| outcome.status == OutcomeStatus::Error));
    let fault = outcomes[0].fault.as_ref().unwrap();
    assert_eq!(fault.kind, FaultKind::Panic);
    assert!(fault.message.contains("index out of range"));
}

/// A non-terminating candidate times out and later fixtures still run.
#[test]
fn infinite_loop_times_out() {
    let looping = candidate(
        "binary-search",
        "loops",
        CandidateKind::Solution,
        Callable::pure(|inputs| {
            if inputs.get(1) == Some(&json!(4)) {
                loop {
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
            Ok(Observation::Rejected(RejectionKind::NotFound))
        }),
    );
    let verifier = Verifier::new(VerifierConfig {
        fixture_timeout: Duration::from_millis(100),
    });
    let outcomes = verifier.verify(&search_contract(), &looping, &search_fixtures());
    assert_eq!(outcomes[0].status, OutcomeStatus::Timeout);
    assert_eq!(outcomes[1].status, OutcomeStatus::Pass);
    assert_eq!(outcomes[2].status, OutcomeStatus::Fail);
}

/// Inputs that do not decode into the candidate's native types are decode faults.
#[test]
fn undecodable_inputs_are_decode_faults() {
    let strict = candidate(
        "binary-search",
        "strict",
        CandidateKind::Solution,
        Callable::typed(|(items,): (Vec<i64>,)| Ok(items.len())),
    );
    let outcomes = fast_verifier().verify(&search_contract(), &strict, &search_fixtures());
    assert_eq!(outcomes[0].status, OutcomeStatus::Error);
    assert_eq!(outcomes[0].fault.as_ref().unwrap().kind, FaultKind::Decode);
}

/// Stateful callables under pure contracts are incompatible.
#[test]
fn determinism_mismatch_is_incompatible() {
    let stateful = candidate(
        "binary-search",
        "stateful",
        CandidateKind::Solution,
        Callable::stateful(|_| Ok(Box::new(VecStack(Vec::new())))),
    );
    let outcomes = fast_verifier().verify(&search_contract(), &stateful, &search_fixtures());
    assert!(outcomes.iter().all(|outcome| {
        outcome.status == OutcomeStatus::Error
            && outcome.fault.as_ref().map(|fault| fault.kind) == Some(FaultKind::Incompatible)
    }));
}

// ============================================================================
// SECTION: Stateful Candidates
// ============================================================================

/// A correct session passes a script with interleaved expectations.
#[test]
fn stateful_script_passes() {
    let stack = candidate(
        "stack",
        "vec",
        CandidateKind::Solution,
        Callable::stateful(|args| {
            expect_no_args(args)?;
            Ok(Box::new(VecStack(Vec::new())))
        }),
    );
    let outcomes = fast_verifier().verify(&stack_contract(), &stack, &[stack_fixture()]);
    assert_eq!(outcomes[0].status, OutcomeStatus::Pass);
}

/// The first mismatching step is reported.
#[test]
fn stateful_failure_reports_step() {
    let forgetful = candidate(
        "stack",
        "forgetful",
        CandidateKind::Stub,
        Callable::stateful(|_| Ok(Box::new(Forgetful))),
    );
    let outcomes = fast_verifier().verify(&stack_contract(), &forgetful, &[stack_fixture()]);
    assert_eq!(outcomes[0].status, OutcomeStatus::Fail);
    assert_eq!(outcomes[0].step, Some(2));
    assert_eq!(outcomes[0].observed, Some(Observation::Rejected(RejectionKind::Empty)));
}

/// Session that accepts pushes and never returns anything.
struct Forgetful;

impl Session for Forgetful {
    fn apply(&mut self, op: &str, _args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "push" => Ok(Observation::unit()),
            _ => Ok(Observation::Rejected(RejectionKind::Empty)),
        }
    }
}

/// A panicking step is reported as an error at that step.
#[test]
fn stateful_panic_reports_step() {
    let fragile = candidate(
        "stack",
        "fragile",
        CandidateKind::Solution,
        Callable::stateful(|_| Ok(Box::new(Fragile(0)))),
    );
    let outcomes = fast_verifier().verify(&stack_contract(), &fragile, &[stack_fixture()]);
    assert_eq!(outcomes[0].status, OutcomeStatus::Error);
    assert_eq!(outcomes[0].step, Some(1));
}

/// Session that panics on its second operation.
struct Fragile(usize);

impl Session for Fragile {
    fn apply(&mut self, _op: &str, _args: &[Value]) -> Result<Observation, CandidateFault> {
        self.0 += 1;
        assert!(self.0 < 2, "fragile session broke");
        Ok(Observation::unit())
    }
}
