// crates/exercise-gate-core/tests/contract.rs
// ============================================================================
// Module: Contract Validation Tests
// Description: Load-time fixture validation against topic contracts.
// ============================================================================
//! ## Overview
//! Ensures fixture arity, value shapes, operation names, and fixture kinds
//! are checked before verification, and that a rejected topic is recorded
//! by the fixture catalog.

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

use exercise_gate_core::Contract;
use exercise_gate_core::ContractError;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::FixtureCatalog;
use exercise_gate_core::OperationSpec;
use exercise_gate_core::Step;
use exercise_gate_core::TopicId;
use exercise_gate_core::ValueShape;
use serde_json::json;

fn search_contract() -> Contract {
    Contract::pure(
        "binary-search",
        vec![ValueShape::seq(ValueShape::Int), ValueShape::Int],
        ValueShape::Int,
    )
}

fn stack_contract() -> Contract {
    Contract::stateful("stack", Vec::new())
        .with_operation("push", OperationSpec::new(vec![ValueShape::Any], ValueShape::Any))
        .with_operation("pop", OperationSpec::new(Vec::new(), ValueShape::Any))
}

// ============================================================================
// SECTION: Pure Contracts
// ============================================================================

/// Matching fixtures validate.
#[test]
fn well_formed_call_fixture_validates() {
    let fixtures = vec![
        Fixture::call(vec![json!([-1, 0, 2, 4, 6, 8]), json!(4)], Expected::value(json!(3))),
        Fixture::call(vec![json!([]), json!(1)], Expected::not_found()),
    ];
    search_contract().validate_fixtures(&fixtures).unwrap();
}

/// Wrong input arity is a shape mismatch.
#[test]
fn arity_mismatch_is_rejected() {
    let fixture = Fixture::call(vec![json!([1, 2, 3])], Expected::value(json!(0)));
    let err = search_contract().validate_fixture(0, &fixture).unwrap_err();
    assert!(matches!(err, ContractError::ShapeMismatch { fixture_index: 0, .. }));
}

/// Inputs and expected values must conform to their shapes.
#[test]
fn value_shape_mismatch_is_rejected() {
    let bad_input = Fixture::call(vec![json!("abc"), json!(1)], Expected::value(json!(0)));
    assert!(search_contract().validate_fixture(2, &bad_input).is_err());
    let bad_output = Fixture::call(vec![json!([1]), json!(1)], Expected::value(json!("zero")));
    let err = search_contract().validate_fixture(3, &bad_output).unwrap_err();
    assert!(matches!(err, ContractError::ShapeMismatch { fixture_index: 3, .. }));
}

/// Script fixtures cannot drive pure contracts.
#[test]
fn script_fixture_on_pure_contract_is_kind_mismatch() {
    let fixture = Fixture::script(Vec::new(), Vec::new());
    let err = search_contract().validate_fixture(0, &fixture).unwrap_err();
    assert!(matches!(err, ContractError::KindMismatch { .. }));
}

// ============================================================================
// SECTION: Stateful Contracts
// ============================================================================

/// Undeclared operations are rejected.
#[test]
fn unknown_operation_is_rejected() {
    let fixture = Fixture::script(Vec::new(), vec![Step::run("peek", Vec::new())]);
    let err = stack_contract().validate_fixture(0, &fixture).unwrap_err();
    assert!(matches!(
        err,
        ContractError::UnknownOperation { ref operation, .. } if operation == "peek"
    ));
}

/// Step arity is checked against the operation signature.
#[test]
fn step_arity_is_checked() {
    let fixture = Fixture::script(Vec::new(), vec![Step::run("push", Vec::new())]);
    let err = stack_contract().validate_fixture(0, &fixture).unwrap_err();
    assert!(matches!(err, ContractError::ShapeMismatch { step: Some(0), .. }));
}

/// Constructor arguments follow the contract input shape.
#[test]
fn constructor_arguments_are_checked() {
    let fixture = Fixture::script(vec![json!(3)], Vec::new());
    assert!(stack_contract().validate_fixture(0, &fixture).is_err());
}

// ============================================================================
// SECTION: Fixture Catalog
// ============================================================================

/// A rejected topic is remembered and not served.
#[test]
fn catalog_records_rejected_topics() {
    let mut catalog = FixtureCatalog::new();
    let fixtures = vec![Fixture::call(vec![json!([1])], Expected::value(json!(0)))];
    assert!(catalog.insert(search_contract(), fixtures).is_err());
    let topic = TopicId::new("binary-search");
    assert!(catalog.get(&topic).is_none());
    assert!(catalog.rejection(&topic).unwrap().contains("shape mismatch"));
}

/// Accepted topics carry a fixture digest.
#[test]
fn catalog_accepts_valid_topics_with_digest() {
    let mut catalog = FixtureCatalog::new();
    let fixtures = vec![Fixture::call(vec![json!([1]), json!(1)], Expected::value(json!(0)))];
    catalog.insert(search_contract(), fixtures).unwrap();
    let topic = catalog.get(&TopicId::new("binary-search")).unwrap();
    assert_eq!(topic.fixtures.len(), 1);
    assert_eq!(topic.digest.as_ref().unwrap().value.len(), 64);
}
