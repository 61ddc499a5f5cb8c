// crates/exercise-gate-core/src/core/contract.rs
// ============================================================================
// Module: Exercise Gate Contracts
// Description: Callable signature and comparison semantics for one topic.
// Purpose: Validate fixtures at load time and steer result comparison.
// Dependencies: crate::core::{fixture, identifiers, shape}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`Contract`] is metadata only. It states how candidates of a topic are
//! invoked (pure call or stateful session), what shapes their inputs and
//! outputs take, and how an observed result is compared with the expected
//! one. For stateful topics `input_shape` describes the constructor
//! arguments and each operation carries its own [`OperationSpec`].
//!
//! # Invariants
//! - A fixture whose input arity or shapes disagree with the contract is
//!   rejected with [`ContractError::ShapeMismatch`] before verification.
//! - Script steps may only name declared operations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::fixture::Expected;
use crate::core::fixture::Fixture;
use crate::core::identifiers::TopicId;
use crate::core::shape::ValueShape;

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Acceptance predicate over `(inputs, expected, observed)`.
///
/// Used for outputs with many valid answers, such as topological orders.
pub type PropertyCheck = fn(&[Value], &Value, &Value) -> bool;

/// How an observed value is compared with the expected one.
#[derive(Debug, Clone, Copy)]
pub enum Comparison {
    /// Structural, order-sensitive equality with decimal-aware numbers.
    Exact,
    /// Top-level sequences compared as multisets; nested values stay exact.
    Unordered,
    /// Numbers equal within an absolute tolerance.
    Approximate {
        /// Absolute tolerance.
        epsilon: f64,
    },
    /// Contract-supplied acceptance predicate.
    Property(PropertyCheck),
}

impl Comparison {
    /// Stable label used in audit events.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Unordered => "unordered",
            Self::Approximate {
                ..
            } => "approximate",
            Self::Property(_) => "property",
        }
    }
}

// ============================================================================
// SECTION: Determinism
// ============================================================================

/// Invocation model of a topic's candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Determinism {
    /// Stateless function of its inputs.
    Pure,
    /// Constructed object driven by a sequence of operations.
    Stateful,
}

// ============================================================================
// SECTION: Contract
// ============================================================================

/// Signature of one operation on a stateful candidate.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    /// Argument shapes.
    pub inputs: Vec<ValueShape>,
    /// Result shape.
    pub output: ValueShape,
    /// Result comparison.
    pub comparison: Comparison,
}

impl OperationSpec {
    /// Operation compared exactly.
    #[must_use]
    pub const fn new(inputs: Vec<ValueShape>, output: ValueShape) -> Self {
        Self {
            inputs,
            output,
            comparison: Comparison::Exact,
        }
    }

    /// Replaces the comparison.
    #[must_use]
    pub const fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }
}

/// Topic signature and comparison semantics.
#[derive(Debug, Clone)]
pub struct Contract {
    /// Topic the contract belongs to.
    pub topic_id: TopicId,
    /// Call inputs (pure) or constructor arguments (stateful).
    pub input_shape: Vec<ValueShape>,
    /// Result shape for pure topics.
    pub output_shape: ValueShape,
    /// Invocation model.
    pub determinism: Determinism,
    /// Result comparison for pure topics.
    pub comparison: Comparison,
    /// Operation table for stateful topics.
    pub operations: BTreeMap<String, OperationSpec>,
}

impl Contract {
    /// Contract for a pure topic compared exactly.
    #[must_use]
    pub fn pure(
        topic_id: impl Into<TopicId>,
        input_shape: Vec<ValueShape>,
        output_shape: ValueShape,
    ) -> Self {
        Self {
            topic_id: topic_id.into(),
            input_shape,
            output_shape,
            determinism: Determinism::Pure,
            comparison: Comparison::Exact,
            operations: BTreeMap::new(),
        }
    }

    /// Contract for a stateful topic with the given constructor arguments.
    #[must_use]
    pub fn stateful(topic_id: impl Into<TopicId>, constructor: Vec<ValueShape>) -> Self {
        Self {
            topic_id: topic_id.into(),
            input_shape: constructor,
            output_shape: ValueShape::Any,
            determinism: Determinism::Stateful,
            comparison: Comparison::Exact,
            operations: BTreeMap::new(),
        }
    }

    /// Replaces the top-level comparison.
    #[must_use]
    pub const fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Declares an operation.
    #[must_use]
    pub fn with_operation(mut self, name: impl Into<String>, spec: OperationSpec) -> Self {
        self.operations.insert(name.into(), spec);
        self
    }

    /// Looks up a declared operation.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.get(name)
    }

    /// Validates every fixture of a topic against this contract.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContractError`] found.
    pub fn validate_fixtures(&self, fixtures: &[Fixture]) -> Result<(), ContractError> {
        fixtures
            .iter()
            .enumerate()
            .try_for_each(|(index, fixture)| self.validate_fixture(index, fixture))
    }

    /// Validates one fixture against this contract.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::KindMismatch`] when the fixture kind does not
    /// fit the determinism, [`ContractError::ShapeMismatch`] on arity or shape
    /// disagreement, and [`ContractError::UnknownOperation`] for undeclared
    /// script operations.
    pub fn validate_fixture(&self, index: usize, fixture: &Fixture) -> Result<(), ContractError> {
        match (self.determinism, fixture) {
            (
                Determinism::Pure,
                Fixture::Call {
                    inputs,
                    expected,
                },
            ) => {
                self.check_arguments(index, None, "inputs", &self.input_shape, inputs)?;
                self.check_expected(index, None, &self.output_shape, expected)
            }
            (
                Determinism::Stateful,
                Fixture::Script {
                    init,
                    steps,
                },
            ) => {
                self.check_arguments(index, None, "constructor", &self.input_shape, init)?;
                for (step_index, step) in steps.iter().enumerate() {
                    let Some(spec) = self.operations.get(&step.op) else {
                        return Err(ContractError::UnknownOperation {
                            topic_id: self.topic_id.clone(),
                            fixture_index: index,
                            operation: step.op.clone(),
                        });
                    };
                    self.check_arguments(
                        index,
                        Some(step_index),
                        &step.op,
                        &spec.inputs,
                        &step.args,
                    )?;
                    if let Some(expected) = &step.expected {
                        self.check_expected(index, Some(step_index), &spec.output, expected)?;
                    }
                }
                Ok(())
            }
            (determinism, fixture) => Err(ContractError::KindMismatch {
                topic_id: self.topic_id.clone(),
                fixture_index: index,
                detail: format!(
                    "{} fixture cannot drive a {} contract",
                    fixture.kind_label(),
                    determinism_label(determinism)
                ),
            }),
        }
    }

    /// Checks argument arity and per-argument shapes.
    fn check_arguments(
        &self,
        index: usize,
        step: Option<usize>,
        label: &str,
        shapes: &[ValueShape],
        values: &[Value],
    ) -> Result<(), ContractError> {
        if shapes.len() != values.len() {
            return Err(self.shape_mismatch(
                index,
                step,
                format!("{label} expects {} arguments, fixture has {}", shapes.len(), values.len()),
            ));
        }
        for (position, (shape, value)) in shapes.iter().zip(values).enumerate() {
            if !shape.conforms(value) {
                return Err(self.shape_mismatch(
                    index,
                    step,
                    format!("{label} argument {position} does not conform to {shape}"),
                ));
            }
        }
        Ok(())
    }

    /// Checks an expected value against the declared result shape.
    fn check_expected(
        &self,
        index: usize,
        step: Option<usize>,
        shape: &ValueShape,
        expected: &Expected,
    ) -> Result<(), ContractError> {
        match expected {
            Expected::Value(value) if !shape.conforms(value) => Err(self.shape_mismatch(
                index,
                step,
                format!("expected value does not conform to {shape}"),
            )),
            _ => Ok(()),
        }
    }

    /// Builds a shape mismatch error for this topic.
    fn shape_mismatch(&self, index: usize, step: Option<usize>, detail: String) -> ContractError {
        ContractError::ShapeMismatch {
            topic_id: self.topic_id.clone(),
            fixture_index: index,
            step,
            detail,
        }
    }
}

/// Returns a label for a determinism value.
const fn determinism_label(determinism: Determinism) -> &'static str {
    match determinism {
        Determinism::Pure => "pure",
        Determinism::Stateful => "stateful",
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Load-time contract violations; each rejects the topic's fixture set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Fixture arity or shape disagrees with the contract.
    #[error("topic {topic_id} fixture {fixture_index}: shape mismatch: {detail}")]
    ShapeMismatch {
        /// Topic identifier.
        topic_id: TopicId,
        /// Offending fixture.
        fixture_index: usize,
        /// Offending script step, when applicable.
        step: Option<usize>,
        /// Human-readable mismatch description.
        detail: String,
    },
    /// Script step names an undeclared operation.
    #[error("topic {topic_id} fixture {fixture_index}: unknown operation `{operation}`")]
    UnknownOperation {
        /// Topic identifier.
        topic_id: TopicId,
        /// Offending fixture.
        fixture_index: usize,
        /// Undeclared operation name.
        operation: String,
    },
    /// Fixture kind does not match the contract determinism.
    #[error("topic {topic_id} fixture {fixture_index}: {detail}")]
    KindMismatch {
        /// Topic identifier.
        topic_id: TopicId,
        /// Offending fixture.
        fixture_index: usize,
        /// Human-readable mismatch description.
        detail: String,
    },
}
