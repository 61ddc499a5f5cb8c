// crates/exercise-gate-core/src/core/outcome.rs
// ============================================================================
// Module: Exercise Gate Outcomes
// Description: Per-fixture verification results and captured candidate faults.
// Purpose: Provide the immutable records consumed by report aggregation.
// Dependencies: crate::core::{fixture, identifiers}, serde, serde_json
// ============================================================================

//! ## Overview
//! Every (topic, variant, fixture) triple produces exactly one [`Outcome`].
//! Outcomes never carry timing data, so re-running a pure candidate over the
//! same fixture yields an identical record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::fixture::RejectionKind;
use crate::core::identifiers::TopicId;
use crate::core::identifiers::VariantName;

// ============================================================================
// SECTION: Observations
// ============================================================================

/// Tagged result returned by a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    /// Produced value.
    Value(Value),
    /// Domain-level refusal.
    Rejected(RejectionKind),
}

impl Observation {
    /// Observation for operations that return nothing.
    #[must_use]
    pub const fn unit() -> Self {
        Self::Value(Value::Null)
    }

    /// Wraps an optional value, rejecting `None` with `kind`.
    #[must_use]
    pub fn from_option(value: Option<Value>, kind: RejectionKind) -> Self {
        value.map_or(Self::Rejected(kind), Self::Value)
    }
}

// ============================================================================
// SECTION: Candidate Faults
// ============================================================================

/// Category of a genuine candidate defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Inputs could not be decoded into the candidate's native types.
    Decode,
    /// The candidate's result could not be encoded as a semantic value.
    Encode,
    /// The candidate panicked.
    Panic,
    /// Callable kind or operation does not fit the contract.
    Incompatible,
    /// The invocation thread could not be started.
    Spawn,
}

impl FaultKind {
    /// Stable label used in audit events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Encode => "encode",
            Self::Panic => "panic",
            Self::Incompatible => "incompatible",
            Self::Spawn => "spawn",
        }
    }
}

/// Captured cause of an `Error` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFault {
    /// Fault category.
    pub kind: FaultKind,
    /// Human-readable detail.
    pub message: String,
}

impl CandidateFault {
    /// Creates a fault.
    #[must_use]
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Operation not supported by the candidate session.
    #[must_use]
    pub fn unsupported_operation(op: &str) -> Self {
        Self::new(FaultKind::Incompatible, format!("unsupported operation `{op}`"))
    }
}

impl fmt::Display for CandidateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Whether a candidate is the placeholder or a reference solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Placeholder returning a fixed sentinel.
    Stub,
    /// Reference implementation expected to pass.
    Solution,
}

/// Verification status of one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Observed result matched.
    Pass,
    /// Observed result differed.
    Fail,
    /// Candidate faulted.
    Error,
    /// Invocation exceeded the fixture timeout.
    Timeout,
}

impl OutcomeStatus {
    /// Stable label used in audit events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
            Self::Timeout => "timeout",
        }
    }
}

/// Result of running one candidate against one fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Candidate variant.
    pub variant_name: VariantName,
    /// Position of the fixture in the topic's list.
    pub fixture_index: usize,
    /// Verification status.
    pub status: OutcomeStatus,
    /// Script step that decided a non-pass status.
    pub step: Option<usize>,
    /// Observation that decided the status, when one was produced.
    pub observed: Option<Observation>,
    /// Captured fault for `Error` outcomes.
    pub fault: Option<CandidateFault>,
}

impl Outcome {
    /// Returns true for passing outcomes.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.status == OutcomeStatus::Pass
    }
}
