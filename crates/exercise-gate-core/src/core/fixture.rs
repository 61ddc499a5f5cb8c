// crates/exercise-gate-core/src/core/fixture.rs
// ============================================================================
// Module: Exercise Gate Fixtures
// Description: Literal input/expected examples for one topic.
// Purpose: Provide immutable, serializable verification data.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A fixture is either a single call (`inputs` and one expectation) or a
//! script that constructs a stateful candidate and replays operations with
//! interleaved expectations. Fixtures are pure data and are never mutated
//! once a topic's fixture list has been accepted.
//!
//! Expected failures are tagged with a [`RejectionKind`] rather than encoded
//! as sentinel values such as `-1` or `null`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Rejections
// ============================================================================

/// Domain-level refusal a candidate reports instead of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The requested element or answer does not exist.
    NotFound,
    /// The container is empty.
    Empty,
    /// The container is at capacity.
    Full,
    /// The arguments are outside the operation's domain.
    InvalidInput,
}

impl RejectionKind {
    /// Stable label used in reports and audit events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Empty => "empty",
            Self::Full => "full",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Expectations
// ============================================================================

/// Expected result of a call or script step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// A semantic value.
    Value(Value),
    /// A tagged rejection.
    Rejected(RejectionKind),
}

impl Expected {
    /// Expects the given value.
    #[must_use]
    pub const fn value(value: Value) -> Self {
        Self::Value(value)
    }

    /// Expects a [`RejectionKind::NotFound`] rejection.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::Rejected(RejectionKind::NotFound)
    }

    /// Expects a [`RejectionKind::Empty`] rejection.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Rejected(RejectionKind::Empty)
    }

    /// Expects a [`RejectionKind::Full`] rejection.
    #[must_use]
    pub const fn full() -> Self {
        Self::Rejected(RejectionKind::Full)
    }
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// One operation of a stateful fixture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Operation name declared by the topic contract.
    pub op: String,
    /// Operation arguments.
    #[serde(default)]
    pub args: Vec<Value>,
    /// Expectation checked after the step; `None` only drives state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Expected>,
}

impl Step {
    /// Step whose result is not checked.
    #[must_use]
    pub fn run(op: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            op: op.into(),
            args,
            expected: None,
        }
    }

    /// Step whose result must match `expected`.
    #[must_use]
    pub fn expect(op: impl Into<String>, args: Vec<Value>, expected: Expected) -> Self {
        Self {
            op: op.into(),
            args,
            expected: Some(expected),
        }
    }
}

/// Literal verification example for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fixture {
    /// Single invocation of a pure candidate.
    Call {
        /// Positional inputs.
        inputs: Vec<Value>,
        /// Expected result.
        expected: Expected,
    },
    /// Construction of a stateful candidate followed by operations.
    Script {
        /// Constructor arguments.
        #[serde(default)]
        init: Vec<Value>,
        /// Operations replayed in order.
        steps: Vec<Step>,
    },
}

impl Fixture {
    /// Builds a call fixture.
    #[must_use]
    pub const fn call(inputs: Vec<Value>, expected: Expected) -> Self {
        Self::Call {
            inputs,
            expected,
        }
    }

    /// Builds a script fixture.
    #[must_use]
    pub const fn script(init: Vec<Value>, steps: Vec<Step>) -> Self {
        Self::Script {
            init,
            steps,
        }
    }

    /// Returns the fixture kind label.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Call {
                ..
            } => "call",
            Self::Script {
                ..
            } => "script",
        }
    }

    /// Positional inputs for calls, constructor arguments for scripts.
    #[must_use]
    pub fn inputs(&self) -> &[Value] {
        match self {
            Self::Call {
                inputs, ..
            } => inputs,
            Self::Script {
                init, ..
            } => init,
        }
    }
}
