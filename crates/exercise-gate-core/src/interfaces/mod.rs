// crates/exercise-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Exercise Gate Interfaces
// Description: Candidate callables, stateful sessions, and typed adapters.
// Purpose: Define the surface every candidate implementation plugs into.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! A candidate is either a pure function over positional JSON inputs or a
//! constructor producing a [`Session`] that replays named operations. Typed
//! adapters decode the positional inputs into native Rust tuples and encode
//! native results back into semantic values, so candidate implementations
//! are written against ordinary Rust types.
//!
//! Decoding failures surface as [`FaultKind::Decode`] faults, never as
//! panics. Domain refusals (`not found`, `empty`) are returned as
//! [`RejectionKind`] and become [`Observation::Rejected`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::CandidateFault;
use crate::core::CandidateKind;
use crate::core::Determinism;
use crate::core::FaultKind;
use crate::core::Observation;
use crate::core::RejectionKind;
use crate::core::TopicId;
use crate::core::VariantName;

// ============================================================================
// SECTION: Session
// ============================================================================

/// Stateful candidate instance driven by named operations.
pub trait Session {
    /// Applies one operation and returns its observation.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateFault`] when the arguments cannot be decoded or the
    /// operation is unsupported.
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault>;
}

// ============================================================================
// SECTION: Callable
// ============================================================================

/// Pure candidate entry point.
pub type PureFn = dyn Fn(&[Value]) -> Result<Observation, CandidateFault> + Send + Sync;

/// Stateful candidate constructor.
pub type ConstructorFn =
    dyn Fn(&[Value]) -> Result<Box<dyn Session>, CandidateFault> + Send + Sync;

/// Invocable candidate body.
#[derive(Clone)]
pub enum Callable {
    /// Stateless function of its inputs.
    Pure(Arc<PureFn>),
    /// Constructor of a fresh session per fixture.
    Stateful(Arc<ConstructorFn>),
}

impl Callable {
    /// Wraps an untyped pure function.
    #[must_use]
    pub fn pure<F>(call: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Observation, CandidateFault> + Send + Sync + 'static,
    {
        Self::Pure(Arc::new(call))
    }

    /// Wraps a typed pure function taking its inputs as a tuple `A`.
    #[must_use]
    pub fn typed<A, R, F>(call: F) -> Self
    where
        A: DeserializeOwned,
        R: Serialize,
        F: Fn(A) -> Result<R, RejectionKind> + Send + Sync + 'static,
    {
        Self::pure(move |inputs| {
            let args = decode_args::<A>(inputs)?;
            observe(call(args))
        })
    }

    /// Wraps a session constructor.
    #[must_use]
    pub fn stateful<F>(construct: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Box<dyn Session>, CandidateFault> + Send + Sync + 'static,
    {
        Self::Stateful(Arc::new(construct))
    }

    /// Invocation model this callable implements.
    #[must_use]
    pub const fn determinism(&self) -> Determinism {
        match self {
            Self::Pure(_) => Determinism::Pure,
            Self::Stateful(_) => Determinism::Stateful,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(_) => f.write_str("Callable::Pure"),
            Self::Stateful(_) => f.write_str("Callable::Stateful"),
        }
    }
}

// ============================================================================
// SECTION: Candidate
// ============================================================================

/// Registered implementation of a topic.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Variant name, unique within the topic.
    pub variant_name: VariantName,
    /// Stub or solution.
    pub kind: CandidateKind,
    /// Invocable body.
    pub callable: Callable,
}

// ============================================================================
// SECTION: Typed Adapters
// ============================================================================

/// Decodes positional arguments into a native tuple (or other sequence type).
///
/// # Errors
///
/// Returns a [`FaultKind::Decode`] fault when arity or types disagree.
pub fn decode_args<T: DeserializeOwned>(args: &[Value]) -> Result<T, CandidateFault> {
    serde_json::from_value(Value::Array(args.to_vec()))
        .map_err(|err| CandidateFault::new(FaultKind::Decode, err.to_string()))
}

/// Rejects any arguments for zero-argument constructors and operations.
///
/// # Errors
///
/// Returns a [`FaultKind::Decode`] fault when `args` is non-empty.
pub fn expect_no_args(args: &[Value]) -> Result<(), CandidateFault> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CandidateFault::new(
            FaultKind::Decode,
            format!("expected no arguments, got {}", args.len()),
        ))
    }
}

/// Encodes a native value as a semantic value.
///
/// # Errors
///
/// Returns a [`FaultKind::Encode`] fault when serialization fails.
pub fn encode_value<R: Serialize + ?Sized>(value: &R) -> Result<Value, CandidateFault> {
    serde_json::to_value(value)
        .map_err(|err| CandidateFault::new(FaultKind::Encode, err.to_string()))
}

/// Converts a native result into an observation.
///
/// # Errors
///
/// Returns a [`FaultKind::Encode`] fault when the value cannot be encoded.
pub fn observe<R: Serialize>(
    result: Result<R, RejectionKind>,
) -> Result<Observation, CandidateFault> {
    match result {
        Ok(value) => encode_value(&value).map(Observation::Value),
        Err(kind) => Ok(Observation::Rejected(kind)),
    }
}
