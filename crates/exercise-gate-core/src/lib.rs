// crates/exercise-gate-core/src/lib.rs
// ============================================================================
// Module: Exercise Gate Core Library
// Description: Public API surface for the exercise verification harness.
// Purpose: Expose core types, candidate interfaces, audit sinks, and runtime.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Exercise Gate verifies candidate implementations of classic algorithm and
//! data-structure exercises against literal fixtures. A topic contributes a
//! contract, a stub, solution variants, and fixtures; the runtime runs every
//! candidate in isolation and reports pass/fail per fixture.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::AuditSink;
pub use audit::FileAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use interfaces::Callable;
pub use interfaces::Candidate;
pub use interfaces::Session;
pub use interfaces::decode_args;
pub use interfaces::encode_value;
pub use interfaces::expect_no_args;
pub use interfaces::observe;
pub use runtime::Aggregator;
pub use runtime::AggregatorConfig;
pub use runtime::CandidateRegistry;
pub use runtime::FixtureCatalog;
pub use runtime::RegistryError;
pub use runtime::TopicAccessPolicy;
pub use runtime::Verifier;
pub use runtime::VerifierConfig;
pub use runtime::run_all;
