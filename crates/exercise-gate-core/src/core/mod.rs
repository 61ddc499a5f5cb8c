// crates/exercise-gate-core/src/core/mod.rs
// ============================================================================
// Module: Exercise Gate Core Types
// Description: Canonical data model for fixtures, contracts, outcomes, reports.
// Purpose: Provide stable, serializable types shared by every harness component.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types are pure data. Fixtures and contracts are read-only during a
//! run; outcomes and reports are produced by the runtime and never mutated
//! after they are finalized.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod contract;
pub mod fixture;
pub mod hashing;
pub mod identifiers;
pub mod outcome;
pub mod report;
pub mod shape;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use contract::Comparison;
pub use contract::Contract;
pub use contract::ContractError;
pub use contract::Determinism;
pub use contract::OperationSpec;
pub use contract::PropertyCheck;
pub use fixture::Expected;
pub use fixture::Fixture;
pub use fixture::RejectionKind;
pub use fixture::Step;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::IdentifierError;
pub use identifiers::TopicId;
pub use identifiers::VariantName;
pub use outcome::CandidateFault;
pub use outcome::CandidateKind;
pub use outcome::FaultKind;
pub use outcome::Observation;
pub use outcome::Outcome;
pub use outcome::OutcomeStatus;
pub use report::RejectedTopic;
pub use report::Report;
pub use report::ReportBuilder;
pub use report::ReportEntry;
pub use report::ReportSummary;
pub use shape::ValueShape;
