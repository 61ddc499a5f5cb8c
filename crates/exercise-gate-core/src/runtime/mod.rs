// crates/exercise-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Exercise Gate Runtime
// Description: Comparison, registration, verification, and aggregation.
// Purpose: Execute candidates against fixtures and assemble the run report.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime is the only part of the harness with real control flow. The
//! aggregator drives the verifier once per (topic, candidate) pair; the
//! verifier invokes, compares, and returns outcomes. No component holds
//! cross-topic state.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod aggregator;
pub mod comparator;
pub mod fixtures;
pub mod registry;
pub mod verifier;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use aggregator::Aggregator;
pub use aggregator::AggregatorConfig;
pub use aggregator::default_workers;
pub use aggregator::run_all;
pub use fixtures::FixtureCatalog;
pub use fixtures::TopicFixtures;
pub use registry::CandidateRegistry;
pub use registry::RegistryError;
pub use registry::TopicAccessPolicy;
pub use verifier::DEFAULT_FIXTURE_TIMEOUT;
pub use verifier::Verifier;
pub use verifier::VerifierConfig;
