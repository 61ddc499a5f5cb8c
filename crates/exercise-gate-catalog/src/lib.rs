// crates/exercise-gate-catalog/src/lib.rs
// ============================================================================
// Module: Exercise Gate Catalog Library
// Description: Built-in algorithm and data-structure exercise topics.
// Purpose: Supply contracts, stubs, solutions, and fixtures for every topic.
// Dependencies: exercise-gate-config, exercise-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Twenty-one topics ranging from searching and sorting through graph
//! algorithms, dynamic programming, and stateful containers. Each topic
//! lives in [`topics`] and pairs a contract with a sentinel stub, one or
//! more solution variants, and literal fixtures. The containers backing
//! the stateful topics live in [`structures`] and know nothing about
//! fixtures. [`builtin`] assembles everything into a registry and catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builtin;
pub mod structures;
pub mod topics;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builtin::CatalogError;
pub use builtin::builtin_fixtures;
pub use builtin::builtin_registry;
pub use builtin::run_with_config;
pub use topics::ALL;
pub use topics::TopicDefinition;
