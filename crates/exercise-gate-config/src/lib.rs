// crates/exercise-gate-config/src/lib.rs
// ============================================================================
// Module: Exercise Gate Config Library
// Description: Canonical config model, validation, and fixture overrides.
// Purpose: Single source of truth for exercise-gate.toml semantics.
// Dependencies: exercise-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `exercise-gate-config` defines the configuration model for verification
//! runs: verifier timeout, worker pool and topic selection, audit sink, and
//! an optional directory of fixture overrides. Validation is strict and
//! happens at load time.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod fixtures;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use fixtures::FixtureFile;
pub use fixtures::FixtureLoadError;
pub use fixtures::apply_fixture_dir;
pub use fixtures::list_fixture_files;
pub use fixtures::read_fixture_file;
