// crates/exercise-gate-catalog/src/builtin.rs
// ============================================================================
// Module: Built-In Catalog
// Description: Registry, fixture catalog, and configured runs for all topics.
// Purpose: Assemble the built-in topics into a runnable verification harness.
// Dependencies: exercise-gate-config, exercise-gate-core, thiserror
// ============================================================================

//! ## Overview
//! [`builtin_registry`] registers every topic's stub and solutions,
//! [`builtin_fixtures`] validates every topic's fixtures against its
//! contract, and [`run_with_config`] combines both with the settings of an
//! `exercise-gate.toml`, including fixture overrides and the audit sink.
//! Fixture problems never abort a run: they reject the affected topic and
//! the report lists it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use exercise_gate_config::ConfigError;
use exercise_gate_config::FixtureLoadError;
use exercise_gate_config::HarnessConfig;
use exercise_gate_config::apply_fixture_dir;
use exercise_gate_core::Aggregator;
use exercise_gate_core::CandidateRegistry;
use exercise_gate_core::FixtureCatalog;
use exercise_gate_core::RegistryError;
use exercise_gate_core::Report;
use exercise_gate_core::Verifier;
use thiserror::Error;

use crate::topics::ALL;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures that prevent a run from starting.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A built-in candidate could not be registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The fixture override directory could not be read.
    #[error(transparent)]
    Fixtures(#[from] FixtureLoadError),
}

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Registers the stub and every solution variant of each built-in topic.
///
/// # Errors
///
/// Returns [`RegistryError`] when a built-in identifier is malformed or
/// duplicated.
pub fn builtin_registry() -> Result<CandidateRegistry, RegistryError> {
    let mut registry = CandidateRegistry::new();
    for topic in ALL {
        registry.register_stub(topic.id, (topic.stub)())?;
        for (variant, build) in topic.solutions {
            registry.register_solution(topic.id, *variant, build())?;
        }
    }
    Ok(registry)
}

/// Validates and catalogs the fixtures of each built-in topic.
///
/// A topic whose fixtures violate its contract is recorded as rejected.
#[must_use]
pub fn builtin_fixtures() -> FixtureCatalog {
    let mut catalog = FixtureCatalog::new();
    for topic in ALL {
        // A violation is recorded in the catalog as a rejected topic.
        let _violation = catalog.insert((topic.contract)(), (topic.fixtures)());
    }
    catalog
}

/// Runs every registered candidate under the given configuration.
///
/// # Errors
///
/// Returns [`CatalogError`] when the audit sink cannot be opened, a
/// built-in candidate fails to register, or the fixture override directory
/// cannot be read. Individual override files that fail only reject their
/// topic.
pub fn run_with_config(config: &HarnessConfig) -> Result<Report, CatalogError> {
    let registry = builtin_registry()?;
    let mut catalog = builtin_fixtures();
    if let Some(dir) = config.fixtures.dir.as_deref() {
        // Failed files are already recorded as rejected topics.
        let _failures = apply_fixture_dir(&mut catalog, Path::new(dir))?;
    }
    let verifier = Verifier::new(config.verifier_config());
    let aggregator =
        Aggregator::new(verifier, config.aggregator_config()).with_audit(config.audit_sink()?);
    Ok(aggregator.run_all(&registry, &catalog))
}
