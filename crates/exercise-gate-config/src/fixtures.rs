// crates/exercise-gate-config/src/fixtures.rs
// ============================================================================
// Module: Fixture Directory Loading
// Description: Reads `<topic-id>.json` fixture files from a directory.
// Purpose: Let a run replace built-in fixtures without recompiling.
// Dependencies: exercise-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Each file in the fixture directory is named after a topic and holds
//! `{ "topic": "<topic-id>", "fixtures": [...] }`. Files are validated
//! against the topic's existing contract and then replace its fixtures in
//! the catalog. A malformed file degrades only its own topic: the topic is
//! marked rejected and the error is returned alongside the others.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use exercise_gate_core::ContractError;
use exercise_gate_core::Fixture;
use exercise_gate_core::FixtureCatalog;
use exercise_gate_core::TopicId;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum fixture file size in bytes.
pub(crate) const MAX_FIXTURE_FILE_SIZE: u64 = 4 * 1024 * 1024;
/// Fixture file extension.
const FIXTURE_EXTENSION: &str = "json";

// ============================================================================
// SECTION: Types
// ============================================================================

/// On-disk fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureFile {
    /// Topic the fixtures belong to; must match the file stem.
    pub topic: TopicId,
    /// Fixtures in verification order.
    pub fixtures: Vec<Fixture>,
}

/// Fixture file failures.
#[derive(Debug, Error)]
pub enum FixtureLoadError {
    /// The file or directory could not be read.
    #[error("fixture io error at {path}: {message}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// I/O error detail.
        message: String,
    },
    /// The file is not a valid fixture document.
    #[error("fixture parse error at {path}: {message}")]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Parse error detail.
        message: String,
    },
    /// The declared topic disagrees with the file name or is unknown.
    #[error("fixture topic mismatch at {path}: {message}")]
    TopicMismatch {
        /// Offending path.
        path: PathBuf,
        /// Mismatch detail.
        message: String,
    },
    /// The fixtures violate the topic contract.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Reads and parses one fixture file, checking its topic against the file stem.
///
/// # Errors
///
/// Returns [`FixtureLoadError`] when the file cannot be read, exceeds the
/// size limit, fails to parse, or names a different topic.
pub fn read_fixture_file(path: &Path) -> Result<FixtureFile, FixtureLoadError> {
    let io_error = |message: String| FixtureLoadError::Io {
        path: path.to_path_buf(),
        message,
    };
    let size = fs::metadata(path).map_err(|err| io_error(err.to_string()))?.len();
    if size > MAX_FIXTURE_FILE_SIZE {
        return Err(io_error("fixture file exceeds size limit".to_string()));
    }
    let bytes = fs::read(path).map_err(|err| io_error(err.to_string()))?;
    let file: FixtureFile =
        serde_json::from_slice(&bytes).map_err(|err| FixtureLoadError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
    if file.topic.as_str() != stem {
        return Err(FixtureLoadError::TopicMismatch {
            path: path.to_path_buf(),
            message: format!("file declares topic `{}`", file.topic),
        });
    }
    Ok(file)
}

/// Lists fixture files in a directory, sorted by name.
///
/// # Errors
///
/// Returns [`FixtureLoadError::Io`] when the directory cannot be read.
pub fn list_fixture_files(dir: &Path) -> Result<Vec<PathBuf>, FixtureLoadError> {
    let entries = fs::read_dir(dir).map_err(|err| FixtureLoadError::Io {
        path: dir.to_path_buf(),
        message: err.to_string(),
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(FIXTURE_EXTENSION)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Replaces catalog fixtures with the files found in `dir`.
///
/// Each file is validated against the contract already registered for its
/// topic. Failing files mark their topic rejected and are returned; the
/// remaining files still apply.
///
/// # Errors
///
/// Returns [`FixtureLoadError::Io`] only when the directory itself cannot be
/// read.
pub fn apply_fixture_dir(
    catalog: &mut FixtureCatalog,
    dir: &Path,
) -> Result<Vec<FixtureLoadError>, FixtureLoadError> {
    let mut failures = Vec::new();
    for path in list_fixture_files(dir)? {
        let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
        let topic_id = TopicId::new(stem);
        if let Err(err) = apply_fixture_file(catalog, &topic_id, &path) {
            if !matches!(err, FixtureLoadError::Contract(_)) {
                catalog.reject(topic_id, err.to_string());
            }
            failures.push(err);
        }
    }
    Ok(failures)
}

/// Loads one file and swaps it into the catalog.
fn apply_fixture_file(
    catalog: &mut FixtureCatalog,
    topic_id: &TopicId,
    path: &Path,
) -> Result<(), FixtureLoadError> {
    let Some(contract) = catalog.contract(topic_id).cloned() else {
        return Err(FixtureLoadError::TopicMismatch {
            path: path.to_path_buf(),
            message: format!("no contract registered for topic `{topic_id}`"),
        });
    };
    let file = read_fixture_file(path)?;
    catalog.insert(contract, file.fixtures)?;
    Ok(())
}
