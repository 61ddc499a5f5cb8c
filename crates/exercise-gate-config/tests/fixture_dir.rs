//! Fixture directory tests for exercise-gate-config.
// crates/exercise-gate-config/tests/fixture_dir.rs
// =============================================================================
// Module: Fixture Directory Tests
// Description: Validate fixture overrides read from `<topic-id>.json` files.
// Purpose: Ensure bad fixture files degrade only their own topic.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;
use std::path::Path;

use exercise_gate_config::FixtureLoadError;
use exercise_gate_config::apply_fixture_dir;
use exercise_gate_config::list_fixture_files;
use exercise_gate_config::read_fixture_file;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::FixtureCatalog;
use exercise_gate_core::TopicId;
use exercise_gate_core::ValueShape;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Catalog holding one `doubler` topic: `int -> int`.
fn doubler_catalog() -> FixtureCatalog {
    let contract = Contract::pure("doubler", vec![ValueShape::Int], ValueShape::Int);
    let mut catalog = FixtureCatalog::new();
    catalog
        .insert(contract, vec![Fixture::call(vec![json!(1)], Expected::value(json!(2)))])
        .unwrap();
    catalog
}

/// Writes a file into the fixture directory.
fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

// ============================================================================
// SECTION: Reading
// ============================================================================

/// A well-formed file parses into its topic and fixtures.
#[test]
fn read_parses_call_and_rejection_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "doubler.json",
        r#"{"topic":"doubler","fixtures":[
            {"kind":"call","inputs":[3],"expected":{"value":6}},
            {"kind":"call","inputs":[-1],"expected":{"rejected":"invalid_input"}}
        ]}"#,
    );
    let file = read_fixture_file(&dir.path().join("doubler.json")).unwrap();
    assert_eq!(file.topic, TopicId::new("doubler"));
    assert_eq!(file.fixtures.len(), 2);
}

/// The declared topic must match the file stem.
#[test]
fn read_rejects_topic_stem_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "doubler.json", r#"{"topic":"stack","fixtures":[]}"#);
    let err = read_fixture_file(&dir.path().join("doubler.json")).unwrap_err();
    assert!(matches!(err, FixtureLoadError::TopicMismatch { .. }));
}

/// Only `.json` files are listed, in name order.
#[test]
fn list_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.json", "{}");
    write(dir.path(), "a.json", "{}");
    write(dir.path(), "notes.txt", "ignored");
    let files = list_fixture_files(dir.path()).unwrap();
    let names: Vec<_> =
        files.iter().filter_map(|path| path.file_name()?.to_str().map(str::to_string)).collect();
    assert_eq!(names, vec!["a.json".to_string(), "b.json".to_string()]);
}

// ============================================================================
// SECTION: Applying
// ============================================================================

/// A valid override replaces the built-in fixtures.
#[test]
fn apply_replaces_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "doubler.json",
        r#"{"topic":"doubler","fixtures":[
            {"kind":"call","inputs":[2],"expected":{"value":4}},
            {"kind":"call","inputs":[5],"expected":{"value":10}}
        ]}"#,
    );
    let mut catalog = doubler_catalog();
    let failures = apply_fixture_dir(&mut catalog, dir.path()).unwrap();
    assert!(failures.is_empty());
    let topic = catalog.get(&TopicId::new("doubler")).unwrap();
    assert_eq!(topic.fixtures.len(), 2);
    assert!(topic.digest.is_some());
}

/// Malformed JSON rejects only that topic.
#[test]
fn apply_rejects_unparseable_topic() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "doubler.json", "{not json");
    let mut catalog = doubler_catalog();
    let failures = apply_fixture_dir(&mut catalog, dir.path()).unwrap();
    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], FixtureLoadError::Parse { .. }));
    let topic_id = TopicId::new("doubler");
    assert!(catalog.get(&topic_id).is_none());
    assert!(catalog.rejection(&topic_id).is_some());
}

/// Fixtures that break the contract reject the topic with a shape mismatch.
#[test]
fn apply_rejects_contract_violation() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "doubler.json",
        r#"{"topic":"doubler","fixtures":[
            {"kind":"call","inputs":["two"],"expected":{"value":4}}
        ]}"#,
    );
    let mut catalog = doubler_catalog();
    let failures = apply_fixture_dir(&mut catalog, dir.path()).unwrap();
    assert!(matches!(failures[0], FixtureLoadError::Contract(_)));
    let reason = catalog.rejection(&TopicId::new("doubler")).unwrap();
    assert!(reason.contains("shape mismatch"), "{reason}");
}

/// Files for topics without a contract are reported and leave others intact.
#[test]
fn apply_reports_unknown_topic() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ghost.json", r#"{"topic":"ghost","fixtures":[]}"#);
    let mut catalog = doubler_catalog();
    let failures = apply_fixture_dir(&mut catalog, dir.path()).unwrap();
    assert!(matches!(failures[0], FixtureLoadError::TopicMismatch { .. }));
    assert!(catalog.get(&TopicId::new("doubler")).is_some());
}

/// A missing directory is an I/O error for the whole call.
#[test]
fn apply_fails_on_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = doubler_catalog();
    let err = apply_fixture_dir(&mut catalog, &dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, FixtureLoadError::Io { .. }));
}
