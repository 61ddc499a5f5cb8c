// crates/exercise-gate-core/tests/hashing.rs
// ============================================================================
// Module: Canonical Hashing Tests
// Description: Verifies RFC 8785 fixture digests.
// ============================================================================
//! ## Overview
//! Ensures fixture digests are stable across map key order and number
//! spelling and change when fixture content changes.

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

use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::HashAlgorithm;
use exercise_gate_core::hashing::fixture_digest;
use exercise_gate_core::hashing::hash_canonical_json;
use serde_json::json;

/// Key order does not affect the digest.
#[test]
fn digest_ignores_key_order() {
    let left = vec![Fixture::call(vec![json!({"a": 1, "b": [2]})], Expected::value(json!(1)))];
    let right = vec![Fixture::call(vec![json!({"b": [2], "a": 1})], Expected::value(json!(1)))];
    assert_eq!(fixture_digest(&left).unwrap(), fixture_digest(&right).unwrap());
}

/// Changing an expectation changes the digest.
#[test]
fn digest_tracks_content() {
    let left = vec![Fixture::call(vec![json!([1, 2])], Expected::value(json!(1)))];
    let right = vec![Fixture::call(vec![json!([1, 2])], Expected::not_found())];
    assert_ne!(fixture_digest(&left).unwrap(), fixture_digest(&right).unwrap());
}

/// Digests are lowercase SHA-256 hex.
#[test]
fn digest_is_sha256_hex() {
    let digest = hash_canonical_json(&json!({"topic": "stack"})).unwrap();
    assert_eq!(digest.algorithm, HashAlgorithm::Sha256);
    assert_eq!(digest.value.len(), 64);
    assert!(digest.value.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
}
