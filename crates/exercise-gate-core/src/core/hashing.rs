// crates/exercise-gate-core/src/core/hashing.rs
// ============================================================================
// Module: Exercise Gate Canonical Hashing
// Description: RFC 8785 JSON canonicalization and fixture digests.
// Purpose: Identify the exact fixture list a report entry was verified against.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Fixture lists are hashed over their RFC 8785 (JCS) canonical JSON form, so
//! two lists that differ only in map key order or number spelling share a
//! digest. Report entries carry the digest to make override fixtures
//! distinguishable from the built-in ones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::fixture::Fixture;

// ============================================================================
// SECTION: Digest Types
// ============================================================================

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

/// Content digest with its algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashDigest {
    /// Digest algorithm.
    pub algorithm: HashAlgorithm,
    /// Lowercase hex digest.
    pub value: String,
}

/// Errors raised while computing digests.
#[derive(Debug, Error)]
pub enum HashError {
    /// Canonical JSON serialization failed.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Hashing
// ============================================================================

/// Returns RFC 8785 canonical JSON bytes for `value`.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Hashes the canonical JSON form of `value` with SHA-256.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn hash_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<HashDigest, HashError> {
    let bytes = canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(HashDigest {
        algorithm: HashAlgorithm::Sha256,
        value: hex_encode(&digest),
    })
}

/// Digest of a topic's ordered fixture list.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn fixture_digest(fixtures: &[Fixture]) -> Result<HashDigest, HashError> {
    hash_canonical_json(fixtures)
}

/// Encodes bytes as lowercase hex.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(HEX[usize::from(byte >> 4)]));
        out.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }
    out
}
