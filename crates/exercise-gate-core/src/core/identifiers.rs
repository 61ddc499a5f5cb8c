// crates/exercise-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Exercise Gate Identifiers
// Description: Canonical opaque identifiers for topics and candidate variants.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Topics and candidate variants are addressed by short kebab-style string
//! identifiers such as `binary-search` or `iterative`. The wrappers are opaque
//! and serialize as strings; validation happens at the registry boundary via
//! [`validate_identifier`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum identifier length in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Topic identifier naming one exercise (for example `binary-search`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a new topic identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TopicId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Variant name distinguishing candidates of one topic (`stub`, `iterative`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantName(String);

impl VariantName {
    /// Creates a new variant name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the variant name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for VariantName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VariantName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Identifier validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Identifier is empty.
    #[error("{kind} identifier must be non-empty")]
    Empty {
        /// Identifier kind label.
        kind: &'static str,
    },
    /// Identifier exceeds [`MAX_IDENTIFIER_LENGTH`].
    #[error("{kind} identifier exceeds {MAX_IDENTIFIER_LENGTH} bytes")]
    TooLong {
        /// Identifier kind label.
        kind: &'static str,
    },
    /// Identifier contains a character outside `[a-z0-9_-]`.
    #[error("{kind} identifier `{value}` contains invalid character `{found}`")]
    InvalidCharacter {
        /// Identifier kind label.
        kind: &'static str,
        /// Rejected identifier.
        value: String,
        /// First offending character.
        found: char,
    },
}

/// Validates an identifier string against the canonical character set.
///
/// # Errors
///
/// Returns [`IdentifierError`] when the identifier is empty, too long, or
/// contains characters outside `[a-z0-9_-]`.
pub fn validate_identifier(kind: &'static str, value: &str) -> Result<(), IdentifierError> {
    if value.is_empty() {
        return Err(IdentifierError::Empty { kind });
    }
    if value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong { kind });
    }
    if let Some(found) = value
        .chars()
        .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-' || *ch == '_'))
    {
        return Err(IdentifierError::InvalidCharacter {
            kind,
            value: value.to_string(),
            found,
        });
    }
    Ok(())
}
