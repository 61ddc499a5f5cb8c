// crates/exercise-gate-core/src/runtime/registry.rs
// ============================================================================
// Module: Candidate Registry
// Description: Topic-to-candidate mapping with topic selection policy.
// Purpose: Hold the stub and solution variants of every registered topic.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! The registry maps each topic to its candidates keyed by variant name.
//! Registration is the only mutation and rejects duplicate `(topic, variant)`
//! pairs and malformed identifiers; iteration order is deterministic (topics
//! and variants sorted by name). A [`TopicAccessPolicy`] narrows which topics
//! a run visits without touching the registry itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::CandidateKind;
use crate::core::IdentifierError;
use crate::core::TopicId;
use crate::core::VariantName;
use crate::core::identifiers::validate_identifier;
use crate::interfaces::Callable;
use crate::interfaces::Candidate;

// ============================================================================
// SECTION: Access Policy
// ============================================================================

/// Policy selecting which topics a run verifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAccessPolicy {
    /// Optional allowlist of topic identifiers.
    pub allowlist: Option<BTreeSet<String>>,
    /// Explicit denylist of topic identifiers.
    pub denylist: BTreeSet<String>,
}

impl TopicAccessPolicy {
    /// Returns a policy that permits all topics.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self {
            allowlist: None,
            denylist: BTreeSet::new(),
        }
    }

    /// Returns true when the topic is selected. The denylist wins.
    #[must_use]
    pub fn is_allowed(&self, topic_id: &str) -> bool {
        if self.denylist.contains(topic_id) {
            return false;
        }
        self.allowlist.as_ref().is_none_or(|allowlist| allowlist.contains(topic_id))
    }
}

impl Default for TopicAccessPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The `(topic, variant)` pair is already registered.
    #[error("variant `{variant_name}` already registered for topic `{topic_id}`")]
    DuplicateVariant {
        /// Topic identifier.
        topic_id: TopicId,
        /// Duplicated variant.
        variant_name: VariantName,
    },
    /// Topic or variant identifier is malformed.
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Mapping from topic to its registered candidates.
#[derive(Debug, Default)]
pub struct CandidateRegistry {
    /// Candidates keyed by topic then variant.
    topics: BTreeMap<TopicId, BTreeMap<VariantName, Candidate>>,
}

impl CandidateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateVariant`] when the pair is already
    /// present and [`RegistryError::InvalidIdentifier`] for malformed names.
    /// A failed call leaves the registry unchanged.
    pub fn register(
        &mut self,
        topic_id: impl Into<TopicId>,
        variant_name: impl Into<VariantName>,
        kind: CandidateKind,
        callable: Callable,
    ) -> Result<(), RegistryError> {
        let topic_id = topic_id.into();
        let variant_name = variant_name.into();
        validate_identifier("topic", topic_id.as_str())?;
        validate_identifier("variant", variant_name.as_str())?;
        let variants = self.topics.entry(topic_id.clone()).or_default();
        if variants.contains_key(&variant_name) {
            return Err(RegistryError::DuplicateVariant {
                topic_id,
                variant_name,
            });
        }
        variants.insert(
            variant_name.clone(),
            Candidate {
                topic_id,
                variant_name,
                kind,
                callable,
            },
        );
        Ok(())
    }

    /// Registers the topic's stub under the variant name `stub`.
    ///
    /// # Errors
    ///
    /// See [`CandidateRegistry::register`].
    pub fn register_stub(
        &mut self,
        topic_id: impl Into<TopicId>,
        callable: Callable,
    ) -> Result<(), RegistryError> {
        self.register(topic_id, "stub", CandidateKind::Stub, callable)
    }

    /// Registers a solution variant.
    ///
    /// # Errors
    ///
    /// See [`CandidateRegistry::register`].
    pub fn register_solution(
        &mut self,
        topic_id: impl Into<TopicId>,
        variant_name: impl Into<VariantName>,
        callable: Callable,
    ) -> Result<(), RegistryError> {
        self.register(topic_id, variant_name, CandidateKind::Solution, callable)
    }

    /// Candidates of a topic in variant order; empty for unknown topics.
    pub fn list<'a>(&'a self, topic_id: &str) -> impl Iterator<Item = &'a Candidate> + 'a {
        self.topics.get(&TopicId::from(topic_id)).into_iter().flat_map(BTreeMap::values)
    }

    /// Registered topics in sorted order.
    pub fn topics(&self) -> impl Iterator<Item = &TopicId> {
        self.topics.keys()
    }

    /// Total number of registered candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.values().map(BTreeMap::len).sum()
    }

    /// Returns true when no candidates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
