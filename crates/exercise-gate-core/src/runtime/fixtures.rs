// crates/exercise-gate-core/src/runtime/fixtures.rs
// ============================================================================
// Module: Fixture Catalog
// Description: Validated contracts and fixture lists keyed by topic.
// Purpose: Gate fixtures through contract validation before any run.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The fixture catalog is the `fixtures_by_topic` input of a run. Inserting a
//! topic validates its fixtures against its contract; a violation rejects
//! that topic only and is remembered so the report can list it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::Contract;
use crate::core::ContractError;
use crate::core::Fixture;
use crate::core::HashDigest;
use crate::core::TopicId;
use crate::core::hashing::fixture_digest;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Accepted contract and fixtures of one topic.
#[derive(Debug, Clone)]
pub struct TopicFixtures {
    /// Topic contract.
    pub contract: Arc<Contract>,
    /// Fixtures in verification order.
    pub fixtures: Arc<[Fixture]>,
    /// Canonical digest of `fixtures`; omitted when canonicalization fails.
    pub digest: Option<HashDigest>,
}

/// Validated fixtures for every topic of a run.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    /// Accepted topics.
    topics: BTreeMap<TopicId, TopicFixtures>,
    /// Rejected topics and their causes.
    rejected: BTreeMap<TopicId, String>,
}

impl FixtureCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a topic's fixtures, replacing any previous set.
    ///
    /// # Errors
    ///
    /// Returns the [`ContractError`] that rejected the topic. The topic is
    /// then recorded as rejected and any previously accepted set is removed.
    pub fn insert(
        &mut self,
        contract: Contract,
        fixtures: Vec<Fixture>,
    ) -> Result<(), ContractError> {
        let topic_id = contract.topic_id.clone();
        if let Err(err) = contract.validate_fixtures(&fixtures) {
            self.reject(topic_id, err.to_string());
            return Err(err);
        }
        let digest = fixture_digest(&fixtures).ok();
        self.rejected.remove(&topic_id);
        self.topics.insert(
            topic_id,
            TopicFixtures {
                contract: Arc::new(contract),
                fixtures: fixtures.into(),
                digest,
            },
        );
        Ok(())
    }

    /// Marks a topic as rejected for a reason found outside contract checks.
    pub fn reject(&mut self, topic_id: TopicId, reason: impl Into<String>) {
        self.topics.remove(&topic_id);
        self.rejected.insert(topic_id, reason.into());
    }

    /// Accepted fixtures for a topic.
    #[must_use]
    pub fn get(&self, topic_id: &TopicId) -> Option<&TopicFixtures> {
        self.topics.get(topic_id)
    }

    /// Contract of an accepted topic.
    #[must_use]
    pub fn contract(&self, topic_id: &TopicId) -> Option<&Contract> {
        self.topics.get(topic_id).map(|topic| topic.contract.as_ref())
    }

    /// Rejection cause of a topic.
    #[must_use]
    pub fn rejection(&self, topic_id: &TopicId) -> Option<&str> {
        self.rejected.get(topic_id).map(String::as_str)
    }

    /// Rejected topics with their causes.
    pub fn rejected(&self) -> impl Iterator<Item = (&TopicId, &str)> {
        self.rejected.iter().map(|(topic_id, reason)| (topic_id, reason.as_str()))
    }

    /// Accepted topic identifiers.
    pub fn topics(&self) -> impl Iterator<Item = &TopicId> {
        self.topics.keys()
    }
}
