// crates/exercise-gate-core/src/core/report.rs
// ============================================================================
// Module: Exercise Gate Reports
// Description: Pass/fail matrix over every (topic, variant) pair of a run.
// Purpose: Collect outcomes incrementally and expose summary views.
// Dependencies: crate::core::{hashing, identifiers, outcome}, serde
// ============================================================================

//! ## Overview
//! A [`ReportBuilder`] accepts entries in any order (workers finish out of
//! order) and [`ReportBuilder::finish`] produces a [`Report`] sorted by topic
//! then variant. Topics whose fixtures were rejected at load time, and topics
//! registered without fixtures, are listed separately so that nothing is
//! silently dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::HashDigest;
use crate::core::identifiers::TopicId;
use crate::core::identifiers::VariantName;
use crate::core::outcome::CandidateKind;
use crate::core::outcome::Outcome;
use crate::core::outcome::OutcomeStatus;

// ============================================================================
// SECTION: Entries
// ============================================================================

/// Outcomes of one candidate over its topic's fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Candidate variant.
    pub variant_name: VariantName,
    /// Stub or solution.
    pub kind: CandidateKind,
    /// Digest of the fixture list the candidate ran against.
    pub fixture_digest: Option<HashDigest>,
    /// Outcomes in fixture order.
    pub outcomes: Vec<Outcome>,
}

impl ReportEntry {
    /// Number of outcomes with the given status.
    #[must_use]
    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.status == status).count()
    }

    /// Returns true when every fixture passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_pass)
    }
}

/// Topic excluded from the run because its fixtures were rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedTopic {
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Rejection cause.
    pub reason: String,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Aggregate counts over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Candidates verified.
    pub candidates: usize,
    /// Outcomes recorded.
    pub outcomes: usize,
    /// Passing outcomes.
    pub passed: usize,
    /// Failing outcomes.
    pub failed: usize,
    /// Errored outcomes.
    pub errored: usize,
    /// Timed-out outcomes.
    pub timed_out: usize,
    /// Solution variants with a non-pass outcome.
    pub regressions: usize,
    /// Topics rejected at load time.
    pub rejected_topics: usize,
}

/// Finalized run report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Entries sorted by topic then variant.
    pub entries: Vec<ReportEntry>,
    /// Topics whose fixtures were rejected.
    pub rejected_topics: Vec<RejectedTopic>,
    /// Topics with candidates but no fixtures.
    pub topics_without_fixtures: Vec<TopicId>,
}

impl Report {
    /// Looks up the entry for a (topic, variant) pair.
    #[must_use]
    pub fn entry(&self, topic_id: &str, variant_name: &str) -> Option<&ReportEntry> {
        self.entries
            .binary_search_by(|entry| {
                (entry.topic_id.as_str(), entry.variant_name.as_str())
                    .cmp(&(topic_id, variant_name))
            })
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    /// Outcomes recorded for a (topic, variant) pair.
    #[must_use]
    pub fn outcomes(&self, topic_id: &str, variant_name: &str) -> Option<&[Outcome]> {
        self.entry(topic_id, variant_name).map(|entry| entry.outcomes.as_slice())
    }

    /// Entries for one topic.
    pub fn topic_entries<'a>(&'a self, topic_id: &'a str) -> impl Iterator<Item = &'a ReportEntry> {
        self.entries.iter().filter(move |entry| entry.topic_id.as_str() == topic_id)
    }

    /// Solution entries with at least one non-pass outcome.
    #[must_use]
    pub fn regressions(&self) -> Vec<&ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == CandidateKind::Solution && !entry.all_passed())
            .collect()
    }

    /// Aggregate counts.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            candidates: self.entries.len(),
            rejected_topics: self.rejected_topics.len(),
            ..ReportSummary::default()
        };
        for entry in &self.entries {
            summary.outcomes += entry.outcomes.len();
            summary.passed += entry.count(OutcomeStatus::Pass);
            summary.failed += entry.count(OutcomeStatus::Fail);
            summary.errored += entry.count(OutcomeStatus::Error);
            summary.timed_out += entry.count(OutcomeStatus::Timeout);
            if entry.kind == CandidateKind::Solution && !entry.all_passed() {
                summary.regressions += 1;
            }
        }
        summary
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Incremental report construction.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    /// Entries keyed by (topic, variant).
    entries: BTreeMap<(TopicId, VariantName), ReportEntry>,
    /// Rejected topics keyed by topic.
    rejected: BTreeMap<TopicId, String>,
    /// Topics lacking fixtures.
    without_fixtures: Vec<TopicId>,
}

impl ReportBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for its (topic, variant) pair.
    pub fn push_entry(&mut self, entry: ReportEntry) {
        let key = (entry.topic_id.clone(), entry.variant_name.clone());
        self.entries.insert(key, entry);
    }

    /// Records a topic rejected at load time.
    pub fn push_rejected(&mut self, topic_id: TopicId, reason: impl Into<String>) {
        self.rejected.insert(topic_id, reason.into());
    }

    /// Records a topic that has candidates but no fixtures.
    pub fn push_without_fixtures(&mut self, topic_id: TopicId) {
        if !self.without_fixtures.contains(&topic_id) {
            self.without_fixtures.push(topic_id);
        }
    }

    /// Finalizes the report.
    #[must_use]
    pub fn finish(mut self) -> Report {
        self.without_fixtures.sort();
        Report {
            entries: self.entries.into_values().collect(),
            rejected_topics: self
                .rejected
                .into_iter()
                .map(|(topic_id, reason)| RejectedTopic {
                    topic_id,
                    reason,
                })
                .collect(),
            topics_without_fixtures: self.without_fixtures,
        }
    }
}
