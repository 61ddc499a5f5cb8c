// crates/exercise-gate-core/src/audit.rs
// ============================================================================
// Module: Exercise Gate Audit Logging
// Description: Structured JSON-line events emitted during verification runs.
// Purpose: Record outcomes and run milestones without a hard logging dependency.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! Audit events are small serializable payloads tagged with an `event` label
//! and a millisecond timestamp. Sinks decide where they go: stderr, an
//! append-only file, memory (for tests), or nowhere. Sinks never fail the
//! run; write errors are dropped, and a sink that panics loses only the event
//! it was handed (see [`shielded`]).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use serde_json::Value;

use crate::core::CandidateKind;
use crate::core::Outcome;
use crate::core::OutcomeStatus;
use crate::core::ReportEntry;
use crate::core::ReportSummary;
use crate::core::TopicId;
use crate::core::VariantName;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Per-fixture outcome event.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureOutcomeEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Candidate variant.
    pub variant_name: VariantName,
    /// Fixture position.
    pub fixture_index: usize,
    /// Outcome status.
    pub status: OutcomeStatus,
    /// Deciding script step, if any.
    pub step: Option<usize>,
    /// Fault category label for errors.
    pub fault_kind: Option<&'static str>,
}

impl FixtureOutcomeEvent {
    /// Builds the event for an outcome.
    #[must_use]
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            event: "fixture_outcome",
            timestamp_ms: now_ms(),
            topic_id: outcome.topic_id.clone(),
            variant_name: outcome.variant_name.clone(),
            fixture_index: outcome.fixture_index,
            status: outcome.status,
            step: outcome.step,
            fault_kind: outcome.fault.as_ref().map(|fault| fault.kind.as_str()),
        }
    }
}

/// Candidate completion event.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateVerifiedEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Candidate variant.
    pub variant_name: VariantName,
    /// Stub or solution.
    pub kind: CandidateKind,
    /// Fixtures run.
    pub fixtures: usize,
    /// Passing fixtures.
    pub passed: usize,
    /// Failing fixtures.
    pub failed: usize,
    /// Errored fixtures.
    pub errored: usize,
    /// Timed-out fixtures.
    pub timed_out: usize,
}

impl CandidateVerifiedEvent {
    /// Builds the event for a finished report entry.
    #[must_use]
    pub fn from_entry(entry: &ReportEntry) -> Self {
        Self {
            event: "candidate_verified",
            timestamp_ms: now_ms(),
            topic_id: entry.topic_id.clone(),
            variant_name: entry.variant_name.clone(),
            kind: entry.kind,
            fixtures: entry.outcomes.len(),
            passed: entry.count(OutcomeStatus::Pass),
            failed: entry.count(OutcomeStatus::Fail),
            errored: entry.count(OutcomeStatus::Error),
            timed_out: entry.count(OutcomeStatus::Timeout),
        }
    }
}

/// Topic rejected at load time.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRejectedEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Topic identifier.
    pub topic_id: TopicId,
    /// Rejection cause.
    pub reason: String,
}

impl TopicRejectedEvent {
    /// Builds the event.
    #[must_use]
    pub fn new(topic_id: TopicId, reason: impl Into<String>) -> Self {
        Self {
            event: "topic_rejected",
            timestamp_ms: now_ms(),
            topic_id,
            reason: reason.into(),
        }
    }
}

/// End-of-run summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunCompleteEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Aggregate counts.
    pub summary: ReportSummary,
}

impl RunCompleteEvent {
    /// Builds the event.
    #[must_use]
    pub fn new(summary: ReportSummary) -> Self {
        Self {
            event: "run_complete",
            timestamp_ms: now_ms(),
            summary,
        }
    }
}

/// Milliseconds since the Unix epoch, zero if the clock is before it.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Destination for verification audit events.
pub trait AuditSink: Send + Sync {
    /// Record a per-fixture outcome.
    fn record_outcome(&self, event: &FixtureOutcomeEvent);

    /// Record a finished candidate.
    fn record_candidate(&self, _event: &CandidateVerifiedEvent) {}

    /// Record a rejected topic.
    fn record_rejection(&self, _event: &TopicRejectedEvent) {}

    /// Record the end of a run.
    fn record_run(&self, _event: &RunCompleteEvent) {}
}

/// Runs one sink call, containing any panic it raises.
pub(crate) fn shielded(record: impl FnOnce()) {
    let _ = panic::catch_unwind(AssertUnwindSafe(record));
}

/// Writes one event as a JSON line, ignoring failures.
fn write_line<W: Write, T: Serialize>(writer: &mut W, event: &T) {
    if let Ok(payload) = serde_json::to_string(event) {
        let _ = writeln!(writer, "{payload}");
        let _ = writer.flush();
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record_outcome(&self, event: &FixtureOutcomeEvent) {
        write_line(&mut io::stderr(), event);
    }

    fn record_candidate(&self, event: &CandidateVerifiedEvent) {
        write_line(&mut io::stderr(), event);
    }

    fn record_rejection(&self, event: &TopicRejectedEvent) {
        write_line(&mut io::stderr(), event);
    }

    fn record_run(&self, event: &RunCompleteEvent) {
        write_line(&mut io::stderr(), event);
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// Append-only file handle.
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Opens the audit log in append mode, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one event.
    fn append<T: Serialize>(&self, event: &T) {
        if let Ok(mut file) = self.file.lock() {
            write_line(&mut *file, event);
        }
    }
}

impl AuditSink for FileAuditSink {
    fn record_outcome(&self, event: &FixtureOutcomeEvent) {
        self.append(event);
    }

    fn record_candidate(&self, event: &CandidateVerifiedEvent) {
        self.append(event);
    }

    fn record_rejection(&self, event: &TopicRejectedEvent) {
        self.append(event);
    }

    fn record_run(&self, event: &RunCompleteEvent) {
        self.append(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record_outcome(&self, _event: &FixtureOutcomeEvent) {}
}

/// Audit sink that keeps events in memory.
#[derive(Default)]
pub struct MemoryAuditSink {
    /// Captured events as JSON values.
    events: Mutex<Vec<Value>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<Value> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// Returns captured events with the given `event` label.
    #[must_use]
    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event.get("event").and_then(Value::as_str) == Some(name))
            .collect()
    }

    /// Captures one event.
    fn capture<T: Serialize>(&self, event: &T) {
        if let Ok(value) = serde_json::to_value(event)
            && let Ok(mut events) = self.events.lock()
        {
            events.push(value);
        }
    }
}

impl AuditSink for MemoryAuditSink {
    fn record_outcome(&self, event: &FixtureOutcomeEvent) {
        self.capture(event);
    }

    fn record_candidate(&self, event: &CandidateVerifiedEvent) {
        self.capture(event);
    }

    fn record_rejection(&self, event: &TopicRejectedEvent) {
        self.capture(event);
    }

    fn record_run(&self, event: &RunCompleteEvent) {
        self.capture(event);
    }
}
