// crates/exercise-gate-core/src/runtime/aggregator.rs
// ============================================================================
// Module: Report Aggregator
// Description: Runs every (topic, candidate) pair and collects the report.
// Purpose: Drive the verifier across the registry with a bounded worker pool.
// Dependencies: crate::{audit, core, runtime}
// ============================================================================

//! ## Overview
//! The aggregator flattens the registry into one job per (topic, variant)
//! pair and hands the jobs to scoped worker threads that pull indices from a
//! shared atomic cursor. Workers return their finished entries keyed by job
//! index, which are merged into a [`ReportBuilder`] once every worker has
//! joined.
//!
//! Isolation is total: a failing, erroring, or timed-out candidate never
//! prevents any other candidate from being verified. A panic raised while
//! verifying a job, outside the candidate boundary, turns that job's
//! fixtures into `Error` outcomes; a job that never reports back is recorded
//! the same way. Topics without fixtures and topics rejected at load time
//! are listed in the report.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::iter;
use std::num::NonZeroUsize;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

use crate::audit::AuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::RunCompleteEvent;
use crate::audit::TopicRejectedEvent;
use crate::audit::shielded;
use crate::core::CandidateFault;
use crate::core::CandidateKind;
use crate::core::FaultKind;
use crate::core::Report;
use crate::core::ReportBuilder;
use crate::core::ReportEntry;
use crate::interfaces::Candidate;
use crate::runtime::fixtures::FixtureCatalog;
use crate::runtime::fixtures::TopicFixtures;
use crate::runtime::registry::CandidateRegistry;
use crate::runtime::registry::TopicAccessPolicy;
use crate::runtime::verifier::Verifier;
use crate::runtime::verifier::aborted_entry;
use crate::runtime::verifier::panic_message;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Upper bound on the default worker count.
pub const DEFAULT_WORKER_CAP: usize = 8;

/// Returns available parallelism capped at [`DEFAULT_WORKER_CAP`].
#[must_use]
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get).min(DEFAULT_WORKER_CAP)
}

/// Aggregator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Maximum concurrent worker threads.
    pub workers: usize,
    /// Whether stub candidates are verified.
    pub include_stubs: bool,
    /// Topic selection.
    pub policy: TopicAccessPolicy,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            include_stubs: true,
            policy: TopicAccessPolicy::allow_all(),
        }
    }
}

// ============================================================================
// SECTION: Aggregator
// ============================================================================

/// One verification job.
struct Job<'a> {
    /// Candidate to verify.
    candidate: &'a Candidate,
    /// Its topic's accepted fixtures.
    topic: &'a TopicFixtures,
}

/// Drives the verifier over a registry.
#[derive(Clone)]
pub struct Aggregator {
    /// Per-candidate verifier.
    verifier: Verifier,
    /// Aggregator settings.
    config: AggregatorConfig,
    /// Audit destination for run-level events.
    audit: Arc<dyn AuditSink>,
}

impl Aggregator {
    /// Creates an aggregator without audit output.
    #[must_use]
    pub fn new(verifier: Verifier, config: AggregatorConfig) -> Self {
        Self {
            verifier,
            config,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Routes run-level and verifier events to `audit`.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.verifier = self.verifier.with_audit(Arc::clone(&audit));
        self.audit = audit;
        self
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Verifies every selected (topic, candidate) pair.
    #[must_use]
    pub fn run_all(&self, registry: &CandidateRegistry, catalog: &FixtureCatalog) -> Report {
        let mut builder = ReportBuilder::new();
        let mut jobs = Vec::new();
        for topic_id in registry.topics() {
            if !self.config.policy.is_allowed(topic_id.as_str()) {
                continue;
            }
            let Some(topic) = catalog.get(topic_id) else {
                if catalog.rejection(topic_id).is_none() {
                    builder.push_without_fixtures(topic_id.clone());
                }
                continue;
            };
            jobs.extend(
                registry
                    .list(topic_id.as_str())
                    .filter(|candidate| {
                        self.config.include_stubs || candidate.kind != CandidateKind::Stub
                    })
                    .map(|candidate| Job {
                        candidate,
                        topic,
                    }),
            );
        }
        for (topic_id, reason) in catalog.rejected() {
            if self.config.policy.is_allowed(topic_id.as_str()) {
                let event = TopicRejectedEvent::new(topic_id.clone(), reason);
                shielded(|| self.audit.record_rejection(&event));
                builder.push_rejected(topic_id.clone(), reason);
            }
        }

        for entry in self.execute(&jobs) {
            builder.push_entry(entry);
        }
        let report = builder.finish();
        let event = RunCompleteEvent::new(report.summary());
        shielded(|| self.audit.record_run(&event));
        report
    }

    /// Runs jobs on scoped workers sharing an atomic cursor.
    fn execute(&self, jobs: &[Job<'_>]) -> Vec<ReportEntry> {
        if jobs.is_empty() {
            return Vec::new();
        }
        let cursor = AtomicUsize::new(0);
        let work = || {
            let mut done = Vec::new();
            loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(job) = jobs.get(index) else {
                    break;
                };
                done.push((index, self.run_job(job)));
            }
            done
        };
        let workers = self.config.workers.clamp(1, jobs.len());
        let finished = thread::scope(|scope| {
            let handles: Vec<_> = (0 .. workers)
                .filter_map(|index| {
                    thread::Builder::new()
                        .name(format!("exercise-gate-worker-{index}"))
                        .spawn_scoped(scope, work)
                        .ok()
                })
                .collect();
            // No worker could be spawned: drain the queue on this thread.
            let mut finished = if handles.is_empty() { work() } else { Vec::new() };
            for handle in handles {
                if let Ok(done) = handle.join() {
                    finished.extend(done);
                }
            }
            finished
        });
        let mut slots: Vec<Option<ReportEntry>> =
            iter::repeat_with(|| None).take(jobs.len()).collect();
        for (index, entry) in finished {
            slots[index] = Some(entry);
        }
        jobs.iter()
            .zip(slots)
            .map(|(job, slot)| {
                slot.unwrap_or_else(|| aborted(job, "verification worker exited without a result"))
            })
            .collect()
    }

    /// Verifies one job, converting a panic into `Error` outcomes.
    fn run_job(&self, job: &Job<'_>) -> ReportEntry {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.verifier.verify_candidate(
                &job.topic.contract,
                job.candidate,
                &job.topic.fixtures,
                job.topic.digest.clone(),
            )
        }))
        .unwrap_or_else(|payload| aborted(job, &panic_message(payload.as_ref())))
    }
}

/// Entry for a job whose verification did not complete.
fn aborted(job: &Job<'_>, message: &str) -> ReportEntry {
    aborted_entry(
        job.candidate,
        &job.topic.fixtures,
        job.topic.digest.clone(),
        &CandidateFault::new(FaultKind::Panic, message),
    )
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Verifier::default(), AggregatorConfig::default())
    }
}

/// Verifies every (topic, candidate) pair with default settings.
#[must_use]
pub fn run_all(registry: &CandidateRegistry, catalog: &FixtureCatalog) -> Report {
    Aggregator::default().run_all(registry, catalog)
}
