// crates/exercise-gate-core/tests/aggregator.rs
// ============================================================================
// Module: Report Aggregator Tests
// Description: Whole-run aggregation, isolation, policies, and audit events.
// ============================================================================
//! ## Overview
//! Runs small registries through the aggregator and checks that every
//! (topic, variant, fixture) triple is reported, a misbehaving candidate
//! does not affect others, and rejected or fixture-less topics are listed.

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

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use exercise_gate_core::Aggregator;
use exercise_gate_core::AggregatorConfig;
use exercise_gate_core::AuditSink;
use exercise_gate_core::Callable;
use exercise_gate_core::CandidateRegistry;
use exercise_gate_core::Comparison;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::FaultKind;
use exercise_gate_core::Fixture;
use exercise_gate_core::FixtureCatalog;
use exercise_gate_core::MemoryAuditSink;
use exercise_gate_core::OutcomeStatus;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::TopicAccessPolicy;
use exercise_gate_core::TopicId;
use exercise_gate_core::ValueShape;
use exercise_gate_core::Verifier;
use exercise_gate_core::VerifierConfig;
use exercise_gate_core::audit::CandidateVerifiedEvent;
use exercise_gate_core::audit::FixtureOutcomeEvent;
use exercise_gate_core::audit::RunCompleteEvent;
use exercise_gate_core::run_all;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn sum_contract() -> Contract {
    Contract::pure("sum", vec![ValueShape::seq(ValueShape::Int)], ValueShape::Int)
}

fn sum_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::call(vec![json!([1, 2, 3])], Expected::value(json!(6))),
        Fixture::call(vec![json!([])], Expected::value(json!(0))),
    ]
}

fn registry() -> CandidateRegistry {
    let mut registry = CandidateRegistry::new();
    registry
        .register_stub("sum", Callable::typed(|(_items,): (Vec<i64>,)| Ok(0_i64)))
        .unwrap();
    registry
        .register_solution(
            "sum",
            "fold",
            Callable::typed(|(items,): (Vec<i64>,)| Ok(items.iter().sum::<i64>())),
        )
        .unwrap();
    registry
        .register_solution(
            "sum",
            "hangs",
            Callable::pure(|_| {
                loop {
                    std::thread::sleep(Duration::from_millis(50));
                }
            }),
        )
        .unwrap();
    registry
        .register_solution(
            "max",
            "iterative",
            Callable::typed(|(items,): (Vec<i64>,)| {
                items.iter().max().copied().ok_or(RejectionKind::Empty)
            }),
        )
        .unwrap();
    registry
}

fn max_contract() -> Contract {
    Contract::pure("max", vec![ValueShape::seq(ValueShape::Int)], ValueShape::Int)
}

/// Property check that always panics.
fn exploding_property(_inputs: &[Value], _expected: &Value, _observed: &Value) -> bool {
    panic!("property exploded")
}

/// Audit sink that panics on every event of one variant and at run end.
struct PanickingSink {
    /// Variant whose events panic.
    variant: &'static str,
}

impl AuditSink for PanickingSink {
    fn record_outcome(&self, event: &FixtureOutcomeEvent) {
        assert_ne!(event.variant_name.as_str(), self.variant, "sink refuses outcome");
    }

    fn record_candidate(&self, event: &CandidateVerifiedEvent) {
        assert_ne!(event.variant_name.as_str(), self.variant, "sink refuses candidate");
    }

    fn record_run(&self, _event: &RunCompleteEvent) {
        panic!("sink refuses run summary");
    }
}

fn aggregator(config: AggregatorConfig) -> Aggregator {
    Aggregator::new(
        Verifier::new(VerifierConfig {
            fixture_timeout: Duration::from_millis(150),
        }),
        config,
    )
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Every triple is reported and a hanging candidate does not block others.
#[test]
fn run_reports_every_triple() {
    let mut catalog = FixtureCatalog::new();
    catalog.insert(sum_contract(), sum_fixtures()).unwrap();
    let report = aggregator(AggregatorConfig::default()).run_all(&registry(), &catalog);

    assert_eq!(report.entries.len(), 3);
    assert!(report.entries.iter().all(|entry| entry.outcomes.len() == 2));
    assert!(report.entry("sum", "fold").unwrap().all_passed());
    let hangs = report.outcomes("sum", "hangs").unwrap();
    assert!(hangs.iter().all(|outcome| outcome.status == OutcomeStatus::Timeout));
    let stub = report.outcomes("sum", "stub").unwrap();
    assert_eq!(stub[0].status, OutcomeStatus::Fail);
    assert_eq!(stub[1].status, OutcomeStatus::Pass);
    assert_eq!(report.topics_without_fixtures, vec![TopicId::new("max")]);
    assert_eq!(report.regressions().len(), 1);
}

/// A panicking audit sink loses its events but no entries or outcomes.
#[test]
fn panicking_audit_sink_keeps_every_triple() {
    let mut catalog = FixtureCatalog::new();
    catalog.insert(sum_contract(), sum_fixtures()).unwrap();
    let config = AggregatorConfig {
        workers: 1,
        ..AggregatorConfig::default()
    };
    let report = aggregator(config)
        .with_audit(Arc::new(PanickingSink {
            variant: "stub",
        }))
        .run_all(&registry(), &catalog);

    assert_eq!(report.entries.len(), 3);
    assert!(report.entries.iter().all(|entry| entry.outcomes.len() == 2));
    assert!(report.entry("sum", "fold").unwrap().all_passed());
    let stub = report.outcomes("sum", "stub").unwrap();
    assert_eq!(stub[0].status, OutcomeStatus::Fail);
    assert_eq!(stub[1].status, OutcomeStatus::Pass);
}

/// A panic while judging one topic becomes `Error` outcomes for that topic only.
#[test]
fn judging_panic_is_isolated_to_its_topic() {
    let mut catalog = FixtureCatalog::new();
    let contract = sum_contract().with_comparison(Comparison::Property(exploding_property));
    catalog.insert(contract, sum_fixtures()).unwrap();
    catalog
        .insert(
            max_contract(),
            vec![Fixture::call(vec![json!([3, 9, 2])], Expected::value(json!(9)))],
        )
        .unwrap();
    let report = aggregator(AggregatorConfig::default()).run_all(&registry(), &catalog);

    assert_eq!(report.entries.len(), 4);
    for variant in ["stub", "fold"] {
        let outcomes = report.outcomes("sum", variant).unwrap();
        assert_eq!(outcomes.len(), 2);
        for outcome in outcomes {
            assert_eq!(outcome.status, OutcomeStatus::Error);
            let fault = outcome.fault.as_ref().unwrap();
            assert_eq!(fault.kind, FaultKind::Panic);
            assert!(fault.message.contains("property exploded"));
        }
    }
    let hangs = report.outcomes("sum", "hangs").unwrap();
    assert!(hangs.iter().all(|outcome| outcome.status == OutcomeStatus::Timeout));
    assert!(report.entry("max", "iterative").unwrap().all_passed());
}

/// A single worker produces the same report as many workers.
#[test]
fn worker_count_does_not_change_results() {
    let mut catalog = FixtureCatalog::new();
    catalog.insert(sum_contract(), sum_fixtures()).unwrap();
    let serial = aggregator(AggregatorConfig {
        workers: 1,
        ..AggregatorConfig::default()
    })
    .run_all(&registry(), &catalog);
    let parallel = aggregator(AggregatorConfig {
        workers: 8,
        ..AggregatorConfig::default()
    })
    .run_all(&registry(), &catalog);
    assert_eq!(serial, parallel);
}

/// Stubs can be excluded and topics filtered by policy.
#[test]
fn config_filters_stubs_and_topics() {
    let mut catalog = FixtureCatalog::new();
    catalog.insert(sum_contract(), sum_fixtures()).unwrap();
    let config = AggregatorConfig {
        include_stubs: false,
        policy: TopicAccessPolicy {
            allowlist: Some(BTreeSet::from(["sum".to_string()])),
            denylist: BTreeSet::new(),
        },
        ..AggregatorConfig::default()
    };
    let report = aggregator(config).run_all(&registry(), &catalog);
    assert!(report.entry("sum", "stub").is_none());
    assert!(report.entry("sum", "fold").is_some());
    assert!(report.topics_without_fixtures.is_empty());
}

/// Topics rejected at load time are listed and produce no entries.
#[test]
fn rejected_topics_are_listed() {
    let mut catalog = FixtureCatalog::new();
    let bad = vec![Fixture::call(vec![json!([1]), json!(2)], Expected::value(json!(1)))];
    assert!(catalog.insert(sum_contract(), bad).is_err());
    let report = run_all(&registry(), &catalog);
    assert!(report.entry("sum", "fold").is_none());
    assert_eq!(report.rejected_topics.len(), 1);
    assert_eq!(report.rejected_topics[0].topic_id.as_str(), "sum");
    assert_eq!(report.summary().rejected_topics, 1);
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Outcome, candidate, and run events reach the audit sink.
#[test]
fn audit_events_are_emitted() {
    let mut catalog = FixtureCatalog::new();
    catalog.insert(sum_contract(), sum_fixtures()).unwrap();
    let sink = Arc::new(MemoryAuditSink::new());
    let aggregator = aggregator(AggregatorConfig::default()).with_audit(sink.clone());
    let report = aggregator.run_all(&registry(), &catalog);

    assert_eq!(sink.events_named("fixture_outcome").len(), report.summary().outcomes);
    assert_eq!(sink.events_named("candidate_verified").len(), 3);
    let runs = sink.events_named("run_complete");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["summary"]["candidates"], json!(3));
}
