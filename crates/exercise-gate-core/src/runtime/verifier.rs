// crates/exercise-gate-core/src/runtime/verifier.rs
// ============================================================================
// Module: Exercise Gate Verifier
// Description: Runs one candidate against every fixture of its topic.
// Purpose: Turn invocations into Pass/Fail/Error/Timeout outcomes in isolation.
// Dependencies: crate::{audit, core, interfaces, runtime::comparator}
// ============================================================================

//! ## Overview
//! Each fixture runs on its own named thread. The verifier waits for the
//! result with a bounded `recv_timeout`; when the deadline passes it records
//! `Timeout` and abandons the thread, so a non-terminating candidate cannot
//! stall the run. Panics are caught at every candidate boundary (call,
//! constructor, and each script step) and become `Error` outcomes carrying a
//! [`FaultKind::Panic`] fault.
//!
//! Stateful candidates are constructed fresh for every fixture, inside the
//! invocation thread that owns them. Invocation threads get an explicit
//! [`INVOCATION_STACK_BYTES`] stack; recursive candidates are expected to
//! bound their own depth, since a stack overflow aborts the process.
//!
//! # Invariants
//! - `verify` yields exactly one outcome per fixture, in fixture order.
//! - Outcomes contain no timing data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use crate::audit::AuditSink;
use crate::audit::CandidateVerifiedEvent;
use crate::audit::FixtureOutcomeEvent;
use crate::audit::NoopAuditSink;
use crate::audit::shielded;
use crate::core::CandidateFault;
use crate::core::Comparison;
use crate::core::Contract;
use crate::core::Determinism;
use crate::core::FaultKind;
use crate::core::Fixture;
use crate::core::HashDigest;
use crate::core::Observation;
use crate::core::Outcome;
use crate::core::OutcomeStatus;
use crate::core::ReportEntry;
use crate::interfaces::Callable;
use crate::interfaces::Candidate;
use crate::runtime::comparator::observation_matches;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default per-fixture timeout.
pub const DEFAULT_FIXTURE_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Stack size of each invocation thread.
pub const INVOCATION_STACK_BYTES: usize = 32 * 1024 * 1024;

/// Verifier settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Wall-clock budget for one fixture.
    pub fixture_timeout: Duration,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            fixture_timeout: DEFAULT_FIXTURE_TIMEOUT,
        }
    }
}

// ============================================================================
// SECTION: Verifier
// ============================================================================

/// Executes candidates against fixtures.
#[derive(Clone)]
pub struct Verifier {
    /// Verifier settings.
    config: VerifierConfig,
    /// Audit destination for outcome events.
    audit: Arc<dyn AuditSink>,
}

impl Verifier {
    /// Creates a verifier without audit output.
    #[must_use]
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            config,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Routes outcome events to `audit`.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn config(&self) -> VerifierConfig {
        self.config
    }

    /// Verifies `candidate` against every fixture, one outcome per fixture.
    #[must_use]
    pub fn verify(
        &self,
        contract: &Contract,
        candidate: &Candidate,
        fixtures: &[Fixture],
    ) -> Vec<Outcome> {
        fixtures
            .iter()
            .enumerate()
            .map(|(index, fixture)| {
                let outcome = self.verify_fixture(contract, candidate, index, fixture);
                let event = FixtureOutcomeEvent::from_outcome(&outcome);
                shielded(|| self.audit.record_outcome(&event));
                outcome
            })
            .collect()
    }

    /// Verifies a candidate and packages the result as a report entry.
    #[must_use]
    pub fn verify_candidate(
        &self,
        contract: &Contract,
        candidate: &Candidate,
        fixtures: &[Fixture],
        fixture_digest: Option<HashDigest>,
    ) -> ReportEntry {
        let entry = ReportEntry {
            topic_id: candidate.topic_id.clone(),
            variant_name: candidate.variant_name.clone(),
            kind: candidate.kind,
            fixture_digest,
            outcomes: self.verify(contract, candidate, fixtures),
        };
        shielded(|| self.audit.record_candidate(&CandidateVerifiedEvent::from_entry(&entry)));
        entry
    }

    /// Verifies one fixture.
    #[must_use]
    pub fn verify_fixture(
        &self,
        contract: &Contract,
        candidate: &Candidate,
        index: usize,
        fixture: &Fixture,
    ) -> Outcome {
        let verdict = match compatibility(contract, candidate, fixture) {
            Err(fault) => Verdict::error(None, fault),
            Ok(()) => match self.execute(candidate, fixture, index) {
                Execution::Finished(trace) => judge(contract, fixture, trace),
                Execution::TimedOut => Verdict {
                    status: OutcomeStatus::Timeout,
                    step: None,
                    observed: None,
                    fault: None,
                },
                Execution::NotStarted(fault) => Verdict::error(None, fault),
            },
        };
        Outcome {
            topic_id: candidate.topic_id.clone(),
            variant_name: candidate.variant_name.clone(),
            fixture_index: index,
            status: verdict.status,
            step: verdict.step,
            observed: verdict.observed,
            fault: verdict.fault,
        }
    }

    /// Runs the fixture on a dedicated thread bounded by the timeout.
    fn execute(&self, candidate: &Candidate, fixture: &Fixture, index: usize) -> Execution {
        let (sender, receiver) = mpsc::sync_channel(1);
        let callable = candidate.callable.clone();
        let fixture = fixture.clone();
        let name =
            format!("exercise-gate-{}-{}-{index}", candidate.topic_id, candidate.variant_name);
        let spawned =
            thread::Builder::new().name(name).stack_size(INVOCATION_STACK_BYTES).spawn(move || {
                let _ = sender.send(run_trace(&callable, &fixture));
            });
        if let Err(err) = spawned {
            return Execution::NotStarted(CandidateFault::new(FaultKind::Spawn, err.to_string()));
        }
        match receiver.recv_timeout(self.config.fixture_timeout) {
            Ok(trace) => Execution::Finished(trace),
            Err(RecvTimeoutError::Timeout) => Execution::TimedOut,
            Err(RecvTimeoutError::Disconnected) => Execution::Finished(Trace {
                observations: Vec::new(),
                fault: Some((
                    None,
                    CandidateFault::new(
                        FaultKind::Panic,
                        "invocation thread exited without a result",
                    ),
                )),
            }),
        }
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(VerifierConfig::default())
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Result of waiting on an invocation thread.
enum Execution {
    /// The thread reported a trace.
    Finished(Trace),
    /// The deadline passed first.
    TimedOut,
    /// The thread could not be spawned.
    NotStarted(CandidateFault),
}

/// Observations collected until completion or the first fault.
struct Trace {
    /// One observation per completed call or step.
    observations: Vec<Observation>,
    /// Fault and the step it occurred at (`None` for call or constructor).
    fault: Option<(Option<usize>, CandidateFault)>,
}

/// Runs a fixture to completion inside the invocation thread.
fn run_trace(callable: &Callable, fixture: &Fixture) -> Trace {
    match (callable, fixture) {
        (
            Callable::Pure(call),
            Fixture::Call {
                inputs, ..
            },
        ) => match guarded(|| call(inputs)) {
            Ok(observation) => Trace {
                observations: vec![observation],
                fault: None,
            },
            Err(fault) => Trace {
                observations: Vec::new(),
                fault: Some((None, fault)),
            },
        },
        (
            Callable::Stateful(construct),
            Fixture::Script {
                init,
                steps,
            },
        ) => {
            let mut session = match guarded(|| construct(init)) {
                Ok(session) => session,
                Err(fault) => {
                    return Trace {
                        observations: Vec::new(),
                        fault: Some((None, fault)),
                    };
                }
            };
            let mut observations = Vec::with_capacity(steps.len());
            for (index, step) in steps.iter().enumerate() {
                match guarded(|| session.apply(&step.op, &step.args)) {
                    Ok(observation) => observations.push(observation),
                    Err(fault) => {
                        return Trace {
                            observations,
                            fault: Some((Some(index), fault)),
                        };
                    }
                }
            }
            Trace {
                observations,
                fault: None,
            }
        }
        _ => Trace {
            observations: Vec::new(),
            fault: Some((
                None,
                CandidateFault::new(FaultKind::Incompatible, "callable does not fit fixture kind"),
            )),
        },
    }
}

/// Invokes a candidate boundary, converting panics into faults.
fn guarded<T>(call: impl FnOnce() -> Result<T, CandidateFault>) -> Result<T, CandidateFault> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(payload) => Err(CandidateFault::new(FaultKind::Panic, panic_message(payload.as_ref()))),
    }
}

/// Entry recording an `Error` outcome for every fixture of a candidate whose
/// verification was cut short by `fault`.
pub(crate) fn aborted_entry(
    candidate: &Candidate,
    fixtures: &[Fixture],
    fixture_digest: Option<HashDigest>,
    fault: &CandidateFault,
) -> ReportEntry {
    ReportEntry {
        topic_id: candidate.topic_id.clone(),
        variant_name: candidate.variant_name.clone(),
        kind: candidate.kind,
        fixture_digest,
        outcomes: (0 .. fixtures.len())
            .map(|index| Outcome {
                topic_id: candidate.topic_id.clone(),
                variant_name: candidate.variant_name.clone(),
                fixture_index: index,
                status: OutcomeStatus::Error,
                step: None,
                observed: None,
                fault: Some(fault.clone()),
            })
            .collect(),
    }
}

/// Extracts a readable panic message.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "candidate panicked with a non-string payload".to_string()
    }
}

/// Checks callable and fixture kinds against the contract.
fn compatibility(
    contract: &Contract,
    candidate: &Candidate,
    fixture: &Fixture,
) -> Result<(), CandidateFault> {
    let callable = candidate.callable.determinism();
    if callable != contract.determinism {
        return Err(CandidateFault::new(
            FaultKind::Incompatible,
            format!(
                "candidate is {} but topic {} is {}",
                determinism_name(callable),
                contract.topic_id,
                determinism_name(contract.determinism)
            ),
        ));
    }
    let fits = matches!(
        (contract.determinism, fixture),
        (Determinism::Pure, Fixture::Call { .. })
            | (Determinism::Stateful, Fixture::Script { .. })
    );
    if fits {
        Ok(())
    } else {
        Err(CandidateFault::new(
            FaultKind::Incompatible,
            format!("{} fixture does not fit topic {}", fixture.kind_label(), contract.topic_id),
        ))
    }
}

/// Returns a label for a determinism value.
const fn determinism_name(determinism: Determinism) -> &'static str {
    match determinism {
        Determinism::Pure => "pure",
        Determinism::Stateful => "stateful",
    }
}

// ============================================================================
// SECTION: Judgement
// ============================================================================

/// Status plus supporting detail for one fixture.
struct Verdict {
    /// Outcome status.
    status: OutcomeStatus,
    /// Deciding step.
    step: Option<usize>,
    /// Deciding observation.
    observed: Option<Observation>,
    /// Captured fault.
    fault: Option<CandidateFault>,
}

impl Verdict {
    /// Error verdict.
    const fn error(step: Option<usize>, fault: CandidateFault) -> Self {
        Self {
            status: OutcomeStatus::Error,
            step,
            observed: None,
            fault: Some(fault),
        }
    }

    /// Pass or fail verdict carrying the observation.
    const fn compared(passed: bool, step: Option<usize>, observed: Option<Observation>) -> Self {
        Self {
            status: if passed { OutcomeStatus::Pass } else { OutcomeStatus::Fail },
            step,
            observed,
            fault: None,
        }
    }
}

/// Compares a finished trace with the fixture's expectations.
fn judge(contract: &Contract, fixture: &Fixture, trace: Trace) -> Verdict {
    let Trace {
        observations,
        fault,
    } = trace;
    match fixture {
        Fixture::Call {
            inputs,
            expected,
        } => {
            if let Some((step, fault)) = fault {
                return Verdict::error(step, fault);
            }
            let Some(observed) = observations.into_iter().next() else {
                return Verdict::error(
                    None,
                    CandidateFault::new(FaultKind::Incompatible, "candidate produced no result"),
                );
            };
            let passed = observation_matches(&contract.comparison, inputs, expected, &observed);
            Verdict::compared(passed, None, Some(observed))
        }
        Fixture::Script {
            steps, ..
        } => {
            for (index, (step, observed)) in steps.iter().zip(observations).enumerate() {
                let Some(expected) = &step.expected else {
                    continue;
                };
                let comparison =
                    contract.operation(&step.op).map_or(Comparison::Exact, |spec| spec.comparison);
                if !observation_matches(&comparison, &step.args, expected, &observed) {
                    return Verdict::compared(false, Some(index), Some(observed));
                }
            }
            match fault {
                Some((step, fault)) => Verdict::error(step, fault),
                None => Verdict::compared(true, None, None),
            }
        }
    }
}
