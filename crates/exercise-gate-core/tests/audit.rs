// crates/exercise-gate-core/tests/audit.rs
// ============================================================================
// Module: Audit Sink Tests
// Description: JSON-line audit output for file and memory sinks.
// ============================================================================
//! ## Overview
//! Ensures file sinks append one JSON object per line and event payloads
//! carry their labels and identifiers.

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

use exercise_gate_core::AuditSink;
use exercise_gate_core::FileAuditSink;
use exercise_gate_core::TopicId;
use exercise_gate_core::audit::RunCompleteEvent;
use exercise_gate_core::audit::TopicRejectedEvent;
use exercise_gate_core::core::ReportSummary;
use serde_json::Value;

/// File sinks append JSON lines across reopen.
#[test]
fn file_sink_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    {
        let sink = FileAuditSink::new(&path).unwrap();
        sink.record_rejection(&TopicRejectedEvent::new(TopicId::new("trie"), "bad fixtures"));
    }
    let sink = FileAuditSink::new(&path).unwrap();
    sink.record_run(&RunCompleteEvent::new(ReportSummary::default()));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> =
        contents.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "topic_rejected");
    assert_eq!(lines[0]["topic_id"], "trie");
    assert_eq!(lines[1]["event"], "run_complete");
    assert!(lines[1]["timestamp_ms"].is_u64());
}
