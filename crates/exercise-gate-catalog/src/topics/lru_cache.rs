// crates/exercise-gate-catalog/src/topics/lru_cache.rs
// ============================================================================
// Module: LRU Cache Topic
// Description: Session adapter for the least-recently-used cache.
// Purpose: Provide the `lru-cache` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Constructed with a capacity. `get(key) -> int` refreshes recency and
//! reports `not_found` for missing keys; `put(key, value)` inserts or
//! updates, evicting the least recently used entry when full.

use exercise_gate_core::Callable;
use exercise_gate_core::CandidateFault;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::Observation;
use exercise_gate_core::OperationSpec;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::Session;
use exercise_gate_core::ValueShape;
use exercise_gate_core::decode_args;
use exercise_gate_core::expect_no_args;
use serde_json::Value;
use serde_json::json;

use super::TopicDefinition;
use super::check;
use super::queue::capacity;
use super::reply;
use super::reply_or;
use super::run;
use super::sentinel_session;
use super::yields;
use crate::structures::LruCache;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "lru-cache",
    contract,
    fixtures,
    stub,
    solutions: &[("linked-slab", linked_slab_candidate)],
};

// ============================================================================
// SECTION: Session
// ============================================================================

/// Session over one cache.
struct CacheSession {
    /// Backing cache.
    cache: LruCache<i64, i64>,
}

impl Session for CacheSession {
    fn apply(&mut self, op: &str, args: &[Value]) -> Result<Observation, CandidateFault> {
        match op {
            "get" => {
                let (key,): (i64,) = decode_args(args)?;
                reply_or(self.cache.get(&key), RejectionKind::NotFound)
            }
            "put" => {
                let (key, value): (i64, i64) = decode_args(args)?;
                self.cache.put(key, value);
                Ok(Observation::unit())
            }
            "size" => {
                expect_no_args(args)?;
                reply(&self.cache.len())
            }
            _ => Err(CandidateFault::unsupported_operation(op)),
        }
    }
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::stateful(DEFINITION.id, vec![ValueShape::Int])
        .with_operation("get", OperationSpec::new(vec![ValueShape::Int], ValueShape::Int))
        .with_operation(
            "put",
            OperationSpec::new(vec![ValueShape::Int, ValueShape::Int], ValueShape::Any),
        )
        .with_operation("size", OperationSpec::new(Vec::new(), ValueShape::Int))
}

/// Stub that has never cached anything.
fn stub() -> Callable {
    sentinel_session(Observation::Rejected(RejectionKind::NotFound))
}

/// Slab-backed linked list plus hash index.
fn linked_slab_candidate() -> Callable {
    Callable::stateful(|init| {
        Ok(Box::new(CacheSession {
            cache: LruCache::with_capacity(capacity(init)?),
        }) as Box<dyn Session>)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in scripts.
fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture::script(vec![json!(2)], vec![
            run("put", json!([1, 1])),
            run("put", json!([2, 2])),
            yields("get", json!([1]), json!(1)),
            run("put", json!([3, 3])),
            check("get", json!([2]), Expected::not_found()),
            run("put", json!([4, 4])),
            check("get", json!([1]), Expected::not_found()),
            yields("get", json!([3]), json!(3)),
            yields("get", json!([4]), json!(4)),
        ]),
        Fixture::script(vec![json!(1)], vec![
            run("put", json!([1, 1])),
            yields("get", json!([1]), json!(1)),
            run("put", json!([2, 2])),
            check("get", json!([1]), Expected::not_found()),
            yields("get", json!([2]), json!(2)),
        ]),
        Fixture::script(vec![json!(2)], vec![
            run("put", json!([1, 1])),
            run("put", json!([2, 2])),
            run("put", json!([1, 3])),
            yields("get", json!([1]), json!(3)),
            yields("size", Value::Null, json!(2)),
        ]),
        Fixture::script(vec![json!(0)], vec![
            run("put", json!([1, 1])),
            check("get", json!([1]), Expected::not_found()),
            yields("size", Value::Null, json!(0)),
        ]),
    ]
}
