// crates/exercise-gate-catalog/src/topics/knapsack_fractional.rs
// ============================================================================
// Module: Fractional Knapsack
// Description: Greedy best value when items may be split.
// Purpose: Provide the `knapsack-fractional` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(weights: seq<float>, values: seq<float>, capacity: float) -> float`,
//! compared within an absolute tolerance of `1e-6`.

use exercise_gate_core::Callable;
use exercise_gate_core::Comparison;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::sentinel;

/// Absolute tolerance for the packed value.
pub const EPSILON: f64 = 1e-6;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "knapsack-fractional",
    contract,
    fixtures,
    stub,
    solutions: &[("greedy", greedy_candidate)],
};

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Takes items by descending value density, splitting the last one.
///
/// # Errors
///
/// Returns [`RejectionKind::InvalidInput`] for mismatched lengths or any
/// negative or non-finite weight, value, or capacity.
pub fn greedy(weights: &[f64], values: &[f64], capacity: f64) -> Result<f64, RejectionKind> {
    let valid = |number: &f64| number.is_finite() && *number >= 0.0;
    if weights.len() != values.len()
        || !weights.iter().all(valid)
        || !values.iter().all(valid)
        || !valid(&capacity)
    {
        return Err(RejectionKind::InvalidInput);
    }
    let mut items: Vec<(f64, f64)> = weights.iter().copied().zip(values.iter().copied()).collect();
    items.sort_by(|(w_a, v_a), (w_b, v_b)| (v_b * w_a).total_cmp(&(v_a * w_b)));

    let mut remaining = capacity;
    let mut total = 0.0;
    for (weight, value) in items {
        if weight <= remaining {
            total += value;
            remaining -= weight;
        } else {
            total += value * (remaining / weight);
            break;
        }
    }
    Ok(total)
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![
            ValueShape::seq(ValueShape::Float),
            ValueShape::seq(ValueShape::Float),
            ValueShape::Float,
        ],
        ValueShape::Float,
    )
    .with_comparison(Comparison::Approximate {
        epsilon: EPSILON,
    })
}

/// Stub that never packs anything.
fn stub() -> Callable {
    sentinel(json!(0))
}

/// Greedy variant.
fn greedy_candidate() -> Callable {
    Callable::typed(|(weights, values, capacity): (Vec<f64>, Vec<f64>, f64)| {
        greedy(&weights, &values, capacity)
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    vec![
        call(json!([[10, 20, 30], [60, 100, 120], 50]), Expected::value(json!(240))),
        call(json!([[3, 3, 2, 5, 1], [10, 15, 10, 12, 8], 10]), Expected::value(json!(45.4))),
        call(json!([[10, 20, 30], [60, 100, 120], 5]), Expected::value(json!(30))),
        call(json!([[10, 20, 30], [60, 100, 120], 100]), Expected::value(json!(280))),
        call(json!([[], [], 50]), Expected::value(json!(0))),
        call(json!([[1, 2], [3], 5]), Expected::Rejected(RejectionKind::InvalidInput)),
    ]
}
