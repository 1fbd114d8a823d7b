use axum::response::Response;
use serde_json::{json, Value};

use crate::simulator::domain::{CreditMixTier, CreditProfile, PaymentHistoryTier};
use crate::simulator::{CreditScoreSimulator, NoNoise, ScoreResult, SimulatorConfig};

/// Mid-range profile used throughout the worked example: expected final score 739.
pub(super) fn baseline_profile() -> CreditProfile {
    CreditProfile {
        current_score: 750,
        utilization_percent: 35,
        payment_history: PaymentHistoryTier::Good,
        credit_age_years: 4,
        credit_mix: CreditMixTier::Good,
        recent_inquiries: 2,
        total_debt: 350_000,
        credit_limit: 800_000,
        derogatory_marks: 0,
        overdue_amount: 0,
    }
}

/// Triggers every recommendation condition.
pub(super) fn distressed_profile() -> CreditProfile {
    CreditProfile {
        current_score: 650,
        utilization_percent: 90,
        payment_history: PaymentHistoryTier::Poor,
        credit_age_years: 1,
        credit_mix: CreditMixTier::Fair,
        recent_inquiries: 5,
        total_debt: 720_000,
        credit_limit: 800_000,
        derogatory_marks: 2,
        overdue_amount: 20_000,
    }
}

/// Triggers no recommendation condition.
pub(super) fn pristine_profile() -> CreditProfile {
    CreditProfile {
        current_score: 780,
        utilization_percent: 8,
        payment_history: PaymentHistoryTier::Perfect,
        credit_age_years: 9,
        credit_mix: CreditMixTier::Excellent,
        recent_inquiries: 0,
        total_debt: 40_000,
        credit_limit: 500_000,
        derogatory_marks: 0,
        overdue_amount: 0,
    }
}

pub(super) fn simulator() -> CreditScoreSimulator {
    CreditScoreSimulator::new(SimulatorConfig {
        noise_std_dev: 3.0,
        seed: Some(7),
    })
}

pub(super) fn quiet_result(profile: &CreditProfile) -> ScoreResult {
    simulator()
        .simulate_with(profile, &mut NoNoise)
        .expect("profile is valid")
}

pub(super) fn baseline_request() -> Value {
    json!({
        "current_score": 750,
        "utilization_percent": 35,
        "payment_history": "good",
        "credit_age_years": 4,
        "credit_mix": "good",
        "recent_inquiries": 2,
        "total_debt": 350000,
        "credit_limit": 800000,
        "derogatory_marks": 0,
        "overdue_amount": 0,
        "seed": 11,
        "start_date": "2025-01-01"
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
