//! End-to-end scenarios exercised through the public simulator facade.

use chrono::NaiveDate;
use credit_sim::simulator::{
    CreditFactor, CreditMixTier, CreditProfile, CreditScoreSimulator, NoNoise,
    PaymentHistoryTier, RecommendationKind, ScoreTrend, SimulatorConfig, ValidationError,
    MAX_RECOMMENDATIONS,
};

fn profile() -> CreditProfile {
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

#[test]
fn profile_deserializes_from_form_payload() {
    let payload = r#"{
        "current_score": 720,
        "utilization_percent": 12,
        "payment_history": "perfect",
        "credit_age_years": 6,
        "credit_mix": "excellent",
        "recent_inquiries": 1
    }"#;

    let profile: CreditProfile = serde_json::from_str(payload).expect("payload parses");

    assert_eq!(profile.payment_history, PaymentHistoryTier::Perfect);
    assert_eq!(profile.credit_mix, CreditMixTier::Excellent);
    assert_eq!(profile.credit_limit, 0);
    assert_eq!(profile.overdue_amount, 0);
}

#[test]
fn simulation_produces_breakdown_trajectory_and_plan() {
    let simulator = CreditScoreSimulator::new(SimulatorConfig {
        noise_std_dev: 3.0,
        seed: Some(21),
    });

    let result = simulator.simulate(&profile()).expect("valid profile");

    assert_eq!(result.final_score, 739);
    assert_eq!(result.trend(), ScoreTrend::Declining);
    assert_eq!(
        result
            .components
            .iter()
            .map(|component| component.factor)
            .collect::<Vec<_>>(),
        CreditFactor::ordered().to_vec()
    );
    assert_eq!(result.trajectory.len(), 13);
    assert_eq!(result.trajectory[0], 750);
    assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
    assert_eq!(
        result.recommendations[0].kind,
        RecommendationKind::ReduceUtilization
    );

    let start = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
    let timeline = result.timeline(start).expect("start date in range");
    assert_eq!(timeline.last().map(|point| point.month), Some(12));
}

#[test]
fn noise_free_runs_are_deterministic() {
    let simulator = CreditScoreSimulator::default();

    let first = simulator
        .simulate_with(&profile(), &mut NoNoise)
        .expect("valid profile");
    let second = simulator
        .simulate_with(&profile(), &mut NoNoise)
        .expect("valid profile");

    assert_eq!(first, second);
}

#[test]
fn invalid_profiles_are_returned_unmodified() {
    let mut profile = profile();
    profile.current_score = 905;

    let err = CreditScoreSimulator::default()
        .simulate(&profile)
        .expect_err("score above scale");

    assert_eq!(err, ValidationError::ScoreOutOfRange(905));
}
