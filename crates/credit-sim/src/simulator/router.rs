use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CreditFactor, CreditProfile};
use super::timeline::{milestones, Milestone, TrajectoryPoint};
use super::{CreditScoreSimulator, ScoreResult};

/// Form submission: the profile plus optional reproducibility controls.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    #[serde(flatten)]
    pub profile: CreditProfile,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub timeline: Vec<TrajectoryPoint>,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorView {
    pub factor: CreditFactor,
    pub label: &'static str,
    pub weight: f64,
}

/// Router builder exposing the simulator over HTTP.
pub fn simulator_router(simulator: Arc<CreditScoreSimulator>) -> Router {
    Router::new()
        .route("/api/v1/credit/simulate", post(simulate_handler))
        .route("/api/v1/credit/factors", get(factors_handler))
        .with_state(simulator)
}

pub(crate) async fn simulate_handler(
    State(simulator): State<Arc<CreditScoreSimulator>>,
    axum::Json(request): axum::Json<SimulationRequest>,
) -> Response {
    let SimulationRequest {
        profile,
        seed,
        start_date,
    } = request;

    let outcome = match seed {
        Some(seed) => simulator.simulate_seeded(&profile, seed),
        None => simulator.simulate(&profile),
    }
    .and_then(|result| {
        let start = start_date.unwrap_or_else(|| Local::now().date_naive());
        Ok(SimulationResponse {
            timeline: result.timeline(start)?,
            milestones: milestones(),
            result,
        })
    });

    match outcome {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn factors_handler() -> axum::Json<Vec<FactorView>> {
    let factors = CreditFactor::ordered()
        .into_iter()
        .map(|factor| FactorView {
            factor,
            label: factor.label(),
            weight: factor.weight(),
        })
        .collect();
    axum::Json(factors)
}
