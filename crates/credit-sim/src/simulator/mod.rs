//! Credit score simulation: factor breakdown, penalties, recommendations, and a
//! synthetic 12-month trajectory for a self-reported credit profile.
//!
//! Scoring is deterministic. The only randomness is the trajectory noise, drawn
//! from an injectable [`NoiseSource`] so a seeded run reproduces exactly.

mod config;
pub mod domain;
mod factors;
mod recommendations;
pub mod router;
mod timeline;
mod trajectory;

#[cfg(test)]
mod tests;

pub use config::{SimulatorConfig, DEFAULT_NOISE_STD_DEV};
pub use domain::{
    CreditFactor, CreditMixTier, CreditProfile, PaymentHistoryTier, UnknownTier,
    ValidationError, MAX_SCORE, MIN_SCORE,
};
pub use recommendations::{
    ImpactEstimate, Recommendation, RecommendationKind, MAX_RECOMMENDATIONS,
};
pub use router::simulator_router;
pub use timeline::{milestones, KeyEvent, Milestone, TrajectoryPoint};
pub use trajectory::{GaussianNoise, NoNoise, NoiseSource, TRAJECTORY_MONTHS};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Stateless simulator; safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct CreditScoreSimulator {
    config: SimulatorConfig,
}

impl CreditScoreSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulates with the configured seed, or fresh entropy when none is set.
    pub fn simulate(&self, profile: &CreditProfile) -> Result<ScoreResult, ValidationError> {
        match self.config.seed {
            Some(seed) => self.simulate_seeded(profile, seed),
            None => {
                self.config.validate()?;
                let mut noise = GaussianNoise::from_entropy(self.config.noise_std_dev);
                self.simulate_with(profile, &mut noise)
            }
        }
    }

    pub fn simulate_seeded(
        &self,
        profile: &CreditProfile,
        seed: u64,
    ) -> Result<ScoreResult, ValidationError> {
        self.config.validate()?;
        let mut noise = GaussianNoise::seeded(seed, self.config.noise_std_dev);
        self.simulate_with(profile, &mut noise)
    }

    pub fn simulate_with(
        &self,
        profile: &CreditProfile,
        noise: &mut dyn NoiseSource,
    ) -> Result<ScoreResult, ValidationError> {
        if let Err(err) = profile.validate() {
            warn!(%err, "rejected credit profile");
            return Err(err);
        }

        let components = factors::score_factors(profile);
        let penalties = factors::score_penalties(profile);
        let final_score = factors::composite_score(profile.current_score, &components, &penalties);
        let trajectory = trajectory::synthesize(profile.current_score, final_score, noise);
        let key_events = timeline::key_events(profile, &trajectory);
        let recommendations = recommendations::recommend(profile);

        debug!(
            current_score = profile.current_score,
            final_score,
            recommendations = recommendations.len(),
            "credit simulation complete"
        );

        Ok(ScoreResult {
            current_score: profile.current_score,
            final_score,
            score_change: i32::from(final_score) - i32::from(profile.current_score),
            components,
            penalties,
            trajectory,
            key_events,
            recommendations,
        })
    }
}

/// Contribution of one weighted factor, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: CreditFactor,
    pub weight: f64,
    pub impact: f64,
    pub reason: String,
}

impl ScoreComponent {
    pub fn weighted_impact(&self) -> f64 {
        self.impact * self.weight
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyKind {
    DerogatoryMarks,
    OverdueAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyNote {
    pub kind: PenaltyKind,
    pub points: f64,
    pub reason: String,
}

/// Unweighted deductions applied on top of the factor breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePenalties {
    pub derogatory: f64,
    pub overdue: f64,
    pub notes: Vec<PenaltyNote>,
}

impl ScorePenalties {
    pub fn total(&self) -> f64 {
        self.derogatory + self.overdue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTrend {
    Improving,
    Declining,
    Steady,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub current_score: u16,
    pub final_score: u16,
    pub score_change: i32,
    pub components: Vec<ScoreComponent>,
    pub penalties: ScorePenalties,
    pub trajectory: Vec<u16>,
    pub key_events: Vec<KeyEvent>,
    pub recommendations: Vec<Recommendation>,
}

impl ScoreResult {
    pub fn weighted_impact(&self) -> f64 {
        self.components
            .iter()
            .map(ScoreComponent::weighted_impact)
            .sum()
    }

    pub fn trend(&self) -> ScoreTrend {
        match self.score_change {
            change if change > 0 => ScoreTrend::Improving,
            change if change < 0 => ScoreTrend::Declining,
            _ => ScoreTrend::Steady,
        }
    }

    pub fn component(&self, factor: CreditFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }

    /// Dated chart points, one every 30 days from `start`.
    pub fn timeline(&self, start: NaiveDate) -> Result<Vec<TrajectoryPoint>, ValidationError> {
        timeline::points(&self.trajectory, start)
    }
}
