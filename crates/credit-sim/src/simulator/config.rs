use serde::{Deserialize, Serialize};

use super::domain::ValidationError;

pub const DEFAULT_NOISE_STD_DEV: f64 = 3.0;

/// Tuning knobs for trajectory synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Standard deviation of the per-month Gaussian noise, in score points.
    pub noise_std_dev: f64,
    /// Fixed seed for reproducible trajectories; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.noise_std_dev.is_finite() || self.noise_std_dev < 0.0 {
            return Err(ValidationError::InvalidNoise(self.noise_std_dev));
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            noise_std_dev: DEFAULT_NOISE_STD_DEV,
            seed: None,
        }
    }
}
