use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::domain::{MAX_SCORE, MIN_SCORE};

/// Months projected after the current one.
pub const TRAJECTORY_MONTHS: usize = 12;

/// Source of the per-month perturbation added to the base curve.
pub trait NoiseSource {
    fn next_noise(&mut self) -> f64;
}

/// Noise-free source; yields the bare convergence curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn next_noise(&mut self) -> f64 {
        0.0
    }
}

/// Zero-mean normal noise drawn with the Box-Muller transform.
#[derive(Debug, Clone)]
pub struct GaussianNoise<R> {
    rng: R,
    std_dev: f64,
    cached: Option<f64>,
}

impl GaussianNoise<StdRng> {
    pub fn seeded(seed: u64, std_dev: f64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), std_dev)
    }

    pub fn from_entropy(std_dev: f64) -> Self {
        Self::new(StdRng::from_entropy(), std_dev)
    }
}

impl<R: Rng> GaussianNoise<R> {
    pub fn new(rng: R, std_dev: f64) -> Self {
        Self {
            rng,
            std_dev,
            cached: None,
        }
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.cached.take() {
            return z;
        }

        let u1: f64 = self.rng.gen::<f64>().max(1e-12);
        let u2: f64 = self.rng.gen();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached = Some(r * theta.sin());
        r * theta.cos()
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn next_noise(&mut self) -> f64 {
        self.standard_normal() * self.std_dev
    }
}

/// Builds the 13-point monthly projection from `current` toward `projected`.
///
/// Declines converge twice as fast as improvements. Month 0 is the present
/// score and carries no noise. Every third month (and the one after it)
/// repeats the preceding value to mimic months where the score stalls.
pub(crate) fn synthesize(current: u16, projected: u16, noise: &mut dyn NoiseSource) -> Vec<u16> {
    let start = f64::from(current);
    let delta = f64::from(projected) - start;
    let tau = if projected >= current { 6.0 } else { 3.0 };

    let mut curve: Vec<f64> = (0..=TRAJECTORY_MONTHS)
        .map(|month| start + delta * (1.0 - (-(month as f64) / tau).exp()))
        .collect();

    for value in curve.iter_mut().skip(1) {
        *value += noise.next_noise();
    }

    for month in (3..curve.len()).step_by(3) {
        let held = curve[month - 1];
        curve[month] = held;
        if let Some(next) = curve.get_mut(month + 1) {
            *next = held;
        }
    }

    curve
        .into_iter()
        .map(|value| {
            value
                .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE))
                .round() as u16
        })
        .collect()
}
