//! Monte Carlo simulation of total daily demand.
//!
//! Each trial draws one normal sample per hourly bucket, using the weekly
//! average as the mean and the daily-total standard deviation as the
//! spread, and sums the draws into one simulated day. Reusing the
//! daily-total spread per hour is inherited from the original analysis and
//! kept as-is.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::aggregate::WeeklyAggregates;

/// Default number of Monte Carlo trials.
pub const DEFAULT_NUM_TRIALS: usize = 1000;

/// Parameters for a simulation run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulationParams {
    /// Number of trials (T).
    pub num_trials: usize,
    /// Seed for reproducibility (optional; if None, a random seed is drawn).
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
        }
    }
}

impl SimulationParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, num_trials: usize) -> Self {
        self.num_trials = num_trials;
        self
    }

    /// The base seed for this run, drawing one from entropy if unset.
    pub(crate) fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

/// One simulated day: the sum of `hours` independent normal draws.
///
/// A negative or NaN spread cannot be fitted; the trial total becomes NaN
/// rather than an error, matching the one-shot-script behavior.
pub(crate) fn trial_total(mean: f64, std_dev: f64, hours: usize, rng: &mut StdRng) -> f64 {
    match Normal::new(mean, std_dev) {
        Ok(normal) => (0..hours).map(|_| normal.sample(rng)).sum(),
        Err(_) => f64::NAN,
    }
}

/// Run the simulation sequentially, returning one total per trial.
///
/// Each trial gets its own RNG seeded from the base seed plus the trial
/// index, so a seeded run is reproducible and independent of trial order.
pub fn simulate_totals(
    aggregates: &WeeklyAggregates,
    params: &SimulationParams,
) -> Vec<f64> {
    let seed = params.resolve_seed();
    (0..params.num_trials)
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
            trial_total(
                aggregates.weekly_average,
                aggregates.std_deviation,
                aggregates.hours_per_day,
                &mut rng,
            )
        })
        .collect()
}
