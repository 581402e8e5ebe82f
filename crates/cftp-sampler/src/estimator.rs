use cftp_chain::TransitionMatrix;
use cftp_core::errors::{CftpError, ErrorInfo};
use cftp_core::rng::RngHandle;
use cftp_core::StateIndex;
use serde::{Deserialize, Serialize};

use crate::coalesce::{sample_one, CoalescenceOutcome};
use crate::config::{ExhaustionPolicy, RunConfig};
use crate::determinism;

/// Empirical stationary distribution built from independent exact draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalDistribution {
    counts: Vec<u64>,
    draws: u64,
}

impl EmpiricalDistribution {
    /// Creates an empty distribution over `order` states.
    pub fn new(order: usize) -> Self {
        Self {
            counts: vec![0; order],
            draws: 0,
        }
    }

    /// Number of states the distribution ranges over.
    pub fn order(&self) -> usize {
        self.counts.len()
    }

    /// Occupation count per state.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Occupation count of a single state.
    pub fn count(&self, state: StateIndex) -> u64 {
        self.counts[state.as_raw()]
    }

    /// Total number of recorded draws.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Normalized probability vector `counts / draws` (zeros before any draw).
    pub fn densities(&self) -> Vec<f64> {
        if self.draws == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = self.draws as f64;
        self.counts
            .iter()
            .map(|&count| count as f64 / total)
            .collect()
    }

    fn record(&mut self, state: StateIndex) {
        self.counts[state.as_raw()] += 1;
        self.draws += 1;
    }
}

/// Result of an estimator run, with attempt bookkeeping for provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// The empirical stationary distribution.
    pub distribution: EmpiricalDistribution,
    /// Total coalescence attempts executed, retries included.
    pub attempts: u64,
    /// Attempts that exhausted the step budget and were retried.
    pub retries: u64,
}

/// Builds an empirical stationary distribution from `samples` exact draws.
///
/// Convenience wrapper around [`estimate`] that discards the attempt
/// bookkeeping.
pub fn sample_distribution(
    transition: &TransitionMatrix,
    samples: u64,
    config: &RunConfig,
) -> Result<EmpiricalDistribution, CftpError> {
    estimate(transition, samples, config).map(|estimate| estimate.distribution)
}

/// Runs the coalescence engine `samples` times and tallies the results.
///
/// Every attempt owns a fresh composition table and an independently seeded
/// draw stream. An attempt that exhausts its step budget is never counted:
/// depending on [`ExhaustionPolicy`] it is either re-run on a fresh retry
/// substream or escalated as a sampling error.
pub fn estimate(
    transition: &TransitionMatrix,
    samples: u64,
    config: &RunConfig,
) -> Result<Estimate, CftpError> {
    let mut distribution = EmpiricalDistribution::new(transition.order());
    let mut attempts = 0u64;
    let mut retries = 0u64;
    let master_seed = config.seed_policy.master_seed;
    let max_retries = match config.exhaustion {
        ExhaustionPolicy::Retry { max_retries } => max_retries as u64,
        ExhaustionPolicy::Fail => 0,
    };

    for draw in 0..samples {
        let mut sampled = None;
        for retry in 0..=max_retries {
            attempts += 1;
            if retry > 0 {
                retries += 1;
            }
            let mut rng = RngHandle::from_seed(determinism::attempt_seed(master_seed, draw, retry));
            match sample_one(transition, config.step_budget, &mut rng) {
                CoalescenceOutcome::Coalesced { state, .. } => {
                    sampled = Some(state);
                    break;
                }
                CoalescenceOutcome::Exhausted { .. } => {
                    if matches!(config.exhaustion, ExhaustionPolicy::Fail) {
                        return Err(non_coalescence_error(config, draw, retry));
                    }
                }
            }
        }
        let Some(state) = sampled else {
            return Err(non_coalescence_error(config, draw, max_retries));
        };
        distribution.record(state);
    }

    Ok(Estimate {
        distribution,
        attempts,
        retries,
    })
}

fn non_coalescence_error(config: &RunConfig, draw: u64, retry: u64) -> CftpError {
    CftpError::Sampling(
        ErrorInfo::new(
            "non-coalescence",
            "coalescence attempt exhausted its step budget",
        )
        .with_context("draw", draw.to_string())
        .with_context("retry", retry.to_string())
        .with_context("step_budget", config.step_budget.to_string())
        .with_hint("raise the step budget, or check that the chain is irreducible and aperiodic"),
    )
}
