use serde::{Deserialize, Serialize};

/// Parameters governing a sampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Maximum number of backward steps a single coalescence attempt may
    /// take before it is abandoned. Bounds the only unbounded loop in the
    /// sampler; an exhausted budget surfaces as a tagged failure, never as a
    /// sample.
    #[serde(default = "default_step_budget")]
    pub step_budget: usize,
    /// What the estimator does with an attempt that exhausts its budget.
    #[serde(default)]
    pub exhaustion: ExhaustionPolicy,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_step_budget() -> usize {
    100
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_budget: default_step_budget(),
            exhaustion: ExhaustionPolicy::default(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Policy applied when a coalescence attempt exhausts its step budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// Re-run the attempt on a fresh substream, up to `max_retries` times.
    Retry {
        /// Maximum number of fresh attempts after the first failure.
        #[serde(default = "default_max_retries")]
        max_retries: usize,
    },
    /// Propagate the failure to the caller immediately.
    Fail,
}

fn default_max_retries() -> usize {
    16
}

impl Default for ExhaustionPolicy {
    fn default() -> Self {
        ExhaustionPolicy::Retry {
            max_retries: default_max_retries(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when deriving substream seeds (documented in reports).
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0xC0A1_E5CE_0000_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
