use std::fs;
use std::path::Path;

use cftp_chain::{canonical_hash, TransitionMatrix};
use cftp_core::errors::{CftpError, ErrorInfo};
use cftp_core::provenance::{SampleProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::estimator::{estimate, EmpiricalDistribution};

/// Structured report describing a completed sampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReport {
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Provenance tying the report to its inputs and seed.
    pub provenance: SampleProvenance,
    /// Configuration used for the run.
    pub config: RunConfig,
    /// The empirical stationary distribution.
    pub distribution: EmpiricalDistribution,
}

impl SampleReport {
    /// Runs the estimator and packages the result with its provenance.
    pub fn build(
        transition: &TransitionMatrix,
        samples: u64,
        config: &RunConfig,
    ) -> Result<Self, CftpError> {
        let estimate = estimate(transition, samples, config)?;
        Ok(Self {
            schema_version: SchemaVersion::default(),
            provenance: SampleProvenance {
                matrix_hash: canonical_hash(transition),
                master_seed: config.seed_policy.master_seed,
                requested_draws: samples,
                attempts: estimate.attempts,
                retries: estimate.retries,
            },
            config: config.clone(),
            distribution: estimate.distribution,
        })
    }

    /// Writes the report to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), CftpError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                CftpError::Serde(
                    ErrorInfo::new("report-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            CftpError::Serde(
                ErrorInfo::new("report-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            CftpError::Serde(
                ErrorInfo::new("report-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a report from disk.
    pub fn load(path: &Path) -> Result<Self, CftpError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            CftpError::Serde(
                ErrorInfo::new("report-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            CftpError::Serde(
                ErrorInfo::new("report-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
