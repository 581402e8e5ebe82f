//! Provenance and schema descriptors attached to serialized sampling artifacts.

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every serialized sampling report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SampleProvenance {
    /// Canonical hash of the transition matrix the samples were drawn from.
    pub matrix_hash: String,
    /// Master deterministic seed used for all randomness.
    pub master_seed: u64,
    /// Number of exact draws requested by the caller.
    pub requested_draws: u64,
    /// Total coalescence attempts executed, retries included.
    pub attempts: u64,
    /// Attempts that exhausted the step budget and were retried.
    pub retries: u64,
}
