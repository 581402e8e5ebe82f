#![deny(missing_docs)]

//! Exact stationary sampling for finite Markov chains via Propp–Wilson
//! coupling from the past (voter coupling variant).
//!
//! The coalescence engine extends a simulation window one step further into
//! the past per iteration, composing per-step random maps until every start
//! state collapses to the same state at time zero; that common state is an
//! exact draw from the chain's stationary distribution. The estimator
//! repeats independent attempts to build an empirical stationary law.

/// Backward-coupling coalescence engine and tagged outcomes.
pub mod coalesce;
/// Run configuration: step budget, exhaustion policy, seeding.
pub mod config;
/// Deterministic seed derivation for sampling attempts.
pub mod determinism;
/// Monte Carlo estimation of the stationary distribution.
pub mod estimator;
/// Serializable sampling report with provenance.
pub mod report;
/// Composition table tracking the composed backward maps.
pub mod table;

pub use coalesce::{sample_one, CoalescenceOutcome};
pub use config::{ExhaustionPolicy, RunConfig, SeedPolicy};
pub use estimator::{estimate, sample_distribution, EmpiricalDistribution, Estimate};
pub use report::SampleReport;
pub use table::CompositionTable;
