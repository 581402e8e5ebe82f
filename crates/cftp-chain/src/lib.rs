#![deny(missing_docs)]

//! Validated transition-matrix model for finite Markov chains: the coupled
//! transition sampler, matrix powers by repeated squaring, forward simulation,
//! and support-structure queries consumed by the CFTP sampler crates.

mod hash;
mod matrix;
mod power;
mod sequence;
mod serialization;
mod structure;

pub use hash::canonical_hash;
pub use matrix::{sample_categorical, TransitionMatrix, ROW_SUM_TOLERANCE};
pub use power::matrix_power;
pub use sequence::simulate_sequence;
pub use structure::{communicating_classes, is_irreducible, reachable};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{matrix_from_bytes, matrix_from_json, matrix_to_bytes, matrix_to_json};
