#![deny(missing_docs)]

//! Core types shared by the CFTP crates: chain state identifiers, structured
//! errors, deterministic RNG plumbing, and provenance descriptors attached to
//! serialized sampling artifacts.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{CftpError, ErrorInfo};
pub use provenance::{SampleProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle, ScriptedDraws, UniformSource};

/// Identifier for a state of a finite Markov chain.
///
/// States are numbered `0..n` and the identifier doubles as the row/column
/// index of the state within a transition matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateIndex(usize);

impl StateIndex {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}
