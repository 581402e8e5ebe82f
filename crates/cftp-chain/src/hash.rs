use sha2::{Digest, Sha256};

use crate::matrix::TransitionMatrix;

/// Computes the canonical structural hash for the provided matrix.
///
/// The hash covers the order and the little-endian bit patterns of all
/// entries in row-major order, so it is stable across platforms and across
/// serialization round-trips.
pub fn canonical_hash(matrix: &TransitionMatrix) -> String {
    let mut hasher = Sha256::new();
    hasher.update((matrix.order() as u64).to_le_bytes());
    for entry in matrix.as_row_major() {
        hasher.update(entry.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
