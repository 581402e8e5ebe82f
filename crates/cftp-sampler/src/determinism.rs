use cftp_core::derive_substream_seed;

/// Derives the deterministic seed for one coalescence attempt.
///
/// `draw` indexes the exact sample being produced and `retry` the re-run
/// after a budget exhaustion (0 for the first try). Every attempt therefore
/// owns an independent stream, which is what allows attempts to run in
/// parallel without synchronization.
pub fn attempt_seed(master_seed: u64, draw: u64, retry: u64) -> u64 {
    derive_substream_seed(derive_substream_seed(master_seed, draw), retry)
}
