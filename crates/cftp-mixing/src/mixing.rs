use cftp_chain::{matrix_power, TransitionMatrix};
use cftp_core::StateIndex;

/// Exponent used to approximate the stationary distribution by a large
/// matrix power. An approximation oracle, not an eigen-based limit; adequate
/// for the diagnostics here.
pub const STATIONARY_PROXY_EXPONENT: u32 = 15;

/// Mixing tolerance, 1/e to double precision.
pub const MIXING_TOLERANCE: f64 = 0.367_879_441_171_442_33;

/// Cap on the mixing-time scan. Chains that have not mixed within this many
/// steps are reported as not mixing.
pub const MAX_MIXING_STEPS: usize = 100;

/// Approximate stationary distribution: row 0 of the matrix raised to
/// [`STATIONARY_PROXY_EXPONENT`].
pub fn stationary_proxy(transition: &TransitionMatrix) -> Vec<f64> {
    matrix_power(transition, STATIONARY_PROXY_EXPONENT)
        .row(StateIndex::from_raw(0))
        .to_vec()
}

/// Worst-case total variation distance between the k-step distributions and
/// the approximate stationary distribution.
///
/// The k-step distribution out of state `i` is row `i` of the k-th matrix
/// power; the maximum over start states is the mixing criterion.
pub fn k_step_variation_distance(transition: &TransitionMatrix, k: u32) -> f64 {
    let proxy = stationary_proxy(transition);
    let stepped = matrix_power(transition, k);
    let mut worst = 0.0;
    for state in 0..transition.order() {
        let row = stepped.row(StateIndex::from_raw(state));
        // Rows of a power share the proxy's length, so the distance cannot
        // fail on shape.
        let l1: f64 = row.iter().zip(&proxy).map(|(a, b)| (a - b).abs()).sum();
        let distance = l1 / 2.0;
        if distance > worst {
            worst = distance;
        }
    }
    worst
}

/// Smallest number of steps after which the worst-case variation distance
/// from stationarity falls below [`MIXING_TOLERANCE`].
///
/// Scans `k = 1..MAX_MIXING_STEPS`; returns `None` when the chain has not
/// mixed within the cap. Threshold and cap are fixed policy constants.
pub fn mixing_time(transition: &TransitionMatrix) -> Option<usize> {
    (1..MAX_MIXING_STEPS).find(|&k| k_step_variation_distance(transition, k as u32) < MIXING_TOLERANCE)
}
