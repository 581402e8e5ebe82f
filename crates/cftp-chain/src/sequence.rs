use cftp_core::errors::{CftpError, ErrorInfo};
use cftp_core::rng::UniformSource;
use cftp_core::StateIndex;

use crate::matrix::{sample_categorical, TransitionMatrix, ROW_SUM_TOLERANCE};

/// Simulates a forward trajectory of the chain.
///
/// The first state is drawn from `initial`, which must be a probability
/// vector over the chain's states; every following state is drawn from the
/// transition row of its predecessor. Returns `length` states (an empty
/// vector for `length == 0`).
pub fn simulate_sequence<U: UniformSource>(
    transition: &TransitionMatrix,
    initial: &[f64],
    length: usize,
    draws: &mut U,
) -> Result<Vec<StateIndex>, CftpError> {
    validate_initial(transition.order(), initial)?;
    let mut states = Vec::with_capacity(length);
    if length == 0 {
        return Ok(states);
    }
    let mut current = StateIndex::from_raw(sample_categorical(initial, draws.next_uniform()));
    states.push(current);
    for _ in 1..length {
        current = StateIndex::from_raw(sample_categorical(
            transition.row(current),
            draws.next_uniform(),
        ));
        states.push(current);
    }
    Ok(states)
}

fn validate_initial(order: usize, initial: &[f64]) -> Result<(), CftpError> {
    if initial.len() != order {
        return Err(CftpError::Distribution(
            ErrorInfo::new("length-mismatch", "initial distribution does not cover the chain")
                .with_context("len", initial.len().to_string())
                .with_context("order", order.to_string()),
        ));
    }
    let mut sum = 0.0;
    for (state, &value) in initial.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(CftpError::Distribution(
                ErrorInfo::new("bad-entry", "probabilities must be finite and nonnegative")
                    .with_context("state", state.to_string())
                    .with_context("value", value.to_string()),
            ));
        }
        sum += value;
    }
    if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
        return Err(CftpError::Distribution(
            ErrorInfo::new("not-normalized", "initial distribution must sum to one")
                .with_context("sum", sum.to_string()),
        ));
    }
    Ok(())
}
