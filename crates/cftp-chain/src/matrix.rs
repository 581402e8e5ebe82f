use cftp_core::errors::{CftpError, ErrorInfo};
use cftp_core::StateIndex;

/// Maximum distance a row sum may stray from 1 before validation rejects it.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Row-stochastic transition matrix of a finite Markov chain.
///
/// Entries are stored row-major. Validation happens once at construction;
/// every consumer afterwards borrows the matrix read-only, so the
/// row-stochasticity invariant holds for the lifetime of any sampling or
/// diagnostic call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    order: usize,
    entries: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a matrix from per-state rows of transition probabilities.
    ///
    /// Rejects an empty matrix, ragged or non-square rows, non-finite or
    /// negative entries, and rows whose sum is outside
    /// `1.0 ± ROW_SUM_TOLERANCE`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, CftpError> {
        let order = rows.len();
        let mut entries = Vec::with_capacity(order * order);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != order {
                return Err(CftpError::Matrix(
                    ErrorInfo::new("not-square", "row length does not match the state count")
                        .with_context("row", index.to_string())
                        .with_context("row_len", row.len().to_string())
                        .with_context("order", order.to_string()),
                ));
            }
            entries.extend_from_slice(row);
        }
        Self::from_row_major(order, entries)
    }

    /// Builds a matrix from a row-major entry buffer of length `order * order`.
    pub fn from_row_major(order: usize, entries: Vec<f64>) -> Result<Self, CftpError> {
        if order == 0 {
            return Err(CftpError::Matrix(ErrorInfo::new(
                "empty-matrix",
                "a chain needs at least one state",
            )));
        }
        if entries.len() != order * order {
            return Err(CftpError::Matrix(
                ErrorInfo::new("bad-dimensions", "entry buffer does not hold order^2 values")
                    .with_context("order", order.to_string())
                    .with_context("entries", entries.len().to_string()),
            ));
        }
        for (index, chunk) in entries.chunks(order).enumerate() {
            validate_probability_row("row", index, chunk)?;
        }
        Ok(Self { order, entries })
    }

    /// Returns the identity matrix of the given order.
    ///
    /// The identity is row-stochastic (every state is absorbing), so it passes
    /// through the same validated constructor path as user input.
    pub fn identity(order: usize) -> Result<Self, CftpError> {
        let mut entries = vec![0.0; order * order];
        for state in 0..order {
            entries[state * order + state] = 1.0;
        }
        Self::from_row_major(order, entries)
    }

    pub(crate) fn from_parts_unchecked(order: usize, entries: Vec<f64>) -> Self {
        debug_assert_eq!(entries.len(), order * order);
        Self { order, entries }
    }

    /// Number of states in the chain.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Transition probabilities out of the given state.
    pub fn row(&self, state: StateIndex) -> &[f64] {
        let start = state.as_raw() * self.order;
        &self.entries[start..start + self.order]
    }

    /// Single transition probability.
    pub fn entry(&self, from: StateIndex, to: StateIndex) -> f64 {
        self.entries[from.as_raw() * self.order + to.as_raw()]
    }

    /// Iterates over the rows of the matrix in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.entries.chunks(self.order)
    }

    /// Row-major view of the entries.
    pub fn as_row_major(&self) -> &[f64] {
        &self.entries
    }

    /// Samples the successor of `from` using the shared uniform draw `u`.
    ///
    /// Returns the first state whose cumulative row probability strictly
    /// exceeds `u`, clamping to the last state when floating-point rounding
    /// leaves the row sum below `u`. Applying the same `u` to different rows
    /// induces the coupling the coalescence engine depends on.
    pub fn next_state(&self, from: StateIndex, u: f64) -> Result<StateIndex, CftpError> {
        if from.as_raw() >= self.order {
            return Err(CftpError::Matrix(
                ErrorInfo::new("state-out-of-range", "start state is not part of the chain")
                    .with_context("state", from.as_raw().to_string())
                    .with_context("order", self.order.to_string()),
            ));
        }
        if !(0.0..1.0).contains(&u) {
            return Err(CftpError::Distribution(
                ErrorInfo::new("draw-out-of-range", "uniform draw must lie in [0, 1)")
                    .with_context("draw", u.to_string()),
            ));
        }
        Ok(StateIndex::from_raw(sample_categorical(self.row(from), u)))
    }
}

/// Samples an index from the categorical distribution given by `weights`.
///
/// Returns the first index whose cumulative weight strictly exceeds `u`;
/// clamps to the last index when the cumulative sum never does. `weights`
/// must be non-empty.
pub fn sample_categorical(weights: &[f64], u: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if u < cumulative {
            return index;
        }
    }
    weights.len().saturating_sub(1)
}

/// Validates a probability vector: finite, nonnegative, sums to 1 within
/// [`ROW_SUM_TOLERANCE`].
pub(crate) fn validate_probability_row(
    label: &str,
    index: usize,
    row: &[f64],
) -> Result<(), CftpError> {
    let mut sum = 0.0;
    for (column, &value) in row.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(CftpError::Matrix(
                ErrorInfo::new("bad-entry", "probabilities must be finite and nonnegative")
                    .with_context(label, index.to_string())
                    .with_context("column", column.to_string())
                    .with_context("value", value.to_string()),
            ));
        }
        sum += value;
    }
    if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
        return Err(CftpError::Matrix(
            ErrorInfo::new("row-sum", "probabilities must sum to one")
                .with_context(label, index.to_string())
                .with_context("sum", sum.to_string())
                .with_hint("normalize the distribution before constructing the chain"),
        ));
    }
    Ok(())
}
