use std::collections::VecDeque;

use cftp_chain::{sample_categorical, TransitionMatrix};
use cftp_core::StateIndex;

/// Composition table of the backward-coupling construction.
///
/// One row per chain state. The newest column holds, for each original start
/// state `i`, the state a chain started at `i` at time `-w` occupies at time
/// zero under the random maps drawn so far (`w` is the current window
/// width). Older columns are snapshots of earlier window boundaries,
/// retained for diagnostic inspection; composition only ever reads the
/// newest one.
#[derive(Debug, Clone)]
pub struct CompositionTable {
    order: usize,
    columns: VecDeque<Vec<StateIndex>>,
}

impl CompositionTable {
    /// Creates a table for a chain with `order` states, window width one.
    ///
    /// The initial column is the identity map: at window width one, a chain
    /// started at `i` at time zero is still at `i`.
    pub fn new(order: usize) -> Self {
        let identity: Vec<StateIndex> = (0..order).map(StateIndex::from_raw).collect();
        let mut columns = VecDeque::new();
        columns.push_front(identity);
        Self { order, columns }
    }

    /// Number of chain states (rows of the table).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Current backward window width (columns of the table).
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// The composed map from the current window boundary to time zero.
    pub fn composed_map(&self) -> &[StateIndex] {
        &self.columns[0]
    }

    /// Extends the window one step further into the past.
    ///
    /// The shared draw `u` realizes one random map: the chain started at `i`
    /// one step further back reaches, at time zero, wherever the chain
    /// started at `next_state(i, u)` at the previous window boundary
    /// reaches. Equivalently, the previous newest column is shifted right
    /// and the fresh column composes the new step through it.
    pub fn compose(&mut self, transition: &TransitionMatrix, u: f64) {
        let previous = &self.columns[0];
        let next: Vec<StateIndex> = transition
            .rows()
            .map(|row| previous[sample_categorical(row, u)])
            .collect();
        self.columns.push_front(next);
    }

    /// Returns the common value of the composed map once it is constant.
    ///
    /// A constant composed map no longer depends on how much further into
    /// the past the window is extended, so its value is an exact stationary
    /// sample.
    pub fn coalesced(&self) -> Option<StateIndex> {
        let current = &self.columns[0];
        let first = *current.first()?;
        current
            .iter()
            .all(|state| *state == first)
            .then_some(first)
    }
}
