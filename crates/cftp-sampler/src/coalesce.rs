use cftp_chain::TransitionMatrix;
use cftp_core::rng::UniformSource;
use cftp_core::StateIndex;
use serde::{Deserialize, Serialize};

use crate::table::CompositionTable;

/// Outcome of a single backward-coupling attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CoalescenceOutcome {
    /// Every start state collapsed to one value; `state` is an exact draw
    /// from the stationary distribution.
    Coalesced {
        /// The exact sample.
        state: StateIndex,
        /// Backward steps taken until the composed map became constant.
        steps: usize,
        /// Uniform draws consumed, most recent step first.
        draws: Vec<f64>,
    },
    /// The step budget ran out before the composed map became constant.
    Exhausted {
        /// The budget that was exhausted.
        budget: usize,
        /// Uniform draws consumed, most recent step first.
        draws: Vec<f64>,
    },
}

impl CoalescenceOutcome {
    /// The exact sample, when the attempt coalesced.
    pub fn state(&self) -> Option<StateIndex> {
        match self {
            CoalescenceOutcome::Coalesced { state, .. } => Some(*state),
            CoalescenceOutcome::Exhausted { .. } => None,
        }
    }

    /// Backward steps taken by the attempt.
    pub fn steps(&self) -> usize {
        match self {
            CoalescenceOutcome::Coalesced { steps, .. } => *steps,
            CoalescenceOutcome::Exhausted { budget, .. } => *budget,
        }
    }

    /// True when the attempt produced an exact sample.
    pub fn is_coalesced(&self) -> bool {
        matches!(self, CoalescenceOutcome::Coalesced { .. })
    }
}

/// Draws one exact sample from the chain's stationary distribution.
///
/// Runs the Propp–Wilson backward coupling: each iteration draws one fresh
/// uniform shared by all rows (the coupling), extends the window one step
/// further into the past, and composes the new random map with the maps
/// drawn so far. Once the composed map is constant its value is returned;
/// extending the window further could not change it. The loop gives up
/// after `step_budget` steps, which callers must treat as "did not coalesce
/// in time", not as a sample — a reducible or periodic chain never
/// coalesces and always lands here.
pub fn sample_one<U: UniformSource>(
    transition: &TransitionMatrix,
    step_budget: usize,
    draws: &mut U,
) -> CoalescenceOutcome {
    let mut table = CompositionTable::new(transition.order());
    let mut consumed: Vec<f64> = Vec::new();

    // A one-state chain is already constant at window width one.
    if let Some(state) = table.coalesced() {
        return CoalescenceOutcome::Coalesced {
            state,
            steps: 0,
            draws: consumed,
        };
    }

    for step in 1..=step_budget {
        let u = draws.next_uniform();
        consumed.push(u);
        table.compose(transition, u);
        if let Some(state) = table.coalesced() {
            consumed.reverse();
            return CoalescenceOutcome::Coalesced {
                state,
                steps: step,
                draws: consumed,
            };
        }
    }

    consumed.reverse();
    CoalescenceOutcome::Exhausted {
        budget: step_budget,
        draws: consumed,
    }
}
