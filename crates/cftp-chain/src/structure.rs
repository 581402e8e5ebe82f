use std::collections::VecDeque;

use cftp_core::StateIndex;

use crate::matrix::TransitionMatrix;

/// Computes the reachability closure over the chain's support pattern.
///
/// `result[i][j]` is true when state `j` can be reached from state `i` in
/// zero or more steps (every state reaches itself). Only the positions of
/// nonzero transition probabilities matter, so the closure is computed by
/// breadth-first search rather than matrix powers.
pub fn reachable(transition: &TransitionMatrix) -> Vec<Vec<bool>> {
    let order = transition.order();
    (0..order)
        .map(|start| {
            let mut seen = vec![false; order];
            seen[start] = true;
            let mut queue = VecDeque::from([start]);
            while let Some(state) = queue.pop_front() {
                let row = transition.row(StateIndex::from_raw(state));
                for (target, &probability) in row.iter().enumerate() {
                    if probability > 0.0 && !seen[target] {
                        seen[target] = true;
                        queue.push_back(target);
                    }
                }
            }
            seen
        })
        .collect()
}

/// Partitions the states into communicating classes.
///
/// Two states communicate when each reaches the other; with reflexive
/// reachability this is an equivalence relation, so the classes partition the
/// state space. Classes are reported in order of their smallest member, each
/// class sorted ascending.
pub fn communicating_classes(transition: &TransitionMatrix) -> Vec<Vec<StateIndex>> {
    let closure = reachable(transition);
    let order = transition.order();
    let mut assigned = vec![false; order];
    let mut classes = Vec::new();
    for representative in 0..order {
        if assigned[representative] {
            continue;
        }
        let mut class = Vec::new();
        for candidate in representative..order {
            if !assigned[candidate]
                && closure[representative][candidate]
                && closure[candidate][representative]
            {
                assigned[candidate] = true;
                class.push(StateIndex::from_raw(candidate));
            }
        }
        classes.push(class);
    }
    classes
}

/// Returns true when every state reaches every other state.
///
/// Irreducibility (together with aperiodicity) is what guarantees the
/// backward-coupling sampler coalesces almost surely; callers should fence
/// reducible chains before sampling rather than rely on the step budget.
pub fn is_irreducible(transition: &TransitionMatrix) -> bool {
    reachable(transition)
        .iter()
        .all(|row| row.iter().all(|&reached| reached))
}
