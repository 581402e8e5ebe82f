use cftp_chain::TransitionMatrix;
use cftp_core::rng::{RngHandle, ScriptedDraws};
use cftp_sampler::{sample_one, CoalescenceOutcome};

fn symmetric_chain() -> TransitionMatrix {
    TransitionMatrix::from_rows(vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap()
}

#[test]
fn scripted_draws_fix_the_sample_and_the_step_count() {
    let chain = symmetric_chain();

    let outcome_a = sample_one(&chain, 100, &mut ScriptedDraws::new(vec![0.7]));
    let outcome_b = sample_one(&chain, 100, &mut ScriptedDraws::new(vec![0.7]));
    assert_eq!(outcome_a, outcome_b);

    match outcome_a {
        CoalescenceOutcome::Coalesced {
            state,
            steps,
            draws,
        } => {
            assert_eq!(state.as_raw(), 1);
            assert_eq!(steps, 1);
            assert_eq!(draws, vec![0.7]);
        }
        CoalescenceOutcome::Exhausted { .. } => panic!("symmetric chain must coalesce"),
    }

    let low = sample_one(&chain, 100, &mut ScriptedDraws::new(vec![0.2]));
    assert_eq!(low.state().map(|s| s.as_raw()), Some(0));
}

#[test]
fn identical_seeds_reproduce_the_outcome() {
    let chain = TransitionMatrix::from_rows(vec![
        vec![0.6, 0.3, 0.1],
        vec![0.2, 0.5, 0.3],
        vec![0.3, 0.3, 0.4],
    ])
    .unwrap();

    let outcome_a = sample_one(&chain, 100, &mut RngHandle::from_seed(2024));
    let outcome_b = sample_one(&chain, 100, &mut RngHandle::from_seed(2024));
    assert_eq!(outcome_a, outcome_b);
    assert!(outcome_a.is_coalesced());
}

#[test]
fn recorded_draws_are_newest_first() {
    // Draws below 0.1 or at/above 0.9 send both rows to the same state;
    // anything in between swaps them. Script a swap, then a collapse.
    let lazy_swap = TransitionMatrix::from_rows(vec![vec![0.1, 0.9], vec![0.9, 0.1]]).unwrap();
    let mut draws = ScriptedDraws::new(vec![0.2, 0.95]);
    match sample_one(&lazy_swap, 100, &mut draws) {
        CoalescenceOutcome::Coalesced {
            state,
            steps,
            draws,
        } => {
            assert_eq!(state.as_raw(), 0);
            assert_eq!(steps, 2);
            assert_eq!(draws, vec![0.95, 0.2]);
        }
        CoalescenceOutcome::Exhausted { .. } => panic!("chain must coalesce on the 0.95 draw"),
    }
}
