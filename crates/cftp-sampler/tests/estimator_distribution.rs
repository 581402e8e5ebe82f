use cftp_chain::TransitionMatrix;
use cftp_sampler::{estimate, sample_distribution, ExhaustionPolicy, RunConfig};

#[test]
fn symmetric_two_state_chain_splits_evenly() {
    let chain = TransitionMatrix::from_rows(vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
    let config = RunConfig::default();
    let distribution = sample_distribution(&chain, 10_000, &config).unwrap();

    assert_eq!(distribution.draws(), 10_000);
    assert_eq!(distribution.counts().iter().sum::<u64>(), 10_000);
    for density in distribution.densities() {
        assert!((density - 0.5).abs() < 0.03, "density {density} off target");
    }
}

#[test]
fn absorbing_chain_concentrates_all_mass() {
    let absorbing = TransitionMatrix::from_rows(vec![
        vec![0.7, 0.2, 0.1],
        vec![0.2, 0.7, 0.1],
        vec![0.0, 0.0, 1.0],
    ])
    .unwrap();
    let distribution = sample_distribution(&absorbing, 200, &RunConfig::default()).unwrap();
    assert_eq!(distribution.counts(), &[0, 0, 200]);
    assert_eq!(distribution.densities(), vec![0.0, 0.0, 1.0]);
}

#[test]
fn repeated_estimates_are_deterministic() {
    let chain = TransitionMatrix::from_rows(vec![
        vec![0.6, 0.3, 0.1],
        vec![0.2, 0.5, 0.3],
        vec![0.3, 0.3, 0.4],
    ])
    .unwrap();
    let config = RunConfig::default();
    let estimate_a = estimate(&chain, 512, &config).unwrap();
    let estimate_b = estimate(&chain, 512, &config).unwrap();
    assert_eq!(estimate_a, estimate_b);
    assert_eq!(estimate_a.attempts, 512);
    assert_eq!(estimate_a.retries, 0);
}

#[test]
fn fail_policy_escalates_non_coalescence() {
    let swap = TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let config = RunConfig {
        step_budget: 20,
        exhaustion: ExhaustionPolicy::Fail,
        ..RunConfig::default()
    };
    let err = sample_distribution(&swap, 10, &config).unwrap_err();
    assert_eq!(err.info().code, "non-coalescence");
    assert_eq!(err.info().context.get("draw").map(String::as_str), Some("0"));
}

#[test]
fn retry_policy_gives_up_after_max_retries() {
    let swap = TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let config = RunConfig {
        step_budget: 20,
        exhaustion: ExhaustionPolicy::Retry { max_retries: 3 },
        ..RunConfig::default()
    };
    let err = estimate(&swap, 1, &config).unwrap_err();
    assert_eq!(err.info().code, "non-coalescence");
    assert_eq!(err.info().context.get("retry").map(String::as_str), Some("3"));
}

#[test]
fn empty_request_yields_an_empty_distribution() {
    let chain = TransitionMatrix::from_rows(vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
    let distribution = sample_distribution(&chain, 0, &RunConfig::default()).unwrap();
    assert_eq!(distribution.draws(), 0);
    assert_eq!(distribution.densities(), vec![0.0, 0.0]);
}
