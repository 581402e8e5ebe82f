use cftp_chain::TransitionMatrix;
use cftp_core::rng::RngHandle;
use criterion::{criterion_group, criterion_main, Criterion};

use cftp_sampler::{sample_distribution, sample_one, RunConfig};

fn sample_chain() -> TransitionMatrix {
    TransitionMatrix::from_rows(vec![
        vec![0.30, 0.20, 0.15, 0.15, 0.10, 0.10],
        vec![0.10, 0.40, 0.20, 0.10, 0.10, 0.10],
        vec![0.15, 0.15, 0.30, 0.20, 0.10, 0.10],
        vec![0.10, 0.10, 0.20, 0.40, 0.10, 0.10],
        vec![0.20, 0.10, 0.10, 0.10, 0.40, 0.10],
        vec![0.10, 0.10, 0.10, 0.10, 0.20, 0.40],
    ])
    .unwrap()
}

fn bench_coalescence(c: &mut Criterion) {
    let chain = sample_chain();

    c.bench_function("sample_one", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let _ = sample_one(&chain, 100, &mut rng);
        })
    });

    let config = RunConfig::default();
    c.bench_function("sample_distribution_100", |b| {
        b.iter(|| {
            let _ = sample_distribution(&chain, 100, &config).unwrap();
        })
    });
}

criterion_group!(benches, bench_coalescence);
criterion_main!(benches);
