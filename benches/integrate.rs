//! Benchmarks for the CPU-side numerical core.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lorviz::{LorenzParams, Vec3};

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    for iterations in [1_000usize, 30_000, 100_000] {
        let params = LorenzParams {
            iterations,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &params,
            |b, params| b.iter(|| black_box(params.integrate(Vec3::ONE))),
        );
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let params = LorenzParams::default();
    let traj = params.integrate(Vec3::ONE);

    let mut group = c.benchmark_group("normalize");

    group.bench_function("bounds_30k", |b| b.iter(|| black_box(traj.bounds())));

    group.bench_function("normalize_30k", |b| {
        b.iter(|| black_box(traj.normalize(50.0).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_integrate, bench_normalize);
criterion_main!(benches);
