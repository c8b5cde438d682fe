//! Criterion benchmarks for the even expansion and the full surface pipeline.
//! Focus sizes: beta in {64, 1024, 65536, 2^40}.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use twobridge::cfrac::EvenContinuedFraction;
use twobridge::sample::{enumerate_links, random_link};
use twobridge::surface::SurfaceReport;

fn bench_even_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("even_expansion");
    for &beta in &[64i64, 1024, 65536, 1 << 40] {
        // Odd alpha is coprime to a power of two.
        let alpha = beta / 3 | 1;
        group.bench_with_input(BenchmarkId::new("from_ratio", beta), &beta, |b, &beta| {
            b.iter(|| EvenContinuedFraction::from_ratio(alpha, beta).unwrap())
        });
    }
    group.finish();
}

fn bench_surfaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("surfaces");
    group.bench_function(BenchmarkId::new("random_link", "beta<=256,mu<=8"), |b| {
        let mut rng = StdRng::seed_from_u64(43);
        b.iter_batched(
            || random_link(&mut rng, 256, 8).unwrap(),
            |spec| {
                let _rep = SurfaceReport::compute(spec).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("sweep", "beta<=64,mu=3"), |b| {
        b.iter(|| {
            enumerate_links(64)
                .map(|(a, beta)| twobridge::compute_surfaces(a, beta, 3).unwrap().len())
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_even_expansion, bench_surfaces);
criterion_main!(benches);
