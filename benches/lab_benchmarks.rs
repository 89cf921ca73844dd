//! Strategy and generator benchmarks.
//!
//! Criterion counterpart of the in-library timing comparisons: the
//! recursive strategy is measured both cold (fresh cache every iteration)
//! and warm (cache already filled), the iterative strategy has no state.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tourlab::sequence::{CachedRecursive, SequenceStrategy, TabulatedIterative};
use tourlab::tour::{build_up_orderings, library_orderings, Point};

fn bench_sequence_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequence");
    group.sample_size(100);
    group.confidence_level(0.95);

    for n in [5u64, 15, 50].iter() {
        group.bench_with_input(BenchmarkId::new("recursive_cold", n), n, |b, &n| {
            b.iter(|| {
                let mut rec = CachedRecursive::new();
                black_box(rec.value(black_box(n)).ok())
            });
        });

        group.bench_with_input(BenchmarkId::new("recursive_warm", n), n, |b, &n| {
            let mut rec = CachedRecursive::new();
            let _ = rec.value(n);
            b.iter(|| black_box(rec.value(black_box(n)).ok()));
        });

        group.bench_with_input(BenchmarkId::new("iterative", n), n, |b, &n| {
            let mut it = TabulatedIterative::new();
            b.iter(|| black_box(it.value(black_box(n)).ok()));
        });
    }

    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Orderings");
    group.sample_size(100);
    group.confidence_level(0.95);

    for k in [4usize, 6, 8].iter() {
        let points: Vec<Point> = (0..*k)
            .map(|i| Point::new(i as f64, (i * i) as f64))
            .collect();

        group.bench_with_input(BenchmarkId::new("build_up", k), &points, |b, pts| {
            b.iter(|| black_box(build_up_orderings(black_box(pts)).len()));
        });

        group.bench_with_input(BenchmarkId::new("library", k), &points, |b, pts| {
            b.iter(|| black_box(library_orderings(black_box(pts)).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequence_strategies, bench_generators);
criterion_main!(benches);
