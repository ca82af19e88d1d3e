// Benchmark suite for QuickList positional access.
//
// Compares the access patterns the structure is tuned for:
// - sequential scans (position cache territory)
// - random access (jump index territory)
// - mixed editing churn (suffix repair + maintenance thresholds)

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quicklist::QuickList;

fn filled(n: usize) -> QuickList<usize> {
    let mut list = QuickList::new();
    for i in 0..n {
        list.append(i);
    }
    list
}

// =============================================================================
// Build
// =============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(filled(size).len()));
        });
    }

    group.finish();
}

// =============================================================================
// Search
// =============================================================================

fn bench_sequential_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_search");

    for size in [10_000, 100_000, 1_000_000] {
        let probes = size / 10;
        group.throughput(Throughput::Elements(probes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut list = filled(size);
            let start = size / 2;
            b.iter(|| {
                let mut sum = 0usize;
                for i in start..start + probes {
                    sum += *list.get(i).unwrap();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_random_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_search");

    for size in [10_000, 100_000] {
        let probes = 1_000;
        group.throughput(Throughput::Elements(probes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut list = filled(size);
            let mut rng = StdRng::seed_from_u64(42);
            let indices: Vec<usize> = (0..probes).map(|_| rng.gen_range(0..size)).collect();
            b.iter(|| {
                let mut sum = 0usize;
                for &i in &indices {
                    sum += *list.get(i).unwrap();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Editing churn
// =============================================================================

fn bench_mixed_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_operations");

    for size in [1_000, 10_000] {
        let ops = 1_000;
        group.throughput(Throughput::Elements(ops as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = filled(size);
                let mut rng = StdRng::seed_from_u64(7);
                for _ in 0..ops {
                    let len = list.len();
                    // 70% insert, 30% remove
                    if len == 0 || rng.gen_bool(0.7) {
                        let pos = if len == 0 { 0 } else { rng.gen_range(0..=len) };
                        list.add(pos, pos);
                    } else {
                        let pos = rng.gen_range(0..len);
                        list.remove(pos);
                    }
                }
                black_box(list.len())
            });
        });
    }

    group.finish();
}

fn bench_fixed_index_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_index_inserts");

    for size in [1_000, 10_000] {
        let ops = 500;
        group.throughput(Throughput::Elements(ops as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = filled(size);
                let index = size / 3;
                for i in 0..ops {
                    list.add(index, i);
                }
                black_box(list.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_sequential_search,
    bench_random_search,
    bench_mixed_operations,
    bench_fixed_index_inserts,
);
criterion_main!(benches);
