use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;

use garnet_tree::{BstSet, RbTreeSet};

const N: usize = 10_000;

// ─── Key sequence helpers ───────────────────────────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Simple LCG for a deterministic pseudo-random sequence.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insertion ──────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");
    let keys = ordered_keys(N);

    group.bench_function(BenchmarkId::new("RbTreeSet", N), |b| {
        b.iter(|| {
            let mut set = RbTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("RbTreeSet", N), |b| {
        b.iter(|| {
            let mut set = RbTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| {
            let mut set = BstSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_random");
    let keys = random_keys(N);

    let rb_set: RbTreeSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    group.bench_function(BenchmarkId::new("RbTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|key| rb_set.contains(*key)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|key| bt_set.contains(*key)).count());
    });

    group.finish();
}

// ─── Removal ────────────────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_random");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("RbTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<RbTreeSet<i64>>(),
            |mut set| {
                for key in &keys {
                    set.remove(key);
                }
                set
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for key in &keys {
                    set.remove(key);
                }
                set
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert_ordered, bench_insert_random, bench_contains, bench_remove);
criterion_main!(benches);
