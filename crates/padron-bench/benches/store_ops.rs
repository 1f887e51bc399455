//! Criterion micro-benchmarks for record store operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use padron_store::{HeapStore, PoolStore, StudentStore};

/// Benchmark: fill-and-drain cycle on a 64-slot pool.
fn bench_pool_create_release(c: &mut Criterion) {
    c.bench_function("pool_create_release_64", |b| {
        b.iter(|| {
            let mut pool = PoolStore::with_capacity(64);
            let handles: Vec<_> = (0..64)
                .map(|i| pool.create("Ana", "Gomez", i).unwrap())
                .collect();
            for h in handles {
                pool.release(h).unwrap();
            }
            black_box(pool.free_slots());
        });
    });
}

/// Benchmark: handle resolution on a full pool.
fn bench_pool_get(c: &mut Criterion) {
    let mut pool = PoolStore::with_capacity(64);
    let handles: Vec<_> = (0..64)
        .map(|i| pool.create("Ana", "Gomez", i).unwrap())
        .collect();

    c.bench_function("pool_get_64", |b| {
        b.iter(|| {
            for &h in &handles {
                black_box(pool.get(h).unwrap().document());
            }
        });
    });
}

/// Benchmark: heap creation of 64 records.
fn bench_heap_create(c: &mut Criterion) {
    c.bench_function("heap_create_64", |b| {
        b.iter(|| {
            let mut store = HeapStore::new();
            for i in 0..64 {
                let id = store.create("Ana", "Gomez", i).unwrap();
                black_box(id);
            }
            black_box(store.len());
        });
    });
}

criterion_group!(
    benches,
    bench_pool_create_release,
    bench_pool_get,
    bench_heap_create
);
criterion_main!(benches);
