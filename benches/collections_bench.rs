// benches/collections_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gencoll::prelude::*;
use std::collections::VecDeque;
use std::hint::black_box;

fn bench_queue_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_operations");

    for capacity in [16, 256, 4096].iter() {
        group.bench_with_input(
            BenchmarkId::new("put_get", capacity),
            capacity,
            |b, &capacity| {
                let mut q = CircularQueue::new(capacity);
                b.iter(|| {
                    for i in 0..capacity {
                        q.put(black_box(i));
                    }
                    while let Ok(item) = q.get() {
                        black_box(item);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_queue_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_growth");

    // Every doubling starts from a single slot
    group.bench_function("grow_from_one", |b| {
        b.iter(|| {
            let mut q = CircularQueue::new(1);
            for i in 0..10_000u32 {
                q.put(black_box(i));
            }
            q
        });
    });

    // Wrapped layout forces the two-run relocation
    group.bench_function("grow_wrapped", |b| {
        b.iter(|| {
            let mut q = CircularQueue::from_items(64, 0..64u32);
            for _ in 0..32 {
                q.get().unwrap();
            }
            for i in 0..64u32 {
                q.put(black_box(i));
            }
            q
        });
    });

    group.finish();
}

fn bench_queue_vs_vecdeque(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_vs_vecdeque");

    group.bench_function("circular_queue", |b| {
        let mut q = CircularQueue::new(1024);
        b.iter(|| {
            for i in 0..512u32 {
                q.put(black_box(i));
            }
            for _ in 0..512 {
                black_box(q.get().unwrap());
            }
        });
    });

    group.bench_function("vec_deque", |b| {
        let mut q = VecDeque::with_capacity(1024);
        b.iter(|| {
            for i in 0..512u32 {
                q.push_back(black_box(i));
            }
            for _ in 0..512 {
                black_box(q.pop_front().unwrap());
            }
        });
    });

    group.finish();
}

fn bench_checked_vs_unchecked(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_vs_unchecked");

    group.bench_function("checked_get", |b| {
        let mut q = CircularQueue::new(128);
        b.iter(|| {
            for i in 0..128u32 {
                q.put(i);
            }
            for _ in 0..128 {
                black_box(q.get().unwrap());
            }
        });
    });

    group.bench_function("unchecked_get", |b| {
        let mut q = CircularQueue::new(128);
        b.iter(|| {
            for i in 0..128u32 {
                q.put(i);
            }
            for _ in 0..128 {
                black_box(unsafe { q.get_unchecked() });
            }
        });
    });

    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");

    for size in [100, 1_000, 10_000].iter() {
        let a = Set::from_elems(0..*size);
        let b = Set::from_elems((*size / 2)..(*size * 3 / 2));
        let small = Set::from_elems(0..10);

        group.bench_with_input(BenchmarkId::new("union", size), size, |bench, _| {
            bench.iter(|| black_box(a.union(&b)));
        });

        group.bench_with_input(BenchmarkId::new("intersection", size), size, |bench, _| {
            bench.iter(|| black_box(a.intersection(&b)));
        });

        group.bench_with_input(
            BenchmarkId::new("intersection_small_first", size),
            size,
            |bench, _| {
                bench.iter(|| black_box(a.intersection(&small)));
            },
        );

        group.bench_with_input(BenchmarkId::new("difference", size), size, |bench, _| {
            bench.iter(|| black_box(a.difference(&b)));
        });

        group.bench_with_input(BenchmarkId::new("equal", size), size, |bench, _| {
            let copy = a.copy();
            bench.iter(|| black_box(a.equal(&copy)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_queue_put_get,
    bench_queue_growth,
    bench_queue_vs_vecdeque,
    bench_checked_vs_unchecked,
    bench_set_algebra
);

criterion_main!(benches);
