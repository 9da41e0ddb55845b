extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use indexed_priority_queue::{IndexedPriorityQueue, PriorityQueue};

use crate::generators::{gen_random_i64s, gen_shuffled_indices};

pub fn bench_pop(c: &mut Criterion) {
    let base_values = gen_random_i64s(500_000, 0);

    let mut group = c.benchmark_group("pop_plain");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: PriorityQueue<i64> = base_values[..size].iter().cloned().collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for _ in 0..1000 {
                        queue.pop();
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();

    let mut group = c.benchmark_group("pop_indexed");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut base_queue: IndexedPriorityQueue<i64> =
                IndexedPriorityQueue::with_capacity(size);
            for &index in gen_shuffled_indices(size, 3).iter() {
                base_queue.push(index, base_values[index]).unwrap();
            }
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for _ in 0..1000 {
                        queue.pop();
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pop);
criterion_main!(benches);
