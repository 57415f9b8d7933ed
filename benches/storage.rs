//! Benchmarks for storage operations

extern crate criterion;
extern crate bigint_rep;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bigint_rep::{BigInt, BigWord, BLOCK_SIZE};

criterion_main!(storage);

criterion_group!(
    name = storage;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_copy_in,
        bench_growing_copy_in,
        bench_clone,
        bench_reserve,
);


/// Vector of random words from the given seed
fn random_words(count: usize, seed: u64) -> Vec<BigWord> {
    let mut rng = oorandom::Rand64::new(seed as u128);
    (0..count).map(|_| rng.rand_u64()).collect()
}

fn bench_copy_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_in");
    for &count in [1, BLOCK_SIZE, 4 * BLOCK_SIZE, 64 * BLOCK_SIZE].iter() {
        let words = random_words(count, 0x5eed);
        let mut n = BigInt::from_words(&words).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter(|| n.assign_words(black_box(words)).unwrap())
        });
    }
    group.finish();
}

fn bench_growing_copy_in(c: &mut Criterion) {
    let words = random_words(16 * BLOCK_SIZE, 0xfeed);
    c.bench_function("growing_copy_in", |b| {
        b.iter(|| {
            let mut n = BigInt::new();
            for count in 1..=words.len() {
                n.assign_words(&words[..count]).unwrap();
            }
            black_box(n)
        })
    });
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for &count in [1, 4 * BLOCK_SIZE, 64 * BLOCK_SIZE].iter() {
        let n = BigInt::from_words(&random_words(count, 0xc10e)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &n, |b, n| {
            b.iter(|| black_box(n.clone()))
        });
        let mut dest = BigInt::from_words(&random_words(count, 0xde57)).unwrap();
        group.bench_with_input(BenchmarkId::new("clone_from", count), &n, |b, n| {
            b.iter(|| dest.clone_from(black_box(n)))
        });
    }
    group.finish();
}

fn bench_reserve(c: &mut Criterion) {
    let n = BigInt::from_words(&random_words(BLOCK_SIZE, 0x7e5e)).unwrap();
    c.bench_function("reserve_preserving", |b| {
        b.iter(|| {
            let mut m = n.clone();
            m.reserve(32 * BLOCK_SIZE).unwrap();
            black_box(m)
        })
    });
}
