// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Benchmarks for the PMA crate: insertion, deletion, and find workloads
//! across a range of container sizes, mirroring the teacher crate's
//! `benches/benchmark.rs` structure (one benchmark group per operation,
//! parameterized by size).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pma::Pma;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const SIZES_TO_BENCHMARK: [i64; 3] = [64, 1024, 16384];

fn shuffled_keys(n: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<i64> = (1..=n).collect();
    keys.shuffle(&mut rng);
    keys
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in SIZES_TO_BENCHMARK.iter() {
        let keys = shuffled_keys(n, 0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut pma: Pma<i64> = Pma::new();
                for &k in &keys {
                    pma.insert(black_box(k)).unwrap();
                }
                pma
            })
        });
    }
}

fn benchmark_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for &n in SIZES_TO_BENCHMARK.iter() {
        let keys = shuffled_keys(n, 1);
        let mut pma: Pma<i64> = Pma::new();
        for &k in &keys {
            pma.insert(k).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                for &k in &keys {
                    black_box(pma.find(black_box(k)));
                }
            })
        });
    }
}

fn benchmark_delete_then_reinsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_then_reinsert");
    for &n in SIZES_TO_BENCHMARK.iter() {
        let keys = shuffled_keys(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut pma: Pma<i64> = Pma::new();
                for &k in &keys {
                    pma.insert(k).unwrap();
                }
                for &k in &keys {
                    pma.delete(black_box(k)).unwrap();
                }
                pma
            })
        });
    }
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_delete_then_reinsert
);
criterion_main!(benches);
