//! Index benchmarks for SatNet.
//!
//! Benchmarks for:
//! - Inserts in ascending, descending and random id order
//! - Point lookups and inclination counts
//! - Single removals and deorbited sweeps
//! - Deep copies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use satnet_bench::utils::{
    ascending_fleet, build_index, deorbit_fraction, descending_fleet, random_fleet, SIZES,
};
use satnet_common::types::{Inclination, Satellite};
use satnet_index::SatNet;

fn bench_insert(c: &mut Criterion, name: &str, fleet_for: fn(usize) -> Vec<Satellite>) {
    let mut group = c.benchmark_group(format!("index/insert_{name}"));

    for size in SIZES.iter() {
        let fleet = fleet_for(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut net = SatNet::new();
                for satellite in &fleet {
                    net.insert(*satellite);
                }
                black_box(net.len())
            });
        });
    }

    group.finish();
}

fn bench_insert_ascending(c: &mut Criterion) {
    bench_insert(c, "ascending", ascending_fleet);
}

fn bench_insert_descending(c: &mut Criterion) {
    bench_insert(c, "descending", descending_fleet);
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "random", random_fleet);
}

/// Benchmark point lookups.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/find");

    for size in SIZES.iter() {
        let fleet = random_fleet(*size);
        let net = build_index(&fleet);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let found = fleet
                    .iter()
                    .filter(|satellite| net.find_satellite(satellite.id()))
                    .count();
                black_box(found)
            });
        });
    }

    group.finish();
}

/// Benchmark full-tree inclination counts.
fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/count_satellites");

    for size in SIZES.iter() {
        let net = build_index(&random_fleet(*size));

        group.throughput(Throughput::Elements(net.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(net.count_satellites(Inclination::I53)));
        });
    }

    group.finish();
}

/// Benchmark removing every satellite one id at a time.
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/remove");

    for size in SIZES.iter() {
        let fleet = random_fleet(*size);
        let net = build_index(&fleet);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter_batched(
                || net.clone(),
                |mut net| {
                    for satellite in &fleet {
                        net.remove(satellite.id());
                    }
                    black_box(net.len())
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark sweeping out deorbited satellites.
fn bench_remove_deorbited(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/remove_deorbited");

    for fraction in [0.1, 0.5, 0.9] {
        let mut net = build_index(&random_fleet(10_000));
        let flagged = deorbit_fraction(&mut net, fraction);

        group.throughput(Throughput::Elements(flagged as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(fraction),
            &fraction,
            |b, _| {
                b.iter_batched(
                    || net.clone(),
                    |mut net| black_box(net.remove_deorbited()),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark deep copies through `assign`.
fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/assign");

    for size in SIZES.iter() {
        let source = build_index(&random_fleet(*size));

        group.throughput(Throughput::Elements(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut target = SatNet::new();
            b.iter(|| black_box(target.assign(&source).len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ascending,
    bench_insert_descending,
    bench_insert_random,
    bench_find,
    bench_count,
    bench_remove,
    bench_remove_deorbited,
    bench_assign,
);
criterion_main!(benches);
