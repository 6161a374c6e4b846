//! Contention benchmarks for `SharedSatNet`.

use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use satnet_bench::utils::random_fleet;
use satnet_common::types::{SatState, Satellite};
use satnet_index::SharedSatNet;

const OPS_PER_THREAD: usize = 2_000;

/// Readers look up ids while one writer flips states.
fn bench_mixed_readers_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared/mixed");
    let fleet = random_fleet(10_000);

    for readers in [1usize, 2, 4] {
        let shared = SharedSatNet::new();
        for satellite in &fleet {
            shared.insert(*satellite);
        }

        group.throughput(Throughput::Elements(((readers + 1) * OPS_PER_THREAD) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(readers), &readers, |b, &readers| {
            b.iter(|| {
                thread::scope(|scope| {
                    for reader in 0..readers {
                        let shared = shared.clone();
                        let fleet = &fleet;
                        scope.spawn(move || {
                            let found = fleet
                                .iter()
                                .skip(reader)
                                .take(OPS_PER_THREAD)
                                .filter(|s| shared.find_satellite(s.id()))
                                .count();
                            black_box(found);
                        });
                    }
                    scope.spawn(|| {
                        for satellite in fleet.iter().take(OPS_PER_THREAD) {
                            shared.set_state(satellite.id(), SatState::Decaying);
                        }
                    });
                });
            });
        });
    }

    group.finish();
}

/// Several writers insert disjoint fleets concurrently.
fn bench_concurrent_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared/insert");
    let fleet: Vec<Satellite> = random_fleet(8 * OPS_PER_THREAD);

    for writers in [1usize, 2, 4, 8] {
        group.throughput(Throughput::Elements((writers * OPS_PER_THREAD) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(writers), &writers, |b, &writers| {
            b.iter(|| {
                let shared = SharedSatNet::new();
                thread::scope(|scope| {
                    for chunk in fleet.chunks(OPS_PER_THREAD).take(writers) {
                        let shared = shared.clone();
                        scope.spawn(move || {
                            for satellite in chunk {
                                shared.insert(*satellite);
                            }
                        });
                    }
                });
                black_box(shared.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mixed_readers_writer, bench_concurrent_inserts);
criterion_main!(benches);
