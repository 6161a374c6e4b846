//! Benchmark utilities and helpers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use satnet_common::constants::MIN_ID;
use satnet_common::types::{SatId, SatState, Satellite};
use satnet_common::IndexConfig;
use satnet_index::SatNet;
use satnet_common::workload::FleetGenerator;

/// Index sizes shared by the benchmark groups.
pub const SIZES: [usize; 3] = [1_000, 10_000, 50_000];

/// Generates `count` satellites with ascending ids starting at `MIN_ID`.
pub fn ascending_fleet(count: usize) -> Vec<Satellite> {
    (MIN_ID..)
        .take(count)
        .map(|id| Satellite::with_id(SatId::new(id)))
        .collect()
}

/// Generates `count` satellites with descending ids ending at `MIN_ID`.
pub fn descending_fleet(count: usize) -> Vec<Satellite> {
    let mut fleet = ascending_fleet(count);
    fleet.reverse();
    fleet
}

/// Generates `count` random satellites over the default id range.
pub fn random_fleet(count: usize) -> Vec<Satellite> {
    FleetGenerator::new(&IndexConfig::default(), 42).generate(count)
}

/// Builds an index holding `fleet`.
pub fn build_index(fleet: &[Satellite]) -> SatNet {
    fleet.iter().copied().collect()
}

/// Marks roughly `fraction` of the indexed satellites as deorbited.
pub fn deorbit_fraction(net: &mut SatNet, fraction: f64) -> usize {
    let mut rng = StdRng::seed_from_u64(42);
    let ids: Vec<SatId> = net.iter().map(Satellite::id).collect();
    ids.into_iter()
        .filter(|_| rng.gen_bool(fraction))
        .filter(|&id| net.set_state(id, SatState::Deorbited))
        .count()
}
