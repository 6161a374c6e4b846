//! Reproducible satellite workloads.
//!
//! Every generator is seeded, defaulting to `DEFAULT_WORKLOAD_SEED`, so a
//! given seed always yields the same sequence.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::IndexConfig;
use crate::constants::DEFAULT_WORKLOAD_SEED;
use crate::types::{Altitude, Inclination, SatId, Satellite};

/// Uniformly distributed identifiers over an inclusive range.
///
/// Identifiers may repeat.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
    range: RangeInclusive<u32>,
}

impl IdGenerator {
    /// Creates a generator over `[min, max]` with the default seed.
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(DEFAULT_WORKLOAD_SEED),
            range: min..=max,
        }
    }

    /// Creates a generator over the range accepted by `config`.
    pub fn for_config(config: &IndexConfig) -> Self {
        Self::new(config.min_id, config.max_id)
    }

    /// Reseeds the generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns the next identifier.
    pub fn next_id(&mut self) -> SatId {
        SatId::new(self.rng.gen_range(self.range.clone()))
    }
}

impl Iterator for IdGenerator {
    type Item = SatId;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_id())
    }
}

/// Returns every identifier in `[min, max]` exactly once, shuffled.
pub fn shuffled_ids(min: u32, max: u32, seed: u64) -> Vec<SatId> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids: Vec<SatId> = (min..=max).map(SatId::new).collect();
    ids.shuffle(&mut rng);
    ids
}

/// Random active satellites with uniform altitude and inclination.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    ids: IdGenerator,
    rng: StdRng,
}

impl FleetGenerator {
    /// Creates a generator for the range accepted by `config`.
    pub fn new(config: &IndexConfig, seed: u64) -> Self {
        Self {
            ids: IdGenerator::for_config(config).with_seed(seed),
            // Payload draws use their own stream so that the id sequence
            // matches a bare `IdGenerator` with the same seed.
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// Returns the next satellite.
    pub fn next_satellite(&mut self) -> Satellite {
        let id = self.ids.next_id();
        let altitude = *Altitude::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Altitude::Mi208);
        let inclination = *Inclination::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Inclination::I48);
        Satellite::new(id, altitude, inclination)
    }

    /// Returns `count` satellites. Identifiers may repeat.
    pub fn generate(&mut self, count: usize) -> Vec<Satellite> {
        (0..count).map(|_| self.next_satellite()).collect()
    }
}

impl Iterator for FleetGenerator {
    type Item = Satellite;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_satellite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_generator_is_reproducible() {
        let a: Vec<SatId> = IdGenerator::new(10000, 99999).take(50).collect();
        let b: Vec<SatId> = IdGenerator::new(10000, 99999).take(50).collect();
        assert_eq!(a, b);

        let c: Vec<SatId> = IdGenerator::new(10000, 99999)
            .with_seed(99)
            .take(50)
            .collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_id_generator_stays_in_range() {
        assert!(IdGenerator::new(5, 9)
            .take(500)
            .all(|id| id.is_within(5, 9)));
    }

    #[test]
    fn test_shuffled_ids_are_a_permutation() {
        let ids = shuffled_ids(1, 100, 7);
        assert_eq!(ids.len(), 100);
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 100);
        assert!(ids.iter().all(|id| id.is_within(1, 100)));
    }

    #[test]
    fn test_fleet_generator() {
        let config = IndexConfig::default();
        let fleet = FleetGenerator::new(&config, 3).generate(200);
        assert_eq!(fleet.len(), 200);
        assert!(fleet.iter().all(|s| config.accepts(s.id())));
        // With 200 draws every inclination shows up.
        for inclination in Inclination::ALL {
            assert!(fleet.iter().any(|s| s.inclination() == inclination));
        }
    }
}
