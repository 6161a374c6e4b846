//! Fleet simulation driven by the CLI.
//!
//! Generates a seeded fleet, indexes it, deorbits every K-th generated
//! satellite, sweeps the deorbited ones out and reports what is left.
//! A generated id can repeat, so an indexed satellite is counted as
//! deorbited at most once.

use anyhow::{Context, Result};
use tracing::{debug, info};

use satnet_common::error::SatNetError;
use satnet_common::types::{Inclination, SatState, Satellite};
use satnet_common::workload::FleetGenerator;
use satnet_index::SatNet;

use crate::config::CliConfig;

/// Outcome of a simulation run.
#[derive(Debug)]
pub struct SimulationReport {
    /// The index after the deorbited sweep.
    pub net: SatNet,
    /// Satellites generated.
    pub generated: usize,
    /// Generated satellites rejected as duplicates.
    pub duplicates: usize,
    /// Generated satellites rejected as out of range.
    pub out_of_range: usize,
    /// Distinct indexed satellites marked deorbited.
    pub deorbited: usize,
    /// Satellites removed by the sweep.
    pub removed: usize,
}

impl SimulationReport {
    /// Remaining satellites per inclination, in declaration order.
    pub fn counts(&self) -> Vec<(Inclination, usize)> {
        Inclination::ALL
            .iter()
            .map(|&inclination| (inclination, self.net.count_satellites(inclination)))
            .collect()
    }

    /// One-line summary of what the run did.
    pub fn summary(&self) -> String {
        format!(
            "generated {}, duplicates {}, out of range {}, deorbited {}, removed {}, remaining {}",
            self.generated,
            self.duplicates,
            self.out_of_range,
            self.deorbited,
            self.removed,
            self.net.len()
        )
    }

    /// Remaining satellites in ascending id order.
    pub fn satellites(&self) -> Vec<Satellite> {
        self.net.iter().copied().collect()
    }
}

/// Runs one simulation with the given configuration.
pub fn run(config: &CliConfig) -> Result<SimulationReport> {
    config.validate().context("invalid index configuration")?;
    let sim = &config.simulation;

    let fleet = FleetGenerator::new(&config.index, sim.seed).generate(sim.count);
    let mut net = SatNet::with_config(config.index.clone());

    let mut duplicates = 0;
    let mut out_of_range = 0;
    for satellite in &fleet {
        match net.try_insert(*satellite) {
            Ok(()) => {}
            Err(SatNetError::DuplicateId { .. }) => duplicates += 1,
            Err(SatNetError::IdOutOfRange { .. }) => out_of_range += 1,
            Err(err) => return Err(err).context("insert failed"),
        }
    }
    info!(
        generated = fleet.len(),
        indexed = net.len(),
        duplicates,
        "fleet indexed"
    );

    let mut deorbited = 0;
    if sim.deorbit_every > 0 {
        for satellite in fleet.iter().skip(sim.deorbit_every - 1).step_by(sim.deorbit_every) {
            let id = satellite.id();
            let pending = net.get(id).is_some_and(|s| !s.is_deorbited());
            if pending && net.set_state(id, SatState::Deorbited) {
                deorbited += 1;
            }
        }
    }
    debug!(deorbited, every = sim.deorbit_every, "satellites deorbited");

    let removed = net.remove_deorbited();
    info!(removed, remaining = net.len(), "deorbited satellites swept");

    Ok(SimulationReport {
        net,
        generated: fleet.len(),
        duplicates,
        out_of_range,
        deorbited,
        removed,
    })
}
