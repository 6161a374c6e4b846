//! Configuration file support for the CLI.
//!
//! Loads and saves simulator configuration from TOML files:
//!
//! ```toml
//! [index]
//! min_id = 10000
//! max_id = 99999
//!
//! [simulation]
//! count = 1000
//! seed = 10
//! deorbit_every = 3
//! output_format = "table"
//! ```

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use satnet_common::config::IndexConfig;
use satnet_common::constants::DEFAULT_WORKLOAD_SEED;

use crate::formatter::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Index settings.
    #[serde(default)]
    pub index: IndexConfig,

    /// Fleet simulation settings.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Fleet simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of satellites to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Seed for the fleet generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Every K-th generated satellite is deorbited. Zero disables it.
    #[serde(default = "default_deorbit_every")]
    pub deorbit_every: usize,

    /// Listing format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_count() -> usize {
    20
}

fn default_seed() -> u64 {
    DEFAULT_WORKLOAD_SEED
}

fn default_deorbit_every() -> usize {
    2
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: default_seed(),
            deorbit_every: default_deorbit_every(),
            output_format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that the index range is usable.
    pub fn validate(&self) -> Result<()> {
        self.index.validate()?;
        Ok(())
    }
}
