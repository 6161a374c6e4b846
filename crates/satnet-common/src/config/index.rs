//! Index configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{MAX_ID, MIN_ID};
use crate::error::{SatNetError, SatNetResult};
use crate::types::SatId;

/// Configuration for a satellite index.
///
/// # Example
///
/// ```rust
/// use satnet_common::config::IndexConfig;
///
/// let config = IndexConfig::default();
/// assert_eq!(config.min_id, 10000);
/// assert_eq!(config.max_id, 99999);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Smallest accepted identifier (inclusive).
    /// Default: 10000
    #[serde(default = "default_min_id")]
    pub min_id: u32,

    /// Largest accepted identifier (inclusive).
    /// Default: 99999
    #[serde(default = "default_max_id")]
    pub max_id: u32,
}

fn default_min_id() -> u32 {
    MIN_ID
}

fn default_max_id() -> u32 {
    MAX_ID
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_id: MIN_ID,
            max_id: MAX_ID,
        }
    }
}

impl IndexConfig {
    /// Creates a configuration with the default identifier range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted identifier range.
    #[must_use]
    pub fn with_id_range(mut self, min_id: u32, max_id: u32) -> Self {
        self.min_id = min_id;
        self.max_id = max_id;
        self
    }

    /// Creates a small-range configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            min_id: 1,
            max_id: 1000,
        }
    }

    /// Returns true if `id` lies in the configured range.
    #[inline]
    #[must_use]
    pub fn accepts(&self, id: SatId) -> bool {
        id.is_within(self.min_id, self.max_id)
    }

    /// Returns the number of identifiers in the range.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        if self.min_id > self.max_id {
            0
        } else {
            u64::from(self.max_id - self.min_id) + 1
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the range is empty.
    pub fn validate(&self) -> SatNetResult<()> {
        if self.min_id > self.max_id {
            return Err(SatNetError::invalid_config(format!(
                "min_id ({}) must not exceed max_id ({})",
                self.min_id, self.max_id
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML and `InvalidConfig` if the
    /// parsed range is empty.
    pub fn from_toml_str(content: &str) -> SatNetResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`IndexConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> SatNetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if serialization fails.
    pub fn to_toml(&self) -> SatNetResult<String> {
        toml::to_string_pretty(self).map_err(|e| SatNetError::invalid_config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.min_id, MIN_ID);
        assert_eq!(config.max_id, MAX_ID);
        assert!(config.validate().is_ok());
        assert_eq!(config.capacity(), 90_000);
    }

    #[test]
    fn test_accepts() {
        let config = IndexConfig::new().with_id_range(10, 20);
        assert!(config.accepts(SatId::new(10)));
        assert!(config.accepts(SatId::new(20)));
        assert!(!config.accepts(SatId::new(9)));
        assert!(!config.accepts(SatId::new(21)));
    }

    #[test]
    fn test_invalid_range() {
        let config = IndexConfig::new().with_id_range(20, 10);
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
        assert_eq!(config.capacity(), 0);
    }

    #[test]
    fn test_from_toml() {
        let config = IndexConfig::from_toml_str("min_id = 1\nmax_id = 50\n").unwrap();
        assert_eq!(config, IndexConfig::new().with_id_range(1, 50));

        let config = IndexConfig::from_toml_str("max_id = 20000\n").unwrap();
        assert_eq!(config.min_id, MIN_ID);
        assert_eq!(config.max_id, 20000);

        let err = IndexConfig::from_toml_str("min_id = 9\nmax_id = 1\n").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);

        let err = IndexConfig::from_toml_str("min_id = \"oops\"").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigParse);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = IndexConfig::for_testing();
        let text = config.to_toml().unwrap();
        assert_eq!(IndexConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = IndexConfig::from_file("/nonexistent/satnet/index.toml").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Io);
    }
}
