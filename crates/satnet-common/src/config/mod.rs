//! Configuration for SatNet.
//!
//! This module provides the configuration structure for the index.

mod index;

pub use index::IndexConfig;
