//! SatNet Performance Benchmarks
//!
//! This crate contains benchmarks for the SatNet index:
//! - Inserts in ascending, descending and random id order
//! - Point lookups and inclination counts
//! - Removals and deorbited sweeps
//! - Contended access through `SharedSatNet`
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p satnet-bench
//! ```

pub mod utils;
