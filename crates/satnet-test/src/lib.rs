//! # satnet-test
//!
//! Test support for SatNet.
//!
//! This crate contains:
//! - Workload generators producing reproducible satellite fleets,
//!   re-exported from `satnet-common`
//! - Independent invariant checkers that recompute tree properties
//!   without trusting cached node state
//! - Scenario, property and scaling tests (under `tests/`)

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Invariant checkers
pub mod checks;

pub use satnet_common::workload;
