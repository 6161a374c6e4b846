//! System-wide constants for SatNet.

// =============================================================================
// Identifier Range
// =============================================================================

/// Smallest satellite identifier accepted by the index.
pub const MIN_ID: u32 = 10_000;

/// Largest satellite identifier accepted by the index.
pub const MAX_ID: u32 = 99_999;

// =============================================================================
// Height Conventions
// =============================================================================

/// Height reported for an absent child.
pub const EMPTY_HEIGHT: i32 = -1;

/// Height of a node with no children.
pub const LEAF_HEIGHT: i32 = 0;

/// Largest allowed absolute difference between sibling subtree heights.
pub const MAX_BALANCE_FACTOR: i32 = 1;

// =============================================================================
// Workload Defaults
// =============================================================================

/// Seed used by the deterministic workload generators.
///
/// A fixed seed keeps generated fleets identical across runs so that test
/// and benchmark results are reproducible.
pub const DEFAULT_WORKLOAD_SEED: u64 = 10;
