//! Error handling for SatNet.
//!
//! This module provides a unified error type and result alias used
//! across all SatNet components.

mod index;

pub use index::{ErrorCode, SatNetError};

/// Result type alias for SatNet operations.
pub type SatNetResult<T> = std::result::Result<T, SatNetError>;
