//! Type definitions for SatNet.
//!
//! This module contains the satellite record and its identifier.

mod ids;
mod satellite;

pub use ids::SatId;
pub use satellite::{Altitude, Inclination, SatState, Satellite};
