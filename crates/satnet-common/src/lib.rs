//! # satnet-common
//!
//! Common types, errors, and configuration for SatNet.
//!
//! This crate provides the foundational pieces shared by every SatNet
//! component:
//!
//! - **Types**: The satellite record (`Satellite`), its identifier
//!   (`SatId`), and its payload enums
//! - **Errors**: Unified error handling with `SatNetError`
//! - **Config**: Index configuration (`IndexConfig`)
//! - **Constants**: Identifier range and height conventions
//! - **Workload**: Seeded identifier and fleet generators
//!
//! ## Example
//!
//! ```rust
//! use satnet_common::types::{Altitude, Inclination, SatId, SatState, Satellite};
//!
//! let sat = Satellite::new(SatId::new(10042), Altitude::Mi340, Inclination::I53);
//! assert_eq!(sat.state(), SatState::Active);
//! assert_eq!(sat.id().as_u32(), 10042);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod workload;

pub use config::IndexConfig;
pub use constants::*;
pub use error::{ErrorCode, SatNetError, SatNetResult};
pub use types::{Altitude, Inclination, SatId, SatState, Satellite};
