//! # satnet-index
//!
//! Height-balanced (AVL) index of satellite records, keyed by `SatId`.
//!
//! The index keeps strict BST ordering on identifiers and restores the AVL
//! balance condition along the ancestor chain after every insert and
//! removal, so lookups and mutations stay logarithmic.
//!
//! ## Example
//!
//! ```rust
//! use satnet_common::types::{Inclination, SatId, SatState, Satellite};
//! use satnet_index::SatNet;
//!
//! let mut net = SatNet::new();
//! for id in 10000..10005 {
//!     net.insert(Satellite::with_id(SatId::new(id)));
//! }
//! assert_eq!(net.dump(), "((10000:0)10001:2((10002:0)10003:1(10004:0)))");
//!
//! assert!(net.set_state(SatId::new(10003), SatState::Deorbited));
//! assert_eq!(net.remove_deorbited(), 1);
//! assert!(!net.find_satellite(SatId::new(10003)));
//! assert_eq!(net.count_satellites(Inclination::I48), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod avl;
pub mod shared;
pub mod stats;

pub use avl::{Iter, Node, Rotation, SatNet, Verified};
pub use shared::SharedSatNet;
pub use stats::IndexStats;
