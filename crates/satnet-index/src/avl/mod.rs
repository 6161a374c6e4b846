//! AVL tree engine.
//!
//! ## Layout
//!
//! ```text
//!                 ┌──────────────┐
//!                 │ 10001 : h=2  │   root, owned by SatNet
//!                 └──────┬───────┘
//!            ┌───────────┴───────────┐
//!     ┌──────┴──────┐         ┌──────┴──────┐
//!     │ 10000 : h=0 │         │ 10003 : h=1 │
//!     └─────────────┘         └──────┬──────┘
//!                            ┌───────┴───────┐
//!                     ┌──────┴──────┐ ┌──────┴──────┐
//!                     │ 10002 : h=0 │ │ 10004 : h=0 │
//!                     └─────────────┘ └─────────────┘
//! ```
//!
//! Every node exclusively owns its children through `Option<Box<Node>>`.
//! Mutations rewrite a child slot by taking the subtree out, rebalancing it,
//! and storing the returned root back.
//!
//! - [`node`]: node layout, cached heights, balance factors
//! - [`balance`]: rotations and the rebalance policy
//! - [`tree`]: the `SatNet` index
//! - [`traverse`]: in-order iteration, dump and listing
//! - [`verify`]: invariant checking

pub mod balance;
pub mod node;
pub mod traverse;
pub mod tree;
pub mod verify;

pub use balance::Rotation;
pub use node::Node;
pub use traverse::Iter;
pub use tree::SatNet;
pub use verify::Verified;
