//! Tree node layout and height bookkeeping.
//!
//! A node caches the height of the subtree it roots. The cache is never
//! recomputed on read; whoever changes a child link must call
//! [`Node::update_height`] on the node afterwards.

use satnet_common::constants::{EMPTY_HEIGHT, LEAF_HEIGHT};
use satnet_common::types::{SatId, Satellite};

/// An owning link to a child subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A node of the index.
///
/// Nodes are only reachable through shared borrows handed out by
/// [`SatNet`](super::SatNet); callers can inspect the shape of the tree but
/// never own or mutate a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) satellite: Satellite,
    pub(crate) height: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Creates a detached leaf.
    pub(crate) fn leaf(satellite: Satellite) -> Self {
        Self {
            satellite,
            height: LEAF_HEIGHT,
            left: None,
            right: None,
        }
    }

    /// Returns the record stored in this node.
    #[inline]
    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    /// Returns the identifier stored in this node.
    #[inline]
    pub fn id(&self) -> SatId {
        self.satellite.id()
    }

    /// Returns the cached subtree height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the left child.
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns the right child.
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns true if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `height(left) - height(right)` from the cached heights.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height(self.left()) - height(self.right())
    }

    /// Recomputes the cached height from the children's cached heights.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

/// Returns the cached height of a subtree, `-1` when absent.
#[inline]
pub fn height(node: Option<&Node>) -> i32 {
    node.map_or(EMPTY_HEIGHT, Node::height)
}

/// Returns the balance factor of a subtree, `0` when absent.
#[inline]
pub fn balance_factor(node: Option<&Node>) -> i32 {
    node.map_or(0, Node::balance_factor)
}

/// Returns the node holding the smallest identifier of a subtree.
pub(crate) fn leftmost(mut node: &Node) -> &Node {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}
