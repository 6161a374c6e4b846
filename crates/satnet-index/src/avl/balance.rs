//! Rotations and the rebalance policy.
//!
//! All functions take a subtree by value and return its (possibly new)
//! root. The caller stores the returned root back into the slot it took the
//! subtree from.

use std::fmt;

use satnet_common::constants::MAX_BALANCE_FACTOR;

use super::node::{balance_factor, Node};

/// The restructuring applied by [`rebalance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Subtree was already balanced.
    None,
    /// Single left rotation (right-right case).
    Left,
    /// Single right rotation (left-left case).
    Right,
    /// Left rotation on the left child, then right rotation (left-right case).
    LeftRight,
    /// Right rotation on the right child, then left rotation (right-left case).
    RightLeft,
}

impl Rotation {
    /// Returns true if two single rotations were applied.
    #[inline]
    pub fn is_double(self) -> bool {
        matches!(self, Self::LeftRight | Self::RightLeft)
    }

    /// Returns true if any rotation was applied.
    #[inline]
    pub fn is_rotation(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        };
        f.write_str(name)
    }
}

/// Rotates a subtree to the right.
///
/// ```text
///        n              l
///       / \            / \
///      l   c    =>    a   n
///     / \                / \
///    a   b              b   c
/// ```
///
/// The left child must be present.
pub(crate) fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    debug_assert!(node.left.is_some(), "rotate_right requires a left child");
    let Some(mut new_root) = node.left.take() else {
        return node;
    };
    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}

/// Rotates a subtree to the left. Mirror of [`rotate_right`].
///
/// The right child must be present.
pub(crate) fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    debug_assert!(node.right.is_some(), "rotate_left requires a right child");
    let Some(mut new_root) = node.right.take() else {
        return node;
    };
    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}

/// Restores the AVL condition at the root of a subtree whose children are
/// balanced and whose heights differ by at most two.
///
/// The node's own cached height must be current.
pub(crate) fn rebalance(mut node: Box<Node>) -> (Box<Node>, Rotation) {
    let factor = node.balance_factor();

    if factor > MAX_BALANCE_FACTOR {
        if balance_factor(node.left()) >= 0 {
            (rotate_right(node), Rotation::Right)
        } else {
            node.left = node.left.take().map(rotate_left);
            (rotate_right(node), Rotation::LeftRight)
        }
    } else if factor < -MAX_BALANCE_FACTOR {
        if balance_factor(node.right()) <= 0 {
            (rotate_left(node), Rotation::Left)
        } else {
            node.right = node.right.take().map(rotate_right);
            (rotate_left(node), Rotation::RightLeft)
        }
    } else {
        (node, Rotation::None)
    }
}
