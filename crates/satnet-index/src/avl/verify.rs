//! Invariant checking.
//!
//! [`verify`] recomputes every height from scratch instead of trusting the
//! caches, so it catches stale heights as well as ordering, range and
//! balance violations.

use satnet_common::config::IndexConfig;
use satnet_common::constants::{EMPTY_HEIGHT, MAX_BALANCE_FACTOR};
use satnet_common::error::{SatNetError, SatNetResult};
use satnet_common::types::SatId;

use super::node::Node;

/// Summary of a verified subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verified {
    /// Number of nodes.
    pub nodes: usize,
    /// Recomputed height, `-1` for an empty subtree.
    pub height: i32,
}

/// Checks BST order, uniqueness, range, AVL balance and cached heights for
/// every node of a subtree.
///
/// # Errors
///
/// Returns `TreeStructure` describing the first violation found.
pub fn verify(root: Option<&Node>, config: &IndexConfig) -> SatNetResult<Verified> {
    check(root, None, None, config)
}

fn check(
    node: Option<&Node>,
    lower: Option<SatId>,
    upper: Option<SatId>,
    config: &IndexConfig,
) -> SatNetResult<Verified> {
    let Some(node) = node else {
        return Ok(Verified {
            nodes: 0,
            height: EMPTY_HEIGHT,
        });
    };
    let id = node.id();

    if !config.accepts(id) {
        return Err(SatNetError::structure(format!(
            "id {id} outside [{}, {}]",
            config.min_id, config.max_id
        )));
    }
    // Strict bounds reject duplicates as well as misplaced ids.
    if lower.is_some_and(|low| id <= low) || upper.is_some_and(|high| id >= high) {
        return Err(SatNetError::structure(format!(
            "id {id} breaks ordering (bounds {lower:?}..{upper:?})"
        )));
    }

    let left = check(node.left(), lower, Some(id), config)?;
    let right = check(node.right(), Some(id), upper, config)?;

    let height = 1 + left.height.max(right.height);
    if node.height() != height {
        return Err(SatNetError::structure(format!(
            "id {id} caches height {} but has height {height}",
            node.height()
        )));
    }
    let factor = left.height - right.height;
    if factor.abs() > MAX_BALANCE_FACTOR {
        return Err(SatNetError::structure(format!(
            "id {id} has balance factor {factor}"
        )));
    }

    Ok(Verified {
        nodes: left.nodes + right.nodes + 1,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use satnet_common::types::Satellite;

    fn leaf(id: u32) -> Box<Node> {
        Box::new(Node::leaf(Satellite::with_id(SatId::new(id))))
    }

    fn join(left: Option<Box<Node>>, id: u32, right: Option<Box<Node>>) -> Box<Node> {
        let mut node = leaf(id);
        node.left = left;
        node.right = right;
        node.update_height();
        node
    }

    #[test]
    fn test_verify_empty() {
        let summary = verify(None, &IndexConfig::default()).unwrap();
        assert_eq!(summary.nodes, 0);
        assert_eq!(summary.height, -1);
    }

    #[test]
    fn test_verify_valid() {
        let root = join(Some(leaf(10000)), 10001, Some(leaf(10002)));
        let summary = verify(Some(&*root), &IndexConfig::default()).unwrap();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.height, 1);
    }

    #[test]
    fn test_verify_order() {
        let root = join(Some(leaf(10005)), 10001, None);
        let err = verify(Some(&*root), &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("ordering"));
    }

    #[test]
    fn test_verify_duplicate() {
        let root = join(None, 10001, Some(leaf(10001)));
        let err = verify(Some(&*root), &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("ordering"));
    }

    #[test]
    fn test_verify_range() {
        let root = leaf(5);
        let err = verify(Some(&*root), &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_verify_stale_height() {
        let mut root = join(Some(leaf(10000)), 10001, None);
        root.height = 5;
        let err = verify(Some(&*root), &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("caches height 5"));
    }

    #[test]
    fn test_verify_balance() {
        let root = join(Some(join(Some(leaf(10000)), 10001, None)), 10002, None);
        let err = verify(Some(&*root), &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("balance factor 2"));
    }
}
