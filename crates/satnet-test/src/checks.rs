//! Independent invariant checks.
//!
//! Each property is recomputed from the node graph without going through
//! `SatNet::verify`.

use std::collections::HashSet;

use satnet_common::config::IndexConfig;
use satnet_common::types::SatId;
use satnet_index::{Node, SatNet};

/// Returns the identifiers of an index in traversal order.
pub fn in_order_ids(net: &SatNet) -> Vec<SatId> {
    fn walk(node: Option<&Node>, out: &mut Vec<SatId>) {
        if let Some(node) = node {
            walk(node.left(), out);
            out.push(node.id());
            walk(node.right(), out);
        }
    }
    let mut out = Vec::with_capacity(net.len());
    walk(net.root(), &mut out);
    out
}

/// Returns true if the in-order traversal is strictly increasing.
pub fn is_bst(net: &SatNet) -> bool {
    in_order_ids(net).windows(2).all(|pair| pair[0] < pair[1])
}

/// Recomputes a subtree height, `-1` when absent.
pub fn true_height(node: Option<&Node>) -> i32 {
    node.map_or(-1, |n| 1 + true_height(n.left()).max(true_height(n.right())))
}

/// Returns true if every node's two subtrees differ in height by at most one.
pub fn is_balanced(node: Option<&Node>) -> bool {
    node.map_or(true, |n| {
        (true_height(n.left()) - true_height(n.right())).abs() <= 1
            && is_balanced(n.left())
            && is_balanced(n.right())
    })
}

/// Returns true if every cached height matches its recomputed value.
pub fn heights_are_correct(node: Option<&Node>) -> bool {
    node.map_or(true, |n| {
        n.height() == true_height(Some(n))
            && heights_are_correct(n.left())
            && heights_are_correct(n.right())
    })
}

/// Returns true if all identifiers are distinct and inside `config`'s range.
pub fn ids_unique_and_in_range(net: &SatNet, config: &IndexConfig) -> bool {
    let ids = in_order_ids(net);
    let unique: HashSet<SatId> = ids.iter().copied().collect();
    unique.len() == ids.len() && ids.iter().all(|&id| config.accepts(id))
}

/// Panics with a description of the first invariant that does not hold.
pub fn assert_invariants(net: &SatNet) {
    assert!(is_bst(net), "ordering broken: {}", net.dump());
    assert!(
        ids_unique_and_in_range(net, net.config()),
        "duplicate or out-of-range id: {}",
        net.dump()
    );
    assert!(is_balanced(net.root()), "unbalanced: {}", net.dump());
    assert!(
        heights_are_correct(net.root()),
        "stale height: {}",
        net.dump()
    );
    assert_eq!(in_order_ids(net).len(), net.len(), "length mismatch");
}

/// Returns true if no node of `a` lives at the same address as a node of `b`.
pub fn nodes_disjoint(a: &SatNet, b: &SatNet) -> bool {
    fn addresses(node: Option<&Node>, out: &mut HashSet<*const Node>) {
        if let Some(node) = node {
            out.insert(node as *const Node);
            addresses(node.left(), out);
            addresses(node.right(), out);
        }
    }
    let mut left = HashSet::new();
    let mut right = HashSet::new();
    addresses(a.root(), &mut left);
    addresses(b.root(), &mut right);
    left.is_disjoint(&right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satnet_common::types::Satellite;

    #[test]
    fn test_checks_on_valid_tree() {
        let net: SatNet = (10000..10100)
            .map(|id| Satellite::with_id(SatId::new(id)))
            .collect();
        assert_invariants(&net);
        assert_eq!(true_height(net.root()), net.height());
    }

    #[test]
    fn test_checks_on_empty_tree() {
        let net = SatNet::new();
        assert_invariants(&net);
        assert_eq!(true_height(None), -1);
        assert!(in_order_ids(&net).is_empty());
    }

    #[test]
    fn test_nodes_disjoint() {
        let net: SatNet = (10000..10010)
            .map(|id| Satellite::with_id(SatId::new(id)))
            .collect();
        let copy = net.clone();
        assert!(nodes_disjoint(&net, &copy));
        assert!(!nodes_disjoint(&net, &net));
    }
}
