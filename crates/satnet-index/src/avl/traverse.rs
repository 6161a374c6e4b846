//! In-order traversal, dump and listing.

use std::fmt::Write;

use satnet_common::types::Satellite;

use super::node::Node;

/// In-order iterator over the records of an index.
///
/// Yields records in ascending identifier order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Satellite;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.satellite())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Renders a subtree as `(left id:height right)`, empty for an absent node.
pub(crate) fn dump(node: Option<&Node>) -> String {
    let mut out = String::new();
    dump_into(node, &mut out);
    out
}

fn dump_into(node: Option<&Node>, out: &mut String) {
    if let Some(node) = node {
        out.push('(');
        dump_into(node.left(), out);
        // Writing to a String cannot fail.
        let _ = write!(out, "{}:{}", node.id(), node.height());
        dump_into(node.right(), out);
        out.push(')');
    }
}

/// Visits every node of a subtree, children before their parent.
pub(crate) fn for_each_post_order<'a>(node: Option<&'a Node>, visit: &mut impl FnMut(&'a Node)) {
    if let Some(node) = node {
        for_each_post_order(node.left(), visit);
        for_each_post_order(node.right(), visit);
        visit(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satnet_common::types::SatId;

    fn leaf(id: u32) -> Box<Node> {
        Box::new(Node::leaf(Satellite::with_id(SatId::new(id))))
    }

    fn sample() -> Box<Node> {
        let mut root = leaf(20);
        root.left = Some(leaf(10));
        root.right = Some(leaf(30));
        root.update_height();
        root
    }

    #[test]
    fn test_dump() {
        assert_eq!(dump(None), "");
        assert_eq!(dump(Some(&*leaf(7))), "(7:0)");
        assert_eq!(dump(Some(&*sample())), "((10:0)20:1(30:0))");
    }

    #[test]
    fn test_iter_in_order() {
        let root = sample();
        let iter = Iter::new(Some(&*root), 3);
        assert_eq!(iter.len(), 3);
        let ids: Vec<u32> = iter.map(|s| s.id().as_u32()).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_iter_empty() {
        let mut iter = Iter::new(None, 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_post_order() {
        let root = sample();
        let mut seen = Vec::new();
        for_each_post_order(Some(&*root), &mut |n| seen.push(n.id().as_u32()));
        assert_eq!(seen, vec![10, 30, 20]);
    }
}
