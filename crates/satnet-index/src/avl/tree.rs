//! The `SatNet` index.
//!
//! Mutations descend recursively through `&mut Link` slots. On the way back
//! up every visited slot has its node's height refreshed and is rebalanced,
//! so only the ancestor chain of the touched node is ever restructured.

use std::cmp::Ordering;

use tracing::{debug, trace};

use satnet_common::config::IndexConfig;
use satnet_common::error::{SatNetError, SatNetResult};
use satnet_common::types::{Inclination, SatId, SatState, Satellite};

use super::balance;
use super::node::{height, leftmost, Link, Node};
use super::traverse::{self, Iter};
use super::verify::{self, Verified};
use crate::stats::IndexStats;

/// A height-balanced index of satellites keyed by identifier.
///
/// Inserts silently ignore out-of-range and duplicate identifiers, and
/// removals of absent identifiers are no-ops; [`SatNet::try_insert`] reports
/// why an insert was rejected.
///
/// # Example
///
/// ```rust
/// use satnet_common::types::{SatId, Satellite};
/// use satnet_index::SatNet;
///
/// let mut net = SatNet::new();
/// for id in [10000, 10001, 10002, 10003, 10004] {
///     net.insert(Satellite::with_id(SatId::new(id)));
/// }
/// net.remove(SatId::new(10000));
/// net.remove(SatId::new(10001));
/// net.remove(SatId::new(10003));
/// assert_eq!(net.dump(), "((10002:0)10004:1)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SatNet {
    /// Accepted identifier range.
    config: IndexConfig,
    /// Root of the node graph.
    root: Link,
    /// Number of indexed satellites.
    len: usize,
    /// Work counters.
    stats: IndexStats,
}

impl SatNet {
    /// Creates an empty index accepting `[MIN_ID, MAX_ID]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Returns the number of indexed satellites.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree, `-1` when empty.
    pub fn height(&self) -> i32 {
        height(self.root())
    }

    /// Returns the root node, for inspection.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns the work counters.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Inserts a satellite.
    ///
    /// Does nothing if the identifier is outside the configured range or
    /// already indexed.
    pub fn insert(&mut self, satellite: Satellite) {
        if let Err(err) = self.try_insert(satellite) {
            debug!(id = %satellite.id(), %err, "insert ignored");
        }
    }

    /// Inserts a satellite, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfRange` or `DuplicateId`; the index is unchanged in
    /// both cases.
    pub fn try_insert(&mut self, satellite: Satellite) -> SatNetResult<()> {
        let id = satellite.id();
        if !self.config.accepts(id) {
            self.stats.record_rejection();
            return Err(SatNetError::IdOutOfRange {
                id,
                min: self.config.min_id,
                max: self.config.max_id,
            });
        }
        if !insert_at(&mut self.root, satellite, &self.stats) {
            self.stats.record_rejection();
            return Err(SatNetError::DuplicateId { id });
        }
        self.len += 1;
        self.stats.record_insert();
        Ok(())
    }

    /// Removes the satellite with `id`, returning its record.
    ///
    /// Returns `None` and leaves the index unchanged if `id` is absent.
    pub fn remove(&mut self, id: SatId) -> Option<Satellite> {
        let removed = remove_at(&mut self.root, id, &self.stats)?;
        self.len -= 1;
        self.stats.record_removal();
        debug!(%id, remaining = self.len, "satellite removed");
        Some(removed)
    }

    /// Removes the satellite with `id`, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not indexed.
    pub fn try_remove(&mut self, id: SatId) -> SatNetResult<Satellite> {
        self.remove(id).ok_or(SatNetError::NotFound { id })
    }

    /// Removes every deorbited satellite and returns how many were removed.
    ///
    /// Candidates are gathered children-first, then removed one at a time,
    /// so each removal restores the balance of the tree before the next one
    /// runs. A tree without deorbited satellites is left untouched.
    pub fn remove_deorbited(&mut self) -> usize {
        let mut doomed = Vec::new();
        traverse::for_each_post_order(self.root(), &mut |node: &Node| {
            if node.satellite().is_deorbited() {
                doomed.push(node.id());
            }
        });

        let removed = doomed
            .into_iter()
            .filter(|&id| self.remove(id).is_some())
            .count();
        if removed > 0 {
            debug!(removed, remaining = self.len, "deorbited satellites removed");
        }
        removed
    }

    /// Sets the state of the satellite with `id`.
    ///
    /// Returns false, changing nothing, if `id` is absent.
    pub fn set_state(&mut self, id: SatId, state: SatState) -> bool {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            self.stats.record_visit();
            match id.cmp(&node.id()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => {
                    node.satellite.set_state(state);
                    return true;
                }
            }
        }
        false
    }

    /// Removes every satellite.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            // Box drop frees children before their parent.
            drop(root);
            debug!(removed = self.len, "index cleared");
        }
        self.len = 0;
    }

    /// Replaces the contents of this index with a deep copy of `other`.
    ///
    /// The current nodes are released first. The copy shares no nodes with
    /// `other`; identifiers, payload, state and cached heights are
    /// duplicated exactly, along with the configuration.
    pub fn assign(&mut self, other: &SatNet) -> &mut Self {
        self.clear();
        self.config = other.config.clone();
        self.root = other.root.clone();
        self.len = other.len;
        debug!(copied = self.len, "index assigned");
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if a satellite with `id` is indexed.
    pub fn find_satellite(&self, id: SatId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the record of the satellite with `id`.
    pub fn get(&self, id: SatId) -> Option<&Satellite> {
        let mut current = self.root();
        while let Some(node) = current {
            self.stats.record_visit();
            current = match id.cmp(&node.id()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.satellite()),
            };
        }
        None
    }

    /// Counts the satellites with the given inclination.
    pub fn count_satellites(&self, inclination: Inclination) -> usize {
        self.iter()
            .filter(|sat| sat.inclination() == inclination)
            .count()
    }

    /// Returns an in-order iterator over the indexed records.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root(), self.len)
    }

    /// Returns one line per satellite in ascending identifier order, formatted
    /// as `id: state: inclination: altitude`.
    pub fn list_satellites(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// Renders the tree as `(left id:height right)` for every node, in order.
    ///
    /// An empty tree renders as the empty string.
    pub fn dump(&self) -> String {
        traverse::dump(self.root())
    }

    /// Checks every structural invariant of the index.
    ///
    /// # Errors
    ///
    /// Returns `TreeStructure` naming the first violation, including a node
    /// count that disagrees with [`SatNet::len`].
    pub fn verify(&self) -> SatNetResult<Verified> {
        let summary = verify::verify(self.root(), &self.config)?;
        if summary.nodes != self.len {
            return Err(SatNetError::structure(format!(
                "index holds {} nodes but reports {}",
                summary.nodes, self.len
            )));
        }
        Ok(summary)
    }
}

impl PartialEq for SatNet {
    /// Two indexes are equal when their trees have the same shape and every
    /// node holds the same record and height.
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for SatNet {}

impl<'a> IntoIterator for &'a SatNet {
    type Item = &'a Satellite;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Satellite> for SatNet {
    fn extend<I: IntoIterator<Item = Satellite>>(&mut self, iter: I) {
        for satellite in iter {
            self.insert(satellite);
        }
    }
}

impl FromIterator<Satellite> for SatNet {
    fn from_iter<I: IntoIterator<Item = Satellite>>(iter: I) -> Self {
        let mut net = Self::new();
        net.extend(iter);
        net
    }
}

// =============================================================================
// Recursive helpers
// =============================================================================

/// Refreshes the height of the node in `slot` and rebalances it in place.
fn restore(slot: &mut Link, stats: &IndexStats) {
    if let Some(mut node) = slot.take() {
        node.update_height();
        let (node, rotation) = balance::rebalance(node);
        if rotation.is_rotation() {
            trace!(pivot = %node.id(), %rotation, "rebalanced");
            stats.record_rotation(rotation);
        }
        *slot = Some(node);
    }
}

/// Inserts below `slot`. Returns false if the identifier already exists.
fn insert_at(slot: &mut Link, satellite: Satellite, stats: &IndexStats) -> bool {
    let Some(node) = slot.as_mut() else {
        *slot = Some(Box::new(Node::leaf(satellite)));
        return true;
    };
    stats.record_visit();

    let inserted = match satellite.id().cmp(&node.id()) {
        Ordering::Less => insert_at(&mut node.left, satellite, stats),
        Ordering::Greater => insert_at(&mut node.right, satellite, stats),
        Ordering::Equal => false,
    };
    if inserted {
        restore(slot, stats);
    }
    inserted
}

/// Removes `id` from below `slot`, returning the removed record.
fn remove_at(slot: &mut Link, id: SatId, stats: &IndexStats) -> Option<Satellite> {
    let node = slot.as_mut()?;
    stats.record_visit();

    let removed = match id.cmp(&node.id()) {
        Ordering::Less => remove_at(&mut node.left, id, stats),
        Ordering::Greater => remove_at(&mut node.right, id, stats),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // The in-order successor has no left child, so removing it
            // below is always the zero- or one-child case.
            let successor = *leftmost(node.right.as_deref()?).satellite();
            remove_at(&mut node.right, successor.id(), stats);
            Some(std::mem::replace(&mut node.satellite, successor))
        }
        Ordering::Equal => {
            let mut target = slot.take()?;
            *slot = target.left.take().or_else(|| target.right.take());
            Some(target.satellite)
        }
    };
    if removed.is_some() {
        restore(slot, stats);
    }
    removed
}
