//! Index statistics for monitoring and debugging.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::avl::Rotation;

/// Counters describing the work an index has done.
///
/// Node visits are recorded by read paths too, so the counters use relaxed
/// atomics and can be bumped through `&self`.
#[derive(Debug, Default)]
pub struct IndexStats {
    /// Successful inserts.
    inserts: AtomicU64,
    /// Inserts rejected for range or duplicate id.
    rejected_inserts: AtomicU64,
    /// Successful removals.
    removals: AtomicU64,
    /// Single rotations applied by rebalancing.
    single_rotations: AtomicU64,
    /// Double rotations applied by rebalancing.
    double_rotations: AtomicU64,
    /// Nodes compared against during searches and descents.
    node_visits: AtomicU64,
}

impl IndexStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful insert.
    #[inline]
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a rejected insert.
    #[inline]
    pub fn record_rejection(&self) {
        self.rejected_inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a removal.
    #[inline]
    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the outcome of a rebalance step.
    #[inline]
    pub fn record_rotation(&self, rotation: Rotation) {
        if rotation.is_double() {
            self.double_rotations.fetch_add(1, Ordering::Relaxed);
        } else if rotation.is_rotation() {
            self.single_rotations.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a node visited during a descent.
    #[inline]
    pub fn record_visit(&self) {
        self.node_visits.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns successful inserts.
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Returns rejected inserts.
    pub fn rejected_inserts(&self) -> u64 {
        self.rejected_inserts.load(Ordering::Relaxed)
    }

    /// Returns removals.
    pub fn removals(&self) -> u64 {
        self.removals.load(Ordering::Relaxed)
    }

    /// Returns single rotations.
    pub fn single_rotations(&self) -> u64 {
        self.single_rotations.load(Ordering::Relaxed)
    }

    /// Returns double rotations.
    pub fn double_rotations(&self) -> u64 {
        self.double_rotations.load(Ordering::Relaxed)
    }

    /// Returns all rotations, counting a double rotation once.
    pub fn rotations(&self) -> u64 {
        self.single_rotations() + self.double_rotations()
    }

    /// Returns node visits.
    pub fn node_visits(&self) -> u64 {
        self.node_visits.load(Ordering::Relaxed)
    }

    /// Resets all statistics.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.rejected_inserts.store(0, Ordering::Relaxed);
        self.removals.store(0, Ordering::Relaxed);
        self.single_rotations.store(0, Ordering::Relaxed);
        self.double_rotations.store(0, Ordering::Relaxed);
        self.node_visits.store(0, Ordering::Relaxed);
    }
}

impl Clone for IndexStats {
    fn clone(&self) -> Self {
        Self {
            inserts: AtomicU64::new(self.inserts()),
            rejected_inserts: AtomicU64::new(self.rejected_inserts()),
            removals: AtomicU64::new(self.removals()),
            single_rotations: AtomicU64::new(self.single_rotations()),
            double_rotations: AtomicU64::new(self.double_rotations()),
            node_visits: AtomicU64::new(self.node_visits()),
        }
    }
}

impl std::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IndexStats {{ inserts: {}, rejected: {}, removals: {}, rotations: {} ({} double), visits: {} }}",
            self.inserts(),
            self.rejected_inserts(),
            self.removals(),
            self.rotations(),
            self.double_rotations(),
            self.node_visits()
        )
    }
}
