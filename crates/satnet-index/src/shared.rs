//! Thread-safe handle to a `SatNet`.
//!
//! Rotations rewrite several child links at once, so the whole index sits
//! behind one lock: queries take it shared, mutations take it exclusively,
//! and every operation holds it for its full duration.

use std::sync::Arc;

use parking_lot::RwLock;

use satnet_common::config::IndexConfig;
use satnet_common::error::SatNetResult;
use satnet_common::types::{Inclination, SatId, SatState, Satellite};

use crate::avl::SatNet;

/// A cloneable, lock-protected `SatNet`.
///
/// Clones share the same index.
///
/// # Example
///
/// ```
/// use satnet_common::types::{SatId, Satellite};
/// use satnet_index::SharedSatNet;
///
/// let shared = SharedSatNet::new();
/// let handle = shared.clone();
/// handle.insert(Satellite::with_id(SatId::new(10000)));
/// assert!(shared.find_satellite(SatId::new(10000)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedSatNet {
    inner: Arc<RwLock<SatNet>>,
}

impl SharedSatNet {
    /// Creates an empty shared index with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shared index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self::from(SatNet::with_config(config))
    }

    /// Runs `f` with shared access to the index.
    pub fn read<R>(&self, f: impl FnOnce(&SatNet) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Runs `f` with exclusive access to the index.
    pub fn write<R>(&self, f: impl FnOnce(&mut SatNet) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// See [`SatNet::insert`].
    pub fn insert(&self, satellite: Satellite) {
        self.inner.write().insert(satellite);
    }

    /// See [`SatNet::try_insert`].
    pub fn try_insert(&self, satellite: Satellite) -> SatNetResult<()> {
        self.inner.write().try_insert(satellite)
    }

    /// See [`SatNet::remove`].
    pub fn remove(&self, id: SatId) -> Option<Satellite> {
        self.inner.write().remove(id)
    }

    /// See [`SatNet::remove_deorbited`].
    pub fn remove_deorbited(&self) -> usize {
        self.inner.write().remove_deorbited()
    }

    /// See [`SatNet::set_state`].
    pub fn set_state(&self, id: SatId, state: SatState) -> bool {
        self.inner.write().set_state(id, state)
    }

    /// See [`SatNet::clear`].
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// See [`SatNet::find_satellite`].
    pub fn find_satellite(&self, id: SatId) -> bool {
        self.inner.read().find_satellite(id)
    }

    /// Returns a copy of the record with `id`.
    pub fn get(&self, id: SatId) -> Option<Satellite> {
        self.inner.read().get(id).copied()
    }

    /// See [`SatNet::count_satellites`].
    pub fn count_satellites(&self, inclination: Inclination) -> usize {
        self.inner.read().count_satellites(inclination)
    }

    /// See [`SatNet::len`].
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// See [`SatNet::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// See [`SatNet::dump`].
    pub fn dump(&self) -> String {
        self.inner.read().dump()
    }

    /// See [`SatNet::list_satellites`].
    pub fn list_satellites(&self) -> Vec<String> {
        self.inner.read().list_satellites()
    }

    /// Returns an independent deep copy of the current index.
    pub fn snapshot(&self) -> SatNet {
        self.inner.read().clone()
    }
}

impl From<SatNet> for SharedSatNet {
    fn from(net: SatNet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(net)),
        }
    }
}
