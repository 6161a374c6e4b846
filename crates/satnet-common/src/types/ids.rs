//! Satellite identifier type.
//!
//! Identifiers are the only field the index compares on. Wrapping them in a
//! newtype keeps them from being confused with counts or heights.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_ID, MIN_ID};

/// Satellite identifier - the ordering key of the index.
///
/// # Example
///
/// ```rust
/// use satnet_common::types::SatId;
///
/// let id = SatId::new(10001);
/// assert_eq!(id.as_u32(), 10001);
/// assert!(id.is_in_default_range());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SatId(u32);

impl SatId {
    /// Lowest identifier of the default range.
    pub const MIN: Self = Self(MIN_ID);

    /// Highest identifier of the default range.
    pub const MAX: Self = Self(MAX_ID);

    /// Creates a new `SatId` from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns true if the identifier lies in `[min, max]`.
    #[inline]
    #[must_use]
    pub const fn is_within(self, min: u32, max: u32) -> bool {
        self.0 >= min && self.0 <= max
    }

    /// Returns true if the identifier lies in `[MIN_ID, MAX_ID]`.
    #[inline]
    #[must_use]
    pub const fn is_in_default_range(self) -> bool {
        self.is_within(MIN_ID, MAX_ID)
    }
}

impl fmt::Debug for SatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SatId({})", self.0)
    }
}

impl fmt::Display for SatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SatId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<SatId> for u32 {
    fn from(id: SatId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sat_id_basics() {
        let id = SatId::new(12345);
        assert_eq!(id.as_u32(), 12345);
        assert_eq!(format!("{id}"), "12345");
        assert_eq!(format!("{id:?}"), "SatId(12345)");
    }

    #[test]
    fn test_sat_id_ordering() {
        assert!(SatId::new(10000) < SatId::new(10001));
        assert_eq!(SatId::from(5u32), SatId::new(5));
        assert_eq!(u32::from(SatId::new(7)), 7);
    }

    #[test]
    fn test_range_checks() {
        assert!(SatId::MIN.is_in_default_range());
        assert!(SatId::MAX.is_in_default_range());
        assert!(!SatId::new(MIN_ID - 1).is_in_default_range());
        assert!(!SatId::new(MAX_ID + 1).is_in_default_range());
        assert!(SatId::new(5).is_within(1, 10));
        assert!(!SatId::new(11).is_within(1, 10));
    }
}
