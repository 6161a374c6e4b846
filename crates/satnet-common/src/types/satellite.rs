//! The satellite record stored by the index.
//!
//! Only the identifier takes part in ordering. Altitude, inclination and
//! state are payload the index carries around without interpreting, apart
//! from the state filter used by bulk removal and the inclination filter
//! used for counting.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SatId;

/// Orbital altitude band in miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Altitude {
    /// 208 miles.
    #[default]
    Mi208,
    /// 215 miles.
    Mi215,
    /// 340 miles.
    Mi340,
    /// 350 miles.
    Mi350,
}

impl Altitude {
    /// All altitude bands, in declaration order.
    pub const ALL: [Self; 4] = [Self::Mi208, Self::Mi215, Self::Mi340, Self::Mi350];

    /// Returns the band at `index` in declaration order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mi208 => "MI208",
            Self::Mi215 => "MI215",
            Self::Mi340 => "MI340",
            Self::Mi350 => "MI350",
        }
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orbital inclination in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Inclination {
    /// 48 degrees.
    #[default]
    I48,
    /// 53 degrees.
    I53,
    /// 70 degrees.
    I70,
    /// 97 degrees.
    I97,
}

impl Inclination {
    /// All inclinations, in declaration order.
    pub const ALL: [Self; 4] = [Self::I48, Self::I53, Self::I70, Self::I97];

    /// Returns the inclination at `index` in declaration order.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I48 => "I48",
            Self::I53 => "I53",
            Self::I70 => "I70",
            Self::I97 => "I97",
        }
    }
}

impl fmt::Display for Inclination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SatState {
    /// In service.
    #[default]
    Active,
    /// Taken out of orbit; eligible for bulk removal.
    Deorbited,
    /// Orbit is decaying.
    Decaying,
}

impl SatState {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Deorbited => "Deorbited",
            Self::Decaying => "Decaying",
        }
    }
}

impl fmt::Display for SatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A satellite record.
///
/// Records are small and `Copy`; the index takes them by value and hands
/// copies back out.
///
/// # Example
///
/// ```rust
/// use satnet_common::types::{Altitude, Inclination, SatId, SatState, Satellite};
///
/// let sat = Satellite::with_id(SatId::new(10000)).with_state(SatState::Deorbited);
/// assert_eq!(sat.altitude(), Altitude::Mi208);
/// assert_eq!(sat.inclination(), Inclination::I48);
/// assert_eq!(sat.to_string(), "10000: Deorbited: I48: MI208");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Satellite {
    id: SatId,
    altitude: Altitude,
    inclination: Inclination,
    #[serde(default)]
    state: SatState,
}

impl Satellite {
    /// Creates an active satellite.
    #[must_use]
    pub const fn new(id: SatId, altitude: Altitude, inclination: Inclination) -> Self {
        Self {
            id,
            altitude,
            inclination,
            state: SatState::Active,
        }
    }

    /// Creates an active satellite with default payload.
    #[must_use]
    pub const fn with_id(id: SatId) -> Self {
        Self::new(id, Altitude::Mi208, Inclination::I48)
    }

    /// Returns a copy with the given state.
    #[must_use]
    pub const fn with_state(mut self, state: SatState) -> Self {
        self.state = state;
        self
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> SatId {
        self.id
    }

    /// Returns the altitude band.
    #[inline]
    #[must_use]
    pub const fn altitude(&self) -> Altitude {
        self.altitude
    }

    /// Returns the inclination.
    #[inline]
    #[must_use]
    pub const fn inclination(&self) -> Inclination {
        self.inclination
    }

    /// Returns the lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SatState {
        self.state
    }

    /// Replaces the identifier.
    ///
    /// Changing the identifier of a record that is already indexed is not
    /// possible through the index API; this is for building records.
    pub fn set_id(&mut self, id: SatId) {
        self.id = id;
    }

    /// Replaces the altitude band.
    pub fn set_altitude(&mut self, altitude: Altitude) {
        self.altitude = altitude;
    }

    /// Replaces the inclination.
    pub fn set_inclination(&mut self, inclination: Inclination) {
        self.inclination = inclination;
    }

    /// Replaces the lifecycle state.
    pub fn set_state(&mut self, state: SatState) {
        self.state = state;
    }

    /// Returns true if the satellite has been deorbited.
    #[inline]
    #[must_use]
    pub fn is_deorbited(&self) -> bool {
        self.state == SatState::Deorbited
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}: {}",
            self.id, self.state, self.inclination, self.altitude
        )
    }
}
