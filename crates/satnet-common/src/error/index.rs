//! Index error types.

use thiserror::Error;

use crate::types::SatId;

/// Error codes for categorizing errors.
///
/// These codes are stable across versions and can be used for
/// programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // General errors (0x0000 - 0x00FF)
    /// Invalid argument provided.
    InvalidArgument = 0x0003,

    // I/O errors (0x0100 - 0x01FF)
    /// General I/O error.
    Io = 0x0100,

    // Index errors (0x0200 - 0x02FF)
    /// Identifier lies outside the configured range.
    IdOutOfRange = 0x0200,
    /// Identifier already indexed.
    DuplicateId = 0x0201,
    /// Identifier not indexed.
    NotFound = 0x0202,
    /// An index invariant does not hold.
    TreeStructure = 0x0203,

    // Configuration errors (0x0300 - 0x03FF)
    /// Configuration failed validation.
    InvalidConfig = 0x0300,
    /// Configuration could not be parsed.
    ConfigParse = 0x0301,
}

impl ErrorCode {
    /// Returns the numeric code.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self.as_u16() >> 8 {
            0x00 => "General",
            0x01 => "I/O",
            0x02 => "Index",
            0x03 => "Config",
            _ => "Unknown",
        }
    }
}

/// Errors produced by SatNet components.
#[derive(Debug, Error)]
pub enum SatNetError {
    /// Identifier lies outside `[min, max]`.
    #[error("satellite id {id} out of range [{min}, {max}]")]
    IdOutOfRange {
        /// Rejected identifier.
        id: SatId,
        /// Lower bound of the configured range.
        min: u32,
        /// Upper bound of the configured range.
        max: u32,
    },

    /// Identifier already present.
    #[error("satellite {id} already exists")]
    DuplicateId {
        /// Rejected identifier.
        id: SatId,
    },

    /// Identifier not present.
    #[error("satellite {id} not found")]
    NotFound {
        /// Missing identifier.
        id: SatId,
    },

    /// An invariant of the index was found broken.
    #[error("tree structure error: {message}")]
    TreeStructure {
        /// Which invariant failed, and where.
        message: String,
    },

    /// Configuration failed validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Reason for rejection.
        message: String,
    },

    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SatNetError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::IdOutOfRange { .. } => ErrorCode::IdOutOfRange,
            Self::DuplicateId { .. } => ErrorCode::DuplicateId,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::TreeStructure { .. } => ErrorCode::TreeStructure,
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            Self::ConfigParse(_) => ErrorCode::ConfigParse,
            Self::Io(_) => ErrorCode::Io,
        }
    }

    /// Returns true if the error rejected an insert.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::IdOutOfRange { .. } | Self::DuplicateId { .. })
    }

    /// Creates a tree structure error.
    #[must_use]
    pub fn structure(message: impl Into<String>) -> Self {
        Self::TreeStructure {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
