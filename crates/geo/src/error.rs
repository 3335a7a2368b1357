//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during coordinate parsing and validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeoError {
    /// Input was empty or whitespace-only
    #[error("Empty coordinate input")]
    EmptyInput,

    /// Input matched neither decimal nor DMS form
    #[error("Invalid coordinate format: {0}")]
    InvalidFormat(String),

    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),

    /// No token split of a space-separated pair produced a valid coordinate
    #[error("Ambiguous or invalid coordinate pair: {0}")]
    AmbiguousOrInvalid(String),
}

/// Error code for integration with host error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Empty input
    EmptyInput = 10001,
    /// Unrecognized coordinate format
    InvalidFormat = 10002,
    /// Coordinate out of range
    OutOfRange = 10003,
    /// Unresolvable coordinate pair
    AmbiguousOrInvalid = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::EmptyInput => GeoErrorCode::EmptyInput,
            GeoError::InvalidFormat(_) => GeoErrorCode::InvalidFormat,
            GeoError::OutOfRange(_) => GeoErrorCode::OutOfRange,
            GeoError::AmbiguousOrInvalid(_) => GeoErrorCode::AmbiguousOrInvalid,
        }
    }
}
