//! Error types for the map crate.

use crate::locate::LocateError;
use thiserror::Error;

/// Result type alias for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors surfaced by viewer operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Device location request failed
    #[error(transparent)]
    Locate(#[from] LocateError),
}

/// Error code for integration with host error handling.
/// Range: 11xxx for map errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapErrorCode {
    /// Geolocation is not available on this device
    GeolocationUnavailable = 11001,
    /// The user denied the location request
    GeolocationDenied = 11002,
    /// The location request timed out
    GeolocationTimeout = 11003,
}

impl MapError {
    /// Returns the error code for this error.
    pub fn code(&self) -> MapErrorCode {
        match self {
            MapError::Locate(LocateError::Unavailable) => MapErrorCode::GeolocationUnavailable,
            MapError::Locate(LocateError::Denied(_)) => MapErrorCode::GeolocationDenied,
            MapError::Locate(LocateError::Timeout) => MapErrorCode::GeolocationTimeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error = MapError::from(LocateError::Timeout);
        assert_eq!(error.code(), MapErrorCode::GeolocationTimeout);
        assert_eq!(
            MapError::from(LocateError::Unavailable).code(),
            MapErrorCode::GeolocationUnavailable
        );
    }
}
