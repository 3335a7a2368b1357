//! Device geolocation results.
//!
//! The viewer never talks to location hardware; the host wires a device
//! provider's single completion or failure callback to
//! [`crate::MapViewer::handle_location`]. Exactly one of the two fires
//! per request, and a new request does not cancel an in-flight one.

use thiserror::Error;

use basinview_geo::Coordinate;

/// One delivered location fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    /// Position of the fix
    pub coordinate: Coordinate,
    /// Reported accuracy radius in meters
    pub accuracy_m: f64,
}

/// Failure modes of a device location request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    /// The platform has no geolocation capability
    #[error("Geolocation is not supported on this device")]
    Unavailable,

    /// The user or platform denied the request
    #[error("Location request denied: {0}")]
    Denied(String),

    /// No fix arrived before the request deadline
    #[error("Location request timed out")]
    Timeout,
}
