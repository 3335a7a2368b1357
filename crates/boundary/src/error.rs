//! Error types for the boundary crate.

use thiserror::Error;

/// Result type alias for boundary document operations.
pub type Result<T> = std::result::Result<T, BoundaryError>;

/// Errors that can occur importing or exporting boundary documents.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The document is not valid GeoJSON or lacks a recognized
    /// top-level type
    #[error("Malformed boundary document: {0}")]
    MalformedDocument(String),

    /// A coordinate in the document is out of range or incomplete
    #[error("Invalid coordinate in document: {0}")]
    InvalidCoordinate(#[from] basinview_geo::GeoError),

    /// Export requested with nothing drawn
    #[error("No drawn shapes to export")]
    EmptyCollection,

    /// Serialization failure while writing a document
    #[error("Document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem failure reading or writing a document
    #[error("Document I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code for integration with host error handling.
/// Range: 12xxx for boundary errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryErrorCode {
    /// Malformed document
    MalformedDocument = 12001,
    /// Invalid coordinate
    InvalidCoordinate = 12002,
    /// Nothing to export
    EmptyCollection = 12003,
    /// Serialization failure
    Serialize = 12004,
    /// I/O failure
    Io = 12005,
}

impl BoundaryError {
    /// Returns the error code for this error.
    pub fn code(&self) -> BoundaryErrorCode {
        match self {
            BoundaryError::MalformedDocument(_) => BoundaryErrorCode::MalformedDocument,
            BoundaryError::InvalidCoordinate(_) => BoundaryErrorCode::InvalidCoordinate,
            BoundaryError::EmptyCollection => BoundaryErrorCode::EmptyCollection,
            BoundaryError::Serialize(_) => BoundaryErrorCode::Serialize,
            BoundaryError::Io(_) => BoundaryErrorCode::Io,
        }
    }
}
