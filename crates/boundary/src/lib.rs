//! Boundary document import and export for the Basinview viewer.
//!
//! Documents are GeoJSON. Import is accept-or-reject: a document that is
//! not valid GeoJSON, lacks a recognized top-level type, or carries an
//! out-of-range coordinate is rejected whole; nothing is repaired or
//! clamped. Export writes drawn shapes as a pretty-printed feature
//! collection under a timestamped `drawn_*.geojson` filename.

mod error;
mod export;
mod import;

pub use error::{BoundaryError, BoundaryErrorCode, Result};
pub use export::{export_filename, to_document_string, write_document};
pub use import::{parse_document, read_document};
