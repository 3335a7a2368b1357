//! Map-side state for the Basinview watershed viewer.
//!
//! The map widget itself (tiles, DOM, rendering) lives outside this
//! workspace; this crate owns the state that widget wiring delegates to:
//!
//! - **Selection groups**: at most one highlighted feature per layer group
//! - **Layer styles**: base and highlight presets for each group
//! - **Transient markers**: the single go-to marker and location fix
//! - **Geolocation**: fix/error delivery from a device location provider
//! - **Viewer orchestration**: home view, go-to, composite clear-all
//!
//! The widget is reached through the [`MapView`] and [`VectorLayer`]
//! collaborator traits.

mod error;
mod locate;
mod markers;
mod selection;
mod style;
#[cfg(test)]
mod testing;
mod view;
mod viewer;

pub use error::{MapError, MapErrorCode, Result};
pub use locate::{LocateError, LocationFix};
pub use markers::TransientMarkers;
pub use selection::SelectionGroup;
pub use style::LayerStyle;
pub use view::{format_mouse_position, Bounds, FeatureId, MapView, OverlayId, VectorLayer};
pub use viewer::MapViewer;
