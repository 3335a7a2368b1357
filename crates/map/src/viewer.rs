//! Viewer orchestration: home view, go-to, dataset arrival, device
//! location and the composite clear-all.
//!
//! All methods run synchronously on the host's event thread. Async
//! sources (dataset fetch, geolocation) are wired by the host calling
//! the matching `on_*`/`handle_*` method from their completion callback.

use crate::locate::{LocateError, LocationFix};
use crate::markers::TransientMarkers;
use crate::selection::SelectionGroup;
use crate::style::LayerStyle;
use crate::view::{Bounds, FeatureId, MapView, VectorLayer};
use basinview_geo::{measure_geometry, Coordinate, Feature, Measurement};
use tracing::{debug, warn};

/// Zoom applied after a go-to jump.
const GOTO_ZOOM: u8 = 15;
/// Zoom fallback when a location fix's bounds cannot be fitted.
const LOCATION_FALLBACK_ZOOM: u8 = 15;
/// Pixel padding when fitting dataset bounds.
const FIT_PADDING_PX: u32 = 20;
/// Pixel padding when fitting a location fix.
const LOCATION_FIT_PADDING_PX: u32 = 30;

/// Meters per degree of latitude, for sizing an accuracy circle's box.
const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Single-viewer state over the external map widget.
pub struct MapViewer {
    home_center: Coordinate,
    home_zoom: u8,
    boundary_selection: SelectionGroup,
    uploaded_selection: SelectionGroup,
    markers: TransientMarkers,
    drawn: Vec<Feature>,
    boundary_bounds: Option<Bounds>,
    uploaded_bounds: Option<Bounds>,
}

impl MapViewer {
    /// Default initial view over the watershed region.
    pub const DEFAULT_CENTER: Coordinate = Coordinate {
        latitude: 23.7,
        longitude: 121.0,
    };
    /// Default initial zoom.
    pub const DEFAULT_ZOOM: u8 = 7;

    /// Creates a viewer with the default home view.
    pub fn new() -> Self {
        Self::with_home(Self::DEFAULT_CENTER, Self::DEFAULT_ZOOM)
    }

    /// Creates a viewer homed at a custom center and zoom.
    pub fn with_home(center: Coordinate, zoom: u8) -> Self {
        Self {
            home_center: center,
            home_zoom: zoom,
            boundary_selection: SelectionGroup::new(
                LayerStyle::WATERSHED,
                LayerStyle::WATERSHED_HIGHLIGHT,
            ),
            uploaded_selection: SelectionGroup::new(
                LayerStyle::UPLOADED,
                LayerStyle::UPLOADED_HIGHLIGHT,
            ),
            markers: TransientMarkers::new(),
            drawn: Vec::new(),
            boundary_bounds: None,
            uploaded_bounds: None,
        }
    }

    /// Highlights a clicked watershed feature.
    pub fn select_boundary_feature(&mut self, layer: &mut dyn VectorLayer, feature: FeatureId) {
        self.boundary_selection.select(layer, feature);
    }

    /// Highlights a clicked uploaded feature.
    pub fn select_uploaded_feature(&mut self, layer: &mut dyn VectorLayer, feature: FeatureId) {
        self.uploaded_selection.select(layer, feature);
    }

    /// Currently highlighted watershed feature.
    pub fn boundary_selected(&self) -> Option<FeatureId> {
        self.boundary_selection.selected()
    }

    /// Currently highlighted uploaded feature.
    pub fn uploaded_selected(&self) -> Option<FeatureId> {
        self.uploaded_selection.selected()
    }

    /// Records the watershed dataset once its fetch completes and fits
    /// the view to it.
    pub fn on_boundary_loaded(&mut self, view: &mut dyn MapView, features: &[Feature]) {
        debug!(count = features.len(), "watershed dataset loaded");
        self.boundary_bounds = bounds_of(features);
        if let Some(bounds) = self.boundary_bounds {
            view.fit_bounds(&bounds, FIT_PADDING_PX);
        }
    }

    /// Logs a failed watershed fetch. The viewer stays usable without
    /// that overlay.
    pub fn on_boundary_failed(&mut self, message: &str) {
        warn!(message, "watershed dataset unavailable");
    }

    /// Replaces the uploaded dataset: drops any stale selection on the
    /// outgoing layer and fits the view to the new features.
    pub fn replace_uploaded(
        &mut self,
        view: &mut dyn MapView,
        previous_layer: Option<&mut dyn VectorLayer>,
        features: &[Feature],
    ) {
        self.detach_uploaded(previous_layer);
        self.uploaded_bounds = bounds_of(features);
        debug!(count = features.len(), "uploaded dataset replaced");
        if let Some(bounds) = self.uploaded_bounds {
            view.fit_bounds(&bounds, FIT_PADDING_PX);
        }
    }

    /// Removes the uploaded dataset entirely.
    pub fn remove_uploaded(&mut self, previous_layer: Option<&mut dyn VectorLayer>) {
        self.detach_uploaded(previous_layer);
        self.uploaded_bounds = None;
    }

    fn detach_uploaded(&mut self, layer: Option<&mut dyn VectorLayer>) {
        match layer {
            Some(layer) => self.uploaded_selection.clear(layer),
            None => self.uploaded_selection.reset(),
        }
    }

    /// Jumps to a parsed coordinate: places the go-to marker and zooms
    /// in on it.
    pub fn goto(&mut self, view: &mut dyn MapView, at: Coordinate) {
        self.markers.place_goto(view, at);
        view.set_view(at, GOTO_ZOOM);
    }

    /// Removes the go-to marker (the input box's Clear button).
    pub fn clear_goto(&mut self, view: &mut dyn MapView) {
        self.markers.remove_goto(view);
    }

    /// Applies a geolocation outcome. A fix replaces the previous
    /// location marker and accuracy circle and brings them into view;
    /// a failure is logged and returned for user notification.
    pub fn handle_location(
        &mut self,
        view: &mut dyn MapView,
        outcome: std::result::Result<LocationFix, LocateError>,
    ) -> crate::Result<()> {
        let fix = outcome.inspect_err(|error| {
            warn!(%error, "location request failed");
        })?;

        self.markers.place_location(view, &fix);
        let bounds = accuracy_bounds(&fix);
        if !view.fit_bounds(&bounds, LOCATION_FIT_PADDING_PX) {
            view.set_view(fix.coordinate, LOCATION_FALLBACK_ZOOM);
        }
        Ok(())
    }

    /// Stores a drawn shape and returns its measurement for the popup.
    pub fn add_drawn(&mut self, feature: Feature) -> Measurement {
        let measurement = measure_geometry(&feature.geometry);
        self.drawn.push(feature);
        measurement
    }

    /// All currently drawn shapes, in draw order.
    pub fn drawn(&self) -> &[Feature] {
        &self.drawn
    }

    /// Fits the watershed layer when loaded, else returns to the
    /// initial center and zoom.
    pub fn go_home(&mut self, view: &mut dyn MapView) {
        match self.boundary_bounds {
            Some(bounds) => {
                view.fit_bounds(&bounds, FIT_PADDING_PX);
            }
            None => view.set_view(self.home_center, self.home_zoom),
        }
    }

    /// Composite clear: both selections, transient markers, open popup
    /// and drawn shapes. Every sub-clear runs even when its collaborator
    /// is absent or already empty.
    pub fn clear_all(
        &mut self,
        view: &mut dyn MapView,
        boundary_layer: Option<&mut dyn VectorLayer>,
        uploaded_layer: Option<&mut dyn VectorLayer>,
    ) {
        match boundary_layer {
            Some(layer) => self.boundary_selection.clear(layer),
            None => self.boundary_selection.reset(),
        }
        match uploaded_layer {
            Some(layer) => self.uploaded_selection.clear(layer),
            None => self.uploaded_selection.reset(),
        }
        self.markers.remove_all(view);
        view.close_popup();
        self.drawn.clear();
    }
}

impl Default for MapViewer {
    fn default() -> Self {
        Self::new()
    }
}

/// Union of per-feature bounds; `None` when no feature has coordinates.
fn bounds_of(features: &[Feature]) -> Option<Bounds> {
    Bounds::from_coordinates(
        features
            .iter()
            .flat_map(|feature| feature.geometry.coordinates()),
    )
}

/// Bounding box of a fix's accuracy circle.
fn accuracy_bounds(fix: &LocationFix) -> Bounds {
    let d_lat = fix.accuracy_m / METERS_PER_DEGREE_LAT;
    let lat_rad = fix.coordinate.latitude.to_radians();
    let d_lon = fix.accuracy_m / (METERS_PER_DEGREE_LAT * lat_rad.cos().max(1e-9));
    Bounds {
        min_lat: fix.coordinate.latitude - d_lat,
        min_lon: fix.coordinate.longitude - d_lon,
        max_lat: fix.coordinate.latitude + d_lat,
        max_lon: fix.coordinate.longitude + d_lon,
    }
}
