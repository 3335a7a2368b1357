//! Collaborator traits for the external map widget, and the bounds
//! helper used to fit geometry into view.

use crate::style::LayerStyle;
use basinview_geo::Coordinate;
use serde::Serialize;

/// Handle to a feature rendered on a vector layer.
pub type FeatureId = u64;

/// Handle to a transient overlay (marker, circle) on the map.
pub type OverlayId = u64;

/// A vector layer rendered by the map widget. Features on it can be
/// restyled individually.
pub trait VectorLayer {
    /// Applies a display style to one feature.
    fn set_style(&mut self, feature: FeatureId, style: &LayerStyle);

    /// Raises a feature above its neighbors. Optional; layers that
    /// cannot reorder ignore it.
    fn bring_to_front(&mut self, _feature: FeatureId) {}
}

/// The map view: panning, zooming, transient overlays and popups.
pub trait MapView {
    /// Centers the view at a coordinate and zoom level.
    fn set_view(&mut self, center: Coordinate, zoom: u8);

    /// Fits the view to a bounding box with pixel padding. Returns
    /// false when the widget cannot fit these bounds; the caller falls
    /// back to [`MapView::set_view`].
    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32) -> bool;

    /// Adds a marker with popup text, returning its handle.
    fn add_marker(&mut self, at: Coordinate, popup: &str) -> OverlayId;

    /// Adds a circle overlay, returning its handle.
    fn add_circle(&mut self, center: Coordinate, radius_m: f64) -> OverlayId;

    /// Removes a transient overlay. Ignores unknown handles.
    fn remove_overlay(&mut self, overlay: OverlayId);

    /// Opens the popup bound to an overlay.
    fn open_popup(&mut self, overlay: OverlayId);

    /// Closes whatever popup is currently open, if any.
    fn close_popup(&mut self);
}

/// A latitude/longitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Southernmost latitude
    pub min_lat: f64,
    /// Westernmost longitude
    pub min_lon: f64,
    /// Northernmost latitude
    pub max_lat: f64,
    /// Easternmost longitude
    pub max_lon: f64,
}

impl Bounds {
    /// Accumulates bounds from coordinates; `None` when the iterator is
    /// empty.
    pub fn from_coordinates<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_lat: first.latitude,
            min_lon: first.longitude,
            max_lat: first.latitude,
            max_lon: first.longitude,
        };
        for coord in iter {
            bounds.extend(coord);
        }
        Some(bounds)
    }

    /// Grows the box to include a coordinate.
    pub fn extend(&mut self, coord: &Coordinate) {
        self.min_lat = self.min_lat.min(coord.latitude);
        self.min_lon = self.min_lon.min(coord.longitude);
        self.max_lat = self.max_lat.max(coord.latitude);
        self.max_lon = self.max_lon.max(coord.longitude);
    }

    /// Merges another box into this one.
    pub fn merge(&mut self, other: &Bounds) {
        self.min_lat = self.min_lat.min(other.min_lat);
        self.min_lon = self.min_lon.min(other.min_lon);
        self.max_lat = self.max_lat.max(other.max_lat);
        self.max_lon = self.max_lon.max(other.max_lon);
    }

    /// Center of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: (self.min_lat + self.max_lat) / 2.0,
            longitude: (self.min_lon + self.max_lon) / 2.0,
        }
    }
}

/// Formats the live mouse position readout; `None` when the cursor has
/// left the map.
pub fn format_mouse_position(position: Option<Coordinate>) -> String {
    match position {
        Some(coord) => format!(
            "Lat: {:.6} , Lon: {:.6}",
            coord.latitude, coord.longitude
        ),
        None => "Lat: -- , Lon: --".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_bounds_accumulation() {
        let points = [coord(23.0, 120.5), coord(24.0, 121.5), coord(23.5, 120.0)];
        let bounds = Bounds::from_coordinates(points.iter()).unwrap();
        assert_eq!(bounds.min_lat, 23.0);
        assert_eq!(bounds.max_lat, 24.0);
        assert_eq!(bounds.min_lon, 120.0);
        assert_eq!(bounds.max_lon, 121.5);

        let center = bounds.center();
        assert!((center.latitude - 23.5).abs() < 1e-9);
        assert!((center.longitude - 120.75).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_empty() {
        let empty: [Coordinate; 0] = [];
        assert_eq!(Bounds::from_coordinates(empty.iter()), None);
    }

    #[test]
    fn test_bounds_merge() {
        let mut a = Bounds::from_coordinates([coord(23.0, 120.0)].iter()).unwrap();
        let b = Bounds::from_coordinates([coord(24.0, 121.0)].iter()).unwrap();
        a.merge(&b);
        assert_eq!(a.max_lat, 24.0);
        assert_eq!(a.max_lon, 121.0);
    }

    #[test]
    fn test_mouse_position_readout() {
        assert_eq!(
            format_mouse_position(Some(coord(23.7, 121.0))),
            "Lat: 23.700000 , Lon: 121.000000"
        );
        assert_eq!(format_mouse_position(None), "Lat: -- , Lon: --");
    }
}
