//! Transient marker bookkeeping.
//!
//! At most one go-to marker and one location fix (marker plus accuracy
//! circle) exist at a time; placing a new one replaces the previous.
//! Removals are no-ops when nothing is present.

use crate::locate::LocationFix;
use crate::view::{MapView, OverlayId};
use basinview_geo::Coordinate;

/// Handles for the viewer's transient overlays.
#[derive(Debug, Default)]
pub struct TransientMarkers {
    goto_marker: Option<OverlayId>,
    location_marker: Option<OverlayId>,
    location_circle: Option<OverlayId>,
}

impl TransientMarkers {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a go-to marker is on the map.
    pub fn has_goto(&self) -> bool {
        self.goto_marker.is_some()
    }

    /// True when a location fix is on the map.
    pub fn has_location(&self) -> bool {
        self.location_marker.is_some()
    }

    /// Places the go-to marker, replacing any previous one, and opens
    /// its popup.
    pub fn place_goto(&mut self, view: &mut dyn MapView, at: Coordinate) -> OverlayId {
        self.remove_goto(view);
        let popup = format!(
            "Go-to Location\nLat: {:.6}\nLon: {:.6}",
            at.latitude, at.longitude
        );
        let marker = view.add_marker(at, &popup);
        view.open_popup(marker);
        self.goto_marker = Some(marker);
        marker
    }

    /// Removes the go-to marker if present.
    pub fn remove_goto(&mut self, view: &mut dyn MapView) {
        if let Some(marker) = self.goto_marker.take() {
            view.remove_overlay(marker);
        }
    }

    /// Places the location marker and accuracy circle for a fix,
    /// replacing any previous pair, and opens the marker popup.
    pub fn place_location(&mut self, view: &mut dyn MapView, fix: &LocationFix) -> OverlayId {
        self.remove_location(view);
        let popup = format!(
            "My Location\nLat: {:.6}\nLon: {:.6}\nAccuracy: ~{} m",
            fix.coordinate.latitude,
            fix.coordinate.longitude,
            fix.accuracy_m.round() as i64
        );
        let marker = view.add_marker(fix.coordinate, &popup);
        let circle = view.add_circle(fix.coordinate, fix.accuracy_m);
        self.location_marker = Some(marker);
        self.location_circle = Some(circle);
        marker
    }

    /// Removes the location marker and circle if present.
    pub fn remove_location(&mut self, view: &mut dyn MapView) {
        if let Some(marker) = self.location_marker.take() {
            view.remove_overlay(marker);
        }
        if let Some(circle) = self.location_circle.take() {
            view.remove_overlay(circle);
        }
    }

    /// Removes every transient overlay.
    pub fn remove_all(&mut self, view: &mut dyn MapView) {
        self.remove_goto(view);
        self.remove_location(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingView;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_goto_replaces_previous() {
        let mut view = RecordingView::default();
        let mut markers = TransientMarkers::new();

        let first = markers.place_goto(&mut view, coord(23.7, 121.0));
        let second = markers.place_goto(&mut view, coord(24.0, 121.5));

        assert_ne!(first, second);
        assert_eq!(view.live, vec![second]);
        assert_eq!(view.popups_opened, vec![first, second]);
    }

    #[test]
    fn test_location_pair_replaced_together() {
        let mut view = RecordingView::default();
        let mut markers = TransientMarkers::new();
        let fix = LocationFix {
            coordinate: coord(23.7, 121.0),
            accuracy_m: 25.0,
        };

        markers.place_location(&mut view, &fix);
        assert_eq!(view.live.len(), 2);

        markers.place_location(&mut view, &fix);
        assert_eq!(view.live.len(), 2);

        markers.remove_location(&mut view);
        assert!(view.live.is_empty());
        assert!(!markers.has_location());
    }

    #[test]
    fn test_removals_are_noops_when_empty() {
        let mut view = RecordingView::default();
        let mut markers = TransientMarkers::new();

        markers.remove_goto(&mut view);
        markers.remove_location(&mut view);
        markers.remove_all(&mut view);

        assert!(view.live.is_empty());
    }
}
