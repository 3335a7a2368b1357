//! Test doubles for the widget collaborator traits.

use crate::style::LayerStyle;
use crate::view::{Bounds, FeatureId, MapView, OverlayId, VectorLayer};
use basinview_geo::Coordinate;
use std::collections::HashMap;

/// Records the last style applied per feature.
#[derive(Default)]
pub struct RecordingLayer {
    pub styles: HashMap<FeatureId, LayerStyle>,
    pub front: Vec<FeatureId>,
}

impl VectorLayer for RecordingLayer {
    fn set_style(&mut self, feature: FeatureId, style: &LayerStyle) {
        self.styles.insert(feature, style.clone());
    }

    fn bring_to_front(&mut self, feature: FeatureId) {
        self.front.push(feature);
    }
}

/// Records view and overlay lifecycle calls.
#[derive(Default)]
pub struct RecordingView {
    pub next_id: OverlayId,
    pub live: Vec<OverlayId>,
    pub popups_opened: Vec<OverlayId>,
    pub popup_closed: usize,
    pub views_set: Vec<(Coordinate, u8)>,
    pub bounds_fitted: Vec<Bounds>,
    /// When set, `fit_bounds` reports failure so callers exercise their
    /// `set_view` fallback.
    pub reject_fit: bool,
}

impl MapView for RecordingView {
    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.views_set.push((center, zoom));
    }

    fn fit_bounds(&mut self, bounds: &Bounds, _padding_px: u32) -> bool {
        if self.reject_fit {
            return false;
        }
        self.bounds_fitted.push(*bounds);
        true
    }

    fn add_marker(&mut self, _at: Coordinate, _popup: &str) -> OverlayId {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.next_id
    }

    fn add_circle(&mut self, _center: Coordinate, _radius_m: f64) -> OverlayId {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.next_id
    }

    fn remove_overlay(&mut self, overlay: OverlayId) {
        self.live.retain(|id| *id != overlay);
    }

    fn open_popup(&mut self, overlay: OverlayId) {
        self.popups_opened.push(overlay);
    }

    fn close_popup(&mut self) {
        self.popup_closed += 1;
    }
}
