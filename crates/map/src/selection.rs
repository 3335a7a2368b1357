//! Per-group feature selection.
//!
//! Each layer group (watershed boundary, uploaded dataset) owns one
//! `SelectionGroup`; groups never see each other's state.

use crate::style::LayerStyle;
use crate::view::{FeatureId, VectorLayer};

/// Tracks the single highlighted feature of one layer group.
///
/// Invariant: at most one feature is highlighted at a time. Selecting a
/// new feature restores the previous one to the base style first.
#[derive(Debug)]
pub struct SelectionGroup {
    base: LayerStyle,
    highlight: LayerStyle,
    selected: Option<FeatureId>,
}

impl SelectionGroup {
    /// Creates an empty group with its base and highlight styles.
    pub fn new(base: LayerStyle, highlight: LayerStyle) -> Self {
        Self {
            base,
            highlight,
            selected: None,
        }
    }

    /// The currently highlighted feature, if any.
    pub fn selected(&self) -> Option<FeatureId> {
        self.selected
    }

    /// Highlights a feature, restoring the previous selection first.
    pub fn select(&mut self, layer: &mut dyn VectorLayer, feature: FeatureId) {
        if let Some(previous) = self.selected.take() {
            layer.set_style(previous, &self.base);
        }
        layer.set_style(feature, &self.highlight);
        layer.bring_to_front(feature);
        self.selected = Some(feature);
    }

    /// Restores the selected feature to the base style. No-op when
    /// nothing is selected.
    pub fn clear(&mut self, layer: &mut dyn VectorLayer) {
        if let Some(previous) = self.selected.take() {
            layer.set_style(previous, &self.base);
        }
    }

    /// Forgets the selection without touching the layer, for when the
    /// layer itself is gone.
    pub fn reset(&mut self) {
        self.selected = None;
    }
}
