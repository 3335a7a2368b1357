//! Layer style presets.

use serde::Serialize;

/// Display style for a vector layer feature.
///
/// Serialized as-is for the map widget's style options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStyle {
    /// Stroke color (CSS color string)
    pub color: &'static str,
    /// Stroke weight in pixels
    pub weight: u8,
    /// Fill color (CSS color string)
    pub fill_color: &'static str,
    /// Fill opacity, 0.0 to 1.0
    pub fill_opacity: f32,
}

impl LayerStyle {
    /// Base style for the watershed boundary layer.
    pub const WATERSHED: LayerStyle = LayerStyle {
        color: "red",
        weight: 3,
        fill_color: "orange",
        fill_opacity: 0.5,
    };

    /// Highlight style for a selected watershed feature.
    pub const WATERSHED_HIGHLIGHT: LayerStyle = LayerStyle {
        color: "blue",
        weight: 4,
        fill_color: "cyan",
        fill_opacity: 0.6,
    };

    /// Base style for an uploaded boundary layer.
    pub const UPLOADED: LayerStyle = LayerStyle {
        color: "red",
        weight: 3,
        fill_color: "transparent",
        fill_opacity: 0.15,
    };

    /// Highlight style for a selected uploaded feature.
    pub const UPLOADED_HIGHLIGHT: LayerStyle = LayerStyle {
        color: "#0066ff",
        weight: 4,
        fill_color: "#00ffff",
        fill_opacity: 0.45,
    };
}
