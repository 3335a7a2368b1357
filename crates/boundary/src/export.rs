//! GeoJSON document export.

use crate::{BoundaryError, Result};
use basinview_geo::{Feature, Geometry, PropertyValue};
use chrono::{DateTime, Local};
use geojson::{GeoJson, JsonObject};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serializes drawn shapes as a pretty-printed GeoJSON feature
/// collection.
///
/// # Errors
/// [`BoundaryError::EmptyCollection`] when there is nothing to export.
pub fn to_document_string(features: &[Feature]) -> Result<String> {
    if features.is_empty() {
        return Err(BoundaryError::EmptyCollection);
    }

    let collection = geojson::FeatureCollection {
        bbox: None,
        features: features.iter().map(to_geojson_feature).collect(),
        foreign_members: None,
    };
    Ok(serde_json::to_string_pretty(&GeoJson::from(collection))?)
}

/// Export filename for a timestamp:
/// `drawn_<year>-<month>-<day>_<hour>-<minute>-<second>.geojson`.
pub fn export_filename(timestamp: DateTime<Local>) -> String {
    format!("drawn_{}.geojson", timestamp.format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes drawn shapes into `dir` under a timestamped filename and
/// returns the path written.
pub fn write_document(dir: &Path, features: &[Feature]) -> Result<PathBuf> {
    let text = to_document_string(features)?;
    let path = dir.join(export_filename(Local::now()));
    std::fs::write(&path, text)?;
    debug!(path = %path.display(), count = features.len(), "drawn shapes exported");
    Ok(path)
}

fn to_geojson_feature(feature: &Feature) -> geojson::Feature {
    let value = match &feature.geometry {
        Geometry::Point(coord) => geojson::Value::Point(vec![coord.longitude, coord.latitude]),
        Geometry::Path(points) => geojson::Value::LineString(positions_of(points)),
        Geometry::Ring(points) => {
            // GeoJSON rings repeat the first position at the end.
            let mut ring = positions_of(points);
            if let Some(first) = ring.first().cloned() {
                ring.push(first);
            }
            geojson::Value::Polygon(vec![ring])
        }
    };

    geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id: None,
        properties: Some(properties_to_json(&feature.properties)),
        foreign_members: None,
    }
}

fn positions_of(points: &[basinview_geo::Coordinate]) -> Vec<Vec<f64>> {
    points
        .iter()
        .map(|coord| vec![coord.longitude, coord.latitude])
        .collect()
}

fn properties_to_json(
    properties: &std::collections::BTreeMap<String, PropertyValue>,
) -> JsonObject {
    properties
        .iter()
        .map(|(key, value)| {
            let json = match value {
                PropertyValue::Text(text) => serde_json::Value::String(text.clone()),
                PropertyValue::Number(number) => serde_json::Number::from_f64(*number)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            };
            (key.clone(), json)
        })
        .collect()
}
