//! GeoJSON document import.

use crate::{BoundaryError, Result};
use basinview_geo::{Coordinate, Feature, Geometry, PropertyValue};
use geojson::{GeoJson, JsonObject, PointType};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Parses a boundary document from GeoJSON text.
///
/// Accepts a feature collection, a single feature or a bare geometry.
/// Multi-geometries are flattened into one feature per part, each
/// carrying the same properties.
///
/// # Errors
/// [`BoundaryError::MalformedDocument`] for anything that is not
/// GeoJSON with a recognized top-level type,
/// [`BoundaryError::InvalidCoordinate`] for positions outside valid
/// latitude/longitude ranges.
pub fn parse_document(text: &str) -> Result<Vec<Feature>> {
    let document: GeoJson = text
        .parse()
        .map_err(|error: geojson::Error| BoundaryError::MalformedDocument(error.to_string()))?;

    let features = match document {
        GeoJson::FeatureCollection(collection) => {
            let mut features = Vec::new();
            for feature in collection.features {
                features.extend(convert_feature(feature)?);
            }
            features
        }
        GeoJson::Feature(feature) => convert_feature(feature)?,
        GeoJson::Geometry(geometry) => convert_geometry(geometry.value, &BTreeMap::new())?,
    };

    debug!(count = features.len(), "boundary document parsed");
    Ok(features)
}

/// Reads and parses a boundary document from a file.
pub fn read_document(path: &Path) -> Result<Vec<Feature>> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}

fn convert_feature(feature: geojson::Feature) -> Result<Vec<Feature>> {
    let geometry = feature.geometry.ok_or_else(|| {
        BoundaryError::MalformedDocument("feature without geometry".to_string())
    })?;
    let properties = convert_properties(feature.properties);
    convert_geometry(geometry.value, &properties)
}

fn convert_geometry(
    value: geojson::Value,
    properties: &BTreeMap<String, PropertyValue>,
) -> Result<Vec<Feature>> {
    use geojson::Value;

    let geometries = match value {
        Value::Point(position) => vec![Geometry::Point(convert_position(&position)?)],
        Value::MultiPoint(positions) => positions
            .iter()
            .map(|position| Ok(Geometry::Point(convert_position(position)?)))
            .collect::<Result<_>>()?,
        Value::LineString(positions) => vec![Geometry::Path(convert_positions(&positions)?)],
        Value::MultiLineString(lines) => lines
            .iter()
            .map(|positions| Ok(Geometry::Path(convert_positions(positions)?)))
            .collect::<Result<_>>()?,
        Value::Polygon(rings) => vec![convert_polygon(&rings)?],
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .map(|rings| convert_polygon(rings))
            .collect::<Result<_>>()?,
        Value::GeometryCollection(members) => {
            let mut features = Vec::new();
            for member in members {
                features.extend(convert_geometry(member.value, properties)?);
            }
            return Ok(features);
        }
    };

    Ok(geometries
        .into_iter()
        .map(|geometry| Feature {
            geometry,
            properties: properties.clone(),
        })
        .collect())
}

/// Exterior ring only; holes are dataset detail the viewer does not
/// render separately.
fn convert_polygon(rings: &[Vec<PointType>]) -> Result<Geometry> {
    let exterior = rings
        .first()
        .ok_or_else(|| BoundaryError::MalformedDocument("polygon without rings".to_string()))?;
    let mut points = convert_positions(exterior)?;
    // GeoJSON rings repeat the first position at the end; the ring tag
    // already implies closure.
    if points.len() > 3 && points.first() == points.last() {
        points.pop();
    }
    Ok(Geometry::Ring(points))
}

fn convert_positions(positions: &[PointType]) -> Result<Vec<Coordinate>> {
    positions.iter().map(|p| convert_position(p)).collect()
}

fn convert_position(position: &PointType) -> Result<Coordinate> {
    // Positions are [lon, lat, ...]; a trailing altitude is ignored.
    let (Some(&longitude), Some(&latitude)) = (position.first(), position.get(1)) else {
        return Err(BoundaryError::MalformedDocument(format!(
            "position with {} ordinates",
            position.len()
        )));
    };
    Ok(Coordinate::new(latitude, longitude)?)
}

fn convert_properties(properties: Option<JsonObject>) -> BTreeMap<String, PropertyValue> {
    properties
        .into_iter()
        .flatten()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(text) => PropertyValue::Text(text),
                serde_json::Value::Number(number) => {
                    PropertyValue::Number(number.as_f64().unwrap_or(f64::NAN))
                }
                other => PropertyValue::Text(other.to_string()),
            };
            (key, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATERSHED_DOC: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "name": "Putunpunas", "area_km2": 83.2 },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [121.0, 23.0], [121.5, 23.0], [121.5, 24.0], [121.0, 23.0]
                ]]
            }
        }]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let features = parse_document(WATERSHED_DOC).unwrap();
        assert_eq!(features.len(), 1);

        let feature = &features[0];
        assert!(matches!(feature.geometry, Geometry::Ring(_)));
        assert_eq!(
            feature.properties["name"],
            PropertyValue::Text("Putunpunas".into())
        );
        assert_eq!(feature.properties["area_km2"], PropertyValue::Number(83.2));
    }

    #[test]
    fn test_closing_position_dropped() {
        let features = parse_document(WATERSHED_DOC).unwrap();
        let Geometry::Ring(points) = &features[0].geometry else {
            panic!("expected ring");
        };
        assert_eq!(points.len(), 3);
        assert_ne!(points.first(), points.last());
    }

    #[test]
    fn test_parse_bare_geometry() {
        let features = parse_document(
            r#"{ "type": "LineString", "coordinates": [[121.0, 23.0], [121.5, 23.5]] }"#,
        )
        .unwrap();
        assert_eq!(features.len(), 1);
        assert!(matches!(features[0].geometry, Geometry::Path(_)));
        assert!(features[0].properties.is_empty());
    }

    #[test]
    fn test_multi_polygon_flattened() {
        let features = parse_document(
            r#"{
                "type": "Feature",
                "properties": { "name": "split" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[121.0, 23.0], [121.2, 23.0], [121.2, 23.2], [121.0, 23.0]]],
                        [[[120.0, 22.0], [120.2, 22.0], [120.2, 22.2], [120.0, 22.0]]]
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(features.len(), 2);
        assert!(features
            .iter()
            .all(|f| f.properties["name"] == PropertyValue::Text("split".into())));
    }

    #[test]
    fn test_missing_top_level_type_rejected() {
        let result = parse_document(r#"{ "features": [] }"#);
        assert!(matches!(result, Err(BoundaryError::MalformedDocument(_))));
    }

    #[test]
    fn test_not_json_rejected() {
        let result = parse_document("definitely not geojson");
        assert!(matches!(result, Err(BoundaryError::MalformedDocument(_))));
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let result = parse_document(
            r#"{ "type": "Point", "coordinates": [200.0, 23.0] }"#,
        );
        assert!(matches!(result, Err(BoundaryError::InvalidCoordinate(_))));
    }
}
