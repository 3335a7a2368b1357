//! Geometry and feature data model.
//!
//! Geometries are ordered coordinate sequences tagged by how they close;
//! features pair a geometry with an opaque property map carried through
//! import, display and export untouched.

use crate::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered coordinate sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single marker position.
    Point(Coordinate),
    /// Open polyline.
    Path(Vec<Coordinate>),
    /// Closed ring; the last point implicitly connects to the first.
    Ring(Vec<Coordinate>),
}

impl Geometry {
    /// All coordinates in order.
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::Point(coord) => std::slice::from_ref(coord),
            Geometry::Path(points) | Geometry::Ring(points) => points,
        }
    }
}

/// A property value attached to a feature. Kept opaque: properties are
/// displayed and round-tripped, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Textual property
    Text(String),
    /// Numeric property
    Number(f64),
}

/// A geometry with its properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// The feature's shape
    pub geometry: Geometry,
    /// Opaque property mapping, ordered for stable output
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Feature {
    /// Creates a feature with no properties.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: BTreeMap::new(),
        }
    }

    /// Property lines for a feature popup, `key: value` per property.
    pub fn property_lines(&self) -> Vec<String> {
        self.properties
            .iter()
            .map(|(key, value)| match value {
                PropertyValue::Text(text) => format!("{key}: {text}"),
                PropertyValue::Number(number) => format!("{key}: {number}"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_geometry_coordinates() {
        let point = Geometry::Point(coord(23.7, 121.0));
        assert_eq!(point.coordinates().len(), 1);

        let path = Geometry::Path(vec![coord(23.0, 121.0), coord(24.0, 121.5)]);
        assert_eq!(path.coordinates().len(), 2);
    }

    #[test]
    fn test_property_lines() {
        let mut feature = Feature::new(Geometry::Point(coord(23.7, 121.0)));
        feature
            .properties
            .insert("name".into(), PropertyValue::Text("Putunpunas".into()));
        feature
            .properties
            .insert("basin_km2".into(), PropertyValue::Number(83.2));

        let lines = feature.property_lines();
        assert_eq!(lines, vec!["basin_km2: 83.2", "name: Putunpunas"]);
    }

    #[test]
    fn test_property_value_serde_untagged() {
        let value: PropertyValue = serde_json::from_str("\"ridge\"").unwrap();
        assert_eq!(value, PropertyValue::Text("ridge".into()));

        let value: PropertyValue = serde_json::from_str("42.5").unwrap();
        assert_eq!(value, PropertyValue::Number(42.5));
    }
}
