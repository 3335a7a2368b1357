//! Geospatial core for the Basinview watershed map viewer.
//!
//! This crate provides:
//! - Free-text coordinate parsing (decimal and DMS, with hemisphere letters)
//! - Haversine distance calculations
//! - Geodesic path length, polygon perimeter and polygon area
//! - Display formatting for measured magnitudes
//!
//! # Example
//!
//! ```
//! use basinview_geo::{parse_lat_lon_pair, Coordinate};
//!
//! let coord = parse_lat_lon_pair("23 30 0 N, 121 0 0 E").unwrap();
//! assert!((coord.latitude - 23.5).abs() < 1e-9);
//! assert!((coord.longitude - 121.0).abs() < 1e-9);
//! ```

mod error;
mod feature;
mod format;
mod haversine;
mod measure;
mod parse;

pub use error::{GeoError, GeoErrorCode, Result};
pub use feature::{Feature, Geometry, PropertyValue};
pub use format::format_magnitude;
pub use haversine::{haversine_distance_meters, EARTH_RADIUS_M};
pub use measure::{
    measure_geometry, path_length, polygon_area, polygon_perimeter, Measurement,
    EQUATORIAL_RADIUS_M, SQUARE_METERS_PER_HECTARE,
};
pub use parse::{parse_coordinate, parse_lat_lon_pair};

/// A geographic coordinate with latitude and longitude.
///
/// Out-of-range values are rejected at construction, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns [`GeoError::OutOfRange`] when latitude is outside [-90, 90]
    /// or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !Self::in_range(latitude, longitude) {
            return Err(GeoError::OutOfRange(format!(
                "lat {latitude}, lon {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns true if the pair lies within valid latitude/longitude ranges.
    #[inline]
    pub fn in_range(latitude: f64, longitude: f64) -> bool {
        latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = GeoError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self> {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(23.7, 121.0).unwrap();
        assert_eq!(coord.latitude, 23.7);
        assert_eq!(coord.longitude, 121.0);
    }

    #[test]
    fn test_coordinate_range_rejection() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(matches!(
            Coordinate::new(91.0, 0.0),
            Err(GeoError::OutOfRange(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, 181.0),
            Err(GeoError::OutOfRange(_))
        ));
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_try_from_tuple() {
        let coord: Coordinate = (23.7, 121.0).try_into().unwrap();
        assert_eq!(coord.latitude, 23.7);
    }
}
