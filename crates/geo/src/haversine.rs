//! Haversine distance calculation.
//!
//! Great-circle distance between two points on a sphere, used as the
//! distance primitive for all length and perimeter measurements.

use crate::Coordinate;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in meters.
///
/// # Example
/// ```
/// use basinview_geo::{haversine_distance_meters, Coordinate};
///
/// let taipei = Coordinate::new(25.0330, 121.5654).unwrap();
/// let kaohsiung = Coordinate::new(22.6273, 120.3014).unwrap();
///
/// let meters = haversine_distance_meters(&taipei, &kaohsiung);
/// assert!((meters - 295_000.0).abs() < 5_000.0);
/// ```
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a =
        (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
