//! Geodesic measurement of paths and rings.
//!
//! Lengths and perimeters sum haversine edges; areas use the spherical
//! excess approximation over the equatorial radius, matching the geodesy
//! helper the map widget ships with.

use crate::{format_magnitude, haversine_distance_meters, Coordinate, Geometry};

/// Earth's equatorial radius in meters, used for geodesic area.
pub const EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Square meters per hectare.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Total length of an open path in meters.
///
/// Returns 0 for fewer than 2 points.
pub fn path_length(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance_meters(&pair[0], &pair[1]))
        .sum()
}

/// Perimeter of a closed ring in meters: consecutive edges plus the
/// closing edge from the last point back to the first.
///
/// Returns 0 for fewer than 2 points; a 1-point ring has no perimeter.
pub fn polygon_perimeter(ring: &[Coordinate]) -> f64 {
    if ring.len() < 2 {
        return 0.0;
    }
    let closing = haversine_distance_meters(&ring[ring.len() - 1], &ring[0]);
    path_length(ring) + closing
}

/// Geodesic area of a closed ring in square meters, as an unsigned
/// magnitude. `None` for fewer than 3 points.
///
/// Divide by [`SQUARE_METERS_PER_HECTARE`] for hectares.
pub fn polygon_area(ring: &[Coordinate]) -> Option<f64> {
    if ring.len() < 3 {
        return None;
    }

    let mut area = 0.0;
    for i in 0..ring.len() {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % ring.len()];
        area += (p2.longitude - p1.longitude).to_radians()
            * (2.0 + p1.latitude.to_radians().sin() + p2.latitude.to_radians().sin());
    }

    Some((area * EQUATORIAL_RADIUS_M * EQUATORIAL_RADIUS_M / 2.0).abs())
}

/// Measurement summary for a drawn or loaded geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    /// A single point has nothing to measure.
    Point,
    /// Open path: total length in meters.
    Path {
        /// Length in meters
        meters: f64,
    },
    /// Closed ring: perimeter and, when computable, area.
    Ring {
        /// Perimeter in meters
        perimeter_m: f64,
        /// Area in square meters; `None` when the ring is degenerate
        area_m2: Option<f64>,
    },
}

impl Measurement {
    /// Human-readable lines for a measurement popup, magnitudes rounded
    /// to 2 decimals and thousands-grouped.
    ///
    /// Perimeter is always reported; area lines are simply omitted when
    /// the area is unavailable.
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            Measurement::Point => Vec::new(),
            Measurement::Path { meters } => vec![
                format!("Length: {} m", format_magnitude(*meters)),
                format!("Length: {} km", format_magnitude(meters / 1000.0)),
            ],
            Measurement::Ring {
                perimeter_m,
                area_m2,
            } => {
                let mut lines = vec![format!("Perimeter: {} m", format_magnitude(*perimeter_m))];
                if let Some(area) = area_m2 {
                    lines.push(format!("Area: {} m\u{b2}", format_magnitude(*area)));
                    lines.push(format!(
                        "Area: {} ha",
                        format_magnitude(area / SQUARE_METERS_PER_HECTARE)
                    ));
                }
                lines
            }
        }
    }
}

/// Measures a geometry according to its tag.
pub fn measure_geometry(geometry: &Geometry) -> Measurement {
    match geometry {
        Geometry::Point(_) => Measurement::Point,
        Geometry::Path(points) => Measurement::Path {
            meters: path_length(points),
        },
        Geometry::Ring(points) => Measurement::Ring {
            perimeter_m: polygon_perimeter(points),
            area_m2: polygon_area(points),
        },
    }
}
