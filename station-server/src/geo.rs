//! Great-circle distance and radius filtering.

use crate::domain::Station;

/// Mean Earth radius in miles (6371.0088 km).
pub const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine distance between two points, in miles.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push h slightly above 1 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Distance from `origin` to the station, or `None` if it lacks coordinates.
pub fn station_distance(station: &Station, origin: GeoPoint) -> Option<f64> {
    station
        .location()
        .map(|location| haversine_miles(origin, location))
}

/// Check whether a station lies within `radius` miles of `origin`.
///
/// The boundary is inclusive. Stations without both coordinates are never
/// within range.
pub fn within_radius(station: &Station, origin: GeoPoint, radius: f64) -> bool {
    station_distance(station, origin).is_some_and(|distance| distance <= radius)
}
