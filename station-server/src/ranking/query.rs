//! Ranking queries.

use crate::geo::GeoPoint;

use super::error::QueryError;

/// A request for stations near a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    origin: GeoPoint,
    radius_miles: f64,
    capacity: usize,
}

impl Query {
    /// Create a validated query.
    ///
    /// `capacity` is the maximum number of stations to return. A negative
    /// radius is accepted and matches no station.
    pub fn new(origin: GeoPoint, radius_miles: f64, capacity: usize) -> Result<Self, QueryError> {
        if !origin.lat.is_finite() || !(-90.0..=90.0).contains(&origin.lat) {
            return Err(QueryError::InvalidLatitude(origin.lat));
        }
        if !origin.lon.is_finite() || !(-180.0..=180.0).contains(&origin.lon) {
            return Err(QueryError::InvalidLongitude(origin.lon));
        }
        if !radius_miles.is_finite() {
            return Err(QueryError::InvalidRadius(radius_miles));
        }

        Ok(Self {
            origin,
            radius_miles,
            capacity,
        })
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
