//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ranking::{Query, QueryError};

/// Query parameters shared by every station ranking endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StationQueryParams {
    /// Latitude of the user, in degrees
    pub lat: f64,

    /// Longitude of the user, in degrees
    pub lon: f64,

    /// Search radius in miles
    pub radius: f64,

    /// Maximum number of stations to return; zero or negative returns none
    pub capacity: i64,
}

impl StationQueryParams {
    /// Validate the parameters into a ranking query.
    pub fn to_query(&self) -> Result<Query, QueryError> {
        let capacity = usize::try_from(self.capacity).unwrap_or(0);
        Query::new(GeoPoint::new(self.lat, self.lon), self.radius, capacity)
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
