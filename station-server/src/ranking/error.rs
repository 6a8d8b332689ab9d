//! Ranking error types.

use crate::stations::StationError;

/// A query parameter is outside its valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Latitude is not a finite value in [-90, 90]
    #[error("invalid latitude {0}: must be between -90 and 90")]
    InvalidLatitude(f64),

    /// Longitude is not a finite value in [-180, 180]
    #[error("invalid longitude {0}: must be between -180 and 180")]
    InvalidLongitude(f64),

    /// Radius is not finite
    #[error("invalid radius {0}: must be a finite number of miles")]
    InvalidRadius(f64),
}

/// A station lacks a field the chosen strategy cannot do without.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankError {
    /// Distance-based strategies need both coordinates on every station
    #[error("station on line {line} has no coordinates")]
    MissingCoordinates { line: usize },

    /// A field required by the strategy is absent
    #[error("station on line {line} is missing required field `{field}`")]
    MissingField { line: usize, field: &'static str },
}

/// Errors from the load-and-rank pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Loading stations failed
    #[error(transparent)]
    Source(#[from] StationError),

    /// Ranking the loaded stations failed
    #[error(transparent)]
    Rank(#[from] RankError),
}
