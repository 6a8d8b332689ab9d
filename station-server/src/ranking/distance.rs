//! Ranking by distance from the query origin.

use crate::domain::Station;

use super::error::RankError;
use super::nearby::{Direction, top_by_key, within_query_radius_strict};
use super::query::Query;

/// Rank nearby stations by distance, closest first.
///
/// Every station in the data set must have coordinates; a station without
/// them fails the whole ranking with [`RankError::MissingCoordinates`].
pub fn rank_by_distance(stations: Vec<Station>, query: &Query) -> Result<Vec<Station>, RankError> {
    let keyed = within_query_radius_strict(stations, query)?;
    Ok(top_by_key(keyed, Direction::Ascending, query.capacity()))
}
