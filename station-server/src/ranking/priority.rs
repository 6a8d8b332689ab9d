//! Ranking by maintenance priority.

use crate::domain::Station;

use super::error::RankError;
use super::nearby::{Direction, top_by_key, within_query_radius};
use super::query::Query;

/// Rank nearby stations by `maintenance_priority`, highest first.
///
/// Stations without a priority rank as priority 0. Stations without
/// coordinates are left out rather than rejected.
pub fn rank_by_priority(stations: Vec<Station>, query: &Query) -> Result<Vec<Station>, RankError> {
    let keyed = within_query_radius(stations, query)
        .into_iter()
        .map(|s| (s.maintenance_priority().unwrap_or(0.0), s))
        .collect();

    Ok(top_by_key(keyed, Direction::Descending, query.capacity()))
}
