//! Station ranking.
//!
//! Selects the stations within a radius of a query point and orders them by
//! one of five strategies. Every strategy returns at most `capacity`
//! stations, and ties keep the order the stations were loaded in.
//!
//! The strategies differ in how they treat a station without coordinates:
//! priority and traffic ranking skip it, while the distance-based strategies
//! fail the whole query.

mod combined;
mod discount;
mod distance;
mod error;
mod nearby;
mod priority;
mod query;
mod strategy;
mod traffic;

#[cfg(test)]
mod proptests;

pub use combined::rank_by_combined_score;
pub use discount::{MAX_DISCOUNT, rank_by_discount, station_discount};
pub use distance::rank_by_distance;
pub use error::{PipelineError, QueryError, RankError};
pub use priority::rank_by_priority;
pub use query::Query;
pub use strategy::RankingStrategy;
pub use traffic::rank_by_traffic;

use tracing::debug;

use crate::domain::Station;
use crate::stations::StationSource;

/// Load the current stations from `source` and rank them.
///
/// The source is read afresh on every call.
pub fn rank_stations<S: StationSource + ?Sized>(
    source: &S,
    strategy: RankingStrategy,
    query: &Query,
) -> Result<Vec<Station>, PipelineError> {
    let stations = source.load()?;
    let loaded = stations.len();

    let ranked = strategy.rank(stations, query)?;
    debug!(
        strategy = strategy.name(),
        loaded,
        returned = ranked.len(),
        "ranked stations"
    );

    Ok(ranked)
}
