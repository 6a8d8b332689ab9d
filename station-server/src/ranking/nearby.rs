//! Radius filtering and result ordering shared by the strategies.

use std::cmp::Ordering;

use crate::domain::Station;
use crate::geo::{station_distance, within_radius};

use super::error::RankError;
use super::query::Query;

/// Keep the stations within the query radius.
///
/// Stations without coordinates are dropped.
pub(super) fn within_query_radius(stations: Vec<Station>, query: &Query) -> Vec<Station> {
    stations
        .into_iter()
        .filter(|s| within_radius(s, query.origin(), query.radius_miles()))
        .collect()
}

/// Keep the stations within the query radius, paired with their distance.
///
/// Unlike [`within_query_radius`], every station must have coordinates:
/// the first one without is an error.
pub(super) fn within_query_radius_strict(
    stations: Vec<Station>,
    query: &Query,
) -> Result<Vec<(f64, Station)>, RankError> {
    let mut nearby = Vec::new();
    for station in stations {
        let distance = station_distance(&station, query.origin()).ok_or(
            RankError::MissingCoordinates {
                line: station.line(),
            },
        )?;
        if distance <= query.radius_miles() {
            nearby.push((distance, station));
        }
    }
    Ok(nearby)
}

/// Sort direction for [`top_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    Ascending,
    Descending,
}

/// Stably sort stations by a precomputed key and keep the first `capacity`.
///
/// Stations with equal keys keep their relative order.
pub(super) fn top_by_key(
    mut keyed: Vec<(f64, Station)>,
    direction: Direction,
    capacity: usize,
) -> Vec<Station> {
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });

    keyed
        .into_iter()
        .take(capacity)
        .map(|(_, station)| station)
        .collect()
}
