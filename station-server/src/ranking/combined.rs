//! Ranking by a composite of distance, priority, and traffic.
//!
//! Each station scores the sum of three terms:
//!
//! ```text
//! score = (radius - distance) / radius
//!       + maintenance_priority / max(maintenance_priority)
//!       + traffic / max(predicted_traffic)
//! ```
//!
//! The maxima are taken over the stations inside the radius, absent values
//! counting as 0, and may be negative. A maximum of exactly 0 makes its term
//! 0 for every station. The traffic term divides the generic `traffic` field
//! by the largest `predicted_traffic`; the two fields are kept distinct.

use crate::domain::Station;

use super::error::RankError;
use super::nearby::{Direction, top_by_key, within_query_radius_strict};
use super::query::Query;

/// Normalisation reference points for one ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    radius: f64,
    max_priority: f64,
    max_traffic: f64,
}

impl Scale {
    fn of(nearby: &[(f64, Station)], radius: f64) -> Self {
        let max_of = |field: fn(&Station) -> Option<f64>| {
            nearby
                .iter()
                .map(|(_, s)| field(s).unwrap_or(0.0))
                .fold(f64::NEG_INFINITY, f64::max)
        };

        Self {
            radius,
            max_priority: max_of(Station::maintenance_priority),
            max_traffic: max_of(Station::predicted_traffic),
        }
    }

    fn score(&self, distance: f64, station: &Station) -> f64 {
        // Only stations at the origin survive a zero radius
        let distance_term = if self.radius > 0.0 {
            (self.radius - distance) / self.radius
        } else {
            1.0
        };

        let priority_term = ratio(
            station.maintenance_priority().unwrap_or(0.0),
            self.max_priority,
        );
        let traffic_term = ratio(station.traffic().unwrap_or(0.0), self.max_traffic);

        distance_term + priority_term + traffic_term
    }
}

/// `value / max`, or 0 when there is nothing to normalise against.
fn ratio(value: f64, max: f64) -> f64 {
    if max == 0.0 || !max.is_finite() {
        0.0
    } else {
        value / max
    }
}

/// Rank nearby stations by combined score, highest first.
///
/// Like [`rank_by_distance`](super::rank_by_distance), every station must
/// have coordinates.
pub fn rank_by_combined_score(
    stations: Vec<Station>,
    query: &Query,
) -> Result<Vec<Station>, RankError> {
    let nearby = within_query_radius_strict(stations, query)?;
    let scale = Scale::of(&nearby, query.radius_miles());

    let keyed = nearby
        .into_iter()
        .map(|(distance, station)| (scale.score(distance, &station), station))
        .collect();

    Ok(top_by_key(keyed, Direction::Descending, query.capacity()))
}
