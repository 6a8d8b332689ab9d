//! Ranking by computed discount.
//!
//! Stations where supply and predicted demand are balanced earn the largest
//! discount. The raw discount is the ratio of the smaller of availability and
//! predicted traffic to the larger, as a percentage, plus a bonus of 5 when
//! the station is nearly empty. That is then scaled from [0, 105] to [0, 20].

use crate::domain::{Station, fields};

use super::error::RankError;
use super::nearby::{Direction, top_by_key, within_query_radius_strict};
use super::query::Query;

/// Largest discount a station can be offered.
pub const MAX_DISCOUNT: f64 = 20.0;

/// Availability used in place of zero when dividing.
const MIN_AVAILABLE: f64 = 0.05;

/// Bonus added when availability is below [`SCARCITY_FRACTION`] of capacity.
const SCARCITY_BONUS: f64 = 5.0;

const SCARCITY_FRACTION: f64 = 0.1;

/// Largest possible raw discount: a perfect ratio plus the scarcity bonus.
const MAX_RAW_DISCOUNT: f64 = 100.0 + SCARCITY_BONUS;

/// Compute the scaled discount for a station with vehicles available.
///
/// Fails if the station has no `capacity` to judge scarcity against.
pub fn station_discount(station: &Station, available: f64) -> Result<f64, RankError> {
    let available = available.max(MIN_AVAILABLE);
    let traffic = station.predicted_traffic().unwrap_or(0.0);

    let mut discount = if traffic > available {
        available / traffic * 100.0
    } else {
        traffic / available * 100.0
    };

    let capacity = station.capacity().ok_or(RankError::MissingField {
        line: station.line(),
        field: fields::CAPACITY,
    })?;
    if available < SCARCITY_FRACTION * capacity {
        discount += SCARCITY_BONUS;
    }

    let scaled = discount / MAX_RAW_DISCOUNT * MAX_DISCOUNT;
    Ok(scaled.clamp(0.0, MAX_DISCOUNT))
}

/// Rank nearby stations with vehicles available by discount, largest first.
///
/// Returned stations are copies carrying a `discount` field. Stations with no
/// vehicles available are left out. Every station must have coordinates, and
/// every station in range must have `num_vehicles_available`.
pub fn rank_by_discount(stations: Vec<Station>, query: &Query) -> Result<Vec<Station>, RankError> {
    let mut keyed = Vec::new();

    for (_, station) in within_query_radius_strict(stations, query)? {
        let available = station
            .num_vehicles_available()
            .ok_or(RankError::MissingField {
                line: station.line(),
                field: fields::NUM_VEHICLES_AVAILABLE,
            })?;
        if available <= 0.0 {
            continue;
        }

        let discount = station_discount(&station, available)?;
        keyed.push((discount, station.with_discount(discount)));
    }

    Ok(top_by_key(keyed, Direction::Descending, query.capacity()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use serde_json::json;

    fn station(line: usize, value: serde_json::Value) -> Station {
        Station::from_value(line, value).unwrap()
    }

    fn query(capacity: usize) -> Query {
        Query::new(GeoPoint::new(40.0, -73.0), 5.0, capacity).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn balanced_supply_and_demand() {
        let s = station(1, json!({"predicted_traffic": 10, "capacity": 20}));
        // ratio 100%, no bonus -> 100 / 105 * 20
        assert_close(station_discount(&s, 10.0).unwrap(), 100.0 / 105.0 * 20.0);
    }

    #[test]
    fn demand_exceeds_supply() {
        let s = station(1, json!({"predicted_traffic": 20, "capacity": 10}));
        // 5 / 20 = 25%
        assert_close(station_discount(&s, 5.0).unwrap(), 25.0 / 105.0 * 20.0);
    }

    #[test]
    fn supply_exceeds_demand() {
        let s = station(1, json!({"predicted_traffic": 2, "capacity": 10}));
        // 2 / 8 = 25%
        assert_close(station_discount(&s, 8.0).unwrap(), 25.0 / 105.0 * 20.0);
    }

    #[test]
    fn scarcity_bonus() {
        let s = station(1, json!({"predicted_traffic": 4, "capacity": 100}));
        // 4 / 4 = 100%, 4 < 10 so +5 -> the maximum
        assert_close(station_discount(&s, 4.0).unwrap(), MAX_DISCOUNT);
    }

    #[test]
    fn no_predicted_traffic_earns_only_the_bonus() {
        let plenty = station(1, json!({"capacity": 10}));
        assert_close(station_discount(&plenty, 5.0).unwrap(), 0.0);

        let scarce = station(2, json!({"capacity": 100}));
        assert_close(station_discount(&scarce, 5.0).unwrap(), 5.0 / 105.0 * 20.0);
    }

    #[test]
    fn tiny_availability_is_floored() {
        let s = station(1, json!({"predicted_traffic": 1, "capacity": 0}));
        // 0.05 / 1 = 5%
        assert_close(station_discount(&s, 0.01).unwrap(), 5.0 / 105.0 * 20.0);
    }

    #[test]
    fn negative_traffic_clamps_to_zero() {
        let s = station(1, json!({"predicted_traffic": -5, "capacity": 10}));
        assert_eq!(station_discount(&s, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn missing_capacity_is_an_error() {
        let s = station(6, json!({"predicted_traffic": 1}));
        assert_eq!(
            station_discount(&s, 1.0),
            Err(RankError::MissingField {
                line: 6,
                field: "capacity"
            })
        );
    }

    #[test]
    fn ranks_by_discount_and_attaches_field() {
        let stations = vec![
            station(1, json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 5, "predicted_traffic": 20, "capacity": 10})),
            station(2, json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 10, "predicted_traffic": 10, "capacity": 20})),
            station(3, json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 10, "capacity": 20})),
        ];

        let ranked = rank_by_discount(stations, &query(10)).unwrap();
        let lines: Vec<_> = ranked.iter().map(Station::line).collect();
        assert_eq!(lines, vec![2, 1, 3]);

        assert_close(ranked[0].discount().unwrap(), 100.0 / 105.0 * 20.0);
        assert_eq!(ranked[2].get("discount"), Some(&json!(0.0)));
        for s in &ranked {
            let d = s.discount().unwrap();
            assert!((0.0..=MAX_DISCOUNT).contains(&d));
        }
    }

    #[test]
    fn stations_without_vehicles_are_excluded() {
        let stations = vec![
            station(1, json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 0, "predicted_traffic": 1})),
            station(2, json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 1, "predicted_traffic": 1, "capacity": 5})),
        ];

        let ranked = rank_by_discount(stations, &query(10)).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].line(), 2);
    }

    #[test]
    fn empty_stations_need_no_capacity() {
        let stations = vec![station(
            1,
            json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 0}),
        )];
        assert!(rank_by_discount(stations, &query(10)).unwrap().is_empty());
    }

    #[test]
    fn missing_availability_in_range_is_an_error() {
        let stations = vec![station(3, json!({"lat": 40.0, "lon": -73.0, "capacity": 5}))];
        assert_eq!(
            rank_by_discount(stations, &query(10)),
            Err(RankError::MissingField {
                line: 3,
                field: "num_vehicles_available"
            })
        );
    }

    #[test]
    fn missing_availability_out_of_range_is_ignored() {
        let stations = vec![station(1, json!({"lat": 45.0, "lon": -73.0}))];
        assert!(rank_by_discount(stations, &query(10)).unwrap().is_empty());
    }

    #[test]
    fn missing_coordinates_is_an_error() {
        let stations = vec![station(2, json!({"num_vehicles_available": 3, "capacity": 5}))];
        assert_eq!(
            rank_by_discount(stations, &query(10)),
            Err(RankError::MissingCoordinates { line: 2 })
        );
    }

    #[test]
    fn source_stations_are_not_modified() {
        let original = station(
            1,
            json!({"lat": 40.0, "lon": -73.0, "num_vehicles_available": 2, "predicted_traffic": 2, "capacity": 4}),
        );

        let ranked = rank_by_discount(vec![original.clone()], &query(10)).unwrap();
        assert_eq!(original.discount(), None);
        assert!(original.get("discount").is_none());
        assert!(ranked[0].discount().is_some());
    }
}
