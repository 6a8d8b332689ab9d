//! Property tests for the ranking strategies.

use proptest::prelude::*;
use serde_json::{Map, Value, json};

use super::*;
use crate::geo::{GeoPoint, haversine_miles, within_radius};

fn optional_number(value: Option<f64>) -> Value {
    value.map_or(Value::Null, |v| json!(v))
}

prop_compose! {
    /// A station near `origin`, with every known field sometimes absent.
    fn station_near(origin: GeoPoint, with_coordinates: bool)(
        dlat in -0.3f64..0.3,
        dlon in -0.3f64..0.3,
        has_coordinates in prop::bool::weighted(if with_coordinates { 1.0 } else { 0.8 }),
        priority in prop::option::of(0u32..20),
        predicted in prop::option::of(0u32..50),
        traffic in prop::option::of(0u32..50),
        available in 0u32..15,
        capacity in 0u32..40,
    ) -> Map<String, Value> {
        let mut record = Map::new();
        if has_coordinates {
            record.insert("lat".into(), json!(origin.lat + dlat));
            record.insert("lon".into(), json!(origin.lon + dlon));
        }
        record.insert("maintenance_priority".into(), optional_number(priority.map(f64::from)));
        record.insert("predicted_traffic".into(), optional_number(predicted.map(f64::from)));
        record.insert("traffic".into(), optional_number(traffic.map(f64::from)));
        record.insert("num_vehicles_available".into(), json!(available));
        record.insert("capacity".into(), json!(capacity));
        record
    }
}

prop_compose! {
    fn scenario(with_coordinates: bool)(
        lat in -60.0f64..60.0,
        lon in -170.0f64..170.0,
        radius in 0.0f64..25.0,
        capacity in 0usize..12,
    )(
        records in prop::collection::vec(station_near(GeoPoint::new(lat, lon), with_coordinates), 0..30),
        lat in Just(lat),
        lon in Just(lon),
        radius in Just(radius),
        capacity in Just(capacity),
    ) -> (Vec<Station>, Query) {
        let stations = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Station::from_record(i + 1, record).unwrap())
            .collect();
        let query = Query::new(GeoPoint::new(lat, lon), radius, capacity).unwrap();
        (stations, query)
    }
}

fn distance(query: &Query, station: &Station) -> f64 {
    haversine_miles(query.origin(), station.location().unwrap())
}

proptest! {
    #[test]
    fn results_respect_radius_and_capacity((stations, query) in scenario(true)) {
        let in_range = stations
            .iter()
            .filter(|s| within_radius(s, query.origin(), query.radius_miles()))
            .count();

        for strategy in RankingStrategy::ALL {
            let ranked = strategy.rank(stations.clone(), &query).unwrap();

            prop_assert!(ranked.len() <= query.capacity(), "{}", strategy);
            for station in &ranked {
                prop_assert!(distance(&query, station) <= query.radius_miles(), "{}", strategy);
            }

            if strategy != RankingStrategy::Discount {
                prop_assert_eq!(ranked.len(), in_range.min(query.capacity()), "{}", strategy);
            }
        }
    }

    #[test]
    fn ranking_is_idempotent((stations, query) in scenario(true)) {
        for strategy in RankingStrategy::ALL {
            let first = strategy.rank(stations.clone(), &query).unwrap();
            let second = strategy.rank(stations.clone(), &query).unwrap();
            prop_assert_eq!(first, second, "{}", strategy);
        }
    }

    #[test]
    fn priority_is_non_increasing((stations, query) in scenario(false)) {
        let ranked = rank_by_priority(stations, &query).unwrap();
        for w in ranked.windows(2) {
            let a = w[0].maintenance_priority().unwrap_or(0.0);
            let b = w[1].maintenance_priority().unwrap_or(0.0);
            prop_assert!(a >= b);
        }
    }

    #[test]
    fn traffic_is_non_increasing((stations, query) in scenario(false)) {
        let ranked = rank_by_traffic(stations, &query).unwrap();
        for w in ranked.windows(2) {
            let a = w[0].predicted_traffic().unwrap_or(0.0);
            let b = w[1].predicted_traffic().unwrap_or(0.0);
            prop_assert!(a >= b);
        }
    }

    #[test]
    fn lenient_strategies_never_return_uncoordinated_stations((stations, query) in scenario(false)) {
        for strategy in [RankingStrategy::Priority, RankingStrategy::HighTraffic] {
            let ranked = strategy.rank(stations.clone(), &query).unwrap();
            prop_assert!(ranked.iter().all(|s| s.location().is_some()));
        }
    }

    #[test]
    fn distance_is_non_decreasing((stations, query) in scenario(true)) {
        let ranked = rank_by_distance(stations, &query).unwrap();
        for w in ranked.windows(2) {
            prop_assert!(distance(&query, &w[0]) <= distance(&query, &w[1]));
        }
    }

    #[test]
    fn discounts_are_bounded_and_ordered((stations, query) in scenario(true)) {
        let ranked = rank_by_discount(stations, &query).unwrap();

        for station in &ranked {
            prop_assert!(station.num_vehicles_available().unwrap() > 0.0);
            let discount = station.discount().unwrap();
            prop_assert!((0.0..=MAX_DISCOUNT).contains(&discount));
        }
        for w in ranked.windows(2) {
            prop_assert!(w[0].discount().unwrap() >= w[1].discount().unwrap());
        }
    }
}
