//! The set of ranking strategies.

use std::fmt;

use crate::domain::Station;

use super::combined::rank_by_combined_score;
use super::discount::rank_by_discount;
use super::distance::rank_by_distance;
use super::error::RankError;
use super::priority::rank_by_priority;
use super::query::Query;
use super::traffic::rank_by_traffic;

/// How to order the stations near a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingStrategy {
    /// Highest `maintenance_priority` first
    #[default]
    Priority,
    /// Highest `predicted_traffic` first
    HighTraffic,
    /// Closest first
    Distance,
    /// Highest combined distance/priority/traffic score first
    CombinedScore,
    /// Largest computed discount first
    Discount,
}

impl RankingStrategy {
    /// Every strategy, in a fixed order.
    pub const ALL: [RankingStrategy; 5] = [
        RankingStrategy::Priority,
        RankingStrategy::HighTraffic,
        RankingStrategy::Distance,
        RankingStrategy::CombinedScore,
        RankingStrategy::Discount,
    ];

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            RankingStrategy::Priority => "priority",
            RankingStrategy::HighTraffic => "high-traffic",
            RankingStrategy::Distance => "by-distance",
            RankingStrategy::CombinedScore => "combined-scoring",
            RankingStrategy::Discount => "discounts",
        }
    }

    /// Whether this strategy rejects stations without coordinates instead
    /// of skipping them.
    pub fn requires_coordinates(self) -> bool {
        !matches!(
            self,
            RankingStrategy::Priority | RankingStrategy::HighTraffic
        )
    }

    /// Filter `stations` to the query radius, order them, and keep at most
    /// `query.capacity()` of them.
    pub fn rank(self, stations: Vec<Station>, query: &Query) -> Result<Vec<Station>, RankError> {
        match self {
            RankingStrategy::Priority => rank_by_priority(stations, query),
            RankingStrategy::HighTraffic => rank_by_traffic(stations, query),
            RankingStrategy::Distance => rank_by_distance(stations, query),
            RankingStrategy::CombinedScore => rank_by_combined_score(stations, query),
            RankingStrategy::Discount => rank_by_discount(stations, query),
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
