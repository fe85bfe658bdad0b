use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::trip::TripRecord;

/// Input of an efficiency ranking: anything with an emission and a distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry<K> {
    pub identity: K,
    pub emission_kg: f64,
    pub distance_km: f64,
}

impl<K> RankingEntry<K> {
    pub fn new(identity: K, emission_kg: f64, distance_km: f64) -> Self {
        Self {
            identity,
            emission_kg,
            distance_km,
        }
    }

    /// Emission per kilometre. Zero distance is infinitely inefficient
    /// instead of an error, so such entries sink to the bottom of a ranking.
    pub fn efficiency(&self) -> f64 {
        if self.distance_km == 0.0 {
            f64::INFINITY
        } else {
            self.emission_kg / self.distance_km
        }
    }
}

/// An entry with its position in a ranking. Ranks are 1-based and only valid
/// for the collection they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<K> {
    pub identity: K,
    pub emission_kg: f64,
    pub distance_km: f64,
    pub efficiency: f64,
    pub rank: usize,
}

impl<K> RankedEntry<K> {
    pub fn into_entry(self) -> RankingEntry<K> {
        RankingEntry::new(self.identity, self.emission_kg, self.distance_km)
    }
}

/// A saved trip with its position in the savings ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedTrip {
    pub rank: usize,
    #[serde(flatten)]
    pub trip: TripRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_is_infinitely_inefficient() {
        assert_eq!(RankingEntry::new("a", 10.0, 5.0).efficiency(), 2.0);
        assert_eq!(RankingEntry::new("b", 0.0, 0.0).efficiency(), f64::INFINITY);
        assert_eq!(RankingEntry::new("c", 3.0, 0.0).efficiency(), f64::INFINITY);
    }
}
