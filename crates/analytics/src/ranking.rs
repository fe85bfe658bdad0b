//! Leaderboards of lines, routes and saved trips.
//!
//! Two rankings exist and they are deliberately separate operations: potential
//! trips are ranked by efficiency (emission per km, lower is better) while
//! saved trips are ranked by the emission they saved (higher is better).
//! Both sorts are stable, so exact ties keep their input order, and ranks are
//! dense and 1-based. Ranks are never patched: any change to the underlying
//! collection recomputes the whole ranking.

use std::cmp::Ordering;

use itertools::Itertools;
use model::{RankedEntry, RankedTrip, RankingEntry, TripRecord};
use utility::id::Id;

/// Smaller first, NaN after everything else.
fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Larger first, NaN after everything else.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Ranks entries by emission per km, ascending. Entries without distance are
/// infinitely inefficient and end up last, even behind NaN efficiencies.
pub fn rank_by_efficiency<K, I>(entries: I) -> Vec<RankedEntry<K>>
where
    I: IntoIterator<Item = RankingEntry<K>>,
{
    entries
        .into_iter()
        .map(|entry| (entry.efficiency(), entry))
        .sorted_by(|(a, a_entry), (b, b_entry)| {
            (a_entry.distance_km == 0.0)
                .cmp(&(b_entry.distance_km == 0.0))
                .then_with(|| ascending(*a, *b))
        })
        .enumerate()
        .map(|(index, (efficiency, entry))| RankedEntry {
            identity: entry.identity,
            emission_kg: entry.emission_kg,
            distance_km: entry.distance_km,
            efficiency,
            rank: index + 1,
        })
        .collect()
}

/// Recomputes an efficiency ranking from scratch, e.g. after entries were
/// removed from it.
pub fn re_rank<K>(ranked: Vec<RankedEntry<K>>) -> Vec<RankedEntry<K>> {
    rank_by_efficiency(ranked.into_iter().map(RankedEntry::into_entry))
}

/// Ranks saved trips by the emission they saved, descending.
pub fn rank_by_saving<I>(trips: I) -> Vec<RankedTrip>
where
    I: IntoIterator<Item = TripRecord>,
{
    trips
        .into_iter()
        .sorted_by(|a, b| descending(a.emission_saving_kg, b.emission_saving_kg))
        .enumerate()
        .map(|(index, trip)| RankedTrip {
            rank: index + 1,
            trip,
        })
        .collect()
}

/// Recomputes a savings ranking from scratch.
pub fn re_rank_by_saving(ranked: Vec<RankedTrip>) -> Vec<RankedTrip> {
    rank_by_saving(ranked.into_iter().map(|ranked| ranked.trip))
}

/// An efficiency ranking together with the collection it was computed from.
#[derive(Debug, Clone)]
pub struct EfficiencyLeaderboard<K> {
    source: Vec<RankingEntry<K>>,
    ranked: Vec<RankedEntry<K>>,
}

impl<K: Clone> EfficiencyLeaderboard<K> {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RankingEntry<K>>,
    {
        let source = entries.into_iter().collect::<Vec<_>>();
        let ranked = rank_by_efficiency(source.iter().cloned());
        Self { source, ranked }
    }

    pub fn ranked(&self) -> &[RankedEntry<K>] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn insert(&mut self, entry: RankingEntry<K>) {
        self.source.push(entry);
        self.recompute();
    }

    /// Removes the first entry with the given identity and re-ranks the rest.
    pub fn remove(&mut self, identity: &K) -> Option<RankingEntry<K>>
    where
        K: PartialEq,
    {
        let position = self
            .source
            .iter()
            .position(|entry| &entry.identity == identity)?;
        let removed = self.source.remove(position);
        self.recompute();
        Some(removed)
    }

    fn recompute(&mut self) {
        self.ranked = rank_by_efficiency(self.source.iter().cloned());
    }
}

/// The savings ranking of the user's saved trips.
#[derive(Debug, Clone)]
pub struct SavingsLeaderboard {
    source: Vec<TripRecord>,
    ranked: Vec<RankedTrip>,
}

impl SavingsLeaderboard {
    pub fn new<I>(trips: I) -> Self
    where
        I: IntoIterator<Item = TripRecord>,
    {
        let source = trips.into_iter().collect::<Vec<_>>();
        let ranked = rank_by_saving(source.iter().cloned());
        Self { source, ranked }
    }

    pub fn ranked(&self) -> &[RankedTrip] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Rank of the trip, 1 being the largest saving.
    pub fn rank_of(&self, id: &Id<TripRecord>) -> Option<usize> {
        self.ranked
            .iter()
            .find(|ranked| &ranked.trip.id == id)
            .map(|ranked| ranked.rank)
    }

    pub fn insert(&mut self, trip: TripRecord) {
        self.source.push(trip);
        self.recompute();
    }

    pub fn remove(&mut self, id: &Id<TripRecord>) -> Option<TripRecord> {
        let position = self.source.iter().position(|trip| &trip.id == id)?;
        let removed = self.source.remove(position);
        self.recompute();
        Some(removed)
    }

    fn recompute(&mut self) {
        self.ranked = rank_by_saving(self.source.iter().cloned());
    }
}
