use std::collections::BTreeMap;

use chrono::NaiveDate;
use model::{DateWindow, StatisticsPoint, TripRecord, TripTotals};

/// Sums emission and distance of the given records per calendar day of the
/// window.
///
/// Days without records get no point at all, and the points are ordered by
/// date. An empty window yields no points.
pub fn aggregate<'a, I>(records: I, window: DateWindow) -> Vec<StatisticsPoint>
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    if window.is_empty() {
        return Vec::new();
    }

    let mut by_date: BTreeMap<NaiveDate, StatisticsPoint> = BTreeMap::new();
    for record in records {
        let date = record.date();
        if !window.contains(date) {
            continue;
        }
        let point = by_date.entry(date).or_insert_with(|| StatisticsPoint {
            date,
            total_emission_kg: 0.0,
            total_distance_km: 0.0,
        });
        point.total_emission_kg += record.emission_kg;
        point.total_distance_km += record.distance_km;
    }
    by_date.into_values().collect()
}

/// Per-day statistics of all records between `start` and `end`, both
/// inclusive.
pub fn aggregate_by_day(
    records: &[TripRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<StatisticsPoint> {
    aggregate(records, DateWindow::new(start, end))
}

/// Per-day statistics restricted to the records of one line.
pub fn aggregate_line_by_day(
    records: &[TripRecord],
    line_identifier: &str,
    window: DateWindow,
) -> Vec<StatisticsPoint> {
    aggregate(
        records
            .iter()
            .filter(|record| record.line_identifier == line_identifier),
        window,
    )
}

/// Grand totals of the records inside the window.
pub fn totals(records: &[TripRecord], window: DateWindow) -> TripTotals {
    records
        .iter()
        .filter(|record| window.contains(record.date()))
        .fold(TripTotals::default(), |totals, record| TripTotals {
            trips: totals.trips + 1,
            emission_kg: totals.emission_kg + record.emission_kg,
            distance_km: totals.distance_km + record.distance_km,
            emission_saving_kg: totals.emission_saving_kg + record.emission_saving_kg,
        })
}
