use chrono::{Days, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Totals of one calendar day. Only days with at least one trip get a point,
/// so a missing day means "no data" rather than "no emission".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatisticsPoint {
    pub date: NaiveDate,
    #[serde(rename = "total_emission")]
    pub total_emission_kg: f64,
    #[serde(rename = "total_distance")]
    pub total_distance_km: f64,
}

/// An inclusive range of calendar days. A window without an end, or whose
/// start lies after its end, contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// The `days_range` days starting at `start`, the way the backend's
    /// statistics endpoints interpret `start_date` and `days_range`.
    pub fn from_days(start: NaiveDate, days_range: u32) -> Self {
        let end = days_range.checked_sub(1).map(|offset| {
            start
                .checked_add_days(Days::new(u64::from(offset)))
                .unwrap_or(NaiveDate::MAX)
        });
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end.map_or(true, |end| self.start > end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.end
            .is_some_and(|end| date >= self.start && date <= end)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripTotals {
    pub trips: usize,
    pub emission_kg: f64,
    pub distance_km: f64,
    pub emission_saving_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_range_is_inclusive() {
        let window = DateWindow::from_days(date(2025, 10, 15), 3);
        assert_eq!(window.end, Some(date(2025, 10, 17)));
        let window = DateWindow::from_days(date(2025, 10, 31), 1);
        assert_eq!(window.end, Some(date(2025, 10, 31)));
        assert!(window.contains(date(2025, 10, 31)));
        assert!(!window.contains(date(2025, 11, 1)));
    }

    #[test]
    fn zero_days_is_empty() {
        let window = DateWindow::from_days(date(2025, 10, 15), 0);
        assert!(window.is_empty());
        assert!(!window.contains(date(2025, 10, 15)));

        let earliest = DateWindow::from_days(NaiveDate::MIN, 0);
        assert!(earliest.is_empty());
        assert!(!earliest.contains(NaiveDate::MIN));
    }

    #[test]
    fn inverted_window_is_empty() {
        let window = DateWindow::new(date(2025, 10, 17), date(2025, 10, 15));
        assert!(window.is_empty());
        assert!(!window.contains(date(2025, 10, 16)));
        assert!(!DateWindow::new(date(2025, 10, 15), date(2025, 10, 15)).is_empty());
    }

    #[test]
    fn point_uses_backend_field_names() {
        let point = StatisticsPoint {
            date: date(2025, 7, 21),
            total_emission_kg: 15.0,
            total_distance_km: 10.0,
        };
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"date":"2025-07-21","total_emission":15.0,"total_distance":10.0}"#
        );
    }
}
