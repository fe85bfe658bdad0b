use model::TripRecord;
use schemars::JsonSchema;
use serde::Serialize;

/// One page of a list, `page` being 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Trips whose line, origin or destination contain `query`, ignoring case.
/// An empty query matches every trip.
pub fn search<'a>(records: &'a [TripRecord], query: &str) -> Vec<&'a TripRecord> {
    let query = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            [
                &record.line_identifier,
                &record.origin_name,
                &record.destination_name,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

/// Cuts `items` into pages of `page_size` and returns page `page`. Pages past
/// the end, page 0 and a page size of 0 are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    };
    let items = match page.checked_sub(1) {
        Some(index) if page_size > 0 => items
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .collect(),
        _ => Vec::new(),
    };
    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use utility::id::Id;

    use super::*;

    fn trip(id: &str, line: &str, origin: &str, destination: &str) -> TripRecord {
        TripRecord {
            id: Id::new(id.to_owned()),
            line_identifier: line.to_owned(),
            origin_name: origin.to_owned(),
            destination_name: destination.to_owned(),
            created_at: NaiveDate::from_ymd_opt(2025, 9, 5)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap(),
            emission_kg: 1.0,
            distance_km: 5.0,
            emission_saving_kg: 0.5,
        }
    }

    fn history() -> Vec<TripRecord> {
        vec![
            trip("1", "874C-10", "Lapa", "Consolação"),
            trip("2", "8705-10", "Pinheiros", "Sé"),
            trip("3", "715M-10", "Butantã", "Lapa"),
        ]
    }

    #[test]
    fn search_matches_any_field_ignoring_case() {
        let trips = history();
        let ids = |found: Vec<&TripRecord>| {
            found.iter().map(|trip| trip.id.raw()).collect::<Vec<_>>()
        };
        assert_eq!(ids(search(&trips, "lapa")), vec!["1", "3"]);
        assert_eq!(ids(search(&trips, "874c")), vec!["1"]);
        assert_eq!(ids(search(&trips, "CONSOLAÇÃO")), vec!["1"]);
        assert_eq!(ids(search(&trips, "")), vec!["1", "2", "3"]);
        assert!(search(&trips, "paulista").is_empty());
    }

    #[test]
    fn pages_are_one_based() {
        let page = paginate((1..=7).collect::<Vec<_>>(), 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 3);

        let last = paginate((1..=7).collect::<Vec<_>>(), 3, 3);
        assert_eq!(last.items, vec![7]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        assert!(paginate(vec![1, 2, 3], 0, 2).items.is_empty());
        assert!(paginate(vec![1, 2, 3], 5, 2).items.is_empty());
        let no_size = paginate(vec![1, 2, 3], 1, 0);
        assert!(no_size.items.is_empty());
        assert_eq!(no_size.total_pages, 0);
        assert_eq!(paginate(Vec::<u8>::new(), 1, 10).total_pages, 0);
    }
}
