use chrono::NaiveDate;

use crate::models::{Apartment, StatsSnapshot, Status};

/// Reduces the scraped apartment list to a dated aggregate.
pub fn aggregate(apartments: &[Apartment], date: NaiveDate) -> StatsSnapshot {
    let total = apartments.len() as u32;
    let free = apartments
        .iter()
        .filter(|apartment| apartment.status == Status::Free)
        .count() as u32;

    StatsSnapshot {
        date,
        total,
        free,
        sold: total - free,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apartment(name: &str, status: Status) -> Apartment {
        Apartment {
            name: name.to_string(),
            size: 40.0,
            rooms: 2,
            floor: 0,
            status,
            link: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn counts_free_and_sold() {
        let apartments = vec![
            apartment("M1", Status::Free),
            apartment("M2", Status::Sold),
            apartment("M3", Status::Sold),
        ];

        let snapshot = aggregate(&apartments, date());
        assert_eq!(snapshot.date, date());
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.free, 1);
        assert_eq!(snapshot.sold, 2);
    }

    #[test]
    fn empty_listing_aggregates_to_zeroes() {
        let snapshot = aggregate(&[], date());
        assert_eq!((snapshot.total, snapshot.free, snapshot.sold), (0, 0, 0));
    }

    #[test]
    fn total_is_free_plus_sold() {
        let apartments: Vec<Apartment> = (0..7)
            .map(|i| {
                apartment(
                    &format!("M{i}"),
                    if i % 3 == 0 { Status::Free } else { Status::Sold },
                )
            })
            .collect();

        let snapshot = aggregate(&apartments, date());
        assert_eq!(snapshot.total, snapshot.free + snapshot.sold);
    }
}
