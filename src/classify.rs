use crate::models::StatsSnapshot;

/// Outcome of comparing the two most recent statistics snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDecision {
    /// Fewer than two snapshots recorded, nothing to compare yet
    NoPriorHistory,
    Unchanged,
    NewApartmentsAvailable,
    ApartmentsSold,
    ApartmentsReturnedToMarket,
    TotalDecreased,
}

impl ChangeDecision {
    /// Whether this decision warrants a notification e-mail.
    pub fn is_reportable(self) -> bool {
        !matches!(
            self,
            ChangeDecision::NoPriorHistory | ChangeDecision::Unchanged
        )
    }

    /// Subject-line wording for a reportable decision.
    pub fn label(self) -> &'static str {
        match self {
            ChangeDecision::NewApartmentsAvailable => "New apartments available",
            ChangeDecision::ApartmentsSold => "Some apartment(s) sold",
            ChangeDecision::ApartmentsReturnedToMarket => "Some apartments returned to market",
            ChangeDecision::TotalDecreased => "Total number of apartments decreased",
            ChangeDecision::NoPriorHistory | ChangeDecision::Unchanged => "No changes",
        }
    }
}

/// Compares the two most recent snapshots of `history` and decides
/// what kind of change, if any, happened since the previous run.
///
/// Comparisons are numeric over the integer fields. Totals first,
/// then sold counts; a stable total with a non-increasing sold count
/// folds into [`ChangeDecision::ApartmentsReturnedToMarket`].
pub fn classify(history: &[StatsSnapshot]) -> ChangeDecision {
    if history.len() < 2 {
        return ChangeDecision::NoPriorHistory;
    }

    let last = &history[history.len() - 1];
    let before_last = &history[history.len() - 2];

    if (last.total, last.free, last.sold) == (before_last.total, before_last.free, before_last.sold)
    {
        return ChangeDecision::Unchanged;
    }

    if last.total > before_last.total {
        ChangeDecision::NewApartmentsAvailable
    } else if last.total == before_last.total {
        if last.sold > before_last.sold {
            ChangeDecision::ApartmentsSold
        } else {
            ChangeDecision::ApartmentsReturnedToMarket
        }
    } else {
        ChangeDecision::TotalDecreased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot(day: u32, total: u32, free: u32, sold: u32) -> StatsSnapshot {
        StatsSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            total,
            free,
            sold,
        }
    }

    #[test]
    fn empty_history_has_no_prior() {
        assert_eq!(classify(&[]), ChangeDecision::NoPriorHistory);
    }

    #[test]
    fn single_snapshot_has_no_prior() {
        let history = vec![snapshot(1, 74, 14, 60)];
        assert_eq!(classify(&history), ChangeDecision::NoPriorHistory);
    }

    #[test]
    fn identical_snapshots_are_unchanged() {
        let history = vec![snapshot(1, 74, 14, 60), snapshot(2, 74, 14, 60)];
        assert_eq!(classify(&history), ChangeDecision::Unchanged);
    }

    #[test]
    fn total_increase_means_new_apartments() {
        let history = vec![snapshot(1, 74, 14, 60), snapshot(2, 80, 20, 60)];
        assert_eq!(classify(&history), ChangeDecision::NewApartmentsAvailable);
    }

    #[test]
    fn stable_total_with_more_sold_means_apartments_sold() {
        let history = vec![snapshot(1, 74, 14, 60), snapshot(2, 74, 13, 61)];
        assert_eq!(classify(&history), ChangeDecision::ApartmentsSold);
    }

    #[test]
    fn stable_total_with_fewer_sold_means_returned_to_market() {
        let history = vec![snapshot(1, 74, 14, 60), snapshot(2, 74, 15, 59)];
        assert_eq!(classify(&history), ChangeDecision::ApartmentsReturnedToMarket);
    }

    #[test]
    fn total_decrease_is_its_own_category() {
        let history = vec![snapshot(1, 74, 14, 60), snapshot(2, 70, 10, 60)];
        assert_eq!(classify(&history), ChangeDecision::TotalDecreased);
    }

    #[test]
    fn totals_compare_numerically_not_lexically() {
        // "80" < "9" as strings; 80 > 9 as numbers.
        let history = vec![snapshot(1, 9, 2, 7), snapshot(2, 80, 73, 7)];
        assert_eq!(classify(&history), ChangeDecision::NewApartmentsAvailable);
    }

    #[test]
    fn only_the_last_two_snapshots_matter() {
        let history = vec![
            snapshot(1, 10, 5, 5),
            snapshot(2, 74, 14, 60),
            snapshot(3, 74, 14, 60),
        ];
        assert_eq!(classify(&history), ChangeDecision::Unchanged);
    }

    #[test]
    fn reportable_excludes_quiet_decisions() {
        assert!(!ChangeDecision::NoPriorHistory.is_reportable());
        assert!(!ChangeDecision::Unchanged.is_reportable());
        assert!(ChangeDecision::NewApartmentsAvailable.is_reportable());
        assert!(ChangeDecision::TotalDecreased.is_reportable());
    }
}
