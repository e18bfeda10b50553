use chrono::{Datelike, NaiveDate};

use crate::time_of_day::TimeOfDay;

/// `true` if both dates exist and fall in the same month of the same year.
pub fn same_month(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.year() == b.year() && a.month() == b.month(),
        _ => false,
    }
}

/// `true` if both dates exist and fall in the same year.
pub fn same_year(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.year() == b.year(),
        _ => false,
    }
}

/// `true` if both times exist and show the same hour and minute.
pub fn same_time(a: Option<TimeOfDay>, b: Option<TimeOfDay>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::date;

    #[test]
    fn month_needs_matching_year() {
        assert!(same_month(Some(date(2025, 8, 1)), Some(date(2025, 8, 31))));
        assert!(!same_month(Some(date(2025, 8, 1)), Some(date(2024, 8, 1))));
        assert!(!same_month(Some(date(2025, 8, 1)), None));
    }

    #[test]
    fn year_ignores_month() {
        assert!(same_year(Some(date(2025, 1, 1)), Some(date(2025, 12, 31))));
        assert!(!same_year(Some(date(2025, 1, 1)), Some(date(2026, 1, 1))));
        assert!(!same_year(None, None));
    }

    #[test]
    fn time_compares_hour_and_minute() {
        let a = TimeOfDay::from_hm(9, 30);
        assert!(same_time(Some(a), Some(TimeOfDay::from_hm(9, 30))));
        assert!(!same_time(Some(a), Some(TimeOfDay::from_hm(9, 31))));
        assert!(!same_time(Some(a), None));
    }
}
