use chrono::NaiveDate;

/// Shorthand for a calendar date that is known to be valid.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
