use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The weekday shown in the first column of a calendar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeekStart {
    #[default]
    #[strum(to_string = "monday", serialize = "mon")]
    Monday,
    #[strum(to_string = "tuesday", serialize = "tue")]
    Tuesday,
    #[strum(to_string = "wednesday", serialize = "wed")]
    Wednesday,
    #[strum(to_string = "thursday", serialize = "thu")]
    Thursday,
    #[strum(to_string = "friday", serialize = "fri")]
    Friday,
    #[strum(to_string = "saturday", serialize = "sat")]
    Saturday,
    #[strum(to_string = "sunday", serialize = "sun")]
    Sunday,
}

/// English two letter weekday names, Monday first.
const SHORT_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Zero based column of `weekday` in a week starting on `self`.
    ///
    /// ```
    /// # use chrono::Weekday;
    /// # use datepick_core::WeekStart;
    /// assert_eq!(WeekStart::Monday.column_of(Weekday::Wed), 2);
    /// assert_eq!(WeekStart::Sunday.column_of(Weekday::Sun), 0);
    /// assert_eq!(WeekStart::Sunday.column_of(Weekday::Sat), 6);
    /// ```
    pub fn column_of(self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_monday() + 7 - self.weekday().num_days_from_monday()) % 7
    }

    /// Two letter weekday names in column order.
    pub fn short_labels(self) -> Vec<String> {
        weekday_labels(&SHORT_LABELS, self)
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => WeekStart::Monday,
            Weekday::Tue => WeekStart::Tuesday,
            Weekday::Wed => WeekStart::Wednesday,
            Weekday::Thu => WeekStart::Thursday,
            Weekday::Fri => WeekStart::Friday,
            Weekday::Sat => WeekStart::Saturday,
            Weekday::Sun => WeekStart::Sunday,
        }
    }
}

/// Rotates seven Monday-first weekday names so they line up with the columns of a
/// grid whose weeks start on `week_start`.
///
/// The names come from whatever locale the caller uses; nothing here is
/// translated.
///
/// ```
/// # use datepick_core::{weekday_labels, WeekStart};
/// let names = ["lu", "ma", "mi", "ju", "vi", "sá", "do"];
/// assert_eq!(
///     weekday_labels(&names, WeekStart::Sunday),
///     ["do", "lu", "ma", "mi", "ju", "vi", "sá"]
/// );
/// ```
pub fn weekday_labels<S: AsRef<str>>(monday_first: &[S; 7], week_start: WeekStart) -> Vec<String> {
    let shift = week_start.weekday().num_days_from_monday() as usize;
    (0..7)
        .map(|i| monday_first[(i + shift) % 7].as_ref().to_string())
        .collect()
}

/// The first day of the month `date` belongs to.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The last day of the month `date` belongs to.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let back = week_start.column_of(date.weekday());
    date.checked_sub_days(Days::new(back as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Generates a vector of `NaiveDate`s, inclusive of the start and end dates.
/// If `start` is after `end`, the resulting vector will be empty.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use datepick_core::dates::get_dates_in_range;
/// let start_date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let end_date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
///
/// let dates = get_dates_in_range(start_date, end_date);
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 8, 17).unwrap());
/// ```
pub fn get_dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::date;

    #[test]
    fn month_edges() {
        assert_eq!(first_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2025, 2, 1)), date(2025, 2, 28));
        assert_eq!(last_of_month(date(2025, 12, 31)), date(2025, 12, 31));
    }

    #[test]
    fn week_start_is_respected() {
        // 2025-10-01 is a Wednesday
        let d = date(2025, 10, 1);
        assert_eq!(start_of_week(d, WeekStart::Monday), date(2025, 9, 29));
        assert_eq!(start_of_week(d, WeekStart::Sunday), date(2025, 9, 28));
        assert_eq!(start_of_week(d, WeekStart::Wednesday), d);
    }

    #[test]
    fn week_start_from_str() {
        assert_eq!("monday".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert_eq!("Sun".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert_eq!("SATURDAY".parse::<WeekStart>().unwrap(), WeekStart::Saturday);
        assert!("someday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn short_labels_follow_week_start() {
        assert_eq!(
            WeekStart::Monday.short_labels(),
            ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        );
        assert_eq!(
            WeekStart::Sunday.short_labels(),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
    }

    #[test]
    fn week_start_round_trips_through_weekday() {
        for start in [WeekStart::Monday, WeekStart::Thursday, WeekStart::Sunday] {
            assert_eq!(WeekStart::from(start.weekday()), start);
        }
    }

    #[test]
    fn range_is_empty_when_reversed() {
        assert!(get_dates_in_range(date(2025, 8, 17), date(2025, 8, 15)).is_empty());
    }
}
