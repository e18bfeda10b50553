use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::time_of_day::{Meridiem, TimeOfDay};

/// One or two leading ASCII digits. Greedy, so `"14"` yields 14 and `"7:"` yields 7.
static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}").expect("valid regex"));

/// Anything [`parse_time`] accepts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimeInput<'a> {
    /// No value at all (`None` or an empty string).
    Empty,
    /// Free text typed by a user.
    Text(&'a str),
    /// An already parsed time, returned as is.
    Time(TimeOfDay),
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(s: &'a str) -> Self {
        if s.is_empty() {
            TimeInput::Empty
        } else {
            TimeInput::Text(s)
        }
    }
}

impl<'a> From<&'a String> for TimeInput<'a> {
    fn from(s: &'a String) -> Self {
        TimeInput::from(s.as_str())
    }
}

impl From<TimeOfDay> for TimeInput<'_> {
    fn from(time: TimeOfDay) -> Self {
        TimeInput::Time(time)
    }
}

impl From<NaiveTime> for TimeInput<'_> {
    fn from(time: NaiveTime) -> Self {
        TimeInput::Time(time.into())
    }
}

impl<'a, T> From<Option<T>> for TimeInput<'a>
where
    T: Into<TimeInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TimeInput::Empty)
    }
}

/// The character splitting hours from minutes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MinuteSeparator {
    Colon,
    Comma,
    Dot,
}

impl MinuteSeparator {
    /// `.` wins over `,`, which wins over the default `:`.
    fn detect(s: &str) -> Self {
        if s.contains('.') {
            MinuteSeparator::Dot
        } else if s.contains(',') {
            MinuteSeparator::Comma
        } else {
            MinuteSeparator::Colon
        }
    }

    fn as_char(self) -> char {
        match self {
            MinuteSeparator::Colon => ':',
            MinuteSeparator::Comma => ',',
            MinuteSeparator::Dot => '.',
        }
    }

    /// With `,` and `.` the digits after the separator are a fraction of an hour.
    fn is_fractional(self) -> bool {
        self != MinuteSeparator::Colon
    }
}

/// Parses loosely formatted user input into a [`TimeOfDay`].
///
/// Parsing is deliberately permissive: it never fails on malformed text. Garbage
/// degrades to `00:00`, out of range values are clamped (minutes to 59, hours past
/// 23 to `23:59`). Only empty input yields `None`.
///
/// Understood shapes, case-insensitive:
/// - **Hour only**: `7`, `14`.
/// - **Colon minutes**: `7:30`, `07:30`, `14:2` (the single digit is a literal minute).
/// - **Fractional hours**: `7,5` and `7.5` mean 07:30, `14.15` means 14:09.
///   One digit after the separator counts tenths of an hour, two digits count
///   hundredths.
/// - **12-hour clock**: `7am`, `7pm`, `12am`, `12pm`, `12:40 am`, `08:10 PM`.
///
/// An already parsed [`TimeOfDay`] is returned unchanged.
///
/// # Examples
///
/// ```
/// # use datepick_core::{parse_time, TimeOfDay};
/// assert_eq!(parse_time("7.5"), Some(TimeOfDay::from_hm(7, 30)));
/// assert_eq!(parse_time("7:5"), Some(TimeOfDay::from_hm(7, 5)));
/// assert_eq!(parse_time("11pm"), Some(TimeOfDay::from_hm(23, 0)));
/// assert_eq!(parse_time(""), None);
/// ```
pub fn parse_time<'a>(input: impl Into<TimeInput<'a>>) -> Option<TimeOfDay> {
    match input.into() {
        TimeInput::Empty => None,
        TimeInput::Time(time) => Some(time),
        TimeInput::Text(text) => Some(parse_time_text(text)),
    }
}

fn parse_time_text(text: &str) -> TimeOfDay {
    let lower = text.to_ascii_lowercase();

    let meridiem = Meridiem::iter().find(|m| lower.contains(m.marker()));
    let separator = MinuteSeparator::detect(&lower);

    let (mut hours, _) = leading_number(&lower);
    let mut minutes = 0;

    if let Some(pos) = lower.find(separator.as_char()) {
        let (value, two_digits) = leading_number(&lower[pos + 1..]);
        minutes = match (separator.is_fractional(), two_digits) {
            (false, _) => value,
            (true, true) => value * 60 / 100,
            (true, false) => value * 6,
        };
    }

    match meridiem {
        Some(Meridiem::Am) if hours == 12 => hours = 0,
        Some(Meridiem::Pm) if hours != 12 => hours += 12,
        _ => {}
    }

    if minutes > 59 || hours > 23 {
        log::debug!("clamping parsed time {hours}:{minutes} from {text:?}");
    }
    TimeOfDay::from_hm(hours, minutes)
}

/// Returns the one or two digit number at the start of `s` (0 if there is none),
/// and whether it had two digits.
fn leading_number(s: &str) -> (u32, bool) {
    match LEADING_DIGITS.find(s) {
        Some(m) => (m.as_str().parse().unwrap_or(0), m.as_str().len() == 2),
        None => (0, false),
    }
}
