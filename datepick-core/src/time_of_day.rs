use chrono::{NaiveTime, Timelike};
use std::fmt;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

const MINUTES_PER_HOUR: u32 = 60;
const LAST_MINUTE_OF_DAY: u32 = 23 * MINUTES_PER_HOUR + 59;

/// A time of day with minute precision, stored as minutes since midnight.
///
/// The value is always in `[0, 1439]`, i.e. `00:00` to `23:59`. There is no date
/// component and no seconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// `00:00`
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    /// `23:59`, the latest representable time of day.
    pub const MAX: TimeOfDay = TimeOfDay(LAST_MINUTE_OF_DAY);

    /// Builds a time from an hour/minute pair.
    ///
    /// Out of range parts are clamped instead of rejected:
    /// - `minute > 59` becomes 59.
    /// - `hour > 23` becomes `23:59`, whatever the minute was.
    ///
    /// ```
    /// # use datepick_core::TimeOfDay;
    /// assert_eq!(TimeOfDay::from_hm(7, 30).to_string(), "07:30");
    /// assert_eq!(TimeOfDay::from_hm(7, 75).to_string(), "07:59");
    /// assert_eq!(TimeOfDay::from_hm(31, 0), TimeOfDay::MAX);
    /// ```
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        if hour > 23 {
            return Self::MAX;
        }
        Self(hour * MINUTES_PER_HOUR + minute.min(59))
    }

    /// Builds a time from minutes since midnight, saturating at `23:59`.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes.min(LAST_MINUTE_OF_DAY))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Formats the time as `HH:MM` or `hh:mm am`.
    ///
    /// ```
    /// # use datepick_core::{TimeFormat, TimeOfDay};
    /// let t = TimeOfDay::from_hm(19, 5);
    /// assert_eq!(t.format(TimeFormat::TwentyFourHour), "19:05");
    /// assert_eq!(t.format(TimeFormat::AmPm), "07:05 pm");
    /// ```
    pub fn format(self, format: TimeFormat) -> String {
        match format {
            TimeFormat::TwentyFourHour => format!("{:02}:{:02}", self.hour(), self.minute()),
            TimeFormat::AmPm => {
                let meridiem = if self.hour() < 12 {
                    Meridiem::Am
                } else {
                    Meridiem::Pm
                };
                let hour = match self.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{:02}:{:02} {}", hour, self.minute(), meridiem.marker())
            }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Drops seconds and sub-second parts.
impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_hm(time.hour(), time.minute())
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// How a time of day is displayed to the user.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TimeFormat {
    /// `HH:MM`, e.g. `07:05` or `19:30`.
    #[default]
    #[strum(to_string = "24h")]
    TwentyFourHour,
    /// `hh:mm am`, e.g. `07:30 pm`.
    #[strum(to_string = "am-pm", serialize = "ampm")]
    AmPm,
}

/// The `am`/`pm` marker of a 12-hour clock time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// `"am"` or `"pm"`.
    pub fn marker(self) -> &'static str {
        self.into()
    }
}
