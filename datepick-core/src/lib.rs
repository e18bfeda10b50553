pub mod calendar;
pub mod clock;
pub mod compare;
pub mod config;
pub mod dates;
pub mod normalize;
pub mod parse_time;
pub mod render;
pub mod time_of_day;
pub mod time_picker;
pub mod time_range;

#[cfg(test)]
#[path = "tests/common.rs"]
pub(crate) mod tests;

pub use calendar::{CalendarGrid, DateBounds, DayCell, GridCell, build_grid};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{same_month, same_time, same_year};
pub use config::Config;
pub use dates::{WeekStart, weekday_labels};
pub use normalize::{DEFAULT_STEP, TimeBounds, normalize_time};
pub use parse_time::{TimeInput, parse_time};
pub use time_of_day::{Meridiem, TimeFormat, TimeOfDay};
pub use time_picker::{TimeOption, TimePicker, TimePickerOptions};
pub use time_range::build_time_range;
