//! Providers for "today" and "now".
//!
//! Nothing in the crate reads the system clock on its own; callers pass a
//! [`Clock`] wherever the current day or time matters.

use chrono::{Local, NaiveDate};

use crate::time_of_day::TimeOfDay;

pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn now(&self) -> TimeOfDay;
}

/// The local wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> TimeOfDay {
        Local::now().time().into()
    }
}

/// A clock stuck at a given moment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock {
    pub today: NaiveDate,
    pub now: TimeOfDay,
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> TimeOfDay {
        self.now
    }
}
