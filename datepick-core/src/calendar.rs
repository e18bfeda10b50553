//! Month grids for a date picker.
//!
//! A [`CalendarGrid`] is a flat list of cells, seven per row. Blank cells pad the
//! first and last week so each day sits under its weekday column:
//!
//! ```text
//!  Mo Tu We Th Fr Sa Su
//!         1  2  3  4  5
//!   6  7  8  9 10 11 12
//!  ...
//! ```
//!
//! Building the cells and computing their flags are two separate steps. The cells
//! are built once per month; [`CalendarGrid::annotate`] refreshes the
//! `disabled`/`in_range` flags in place whenever the bounds or the selection
//! change.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::clock::Clock;
use crate::dates::{WeekStart, first_of_month, get_dates_in_range, last_of_month, start_of_week};

const DAYS_PER_WEEK: usize = 7;

/// One real day of the displayed month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    date: NaiveDate,
    date_string: String,
    weekday: u32,
    disabled: bool,
    in_range: bool,
}

impl DayCell {
    fn new(date: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            date,
            date_string: date.format("%Y-%m-%d").to_string(),
            weekday: week_start.column_of(date.weekday()),
            disabled: false,
            in_range: false,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self) -> &str {
        &self.date_string
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Zero based month, January is 0.
    pub fn month(&self) -> u32 {
        self.date.month0()
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Zero based column, relative to the grid's week start.
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Outside the min/max bounds of the last [`CalendarGrid::annotate`].
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Strictly between the two selected dates of the last [`CalendarGrid::annotate`].
    pub fn in_range(&self) -> bool {
        self.in_range
    }
}

/// A position in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridCell {
    Day(DayCell),
    /// Padding before the 1st or after the last day. Never selectable.
    Blank,
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }
}

/// Selectable dates, both ends inclusive. A missing end is unbounded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Bounds from full timestamps, truncated to the start of their day.
    pub fn from_datetimes(min: Option<NaiveDateTime>, max: Option<NaiveDateTime>) -> Self {
        Self {
            min: min.map(|dt| dt.date()),
            max: max.map(|dt| dt.date()),
        }
    }

    pub fn excludes(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

/// The two ends of a selection, earliest first. `None` unless exactly two dates
/// are selected.
fn selected_range(selection: &[NaiveDate]) -> Option<(NaiveDate, NaiveDate)> {
    match selection {
        [a, b] => Some((*a.min(b), *a.max(b))),
        _ => None,
    }
}

/// The day cells of one month, padded to whole weeks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarGrid {
    first_day: NaiveDate,
    week_start: WeekStart,
    leading_blanks: usize,
    cells: Vec<GridCell>,
}

impl CalendarGrid {
    /// Builds the cells for the month containing `anchor`.
    ///
    /// All flags start out `false`; call [`annotate`](Self::annotate) to set them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use datepick_core::{CalendarGrid, WeekStart};
    /// // October 2025 starts on a Wednesday
    /// let anchor = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
    /// let grid = CalendarGrid::build(anchor, WeekStart::Monday);
    ///
    /// assert_eq!(grid.leading_blanks(), 2);
    /// assert_eq!(grid.len(), 35);
    /// assert_eq!(grid.days().count(), 31);
    /// ```
    pub fn build(anchor: NaiveDate, week_start: WeekStart) -> Self {
        let first_day = first_of_month(anchor);
        let last_day = last_of_month(anchor);
        let leading_blanks = (first_day - start_of_week(first_day, week_start)).num_days() as usize;

        let days = get_dates_in_range(first_day, last_day);
        let filled = leading_blanks + days.len();
        let total = filled.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(total);
        cells.resize(leading_blanks, GridCell::Blank);
        cells.extend(
            days.into_iter()
                .map(|date| GridCell::Day(DayCell::new(date, week_start))),
        );
        cells.resize(total, GridCell::Blank);

        Self {
            first_day,
            week_start,
            leading_blanks,
            cells,
        }
    }

    /// Builds the grid for the clock's current month.
    pub fn current(clock: &impl Clock, week_start: WeekStart) -> Self {
        Self::build(clock.today(), week_start)
    }

    /// Recomputes `disabled` and `in_range` for every day, in place.
    ///
    /// - `disabled`: the date is before `bounds.min` or after `bounds.max`.
    /// - `in_range`: `selection` holds exactly two dates and the day lies strictly
    ///   between them, in whichever order they were picked. The two ends themselves
    ///   are not in range.
    ///
    /// The cells are neither reallocated nor rebuilt.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use datepick_core::{CalendarGrid, DateBounds, WeekStart};
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 10, day).unwrap();
    /// let mut grid = CalendarGrid::build(d(1), WeekStart::Monday);
    ///
    /// grid.annotate(&DateBounds::new(Some(d(3)), None), &[d(10), d(5)]);
    ///
    /// assert!(grid.cell_for(d(2)).unwrap().disabled());
    /// assert!(grid.cell_for(d(6)).unwrap().in_range());
    /// assert!(!grid.cell_for(d(5)).unwrap().in_range());
    /// ```
    pub fn annotate(&mut self, bounds: &DateBounds, selection: &[NaiveDate]) {
        let range = selected_range(selection);
        for cell in self.cells.iter_mut() {
            if let GridCell::Day(day) = cell {
                day.disabled = bounds.excludes(day.date);
                day.in_range = range.is_some_and(|(lo, hi)| lo < day.date && day.date < hi);
            }
        }
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The real days, in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    /// The cells split into weeks of seven.
    pub fn rows(&self) -> std::slice::Chunks<'_, GridCell> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Blanks before the 1st of the month.
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// The first day of the displayed month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// The cell for `date`, if it belongs to the displayed month.
    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.first_day.year() || date.month() != self.first_day.month() {
            return None;
        }
        let index = self.leading_blanks + date.day0() as usize;
        self.cells.get(index).and_then(GridCell::as_day)
    }
}

/// Builds the grid for `anchor`'s month and annotates it in one go.
pub fn build_grid(
    anchor: NaiveDate,
    week_start: WeekStart,
    bounds: &DateBounds,
    selection: &[NaiveDate],
) -> CalendarGrid {
    let mut grid = CalendarGrid::build(anchor, week_start);
    grid.annotate(bounds, selection);
    grid
}
