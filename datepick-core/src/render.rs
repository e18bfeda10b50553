//! Pure text rendering helpers for a month grid.
//!
//! Month title:  `October 2025`
//! Weekday row:  `Mo Tu We Th Fr Sa Su`
//! Day row:      `       1  2  3  4  5`

use chrono::NaiveDate;

use crate::calendar::GridCell;

/// Width of one rendered column, without the separating space.
pub const CELL_WIDTH: usize = 2;

/// `October 2025`
pub fn format_month_title(first_day: NaiveDate) -> String {
    first_day.format("%B %Y").to_string()
}

/// Weekday names, each padded or cut to the cell width.
pub fn format_weekday_header<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| {
            let short: String = label.as_ref().chars().take(CELL_WIDTH).collect();
            format!("{short:>CELL_WIDTH$}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The day number right aligned, or spaces for a blank.
pub fn format_cell(cell: &GridCell) -> String {
    match cell.as_day() {
        Some(day) => format!("{:>CELL_WIDTH$}", day.day()),
        None => " ".repeat(CELL_WIDTH),
    }
}

/// A week of cells on one line.
pub fn format_row(row: &[GridCell]) -> String {
    row.iter().map(format_cell).collect::<Vec<_>>().join(" ")
}
