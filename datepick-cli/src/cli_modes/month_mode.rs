use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use datepick_core::{CalendarGrid, Clock, Config, DateBounds, SystemClock};

/// Prints one month with disabled and in-range days marked.
pub fn month_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    let wants_month = cli.month.is_some()
        || cli.min_date.is_some()
        || cli.max_date.is_some()
        || cli.select.is_some();
    if !wants_month {
        return Ok(CliModeResult::NothingToDo);
    }

    let clock = SystemClock;
    let selection = cli.select.clone().unwrap_or_default();
    // Without an explicit month, show the first selected date's month, then today's.
    let mut grid = match cli.month.flatten().or_else(|| selection.first().copied()) {
        Some(anchor) => CalendarGrid::build(anchor, config.week_start),
        None => CalendarGrid::current(&clock, config.week_start),
    };
    grid.annotate(&DateBounds::new(cli.min_date, cli.max_date), &selection);

    renderer.print_month(&grid, &config.column_labels(), &selection, clock.today());
    Ok(CliModeResult::Finish)
}
