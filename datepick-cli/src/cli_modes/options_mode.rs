use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use datepick_core::{Clock, Config, SystemClock, TimeBounds, TimePicker, normalize_time};

/// Lists the picker's options, optionally narrowed down by `--filter`.
pub fn options_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    if !cli.options && cli.filter.is_none() {
        return Ok(CliModeResult::NothingToDo);
    }

    let picker = TimePicker::new(config.time_picker_options());
    let filter = cli.filter.as_deref().unwrap_or_default();
    let options = picker.filter_options(filter);
    if options.is_empty() {
        renderer.print_info(&format!("No times match {filter:?}."));
        return Ok(CliModeResult::Finish);
    }

    // Highlight the option closest to the current time.
    let settings = picker.settings();
    let current = normalize_time(
        Some(SystemClock.now()),
        &TimeBounds {
            min: settings.min_time,
            max: settings.max_time,
            step: Some(settings.select_step()),
        },
    );
    renderer.print_options(&options, current);
    Ok(CliModeResult::Finish)
}
