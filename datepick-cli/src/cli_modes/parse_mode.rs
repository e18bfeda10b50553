use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use datepick_core::{Config, TimePicker, parse_time};

/// Interprets the free text and shows the value a picker would commit.
pub fn parse_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    if cli.text.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }

    let input = cli.text.join(" ");
    let picker = TimePicker::new(config.time_picker_options());
    let parsed = parse_time(&input);
    let committed = picker.commit(&input);

    match (parsed, committed) {
        (Some(parsed), Some(committed)) => renderer.print_time_line(&input, parsed, committed),
        _ => renderer.print_info(&format!("Could not read a time from {input:?}.")),
    }
    Ok(CliModeResult::Finish)
}
