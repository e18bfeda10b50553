mod cli_modes;
mod render;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use cli_modes::{CliMode, CliModeResult, month_mode, options_mode, parse_mode};
use datepick_core::{Config, TimeFormat, WeekStart, parse_time};
use render::{ColorMode, RenderOptions, Renderer};
use std::process::ExitCode;

/// Loose time input and month grids for date pickers.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("month_mode").args(["month", "min_date", "max_date", "select"]).multiple(true)),
    group(ArgGroup::new("options_mode").args(["options", "filter"]).multiple(true)),
    group(ArgGroup::new("parse_mode").args(["text"])),
)]
pub struct Cli {
    /// Shows a month calendar (e.g. `datepick --month 2025-10`). Defaults to the current month.
    #[arg(long, num_args = 0..=1, value_parser = parse_month, conflicts_with_all = ["options_mode", "parse_mode"])]
    pub month: Option<Option<NaiveDate>>,
    /// Days before this date are disabled (e.g. `--min-date 2025-10-05`).
    #[arg(long)]
    pub min_date: Option<NaiveDate>,
    /// Days after this date are disabled.
    #[arg(long)]
    pub max_date: Option<NaiveDate>,
    /// One or two selected dates. With two, the days between them are highlighted.
    #[arg(long, num_args = 1..=2)]
    pub select: Option<Vec<NaiveDate>>,
    /// First column of the calendar (e.g. `monday`, `sun`).
    #[arg(long, env = "DATEPICK_WEEK_START")]
    pub week_start: Option<WeekStart>,

    /// Lists the selectable times.
    #[arg(long, conflicts_with = "parse_mode")]
    pub options: bool,
    /// Only lists times containing this text (e.g. `--filter 14`).
    #[arg(long)]
    pub filter: Option<String>,

    /// Minutes typed times are rounded to.
    #[arg(long)]
    pub step: Option<u32>,
    /// Minutes between listed times. Defaults to `--step`.
    #[arg(long)]
    pub select_step: Option<u32>,
    /// Earliest accepted time (e.g. `8`, `7.5`, `9am`).
    #[arg(long)]
    pub min_time: Option<String>,
    /// Latest accepted time.
    #[arg(long)]
    pub max_time: Option<String>,
    /// Time display: `24h` or `am-pm`.
    #[arg(long, env = "DATEPICK_TIME_FORMAT")]
    pub time_format: Option<TimeFormat>,

    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// A time to interpret (e.g. `datepick 7.5`, `datepick 12:40 am`).
    #[arg()]
    pub text: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("datepick: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = apply_overrides(Config::load(), &cli)?;
    log::debug!("effective config: {config:?}");

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.resolve(),
        time_format: config.time_format,
    }));

    let modes: [CliMode; 3] = [month_mode, options_mode, parse_mode];
    for mode in modes {
        if let CliModeResult::Finish = mode(&cli, &renderer, &config)? {
            return Ok(());
        }
    }

    renderer.print_info("Nothing to do. Try `datepick 7.5`, `datepick --options` or `datepick --month`.");
    Ok(())
}

/// Command line flags win over the config file.
fn apply_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    if let Some(step) = cli.step {
        config.step = step;
    }
    if cli.select_step.is_some() {
        config.select_step = cli.select_step;
    }
    if let Some(min) = &cli.min_time {
        config.min_time = parse_time(min).ok_or_else(|| anyhow!("--min-time is empty"))?;
    }
    if let Some(max) = &cli.max_time {
        config.max_time = parse_time(max).ok_or_else(|| anyhow!("--max-time is empty"))?;
    }
    if let Some(format) = cli.time_format {
        config.time_format = format;
    }
    if let Some(week_start) = cli.week_start {
        config.week_start = week_start;
    }
    Ok(config)
}

/// Accepts `YYYY-MM` or a full `YYYY-MM-DD`.
fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .map_err(|_| format!("expected YYYY-MM or YYYY-MM-DD, got {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use datepick_core::TimeOfDay;

    #[test]
    fn month_accepts_year_and_month() {
        let d = parse_month("2025-10").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        let d = parse_month("2025-10-17").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 10, 17).unwrap());
        assert!(parse_month("october").is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "datepick",
            "--step",
            "15",
            "--min-time",
            "8am",
            "--time-format",
            "am-pm",
            "--week-start",
            "sun",
            "9.5",
        ]);
        let config = apply_overrides(Config::default(), &cli).unwrap();
        assert_eq!(config.step, 15);
        assert_eq!(config.min_time, TimeOfDay::from_hm(8, 0));
        assert_eq!(config.time_format, TimeFormat::AmPm);
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(cli.text, vec!["9.5"]);
    }

    #[test]
    fn month_flag_value_is_optional() {
        let cli = Cli::parse_from(["datepick", "--month"]);
        assert_eq!(cli.month, Some(None));
        let cli = Cli::parse_from(["datepick", "--month", "2025-02", "--select", "2025-02-03", "2025-02-10"]);
        assert_eq!(cli.month, Some(NaiveDate::from_ymd_opt(2025, 2, 1)));
        assert_eq!(cli.select.map(|s| s.len()), Some(2));
    }

    #[test]
    fn modes_conflict() {
        assert!(Cli::try_parse_from(["datepick", "--options", "7.5"]).is_err());
        assert!(Cli::try_parse_from(["datepick", "--month", "--options"]).is_err());
    }
}
