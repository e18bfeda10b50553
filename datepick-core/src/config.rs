use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

use crate::dates::WeekStart;
use crate::normalize::DEFAULT_STEP;
use crate::parse_time::parse_time;
use crate::time_of_day::{TimeFormat, TimeOfDay};
use crate::time_picker::TimePickerOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Typed times are rounded to this many minutes. Default is 30.
    pub step: u32,
    /// Distance between listed times. Falls back to `step`.
    pub select_step: Option<u32>,
    /// Earliest selectable time. Accepts anything the time parser does (e.g. "8", "7.5", "9am").
    pub min_time: TimeOfDay,
    /// Latest selectable time. Default is 23:59.
    pub max_time: TimeOfDay,
    pub time_format: TimeFormat,
    /// First column of the calendar. Default is Monday.
    pub week_start: WeekStart,
    /// Seven weekday names, Monday first. Rotated to match `week_start`.
    pub weekday_labels: [String; 7],
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    step: Option<u32>,
    select_step: Option<u32>,
    min_time: Option<String>,
    max_time: Option<String>,
    /// "24h" or "am-pm"
    time_format: Option<String>,
    /// e.g. "monday", "sun"
    week_start: Option<String>,
    /// Optional list:
    /// weekday_labels = ["lu", "ma", "mi", "ju", "vi", "sá", "do"]
    weekday_labels: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            select_step: None,
            min_time: TimeOfDay::MIDNIGHT,
            max_time: TimeOfDay::MAX,
            time_format: TimeFormat::default(),
            week_start: WeekStart::default(),
            weekday_labels: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"].map(String::from),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and
    /// apply defaults. A config file that cannot be read, parsed or understood is
    /// reported and ignored.
    pub fn load() -> Self {
        Self::load_first(&Self::config_file_paths())
    }

    /// Load the config at `path`. Unlike [`load`](Self::load), read and parse
    /// errors are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Self::from_file_config(file_config)
    }

    /// The time picker settings this config describes.
    pub fn time_picker_options(&self) -> TimePickerOptions {
        TimePickerOptions {
            format: self.time_format,
            min_time: Some(self.min_time),
            max_time: Some(self.max_time),
            step: self.step,
            select_step: self.select_step,
        }
    }

    /// Weekday names in the column order of the calendar.
    pub fn column_labels(&self) -> Vec<String> {
        crate::dates::weekday_labels(&self.weekday_labels, self.week_start)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let time_format = match file_config.time_format.as_deref() {
            Some(s) => s
                .parse::<TimeFormat>()
                .with_context(|| format!("unknown time_format {s:?}"))?,
            None => defaults.time_format,
        };
        let week_start = match file_config.week_start.as_deref() {
            Some(s) => s
                .parse::<WeekStart>()
                .with_context(|| format!("unknown week_start {s:?}"))?,
            None => defaults.week_start,
        };
        let weekday_labels = match file_config.weekday_labels {
            Some(labels) => <[String; 7]>::try_from(labels)
                .map_err(|l| anyhow!("weekday_labels needs 7 names, got {}", l.len()))?,
            None => defaults.weekday_labels,
        };

        Ok(Self {
            step: file_config.step.unwrap_or(defaults.step),
            select_step: file_config.select_step,
            min_time: Self::parse_bound(file_config.min_time.as_deref())
                .unwrap_or(defaults.min_time),
            max_time: Self::parse_bound(file_config.max_time.as_deref())
                .unwrap_or(defaults.max_time),
            time_format,
            week_start,
            weekday_labels,
        })
    }

    /// Bounds go through the same permissive parser as typed input.
    fn parse_bound(time: Option<&str>) -> Option<TimeOfDay> {
        time.map(str::trim).and_then(|s| parse_time(s))
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("datepick")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("datepick").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Loads the first of `paths` that exists, falling back to the defaults on
    /// any error.
    fn load_first(paths: &[PathBuf]) -> Self {
        let Some(path) = paths.iter().find(|path| path.exists()) else {
            return Self::default();
        };
        log::debug!("reading config from {}", path.display());
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("ignoring config file: {e:#}");
            Self::default()
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Write;

    fn t(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m)
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("datepick")
                .join("config.toml");
            let expected_native = b.config_dir().join("datepick").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let fc = super::Config::parse_file("").unwrap();
        let config = super::Config::from_file_config(fc).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.step, 30);
        assert_eq!(config.max_time, TimeOfDay::MAX);
    }

    #[test]
    fn parse_file_accepts_all_fields() {
        let toml = r#"
            step = 15
            select_step = 60
            min_time = "8am"
            max_time = "18.5"
            time_format = "am-pm"
            week_start = "sunday"
            weekday_labels = ["lu", "ma", "mi", "ju", "vi", "sá", "do"]
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        let config = super::Config::from_file_config(fc).unwrap();
        assert_eq!(config.step, 15);
        assert_eq!(config.select_step, Some(60));
        assert_eq!(config.min_time, t(8, 0));
        assert_eq!(config.max_time, t(18, 30));
        assert_eq!(config.time_format, TimeFormat::AmPm);
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(
            config.column_labels(),
            ["do", "lu", "ma", "mi", "ju", "vi", "sá"]
        );
    }

    #[test]
    fn unknown_week_start_is_an_error() {
        let fc = super::Config::parse_file(r#"week_start = "someday""#).unwrap();
        let err = super::Config::from_file_config(fc).unwrap_err();
        assert!(format!("{err:#}").contains("someday"));
    }

    #[test]
    fn weekday_labels_need_seven_entries() {
        let fc = super::Config::parse_file(r#"weekday_labels = ["a", "b"]"#).unwrap();
        let err = super::Config::from_file_config(fc).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn picker_options_follow_config() {
        let config = Config {
            step: 10,
            select_step: None,
            min_time: t(9, 0),
            ..Default::default()
        };
        let options = config.time_picker_options();
        assert_eq!(options.step, 10);
        assert_eq!(options.select_step(), 10);
        assert_eq!(options.min_time, Some(t(9, 0)));
    }

    #[test]
    fn load_falls_back_to_defaults_on_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "week_start = \"someday\"\n").unwrap();
        assert_eq!(Config::load_first(&[path.clone()]), Config::default());

        fs::write(&path, "weekday_labels = [\"a\"]\n").unwrap();
        assert_eq!(Config::load_first(&[path.clone()]), Config::default());

        fs::write(&path, "step = [").unwrap();
        assert_eq!(Config::load_first(&[path]), Config::default());
    }

    #[test]
    fn load_uses_the_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("config.toml");
        fs::write(&present, "step = 20\n").unwrap();
        let config = Config::load_first(&[missing.clone(), present]);
        assert_eq!(config.step, 20);
        assert_eq!(Config::load_first(&[missing]), Config::default());
    }

    #[test]
    fn load_from_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "step = 45\nweek_start = \"sat\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.step, 45);
        assert_eq!(config.week_start, WeekStart::Saturday);
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "step = \"often\"").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().starts_with("reading"));
    }
}
