use crate::normalize::{DEFAULT_STEP, TimeBounds, normalize_time};
use crate::parse_time::{TimeInput, parse_time};
use crate::time_of_day::{TimeFormat, TimeOfDay};
use crate::time_range::build_time_range;

/// Settings of a time picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimePickerOptions {
    pub format: TimeFormat,
    pub min_time: Option<TimeOfDay>,
    pub max_time: Option<TimeOfDay>,
    /// Typed times are rounded to this many minutes when committed.
    pub step: u32,
    /// Distance between the listed options. Falls back to `step`.
    pub select_step: Option<u32>,
}

impl Default for TimePickerOptions {
    fn default() -> Self {
        Self {
            format: TimeFormat::default(),
            min_time: Some(TimeOfDay::MIDNIGHT),
            max_time: Some(TimeOfDay::MAX),
            step: DEFAULT_STEP,
            select_step: None,
        }
    }
}

/// An entry of the picker's option list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeOption {
    pub time: TimeOfDay,
    pub label: String,
}

/// The value side of a time picker: what to list, what to show while typing,
/// and what to commit.
///
/// ```
/// # use datepick_core::{TimeOfDay, TimePicker, TimePickerOptions};
/// let picker = TimePicker::new(TimePickerOptions {
///     min_time: Some(TimeOfDay::from_hm(9, 0)),
///     max_time: Some(TimeOfDay::from_hm(17, 0)),
///     step: 15,
///     select_step: Some(60),
///     ..Default::default()
/// });
///
/// assert_eq!(picker.options().len(), 9);
/// assert_eq!(picker.commit("9.4"), Some(TimeOfDay::from_hm(9, 30)));
/// assert_eq!(picker.commit("7am"), Some(TimeOfDay::from_hm(9, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct TimePicker {
    settings: TimePickerOptions,
    options: Vec<TimeOption>,
}

impl TimePicker {
    pub fn new(settings: TimePickerOptions) -> Self {
        let options = build_time_range(settings.min_time, settings.max_time, settings.select_step())
            .into_iter()
            .map(|time| TimeOption {
                time,
                label: time.format(settings.format),
            })
            .collect();
        Self { settings, options }
    }

    pub fn settings(&self) -> &TimePickerOptions {
        &self.settings
    }

    /// Every selectable time, `select_step` apart.
    pub fn options(&self) -> &[TimeOption] {
        &self.options
    }

    /// The options whose label contains `input`, ignoring case. Empty input keeps
    /// them all. Whitespace is matched as typed.
    pub fn filter_options(&self, input: &str) -> Vec<&TimeOption> {
        let needle = input.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Parses `input` and snaps it to the commit step within the bounds.
    ///
    /// `None` only when there is nothing to parse.
    pub fn commit<'a>(&self, input: impl Into<TimeInput<'a>>) -> Option<TimeOfDay> {
        normalize_time(parse_time(input), &self.bounds())
    }

    /// Formats a committed value for the input field.
    pub fn display(&self, value: Option<TimeOfDay>) -> Option<String> {
        value.map(|time| time.format(self.settings.format))
    }

    fn bounds(&self) -> TimeBounds {
        TimeBounds {
            min: self.settings.min_time,
            max: self.settings.max_time,
            step: Some(self.settings.step),
        }
    }
}

impl TimePickerOptions {
    pub fn select_step(&self) -> u32 {
        self.select_step.unwrap_or(self.step)
    }
}
