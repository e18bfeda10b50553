use crate::time_of_day::TimeOfDay;

/// Generates the selectable times from `min` to `max` (both inclusive), `step`
/// minutes apart.
///
/// A missing `min` means `00:00`, a missing `max` means `23:59`. The first element
/// is always `min`. If `min` is after `max` the result is empty; a zero `step`
/// yields `min` alone.
///
/// # Arguments
///
/// * `min` - The first time of the list.
/// * `max` - The latest time the list may reach.
/// * `step` - The distance between two consecutive times, in minutes.
///
/// # Examples
///
/// ```
/// # use datepick_core::{build_time_range, TimeOfDay};
/// let times = build_time_range(
///     Some(TimeOfDay::from_hm(9, 0)),
///     Some(TimeOfDay::from_hm(10, 0)),
///     30,
/// );
///
/// assert_eq!(times.len(), 3);
/// assert_eq!(times[0], TimeOfDay::from_hm(9, 0));
/// assert_eq!(times[1], TimeOfDay::from_hm(9, 30));
/// assert_eq!(times[2], TimeOfDay::from_hm(10, 0));
/// ```
pub fn build_time_range(
    min: Option<TimeOfDay>,
    max: Option<TimeOfDay>,
    step: u32,
) -> Vec<TimeOfDay> {
    let start = min.unwrap_or(TimeOfDay::MIDNIGHT).minutes();
    let end = max.unwrap_or(TimeOfDay::MAX).minutes();

    if start > end {
        return Vec::new();
    }
    if step == 0 {
        log::debug!("zero step, time range holds the start only");
        return vec![TimeOfDay::from_minutes(start)];
    }

    (start..=end)
        .step_by(step as usize)
        .map(TimeOfDay::from_minutes)
        .collect()
}
