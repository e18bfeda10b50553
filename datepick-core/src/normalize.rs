use crate::time_of_day::TimeOfDay;

/// Step used when none is configured, in minutes.
pub const DEFAULT_STEP: u32 = 30;

/// Limits a committed time must respect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeBounds {
    /// Earliest accepted time. `None` means no lower limit.
    pub min: Option<TimeOfDay>,
    /// Latest accepted time. `None` means no upper limit.
    pub max: Option<TimeOfDay>,
    /// Grid size in minutes. `None` means [`DEFAULT_STEP`].
    pub step: Option<u32>,
}

impl TimeBounds {
    pub fn step(&self) -> u32 {
        self.step.unwrap_or(DEFAULT_STEP)
    }
}

/// Snaps `time` to the step grid, unless it falls outside the bounds.
///
/// - A time before `min` becomes `min`, a time after `max` becomes `max`. These
///   checks happen *before* rounding, so a bound is returned exactly even when it
///   is not on the grid. A time equal to a bound is kept as is.
/// - Otherwise the time is rounded to the nearest multiple of `step` minutes from
///   midnight. An exact half rounds down. A rounded value that lands outside the
///   bounds is pulled back to the bound it crossed.
///
/// Every result is a fixed point, so normalizing twice changes nothing.
///
/// A zero step disables rounding. Rounding up past `23:59` saturates at `23:59`.
///
/// # Examples
///
/// ```
/// # use datepick_core::{normalize_time, TimeBounds, TimeOfDay};
/// let bounds = TimeBounds { step: Some(30), ..Default::default() };
/// let t = |h, m| Some(TimeOfDay::from_hm(h, m));
///
/// assert_eq!(normalize_time(t(7, 40), &bounds), t(7, 30));
/// assert_eq!(normalize_time(t(7, 50), &bounds), t(8, 0));
/// assert_eq!(normalize_time(None, &bounds), None);
/// ```
pub fn normalize_time(time: Option<TimeOfDay>, bounds: &TimeBounds) -> Option<TimeOfDay> {
    let time = time?;

    if let Some(min) = bounds.min.filter(|min| time <= *min) {
        if time < min {
            log::debug!("{time} is before {min}, using lower bound");
        }
        return Some(min);
    }
    if let Some(max) = bounds.max.filter(|max| time >= *max) {
        if time > max {
            log::debug!("{time} is after {max}, using upper bound");
        }
        return Some(max);
    }

    let step = bounds.step();
    if step == 0 {
        return Some(time);
    }

    let minutes = time.minutes();
    let remainder = minutes % step;
    if remainder == 0 {
        return Some(time);
    }
    let rounded = if remainder * 2 > step {
        minutes + (step - remainder)
    } else {
        minutes - remainder
    };
    Some(clamp(TimeOfDay::from_minutes(rounded), bounds))
}

fn clamp(time: TimeOfDay, bounds: &TimeBounds) -> TimeOfDay {
    match (bounds.min, bounds.max) {
        (Some(min), _) if time < min => min,
        (_, Some(max)) if time > max => max,
        _ => time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m)
    }

    fn step(step: u32) -> TimeBounds {
        TimeBounds {
            step: Some(step),
            ..Default::default()
        }
    }

    #[test]
    fn rounds_to_nearest_step() {
        assert_eq!(normalize_time(Some(t(7, 40)), &step(30)), Some(t(7, 30)));
        assert_eq!(normalize_time(Some(t(7, 50)), &step(30)), Some(t(8, 0)));
        assert_eq!(normalize_time(Some(t(7, 7)), &step(15)), Some(t(7, 0)));
        assert_eq!(normalize_time(Some(t(7, 8)), &step(15)), Some(t(7, 15)));
    }

    #[test]
    fn exact_half_rounds_down() {
        assert_eq!(normalize_time(Some(t(7, 15)), &step(30)), Some(t(7, 0)));
    }

    #[test]
    fn missing_step_defaults_to_thirty_minutes() {
        let bounds = TimeBounds::default();
        assert_eq!(bounds.step(), 30);
        assert_eq!(normalize_time(Some(t(10, 20)), &bounds), Some(t(10, 30)));
    }

    #[test]
    fn bounds_are_checked_before_rounding() {
        let bounds = TimeBounds {
            min: Some(t(9, 10)),
            max: Some(t(17, 10)),
            step: Some(30),
        };
        // 17:12 would round down to 17:00, but the bound wins
        assert_eq!(normalize_time(Some(t(17, 12)), &bounds), Some(t(17, 10)));
        assert_eq!(normalize_time(Some(t(8, 59)), &bounds), Some(t(9, 10)));
        // rounding never leaves the bounds
        assert_eq!(normalize_time(Some(t(9, 12)), &bounds), Some(t(9, 10)));
        assert_eq!(normalize_time(Some(t(9, 50)), &bounds), Some(t(10, 0)));
    }

    #[test]
    fn off_grid_bounds_are_kept() {
        let bounds = TimeBounds {
            min: Some(t(8, 15)),
            max: Some(t(18, 45)),
            step: Some(20),
        };
        assert_eq!(normalize_time(Some(t(8, 15)), &bounds), Some(t(8, 15)));
        assert_eq!(normalize_time(Some(t(18, 45)), &bounds), Some(t(18, 45)));
    }

    #[test]
    fn rounding_up_saturates_at_end_of_day() {
        assert_eq!(normalize_time(Some(t(23, 50)), &step(30)), Some(TimeOfDay::MAX));
    }

    #[test]
    fn zero_step_keeps_value() {
        assert_eq!(normalize_time(Some(t(6, 13)), &step(0)), Some(t(6, 13)));
    }

    #[test]
    fn normalizing_is_idempotent() {
        let all_bounds = [
            step(30),
            step(7),
            step(45),
            TimeBounds {
                min: Some(t(8, 5)),
                max: Some(t(18, 55)),
                step: Some(20),
            },
            TimeBounds {
                min: Some(t(8, 15)),
                max: None,
                step: Some(1000),
            },
        ];
        for bounds in &all_bounds {
            for minutes in 0..24 * 60 {
                let once = normalize_time(Some(TimeOfDay::from_minutes(minutes)), bounds);
                let twice = normalize_time(once, bounds);
                assert_eq!(once, twice, "{minutes} with {bounds:?}");
            }
        }
    }
}
