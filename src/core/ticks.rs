//! Tick generation for value and time axes.
//!
//! Value ticks follow the `{1, 2, 5} x 10^k` ladder. Time ticks snap to
//! calendar boundaries (hours, days, weeks, months, years) in UTC.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_unix_seconds, unix_seconds_to_datetime};

/// Target tick count used when rounding a value domain.
pub const NICE_TICK_COUNT: usize = 5;

const MAX_NICE_PASSES: usize = 10;

const SQRT_50: f64 = 7.071_067_811_865_475;
const SQRT_10: f64 = 3.162_277_660_168_379_5;
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Signed tick step for `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results encode `1 / step`
/// for sub-unit steps so that tick values stay exact after rounding.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 {
        return f64::INFINITY;
    }
    let step = (stop - start) / count as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Extends `[start, stop]` outward to multiples of the tick step.
///
/// Iterates until the step stabilizes. A reversed domain is niced and
/// returned reversed.
#[must_use]
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }
    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed { (stop, start) } else { (start, stop) };

    let mut previous_step = None;
    for _ in 0..MAX_NICE_PASSES {
        let step = tick_increment(lo, hi, count);
        if previous_step == Some(step) || step == 0.0 || !step.is_finite() {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        }
        previous_step = Some(step);
    }

    if reversed { (hi, lo) } else { (lo, hi) }
}

/// Round tick values inside `[start, stop]`, in domain order.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };

    let increment = tick_increment(lo, hi, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    if increment > 0.0 {
        let first = (lo / increment).ceil() as i64;
        let last = (hi / increment).floor() as i64;
        for index in first..=last {
            ticks.push(index as f64 * increment);
        }
    } else {
        let inverse = -increment;
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        for index in first..=last {
            ticks.push(index as f64 / inverse);
        }
    }

    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Calendar unit a time tick is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeTickUnit {
    Second,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    pub time: f64,
    pub unit: TimeTickUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimeInterval {
    unit: TimeTickUnit,
    step: u32,
}

impl TimeInterval {
    const fn new(unit: TimeTickUnit, step: u32) -> Self {
        Self { unit, step }
    }

    fn approx_seconds(self) -> f64 {
        let unit_seconds = match self.unit {
            TimeTickUnit::Second => 1.0,
            TimeTickUnit::Hour => HOUR,
            TimeTickUnit::Day => DAY,
            TimeTickUnit::Week => 7.0 * DAY,
            TimeTickUnit::Month => 30.0 * DAY,
            TimeTickUnit::Year => 365.0 * DAY,
        };
        unit_seconds * f64::from(self.step)
    }
}

const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

const TIME_INTERVALS: [TimeInterval; 10] = [
    TimeInterval::new(TimeTickUnit::Hour, 1),
    TimeInterval::new(TimeTickUnit::Hour, 3),
    TimeInterval::new(TimeTickUnit::Hour, 6),
    TimeInterval::new(TimeTickUnit::Hour, 12),
    TimeInterval::new(TimeTickUnit::Day, 1),
    TimeInterval::new(TimeTickUnit::Day, 2),
    TimeInterval::new(TimeTickUnit::Week, 1),
    TimeInterval::new(TimeTickUnit::Month, 1),
    TimeInterval::new(TimeTickUnit::Month, 3),
    TimeInterval::new(TimeTickUnit::Year, 1),
];

/// Calendar-aligned ticks for a time domain in unix seconds.
///
/// The interval is the ladder entry whose duration is closest to
/// `span / count`. Spans shorter than an hour fall back to round seconds;
/// spans longer than `count` years use a round multiple of years.
#[must_use]
pub fn time_ticks(start: f64, stop: f64, count: usize) -> Vec<TimeTick> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    if lo == hi {
        return vec![TimeTick {
            time: lo,
            unit: TimeTickUnit::Second,
        }];
    }

    let target = (hi - lo) / count as f64;
    let interval = select_interval(lo, hi, count, target);
    let times = match interval.unit {
        TimeTickUnit::Second => linear_ticks(lo, hi, count),
        TimeTickUnit::Hour | TimeTickUnit::Day => fixed_step_ticks(lo, hi, interval, 0.0),
        // 1970-01-04 is the first Sunday after the epoch.
        TimeTickUnit::Week => fixed_step_ticks(lo, hi, interval, 3.0 * DAY),
        TimeTickUnit::Month => month_ticks(lo, hi, interval.step),
        TimeTickUnit::Year => year_ticks(lo, hi, interval.step),
    };

    times
        .into_iter()
        .map(|time| TimeTick {
            time,
            unit: interval.unit,
        })
        .collect()
}

fn select_interval(lo: f64, hi: f64, count: usize, target: f64) -> TimeInterval {
    let first = TIME_INTERVALS[0];
    let last = TIME_INTERVALS[TIME_INTERVALS.len() - 1];

    if target < first.approx_seconds() * 0.5 {
        return TimeInterval::new(TimeTickUnit::Second, 1);
    }
    if target > last.approx_seconds() {
        let years = tick_increment(lo / (365.0 * DAY), hi / (365.0 * DAY), count).max(1.0);
        return TimeInterval::new(TimeTickUnit::Year, years.round() as u32);
    }

    let index = TIME_INTERVALS.partition_point(|interval| interval.approx_seconds() < target);
    if index == 0 {
        return first;
    }
    if index >= TIME_INTERVALS.len() {
        return last;
    }
    let below = TIME_INTERVALS[index - 1];
    let above = TIME_INTERVALS[index];
    if target / below.approx_seconds() < above.approx_seconds() / target {
        below
    } else {
        above
    }
}

fn fixed_step_ticks(lo: f64, hi: f64, interval: TimeInterval, offset: f64) -> Vec<f64> {
    let step = interval.approx_seconds();
    let first = ((lo - offset) / step).ceil() as i64;
    let last = ((hi - offset) / step).floor() as i64;
    (first..=last)
        .map(|index| offset + index as f64 * step)
        .collect()
}

fn month_ticks(lo: f64, hi: f64, step: u32) -> Vec<f64> {
    let Some(start) = unix_seconds_to_datetime(lo) else {
        return Vec::new();
    };
    let step = step.max(1);
    let mut year = start.year();
    let mut month0 = start.month0();
    month0 -= month0 % step;

    let mut ticks = Vec::new();
    loop {
        let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
            break;
        };
        let time = date_to_unix_seconds(date);
        if time > hi {
            break;
        }
        if time >= lo {
            ticks.push(time);
        }
        month0 += step;
        if month0 >= 12 {
            year += (month0 / 12) as i32;
            month0 %= 12;
        }
    }
    ticks
}

fn year_ticks(lo: f64, hi: f64, step: u32) -> Vec<f64> {
    let (Some(start), Some(end)) = (unix_seconds_to_datetime(lo), unix_seconds_to_datetime(hi))
    else {
        return Vec::new();
    };
    let step = step.max(1) as i32;
    let first_year = start.year() - start.year().rem_euclid(step);

    (first_year..=end.year())
        .step_by(step as usize)
        .filter_map(|year| Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single())
        .map(|time| time.timestamp() as f64)
        .filter(|time| *time >= lo && *time <= hi)
        .collect()
}
