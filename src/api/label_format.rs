use chrono::{DateTime, Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::primitives::{f64_to_decimal, unix_seconds_to_datetime};
use crate::core::{TimeTick, TimeTickUnit};

/// `D/M/YYYY` without zero padding, as shown in tooltips.
#[must_use]
pub fn format_date(time: DateTime<Utc>) -> String {
    format!("{}/{}/{}", time.day(), time.month(), time.year())
}

/// Case count with a `k` / `mill` suffix and exactly two decimals.
///
/// Counts below one thousand are printed as-is.
#[must_use]
pub fn format_count(value: f64) -> String {
    if !value.is_finite() || value < 1_000.0 {
        return format!("{value}");
    }
    let (scaled, suffix) = if value < 1_000_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value / 1_000_000.0, "mill")
    };
    format!("{}{suffix}", fixed_two_decimals(scaled))
}

/// English ordinal: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
#[must_use]
pub fn to_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Abbreviated month and two-digit year, e.g. `Mar 20`.
#[must_use]
pub fn format_month_year(time: DateTime<Utc>) -> String {
    time.format("%b %y").to_string()
}

/// Compact left-axis label: `0`, `250`, `2.5k`, `1.2M`.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if magnitude >= 1_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value, "")
    };
    match f64_to_decimal(scaled, "axis value") {
        Ok(decimal) => format!(
            "{}{suffix}",
            decimal
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        ),
        Err(_) => format!("{scaled}{suffix}"),
    }
}

/// Label for a calendar-aligned time tick, picked by the tick's unit.
#[must_use]
pub fn format_time_tick(tick: TimeTick) -> String {
    let Some(time) = unix_seconds_to_datetime(tick.time) else {
        return "nan".to_owned();
    };
    let pattern = match tick.unit {
        TimeTickUnit::Second => "%H:%M:%S",
        TimeTickUnit::Hour => "%H:%M",
        TimeTickUnit::Day | TimeTickUnit::Week => "%b %d",
        TimeTickUnit::Month if time.month() == 1 => "%Y",
        TimeTickUnit::Month => "%B",
        TimeTickUnit::Year => "%Y",
    };
    time.format(pattern).to_string()
}

fn fixed_two_decimals(value: f64) -> String {
    match f64_to_decimal(value, "count") {
        Ok(decimal) => {
            let rounded: Decimal =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        Err(_) => format!("{value:.2}"),
    }
}
