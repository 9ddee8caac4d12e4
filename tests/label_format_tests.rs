use case_chart::api::{
    format_axis_value, format_count, format_date, format_month_year, format_time_tick, to_ordinal,
};
use case_chart::core::primitives::date_to_unix_seconds;
use case_chart::core::{TimeTick, TimeTickUnit};
use chrono::{NaiveDate, TimeZone, Utc};

fn tick(year: i32, month: u32, day: u32, unit: TimeTickUnit) -> TimeTick {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
    TimeTick {
        time: date_to_unix_seconds(date),
        unit,
    }
}

#[test]
fn dates_are_day_month_year_without_padding() {
    let time = Utc
        .with_ymd_and_hms(2020, 3, 5, 0, 0, 0)
        .single()
        .expect("valid time");
    assert_eq!(format_date(time), "5/3/2020");
    assert_eq!(format_month_year(time), "Mar 20");
}

#[test]
fn counts_use_two_decimal_suffixes() {
    assert_eq!(format_count(999.0), "999");
    assert_eq!(format_count(12.5), "12.5");
    assert_eq!(format_count(1_000.0), "1.00k");
    assert_eq!(format_count(1_500.0), "1.50k");
    assert_eq!(format_count(12_340.0), "12.34k");
    assert_eq!(format_count(1_000_000.0), "1.00mill");
    assert_eq!(format_count(2_500_000.0), "2.50mill");
}

#[test]
fn ordinals_handle_teens() {
    let cases = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (101, "101st"),
        (111, "111th"),
    ];
    for (n, expected) in cases {
        assert_eq!(to_ordinal(n), expected, "ordinal of {n}");
    }
}

#[test]
fn axis_values_are_compact() {
    assert_eq!(format_axis_value(0.0), "0");
    assert_eq!(format_axis_value(250.0), "250");
    assert_eq!(format_axis_value(2_500.0), "2.5k");
    assert_eq!(format_axis_value(20_000.0), "20k");
    assert_eq!(format_axis_value(1_200_000.0), "1.2M");
    assert_eq!(format_axis_value(f64::NAN), "nan");
}

#[test]
fn time_ticks_are_labelled_by_unit() {
    assert_eq!(
        format_time_tick(tick(2020, 3, 1, TimeTickUnit::Month)),
        "March"
    );
    assert_eq!(
        format_time_tick(tick(2021, 1, 1, TimeTickUnit::Month)),
        "2021"
    );
    assert_eq!(format_time_tick(tick(2022, 1, 1, TimeTickUnit::Year)), "2022");
    assert_eq!(format_time_tick(tick(2020, 3, 5, TimeTickUnit::Day)), "Mar 05");
}
