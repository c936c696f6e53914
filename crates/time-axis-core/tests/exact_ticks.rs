// File: crates/time-axis-core/tests/exact_ticks.rs
// Purpose: Exact tick mode: ordering, dedup, fallback, constraint isolation, clipping.

use time_axis_core::exact::typical_gap;
use time_axis_core::ladder::{Rung, LADDER};
use time_axis_core::{
    compute_ticks, parse_date, AxisOptions, RawTime, Series, TimeAxis, TimeInstant, TimeSource, TimeUnit,
};

fn at(s: &str) -> TimeInstant {
    parse_date(s).expect("valid date")
}

fn values(axis: &TimeAxis) -> Vec<TimeInstant> {
    axis.get_ticks().iter().map(|t| t.value).collect()
}

fn day_series() -> Series {
    Series::with_data(
        "load",
        vec![(at("2024-01-15 06:00"), 1.0), (at("2024-01-15 12:00"), 2.0), (at("2024-01-15 18:00"), 1.5)],
    )
}

#[test]
fn unsorted_input_comes_out_ascending() {
    let opts = AxisOptions::time().with_exact_ticks([
        "2024-01-15 09:00",
        "2024-01-15 08:00",
        "2024-01-15 10:00",
        "2024-01-15 08:30",
    ]);
    let axis = TimeAxis::new(opts);
    assert_eq!(
        values(&axis),
        vec![at("2024-01-15 08:00"), at("2024-01-15 08:30"), at("2024-01-15 09:00"), at("2024-01-15 10:00")]
    );
}

#[test]
fn duplicates_collapse_to_one_tick() {
    let opts = AxisOptions::time().with_exact_ticks([
        RawTime::from("2024-01-15 08:00"),
        RawTime::from(at("2024-01-15 09:00")),
        RawTime::from("2024-01-15T08:00:00Z"),
        RawTime::from("2024-01-15 09:00"),
    ]);
    let ticks = TimeAxis::new(opts).get_ticks();
    assert_eq!(ticks.len(), 2);
    assert!(ticks.windows(2).all(|w| w[0].value < w[1].value));
}

#[test]
fn empty_exact_data_falls_back_to_automatic() {
    let series = day_series();
    let exact = TimeAxis::new(AxisOptions::time().with_exact_ticks(Vec::<RawTime>::new())).with_series(&series);
    let auto = TimeAxis::new(AxisOptions::time()).with_series(&series);

    let got = exact.get_ticks();
    assert!(!got.is_empty());
    assert_eq!(got, auto.get_ticks());
}

#[test]
fn unparseable_exact_data_falls_back_to_automatic() {
    let series = day_series();
    let opts = AxisOptions::time().with_exact_ticks(["not a date", "2024-13-45"]);
    let got = TimeAxis::new(opts).with_series(&series).get_ticks();
    let want = TimeAxis::new(AxisOptions::time()).with_series(&series).get_ticks();
    assert_eq!(got, want);
}

#[test]
fn unparseable_entries_are_dropped() {
    let opts = AxisOptions::time().with_exact_ticks(["2024-01-15 08:00", "garbage", "2024-01-15 09:00"]);
    assert_eq!(values(&TimeAxis::new(opts)), vec![at("2024-01-15 08:00"), at("2024-01-15 09:00")]);
}

#[test]
fn interval_constraints_do_not_affect_exact_ticks() {
    let times = ["2024-01-15 08:00", "2024-01-15 09:00", "2024-01-15 10:00"];
    let opts = AxisOptions::time()
        .with_exact_ticks(times)
        .with_split_number(10)
        .with_intervals(Some(1000), Some(100_000));
    let plain = AxisOptions::time().with_exact_ticks(times);

    let got = values(&TimeAxis::new(opts.clone()));
    assert_eq!(got, times.iter().map(|s| at(s)).collect::<Vec<_>>());
    assert_eq!(TimeAxis::new(opts).get_ticks(), TimeAxis::new(plain).get_ticks());
}

#[test]
fn exact_ticks_clip_to_configured_extent() {
    let hourly = ["07:00", "08:00", "09:00", "10:00", "11:00"].map(|h| format!("2024-01-15 {h}"));
    let opts = AxisOptions::time()
        .with_exact_ticks(hourly)
        .with_bounds(Some("2024-01-15 08:00".into()), Some("2024-01-15 10:00".into()));
    assert_eq!(
        values(&TimeAxis::new(opts)),
        vec![at("2024-01-15 08:00"), at("2024-01-15 09:00"), at("2024-01-15 10:00")]
    );
}

#[test]
fn numeric_epochs_pass_through_unchanged() {
    let now: TimeInstant = 1_700_000_123_456;
    let data = vec![now, now + 3_600_000, now + 7_200_000];
    let opts = AxisOptions::time().with_exact_ticks(data.clone());
    assert_eq!(values(&TimeAxis::new(opts)), data);
}

#[test]
fn every_tick_carries_level_metadata() {
    let opts = AxisOptions::time().with_exact_ticks(["2024-01-15 08:00", "2024-01-15 08:15", "2024-01-15 08:30"]);
    for tick in TimeAxis::new(opts).get_ticks() {
        assert!(tick.time.level < LADDER.len());
        assert!(tick.time.upper_time_unit >= tick.time.lower_time_unit);
    }
}

#[test]
fn quarter_hour_spacing_infers_minute_level() {
    let opts = AxisOptions::time().with_exact_ticks([
        "2024-01-15 08:00",
        "2024-01-15 08:15",
        "2024-01-15 08:30",
        "2024-01-15 08:45",
        "2024-01-15 09:00",
    ]);
    let ticks = TimeAxis::new(opts).get_ticks();
    let time = ticks[0].time;
    assert_eq!(LADDER[time.level], Rung { unit: TimeUnit::Minute, multiple: 15 });
    assert_eq!(time.lower_time_unit, TimeUnit::Minute);
    assert_eq!(time.upper_time_unit, TimeUnit::Hour);
    assert!(ticks.iter().all(|t| t.time == time));
}

#[test]
fn irregular_spacing_uses_median_gap() {
    let opts = AxisOptions::time().with_exact_ticks([
        "2024-01-15 08:00",
        "2024-01-15 08:01",
        "2024-01-15 08:02",
        "2024-01-15 09:02",
    ]);
    let time = TimeAxis::new(opts).get_ticks()[0].time;
    assert_eq!(LADDER[time.level], Rung { unit: TimeUnit::Minute, multiple: 1 });
}

#[test]
fn single_exact_tick_is_day_level() {
    let opts = AxisOptions::time().with_exact_ticks(["2024-01-15 08:00"]);
    let ticks = TimeAxis::new(opts).get_ticks();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].time.lower_time_unit, TimeUnit::Day);
    assert_eq!(ticks[0].time.upper_time_unit, TimeUnit::Month);
    assert_eq!(LADDER[ticks[0].time.level], Rung { unit: TimeUnit::Day, multiple: 1 });
}

#[test]
fn exact_values_widen_series_extent() {
    // Series covers the afternoon only; exact ticks in the morning must survive clipping.
    let series = Series::with_data("s", vec![(at("2024-01-15 12:00"), 1.0), (at("2024-01-15 18:00"), 1.0)]);
    let opts = AxisOptions::time().with_exact_ticks(["2024-01-15 06:00", "2024-01-15 12:00"]);
    let got = TimeAxis::new(opts.clone()).with_series(&series).get_ticks();
    assert_eq!(got.len(), 2);
    assert_eq!(got, compute_ticks(&opts, series.time_extent()));
}

#[test]
fn repeated_calls_are_identical() {
    let opts = AxisOptions::time().with_exact_ticks(["2024-01-15 10:00", "2024-01-15 08:00"]);
    let axis = TimeAxis::new(opts).with_series(&day_series());
    assert_eq!(axis.get_ticks(), axis.get_ticks());
}

#[test]
fn out_of_calendar_epochs_are_dropped() {
    let opts = AxisOptions::time().with_exact_ticks([RawTime::Number(-9e18), RawTime::Number(9e18)]);
    assert!(TimeAxis::new(opts).get_ticks().is_empty());

    let mixed = AxisOptions::time().with_exact_ticks([
        RawTime::Number(-9e18),
        RawTime::from("2024-01-15 08:00"),
        RawTime::from("9000000000000000000"),
        RawTime::from("2024-01-15 09:00"),
    ]);
    assert_eq!(values(&TimeAxis::new(mixed)), vec![at("2024-01-15 08:00"), at("2024-01-15 09:00")]);
}

#[test]
fn widest_gap_saturates() {
    assert_eq!(typical_gap(&[TimeInstant::MIN, TimeInstant::MAX]), Some(TimeInstant::MAX));
    assert_eq!(typical_gap(&[5]), None);
}
