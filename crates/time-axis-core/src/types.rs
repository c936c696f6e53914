// File: crates/time-axis-core/src/types.rs
// Summary: Shared tick model (instants, units, levels, ticks, extents) and duration constants.

use serde::Serialize;

/// Epoch milliseconds (UTC).
pub type TimeInstant = i64;

pub const ONE_SECOND: i64 = 1_000;
pub const ONE_MINUTE: i64 = 60 * ONE_SECOND;
pub const ONE_HOUR: i64 = 60 * ONE_MINUTE;
pub const ONE_DAY: i64 = 24 * ONE_HOUR;

/// Time granularity, ordered finest to coarsest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    HalfMonth,
    Month,
    Quarter,
    Year,
}

impl TimeUnit {
    /// Units a label formatter can use as primary context.
    pub const LABEL_UNITS: [TimeUnit; 6] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::HalfMonth => "half-month",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
        }
    }

    /// Nominal length of one unit in milliseconds. Calendar units are approximate.
    pub const fn nominal_ms(self) -> i64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => ONE_SECOND,
            TimeUnit::Minute => ONE_MINUTE,
            TimeUnit::Hour => ONE_HOUR,
            TimeUnit::Day => ONE_DAY,
            TimeUnit::HalfMonth => 15 * ONE_DAY,
            TimeUnit::Month => 30 * ONE_DAY,
            TimeUnit::Quarter => 91 * ONE_DAY,
            TimeUnit::Year => 365 * ONE_DAY,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Granularity metadata attached to every tick.
/// Contract: `upper_time_unit >= lower_time_unit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLevel {
    /// Index of the ladder rung the level was derived from.
    pub level: usize,
    pub upper_time_unit: TimeUnit,
    pub lower_time_unit: TimeUnit,
}

impl TimeLevel {
    pub fn new(level: usize, upper_time_unit: TimeUnit, lower_time_unit: TimeUnit) -> Self {
        Self { level, upper_time_unit: upper_time_unit.max(lower_time_unit), lower_time_unit }
    }
}

/// A labeled reference point on the time axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Tick {
    pub value: TimeInstant,
    pub time: TimeLevel,
}

/// Inclusive `[min, max]` range the axis displays.
/// Contract: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AxisExtent {
    min: TimeInstant,
    max: TimeInstant,
}

impl AxisExtent {
    /// Build an extent, swapping inverted bounds.
    pub fn new(a: TimeInstant, b: TimeInstant) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    pub fn min(&self) -> TimeInstant { self.min }
    pub fn max(&self) -> TimeInstant { self.max }

    /// Span in milliseconds (always >= 0).
    pub fn span(&self) -> i64 { self.max.saturating_sub(self.min) }

    #[inline]
    pub fn contains(&self, t: TimeInstant) -> bool {
        t >= self.min && t <= self.max
    }
}
