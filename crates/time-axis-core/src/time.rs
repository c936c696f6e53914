// File: crates/time-axis-core/src/time.rs
// Summary: Raw time normalization (numbers and date strings) and UTC calendar alignment.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, Result};
use crate::types::{TimeInstant, TimeUnit};

/// A time value as it appears in axis configuration or raw series input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    /// Epoch milliseconds.
    Number(f64),
    /// Date/time string, or a string of digits holding epoch milliseconds.
    Text(String),
}

impl RawTime {
    /// Normalize to epoch milliseconds.
    ///
    /// Instants outside the calendar range chrono can represent are rejected.
    pub fn try_to_instant(&self) -> Result<TimeInstant> {
        match self {
            RawTime::Number(n) if n.is_finite() && n.abs() <= i64::MAX as f64 => {
                representable(n.round() as TimeInstant)
                    .ok_or_else(|| AxisError::UnparseableTime(n.to_string()))
            }
            RawTime::Number(n) => Err(AxisError::UnparseableTime(n.to_string())),
            RawTime::Text(s) => parse_date(s),
        }
    }

    /// Normalize, logging and discarding values that cannot be read.
    pub fn to_instant(&self) -> Option<TimeInstant> {
        match self.try_to_instant() {
            Ok(t) => Some(t),
            Err(err) => {
                tracing::warn!(value = ?self, %err, "dropping time value");
                None
            }
        }
    }
}

impl From<TimeInstant> for RawTime {
    fn from(t: TimeInstant) -> Self { RawTime::Number(t as f64) }
}

impl From<&str> for RawTime {
    fn from(s: &str) -> Self { RawTime::Text(s.to_string()) }
}

impl From<String> for RawTime {
    fn from(s: String) -> Self { RawTime::Text(s) }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a date string into epoch milliseconds.
///
/// Strings carrying an offset (RFC 3339, `+hh:mm` suffix) honour it; naive
/// strings are read as UTC. A plain run of digits (optionally signed) is taken
/// as epoch milliseconds and must fall inside chrono's calendar range.
pub fn parse_date(input: &str) -> Result<TimeInstant> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AxisError::UnparseableTime(input.to_string()));
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse::<TimeInstant>()
            .ok()
            .and_then(representable)
            .ok_or_else(|| AxisError::UnparseableTime(input.to_string()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.timestamp_millis());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc().timestamp_millis());
        }
    }
    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return date_millis(d).ok_or_else(|| AxisError::UnparseableTime(input.to_string()));
        }
    }
    // Year-month ("2024-03") is the first of that month.
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return date_millis(d).ok_or_else(|| AxisError::UnparseableTime(input.to_string()));
    }
    Err(AxisError::UnparseableTime(input.to_string()))
}

fn representable(t: TimeInstant) -> Option<TimeInstant> {
    DateTime::from_timestamp_millis(t).map(|_| t)
}

fn date_millis(d: NaiveDate) -> Option<TimeInstant> {
    Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

fn to_date(t: TimeInstant) -> Option<NaiveDate> {
    Some(DateTime::from_timestamp_millis(t)?.date_naive())
}

/// First instant of the month `month_index` months after January of year 0.
fn month_start(month_index: i64) -> Option<TimeInstant> {
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month0 = month_index.rem_euclid(12) as u32;
    date_millis(NaiveDate::from_ymd_opt(year, month0 + 1, 1)?)
}

fn month_index(d: NaiveDate) -> i64 {
    d.year() as i64 * 12 + d.month0() as i64
}

/// Align `t` down to the nearest boundary of `multiple` x `unit` (UTC).
///
/// Fixed-length units align on the epoch. Days align on day-of-month
/// `1, 1 + n, ...`; half-months on the 1st and 16th; months and quarters on
/// month indices divisible by the span; years on years divisible by `multiple`.
pub fn floor_to(t: TimeInstant, unit: TimeUnit, multiple: i64) -> Option<TimeInstant> {
    let multiple = multiple.max(1);
    match unit {
        TimeUnit::Millisecond | TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour => {
            let step = unit.nominal_ms().checked_mul(multiple)?;
            t.div_euclid(step).checked_mul(step)
        }
        TimeUnit::Day => {
            let d = to_date(t)?;
            let n = u32::try_from(multiple).ok()?;
            let day = (d.day() - 1) / n * n + 1;
            date_millis(d.with_day(day)?)
        }
        TimeUnit::HalfMonth => {
            let d = to_date(t)?;
            let day = if d.day() < 16 { 1 } else { 16 };
            date_millis(d.with_day(day)?)
        }
        TimeUnit::Month | TimeUnit::Quarter => {
            let span = if unit == TimeUnit::Quarter { multiple.checked_mul(3)? } else { multiple };
            let d = to_date(t)?;
            let idx = month_index(d);
            month_start(idx.div_euclid(span) * span)
        }
        TimeUnit::Year => {
            let d = to_date(t)?;
            let year = (d.year() as i64).div_euclid(multiple) * multiple;
            month_start(year.checked_mul(12)?)
        }
    }
}

/// Advance an aligned instant by one step of `multiple` x `unit`.
///
/// Day steps restart at the 1st when they would run past the end of a month.
pub fn step_forward(t: TimeInstant, unit: TimeUnit, multiple: i64) -> Option<TimeInstant> {
    let multiple = multiple.max(1);
    match unit {
        TimeUnit::Millisecond | TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour => {
            t.checked_add(unit.nominal_ms().checked_mul(multiple)?)
        }
        TimeUnit::Day => {
            let d = to_date(t)?;
            let next_day = d.day().checked_add(u32::try_from(multiple).ok()?)?;
            match d.with_day(next_day) {
                Some(next) => date_millis(next),
                None => month_start(month_index(d) + 1),
            }
        }
        TimeUnit::HalfMonth => {
            let d = to_date(t)?;
            if d.day() < 16 {
                date_millis(d.with_day(16)?)
            } else {
                month_start(month_index(d) + 1)
            }
        }
        TimeUnit::Month | TimeUnit::Quarter => {
            let span = if unit == TimeUnit::Quarter { multiple.checked_mul(3)? } else { multiple };
            let d = to_date(t)?;
            month_start(month_index(d).checked_add(span)?)
        }
        TimeUnit::Year => {
            let d = to_date(t)?;
            month_start(month_index(d).checked_add(multiple.checked_mul(12)?)?)
        }
    }
}

/// True when `a` and `b` fall in different units (e.g. different days).
pub fn crosses_boundary(a: TimeInstant, b: TimeInstant, unit: TimeUnit) -> bool {
    match (floor_to(a, unit, 1), floor_to(b, unit, 1)) {
        (Some(x), Some(y)) => x != y,
        _ => false,
    }
}
