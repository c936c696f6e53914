// File: crates/time-axis-core/src/series.rs
// Summary: Series data providers feeding the time axis extent.
// Notes:
// - Only the time component matters here; values are kept so callers can
//   hand the same series to a renderer.

use crate::time::RawTime;
use crate::types::TimeInstant;

/// Anything that can report the `[min, max]` instants it covers.
pub trait TimeSource {
    fn time_extent(&self) -> Option<(TimeInstant, TimeInstant)>;
}

/// Merge two optional `(min, max)` pairs.
pub fn merge_extent(
    a: Option<(TimeInstant, TimeInstant)>,
    b: Option<(TimeInstant, TimeInstant)>,
) -> Option<(TimeInstant, TimeInstant)> {
    match (a, b) {
        (Some((a0, a1)), Some((b0, b1))) => Some((a0.min(b0), a1.max(b1))),
        (x, None) | (None, x) => x,
    }
}

impl TimeSource for [TimeInstant] {
    fn time_extent(&self) -> Option<(TimeInstant, TimeInstant)> {
        let min = self.iter().copied().min()?;
        let max = self.iter().copied().max()?;
        Some((min, max))
    }
}

impl TimeSource for [Series] {
    fn time_extent(&self) -> Option<(TimeInstant, TimeInstant)> {
        self.iter().fold(None, |acc, s| merge_extent(acc, s.time_extent()))
    }
}

/// Time-valued series: `(instant, value)` points in any order.
#[derive(Clone, Debug, Default)]
pub struct Series {
    pub name: String,
    pub data: Vec<(TimeInstant, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(TimeInstant, f64)>) -> Self {
        Self { name: name.into(), data }
    }

    /// Build from raw time values, dropping points whose time cannot be read.
    pub fn from_raw(name: impl Into<String>, raw: Vec<(RawTime, f64)>) -> Self {
        let data = raw
            .into_iter()
            .filter_map(|(t, v)| t.to_instant().map(|t| (t, v)))
            .collect();
        Self { name: name.into(), data }
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

impl TimeSource for Series {
    fn time_extent(&self) -> Option<(TimeInstant, TimeInstant)> {
        let mut min = TimeInstant::MAX;
        let mut max = TimeInstant::MIN;
        for &(t, _) in &self.data {
            min = min.min(t);
            max = max.max(t);
        }
        if self.data.is_empty() { None } else { Some((min, max)) }
    }
}
