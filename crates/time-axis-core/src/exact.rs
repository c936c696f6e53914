// File: crates/time-axis-core/src/exact.rs
// Summary: Exact tick provider: caller-supplied instants become ticks verbatim.

use crate::ladder;
use crate::options::ExactTicksConfig;
use crate::types::{Tick, TimeInstant, TimeLevel};

/// Ticks for exact mode, or `None` when exact mode does not apply
/// (disabled, no values, or no value could be normalized).
///
/// Values are sorted and deduplicated. Interval constraints play no part here
/// and extent clipping is left to the caller.
pub fn provide(config: &ExactTicksConfig) -> Option<Vec<Tick>> {
    if !config.enabled || config.raw_values.is_empty() {
        return None;
    }
    let mut values: Vec<TimeInstant> = config
        .raw_values
        .iter()
        .filter_map(|r| r.to_instant())
        .collect();
    if values.is_empty() {
        tracing::debug!("no usable exact tick values; falling back to automatic ticks");
        return None;
    }
    values.sort_unstable();
    values.dedup();

    let time = infer_level(&values);
    Some(values.into_iter().map(|value| Tick { value, time }).collect())
}

/// Median of consecutive gaps (lower median). `None` for fewer than two values.
pub fn typical_gap(sorted: &[TimeInstant]) -> Option<i64> {
    let mut gaps: Vec<i64> = sorted.windows(2).map(|w| w[1].saturating_sub(w[0])).collect();
    if gaps.is_empty() {
        return None;
    }
    gaps.sort_unstable();
    Some(gaps[(gaps.len() - 1) / 2])
}

/// Level shared by every exact tick, from the typical spacing of `sorted`.
pub fn infer_level(sorted: &[TimeInstant]) -> TimeLevel {
    match (typical_gap(sorted), sorted.first(), sorted.last()) {
        (Some(gap), Some(&first), Some(&last)) => ladder::level_for(ladder::nearest_rung(gap), first, last),
        _ => ladder::default_level(),
    }
}
