// File: crates/time-axis-core/src/extent.rs
// Summary: Extent resolution from configured bounds and observed data.

use crate::error::{AxisError, Result};
use crate::options::{Bound, ExactTicksConfig};
use crate::series::merge_extent;
use crate::types::{AxisExtent, TimeInstant};

/// Combine the series extent with the raw exact-tick values (when exact mode is on).
pub fn observed_extent(
    series: Option<(TimeInstant, TimeInstant)>,
    exact: &ExactTicksConfig,
) -> Option<(TimeInstant, TimeInstant)> {
    if !exact.enabled {
        return series;
    }
    let exact_extent = exact
        .raw_values
        .iter()
        .filter_map(|r| r.try_to_instant().ok())
        .fold(None, |acc, t| merge_extent(acc, Some((t, t))));
    merge_extent(series, exact_extent)
}

/// Ordered extent from explicit bounds; `InvalidExtent` when inverted.
pub fn checked_extent(min: TimeInstant, max: TimeInstant) -> Result<AxisExtent> {
    if min > max {
        return Err(AxisError::InvalidExtent { min, max });
    }
    Ok(AxisExtent::new(min, max))
}

/// Resolve the effective axis extent.
///
/// Configured bounds win; missing ones come from `data`. Returns `None` when
/// neither bounds nor data exist (an empty axis).
pub fn resolve(
    min: Bound,
    max: Bound,
    data: Option<(TimeInstant, TimeInstant)>,
) -> Option<AxisExtent> {
    let pick = |bound: Bound, fallback: Option<TimeInstant>| match bound {
        Bound::At(t) => Some(t),
        Bound::DataMin => data.map(|d| d.0),
        Bound::DataMax => data.map(|d| d.1),
        Bound::Auto => fallback,
    };
    let lo = pick(min, data.map(|d| d.0));
    let hi = pick(max, data.map(|d| d.1));

    match (lo, hi) {
        (Some(lo), Some(hi)) => match checked_extent(lo, hi) {
            Ok(extent) => Some(extent),
            Err(err) => {
                tracing::warn!(%err, "swapping inverted axis bounds");
                Some(AxisExtent::new(lo, hi))
            }
        },
        (Some(t), None) | (None, Some(t)) => Some(AxisExtent::new(t, t)),
        (None, None) => None,
    }
}
