// File: crates/time-axis-core/src/axis.rs
// Summary: Time axis snapshot and the tick pipeline (extent -> exact | automatic -> filter).

use crate::exact;
use crate::extent;
use crate::filter;
use crate::options::AxisOptions;
use crate::planner;
use crate::series::{merge_extent, TimeSource};
use crate::types::{AxisExtent, Tick, TimeInstant};

/// Immutable snapshot of a time axis: options plus the extent of the series
/// plotted against it. Rebuild it when either changes.
#[derive(Clone, Debug, Default)]
pub struct TimeAxis {
    options: AxisOptions,
    series_extent: Option<(TimeInstant, TimeInstant)>,
}

impl TimeAxis {
    pub fn new(options: AxisOptions) -> Self {
        Self { options, series_extent: None }
    }

    /// Add a series (or any other time source) feeding the data extent.
    pub fn with_series<S: TimeSource + ?Sized>(mut self, source: &S) -> Self {
        self.series_extent = merge_extent(self.series_extent, source.time_extent());
        self
    }

    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    pub fn series_extent(&self) -> Option<(TimeInstant, TimeInstant)> {
        self.series_extent
    }

    /// Resolved `[min, max]`, or `None` for an empty axis.
    pub fn extent(&self) -> Option<AxisExtent> {
        resolve_extent(&self.options, self.series_extent)
    }

    /// Ordered ticks for the current snapshot.
    pub fn get_ticks(&self) -> Vec<Tick> {
        compute_ticks(&self.options, self.series_extent)
    }
}

fn resolve_extent(
    options: &AxisOptions,
    series_extent: Option<(TimeInstant, TimeInstant)>,
) -> Option<AxisExtent> {
    let observed = extent::observed_extent(series_extent, &options.exact_config());
    extent::resolve(options.min_bound(), options.max_bound(), observed)
}

/// Compute ticks for `options` over data spanning `series_extent`.
///
/// Exact ticks are used when enabled and at least one value normalizes;
/// otherwise the automatic planner runs. Either way the result is clipped to
/// the resolved extent. Never fails: bad input degrades to fewer ticks.
pub fn compute_ticks(
    options: &AxisOptions,
    series_extent: Option<(TimeInstant, TimeInstant)>,
) -> Vec<Tick> {
    let Some(extent) = resolve_extent(options, series_extent) else {
        return Vec::new();
    };

    let ticks = match exact::provide(&options.exact_config()) {
        Some(ticks) => {
            tracing::debug!(count = ticks.len(), "using exact ticks");
            ticks
        }
        None => planner::plan(Some(extent), &options.constraints()),
    };
    filter::filter(ticks, &extent)
}
