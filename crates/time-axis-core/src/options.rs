// File: crates/time-axis-core/src/options.rs
// Summary: Time axis configuration (JSON-compatible) and the per-stage views derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, Result};
use crate::time::RawTime;
use crate::types::TimeInstant;

/// Target tick count when `splitNumber` is not configured.
pub const DEFAULT_SPLIT_NUMBER: usize = 5;

/// Axis options as supplied by the surrounding chart configuration.
///
/// Field names follow the chart's camelCase JSON keys:
/// `type`, `useExactTicks`, `data`, `min`, `max`, `minInterval`,
/// `maxInterval`, `splitNumber`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    #[serde(rename = "type")]
    pub axis_type: String,
    pub use_exact_ticks: bool,
    pub data: Vec<RawTime>,
    pub min: Option<RawTime>,
    pub max: Option<RawTime>,
    /// Smallest allowed step, in milliseconds.
    pub min_interval: Option<i64>,
    /// Largest allowed step, in milliseconds.
    pub max_interval: Option<i64>,
    pub split_number: Option<usize>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            axis_type: "time".to_string(),
            use_exact_ticks: false,
            data: Vec::new(),
            min: None,
            max: None,
            min_interval: None,
            max_interval: None,
            split_number: None,
        }
    }
}

impl AxisOptions {
    /// Default time axis options (automatic ticks, no bounds).
    pub fn time() -> Self { Self::default() }

    /// Parse options from JSON and check that they describe a time axis.
    pub fn from_json(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.axis_type != "time" {
            return Err(AxisError::UnsupportedAxisType(self.axis_type.clone()));
        }
        Ok(())
    }

    pub fn with_exact_ticks<T: Into<RawTime>>(mut self, data: impl IntoIterator<Item = T>) -> Self {
        self.use_exact_ticks = true;
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bounds(mut self, min: Option<RawTime>, max: Option<RawTime>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_split_number(mut self, split_number: usize) -> Self {
        self.split_number = Some(split_number);
        self
    }

    pub fn with_intervals(mut self, min_interval: Option<i64>, max_interval: Option<i64>) -> Self {
        self.min_interval = min_interval;
        self.max_interval = max_interval;
        self
    }

    pub fn exact_config(&self) -> ExactTicksConfig {
        ExactTicksConfig { enabled: self.use_exact_ticks, raw_values: self.data.clone() }
    }

    pub fn constraints(&self) -> IntervalConstraints {
        IntervalConstraints {
            min_interval: self.min_interval,
            max_interval: self.max_interval,
            split_number: self.split_number,
        }
    }

    pub fn min_bound(&self) -> Bound { Bound::from_option(self.min.as_ref()) }
    pub fn max_bound(&self) -> Bound { Bound::from_option(self.max.as_ref()) }
}

/// Exact-tick inputs: used verbatim as ticks when enabled and non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExactTicksConfig {
    pub enabled: bool,
    pub raw_values: Vec<RawTime>,
}

/// Constraints on automatic step selection. Ignored by exact ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntervalConstraints {
    pub min_interval: Option<i64>,
    pub max_interval: Option<i64>,
    pub split_number: Option<usize>,
}

impl IntervalConstraints {
    /// Effective target tick count (never below 2).
    pub fn target_count(&self) -> usize {
        self.split_number.unwrap_or(DEFAULT_SPLIT_NUMBER).max(2)
    }
}

/// A configured extent bound after normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Not configured (or unparseable): derive from data.
    Auto,
    At(TimeInstant),
    /// `"dataMin"`: the smallest observed instant.
    DataMin,
    /// `"dataMax"`: the largest observed instant.
    DataMax,
}

impl Bound {
    fn from_option(raw: Option<&RawTime>) -> Self {
        match raw {
            None => Bound::Auto,
            Some(RawTime::Text(s)) if s == "dataMin" => Bound::DataMin,
            Some(RawTime::Text(s)) if s == "dataMax" => Bound::DataMax,
            Some(r) => r.to_instant().map_or(Bound::Auto, Bound::At),
        }
    }
}
