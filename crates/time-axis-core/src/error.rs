// File: crates/time-axis-core/src/error.rs
// Summary: Error type for axis configuration and time normalization.

use thiserror::Error;

use crate::types::TimeInstant;

/// Errors raised while reading axis configuration or normalizing instants.
///
/// Tick computation itself never fails: these surface from the fallible
/// entry points (`AxisOptions::from_json`, `RawTime::try_to_instant`) and are
/// otherwise logged and recovered.
#[derive(Debug, Error)]
pub enum AxisError {
    /// Configured bounds were inverted (`min > max`).
    #[error("invalid extent: min {min} is greater than max {max}")]
    InvalidExtent { min: TimeInstant, max: TimeInstant },

    /// A date string or number could not be turned into epoch milliseconds.
    #[error("unparseable time value: {0}")]
    UnparseableTime(String),

    /// Only `type: "time"` axes are handled here.
    #[error("unsupported axis type: {0}")]
    UnsupportedAxisType(String),

    /// Malformed JSON axis options.
    #[error("invalid axis options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AxisError>;
