// File: crates/time-axis-core/src/lib.rs
// Summary: Core library entry point; exports the time axis tick API.

pub mod axis;
pub mod error;
pub mod exact;
pub mod extent;
pub mod filter;
pub mod ladder;
pub mod options;
pub mod planner;
pub mod series;
pub mod time;
pub mod types;

pub use axis::{compute_ticks, TimeAxis};
pub use error::{AxisError, Result};
pub use options::{AxisOptions, Bound, ExactTicksConfig, IntervalConstraints};
pub use series::{Series, TimeSource};
pub use time::{parse_date, RawTime};
pub use types::{AxisExtent, Tick, TimeInstant, TimeLevel, TimeUnit};
