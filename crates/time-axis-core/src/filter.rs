// File: crates/time-axis-core/src/filter.rs
// Summary: Clip a tick sequence to the inclusive axis extent.

use crate::types::{AxisExtent, Tick};

/// Keep ticks with `min <= value <= max`, preserving order.
pub fn filter(ticks: Vec<Tick>, extent: &AxisExtent) -> Vec<Tick> {
    ticks.into_iter().filter(|t| extent.contains(t.value)).collect()
}
