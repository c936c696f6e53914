// File: crates/time-axis-core/src/ladder.rs
// Summary: Static ladder of "nice" time steps, finest to coarsest.

use crate::time;
use crate::types::TimeUnit::*;
use crate::types::{TimeInstant, TimeLevel, TimeUnit};

/// One candidate step: `multiple` x `unit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rung {
    pub unit: TimeUnit,
    pub multiple: i64,
}

impl Rung {
    const fn new(unit: TimeUnit, multiple: i64) -> Self {
        Self { unit, multiple }
    }

    /// Nominal step length in milliseconds.
    pub const fn step_ms(&self) -> i64 {
        self.unit.nominal_ms() * self.multiple
    }
}

/// Every rung; the index of a rung is the `level` reported on ticks.
pub static LADDER: &[Rung] = &[
    Rung::new(Millisecond, 1),
    Rung::new(Millisecond, 2),
    Rung::new(Millisecond, 5),
    Rung::new(Millisecond, 10),
    Rung::new(Millisecond, 20),
    Rung::new(Millisecond, 50),
    Rung::new(Millisecond, 100),
    Rung::new(Millisecond, 200),
    Rung::new(Millisecond, 500),
    Rung::new(Second, 1),
    Rung::new(Second, 2),
    Rung::new(Second, 5),
    Rung::new(Second, 10),
    Rung::new(Second, 15),
    Rung::new(Second, 30),
    Rung::new(Minute, 1),
    Rung::new(Minute, 2),
    Rung::new(Minute, 5),
    Rung::new(Minute, 10),
    Rung::new(Minute, 15),
    Rung::new(Minute, 30),
    Rung::new(Hour, 1),
    Rung::new(Hour, 2),
    Rung::new(Hour, 3),
    Rung::new(Hour, 4),
    Rung::new(Hour, 6),
    Rung::new(Hour, 12),
    Rung::new(Day, 1),
    Rung::new(Day, 2),
    Rung::new(Day, 3),
    Rung::new(Day, 7),
    Rung::new(HalfMonth, 1),
    Rung::new(Month, 1),
    Rung::new(Month, 2),
    Rung::new(Quarter, 1),
    Rung::new(Quarter, 2),
    Rung::new(Year, 1),
    Rung::new(Year, 2),
    Rung::new(Year, 5),
    Rung::new(Year, 10),
    Rung::new(Year, 20),
    Rung::new(Year, 50),
    Rung::new(Year, 100),
];

/// Level of the one-day rung, used when no spacing is available.
pub fn day_level() -> usize {
    LADDER
        .iter()
        .position(|r| r.unit == Day && r.multiple == 1)
        .unwrap_or(0)
}

/// Rung closest to `gap_ms` by ratio; ties go to the coarser rung.
pub fn nearest_rung(gap_ms: i64) -> usize {
    let gap = gap_ms.max(1) as f64;
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (i, r) in LADDER.iter().enumerate() {
        let dist = (gap / r.step_ms() as f64).ln().abs();
        if dist <= best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// Label unit that gives context to ticks spaced by `lower` over `[min, max]`.
///
/// Picks the coarsest label unit above `lower` whose boundary falls inside the
/// range; when the range sits inside a single one, the next label unit up.
pub fn upper_unit(lower: TimeUnit, min: TimeInstant, max: TimeInstant) -> TimeUnit {
    let mut coarser = TimeUnit::LABEL_UNITS.iter().copied().filter(|u| *u > lower);
    let Some(first) = coarser.next() else { return lower };
    let mut upper = first;
    if !time::crosses_boundary(min, max, first) {
        return upper;
    }
    for u in coarser {
        if !time::crosses_boundary(min, max, u) {
            break;
        }
        upper = u;
    }
    upper
}

/// Uniform level for ticks produced with rung `idx` over `[min, max]`.
pub fn level_for(idx: usize, min: TimeInstant, max: TimeInstant) -> TimeLevel {
    let lower = LADDER[idx].unit;
    TimeLevel::new(idx, upper_unit(lower, min, max), lower)
}

/// Day-level default for a lone instant.
pub fn default_level() -> TimeLevel {
    TimeLevel::new(day_level(), Month, Day)
}
