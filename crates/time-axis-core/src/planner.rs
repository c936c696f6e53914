// File: crates/time-axis-core/src/planner.rs
// Summary: Automatic interval planner: picks a nice step from the ladder and lays out aligned ticks.

use crate::ladder::{self, Rung, LADDER};
use crate::options::IntervalConstraints;
use crate::time;
use crate::types::{AxisExtent, Tick, TimeInstant};

/// Upper bound on generated ticks for one extent.
pub const MAX_GENERATED_TICKS: usize = 10_000;

/// Plan automatic ticks over `extent`.
///
/// Ticks are aligned to the chosen rung, start at or before `min` and stop at
/// the first tick at or past `max`; clipping happens downstream. An undefined
/// extent yields no ticks, a zero-length one a single day-level tick at `min`.
pub fn plan(extent: Option<AxisExtent>, constraints: &IntervalConstraints) -> Vec<Tick> {
    let Some(extent) = extent else { return Vec::new() };
    if extent.span() == 0 {
        return vec![Tick { value: extent.min(), time: ladder::default_level() }];
    }

    let idx = select_rung(extent.span(), constraints);
    let rung = LADDER[idx];
    let time = ladder::level_for(idx, extent.min(), extent.max());
    tracing::debug!(
        unit = %rung.unit,
        multiple = rung.multiple,
        level = idx,
        upper = %time.upper_time_unit,
        "planned time axis step"
    );

    generate(&extent, rung)
        .into_iter()
        .map(|value| Tick { value, time })
        .collect()
}

/// Tick count a rung produces over `span`: `floor(span / step) + 1`.
pub fn tick_count(span: i64, rung: &Rung) -> i64 {
    (span / rung.step_ms()).saturating_add(1)
}

fn min_interval(c: &IntervalConstraints) -> Option<i64> {
    c.min_interval.filter(|m| *m > 0)
}

fn max_interval(c: &IntervalConstraints) -> Option<i64> {
    c.max_interval.filter(|m| *m > 0)
}

fn allowed(rung: &Rung, c: &IntervalConstraints) -> bool {
    let step = rung.step_ms();
    min_interval(c).map_or(true, |m| step >= m) && max_interval(c).map_or(true, |m| step <= m)
}

/// Index of the rung to use for an extent of `span` ms (`span > 0`).
///
/// Among rungs allowed by the interval constraints, takes the one whose count
/// comes closest to the target from below while still giving two ticks; ties
/// go to the coarser rung. Without such a rung, the coarsest allowed rung that
/// still gives two ticks, else the finest allowed one.
///
/// A rung that would produce more than [`MAX_GENERATED_TICKS`] is replaced by
/// the finest rung that stays under the cap, so ticks still cover the extent.
pub fn select_rung(span: i64, constraints: &IntervalConstraints) -> usize {
    let idx = constrained_rung(span, constraints);
    let cap = MAX_GENERATED_TICKS as i64;
    match (idx..LADDER.len()).find(|&i| tick_count(span, &LADDER[i]) <= cap) {
        Some(i) if i != idx => {
            tracing::debug!(span, from = idx, to = i, "step too fine for extent; coarsening");
            i
        }
        _ => idx,
    }
}

fn constrained_rung(span: i64, constraints: &IntervalConstraints) -> usize {
    let target = constraints.target_count() as i64;
    let viable: Vec<usize> = (0..LADDER.len())
        .filter(|&i| allowed(&LADDER[i], constraints))
        .collect();
    if viable.is_empty() {
        return clamp_rung(constraints);
    }

    let mut best: Option<(usize, i64)> = None;
    for &i in &viable {
        let count = tick_count(span, &LADDER[i]);
        if count >= 2 && count <= target && best.map_or(true, |(_, c)| count >= c) {
            best = Some((i, count));
        }
    }
    if let Some((i, _)) = best {
        return i;
    }
    viable
        .iter()
        .rev()
        .copied()
        .find(|&i| tick_count(span, &LADDER[i]) >= 2)
        .unwrap_or(viable[0])
}

/// Rung nearest to the `[min_interval, max_interval]` window when none fits in it.
fn clamp_rung(constraints: &IntervalConstraints) -> usize {
    let lo = min_interval(constraints);
    let hi = max_interval(constraints);
    let miss = |rung: &Rung| -> f64 {
        let step = rung.step_ms() as f64;
        let below = lo.map_or(1.0, |m| (m as f64 / step).max(1.0));
        let above = hi.map_or(1.0, |m| (step / m as f64).max(1.0));
        below.max(above)
    };
    let mut best = 0usize;
    let mut best_miss = f64::INFINITY;
    for (i, rung) in LADDER.iter().enumerate() {
        let m = miss(rung);
        if m <= best_miss {
            best = i;
            best_miss = m;
        }
    }
    tracing::debug!(?lo, ?hi, level = best, "interval constraints exclude every step; clamping");
    best
}

/// Aligned instants from the boundary at or before `min` through the first at or past `max`.
fn generate(extent: &AxisExtent, rung: Rung) -> Vec<TimeInstant> {
    let mut out = Vec::new();
    let Some(mut t) = time::floor_to(extent.min(), rung.unit, rung.multiple) else {
        tracing::warn!(min = extent.min(), "extent outside the supported calendar range");
        return out;
    };
    loop {
        out.push(t);
        if t >= extent.max() || out.len() >= MAX_GENERATED_TICKS {
            break;
        }
        match time::step_forward(t, rung.unit, rung.multiple) {
            Some(next) if next > t => t = next,
            _ => break,
        }
    }
    out
}
