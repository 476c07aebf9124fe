//! Tick value generation.
//!
//! Linear axes use "nice" steps (1, 2 or 5 times a power of ten). Log axes
//! run the same step rule in [`symlog`] space for the main ticks and fill each
//! gap between two main ticks with a few linear secondary ticks, which makes
//! the marks denser near zero and sparser towards the extremes.

use std::f64::consts::{LN_10, SQRT_2};

use crate::data_types::ValueRange;
use crate::math::{antisymlog, symlog};

// sqrt(50), sqrt(10), sqrt(2): thresholds between the 10/5/2/1 multipliers.
const E10: f64 = 7.071_067_811_865_475_5;
const E5: f64 = 3.162_277_660_168_379_5;
const E2: f64 = SQRT_2;

/// Main ticks requested when the caller has no viewport to size against.
pub const DEFAULT_TICK_COUNT: usize = 8;
/// Secondary ticks between two log main ticks (of which `n - 2` are asked
/// from the step rule).
pub const SECONDARY_TICK_COUNT: usize = 4;
/// Upper bound on the size of a log tick set; above it secondary ticks are
/// dropped.
pub const MAX_TICKS: usize = 64;

const MAX_STEPS: f64 = 10_000.0;

/// Step that splits `[start, stop]` into about `count` intervals.
///
/// Returns `0.0` when the span is empty or not finite. The sign follows the
/// direction of the interval.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count.max(1) as f64;
    if !step0.is_finite() || step0 <= 0.0 {
        return 0.0;
    }

    let mut step1 = 10f64.powf((step0.ln() / LN_10).floor());
    let error = step0 / step1;
    if error >= E10 {
        step1 *= 10.0;
    } else if error >= E5 {
        step1 *= 5.0;
    } else if error >= E2 {
        step1 *= 2.0;
    }

    if stop < start {
        -step1
    } else {
        step1
    }
}

/// Multiples of [`tick_step`] inside `[start, stop]`.
///
/// Values are produced by repeatedly adding the step to the first multiple,
/// so they carry the usual accumulated rounding (a zero crossing can come out
/// as a tiny negative number). The result is strictly increasing.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || start > stop {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let step = tick_step(start, stop, count);
    if step <= 0.0 {
        return Vec::new();
    }

    let first = (start / step).ceil() * step;
    let last = (stop / step).floor() * step;
    let steps = ((last - first) / step).round();
    if !steps.is_finite() || steps < 0.0 {
        return Vec::new();
    }
    let steps = steps.min(MAX_STEPS) as usize;

    let tolerance = step * 1e-9;
    let mut ticks: Vec<f64> = Vec::with_capacity(steps + 1);
    let mut value = first;
    for _ in 0..=steps {
        if value >= start - tolerance && value <= stop + tolerance {
            let tick = value.clamp(start, stop);
            // A step below one ulp of the range leaves `value` unchanged.
            if ticks.last().is_none_or(|&last| tick > last) {
                ticks.push(tick);
            }
        }
        value += step;
    }
    ticks
}

/// Linear tick values for `range`.
///
/// A non-degenerate range always yields at least two ticks: the count is
/// doubled until the step rule lands two multiples inside the range, and the
/// range bounds are used as a last resort.
pub fn linear_tick_values(range: ValueRange, desired_count: usize) -> Vec<f64> {
    if !range.is_finite() || range.is_inverted() {
        return Vec::new();
    }
    if range.is_degenerate() {
        return vec![range.min];
    }

    let mut count = desired_count.max(2);
    loop {
        let ticks = nice_ticks(range.min, range.max, count);
        if ticks.len() >= 2 {
            return ticks;
        }
        if count >= MAX_TICKS {
            return vec![range.min, range.max];
        }
        count *= 2;
    }
}

/// Log tick positions for `range`, expressed in [`symlog`] space.
///
/// `range` is in value space. Each returned position `p` marks the value
/// `antisymlog(p)`.
pub fn log_tick_positions(
    range: ValueRange,
    main_count: usize,
    secondary_count: usize,
) -> Vec<f64> {
    if !range.is_finite() || range.is_inverted() {
        return Vec::new();
    }
    if range.is_degenerate() {
        return vec![symlog(range.min)];
    }

    let main = nice_ticks(symlog(range.min), symlog(range.max), main_count.max(1));
    let main_values: Vec<f64> = main.iter().map(|&p| antisymlog(p)).collect();

    let mut positions = Vec::with_capacity(main.len() * (secondary_count + 1));
    for (i, &p) in main.iter().enumerate() {
        positions.push(p);

        let Some(&next) = main_values.get(i + 1) else {
            break;
        };
        let current = main_values[i];
        let inset = (next - current) / (secondary_count + 1) as f64;
        positions.extend(
            nice_ticks(current + inset, next - inset, secondary_count.saturating_sub(2))
                .into_iter()
                .map(symlog),
        );
    }

    if positions.len() > MAX_TICKS {
        tracing::trace!(
            count = positions.len(),
            "log tick set too dense, keeping main ticks only"
        );
        return main;
    }
    positions
}
