use serde::{Deserialize, Serialize};

use crate::core::NumericRange;
use crate::error::{HistogramError, HistogramResult};

use super::label_format::pretty_label;

pub(super) const TARGET_TICK_INTERVALS: f64 = 4.0;
pub(super) const MIN_TICK_STEP: f64 = 0.5;
pub(super) const UNIT_TICK_STEP: f64 = 1.0;
pub(super) const ROUNDED_MAGNITUDE_THRESHOLD: f64 = 100.0;

/// Upper bound on ticks produced by [`axis_ticks`].
pub const MAX_AXIS_TICKS: usize = 1_000;

/// Picks the axis tick increment for a `[min, max]` axis, aiming at ~5 ticks.
///
/// With `raw = (max - min) / 4`: below `0.5` use `0.5`; below `1` use `1`;
/// above `100` round to one significant digit of its power of ten; otherwise
/// round to the nearest integer.
#[must_use]
pub fn tick_step_size(max: f64, min: f64) -> f64 {
    let raw = (max - min) / TARGET_TICK_INTERVALS;

    if raw < MIN_TICK_STEP {
        MIN_TICK_STEP
    } else if raw < UNIT_TICK_STEP {
        UNIT_TICK_STEP
    } else if raw > ROUNDED_MAGNITUDE_THRESHOLD {
        let magnitude = 10_f64.powf(raw.log10().floor());
        (raw / magnitude).round() * magnitude
    } else {
        raw.round()
    }
}

/// One labelled axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Ticks at every multiple of `step` inside `range`, labelled with [`pretty_label`].
pub fn axis_ticks(
    range: NumericRange,
    step: f64,
    with_sign: bool,
) -> HistogramResult<Vec<AxisTick>> {
    let range = range.validate()?;
    if !step.is_finite() || step <= 0.0 {
        return Err(HistogramError::InvalidData(
            "tick step must be finite and > 0".to_owned(),
        ));
    }

    let first = (range.min / step).ceil();
    let last = (range.max / step).floor();
    let count = last - first + 1.0;
    if count > MAX_AXIS_TICKS as f64 {
        return Err(HistogramError::InvalidData(format!(
            "tick step {step} yields more than {MAX_AXIS_TICKS} ticks"
        )));
    }
    if count < 1.0 {
        return Ok(Vec::new());
    }

    let first = first as i64;
    let ticks = (0..count as i64)
        .map(|offset| {
            let value = (first + offset) as f64 * step;
            AxisTick {
                value,
                label: pretty_label(value, with_sign),
            }
        })
        .collect();
    Ok(ticks)
}
