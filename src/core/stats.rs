use tracing::warn;

use crate::core::Scenario;
use crate::error::{HistogramError, HistogramResult};

/// Smallest half-width of a difference range.
pub const MIN_DIFFERENCE_HALF_WIDTH: f64 = 0.1;

/// Arithmetic mean. Empty input yields `NaN`, as does any `NaN` sample.
#[must_use]
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Values of `indicator` for every area of `scenario`, in area order.
///
/// Nothing is filtered: areas without the field contribute `NaN`, which
/// binning later drops.
#[must_use]
pub fn extract_values(indicator: &str, scenario: &Scenario) -> Vec<f64> {
    scenario
        .values
        .values()
        .map(|record| record.get(indicator).copied().unwrap_or(f64::NAN))
        .collect()
}

/// Per-area `scenario - compare` for `indicator`.
///
/// Areas are paired by position. Both scenarios must cover the same number
/// of areas.
pub fn scenario_differences(
    indicator: &str,
    scenario: &Scenario,
    compare: &Scenario,
) -> HistogramResult<Vec<f64>> {
    if scenario.area_count() != compare.area_count() {
        return Err(HistogramError::MisalignedScenarios {
            left: scenario.area_count(),
            right: compare.area_count(),
        });
    }

    let mismatched = scenario
        .area_ids()
        .zip(compare.area_ids())
        .filter(|(left, right)| left != right)
        .count();
    if mismatched > 0 {
        warn!(
            mismatched,
            scenario = scenario.short_name(),
            compare = compare.short_name(),
            "difference pairs areas with different identifiers"
        );
    }

    let left = extract_values(indicator, scenario);
    let right = extract_values(indicator, compare);
    Ok(left.iter().zip(&right).map(|(a, b)| a - b).collect())
}

/// Drops exact-zero differences so unchanged areas do not shape the range.
#[must_use]
pub fn retain_nonzero(differences: &[f64]) -> Vec<f64> {
    differences.iter().copied().filter(|d| *d != 0.0).collect()
}

/// Half-width of the symmetric range covering every difference.
///
/// Equals `max(|min|, |max|, 0.1)`. `NaN` entries never widen the range and an
/// empty slice resolves to the floor.
#[must_use]
pub fn symmetric_half_width(differences: &[f64]) -> f64 {
    differences
        .iter()
        .map(|d| d.abs())
        .fold(MIN_DIFFERENCE_HALF_WIDTH, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn half_width_ignores_nan() {
        assert_eq!(symmetric_half_width(&[f64::NAN, -3.0, 2.0]), 3.0);
        assert_eq!(symmetric_half_width(&[f64::NAN]), 0.1);
    }
}
