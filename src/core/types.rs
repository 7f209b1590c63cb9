use serde::{Deserialize, Serialize};

use crate::error::{HistogramError, HistogramResult};

/// Name of one numeric field in every area record.
pub type IndicatorName = String;

/// Closed numeric display bound `{min, max}` shared by every scenario of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    /// Creates a validated range. `max` must be strictly greater than `min`.
    pub fn new(min: f64, max: f64) -> HistogramResult<Self> {
        Self { min, max }.validate()
    }

    /// Creates `[-half_width, half_width]`.
    pub fn symmetric(half_width: f64) -> HistogramResult<Self> {
        Self::new(-half_width, half_width)
    }

    pub fn validate(self) -> HistogramResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(HistogramError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains_closed(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
