use serde::{Deserialize, Serialize};

use crate::core::{IndicatorName, NumericRange};
use crate::error::{HistogramError, HistogramResult};

pub const DEFAULT_BUCKET_COUNT: usize = 20;

/// Histogram setup shared by every chart of one indicator axis.
///
/// Serializable so host applications can load it from the same place they keep
/// the rest of their scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramConfig {
    /// Global display range used to bin single and overlay charts.
    pub scale: NumericRange,
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
    /// Known indicator names. Empty accepts every indicator.
    #[serde(default)]
    pub indicators: Vec<IndicatorName>,
}

impl HistogramConfig {
    /// Creates a config over `[min, max]` with the default bucket count.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            scale: NumericRange { min, max },
            bucket_count: default_bucket_count(),
            indicators: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: NumericRange) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    #[must_use]
    pub fn with_indicators<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<IndicatorName>,
    {
        self.indicators = indicators.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn knows_indicator(&self, indicator: &str) -> bool {
        self.indicators.is_empty() || self.indicators.iter().any(|name| name == indicator)
    }

    pub fn validate(&self) -> HistogramResult<()> {
        self.scale.validate()?;
        if self.bucket_count == 0 {
            return Err(HistogramError::InvalidBucketCount(self.bucket_count));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> HistogramResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            HistogramError::InvalidData(format!("failed to parse histogram config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> HistogramResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            HistogramError::InvalidData(format!("failed to serialize histogram config: {e}"))
        })
    }
}

fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT
}
