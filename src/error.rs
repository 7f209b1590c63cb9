use thiserror::Error;

pub type HistogramResult<T> = Result<T, HistogramError>;

#[derive(Debug, Error)]
pub enum HistogramError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate bin range: min={min}, max={max} (max must be finite and > min)")]
    DegenerateRange { min: f64, max: f64 },

    #[error("invalid bucket count: {0} (must be > 0)")]
    InvalidBucketCount(usize),

    #[error("unknown chart style `{0}` (expected `both` or `difference`)")]
    UnknownChartStyle(String),

    #[error("scenario `{scenario}` has no areas to average")]
    EmptyScenario { scenario: String },

    #[error("scenarios are not area-aligned: {left} areas vs {right} areas")]
    MisalignedScenarios { left: usize, right: usize },

    #[error("colormap `{key}` returned {actual} colors for {expected} buckets")]
    ColormapLength {
        key: String,
        expected: usize,
        actual: usize,
    },
}
