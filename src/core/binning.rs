use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::NumericRange;
use crate::error::{HistogramError, HistogramResult};

/// Per-bucket counts and bucket midpoints over one fixed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSet {
    pub counts: Vec<usize>,
    pub centres: Vec<f64>,
}

impl BucketSet {
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.counts.len()
    }

    /// Width of one bucket, recovered from adjacent centres.
    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        match self.centres.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// Number of values that landed in a bucket.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Partitions `data` into `bucket_count` equal-width buckets over `[min, max]`.
///
/// Buckets are half-open `[lo, hi)` except the last one, which also takes
/// values exactly equal to `max`. Every value inside `[min, max]` is counted;
/// values outside the range and `NaN` are dropped, not clamped.
pub fn bin(data: &[f64], min: f64, max: f64, bucket_count: usize) -> HistogramResult<BucketSet> {
    if bucket_count == 0 {
        return Err(HistogramError::InvalidBucketCount(bucket_count));
    }
    let range = NumericRange::new(min, max)?;

    let step_size = range.span() / bucket_count as f64;
    let last = bucket_count - 1;
    let mut counts = vec![0_usize; bucket_count];

    for &value in data {
        if value == max {
            counts[last] += 1;
            continue;
        }
        if !(min..max).contains(&value) {
            continue;
        }
        // Rounding can push values just below `max` to `bucket_count`.
        let index = ((value - min) / step_size).floor() as usize;
        counts[index.min(last)] += 1;
    }

    let centres = (0..bucket_count)
        .map(|i| min + (i as f64 + 0.5) * step_size)
        .collect();

    let binned = BucketSet { counts, centres };
    trace!(
        input = data.len(),
        binned = binned.total(),
        bucket_count,
        step_size,
        "binned values"
    );
    Ok(binned)
}

/// Same as [`bin`] with a prevalidated range.
pub fn bin_range(
    data: &[f64],
    range: NumericRange,
    bucket_count: usize,
) -> HistogramResult<BucketSet> {
    bin(data, range.min, range.max, bucket_count)
}
