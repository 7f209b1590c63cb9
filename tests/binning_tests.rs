use approx::assert_relative_eq;
use indicator_histogram::HistogramError;
use indicator_histogram::core::{NumericRange, bin, bin_range};

#[test]
fn bins_unit_steps_and_closes_top_edge() {
    let buckets = bin(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 5.0, 5).expect("bin");

    // 5.0 == max lands in the last bucket next to 4.0.
    assert_eq!(buckets.counts, vec![0, 1, 1, 1, 2]);
    assert_eq!(buckets.centres, vec![0.5, 1.5, 2.5, 3.5, 4.5]);
    assert_eq!(buckets.total(), 5);
    assert_eq!(buckets.max_count(), 2);
}

#[test]
fn drops_out_of_range_and_nan_values() {
    let data = [0.0, 4.999, -0.1, 5.1, f64::NAN, f64::INFINITY];
    let buckets = bin(&data, 0.0, 5.0, 5).expect("bin");

    assert_eq!(buckets.counts, vec![1, 0, 0, 0, 1]);
    assert_eq!(buckets.total(), 2);
}

#[test]
fn keeps_value_just_below_max_when_division_rounds_up() {
    // (value - min) / step rounds to exactly 2.0 here.
    let value = -14.467_885_132_181_182;
    let buckets = bin(&[value], -56.680_120_573_877_325, -14.467_885_132_181_18, 2).expect("bin");

    assert_eq!(buckets.counts, vec![0, 1]);
    assert_eq!(buckets.total(), 1);
}

#[test]
fn top_edge_goes_to_last_bucket_with_uneven_steps() {
    let buckets = bin(&[0.3, 0.3], 0.0, 0.3, 3).expect("bin");
    assert_eq!(buckets.counts, vec![0, 0, 2]);
}

#[test]
fn centres_sit_in_the_middle_of_each_bucket() {
    let buckets = bin(&[], -10.0, 10.0, 4).expect("bin");

    assert_eq!(buckets.bucket_count(), 4);
    assert_eq!(buckets.centres, vec![-7.5, -2.5, 2.5, 7.5]);
    assert_relative_eq!(buckets.step_size().expect("step"), 5.0);
    assert_eq!(buckets.total(), 0);
}

#[test]
fn single_bucket_has_no_recoverable_step() {
    let buckets = bin(&[0.5], 0.0, 1.0, 1).expect("bin");
    assert_eq!(buckets.counts, vec![1]);
    assert_eq!(buckets.centres, vec![0.5]);
    assert!(buckets.step_size().is_none());
}

#[test]
fn rejects_zero_width_range() {
    let err = bin(&[1.0], 2.0, 2.0, 4).expect_err("zero width must fail");
    assert!(matches!(err, HistogramError::DegenerateRange { .. }));
}

#[test]
fn rejects_inverted_and_non_finite_ranges() {
    assert!(bin(&[1.0], 3.0, 2.0, 4).is_err());
    assert!(bin(&[1.0], f64::NAN, 2.0, 4).is_err());
    assert!(bin(&[1.0], 0.0, f64::INFINITY, 4).is_err());
}

#[test]
fn rejects_zero_buckets() {
    let err = bin(&[1.0], 0.0, 1.0, 0).expect_err("zero buckets must fail");
    assert!(matches!(err, HistogramError::InvalidBucketCount(0)));
    assert!(format!("{err}").contains("bucket count"));
}

#[test]
fn bin_range_matches_bin() {
    let data = [0.1, 0.2, 0.75, 0.9];
    let range = NumericRange::new(0.0, 1.0).expect("range");
    assert_eq!(
        bin_range(&data, range, 4).expect("bin range"),
        bin(&data, 0.0, 1.0, 4).expect("bin")
    );
}
