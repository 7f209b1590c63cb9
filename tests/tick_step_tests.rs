use indicator_histogram::api::{MAX_AXIS_TICKS, axis_ticks, tick_step_size};
use indicator_histogram::core::NumericRange;

#[test]
fn small_ranges_use_half_unit_steps() {
    assert_eq!(tick_step_size(1.0, 0.0), 0.5);
    assert_eq!(tick_step_size(0.2, -0.2), 0.5);
    assert_eq!(tick_step_size(0.0, 0.0), 0.5);
}

#[test]
fn sub_unit_raw_steps_use_one() {
    assert_eq!(tick_step_size(3.0, 0.0), 1.0);
    assert_eq!(tick_step_size(2.0, 0.0), 1.0);
}

#[test]
fn mid_ranges_round_to_integers() {
    assert_eq!(tick_step_size(5.0, 0.0), 1.0);
    assert_eq!(tick_step_size(10.0, 0.0), 3.0);
    assert_eq!(tick_step_size(104.0, 0.0), 26.0);
    assert_eq!(tick_step_size(50.0, -50.0), 25.0);
    assert_eq!(tick_step_size(400.0, 0.0), 100.0);
}

#[test]
fn large_ranges_round_to_leading_digit() {
    // raw = 110 -> magnitude 100 -> 1 * 100
    assert_eq!(tick_step_size(440.0, 0.0), 100.0);
    // raw = 250 -> 2.5 rounds up to 3
    assert_eq!(tick_step_size(1_000.0, 0.0), 300.0);
    // raw = 3_750 -> 3.75 rounds to 4
    assert_eq!(tick_step_size(15_000.0, 0.0), 4_000.0);
    assert_eq!(tick_step_size(2_000_000.0, -2_000_000.0), 1_000_000.0);
}

#[test]
fn axis_ticks_cover_multiples_of_step() {
    let range = NumericRange::new(0.0, 5.0).expect("range");
    let ticks = axis_ticks(range, tick_step_size(5.0, 0.0), false).expect("ticks");

    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(ticks[3].label, "3");
}

#[test]
fn signed_axis_ticks_mark_both_directions() {
    let range = NumericRange::symmetric(2_000.0).expect("range");
    let ticks = axis_ticks(range, 1_000.0, true).expect("ticks");

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["\u{2212}2K", "\u{2212}1K", "0", "+1K", "+2K"]);
}

#[test]
fn axis_ticks_skip_range_edges_off_the_grid() {
    let range = NumericRange::new(0.3, 2.7).expect("range");
    let ticks = axis_ticks(range, 1.0, false).expect("ticks");
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![1.0, 2.0]);

    let narrow = NumericRange::new(0.1, 0.2).expect("range");
    assert!(axis_ticks(narrow, 0.5, false).expect("ticks").is_empty());
}

#[test]
fn axis_ticks_reject_bad_steps() {
    let range = NumericRange::new(0.0, 10.0).expect("range");
    assert!(axis_ticks(range, 0.0, false).is_err());
    assert!(axis_ticks(range, f64::NAN, false).is_err());

    let wide = NumericRange::new(0.0, (MAX_AXIS_TICKS * 10) as f64).expect("range");
    let err = axis_ticks(wide, 1.0, false).expect_err("too many ticks");
    assert!(format!("{err}").contains("ticks"));
}
