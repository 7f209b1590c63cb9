use indicator_histogram::api::{DatasetKind, HistogramBuilder, HistogramConfig, UniformColormap};
use indicator_histogram::core::{Scenario, area_record};
use indicator_histogram::{ChartStyle, DisplayMode};
use proptest::prelude::*;

fn scenario(name: &str, values: &[f64]) -> Scenario {
    values
        .iter()
        .enumerate()
        .fold(Scenario::new(name), |scenario, (i, value)| {
            scenario.with_area(format!("area-{i}"), area_record([("yield", *value)]))
        })
}

fn builder(bucket_count: usize) -> HistogramBuilder<UniformColormap> {
    let config = HistogramConfig::new(-100.0, 100.0).with_bucket_count(bucket_count);
    HistogramBuilder::new(config, UniformColormap::new("#4477aa")).expect("builder")
}

proptest! {
    #[test]
    fn overlay_bars_each_count_their_own_in_range_values(
        primary in proptest::collection::vec(-300.0f64..300.0, 1..80),
        secondary in proptest::collection::vec(-300.0f64..300.0, 1..80),
        bucket_count in 1usize..40
    ) {
        let builder = builder(bucket_count);
        let a = scenario("A", &primary);
        let b = scenario("B", &secondary);

        let chart = builder
            .build("yield", &a, Some(&b), ChartStyle::Both)
            .expect("overlay");

        let bars: Vec<_> = chart.datasets_of_kind(DatasetKind::Bar).collect();
        prop_assert_eq!(bars.len(), 2);
        for (dataset, values) in bars.iter().zip([&primary, &secondary]) {
            let counts = dataset.data.as_values().expect("values");
            prop_assert_eq!(counts.len(), bucket_count);
            let total: f64 = counts.iter().sum();
            let in_range = values.iter().filter(|v| (-100.0..=100.0).contains(*v)).count();
            prop_assert!(total <= values.len() as f64);
            prop_assert!(total <= in_range as f64);
        }
        prop_assert_eq!(chart.labels.len(), bucket_count);
    }

    #[test]
    fn difference_range_is_symmetric_and_covers_every_change(
        raw_pairs in proptest::collection::vec((-50i32..50, -50i32..50), 0..60),
        bucket_count in 1usize..30
    ) {
        let pairs: Vec<(f64, f64)> = raw_pairs
            .iter()
            .map(|(l, r)| (f64::from(*l), f64::from(*r)))
            .collect();
        let left: Vec<f64> = pairs.iter().map(|(l, _)| *l).collect();
        let right: Vec<f64> = pairs.iter().map(|(_, r)| *r).collect();
        let builder = builder(bucket_count);

        let view = builder
            .build_view("yield", &scenario("L", &left), Some(&scenario("R", &right)), ChartStyle::Difference)
            .expect("difference");

        prop_assert_eq!(view.mode, DisplayMode::Difference);
        prop_assert_eq!(view.range.min, -view.range.max);
        prop_assert!(view.range.max >= 0.1);
        let nonzero = pairs.iter().filter(|(l, r)| l - r != 0.0).count();
        for (l, r) in &pairs {
            prop_assert!((l - r).abs() <= view.range.max);
        }

        let counts = view.chart.datasets[0].data.as_values().expect("values");
        let total: f64 = counts.iter().sum();
        prop_assert_eq!(total, nonzero as f64);
    }

    #[test]
    fn identical_scenarios_never_collapse_the_difference_range(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 0..50)
    ) {
        let a = scenario("A", &values);
        let view = builder(10)
            .build_view("yield", &a, Some(&a), ChartStyle::Difference)
            .expect("difference");
        prop_assert_eq!(view.range.max, 0.1);
        prop_assert_eq!(view.chart.tick_step_size, 0.5);
    }
}
