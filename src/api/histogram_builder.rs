use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BucketSet, NumericRange, Scenario, bin_range, extract_values, mean, retain_nonzero,
    scenario_differences, symmetric_half_width,
};
use crate::error::{HistogramError, HistogramResult};

use super::axis_ticks::{AxisTick, axis_ticks, tick_step_size};
use super::chart_data::{ChartData, ChartDataset, ChartPoint, DatasetData, DatasetKind, Paint};
use super::colormap::{Colormap, DIFF_COLORMAP_KEY, bucket_colors};
use super::config::HistogramConfig;
use super::label_format::{MINUS_SIGN, pretty_label};

pub const MEAN_MARKER_COLOR: &str = "#000000";
pub const COMPARE_COLOR: &str = "#ff0000";
pub const TRANSPARENT_COLOR: &str = "rgba(0, 0, 0, 0)";

const MEAN_MARKER_BASE_Y: f64 = 5.0;
const MEAN_MARKER_HEADROOM: f64 = 1.1;
const MEAN_MARKER_DASH: [f64; 2] = [5.0, 5.0];
const MEAN_MARKER_WIDTH: f64 = 2.0;
const COMPARE_BAR_BORDER_WIDTH: f64 = 1.0;
const COMPARE_BAR_ORDER: i32 = 1;
const PRIMARY_BAR_ORDER: i32 = 2;

/// How a comparison scenario is shown next to the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Both distributions on one axis.
    Both,
    /// Distribution of per-area differences.
    Difference,
}

impl FromStr for ChartStyle {
    type Err = HistogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "difference" => Ok(Self::Difference),
            other => Err(HistogramError::UnknownChartStyle(other.to_owned())),
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Both => "both",
            Self::Difference => "difference",
        })
    }
}

/// Resolved chart layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Single,
    Overlay,
    Difference,
}

impl DisplayMode {
    /// Without a comparison scenario the chart is always [`DisplayMode::Single`].
    #[must_use]
    pub fn resolve(has_compare: bool, style: ChartStyle) -> Self {
        match (has_compare, style) {
            (false, _) => Self::Single,
            (true, ChartStyle::Both) => Self::Overlay,
            (true, ChartStyle::Difference) => Self::Difference,
        }
    }

    /// Whether axis labels carry an explicit `+` for positive values.
    #[must_use]
    pub fn signed_axis(self) -> bool {
        matches!(self, Self::Difference)
    }
}

/// Assembled chart plus the layout and bin range it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramView {
    pub mode: DisplayMode,
    pub range: NumericRange,
    pub chart: ChartData,
}

impl HistogramView {
    /// Labelled ticks a renderer honoring `tickStepSize` would draw.
    pub fn axis_ticks(&self) -> HistogramResult<Vec<AxisTick>> {
        axis_ticks(
            self.range,
            self.chart.tick_step_size,
            self.mode.signed_axis(),
        )
    }
}

/// Turns scenario values into histogram chart payloads.
///
/// Holds the display configuration and the colormap so every call is a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct HistogramBuilder<C: Colormap> {
    config: HistogramConfig,
    colormap: C,
}

impl<C: Colormap> HistogramBuilder<C> {
    pub fn new(config: HistogramConfig, colormap: C) -> HistogramResult<Self> {
        config.validate()?;
        Ok(Self { config, colormap })
    }

    #[must_use]
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    #[must_use]
    pub fn colormap(&self) -> &C {
        &self.colormap
    }

    /// Builds the chart payload for `indicator`.
    ///
    /// `compare = None` always yields a single-scenario chart; otherwise
    /// `style` picks overlay or difference.
    pub fn build(
        &self,
        indicator: &str,
        scenario: &Scenario,
        compare: Option<&Scenario>,
        style: ChartStyle,
    ) -> HistogramResult<ChartData> {
        Ok(self.build_view(indicator, scenario, compare, style)?.chart)
    }

    /// Like [`Self::build`], with the style given as its `"both"` /
    /// `"difference"` tag. The tag is only inspected when `compare` is set.
    pub fn build_from_tag(
        &self,
        indicator: &str,
        scenario: &Scenario,
        compare: Option<&Scenario>,
        style_tag: &str,
    ) -> HistogramResult<ChartData> {
        let style = match compare {
            Some(_) => style_tag.parse()?,
            None => ChartStyle::Both,
        };
        self.build(indicator, scenario, compare, style)
    }

    pub fn build_view(
        &self,
        indicator: &str,
        scenario: &Scenario,
        compare: Option<&Scenario>,
        style: ChartStyle,
    ) -> HistogramResult<HistogramView> {
        if !self.config.knows_indicator(indicator) {
            return Err(HistogramError::InvalidData(format!(
                "unknown indicator `{indicator}`"
            )));
        }

        let mode = DisplayMode::resolve(compare.is_some(), style);
        let view = match (mode, compare) {
            (DisplayMode::Overlay, Some(compare)) => self.overlay(indicator, scenario, compare)?,
            (DisplayMode::Difference, Some(compare)) => {
                self.difference(indicator, scenario, compare)?
            }
            _ => self.single(indicator, scenario)?,
        };

        debug!(
            indicator,
            mode = ?view.mode,
            bucket_count = view.chart.labels.len(),
            datasets = view.chart.datasets.len(),
            tick_step_size = view.chart.tick_step_size,
            "built histogram chart"
        );
        Ok(view)
    }

    fn single(&self, indicator: &str, scenario: &Scenario) -> HistogramResult<HistogramView> {
        let summary = self.summarize(indicator, scenario)?;
        let top = marker_top(summary.buckets.max_count());
        let colors = bucket_colors(&self.colormap, indicator, self.config.bucket_count)?;

        let datasets = vec![
            mean_marker(summary.mean, top, MEAN_MARKER_COLOR),
            histogram_bars(
                scenario.short_name(),
                &summary.buckets,
                Paint::PerBucket(colors),
            ),
        ];
        Ok(self.scaled_view(DisplayMode::Single, summary.buckets, datasets))
    }

    fn overlay(
        &self,
        indicator: &str,
        scenario: &Scenario,
        compare: &Scenario,
    ) -> HistogramResult<HistogramView> {
        let primary = self.summarize(indicator, scenario)?;
        let secondary = self.summarize(indicator, compare)?;
        let top = marker_top(
            primary
                .buckets
                .max_count()
                .max(secondary.buckets.max_count()),
        );
        let colors = bucket_colors(&self.colormap, indicator, self.config.bucket_count)?;

        let mut primary_bars = histogram_bars(
            scenario.short_name(),
            &primary.buckets,
            Paint::PerBucket(colors),
        );
        primary_bars.grouped = Some(false);
        primary_bars.order = Some(PRIMARY_BAR_ORDER);

        let mut compare_bars = histogram_bars(
            compare.short_name(),
            &secondary.buckets,
            Paint::Single(TRANSPARENT_COLOR.to_owned()),
        );
        compare_bars.border_color = Some(COMPARE_COLOR.to_owned());
        compare_bars.border_width = Some(COMPARE_BAR_BORDER_WIDTH);
        compare_bars.grouped = Some(false);
        compare_bars.order = Some(COMPARE_BAR_ORDER);

        let datasets = vec![
            mean_marker(primary.mean, top, MEAN_MARKER_COLOR),
            mean_marker(secondary.mean, top, COMPARE_COLOR),
            primary_bars,
            compare_bars,
        ];
        Ok(self.scaled_view(DisplayMode::Overlay, primary.buckets, datasets))
    }

    fn difference(
        &self,
        indicator: &str,
        scenario: &Scenario,
        compare: &Scenario,
    ) -> HistogramResult<HistogramView> {
        let differences = scenario_differences(indicator, scenario, compare)?;
        let retained = retain_nonzero(&differences);
        let half_width = symmetric_half_width(&retained);
        let range = NumericRange::symmetric(half_width)?;
        let buckets = bin_range(&retained, range, self.config.bucket_count)?;
        debug!(
            areas = differences.len(),
            retained = retained.len(),
            binned = buckets.total(),
            half_width,
            "binned scenario differences"
        );

        let colors = bucket_colors(&self.colormap, DIFF_COLORMAP_KEY, self.config.bucket_count)?;
        let label = format!(
            "{} {MINUS_SIGN} {}",
            scenario.short_name(),
            compare.short_name()
        );
        let bars = histogram_bars(label, &buckets, Paint::PerBucket(colors));

        Ok(HistogramView {
            mode: DisplayMode::Difference,
            range,
            chart: ChartData {
                labels: buckets.centres,
                datasets: vec![bars],
                tick_step_size: tick_step_size(range.max, range.min),
            },
        })
    }

    fn summarize(&self, indicator: &str, scenario: &Scenario) -> HistogramResult<ScenarioSummary> {
        if scenario.is_empty() {
            return Err(HistogramError::EmptyScenario {
                scenario: scenario.short_name().to_owned(),
            });
        }
        let values = extract_values(indicator, scenario);
        let buckets = bin_range(&values, self.config.scale, self.config.bucket_count)?;
        let dropped = values.len() - buckets.total();
        if dropped > 0 {
            debug!(
                scenario = scenario.short_name(),
                dropped, "values outside the display range were not binned"
            );
        }
        Ok(ScenarioSummary {
            mean: mean(&values),
            buckets,
        })
    }

    fn scaled_view(
        &self,
        mode: DisplayMode,
        buckets: BucketSet,
        datasets: Vec<ChartDataset>,
    ) -> HistogramView {
        let range = self.config.scale;
        HistogramView {
            mode,
            range,
            chart: ChartData {
                labels: buckets.centres,
                datasets,
                tick_step_size: tick_step_size(range.max, range.min),
            },
        }
    }
}

/// One-shot [`HistogramBuilder::build`] without keeping a builder around.
pub fn build_chart_data<C: Colormap>(
    config: &HistogramConfig,
    colormap: C,
    indicator: &str,
    scenario: &Scenario,
    compare: Option<&Scenario>,
    style: ChartStyle,
) -> HistogramResult<ChartData> {
    HistogramBuilder::new(config.clone(), colormap)?.build(indicator, scenario, compare, style)
}

struct ScenarioSummary {
    mean: f64,
    buckets: BucketSet,
}

fn marker_top(max_count: usize) -> f64 {
    MEAN_MARKER_HEADROOM * max_count as f64
}

/// Vertical dashed line at `mean`, drawn as a two-point scatter segment.
fn mean_marker(mean: f64, top: f64, color: &str) -> ChartDataset {
    let mut marker = ChartDataset::new(
        DatasetKind::Scatter,
        format!("Mean: {}", pretty_label(mean, false)),
        DatasetData::Points(vec![
            ChartPoint::new(mean, MEAN_MARKER_BASE_Y),
            ChartPoint::new(mean, top),
        ]),
    );
    marker.show_line = Some(true);
    marker.border_color = Some(color.to_owned());
    marker.border_dash = Some(MEAN_MARKER_DASH.to_vec());
    marker.border_width = Some(MEAN_MARKER_WIDTH);
    marker.point_radius = Some(0.0);
    marker.point_style = Some("line".to_owned());
    marker
}

fn histogram_bars(label: impl Into<String>, buckets: &BucketSet, fill: Paint) -> ChartDataset {
    let counts = buckets.counts.iter().map(|&count| count as f64).collect();
    let mut bars = ChartDataset::new(DatasetKind::Bar, label, DatasetData::Values(counts));
    bars.background_color = Some(fill);
    bars.category_percentage = Some(1.0);
    bars.bar_percentage = Some(1.0);
    bars
}
