mod axis_ticks;
mod chart_data;
mod colormap;
mod config;
mod histogram_builder;
mod json_contract;
mod label_format;

pub use axis_ticks::{AxisTick, MAX_AXIS_TICKS, axis_ticks, tick_step_size};
pub use chart_data::{ChartData, ChartDataset, ChartPoint, DatasetData, DatasetKind, Paint};
pub use colormap::{Colormap, DIFF_COLORMAP_KEY, UniformColormap};
pub use config::{DEFAULT_BUCKET_COUNT, HistogramConfig};
pub use histogram_builder::{
    COMPARE_COLOR, ChartStyle, DisplayMode, HistogramBuilder, HistogramView, MEAN_MARKER_COLOR,
    TRANSPARENT_COLOR, build_chart_data,
};
pub use json_contract::{CHART_DATA_JSON_SCHEMA_V1, ChartDataJsonContractV1};
pub use label_format::{MINUS_SIGN, pretty_label};
