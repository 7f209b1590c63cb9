pub mod binning;
pub mod scenario;
pub mod stats;
pub mod types;

pub use binning::{BucketSet, bin, bin_range};
pub use scenario::{AreaRecord, Scenario, ScenarioMetadata, area_record};
pub use stats::{
    MIN_DIFFERENCE_HALF_WIDTH, extract_values, mean, retain_nonzero, scenario_differences,
    symmetric_half_width,
};
pub use types::{IndicatorName, NumericRange};
