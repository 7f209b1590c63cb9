//! indicator-histogram: chart payloads for per-area indicator distributions.
//!
//! Raw per-area indicator values of one or two modelling scenarios are binned
//! into fixed-width buckets and assembled into a renderer-agnostic chart
//! payload, in one of three layouts: a single scenario, two scenarios
//! overlaid, or the distribution of their per-area differences.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartData, ChartStyle, DisplayMode, HistogramBuilder, HistogramConfig};
pub use error::{HistogramError, HistogramResult};
