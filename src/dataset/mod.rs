//! Bridge Dataset
//!
//! Typed records and the static snapshot the dashboard renders:
//!
//! - **types**: `TimeSeriesRecord`, `SeriesMetric` and the panel types
//! - **mock**: the built-in bridge data

pub mod mock;
pub mod types;

pub use mock::Dataset;
pub use types::{
    BridgeStatus, CardIcon, HourlyActivity, MetricSummary, ParseMetricError, SeriesMetric,
    TimeSeriesRecord, TokenShare, Trend,
};
