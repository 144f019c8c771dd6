//! # Bridge Analytics
//!
//! Analytics dashboard for a cross-chain bridge: summary cards, a
//! timeline-filtered activity chart, hourly transactions and the token
//! distribution, all over a static snapshot of bridge data.
//!
//! ## Modules
//!
//! - [`dataset`]: Record types and the built-in bridge data
//! - [`timeline`]: Slider-driven range filter
//! - [`report`]: View models shared by every renderer
//! - [`render`]: Plain-text dashboard
//! - [`export`]: CSV / JSON / NDJSON output
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_analytics::{Dashboard, Percent, RangeSelection, SeriesMetric};
//!
//! let dashboard = Dashboard::bridge().unwrap();
//!
//! // Slider at 50%
//! let selection = RangeSelection::up_to(Percent::clamped(50.0).unwrap());
//! let snapshot = dashboard.snapshot(selection, SeriesMetric::Volume);
//!
//! println!("{}", bridge_analytics::render::dashboard(&snapshot));
//! ```

pub mod config;
pub mod dataset;
pub mod export;
pub mod render;
pub mod report;
pub mod timeline;

// Re-export top-level types for convenience
pub use dataset::{
    BridgeStatus, Dataset, HourlyActivity, MetricSummary, SeriesMetric, TimeSeriesRecord,
    TokenShare, Trend,
};

pub use timeline::{
    compute_filtered_view, cutoff_timestamp, FilteredView, Percent, RangeError, RangeSelection,
    Timeline, TimelineError,
};

pub use report::{Dashboard, DashboardSnapshot, FlowSummary};

pub use export::{ExportError, ExportFormat};

pub use config::{Config, ConfigError, LoggingConfig, TimelineConfig};
