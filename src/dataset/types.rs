//! Core data types for the bridge dashboard
//!
//! - `TimeSeriesRecord`: one point of historical bridge flow
//! - `SeriesMetric`: which flow field a chart plots
//! - `HourlyActivity`, `TokenShare`, `MetricSummary`, `BridgeStatus`:
//!   the static panels around the main chart

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A single historical flow measurement
///
/// Records are immutable once the dataset is built and are always kept in
/// ascending `timestamp` order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesRecord {
    /// Display date (e.g. "2024-01-15")
    #[serde(rename = "date")]
    pub label: String,
    /// Value bridged in, USD
    pub inflow: f64,
    /// Value bridged out, USD
    pub outflow: f64,
    /// Total bridged volume, USD
    pub volume: f64,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl TimeSeriesRecord {
    pub fn new(
        label: impl Into<String>,
        inflow: f64,
        outflow: f64,
        volume: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            label: label.into(),
            inflow,
            outflow,
            volume,
            timestamp,
        }
    }

    /// Value of the given metric for this record
    pub fn value(&self, metric: SeriesMetric) -> f64 {
        match metric {
            SeriesMetric::Volume => self.volume,
            SeriesMetric::Inflow => self.inflow,
            SeriesMetric::Outflow => self.outflow,
        }
    }

    /// Inflow minus outflow
    pub fn net_flow(&self) -> f64 {
        self.inflow - self.outflow
    }
}

/// Flow metric plotted by the area chart
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMetric {
    #[default]
    Volume,
    Inflow,
    Outflow,
}

impl SeriesMetric {
    /// All metrics in selector order
    pub fn all() -> &'static [SeriesMetric] {
        &[
            SeriesMetric::Volume,
            SeriesMetric::Inflow,
            SeriesMetric::Outflow,
        ]
    }

    /// Capitalized name for buttons and legends
    pub fn title(&self) -> &'static str {
        match self {
            SeriesMetric::Volume => "Volume",
            SeriesMetric::Inflow => "Inflow",
            SeriesMetric::Outflow => "Outflow",
        }
    }
}

impl std::fmt::Display for SeriesMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesMetric::Volume => write!(f, "volume"),
            SeriesMetric::Inflow => write!(f, "inflow"),
            SeriesMetric::Outflow => write!(f, "outflow"),
        }
    }
}

/// Unknown metric name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown metric: {0} (expected volume, inflow or outflow)")]
pub struct ParseMetricError(pub String);

impl FromStr for SeriesMetric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Ok(SeriesMetric::Volume),
            "inflow" => Ok(SeriesMetric::Inflow),
            "outflow" => Ok(SeriesMetric::Outflow),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

/// Transaction count for one slot of the day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourlyActivity {
    /// Slot start, "HH:MM"
    pub hour: String,
    pub transactions: u32,
}

impl HourlyActivity {
    pub fn new(hour: impl Into<String>, transactions: u32) -> Self {
        Self {
            hour: hour.into(),
            transactions,
        }
    }
}

/// Share of total value locked held in one token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenShare {
    pub name: String,
    /// Value locked, USD
    pub tvl: f64,
    /// Share of total TVL, 0..=100
    pub percentage: f64,
    /// Signed change string, e.g. "+12.5%"
    pub change: String,
}

impl TokenShare {
    pub fn new(
        name: impl Into<String>,
        tvl: f64,
        percentage: f64,
        change: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tvl,
            percentage,
            change: change.into(),
        }
    }

    /// A change is shown as a gain only when it carries an explicit `+`
    pub fn is_gain(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Direction a summary card is coloured in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

/// Icon shown on a summary card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardIcon {
    Dollar,
    Wallet,
    Activity,
    Clock,
}

impl CardIcon {
    /// Glyph used by text and HTML renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            CardIcon::Dollar => "$",
            CardIcon::Wallet => "👛",
            CardIcon::Activity => "📈",
            CardIcon::Clock => "⏱",
        }
    }
}

/// Headline metric card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSummary {
    pub title: String,
    /// Pre-formatted value (e.g. "$7.9M")
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub description: String,
    pub icon: CardIcon,
}

/// Operational banner shown next to the page title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeStatus {
    pub title: String,
    pub description: String,
    pub operational: bool,
}
