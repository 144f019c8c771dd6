//! Presentation bindings
//!
//! Turns the dataset and a filtered view into the plain values every
//! renderer draws: area series, bar heights, token rows and labels. The text
//! renderer and the browser UI both consume these, so neither carries its own
//! arithmetic.

use chrono::DateTime;
use serde::Serialize;

use crate::dataset::{
    BridgeStatus, Dataset, HourlyActivity, MetricSummary, SeriesMetric, TimeSeriesRecord,
    TokenShare,
};
use crate::timeline::{FilteredView, RangeSelection, Timeline, TimelineResult};

/// Format a USD amount in millions, e.g. `$4.60M`
pub fn format_millions(value: f64, decimals: usize) -> String {
    format!("${:.*}M", decimals, value / 1_000_000.0)
}

/// Tooltip line for one chart value, e.g. `Volume: $4.60M`
pub fn tooltip_line(metric: SeriesMetric, value: f64) -> String {
    format!("{}: {}", metric.title(), format_millions(value, 2))
}

/// Short date for a millisecond timestamp, e.g. `Jan 1, 2024`
pub fn format_date(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One point of the area chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AreaPoint {
    pub label: String,
    pub timestamp: i64,
    pub value: f64,
}

/// The selected metric across the visible records
pub fn area_series(view: &FilteredView<'_>, metric: SeriesMetric) -> Vec<AreaPoint> {
    view.iter()
        .map(|record| AreaPoint {
            label: record.label.clone(),
            timestamp: record.timestamp,
            value: record.value(metric),
        })
        .collect()
}

/// One bar of the hourly chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
    /// Height relative to the tallest bar, `0..=100`
    pub height_percent: f64,
}

/// Hourly transaction bars scaled so the busiest slot is 100%
pub fn hourly_bars(hours: &[HourlyActivity]) -> Vec<Bar> {
    let max = hours.iter().map(|h| h.transactions).max().unwrap_or(0);

    hours
        .iter()
        .map(|h| Bar {
            label: h.hour.clone(),
            value: h.transactions,
            height_percent: if max == 0 {
                0.0
            } else {
                h.transactions as f64 / max as f64 * 100.0
            },
        })
        .collect()
}

/// One row of the token distribution list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TokenRow {
    pub name: String,
    /// e.g. `$12.5M`
    pub tvl_label: String,
    pub change: String,
    pub is_gain: bool,
    /// Progress bar width, `0..=100`
    pub width_percent: f64,
}

pub fn token_rows(tokens: &[TokenShare]) -> Vec<TokenRow> {
    tokens
        .iter()
        .map(|t| TokenRow {
            name: t.name.clone(),
            tvl_label: format_millions(t.tvl, 1),
            change: t.change.clone(),
            is_gain: t.is_gain(),
            width_percent: t.percentage.clamp(0.0, 100.0),
        })
        .collect()
}

/// Totals over a run of records
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FlowSummary {
    pub records: usize,
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub total_volume: f64,
    pub net_flow: f64,
    pub average_volume: Option<f64>,
    /// Label and volume of the busiest record
    pub peak: Option<(String, f64)>,
}

impl FlowSummary {
    pub fn from_records(records: &[TimeSeriesRecord]) -> Self {
        let total_inflow: f64 = records.iter().map(|r| r.inflow).sum();
        let total_outflow: f64 = records.iter().map(|r| r.outflow).sum();
        let total_volume: f64 = records.iter().map(|r| r.volume).sum();

        let average_volume = if records.is_empty() {
            None
        } else {
            Some(total_volume / records.len() as f64)
        };

        let peak = records
            .iter()
            .max_by(|a, b| a.volume.total_cmp(&b.volume))
            .map(|r| (r.label.clone(), r.volume));

        Self {
            records: records.len(),
            total_inflow,
            total_outflow,
            total_volume,
            net_flow: total_inflow - total_outflow,
            average_volume,
            peak,
        }
    }
}

/// Everything needed to draw the dashboard once
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub status: BridgeStatus,
    pub cards: Vec<MetricSummary>,
    pub metric: SeriesMetric,
    /// Slider position, `0..=100`
    pub end_percent: f64,
    pub cutoff_label: String,
    /// Labels under the two ends of the slider
    pub slider_labels: (String, String),
    pub area: Vec<AreaPoint>,
    pub summary: FlowSummary,
    pub bars: Vec<Bar>,
    pub tokens: Vec<TokenRow>,
}

/// Static dataset plus its validated timeline
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    timeline: Timeline,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> TimelineResult<Self> {
        let timeline = Timeline::new(dataset.history.clone())?;
        Ok(Self { dataset, timeline })
    }

    /// Dashboard over the built-in bridge data
    pub fn bridge() -> TimelineResult<Self> {
        Self::new(Dataset::bridge())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn view(&self, selection: RangeSelection) -> FilteredView<'_> {
        self.timeline.view(selection)
    }

    pub fn slider_labels(&self) -> (String, String) {
        (
            format_date(self.timeline.first().timestamp),
            format_date(self.timeline.last().timestamp),
        )
    }

    /// Recompute every panel for one selection
    pub fn snapshot(&self, selection: RangeSelection, metric: SeriesMetric) -> DashboardSnapshot {
        let view = self.view(selection);

        DashboardSnapshot {
            status: self.dataset.status.clone(),
            cards: self.dataset.cards.clone(),
            metric,
            end_percent: selection.end().value(),
            cutoff_label: format_date(view.cutoff() as i64),
            slider_labels: self.slider_labels(),
            area: area_series(&view, metric),
            summary: FlowSummary::from_records(view.records()),
            bars: hourly_bars(&self.dataset.hourly),
            tokens: token_rows(&self.dataset.tokens),
        }
    }
}
