//! Terminal rendering
//!
//! Draws a [`DashboardSnapshot`] as plain text: status banner, metric cards,
//! the filtered activity chart with its slider, hourly bars and the token
//! distribution.

use std::fmt::{self, Write};

use crate::dataset::Trend;
use crate::report::{format_millions, DashboardSnapshot};

/// Width of the widest bar, in characters
const BAR_WIDTH: usize = 40;

const TITLE: &str = "Sui Bridge Analytics";
const SUBTITLE: &str = "Real-time analytics for cross-chain bridge activity";

/// Render the whole dashboard
pub fn dashboard(snapshot: &DashboardSnapshot) -> String {
    DashboardText(snapshot).to_string()
}

/// Text form of a snapshot, usable with `{}`
pub struct DashboardText<'a>(pub &'a DashboardSnapshot);

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        header(f, snapshot)?;
        cards(f, snapshot)?;
        activity_chart(f, snapshot)?;
        hourly_chart(f, snapshot)?;
        token_distribution(f, snapshot)
    }
}

/// Bar of `width` cells scaled against `max`
fn bar(value: f64, max: f64, width: usize) -> String {
    let cells = if max > 0.0 {
        ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
    } else {
        0
    };
    "█".repeat(cells)
}

fn section(out: &mut impl Write, title: &str, description: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", description)?;
    writeln!(out, "{}", "-".repeat(60))
}

fn header(out: &mut impl Write, snapshot: &DashboardSnapshot) -> fmt::Result {
    let marker = if snapshot.status.operational { "✓" } else { "!" };

    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", SUBTITLE)?;
    writeln!(out)?;
    writeln!(
        out,
        "[{}] {} - {}",
        marker, snapshot.status.title, snapshot.status.description
    )
}

fn cards(out: &mut impl Write, snapshot: &DashboardSnapshot) -> fmt::Result {
    writeln!(out)?;
    for card in &snapshot.cards {
        let arrow = match card.trend {
            Trend::Positive => "↑",
            Trend::Negative => "↓",
        };
        writeln!(
            out,
            "{} {:<14} {:>9}  {:>7} {}  {}",
            card.icon.glyph(),
            card.title,
            card.value,
            card.change,
            arrow,
            card.description
        )?;
    }
    Ok(())
}

fn activity_chart(out: &mut impl Write, snapshot: &DashboardSnapshot) -> fmt::Result {
    section(
        out,
        "Bridge Activity Analysis",
        "Historical trends with interactive timeline",
    )?;
    writeln!(
        out,
        "Metric: {}   Range: 0% - {}% (through {})",
        snapshot.metric.title(),
        snapshot.end_percent,
        snapshot.cutoff_label
    )?;
    writeln!(out)?;

    if snapshot.area.is_empty() {
        writeln!(out, "No data for selected range")?;
    } else {
        let max = snapshot
            .area
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);

        for point in &snapshot.area {
            writeln!(
                out,
                "{:<12} | {:<width$} {}",
                point.label,
                bar(point.value, max, BAR_WIDTH),
                format_millions(point.value, 2),
                width = BAR_WIDTH
            )?;
        }
    }

    writeln!(out)?;
    slider(out, snapshot)
}

fn slider(out: &mut impl Write, snapshot: &DashboardSnapshot) -> fmt::Result {
    let filled = ((snapshot.end_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    writeln!(
        out,
        "[{}{}] {}%",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        snapshot.end_percent
    )?;

    let (start, end) = &snapshot.slider_labels;
    let gap = (BAR_WIDTH + 2).saturating_sub(start.len() + end.len()).max(1);
    writeln!(out, "{}{}{}", start, " ".repeat(gap), end)
}

fn hourly_chart(out: &mut impl Write, snapshot: &DashboardSnapshot) -> fmt::Result {
    section(
        out,
        "24h Transaction Activity",
        "Hourly transaction distribution",
    )?;

    for b in &snapshot.bars {
        writeln!(
            out,
            "{:<6} | {:<width$} {}",
            b.label,
            bar(b.height_percent, 100.0, BAR_WIDTH),
            b.value,
            width = BAR_WIDTH
        )?;
    }
    Ok(())
}

fn token_distribution(out: &mut impl Write, snapshot: &DashboardSnapshot) -> fmt::Result {
    section(out, "Token Distribution", "Total Value Locked by Token")?;

    for token in &snapshot.tokens {
        let sign = if token.is_gain { "▲" } else { "▼" };
        writeln!(
            out,
            "{:<6} {:>8}  {} {}",
            token.name, token.tvl_label, sign, token.change
        )?;

        let filled = bar(token.width_percent, 100.0, BAR_WIDTH);
        let empty = "░".repeat(BAR_WIDTH - filled.chars().count());
        writeln!(out, "       {}{}", filled, empty)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SeriesMetric;
    use crate::report::Dashboard;
    use crate::timeline::{Percent, RangeSelection};

    fn render(end: f64, metric: SeriesMetric) -> String {
        let dashboard = Dashboard::bridge().unwrap();
        let selection = RangeSelection::up_to(Percent::clamped(end).unwrap());
        super::dashboard(&dashboard.snapshot(selection, metric))
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(5.0, 0.0, 10), "");
    }

    #[test]
    fn test_renders_every_section() {
        let text = render(100.0, SeriesMetric::Volume);

        assert!(text.contains("Sui Bridge Analytics"));
        assert!(text.contains("Bridge Status: Operational"));
        assert!(text.contains("24h Volume"));
        assert!(text.contains("Avg Time"));
        assert!(text.contains("Bridge Activity Analysis"));
        assert!(text.contains("24h Transaction Activity"));
        assert!(text.contains("Token Distribution"));
        assert!(text.contains("$12.5M"));
        assert!(text.contains("Jan 1, 2024"));
        assert!(text.contains("Apr 15, 2024"));
    }

    #[test]
    fn test_chart_follows_slider() {
        let full = render(100.0, SeriesMetric::Volume);
        assert!(full.contains("2024-04-15"));
        assert!(full.contains("$7.10M"));

        let start = render(0.0, SeriesMetric::Inflow);
        assert!(start.contains("2024-01-01"));
        assert!(!start.contains("2024-01-15"));
        assert!(start.contains("Metric: Inflow"));
        assert!(start.contains("$2.50M"));
    }

    #[test]
    fn test_display_matches_dashboard() {
        let dashboard = Dashboard::bridge().unwrap();
        let snapshot = dashboard.snapshot(RangeSelection::full(), SeriesMetric::Outflow);

        assert_eq!(format!("{}", DashboardText(&snapshot)), super::dashboard(&snapshot));
    }

    #[test]
    fn test_negative_zero_range_label() {
        let text = render(-0.0, SeriesMetric::Volume);
        assert!(text.contains("Range: 0% - 0% "));
        assert!(!text.contains("-0%"));
    }
}
