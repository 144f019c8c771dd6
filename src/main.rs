//! Bridge Analytics CLI
//!
//! Command-line front end for the bridge dashboard:
//! - Render the dashboard in the terminal
//! - Print the timeline-filtered records
//! - Export the filtered records
//! - Generate a default config file

use anyhow::Context;
use bridge_analytics::config::{generate_default_config, Config};
use bridge_analytics::export::{self, ExportFormat};
use bridge_analytics::report::{format_millions, Dashboard, FlowSummary};
use bridge_analytics::{render, Percent, RangeSelection, SeriesMetric, TimeSeriesRecord};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bridge-analytics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cross-chain bridge analytics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/bridge-analytics/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard
    Show {
        /// Timeline end, 0-100 (clamped)
        #[arg(short, long, allow_negative_numbers = true)]
        end: Option<Percent>,
        /// Chart series (volume, inflow, outflow)
        #[arg(short, long)]
        metric: Option<SeriesMetric>,
    },

    /// Print the records visible at a timeline position
    Filter {
        /// Timeline end, 0-100 (clamped)
        #[arg(short, long, allow_negative_numbers = true)]
        end: Option<Percent>,
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: ListFormat,
    },

    /// Export the records visible at a timeline position
    Export {
        /// Timeline end, 0-100 (clamped)
        #[arg(short, long, allow_negative_numbers = true)]
        end: Option<Percent>,
        /// Export format (csv, json, ndjson)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output of the `filter` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ListFormat::Table),
            "json" => Ok(ListFormat::Json),
            "csv" => Ok(ListFormat::Csv),
            other => Err(format!(
                "Unknown format '{}' (expected table, json or csv)",
                other
            )),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config);
    tracing::debug!("Bridge Analytics v{}", env!("CARGO_PKG_VERSION"));

    let dashboard = Dashboard::bridge().context("built-in dataset is invalid")?;
    let selection_for = |end: Option<Percent>| {
        RangeSelection::up_to(end.unwrap_or(config.timeline.end_percent))
    };

    match cli.command {
        Commands::Show { end, metric } => {
            let metric = metric.unwrap_or(config.timeline.metric);
            let snapshot = dashboard.snapshot(selection_for(end), metric);
            print!("{}", render::dashboard(&snapshot));
        }

        Commands::Filter { end, format } => {
            let view = dashboard.view(selection_for(end));

            match format {
                ListFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(view.records())?);
                }
                ListFormat::Csv => {
                    print!("{}", export::format(view.records(), ExportFormat::Csv)?);
                }
                ListFormat::Table => {
                    print_table(view.records());
                }
            }
        }

        Commands::Export {
            end,
            format,
            output,
        } => {
            let view = dashboard.view(selection_for(end));
            let data = export::format(view.records(), format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &data)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    tracing::info!(records = view.len(), "Exported to {:?}", path);
                    println!("Exported {} records to {:?}", view.len(), path);
                }
                None => {
                    print!("{}", data);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays pipeable
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("bridge_analytics={}", config.logging.level))
    });
    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn print_table(records: &[TimeSeriesRecord]) {
    if records.is_empty() {
        println!("No data for the selected time range");
        return;
    }

    println!(
        "{:<12} | {:>10} | {:>10} | {:>10}",
        "Date", "Inflow", "Outflow", "Volume"
    );
    println!("{}", "-".repeat(50));

    for record in records {
        println!(
            "{:<12} | {:>10} | {:>10} | {:>10}",
            record.label,
            format_millions(record.inflow, 2),
            format_millions(record.outflow, 2),
            format_millions(record.volume, 2)
        );
    }

    let summary = FlowSummary::from_records(records);
    println!("{}", "-".repeat(50));
    println!(
        "{:<12} | {:>10} | {:>10} | {:>10}",
        format!("{} rows", summary.records),
        format_millions(summary.total_inflow, 2),
        format_millions(summary.total_outflow, 2),
        format_millions(summary.total_volume, 2)
    );
    println!("Net flow: {}", format_millions(summary.net_flow, 2));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_format_parsing() {
        let cli = Cli::try_parse_from(["bridge-analytics", "filter", "--format", "JSON"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Filter {
                format: ListFormat::Json,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["bridge-analytics", "filter"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Filter {
                format: ListFormat::Table,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_formats_are_rejected() {
        assert!(Cli::try_parse_from(["bridge-analytics", "filter", "--format", "xml"]).is_err());
        assert!(Cli::try_parse_from(["bridge-analytics", "export", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_export_format_parsing() {
        let cli =
            Cli::try_parse_from(["bridge-analytics", "export", "-f", "jsonl", "--end", "-0"])
                .unwrap();
        match cli.command {
            Commands::Export { format, end, .. } => {
                assert_eq!(format, ExportFormat::Ndjson);
                assert_eq!(end.unwrap().to_string(), "0%");
            }
            _ => panic!("expected export command"),
        }
    }
}
