//! Export
//!
//! Serializes a filtered view for use outside the dashboard.
//!
//! - CSV: `date,timestamp,inflow,outflow,volume` with a header row
//! - JSON: pretty-printed array
//! - NDJSON: one object per line

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

use crate::dataset::TimeSeriesRecord;

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown export format: {0} (expected csv, json or ndjson)")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Ndjson,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Ndjson => "ndjson",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "ndjson" | "jsonl" => Ok(ExportFormat::Ndjson),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Column order of exported rows
#[derive(Serialize)]
struct ExportRow<'a> {
    date: &'a str,
    timestamp: i64,
    inflow: f64,
    outflow: f64,
    volume: f64,
}

impl<'a> From<&'a TimeSeriesRecord> for ExportRow<'a> {
    fn from(record: &'a TimeSeriesRecord) -> Self {
        Self {
            date: &record.label,
            timestamp: record.timestamp,
            inflow: record.inflow,
            outflow: record.outflow,
            volume: record.volume,
        }
    }
}

/// Render records in the requested format
pub fn format(records: &[TimeSeriesRecord], format: ExportFormat) -> ExportResult<String> {
    tracing::debug!(records = records.len(), %format, "Exporting records");

    match format {
        ExportFormat::Csv => format_csv(records),
        ExportFormat::Json => format_json(records),
        ExportFormat::Ndjson => format_ndjson(records),
    }
}

fn format_csv(records: &[TimeSeriesRecord]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer.serialize(ExportRow::from(record))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn format_json(records: &[TimeSeriesRecord]) -> ExportResult<String> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(ExportRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn format_ndjson(records: &[TimeSeriesRecord]) -> ExportResult<String> {
    let mut ndjson = String::new();

    for record in records {
        ndjson.push_str(&serde_json::to_string(&ExportRow::from(record))?);
        ndjson.push('\n');
    }

    Ok(ndjson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::mock::historical_flows;

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("jsonl".parse::<ExportFormat>().unwrap(), ExportFormat::Ndjson);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_csv_layout() {
        let records = historical_flows();
        let csv = format(&records[..2], ExportFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,timestamp,inflow,outflow,volume");
        assert!(lines[1].starts_with("2024-01-01,1704067200000,"));
        assert!(lines[2].starts_with("2024-01-15,1705276800000,"));
    }

    #[test]
    fn test_json_array() {
        let records = historical_flows();
        let json = format(&records[..3], ExportFormat::Json).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2]["date"], "2024-02-01");
        assert_eq!(parsed[2]["volume"], 6_000_000.0);
    }

    #[test]
    fn test_ndjson_lines() {
        let records = historical_flows();
        let ndjson = format(&records, ExportFormat::Ndjson).unwrap();

        assert_eq!(ndjson.lines().count(), records.len());
        for (line, record) in ndjson.lines().zip(&records) {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["timestamp"], record.timestamp);
        }
    }
}
