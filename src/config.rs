//! Configuration System
//!
//! Loads dashboard defaults from a TOML file with environment variable
//! overrides. Command-line flags are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::SeriesMetric;
use crate::timeline::{Percent, RangeSelection};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub timeline: TimelineConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial slider position and chart metric
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimelineConfig {
    #[serde(default)]
    pub end_percent: Percent,

    #[serde(default)]
    pub metric: SeriesMetric,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            end_percent: Percent::FULL,
            metric: SeriesMetric::default(),
        }
    }
}

impl TimelineConfig {
    pub fn selection(&self) -> RangeSelection {
        RangeSelection::up_to(self.end_percent)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "BRIDGE_ANALYTICS";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("bridge-analytics").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply overrides looked up through `lookup`
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(&format!("{ENV_PREFIX}_END_PERCENT")) {
            match raw.parse::<Percent>() {
                Ok(percent) => self.timeline.end_percent = percent,
                Err(e) => tracing::warn!("Ignoring {ENV_PREFIX}_END_PERCENT: {}", e),
            }
        }

        if let Some(raw) = lookup(&format!("{ENV_PREFIX}_METRIC")) {
            match raw.parse::<SeriesMetric>() {
                Ok(metric) => self.timeline.metric = metric,
                Err(e) => tracing::warn!("Ignoring {ENV_PREFIX}_METRIC: {}", e),
            }
        }

        if let Some(level) = lookup(&format!("{ENV_PREFIX}_LOG_LEVEL")) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(&format!("{ENV_PREFIX}_LOG_FORMAT")) {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Bridge Analytics Configuration
#
# Environment variables override these settings:
# - BRIDGE_ANALYTICS_END_PERCENT
# - BRIDGE_ANALYTICS_METRIC
# - BRIDGE_ANALYTICS_LOG_LEVEL
# - BRIDGE_ANALYTICS_LOG_FORMAT

[timeline]
# Initial slider position, 0-100 (out-of-range values are clamped)
end_percent = 100

# Series shown in the activity chart: volume, inflow or outflow
metric = "volume"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.timeline.end_percent, Percent::FULL);
        assert_eq!(config.timeline.metric, SeriesMetric::Volume);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.timeline.selection(), RangeSelection::full());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[timeline]\nmetric = \"inflow\"\n").unwrap();

        assert_eq!(config.timeline.metric, SeriesMetric::Inflow);
        assert_eq!(config.timeline.end_percent, Percent::FULL);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_end_percent_is_clamped() {
        let config = Config::parse("[timeline]\nend_percent = 140\n").unwrap();
        assert_eq!(config.timeline.end_percent, Percent::FULL);

        let config = Config::parse("[timeline]\nend_percent = -5.5\n").unwrap();
        assert_eq!(config.timeline.end_percent, Percent::ZERO);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeline]\nend_percent = 40.0\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.timeline.end_percent.value(), 40.0);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/bridge-analytics.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeline]\nmetric = \"tvl\"").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("BRIDGE_ANALYTICS_END_PERCENT", "25"),
            ("BRIDGE_ANALYTICS_METRIC", "outflow"),
            ("BRIDGE_ANALYTICS_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.timeline.end_percent.value(), 25.0);
        assert_eq!(config.timeline.metric, SeriesMetric::Outflow);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| match key {
            "BRIDGE_ANALYTICS_END_PERCENT" => Some("half".to_string()),
            "BRIDGE_ANALYTICS_METRIC" => Some("tvl".to_string()),
            _ => None,
        });

        assert_eq!(config.timeline, TimelineConfig::default());
    }
}
