//! CLI configuration management
//!
//! Settings are resolved from, lowest to highest priority:
//! 1. Default values
//! 2. TOML config file
//! 3. Environment variables (`SHORTRATE_*`)
//! 4. Command line flags

use serde::Deserialize;
use shortrate_pricing::mc::{
    DEFAULT_NUM_SIMULATIONS, DEFAULT_TIME_STEP, MAX_SIMULATIONS, MIN_SIMULATIONS,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "shortrate.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, table")]
    InvalidFormat(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Pricer configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShortRateConfig {
    /// Default number of Monte Carlo simulations
    pub num_simulations: usize,
    /// Default Euler-Maruyama step in years
    pub time_step: f64,
    /// Fixed generator seed; entropy when absent
    pub seed: Option<u64>,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: LogLevel,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for ShortRateConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            time_step: DEFAULT_TIME_STEP,
            seed: None,
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
        }
    }
}

impl ShortRateConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ShortRateConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `SHORTRATE_*` environment variable overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SHORTRATE_NUM_SIMULATIONS") {
            self.num_simulations = parse_value("SHORTRATE_NUM_SIMULATIONS", &value)?;
        }
        if let Some(value) = lookup("SHORTRATE_TIME_STEP") {
            self.time_step = parse_value("SHORTRATE_TIME_STEP", &value)?;
        }
        if let Some(value) = lookup("SHORTRATE_SEED") {
            self.seed = Some(parse_value("SHORTRATE_SEED", &value)?);
        }
        if let Some(value) = lookup("SHORTRATE_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&value)?;
        }
        if let Some(value) = lookup("SHORTRATE_FORMAT") {
            self.format = OutputFormat::from_str(&value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIMULATIONS..=MAX_SIMULATIONS).contains(&self.num_simulations) {
            return Err(ConfigError::InvalidValue {
                key: "num_simulations",
                value: self.num_simulations.to_string(),
            });
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "time_step",
                value: self.time_step.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Debug logging
    pub verbose: bool,
    /// Seed override
    pub seed: Option<u64>,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// An explicitly given config file must exist; otherwise `shortrate.toml`
/// is read when present in the working directory.
pub fn build_config(cli: &CliArgs) -> Result<ShortRateConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => ShortRateConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                ShortRateConfig::from_file(default_path)?
            } else {
                ShortRateConfig::default()
            }
        }
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
