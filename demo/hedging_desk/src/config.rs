//! Demo scenario configuration.
//!
//! Handles loading and management of the pricing scenario from TOML files
//! with environment variable override support. Defaults reproduce the
//! reference two-period call scenario.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pricing scenario configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Stock price at time zero
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Up-move factor per period
    #[serde(default = "default_up")]
    pub up: f64,

    /// Down-move factor per period
    #[serde(default = "default_down")]
    pub down: f64,

    /// Call strike price
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Simple per-period interest rate
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Number of tree periods
    #[serde(default = "default_periods")]
    pub periods: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional path for the JSON pricing report
    pub report_path: Option<PathBuf>,
}

fn default_spot() -> f64 {
    100.0
}

fn default_up() -> f64 {
    1.1
}

fn default_down() -> f64 {
    0.9
}

fn default_strike() -> f64 {
    100.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_periods() -> usize {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            up: default_up(),
            down: default_down(),
            strike: default_strike(),
            rate: default_rate(),
            periods: default_periods(),
            log_level: default_log_level(),
            report_path: None,
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the given path or return the default
    /// scenario.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Apply environment variable overrides (prefix `HEDGING_DESK_`).
    pub fn with_env_overrides(mut self) -> Self {
        fn parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
            std::env::var(name).ok()?.parse().ok()
        }

        if let Some(spot) = parsed("HEDGING_DESK_SPOT") {
            self.spot = spot;
        }
        if let Some(up) = parsed("HEDGING_DESK_UP") {
            self.up = up;
        }
        if let Some(down) = parsed("HEDGING_DESK_DOWN") {
            self.down = down;
        }
        if let Some(strike) = parsed("HEDGING_DESK_STRIKE") {
            self.strike = strike;
        }
        if let Some(rate) = parsed("HEDGING_DESK_RATE") {
            self.rate = rate;
        }
        if let Some(periods) = parsed("HEDGING_DESK_PERIODS") {
            self.periods = periods;
        }
        if let Ok(log_level) = std::env::var("HEDGING_DESK_LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Ok(report_path) = std::env::var("HEDGING_DESK_REPORT_PATH") {
            self.report_path = Some(PathBuf::from(report_path));
        }

        self
    }

    /// Validate the configuration.
    ///
    /// The pricing request builder re-validates the model parameters; this
    /// catches the same problems up front so a bad scenario file is reported
    /// with every offence at once, before logging is even set up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.spot.is_finite() {
            errors.push(format!("spot must be finite, got {}", self.spot));
        }

        if !self.strike.is_finite() {
            errors.push(format!("strike must be finite, got {}", self.strike));
        }

        if !(self.up.is_finite() && self.down.is_finite() && self.up > self.down && self.down > 0.0)
        {
            errors.push(format!(
                "Branch factors must satisfy up > down > 0, got up = {}, down = {}",
                self.up, self.down
            ));
        }

        if !(self.rate.is_finite() && self.rate > -1.0) {
            errors.push(format!(
                "rate must be finite and greater than -1, got {}",
                self.rate
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation errors, all offences collected
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
