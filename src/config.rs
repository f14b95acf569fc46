//! Dashboard configuration
//!
//! Every field has a default, so a config file only needs the fields it
//! overrides. The defaults reproduce the Belmont North dashboard.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Default input file
pub const DEFAULT_DATA_PATH: &str = "belmont_north_market.csv";

/// Metric category that participates in every computation
pub const DEFAULT_METRIC: &str = "sell_price";

/// Number of monthly periods between compared values in the rolling view
pub const DEFAULT_ROLLING_LAG: usize = 12;

/// Fixed year length used by the CAGR calculation
pub const DEFAULT_DAYS_PER_YEAR: f64 = 365.0;

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_metric() -> String {
    DEFAULT_METRIC.to_string()
}

fn default_house_type() -> String {
    "house".to_string()
}

fn default_unit_type() -> String {
    "unit".to_string()
}

fn default_rolling_lag() -> usize {
    DEFAULT_ROLLING_LAG
}

fn default_days_per_year() -> f64 {
    DEFAULT_DAYS_PER_YEAR
}

/// Display metadata handed to the presentation layer untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayLabels {
    #[serde(default = "DisplayLabels::default_title")]
    pub title: String,
    #[serde(default = "DisplayLabels::default_suburb")]
    pub suburb: String,
    #[serde(default = "DisplayLabels::default_cr")]
    pub cr_benchmark: String,
    #[serde(default = "DisplayLabels::default_sa3")]
    pub sa3_benchmark: String,
}

impl DisplayLabels {
    fn default_title() -> String {
        "Belmont North Property Market Dashboard".to_string()
    }

    fn default_suburb() -> String {
        "Belmont North".to_string()
    }

    fn default_cr() -> String {
        "CR benchmark".to_string()
    }

    fn default_sa3() -> String {
        "SA3 benchmark".to_string()
    }

    /// Labels for a different suburb, keeping the benchmark names
    pub fn for_suburb(suburb: &str) -> Self {
        Self {
            title: format!("{} Property Market Dashboard", suburb),
            suburb: suburb.to_string(),
            ..Self::default()
        }
    }
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            suburb: Self::default_suburb(),
            cr_benchmark: Self::default_cr(),
            sa3_benchmark: Self::default_sa3(),
        }
    }
}

/// Configuration for one dashboard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Input CSV
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Metric category retained by the loader
    #[serde(default = "default_metric")]
    pub metric: String,

    /// `property_type` value selecting houses
    #[serde(default = "default_house_type")]
    pub house_type: String,

    /// `property_type` value selecting units
    #[serde(default = "default_unit_type")]
    pub unit_type: String,

    /// Lag (in monthly periods) of the rolling growth view
    #[serde(default = "default_rolling_lag")]
    pub rolling_lag: usize,

    /// Year length (days) for CAGR
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,

    #[serde(default)]
    pub labels: DisplayLabels,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            metric: default_metric(),
            house_type: default_house_type(),
            unit_type: default_unit_type(),
            rolling_lag: default_rolling_lag(),
            days_per_year: default_days_per_year(),
            labels: DisplayLabels::default(),
        }
    }
}

impl DashboardConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: DashboardConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the derived views meaningless
    pub fn validate(&self) -> Result<()> {
        if self.metric.trim().is_empty() {
            return Err(DashboardError::Config("metric must not be empty".to_string()));
        }
        if self.house_type == self.unit_type {
            return Err(DashboardError::Config(format!(
                "house_type and unit_type must differ (both '{}')",
                self.house_type
            )));
        }
        if self.rolling_lag == 0 {
            return Err(DashboardError::Config("rolling_lag must be at least 1".to_string()));
        }
        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(DashboardError::Config(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.metric, "sell_price");
        assert_eq!(config.rolling_lag, 12);
        assert_eq!(config.days_per_year, 365.0);
        assert_eq!(config.data_path, PathBuf::from("belmont_north_market.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DashboardConfig::from_json_str(
            r#"{ "data_path": "other.csv", "labels": { "suburb": "Kahibah" } }"#,
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.metric, "sell_price");
        assert_eq!(config.labels.suburb, "Kahibah");
        assert_eq!(config.labels.sa3_benchmark, "SA3 benchmark");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "rolling_lag": 0 }"#).unwrap_err();
        assert_eq!(err.kind(), "config");

        let err = DashboardConfig::from_json_str(r#"{ "unit_type": "house" }"#).unwrap_err();
        assert_eq!(err.kind(), "config");

        let err = DashboardConfig::from_json_str("not json").unwrap_err();
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_labels_for_suburb() {
        let labels = DisplayLabels::for_suburb("Kahibah");
        assert_eq!(labels.title, "Kahibah Property Market Dashboard");
        assert_eq!(labels.cr_benchmark, "CR benchmark");
    }
}
