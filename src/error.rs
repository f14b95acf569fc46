//! Error taxonomy for loading and deriving dashboard views
//!
//! Every error is terminal for the view being computed. Nothing here is
//! retried or replaced with a default value.

use thiserror::Error;

/// Errors raised by the loader, the aggregation engine and the summary calculator
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Unparseable date, missing required column or non-numeric value
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// No rows left after filtering to the requested metric
    #[error("No '{metric}' observations in the dataset")]
    EmptyDataset { metric: String },

    /// Degenerate time span or a non-positive value used as a divisor
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A join produced no overlapping periods
    #[error("No overlapping periods between {left} and {right}")]
    Alignment { left: String, right: String },

    /// Source or output file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Short machine-readable name, used by the presentation layer
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardError::MalformedInput(_) => "malformed_input",
            DashboardError::EmptyDataset { .. } => "empty_dataset",
            DashboardError::InsufficientData(_) => "insufficient_data",
            DashboardError::Alignment { .. } => "alignment",
            DashboardError::Io(_) => "io",
            DashboardError::Config(_) => "config",
        }
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return DashboardError::MalformedInput(err.to_string());
        }
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => DashboardError::Io(io),
            _ => DashboardError::MalformedInput(message),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Config(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = DashboardError::EmptyDataset { metric: "sell_price".to_string() };
        assert_eq!(err.kind(), "empty_dataset");
        assert_eq!(err.to_string(), "No 'sell_price' observations in the dataset");

        let err = DashboardError::Alignment {
            left: "house".to_string(),
            right: "unit".to_string(),
        };
        assert_eq!(err.kind(), "alignment");
        assert!(err.to_string().contains("house"));
    }

    #[test]
    fn test_csv_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DashboardError = csv::Error::from(io).into();
        assert_eq!(err.kind(), "io");
    }
}
