//! Suburb Dashboard - derived views over a suburb's property price history
//!
//! This library provides:
//! - Day-first CSV loading of market observations, filtered to one metric
//! - An injectable dataset cache with source freshness checks
//! - Yearly/monthly resampling, indexing, ratios and rolling growth
//! - Headline statistics (total growth, CAGR)
//! - Text, JSON and CSV presentation of the computed views

pub mod config;
pub mod error;
pub mod observation;
pub mod series;
pub mod views;
pub mod summary;
pub mod dashboard;
pub mod report;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use observation::{Dataset, DatasetCache, Observation};
pub use series::{Aggregation, Granularity, Series};
pub use summary::SummaryStats;
pub use dashboard::{Dashboard, DashboardReport};
