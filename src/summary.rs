//! Headline statistics over the whole series
//!
//! Used for the start/latest price, total growth and CAGR metrics.

use crate::config::DEFAULT_DAYS_PER_YEAR;
use crate::error::{DashboardError, Result};
use crate::observation::Dataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scalar headline metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Suburb value of the first row
    pub start_price: f64,

    /// Suburb value of the last row
    pub latest_price: f64,

    /// (end - start) / start * 100
    pub total_growth_pct: f64,

    /// Elapsed days over a fixed-length year
    pub years_elapsed: f64,

    /// Compound annual growth rate as a decimal (0.0615 = 6.15%/yr)
    pub cagr: f64,
}

impl SummaryStats {
    /// Compute with the 365-day year
    pub fn calculate(dataset: &Dataset) -> Result<Self> {
        Self::calculate_with_year_length(dataset, DEFAULT_DAYS_PER_YEAR)
    }

    /// Compute with a custom year length in days
    pub fn calculate_with_year_length(dataset: &Dataset, days_per_year: f64) -> Result<Self> {
        let first = dataset.first();
        let last = dataset.last();

        let start = first.suburb_value;
        let end = last.suburb_value;

        if start <= 0.0 {
            return Err(DashboardError::InsufficientData(format!(
                "starting price must be positive, got {}",
                start
            )));
        }
        if end <= 0.0 {
            return Err(DashboardError::InsufficientData(format!(
                "latest price must be positive, got {}",
                end
            )));
        }

        let days = last.date.signed_duration_since(first.date).num_days();
        let years_elapsed = days as f64 / days_per_year;
        if years_elapsed <= 0.0 {
            return Err(DashboardError::InsufficientData(format!(
                "observations span {} days; growth rate needs a longer window",
                days
            )));
        }

        let total_growth_pct = (end - start) / start * 100.0;
        let cagr = (end / start).powf(1.0 / years_elapsed) - 1.0;
        if !cagr.is_finite() {
            return Err(DashboardError::InsufficientData(format!(
                "growth rate over {:.4} years is not a finite number",
                years_elapsed
            )));
        }

        Ok(Self {
            start_date: first.date,
            end_date: last.date,
            start_price: start,
            latest_price: end,
            total_growth_pct,
            years_elapsed,
            cagr,
        })
    }

    /// Value implied by compounding `start_price` at `cagr` over the window
    pub fn compounded_end(&self) -> f64 {
        self.start_price * (1.0 + self.cagr).powf(self.years_elapsed)
    }
}
