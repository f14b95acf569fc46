//! Rolling growth: house prices against the same month a year earlier

use crate::error::Result;
use crate::observation::{Column, Dataset};
use crate::series::{Aggregation, Granularity, GrowthSeries, Series};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One monthly row of the rolling growth view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingRow {
    pub period: NaiveDate,
    pub suburb_median: f64,
    pub sa3_median: f64,
    pub suburb_growth: Option<f64>,
    pub sa3_growth: Option<f64>,
}

/// Monthly house medians and their lagged percent change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingGrowthView {
    pub suburb_monthly: Series,
    pub sa3_monthly: Series,
    pub suburb_growth: GrowthSeries,
    pub sa3_growth: GrowthSeries,
}

impl RollingGrowthView {
    /// `lag` is in calendar months; a month without a base month has no growth
    pub fn compute(dataset: &Dataset, house_type: &str, lag: usize) -> Result<Self> {
        let monthly_median = |column: Column, name: &str| {
            Series::from_column(dataset.of_property_type(house_type), column)
                .resample(Granularity::Month, Aggregation::Median)
                .with_name(name)
        };

        let suburb_monthly = monthly_median(Column::Suburb, "suburb_value");
        let sa3_monthly = monthly_median(Column::Sa3, "sa3_value");

        let suburb_growth = suburb_monthly.pct_change(lag)?;
        let sa3_growth = sa3_monthly.pct_change(lag)?;

        Ok(Self {
            suburb_growth,
            sa3_growth,
            suburb_monthly,
            sa3_monthly,
        })
    }

    /// Monthly rows; both columns come from the same rows and share months
    pub fn rows(&self) -> Vec<RollingRow> {
        self.suburb_monthly
            .points()
            .iter()
            .zip(self.sa3_monthly.points())
            .zip(self.suburb_growth.points())
            .zip(self.sa3_growth.points())
            .map(|(((suburb, sa3), suburb_growth), sa3_growth)| RollingRow {
                period: suburb.period,
                suburb_median: suburb.value,
                sa3_median: sa3.value,
                suburb_growth: suburb_growth.value,
                sa3_growth: sa3_growth.value,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.suburb_monthly.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suburb_monthly.is_empty()
    }
}
