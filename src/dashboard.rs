//! Dashboard session: one loaded dataset, every view derived from it
//!
//! The dataset is loaded once (through an injected `DatasetCache`) and
//! shared read-only; views are recomputed on each request.
//!
//! # Example
//! ```ignore
//! let mut cache = DatasetCache::new();
//! let dashboard = Dashboard::load(&mut cache, DashboardConfig::default())?;
//! let report = dashboard.report();
//! println!("{}", report::render_text(&report));
//! ```

use crate::config::{DashboardConfig, DisplayLabels};
use crate::error::Result;
use crate::observation::{Dataset, DatasetCache};
use crate::summary::SummaryStats;
use crate::views::{IndexedGrowthView, RollingGrowthView, TypeSplitView};
use log::{info, warn};
use std::sync::Arc;

/// Outcome of every view; one failing view leaves the others intact
#[derive(Debug)]
pub struct DashboardReport {
    pub labels: DisplayLabels,
    pub metric: String,
    pub observations: usize,
    /// Months between compared periods in the rolling view
    pub rolling_lag: usize,
    pub summary: Result<SummaryStats>,
    pub indexed_growth: Result<IndexedGrowthView>,
    pub type_split: Result<TypeSplitView>,
    pub rolling_growth: Result<RollingGrowthView>,
}

impl DashboardReport {
    /// Number of views that failed
    pub fn failed_views(&self) -> usize {
        [
            self.summary.is_err(),
            self.indexed_growth.is_err(),
            self.type_split.is_err(),
            self.rolling_growth.is_err(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count()
    }
}

/// Computes views over one immutable dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        Self { dataset, config }
    }

    /// Load the configured source through `cache`
    pub fn load(cache: &mut DatasetCache, config: DashboardConfig) -> Result<Self> {
        let dataset = cache.load(&config.data_path, &config.metric)?;
        Ok(Self::new(dataset, config))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn summary(&self) -> Result<SummaryStats> {
        SummaryStats::calculate_with_year_length(&self.dataset, self.config.days_per_year)
    }

    pub fn indexed_growth(&self) -> Result<IndexedGrowthView> {
        IndexedGrowthView::compute(&self.dataset)
    }

    pub fn type_split(&self) -> Result<TypeSplitView> {
        TypeSplitView::compute(&self.dataset, &self.config.house_type, &self.config.unit_type)
    }

    pub fn rolling_growth(&self) -> Result<RollingGrowthView> {
        RollingGrowthView::compute(&self.dataset, &self.config.house_type, self.config.rolling_lag)
    }

    /// Compute every view
    pub fn report(&self) -> DashboardReport {
        let report = DashboardReport {
            labels: self.config.labels.clone(),
            metric: self.dataset.metric().to_string(),
            observations: self.dataset.len(),
            rolling_lag: self.config.rolling_lag,
            summary: self.summary(),
            indexed_growth: self.indexed_growth(),
            type_split: self.type_split(),
            rolling_growth: self.rolling_growth(),
        };

        for (view, outcome) in [
            ("summary", report.summary.as_ref().err()),
            ("indexed growth", report.indexed_growth.as_ref().err()),
            ("type split", report.type_split.as_ref().err()),
            ("rolling growth", report.rolling_growth.as_ref().err()),
        ] {
            if let Some(err) = outcome {
                warn!("{} view unavailable: {}", view, err);
            }
        }

        info!(
            "Computed dashboard over {} observations ({} failed views)",
            report.observations,
            report.failed_views()
        );
        report
    }
}
