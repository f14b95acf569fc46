//! JSON rendering of the report for external renderers

use super::{headline_metrics, HeadlineMetric};
use crate::config::DisplayLabels;
use crate::dashboard::DashboardReport;
use crate::error::{DashboardError, Result};
use crate::summary::SummaryStats;
use crate::views::{IndexedRow, RollingRow, TypeSplitRow};
use serde::Serialize;

/// Either a view's data or the reason it is missing
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewPayload<T> {
    Ok { data: T },
    Error { kind: &'static str, message: String },
}

impl<T> ViewPayload<T> {
    fn from_outcome<V>(outcome: &Result<V>, data: impl FnOnce(&V) -> T) -> Self {
        match outcome {
            Ok(view) => ViewPayload::Ok { data: data(view) },
            Err(err) => ViewPayload::failed(err),
        }
    }

    fn failed(err: &DashboardError) -> Self {
        ViewPayload::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Serializable form of a `DashboardReport`
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub labels: &'a DisplayLabels,
    pub metric: &'a str,
    pub observations: usize,
    pub rolling_lag: usize,
    pub headline: Vec<HeadlineMetric>,
    pub summary: ViewPayload<&'a SummaryStats>,
    pub indexed_growth: ViewPayload<Vec<IndexedRow>>,
    pub type_split: ViewPayload<Vec<TypeSplitRow>>,
    pub rolling_growth: ViewPayload<Vec<RollingRow>>,
}

impl<'a> ReportDocument<'a> {
    pub fn new(report: &'a DashboardReport) -> Self {
        Self {
            labels: &report.labels,
            metric: &report.metric,
            observations: report.observations,
            rolling_lag: report.rolling_lag,
            headline: report.summary.as_ref().map(headline_metrics).unwrap_or_default(),
            summary: match &report.summary {
                Ok(stats) => ViewPayload::Ok { data: stats },
                Err(err) => ViewPayload::failed(err),
            },
            indexed_growth: ViewPayload::from_outcome(&report.indexed_growth, |v| v.rows()),
            type_split: ViewPayload::from_outcome(&report.type_split, |v| v.rows()),
            rolling_growth: ViewPayload::from_outcome(&report.rolling_growth, |v| v.rows()),
        }
    }
}

/// Pretty-printed JSON document of the whole report
pub fn render_json(report: &DashboardReport) -> Result<String> {
    let json = serde_json::to_string_pretty(&ReportDocument::new(report))?;
    Ok(json)
}
