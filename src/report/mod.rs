//! Presentation of a computed `DashboardReport`
//!
//! Renderers only lay out values they are given. A failed view is shown as
//! its error message.

mod export;
mod format;
mod json;
mod text;

pub use export::export_csv;
pub use format::{format_cagr, format_currency, format_percent, headline_metrics, HeadlineMetric};
pub use json::{render_json, ReportDocument, ViewPayload};
pub use text::{render_text, TextReport};

use serde::Serialize;

/// The dashboard's views, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    IndexedGrowth,
    TypeSplit,
    RollingGrowth,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::IndexedGrowth, ViewKind::TypeSplit, ViewKind::RollingGrowth];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::IndexedGrowth => "Growth vs region",
            ViewKind::TypeSplit => "Houses vs units",
            ViewKind::RollingGrowth => "Rolling growth",
        }
    }

    /// Subtitle; the rolling view names its lag in months
    pub fn subtitle(&self, rolling_lag: usize) -> String {
        match self {
            ViewKind::IndexedGrowth => "Indexed price growth - suburb vs regional benchmarks".to_string(),
            ViewKind::TypeSplit => "Houses vs units - two markets in one suburb".to_string(),
            ViewKind::RollingGrowth => {
                format!("Rolling {}-month growth - momentum and risk profile", rolling_lag)
            }
        }
    }

    /// File name used by the CSV export
    pub fn file_name(&self) -> &'static str {
        match self {
            ViewKind::IndexedGrowth => "indexed_growth.csv",
            ViewKind::TypeSplit => "houses_vs_units.csv",
            ViewKind::RollingGrowth => "rolling_growth.csv",
        }
    }
}
