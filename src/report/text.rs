//! Plain-text rendering for the terminal

use super::{headline_metrics, ViewKind};
use crate::dashboard::DashboardReport;
use crate::error::DashboardError;
use chrono::Datelike;
use std::fmt::{self, Write};

fn opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

fn section<W: Write>(out: &mut W, view: ViewKind, rolling_lag: usize) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", view.title())?;
    writeln!(out, "{}", "=".repeat(view.title().len()))?;
    writeln!(out, "{}", view.subtitle(rolling_lag))?;
    writeln!(out)
}

fn unavailable<W: Write>(out: &mut W, err: &DashboardError) -> fmt::Result {
    writeln!(out, "  View unavailable: {}", err)
}

/// Text layout of a report; `to_string()` gives the rendered tables
pub struct TextReport<'a>(pub &'a DashboardReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.0)
    }
}

/// Render headline metrics and every view as aligned tables
pub fn render_text(report: &DashboardReport) -> String {
    TextReport(report).to_string()
}

fn write_report<W: Write>(out: &mut W, report: &DashboardReport) -> fmt::Result {
    let labels = &report.labels;

    writeln!(out, "{}", labels.title)?;
    writeln!(out, "{}", "-".repeat(labels.title.len()))?;
    writeln!(out, "{} '{}' observations", report.observations, report.metric)?;
    writeln!(out)?;

    match &report.summary {
        Ok(stats) => {
            for metric in headline_metrics(stats) {
                writeln!(out, "  {:<14} {}", metric.label, metric.value)?;
            }
            writeln!(
                out,
                "  {:<14} {} to {} ({:.1} years)",
                "Period",
                stats.start_date,
                stats.end_date,
                stats.years_elapsed
            )?;
        }
        Err(err) => unavailable(out, err)?,
    }

    section(out, ViewKind::IndexedGrowth, report.rolling_lag)?;
    match &report.indexed_growth {
        Ok(view) => {
            writeln!(
                out,
                "{:>6} {:>14} {:>14} {:>14}",
                "Year", labels.suburb, labels.cr_benchmark, labels.sa3_benchmark
            )?;
            for row in view.rows() {
                writeln!(
                    out,
                    "{:>6} {:>14.2} {:>14.2} {:>14.2}",
                    row.period.year(),
                    row.suburb_index,
                    row.cr_index,
                    row.sa3_index
                )?;
            }
        }
        Err(err) => unavailable(out, err)?,
    }

    section(out, ViewKind::TypeSplit, report.rolling_lag)?;
    match &report.type_split {
        Ok(view) => {
            writeln!(
                out,
                "{:>6} {:>14} {:>14} {:>12}",
                "Year", "House median", "Unit median", "House/unit"
            )?;
            for row in view.rows() {
                writeln!(
                    out,
                    "{:>6} {:>14} {:>14} {:>12}",
                    row.period.year(),
                    opt(row.house_median, 0),
                    opt(row.unit_median, 0),
                    opt(row.house_unit_ratio, 3)
                )?;
            }
        }
        Err(err) => unavailable(out, err)?,
    }

    section(out, ViewKind::RollingGrowth, report.rolling_lag)?;
    match &report.rolling_growth {
        Ok(view) => {
            writeln!(
                out,
                "{:>8} {:>14} {:>14}",
                "Month", labels.suburb, labels.sa3_benchmark
            )?;
            for row in view.rows() {
                writeln!(
                    out,
                    "{:>4}-{:02} {:>13}% {:>13}%",
                    row.period.year(),
                    row.period.month(),
                    opt(row.suburb_growth, 1),
                    opt(row.sa3_growth, 1)
                )?;
            }
        }
        Err(err) => unavailable(out, err)?,
    }

    Ok(())
}
