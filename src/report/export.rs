//! Per-view CSV export
//!
//! Missing values are written as empty cells. Failed views are skipped.

use super::ViewKind;
use crate::dashboard::DashboardReport;
use crate::error::Result;
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct SummaryRecord<'a> {
    metric: &'a str,
    value: String,
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `summary.csv` and one CSV per available view into `dir`
///
/// Returns the files written.
pub fn export_csv<P: AsRef<Path>>(report: &DashboardReport, dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    match &report.summary {
        Ok(stats) => {
            let path = dir.join("summary.csv");
            let records = vec![
                SummaryRecord { metric: "start_date", value: stats.start_date.to_string() },
                SummaryRecord { metric: "end_date", value: stats.end_date.to_string() },
                SummaryRecord { metric: "start_price", value: stats.start_price.to_string() },
                SummaryRecord { metric: "latest_price", value: stats.latest_price.to_string() },
                SummaryRecord { metric: "total_growth_pct", value: stats.total_growth_pct.to_string() },
                SummaryRecord { metric: "years_elapsed", value: stats.years_elapsed.to_string() },
                SummaryRecord { metric: "cagr", value: stats.cagr.to_string() },
            ];
            write_rows(&path, &records)?;
            written.push(path);
        }
        Err(err) => warn!("Skipping summary export: {}", err),
    }

    for view in ViewKind::ALL {
        let path = dir.join(view.file_name());
        let outcome = match view {
            ViewKind::IndexedGrowth => report
                .indexed_growth
                .as_ref()
                .map(|v| write_rows(&path, &v.rows())),
            ViewKind::TypeSplit => report
                .type_split
                .as_ref()
                .map(|v| write_rows(&path, &v.rows())),
            ViewKind::RollingGrowth => report
                .rolling_growth
                .as_ref()
                .map(|v| write_rows(&path, &v.rows())),
        };

        match outcome {
            Ok(result) => {
                result?;
                written.push(path);
            }
            Err(err) => warn!("Skipping {} export: {}", view.title(), err),
        }
    }

    info!("Exported {} files to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::Dashboard;
    use crate::observation::{Dataset, Observation};
    use chrono::{Months, NaiveDate};
    use std::sync::Arc;

    fn report(with_units: bool) -> DashboardReport {
        let start = NaiveDate::from_ymd_opt(2018, 1, 5).unwrap();
        let mut rows = Vec::new();
        for i in 0..24u32 {
            let v = 500_000.0 + 1_000.0 * i as f64;
            rows.push(Observation::new(start + Months::new(i), "sell_price", v, v, v, "house"));
            if with_units {
                rows.push(Observation::new(start + Months::new(i), "sell_price", v / 2.0, v, v, "unit"));
            }
        }
        let dataset = Dataset::new(rows, "sell_price").unwrap();
        Dashboard::new(Arc::new(dataset), DashboardConfig::default()).report()
    }

    #[test]
    fn test_export_all_views() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_csv(&report(true), dir.path()).unwrap();

        assert_eq!(written.len(), 4);
        let split = std::fs::read_to_string(dir.path().join("houses_vs_units.csv")).unwrap();
        let mut lines = split.lines();
        assert_eq!(
            lines.next(),
            Some("period,house_median,unit_median,house_unit_ratio")
        );
        assert!(lines.next().unwrap().starts_with("2018-12-31,"));
        assert!(lines.next().unwrap().ends_with(",2.0"));
    }

    #[test]
    fn test_missing_growth_is_empty_cell() {
        let dir = tempfile::tempdir().unwrap();
        export_csv(&report(true), dir.path()).unwrap();

        let rolling = std::fs::read_to_string(dir.path().join("rolling_growth.csv")).unwrap();
        let lines: Vec<&str> = rolling.lines().collect();

        assert_eq!(lines[0], "period,suburb_median,sa3_median,suburb_growth,sa3_growth");
        assert_eq!(lines.len(), 25);
        assert!(lines[1].ends_with(",,"));
        assert!(!lines[13].ends_with(",,"));
    }

    #[test]
    fn test_failed_view_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_csv(&report(false), dir.path()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(!dir.path().join("houses_vs_units.csv").exists());
        assert!(dir.path().join("indexed_growth.csv").exists());
    }
}
