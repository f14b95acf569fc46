//! Load the market table from CSV
//!
//! Dates are parsed day-first for every row. Only rows of the requested
//! metric have their numeric columns parsed, so other metrics may leave
//! them blank.

use super::{Dataset, Observation};
use crate::config::{DEFAULT_DATA_PATH, DEFAULT_METRIC};
use crate::error::{DashboardError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns that must be present in the header, in any order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "metric",
    "suburb_value",
    "cr_value",
    "sa3_value",
    "property_type",
];

/// Date-only formats, day-first except for ISO
const DATE_FORMATS: [&str; 8] = [
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
];

/// Date-time formats; the time of day is discarded
const DATETIME_FORMATS: [&str; 6] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Raw CSV row matching the market file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    date: String,
    metric: String,
    suburb_value: String,
    cr_value: String,
    sa3_value: String,
    property_type: String,
}

impl CsvRow {
    fn to_observation(self, date: NaiveDate, line: u64) -> Result<Observation> {
        Ok(Observation {
            date,
            suburb_value: parse_value(&self.suburb_value, "suburb_value", line)?,
            cr_value: parse_value(&self.cr_value, "cr_value", line)?,
            sa3_value: parse_value(&self.sa3_value, "sa3_value", line)?,
            metric: self.metric,
            property_type: self.property_type,
        })
    }
}

fn parse_value(raw: &str, column: &str, line: u64) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        DashboardError::MalformedInput(format!(
            "line {}: {} is not a number: '{}'",
            line, column, raw
        ))
    })?;

    if !value.is_finite() {
        return Err(DashboardError::MalformedInput(format!(
            "line {}: {} is not finite: '{}'",
            line, column, raw
        )));
    }

    Ok(value)
}

/// Parse a date written day-first (`31/12/2020`), or in ISO order (`2020-12-31`)
///
/// Four-digit years are tried before two-digit ones; a trailing time of day
/// is accepted and dropped.
pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            // "%Y" happily reads "04" as year 4; leave that to "%y"
            if format.contains("%Y") && date.year() < 1000 {
                continue;
            }
            return Some(date);
        }
    }

    DATETIME_FORMATS
        .iter()
        .filter_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
        .find(|date| date.year() >= 1000)
}

fn ensure_required_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::MalformedInput(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

/// Load the dataset for `metric` from a CSV file
pub fn load_dataset<P: AsRef<Path>>(path: P, metric: &str) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = load_dataset_from_reader(file, metric)?;
    info!(
        "Loaded {} '{}' observations from {}",
        dataset.len(),
        metric,
        path.display()
    );
    Ok(dataset)
}

/// Load the dataset from any reader (e.g., in-memory bytes)
pub fn load_dataset_from_reader<R: Read>(reader: R, metric: &str) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    ensure_required_columns(&headers)?;

    let mut observations = Vec::new();
    let mut rows_read = 0usize;

    for result in csv_reader.records() {
        let record = result?;
        rows_read += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: CsvRow = record.deserialize(Some(&headers))?;

        let date = parse_day_first(&row.date).ok_or_else(|| {
            DashboardError::MalformedInput(format!(
                "line {}: unparseable date '{}'",
                line, row.date
            ))
        })?;

        if row.metric == metric {
            observations.push(row.to_observation(date, line)?);
        }
    }

    debug!(
        "Read {} rows, retained {} '{}' rows",
        rows_read,
        observations.len(),
        metric
    );

    Dataset::new(observations, metric)
}

/// Load `sell_price` rows from the default file location
pub fn load_default_dataset() -> Result<Dataset> {
    load_dataset(DEFAULT_DATA_PATH, DEFAULT_METRIC)
}
