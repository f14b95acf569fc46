//! Percentage change against the same month `lag` months earlier
//!
//! A month whose base month is absent has nothing to compare against and is
//! `None`. Gaps are never filled.

use super::{Granularity, Series};
use crate::error::{DashboardError, Result};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A period with an optional growth value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub period: NaiveDate,
    /// Percent change; `None` while undefined
    pub value: Option<f64>,
}

/// Percent-change series aligned point for point with its source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    name: String,
    lag: usize,
    points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lag(&self) -> usize {
        self.lag
    }

    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points with a defined value
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }

    /// Points with a defined value
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|v| (p.period, v)))
    }
}

impl Series {
    /// Percent change against the month `lag` calendar months earlier
    ///
    /// `(v[m] - v[m-lag]) / v[m-lag] * 100` on a monthly-labelled series. On a
    /// series without gaps the first `lag` points are `None`; with gaps, any
    /// month whose base month has no value is `None` as well.
    pub fn pct_change(&self, lag: usize) -> Result<GrowthSeries> {
        let by_period: BTreeMap<NaiveDate, f64> =
            self.points().iter().map(|p| (p.period, p.value)).collect();
        let months = u32::try_from(lag).ok().map(Months::new);

        let mut growth = Vec::with_capacity(self.len());
        for point in self.points() {
            let base = months
                .and_then(|m| point.period.checked_sub_months(m))
                .map(|d| Granularity::Month.period_end(d))
                .and_then(|period| by_period.get(&period).map(|&value| (period, value)));

            let value = match base {
                None => None,
                Some((period, base)) if base <= 0.0 => {
                    return Err(DashboardError::InsufficientData(format!(
                        "{} is {} at {}; cannot compute growth against it",
                        self.name(),
                        base,
                        period
                    )));
                }
                Some((_, base)) => Some((point.value - base) / base * 100.0),
            };
            growth.push(GrowthPoint {
                period: point.period,
                value,
            });
        }

        Ok(GrowthSeries {
            name: self.name().to_string(),
            lag,
            points: growth,
        })
    }
}
