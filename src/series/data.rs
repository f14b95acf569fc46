//! Ordered (period, value) series and the pure transforms over them

use super::{Aggregation, Granularity};
use crate::error::{DashboardError, Result};
use crate::observation::{Column, Observation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (period, value) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub period: NaiveDate,
    pub value: f64,
}

impl Point {
    pub fn new(period: NaiveDate, value: f64) -> Self {
        Self { period, value }
    }
}

/// A named sequence of points in non-decreasing period order
///
/// Raw series taken straight from observations may repeat a date;
/// resampled series have one point per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    points: Vec<Point>,
}

impl Series {
    /// Build a series, ordering points by period (stable)
    pub fn new(name: &str, mut points: Vec<Point>) -> Self {
        points.sort_by_key(|p| p.period);
        Self {
            name: name.to_string(),
            points,
        }
    }

    /// One point per observation, dated by the observation date
    pub fn from_column<'a, I>(rows: I, column: Column) -> Self
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let points = rows
            .into_iter()
            .map(|obs| Point::new(obs.date, obs.value(column)))
            .collect();
        Self::new(column.as_str(), points)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn periods(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.period)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Value of the first point labelled `period`
    pub fn value_at(&self, period: NaiveDate) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.period == period)
            .map(|p| p.value)
    }

    /// Group points by period and aggregate each group
    ///
    /// Periods without points are absent from the output; nothing is filled.
    pub fn resample(&self, granularity: Granularity, aggregation: Aggregation) -> Series {
        let mut points = Vec::new();
        let mut current: Option<NaiveDate> = None;
        let mut bucket: Vec<f64> = Vec::new();

        for point in &self.points {
            let label = granularity.period_end(point.period);
            if current != Some(label) {
                if let Some(period) = current {
                    if let Some(value) = aggregation.apply(&bucket) {
                        points.push(Point::new(period, value));
                    }
                }
                current = Some(label);
                bucket.clear();
            }
            bucket.push(point.value);
        }

        if let Some(period) = current {
            if let Some(value) = aggregation.apply(&bucket) {
                points.push(Point::new(period, value));
            }
        }

        Series {
            name: self.name.clone(),
            points,
        }
    }

    /// Rescale so the first point is 100: `value / first * 100`
    pub fn indexed(&self) -> Result<Series> {
        let baseline = self.first().map(|p| p.value).ok_or_else(|| {
            DashboardError::InsufficientData(format!("{} has no baseline observation", self.name))
        })?;

        if baseline <= 0.0 {
            return Err(DashboardError::InsufficientData(format!(
                "{} baseline must be positive, got {}",
                self.name, baseline
            )));
        }

        let points = self
            .points
            .iter()
            .map(|p| Point::new(p.period, p.value / baseline * 100.0))
            .collect();

        Ok(Series {
            name: self.name.clone(),
            points,
        })
    }

    /// Pair values on periods present in both series, in period order
    ///
    /// Expects one point per period, as produced by `resample`.
    pub fn inner_join(&self, other: &Series) -> Vec<(NaiveDate, f64, f64)> {
        let mut joined = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.points.len() && j < other.points.len() {
            let (left, right) = (&self.points[i], &other.points[j]);
            match left.period.cmp(&right.period) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    joined.push((left.period, left.value, right.value));
                    i += 1;
                    j += 1;
                }
            }
        }

        joined
    }

    /// `self / other` on shared periods only
    pub fn ratio(&self, other: &Series) -> Result<Series> {
        let joined = self.inner_join(other);
        if joined.is_empty() {
            return Err(DashboardError::Alignment {
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }

        let mut points = Vec::with_capacity(joined.len());
        for (period, numerator, denominator) in joined {
            if denominator <= 0.0 {
                return Err(DashboardError::InsufficientData(format!(
                    "{} is {} at {}; cannot divide by it",
                    other.name, denominator, period
                )));
            }
            points.push(Point::new(period, numerator / denominator));
        }

        Ok(Series {
            name: format!("{}/{}", self.name, other.name),
            points,
        })
    }
}
