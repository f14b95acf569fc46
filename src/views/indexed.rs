//! Indexed growth: suburb vs CR and SA3 benchmarks, start = 100

use crate::error::Result;
use crate::observation::{Column, Dataset};
use crate::series::{Aggregation, Granularity, Series};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One yearly row of the indexed growth view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedRow {
    pub period: NaiveDate,
    pub suburb_index: f64,
    pub cr_index: f64,
    pub sa3_index: f64,
}

/// Yearly means of each column indexed to its own first observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedGrowthView {
    pub suburb: Series,
    pub cr: Series,
    pub sa3: Series,
}

impl IndexedGrowthView {
    /// Index every row against the first row, then average per calendar year
    pub fn compute(dataset: &Dataset) -> Result<Self> {
        let yearly = |column: Column| -> Result<Series> {
            Ok(Series::from_column(dataset, column)
                .indexed()?
                .resample(Granularity::Year, Aggregation::Mean))
        };

        Ok(Self {
            suburb: yearly(Column::Suburb)?.with_name("suburb_index"),
            cr: yearly(Column::Cr)?.with_name("cr_index"),
            sa3: yearly(Column::Sa3)?.with_name("sa3_index"),
        })
    }

    /// Rows of (year, suburb, CR, SA3); all three share the same years
    pub fn rows(&self) -> Vec<IndexedRow> {
        self.suburb
            .points()
            .iter()
            .zip(self.cr.points())
            .zip(self.sa3.points())
            .map(|((suburb, cr), sa3)| IndexedRow {
                period: suburb.period,
                suburb_index: suburb.value,
                cr_index: cr.value,
                sa3_index: sa3.value,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.suburb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suburb.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::Observation;
    use approx::assert_relative_eq;
    use chrono::Datelike;

    fn obs(y: i32, m: u32, suburb: f64, cr: f64, sa3: f64) -> Observation {
        let date = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
        Observation::new(date, "sell_price", suburb, cr, sa3, "house")
    }

    #[test]
    fn test_first_year_with_single_row_is_100() {
        let dataset = Dataset::new(
            vec![
                obs(2004, 1, 300_000.0, 250_000.0, 350_000.0),
                obs(2005, 1, 330_000.0, 260_000.0, 385_000.0),
                obs(2005, 7, 360_000.0, 270_000.0, 420_000.0),
            ],
            "sell_price",
        )
        .unwrap();

        let view = IndexedGrowthView::compute(&dataset).unwrap();
        let rows = view.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period.year(), 2004);
        assert_eq!(rows[0].suburb_index, 100.0);
        assert_eq!(rows[0].cr_index, 100.0);
        assert_eq!(rows[0].sa3_index, 100.0);

        // 2005: mean of (110, 120), (104, 108), (110, 120)
        assert_relative_eq!(rows[1].suburb_index, 115.0, epsilon = 1e-9);
        assert_relative_eq!(rows[1].cr_index, 106.0, epsilon = 1e-9);
        assert_relative_eq!(rows[1].sa3_index, 115.0, epsilon = 1e-9);
    }

    #[test]
    fn test_baseline_is_first_row_not_first_year_mean() {
        let dataset = Dataset::new(
            vec![
                obs(2004, 1, 100.0, 100.0, 100.0),
                obs(2004, 6, 200.0, 100.0, 100.0),
            ],
            "sell_price",
        )
        .unwrap();

        let view = IndexedGrowthView::compute(&dataset).unwrap();
        assert_relative_eq!(view.suburb.first().unwrap().value, 150.0);
    }

    #[test]
    fn test_gap_years_are_absent() {
        let dataset = Dataset::new(
            vec![
                obs(2004, 1, 100.0, 100.0, 100.0),
                obs(2007, 1, 150.0, 120.0, 130.0),
            ],
            "sell_price",
        )
        .unwrap();

        let view = IndexedGrowthView::compute(&dataset).unwrap();
        let years: Vec<i32> = view.rows().iter().map(|r| r.period.year()).collect();
        assert_eq!(years, vec![2004, 2007]);
    }

    #[test]
    fn test_non_positive_baseline() {
        let dataset = Dataset::new(
            vec![obs(2004, 1, 100.0, 0.0, 100.0), obs(2005, 1, 120.0, 110.0, 130.0)],
            "sell_price",
        )
        .unwrap();

        let err = IndexedGrowthView::compute(&dataset).unwrap_err();
        assert_eq!(err.kind(), "insufficient_data");
    }
}
