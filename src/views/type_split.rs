//! Houses vs units: yearly medians and the house/unit price ratio

use crate::error::Result;
use crate::observation::{Column, Dataset};
use crate::series::{Aggregation, Granularity, Series};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One year of the houses-vs-units view; absent values are `None`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeSplitRow {
    pub period: NaiveDate,
    pub house_median: Option<f64>,
    pub unit_median: Option<f64>,
    pub house_unit_ratio: Option<f64>,
}

/// Yearly median suburb prices per property type and their ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSplitView {
    /// Yearly median house price
    pub house: Series,
    /// Yearly median unit price
    pub unit: Series,
    /// house / unit on years present in both
    pub ratio: Series,
}

impl TypeSplitView {
    pub fn compute(dataset: &Dataset, house_type: &str, unit_type: &str) -> Result<Self> {
        let yearly_median = |property_type: &str| {
            Series::from_column(dataset.of_property_type(property_type), Column::Suburb)
                .resample(Granularity::Year, Aggregation::Median)
                .with_name(property_type)
        };

        let house = yearly_median(house_type);
        let unit = yearly_median(unit_type);
        let ratio = house.ratio(&unit)?.with_name("house_unit_ratio");

        Ok(Self { house, unit, ratio })
    }

    /// Every year with a house or unit median; the ratio only where both exist
    pub fn rows(&self) -> Vec<TypeSplitRow> {
        let mut rows: BTreeMap<NaiveDate, TypeSplitRow> = BTreeMap::new();
        let empty = |period| TypeSplitRow {
            period,
            house_median: None,
            unit_median: None,
            house_unit_ratio: None,
        };

        for p in self.house.points() {
            rows.entry(p.period).or_insert_with(|| empty(p.period)).house_median = Some(p.value);
        }
        for p in self.unit.points() {
            rows.entry(p.period).or_insert_with(|| empty(p.period)).unit_median = Some(p.value);
        }
        for p in self.ratio.points() {
            rows.entry(p.period).or_insert_with(|| empty(p.period)).house_unit_ratio = Some(p.value);
        }

        rows.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::observation::Observation;
    use approx::assert_relative_eq;
    use chrono::Datelike;

    fn obs(y: i32, m: u32, value: f64, property_type: &str) -> Observation {
        let date = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
        Observation::new(date, "sell_price", value, value, value, property_type)
    }

    #[test]
    fn test_ratio_covers_shared_years() {
        let mut rows = Vec::new();
        for y in 2004..=2024 {
            rows.push(obs(y, 3, 600_000.0, "house"));
        }
        for y in 2010..=2020 {
            rows.push(obs(y, 9, 400_000.0, "unit"));
        }
        let dataset = Dataset::new(rows, "sell_price").unwrap();

        let view = TypeSplitView::compute(&dataset, "house", "unit").unwrap();

        assert_eq!(view.house.len(), 21);
        assert_eq!(view.unit.len(), 11);
        assert_eq!(view.ratio.len(), 11);
        let years: Vec<i32> = view.ratio.periods().map(|p| p.year()).collect();
        assert_eq!(years, (2010..=2020).collect::<Vec<_>>());
        assert_relative_eq!(view.ratio.points()[0].value, 1.5);

        let rows = view.rows();
        assert_eq!(rows.len(), 21);
        assert_eq!(rows.iter().filter(|r| r.house_unit_ratio.is_some()).count(), 11);
        assert_eq!(rows[0].period.year(), 2004);
        assert_eq!(rows[0].unit_median, None);
        assert_eq!(rows[6].unit_median, Some(400_000.0));
        assert_eq!(rows[6].house_unit_ratio, Some(1.5));
    }

    #[test]
    fn test_yearly_median_per_type() {
        let dataset = Dataset::new(
            vec![
                obs(2010, 1, 500.0, "house"),
                obs(2010, 4, 700.0, "house"),
                obs(2010, 8, 900.0, "house"),
                obs(2010, 2, 300.0, "unit"),
                obs(2010, 6, 500.0, "unit"),
                obs(2010, 5, 1_000_000.0, "land"),
            ],
            "sell_price",
        )
        .unwrap();

        let view = TypeSplitView::compute(&dataset, "house", "unit").unwrap();

        assert_eq!(view.house.values().collect::<Vec<_>>(), vec![700.0]);
        assert_eq!(view.unit.values().collect::<Vec<_>>(), vec![400.0]);
        assert_relative_eq!(view.ratio.points()[0].value, 1.75);
        assert_eq!(view.ratio.name(), "house_unit_ratio");
    }

    #[test]
    fn test_no_common_years() {
        let dataset = Dataset::new(
            vec![obs(2010, 1, 500.0, "house"), obs(2011, 1, 300.0, "unit")],
            "sell_price",
        )
        .unwrap();

        let err = TypeSplitView::compute(&dataset, "house", "unit").unwrap_err();
        assert!(matches!(err, DashboardError::Alignment { .. }));
    }

    #[test]
    fn test_missing_property_type() {
        let dataset = Dataset::new(vec![obs(2010, 1, 500.0, "house")], "sell_price").unwrap();
        let err = TypeSplitView::compute(&dataset, "house", "unit").unwrap_err();
        assert!(matches!(err, DashboardError::Alignment { .. }));
    }
}
