//! The canonical, immutable observation table

use super::Observation;
use crate::error::{DashboardError, Result};

/// Observations of one metric, ordered by date
///
/// Rows sharing a date keep their input order. A `Dataset` is never empty,
/// so `first()` and `last()` always exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    metric: String,
    observations: Vec<Observation>,
}

impl Dataset {
    /// Keep the rows of `metric` and order them chronologically
    pub fn new(observations: Vec<Observation>, metric: &str) -> Result<Self> {
        let mut observations: Vec<Observation> = observations
            .into_iter()
            .filter(|obs| obs.metric == metric)
            .collect();

        if observations.is_empty() {
            return Err(DashboardError::EmptyDataset {
                metric: metric.to_string(),
            });
        }

        // Stable: ties stay in input order
        observations.sort_by_key(|obs| obs.date);

        Ok(Self {
            metric: metric.to_string(),
            observations,
        })
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Earliest observation
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// Latest observation (last in input order among the latest date)
    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// Observation at a positional index
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Rows of one property type, in table order
    pub fn of_property_type<'a>(
        &'a self,
        property_type: &'a str,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations
            .iter()
            .filter(move |obs| obs.is_property_type(property_type))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(y: i32, m: u32, d: u32, metric: &str, value: f64, property_type: &str) -> Observation {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Observation::new(date, metric, value, value, value, property_type)
    }

    #[test]
    fn test_filters_and_sorts() {
        let rows = vec![
            obs(2012, 5, 1, "sell_price", 3.0, "house"),
            obs(2010, 1, 1, "rent_price", 9.0, "house"),
            obs(2010, 1, 1, "sell_price", 1.0, "unit"),
            obs(2011, 1, 1, "sell_price", 2.0, "house"),
        ];
        let dataset = Dataset::new(rows, "sell_price").unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.metric(), "sell_price");
        let values: Vec<f64> = dataset.iter().map(|o| o.suburb_value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(dataset.first().suburb_value, 1.0);
        assert_eq!(dataset.last().suburb_value, 3.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows = vec![
            obs(2015, 6, 1, "sell_price", 10.0, "house"),
            obs(2015, 6, 1, "sell_price", 20.0, "unit"),
            obs(2014, 6, 1, "sell_price", 5.0, "house"),
            obs(2015, 6, 1, "sell_price", 30.0, "house"),
        ];
        let dataset = Dataset::new(rows, "sell_price").unwrap();

        let values: Vec<f64> = dataset.iter().map(|o| o.suburb_value).collect();
        assert_eq!(values, vec![5.0, 10.0, 20.0, 30.0]);
        assert_eq!(dataset.last().suburb_value, 30.0);
    }

    #[test]
    fn test_empty_after_filter() {
        let rows = vec![obs(2010, 1, 1, "rent_price", 1.0, "house")];
        let err = Dataset::new(rows, "sell_price").unwrap_err();
        assert!(matches!(err, DashboardError::EmptyDataset { ref metric } if metric == "sell_price"));
    }

    #[test]
    fn test_property_type_subset() {
        let rows = vec![
            obs(2010, 1, 1, "sell_price", 1.0, "house"),
            obs(2010, 2, 1, "sell_price", 2.0, "unit"),
            obs(2010, 3, 1, "sell_price", 3.0, "house"),
            obs(2010, 4, 1, "sell_price", 4.0, "land"),
        ];
        let dataset = Dataset::new(rows, "sell_price").unwrap();

        let houses: Vec<f64> = dataset.of_property_type("house").map(|o| o.suburb_value).collect();
        let units: Vec<f64> = dataset.of_property_type("unit").map(|o| o.suburb_value).collect();
        assert_eq!(houses, vec![1.0, 3.0]);
        assert_eq!(units, vec![2.0]);
    }
}
