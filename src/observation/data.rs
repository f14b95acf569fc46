//! Observation records matching the market CSV format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value columns carried by every observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Target suburb
    Suburb,
    /// Regional (CR) benchmark
    Cr,
    /// Statistical area (SA3) benchmark
    Sa3,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Suburb, Column::Cr, Column::Sa3];

    /// Column name in the input file
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Suburb => "suburb_value",
            Column::Cr => "cr_value",
            Column::Sa3 => "sa3_value",
        }
    }
}

/// A single row of the market table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date (parsed day-first)
    pub date: NaiveDate,

    /// Metric category, e.g. `sell_price`
    pub metric: String,

    /// Value for the target suburb
    pub suburb_value: f64,

    /// Value for the regional benchmark
    pub cr_value: f64,

    /// Value for the statistical area benchmark
    pub sa3_value: f64,

    /// Property type, e.g. `house` or `unit`
    pub property_type: String,
}

impl Observation {
    pub fn new(
        date: NaiveDate,
        metric: &str,
        suburb_value: f64,
        cr_value: f64,
        sa3_value: f64,
        property_type: &str,
    ) -> Self {
        Self {
            date,
            metric: metric.to_string(),
            suburb_value,
            cr_value,
            sa3_value,
            property_type: property_type.to_string(),
        }
    }

    /// Value of the given column
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Suburb => self.suburb_value,
            Column::Cr => self.cr_value,
            Column::Sa3 => self.sa3_value,
        }
    }

    pub fn is_property_type(&self, property_type: &str) -> bool {
        self.property_type == property_type
    }
}
