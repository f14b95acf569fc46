//! Series building blocks shared by every view: filter, resample, derive, join

mod aggregate;
mod data;
mod growth;
mod period;

pub use aggregate::Aggregation;
pub use data::{Point, Series};
pub use growth::{GrowthPoint, GrowthSeries};
pub use period::Granularity;
