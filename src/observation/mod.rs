//! Market observations, the canonical dataset and its loading

mod data;
mod dataset;
pub mod cache;
pub mod loader;

pub use data::{Column, Observation};
pub use dataset::Dataset;
pub use cache::{DatasetCache, SourceFingerprint};
pub use loader::{load_dataset, load_dataset_from_reader, load_default_dataset, parse_day_first};
