//! Derived dashboard views, each a pure function of the canonical dataset

mod indexed;
mod rolling;
mod type_split;

pub use indexed::{IndexedGrowthView, IndexedRow};
pub use rolling::{RollingGrowthView, RollingRow};
pub use type_split::{TypeSplitRow, TypeSplitView};
