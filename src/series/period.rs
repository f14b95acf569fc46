//! Resampling periods
//!
//! A period is labelled by its last calendar day, so a label is also a valid
//! date inside its own period and relabelling is stable.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Resampling granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// Calendar year, labelled 31 December
    Year,
    /// Calendar month, labelled with its last day
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
        }
    }

    /// Label of the period containing `date`
    pub fn period_end(&self, date: NaiveDate) -> NaiveDate {
        let end = match self {
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31),
            Granularity::Month => month_end(date.year(), date.month()),
        };
        end.unwrap_or(NaiveDate::MAX)
    }
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    next_month_start.pred_opt()
}
