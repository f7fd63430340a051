use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A cycle-defining event, e.g. a block-reward halving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpochBoundary {
    /// Sequence number of the event (1 = first halving)
    pub index: u32,
    pub date: NaiveDate,
    /// True when the date is an estimate rather than an observed event
    #[serde(default)]
    pub projected: bool,
}

/// Ordered table of epoch boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HalvingSchedule {
    pub boundaries: Vec<EpochBoundary>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // An invalid literal would silently become 1970-01-01;
    // test_default_schedule_dates pins every default entry.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for HalvingSchedule {
    fn default() -> Self {
        Self {
            boundaries: vec![
                EpochBoundary { index: 1, date: ymd(2012, 11, 28), projected: false },
                EpochBoundary { index: 2, date: ymd(2016, 7, 9), projected: false },
                EpochBoundary { index: 3, date: ymd(2020, 5, 11), projected: false },
                EpochBoundary { index: 4, date: ymd(2024, 4, 20), projected: false },
                EpochBoundary { index: 5, date: ymd(2028, 4, 17), projected: true },
            ],
        }
    }
}

impl HalvingSchedule {
    /// Check the table is usable for cycle lookups.
    ///
    /// Requires at least one full cycle, strictly increasing dates, and
    /// projected boundaries only at the tail.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.boundaries.len() < 2 {
            return Err(AppError::Config(format!(
                "halving schedule needs at least 2 boundaries, got {}",
                self.boundaries.len()
            )));
        }

        for pair in self.boundaries.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AppError::Config(format!(
                    "halving boundaries must be strictly increasing: #{} ({}) is not after #{} ({})",
                    pair[1].index, pair[1].date, pair[0].index, pair[0].date
                )));
            }
            if pair[0].projected && !pair[1].projected {
                return Err(AppError::Config(format!(
                    "observed boundary #{} follows projected boundary #{}",
                    pair[1].index, pair[0].index
                )));
            }
        }

        Ok(())
    }

    pub fn last(&self) -> Option<&EpochBoundary> {
        self.boundaries.last()
    }
}

/// Position of a point in time within the current cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleProgress {
    /// Index of the boundary that opened the cycle
    pub cycle_index: u32,
    /// 0-100, saturating
    pub percent_complete: u8,
    pub days_since_start: i64,
    /// Negative once the closing boundary has passed
    pub days_until_next: i64,
    pub start_boundary: EpochBoundary,
    pub end_boundary: EpochBoundary,
}
