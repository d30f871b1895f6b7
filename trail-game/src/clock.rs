//! In-game calendar.
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{START_DAY, START_MONTH, START_YEAR};

/// Calendar date of the journey. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameDate {
    current: NaiveDate,
}

impl GameDate {
    #[must_use]
    pub const fn new(start: NaiveDate) -> Self {
        Self { current: start }
    }

    /// Departure date from Fort Boise, March 1st 1846.
    #[must_use]
    pub fn departure() -> Self {
        let start = NaiveDate::from_ymd_opt(START_YEAR, START_MONTH, START_DAY)
            .unwrap_or(NaiveDate::MIN);
        Self::new(start)
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.current
    }

    /// Advance the calendar; saturates at the end of chrono's range.
    pub fn advance_days(&mut self, days: u32) {
        if days == 0 {
            return;
        }
        if let Some(next) = self.current.checked_add_days(Days::new(u64::from(days))) {
            self.current = next;
        } else {
            log::warn!("calendar overflow advancing {days} days from {}", self.current);
            self.current = NaiveDate::MAX;
        }
    }

    /// Whole days elapsed since `earlier`.
    #[must_use]
    pub fn days_since(&self, earlier: &Self) -> i64 {
        (self.current - earlier.current).num_days()
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::departure()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current.format("%B %d, %Y"))
    }
}
