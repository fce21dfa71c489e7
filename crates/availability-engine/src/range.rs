//! Calendar-date ranges: candidate stays and persisted booking intervals.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A candidate stay from check-in to check-out.
///
/// No ordering is enforced here: an unvalidated range may have `end <= start`,
/// which [`crate::validate_range`] reports as
/// [`Reason::EndNotAfterStart`](crate::Reason::EndNotAfterStart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whole days from `start` to `end`; negative when the range is reversed.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Inclusive containment of a single day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every calendar day from `start` through `end`, inclusive.
    ///
    /// Yields nothing when `end < start`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.checked_add_days(Days::new(1)))
            .take_while(move |d| *d <= end)
    }
}

/// The span of an existing booking, inclusive of both ends.
///
/// Fields are private so an interval can only be built through [`BookingInterval::new`],
/// which rejects `end < start`. A single-day interval (`start == end`) is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BookingInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl BookingInterval {
    /// # Errors
    /// Returns `EngineError::InvalidArgument` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(EngineError::InvalidArgument(format!(
                "booking interval ends ({}) before it starts ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn as_range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

impl TryFrom<DateRange> for BookingInterval {
    type Error = EngineError;

    fn try_from(range: DateRange) -> Result<Self> {
        Self::new(range.start, range.end)
    }
}

impl<'de> Deserialize<'de> for BookingInterval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let range = DateRange::deserialize(deserializer)?;
        Self::try_from(range).map_err(serde::de::Error::custom)
    }
}

