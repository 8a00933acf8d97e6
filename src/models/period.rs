//! Attendance period model.
//!
//! An [`AttendancePeriod`] is a validated calendar month. Months are 1-based
//! (January is 1), following `chrono`.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Where a period sits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPosition {
    /// Entirely before the reference month.
    Past,
    /// The month containing the reference date.
    Current,
    /// Entirely after the reference month.
    Future,
}

/// A calendar month for which attendance and payroll are derived.
///
/// # Example
///
/// ```
/// use okboz_payroll::models::AttendancePeriod;
///
/// let november = AttendancePeriod::new(2025, 11).unwrap();
/// assert_eq!(november.days_in_month(), 30);
/// assert!(AttendancePeriod::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AttendancePeriod {
    year: i32,
    month: u32,
    #[serde(skip)]
    first_day: NaiveDate,
    #[serde(skip)]
    last_day: NaiveDate,
}

impl AttendancePeriod {
    /// Creates a period for the given year and 1-based month.
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the month is outside 1..=12
    /// or the year is outside the supported calendar range.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriod { year, month };

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_first
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// Returns the period containing `date`.
    pub fn containing(date: NaiveDate) -> EngineResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// The number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Returns the date of day `day` (1-based) in this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Iterates over every date of the month in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(move |d| self.day(d))
    }

    /// Returns true if `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// The month before this one, if representable.
    pub fn previous(&self) -> Option<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12).ok()
        } else {
            Self::new(self.year, self.month - 1).ok()
        }
    }

    /// The month after this one, if representable.
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1).ok()
        } else {
            Self::new(self.year, self.month + 1).ok()
        }
    }

    /// Compares this month with the month containing `reference`.
    pub fn position_relative_to(&self, reference: NaiveDate) -> PeriodPosition {
        match (self.year, self.month).cmp(&(reference.year(), reference.month())) {
            Ordering::Less => PeriodPosition::Past,
            Ordering::Equal => PeriodPosition::Current,
            Ordering::Greater => PeriodPosition::Future,
        }
    }
}

impl std::fmt::Display for AttendancePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
