//! Time entry model.
//!
//! A [`TimeEntry`] is the plain record the engine reads from a time-entry source:
//! when the work started and how long it lasted.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A recorded block of work.
///
/// Only the calendar date and the duration are relevant for compliance. The date is
/// taken from `begin`, resolved in the offset of the evaluated period, and falls back
/// to `date` when no start timestamp was recorded. An entry with neither has no
/// resolvable date.
///
/// # Example
///
/// ```
/// use working_time_engine::models::TimeEntry;
/// use chrono::{DateTime, NaiveDate};
///
/// let entry = TimeEntry::starting_at(
///     DateTime::parse_from_rfc3339("2026-01-05T08:00:00+01:00").unwrap(),
///     8 * 3600,
/// );
///
/// assert_eq!(entry.calendar_date(entry.begin.unwrap().offset()), NaiveDate::from_ymd_opt(2026, 1, 5));
/// assert_eq!(entry.hours(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// When the work started.
    #[serde(default)]
    pub begin: Option<DateTime<FixedOffset>>,
    /// The calendar date of the entry, used when `begin` is missing.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Worked duration in seconds. A missing duration counts as zero.
    #[serde(default)]
    pub duration: u64,
}

impl TimeEntry {
    /// Creates an entry that started at the given instant.
    pub fn starting_at(begin: DateTime<FixedOffset>, duration: u64) -> Self {
        Self {
            begin: Some(begin),
            date: None,
            duration,
        }
    }

    /// Creates an entry that only records its calendar date.
    pub fn on_date(date: NaiveDate, duration: u64) -> Self {
        Self {
            begin: None,
            date: Some(date),
            duration,
        }
    }

    /// Resolves the calendar date the entry counts towards, reading `begin` in `offset`.
    ///
    /// Returns `None` when neither a start timestamp nor a date was recorded.
    pub fn calendar_date(&self, offset: &FixedOffset) -> Option<NaiveDate> {
        self.begin
            .map(|begin| begin.with_timezone(offset).date_naive())
            .or(self.date)
    }

    /// Returns the worked duration in hours, without rounding.
    pub fn hours(&self) -> f64 {
        self.duration as f64 / SECONDS_PER_HOUR
    }
}
