//! Evaluation period and public holiday models.
//!
//! This module contains the [`Period`], [`PublicHoliday`] and [`HolidayGroupId`] types
//! that define the calendar context of a compliance evaluation.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::compliance::calendar_days;
use crate::error::{EngineError, EngineResult};

/// Opaque identifier selecting which holiday calendar applies to a worker.
///
/// The engine never interprets the identifier; it is only passed through to the
/// [`HolidayLookup`](crate::compliance::HolidayLookup).
///
/// # Example
///
/// ```
/// use working_time_engine::models::HolidayGroupId;
///
/// let group = HolidayGroupId::new("de-by");
/// assert_eq!(group.as_str(), "de-by");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayGroupId(String);

impl HolidayGroupId {
    /// Creates a group identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HolidayGroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for HolidayGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A public holiday on which no work is expected.
///
/// # Example
///
/// ```
/// use working_time_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
///     name: "Tag der Deutschen Einheit".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Neujahr").
    pub name: String,
}

/// An inclusive evaluation period between two instants.
///
/// A period can only be constructed with `start <= end`; the reversed case is
/// reported as [`EngineError::InvalidRange`]. Both boundaries are treated as whole
/// calendar days. All dates of a period, its own and those of the entries evaluated
/// over it, are read in the offset of the start instant, so an ordered period always
/// covers at least one day.
///
/// # Example
///
/// ```
/// use working_time_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::for_dates(
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.calendar_days().len(), 7);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl Period {
    /// Creates a period from two instants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a period covering whole UTC days from `start` to `end`.
    ///
    /// The start instant is midnight of `start` and the end instant is 23:59:59 of `end`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
    pub fn for_dates(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        let end_of_day =
            NaiveTime::from_hms_opt(23, 59, 59).ok_or_else(|| EngineError::CalculationError {
                message: "end of day time is out of range".to_string(),
            })?;

        Self::new(
            Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN)).into(),
            Utc.from_utc_datetime(&end.and_time(end_of_day)).into(),
        )
    }

    /// Returns the start instant.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Returns the end instant.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Returns the offset in which the period's calendar dates are resolved.
    pub fn offset(&self) -> FixedOffset {
        *self.start.offset()
    }

    /// Returns the calendar date of the start instant.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Returns the calendar date of the end instant, read in the start's offset.
    pub fn end_date(&self) -> NaiveDate {
        self.end.with_timezone(&self.offset()).date_naive()
    }

    /// Checks if a date lies within the period's calendar days (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Checks if an instant lies within the period (inclusive).
    pub fn contains_instant(&self, instant: DateTime<FixedOffset>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Returns every calendar day of the period in ascending order.
    pub fn calendar_days(&self) -> Vec<NaiveDate> {
        calendar_days(self.start_date(), self.end_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn create_period() -> Period {
        Period::for_dates(make_date("2026-01-05"), make_date("2026-01-16")).unwrap()
    }

    /// PR-001: reversed bounds are rejected
    #[test]
    fn test_new_rejects_start_after_end() {
        let result = Period::new(
            instant("2026-01-16T00:00:00+01:00"),
            instant("2026-01-05T00:00:00+01:00"),
        );

        match result {
            Err(EngineError::InvalidRange { start, end }) => {
                assert_eq!(start, instant("2026-01-16T00:00:00+01:00"));
                assert_eq!(end, instant("2026-01-05T00:00:00+01:00"));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    /// PR-002: same instant is a valid single-day period
    #[test]
    fn test_new_accepts_equal_bounds() {
        let at = instant("2026-01-07T10:00:00+01:00");
        let period = Period::new(at, at).unwrap();
        assert_eq!(period.calendar_days(), vec![make_date("2026-01-07")]);
    }

    /// PR-003: same date but later start time is still reversed
    #[test]
    fn test_new_rejects_later_time_on_same_day() {
        let result = Period::new(
            instant("2026-01-07T18:00:00+01:00"),
            instant("2026-01-07T08:00:00+01:00"),
        );
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_for_dates_spans_whole_days() {
        let period = create_period();
        assert_eq!(period.start(), instant("2026-01-05T00:00:00Z"));
        assert_eq!(period.end(), instant("2026-01-16T23:59:59Z"));
    }

    #[test]
    fn test_dates_across_midnight() {
        let period = Period::new(
            instant("2026-01-05T23:30:00+01:00"),
            instant("2026-01-06T00:30:00+01:00"),
        )
        .unwrap();
        assert_eq!(period.start_date(), make_date("2026-01-05"));
        assert_eq!(period.end_date(), make_date("2026-01-06"));
        assert_eq!(period.calendar_days().len(), 2);
    }

    /// PR-004: mixed offsets are read in the start's offset
    #[test]
    fn test_mixed_offsets_keep_at_least_one_day() {
        // One hour long; the end alone would read as the 5th, the start as the 6th
        let period = Period::new(
            instant("2026-01-06T00:30:00+02:00"),
            instant("2026-01-05T23:30:00Z"),
        )
        .unwrap();

        assert_eq!(period.offset(), FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(period.start_date(), make_date("2026-01-06"));
        assert_eq!(period.end_date(), make_date("2026-01-06"));
        assert_eq!(period.calendar_days(), vec![make_date("2026-01-06")]);
        assert!(period.contains_date(make_date("2026-01-06")));
        assert!(!period.contains_date(make_date("2026-01-05")));
    }

    #[test]
    fn test_contains_date_bounds() {
        let period = create_period();
        assert!(period.contains_date(make_date("2026-01-05")));
        assert!(period.contains_date(make_date("2026-01-16")));
        assert!(!period.contains_date(make_date("2026-01-04")));
        assert!(!period.contains_date(make_date("2026-01-17")));
    }

    #[test]
    fn test_contains_instant_bounds() {
        let period = create_period();
        assert!(period.contains_instant(instant("2026-01-05T00:00:00Z")));
        assert!(period.contains_instant(instant("2026-01-16T23:59:59Z")));
        assert!(!period.contains_instant(instant("2026-01-17T00:00:00Z")));
    }

    #[test]
    fn test_serialize_period() {
        let period = create_period();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start\":\"2026-01-05T00:00:00Z\""));
        assert!(json.contains("\"end\":\"2026-01-16T23:59:59Z\""));
    }

    #[test]
    fn test_deserialize_public_holiday() {
        let json = r#"{
            "date": "2026-12-25",
            "name": "1. Weihnachtstag"
        }"#;
        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, make_date("2026-12-25"));
        assert_eq!(holiday.name, "1. Weihnachtstag");
    }

    #[test]
    fn test_holiday_group_id_is_transparent() {
        let group: HolidayGroupId = serde_json::from_str("\"de-by\"").unwrap();
        assert_eq!(group, HolidayGroupId::from("de-by"));
        assert_eq!(serde_json::to_string(&group).unwrap(), "\"de-by\"");
        assert_eq!(group.to_string(), "de-by");
    }
}
