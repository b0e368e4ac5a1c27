//! Public holiday lookup.
//!
//! This module defines the [`HolidayLookup`] capability consumed by the working-day
//! filter and [`StaticHolidayCalendar`], an in-memory implementation backed by
//! configuration files.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayGroupId, Period, PublicHoliday};

/// A source of public holidays, keyed by period and holiday group.
///
/// Implementations may block on I/O. Errors returned from [`find_holidays`] never
/// abort a compliance evaluation; the caller treats them as "no holidays".
///
/// [`find_holidays`]: HolidayLookup::find_holidays
pub trait HolidayLookup: Send + Sync {
    /// Returns the holidays of `group` that fall within `period`.
    fn find_holidays(
        &self,
        period: &Period,
        group: &HolidayGroupId,
    ) -> EngineResult<Vec<PublicHoliday>>;
}

/// Holiday calendars held in memory, one list of holidays per group.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::{HolidayLookup, StaticHolidayCalendar};
/// use working_time_engine::models::{HolidayGroupId, Period, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = StaticHolidayCalendar::new().with_group(
///     "de",
///     vec![PublicHoliday {
///         date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
///         name: "Tag der Arbeit".to_string(),
///     }],
/// );
///
/// let period = Period::for_dates(
///     NaiveDate::from_ymd_opt(2026, 4, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
/// )
/// .unwrap();
///
/// let holidays = calendar.find_holidays(&period, &HolidayGroupId::new("de")).unwrap();
/// assert_eq!(holidays.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHolidayCalendar {
    groups: HashMap<HolidayGroupId, Vec<PublicHoliday>>,
    names: HashMap<HolidayGroupId, String>,
}

impl StaticHolidayCalendar {
    /// Creates an empty calendar with no groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group to the calendar, returning the calendar.
    pub fn with_group(
        mut self,
        group: impl Into<HolidayGroupId>,
        holidays: Vec<PublicHoliday>,
    ) -> Self {
        self.insert_group(group, holidays);
        self
    }

    /// Adds holidays to a group, creating the group if needed.
    pub fn insert_group(&mut self, group: impl Into<HolidayGroupId>, holidays: Vec<PublicHoliday>) {
        self.groups.entry(group.into()).or_default().extend(holidays);
    }

    /// Sets the human-readable name of a group.
    pub fn set_group_name(&mut self, group: impl Into<HolidayGroupId>, name: impl Into<String>) {
        self.names.insert(group.into(), name.into());
    }

    /// Returns the human-readable name of a group, if one was set.
    pub fn group_name(&self, group: &HolidayGroupId) -> Option<&str> {
        self.names.get(group).map(String::as_str)
    }

    /// Returns true if the calendar has a group with the given identifier.
    pub fn has_group(&self, group: &HolidayGroupId) -> bool {
        self.groups.contains_key(group)
    }

    /// Returns the number of groups in the calendar.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl HolidayLookup for StaticHolidayCalendar {
    fn find_holidays(
        &self,
        period: &Period,
        group: &HolidayGroupId,
    ) -> EngineResult<Vec<PublicHoliday>> {
        let holidays = self
            .groups
            .get(group)
            .ok_or_else(|| EngineError::HolidayGroupNotFound {
                group: group.to_string(),
            })?;

        Ok(holidays
            .iter()
            .filter(|holiday| period.contains_date(holiday.date))
            .cloned()
            .collect())
    }
}
