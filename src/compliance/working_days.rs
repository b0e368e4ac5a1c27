//! Working-day filtering.
//!
//! This module reduces a sequence of calendar days to the working days of a period:
//! days that are neither the non-working weekday nor a public holiday of the
//! worker's holiday group.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::models::{HolidayGroupId, Period};

use super::HolidayLookup;

/// The weekday on which no work is expected.
///
/// Only this single weekday is excluded; Saturday counts as a working day.
pub const NON_WORKING_WEEKDAY: Weekday = Weekday::Sun;

/// The set of working days of a period.
pub type WorkingDays = BTreeSet<NaiveDate>;

/// Checks if a single date is a working day.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::{is_working_day, NON_WORKING_WEEKDAY};
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let holidays = BTreeSet::from([NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()]);
///
/// // 2026-01-05 is a Monday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), NON_WORKING_WEEKDAY, &holidays));
/// // 2026-01-06 is a holiday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(), NON_WORKING_WEEKDAY, &holidays));
/// // 2026-01-11 is a Sunday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(), NON_WORKING_WEEKDAY, &holidays));
/// ```
pub fn is_working_day(
    date: NaiveDate,
    non_working_weekday: Weekday,
    holidays: &BTreeSet<NaiveDate>,
) -> bool {
    date.weekday() != non_working_weekday && !holidays.contains(&date)
}

/// Resolves the holiday dates of a group for a period.
///
/// Holiday data is best-effort. An empty set is returned when no group is given,
/// when no lookup is wired, or when the lookup fails; a failure is logged and
/// never propagated.
pub fn resolve_holiday_dates(
    lookup: Option<&dyn HolidayLookup>,
    group: Option<&HolidayGroupId>,
    period: &Period,
) -> BTreeSet<NaiveDate> {
    // An empty identifier selects no calendar, like a missing one
    let Some(group) = group.filter(|group| !group.as_str().is_empty()) else {
        return BTreeSet::new();
    };

    let Some(lookup) = lookup else {
        debug!(group = %group, "No holiday lookup configured, continuing without holidays");
        return BTreeSet::new();
    };

    match lookup.find_holidays(period, group) {
        Ok(holidays) => holidays.into_iter().map(|holiday| holiday.date).collect(),
        Err(err) => {
            warn!(
                group = %group,
                error = %err,
                "Holiday lookup failed, continuing without holidays"
            );
            BTreeSet::new()
        }
    }
}

/// Filters calendar days down to working days.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::{WorkingDayFilter, NON_WORKING_WEEKDAY};
/// use working_time_engine::models::Period;
/// use chrono::NaiveDate;
///
/// // Monday 2026-01-05 through Sunday 2026-01-11
/// let period = Period::for_dates(
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
/// )
/// .unwrap();
///
/// let filter = WorkingDayFilter::new(NON_WORKING_WEEKDAY);
/// let working_days = filter.working_days(&period.calendar_days(), None, &period);
/// assert_eq!(working_days.len(), 6);
/// ```
#[derive(Clone, Copy)]
pub struct WorkingDayFilter<'a> {
    lookup: Option<&'a dyn HolidayLookup>,
    non_working_weekday: Weekday,
}

impl<'a> WorkingDayFilter<'a> {
    /// Creates a filter without holiday data.
    pub fn new(non_working_weekday: Weekday) -> Self {
        Self {
            lookup: None,
            non_working_weekday,
        }
    }

    /// Sets the holiday lookup consulted for holiday groups.
    pub fn with_holiday_lookup(mut self, lookup: Option<&'a dyn HolidayLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    /// Returns the subset of `days` that are working days.
    ///
    /// Holidays are resolved once for the whole period. A holiday that falls on the
    /// non-working weekday removes nothing further.
    pub fn working_days(
        &self,
        days: &[NaiveDate],
        group: Option<&HolidayGroupId>,
        period: &Period,
    ) -> WorkingDays {
        let holidays = resolve_holiday_dates(self.lookup, group, period);

        days.iter()
            .copied()
            .filter(|day| is_working_day(*day, self.non_working_weekday, &holidays))
            .collect()
    }
}
