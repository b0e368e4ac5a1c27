//! Daily aggregation of time entries.
//!
//! Entries are bucketed by calendar date only. Whether a date counts towards the
//! compliance average is decided later, by the evaluator.

use std::collections::BTreeMap;

use chrono::{FixedOffset, NaiveDate};

use crate::models::TimeEntry;

/// Worked hours per calendar date.
///
/// Dates without entries are absent; [`DailyTotals::hours_on`] reads them as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTotals {
    hours: BTreeMap<NaiveDate, f64>,
}

impl DailyTotals {
    /// Returns the hours recorded on `date`, if any entry fell on it.
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.hours.get(&date).copied()
    }

    /// Returns the hours recorded on `date`, or `0.0` when nothing was recorded.
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.get(date).unwrap_or(0.0)
    }

    /// Returns the number of dates with at least one entry.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Returns true if no entry could be dated.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Iterates over dates and their hours in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.hours.iter().map(|(date, hours)| (*date, *hours))
    }
}

/// Pairs each entry with its calendar date in `offset`, dropping entries that have none.
///
/// Entries failing date resolution are excluded from all totals. This is a
/// data-quality tolerance, not an error.
pub fn dated_entries<'a>(
    entries: &'a [TimeEntry],
    offset: &'a FixedOffset,
) -> impl Iterator<Item = (NaiveDate, &'a TimeEntry)> + 'a {
    entries
        .iter()
        .filter_map(move |entry| entry.calendar_date(offset).map(|date| (date, entry)))
}

/// Sums the hours of all dated entries per calendar date, with dates read in `offset`.
///
/// Entries are added in input order, so the same input always produces the same
/// totals down to the last bit.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::aggregate_daily_hours;
/// use working_time_engine::models::TimeEntry;
/// use chrono::{FixedOffset, NaiveDate};
///
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let entries = vec![
///     TimeEntry::on_date(monday, 4 * 3600),
///     TimeEntry::on_date(monday, 5400),
/// ];
///
/// let totals = aggregate_daily_hours(&entries, &cet);
/// assert_eq!(totals.hours_on(monday), 5.5);
/// ```
pub fn aggregate_daily_hours(entries: &[TimeEntry], offset: &FixedOffset) -> DailyTotals {
    let mut hours: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for (date, entry) in dated_entries(entries, offset) {
        *hours.entry(date).or_insert(0.0) += entry.hours();
    }

    DailyTotals { hours }
}
