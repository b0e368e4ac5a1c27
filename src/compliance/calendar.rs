//! Calendar day enumeration.

use chrono::NaiveDate;

/// Enumerates every calendar date from `start` to `end`, both inclusive.
///
/// Returns the dates in ascending order, one per day. A single-day range yields
/// exactly one date and a range whose `start` is after `end` yields none.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::calendar_days;
/// use chrono::NaiveDate;
///
/// let days = calendar_days(
///     NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// );
/// assert_eq!(days.len(), 4); // Feb 27, Feb 28, Mar 1, Mar 2
/// ```
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}
