//! Working-time compliance calculation.
//!
//! This module contains the compliance engine and its building blocks: calendar
//! day enumeration, working-day filtering against a weekday rule and public holidays,
//! daily aggregation of time entries, and the evaluator producing the verdict.

mod calendar;
mod daily_totals;
mod evaluator;
mod holidays;
mod working_days;

pub use calendar::calendar_days;
pub use daily_totals::{DailyTotals, aggregate_daily_hours, dated_entries};
pub use evaluator::{ComplianceEngine, MAX_AVERAGE_DAILY_HOURS};
pub use holidays::{HolidayLookup, StaticHolidayCalendar};
pub use working_days::{
    NON_WORKING_WEEKDAY, WorkingDayFilter, WorkingDays, is_working_day, resolve_holiday_dates,
};
