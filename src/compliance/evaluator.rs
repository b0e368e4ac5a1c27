//! Compliance evaluation.
//!
//! This module combines the calendar, the working-day filter and the daily totals
//! into a [`ComplianceResult`] for German Arbeitszeitgesetz § 3: the average daily
//! working time over working days must not exceed eight hours.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::config::WorkingTimeRule;
use crate::error::EngineResult;
use crate::models::{ComplianceResult, HolidayGroupId, Period, TimeEntry};

use super::{HolidayLookup, WorkingDayFilter, WorkingDays, aggregate_daily_hours};

/// The statutory maximum of average working hours per working day.
pub const MAX_AVERAGE_DAILY_HOURS: f64 = 8.0;

/// Evaluates time entries against the working-time rule.
///
/// The engine holds no mutable state. It can be shared between threads and reused
/// for any number of evaluations.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::ComplianceEngine;
/// use working_time_engine::models::TimeEntry;
/// use chrono::{DateTime, NaiveDate};
///
/// let engine = ComplianceEngine::default();
///
/// // Monday 2026-01-05 through Friday 2026-01-09, 8 hours a day
/// let entries: Vec<TimeEntry> = (5..=9)
///     .map(|day| TimeEntry::on_date(NaiveDate::from_ymd_opt(2026, 1, day).unwrap(), 8 * 3600))
///     .collect();
///
/// let result = engine
///     .evaluate(
///         &entries,
///         None,
///         DateTime::parse_from_rfc3339("2026-01-05T00:00:00+01:00").unwrap(),
///         DateTime::parse_from_rfc3339("2026-01-09T23:59:59+01:00").unwrap(),
///     )
///     .unwrap();
///
/// assert_eq!(result.workdays, 5);
/// assert_eq!(result.total_hours, 40.0);
/// assert_eq!(result.average, 8.0);
/// assert!(result.compliance);
/// ```
#[derive(Clone, Default)]
pub struct ComplianceEngine {
    rule: WorkingTimeRule,
    holidays: Option<Arc<dyn HolidayLookup>>,
}

impl fmt::Debug for ComplianceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplianceEngine")
            .field("rule", &self.rule)
            .field("holiday_lookup", &self.holidays.is_some())
            .finish()
    }
}

impl ComplianceEngine {
    /// Creates an engine for the given rule, without holiday data.
    pub fn new(rule: WorkingTimeRule) -> Self {
        Self {
            rule,
            holidays: None,
        }
    }

    /// Wires a holiday lookup into the engine.
    pub fn with_holiday_lookup(mut self, lookup: Arc<dyn HolidayLookup>) -> Self {
        self.holidays = Some(lookup);
        self
    }

    /// Returns the rule the engine evaluates against.
    pub fn rule(&self) -> &WorkingTimeRule {
        &self.rule
    }

    /// Returns true if a holiday lookup is wired.
    pub fn has_holiday_lookup(&self) -> bool {
        self.holidays.is_some()
    }

    /// Computes the working days of a period for a holiday group.
    pub fn working_days(&self, period: &Period, group: Option<&HolidayGroupId>) -> WorkingDays {
        WorkingDayFilter::new(self.rule.non_working_weekday)
            .with_holiday_lookup(self.holidays.as_deref())
            .working_days(&period.calendar_days(), group, period)
    }

    /// Evaluates entries over the inclusive period `[period_start, period_end]`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`](crate::error::EngineError::InvalidRange)
    /// if `period_start` is after `period_end`. No other condition fails: undated
    /// entries are skipped and holiday lookup problems count as "no holidays".
    pub fn evaluate(
        &self,
        entries: &[TimeEntry],
        holiday_group: Option<&HolidayGroupId>,
        period_start: DateTime<FixedOffset>,
        period_end: DateTime<FixedOffset>,
    ) -> EngineResult<ComplianceResult> {
        let period = Period::new(period_start, period_end)?;
        Ok(self.evaluate_period(entries, holiday_group, &period))
    }

    /// Evaluates entries over an already validated period.
    pub fn evaluate_period(
        &self,
        entries: &[TimeEntry],
        holiday_group: Option<&HolidayGroupId>,
        period: &Period,
    ) -> ComplianceResult {
        let working_days = self.working_days(period, holiday_group);
        let daily_totals = aggregate_daily_hours(entries, &period.offset());

        // Working days without entries add zero; other dates never count
        let total_hours = working_days
            .iter()
            .fold(0.0, |total, day| total + daily_totals.hours_on(*day));
        let workdays = working_days.len();

        let average = if workdays > 0 {
            total_hours / workdays as f64
        } else {
            0.0
        };
        let compliance = average <= self.rule.max_average_daily_hours;

        debug!(
            period_start = %period.start(),
            period_end = %period.end(),
            holiday_group = ?holiday_group.map(HolidayGroupId::as_str),
            entries = entries.len(),
            workdays,
            total_hours,
            average,
            compliance,
            "Evaluated working time compliance"
        );

        ComplianceResult {
            compliance,
            average,
            total_hours,
            workdays,
            period_start: period.start(),
            period_end: period.end(),
        }
    }
}
