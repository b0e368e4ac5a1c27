//! Compliance result model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The outcome of evaluating a worker's time entries over one period.
///
/// All numbers are unrounded; rounding is left to presentation layers such as
/// the [`report`](crate::report) module.
///
/// # Example
///
/// ```
/// use working_time_engine::models::ComplianceResult;
/// use chrono::DateTime;
///
/// let result = ComplianceResult {
///     compliance: true,
///     average: 8.0,
///     total_hours: 40.0,
///     workdays: 5,
///     period_start: DateTime::parse_from_rfc3339("2026-01-05T00:00:00+01:00").unwrap(),
///     period_end: DateTime::parse_from_rfc3339("2026-01-09T23:59:59+01:00").unwrap(),
/// };
/// assert!(result.compliance);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether the average stays within the daily threshold.
    pub compliance: bool,
    /// Average worked hours per working day, `0.0` when there are no working days.
    pub average: f64,
    /// Hours worked on working days of the period.
    pub total_hours: f64,
    /// Number of working days in the period.
    pub workdays: usize,
    /// The evaluated period start, as requested.
    pub period_start: DateTime<FixedOffset>,
    /// The evaluated period end, as requested.
    pub period_end: DateTime<FixedOffset>,
}
