//! Configuration types for working-time rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::compliance::{MAX_AVERAGE_DAILY_HOURS, NON_WORKING_WEEKDAY, StaticHolidayCalendar};
use crate::models::{HolidayGroupId, PublicHoliday};

/// Default length of the calendar-month reference period.
pub const DEFAULT_REFERENCE_MONTHS: u32 = 6;

/// Default length of the week reference period.
pub const DEFAULT_REFERENCE_WEEKS: u32 = 24;

/// Metadata about the statutory rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// A short code for the rule (e.g., "ArbZG-3").
    pub code: String,
    /// The human-readable name of the rule.
    pub name: String,
    /// URL to the statute text.
    pub source_url: String,
}

/// The windows over which the average is checked when no period is requested.
///
/// The statute allows averaging over six calendar months or 24 weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePeriods {
    /// Length of the calendar-month window.
    #[serde(default = "default_months")]
    pub months: u32,
    /// Length of the week window.
    #[serde(default = "default_weeks")]
    pub weeks: u32,
}

fn default_months() -> u32 {
    DEFAULT_REFERENCE_MONTHS
}

fn default_weeks() -> u32 {
    DEFAULT_REFERENCE_WEEKS
}

impl Default for ReferencePeriods {
    fn default() -> Self {
        Self {
            months: DEFAULT_REFERENCE_MONTHS,
            weeks: DEFAULT_REFERENCE_WEEKS,
        }
    }
}

/// The parameters of the working-time rule.
///
/// # Example
///
/// ```
/// use working_time_engine::config::WorkingTimeRule;
/// use chrono::Weekday;
///
/// let rule = WorkingTimeRule::default();
/// assert_eq!(rule.max_average_daily_hours, 8.0);
/// assert_eq!(rule.non_working_weekday, Weekday::Sun);
/// assert_eq!(rule.reference_periods.weeks, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingTimeRule {
    /// Maximum average hours per working day.
    #[serde(default = "default_max_average_daily_hours")]
    pub max_average_daily_hours: f64,
    /// The weekday that never counts as a working day.
    #[serde(default = "default_non_working_weekday")]
    pub non_working_weekday: Weekday,
    /// Default reference periods for reports.
    #[serde(default)]
    pub reference_periods: ReferencePeriods,
}

fn default_max_average_daily_hours() -> f64 {
    MAX_AVERAGE_DAILY_HOURS
}

fn default_non_working_weekday() -> Weekday {
    NON_WORKING_WEEKDAY
}

impl Default for WorkingTimeRule {
    fn default() -> Self {
        Self {
            max_average_daily_hours: MAX_AVERAGE_DAILY_HOURS,
            non_working_weekday: NON_WORKING_WEEKDAY,
            reference_periods: ReferencePeriods::default(),
        }
    }
}

/// Structure of `rule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleFile {
    /// Rule metadata.
    pub rule: RuleMetadata,
    /// Rule parameters.
    #[serde(default)]
    pub limits: WorkingTimeRule,
}

/// Structure of a file in the `holidays/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayGroupFile {
    /// The group identifier workers refer to.
    pub group: HolidayGroupId,
    /// The human-readable name of the group (e.g., "Bayern").
    pub name: String,
    /// The holidays of the group.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

/// The complete rule configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Rule metadata.
    metadata: RuleMetadata,
    /// Rule parameters.
    rule: WorkingTimeRule,
    /// Holiday calendars, absent when none are configured.
    holiday_calendar: Option<StaticHolidayCalendar>,
}

impl RuleConfig {
    /// Creates a new RuleConfig from its component parts.
    pub fn new(
        metadata: RuleMetadata,
        rule: WorkingTimeRule,
        holiday_calendar: Option<StaticHolidayCalendar>,
    ) -> Self {
        Self {
            metadata,
            rule,
            holiday_calendar,
        }
    }

    /// Returns the rule metadata.
    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    /// Returns the rule parameters.
    pub fn rule(&self) -> &WorkingTimeRule {
        &self.rule
    }

    /// Returns the holiday calendars, if any were configured.
    pub fn holiday_calendar(&self) -> Option<&StaticHolidayCalendar> {
        self.holiday_calendar.as_ref()
    }
}
