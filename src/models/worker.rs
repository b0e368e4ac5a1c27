//! Worker model.
//!
//! This module defines the [`Worker`] struct for representing the people whose
//! time entries are checked in a compliance report.

use serde::{Deserialize, Serialize};

use super::HolidayGroupId;

/// Represents a worker subject to the working-time rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: String,
    /// The name shown in reports.
    pub display_name: String,
    /// The holiday calendar that applies to the worker, if any.
    #[serde(default)]
    pub holiday_group: Option<HolidayGroupId>,
}

impl Worker {
    /// Creates a worker without a holiday group.
    ///
    /// # Examples
    ///
    /// ```
    /// use working_time_engine::models::{HolidayGroupId, Worker};
    ///
    /// let worker = Worker::new("w_001", "Anna Schmidt").with_holiday_group("de-by");
    /// assert_eq!(worker.holiday_group, Some(HolidayGroupId::new("de-by")));
    /// ```
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            holiday_group: None,
        }
    }

    /// Assigns a holiday group to the worker.
    pub fn with_holiday_group(mut self, group: impl Into<HolidayGroupId>) -> Self {
        self.holiday_group = Some(group.into());
        self
    }
}
