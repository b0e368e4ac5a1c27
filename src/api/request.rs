//! Request types for the Working Time Engine API.
//!
//! This module defines the JSON request structures for the `/compliance/check` and
//! `/compliance/report` endpoints.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::{HolidayGroupId, TimeEntry, Worker};
use crate::report::{InMemoryEntrySource, ReportQuery};

/// Request body for the `/compliance/check` endpoint.
///
/// Contains the entries of a single worker and the period to evaluate them over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The worker's time entries.
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    /// The holiday calendar to apply, if any.
    #[serde(default)]
    pub holiday_group: Option<HolidayGroupId>,
    /// The start of the period (inclusive).
    pub period_start: DateTime<FixedOffset>,
    /// The end of the period (inclusive).
    pub period_end: DateTime<FixedOffset>,
}

/// A worker and the time entries recorded for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerTimesheet {
    /// The worker.
    #[serde(flatten)]
    pub worker: Worker,
    /// The worker's time entries.
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

/// Request body for the `/compliance/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The workers to report on, with their entries.
    pub workers: Vec<WorkerTimesheet>,
    /// Selection, search, sort and paging options.
    #[serde(default)]
    pub query: ReportQuery,
    /// The instant the reference periods end at; the current time when omitted.
    #[serde(default)]
    pub now: Option<DateTime<FixedOffset>>,
}

impl ReportRequest {
    /// Splits the timesheets into the workers and an entry source holding their entries.
    pub fn into_workers_and_source(self) -> (Vec<Worker>, InMemoryEntrySource) {
        let mut source = InMemoryEntrySource::new();
        let workers = self
            .workers
            .into_iter()
            .map(|timesheet| {
                source.insert(timesheet.worker.id.clone(), timesheet.entries);
                timesheet.worker
            })
            .collect();

        (workers, source)
    }
}
