//! Time entry sources.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::error::EngineResult;
use crate::models::{Period, TimeEntry, Worker};

/// A source of recorded time entries.
pub trait TimeEntrySource {
    /// Returns the entries of `worker` that fall within `period`.
    fn time_entries(&self, worker: &Worker, period: &Period) -> EngineResult<Vec<TimeEntry>>;
}

/// Checks if an entry belongs to `period`.
///
/// An entry with a start timestamp belongs to the period when the timestamp lies
/// within it; an entry with only a date when the date is one of the period's days.
pub fn entry_in_period(entry: &TimeEntry, period: &Period) -> bool {
    match (entry.begin, entry.date) {
        (Some(begin), _) => period.contains_instant(begin),
        (None, Some(date)) => period.contains_date(date),
        (None, None) => false,
    }
}

/// Keeps the entries starting at or after `start`.
///
/// Date-only entries are kept when their date is on or after the date of `start`.
pub fn entries_since(entries: &[TimeEntry], start: DateTime<FixedOffset>) -> Vec<TimeEntry> {
    entries
        .iter()
        .filter(|entry| match (entry.begin, entry.date) {
            (Some(begin), _) => begin >= start,
            (None, Some(date)) => date >= start.date_naive(),
            (None, None) => false,
        })
        .cloned()
        .collect()
}

/// Time entries held in memory, keyed by worker id.
///
/// # Example
///
/// ```
/// use working_time_engine::models::{Period, TimeEntry, Worker};
/// use working_time_engine::report::{InMemoryEntrySource, TimeEntrySource};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let source = InMemoryEntrySource::new().with_entries("w_001", vec![TimeEntry::on_date(day, 3600)]);
///
/// let period = Period::for_dates(day, day).unwrap();
/// let entries = source.time_entries(&Worker::new("w_001", "Anna Schmidt"), &period).unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntrySource {
    entries: HashMap<String, Vec<TimeEntry>>,
}

impl InMemoryEntrySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds entries for a worker, returning the source.
    pub fn with_entries(mut self, worker_id: impl Into<String>, entries: Vec<TimeEntry>) -> Self {
        self.insert(worker_id, entries);
        self
    }

    /// Adds entries for a worker.
    pub fn insert(&mut self, worker_id: impl Into<String>, entries: Vec<TimeEntry>) {
        self.entries.entry(worker_id.into()).or_default().extend(entries);
    }
}

impl TimeEntrySource for InMemoryEntrySource {
    fn time_entries(&self, worker: &Worker, period: &Period) -> EngineResult<Vec<TimeEntry>> {
        Ok(self
            .entries
            .get(&worker.id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry_in_period(entry, period))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
