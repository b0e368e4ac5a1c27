//! Compliance reports over groups of workers.
//!
//! This module evaluates many workers at once, either over a custom date range or
//! over the statutory reference periods, and prepares the results for display.

mod query;
mod reporter;
mod source;

pub use query::{DEFAULT_PAGE_SIZE, ReportColumn, ReportQuery, SortOrder};
pub use reporter::{
    AVERAGE_DECIMAL_PLACES, ComplianceReporter, ReportPage, ReportRow, round_average,
};
pub use source::{InMemoryEntrySource, TimeEntrySource, entries_since, entry_in_period};
