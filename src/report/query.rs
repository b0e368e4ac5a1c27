//! Report query model.
//!
//! A [`ReportQuery`] carries the worker selection, the optional custom date range,
//! the search term and the sorting and paging options of a compliance report.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Period;

/// Default number of rows per report page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// The columns a report can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportColumn {
    /// The worker's display name, compared case-insensitively.
    #[default]
    #[serde(rename = "worker")]
    Worker,
    /// The average over the calendar-month reference period.
    #[serde(rename = "average_6_months")]
    Average6Months,
    /// The average over the week reference period.
    #[serde(rename = "average_24_weeks")]
    Average24Weeks,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// Selection, search, sort and paging options for a compliance report.
///
/// # Example
///
/// ```
/// use working_time_engine::report::{ReportColumn, ReportQuery, SortOrder};
///
/// let query: ReportQuery = serde_json::from_str(r#"{ "order_by": "average_24_weeks", "order": "desc" }"#).unwrap();
/// assert_eq!(query.order_by, ReportColumn::Average24Weeks);
/// assert_eq!(query.order, SortOrder::Desc);
/// assert_eq!(query.page, 1);
/// assert!(query.workers.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportQuery {
    /// Worker ids to include; all workers when empty.
    pub workers: Vec<String>,
    /// Start of a custom date range.
    pub begin: Option<DateTime<FixedOffset>>,
    /// End of a custom date range.
    pub end: Option<DateTime<FixedOffset>>,
    /// Whitespace-separated search terms.
    pub search: Option<String>,
    /// The column to order rows by.
    pub order_by: ReportColumn,
    /// The sort direction.
    pub order: SortOrder,
    /// The page to return, starting at 1.
    pub page: usize,
    /// The number of rows per page.
    pub page_size: usize,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            workers: Vec::new(),
            begin: None,
            end: None,
            search: None,
            order_by: ReportColumn::default(),
            order: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReportQuery {
    /// Checks the paging options.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuery`] if `page` or `page_size` is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.page == 0 {
            return Err(EngineError::InvalidQuery {
                field: "page".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(EngineError::InvalidQuery {
                field: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the custom period when both `begin` and `end` are set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `begin` is after `end`.
    pub fn custom_period(&self) -> EngineResult<Option<Period>> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Period::new(begin, end).map(Some),
            _ => Ok(None),
        }
    }

    /// Returns the lowercased search terms, empty when there is no search.
    pub fn search_terms(&self) -> Vec<String> {
        self.search
            .as_deref()
            .map(|search| search.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default()
    }
}
