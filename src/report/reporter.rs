//! Compliance report building.
//!
//! The [`ComplianceReporter`] evaluates a set of workers and turns the results into
//! a searchable, sortable and paginated [`ReportPage`].

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, Months, TimeDelta};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::compliance::ComplianceEngine;
use crate::error::{EngineError, EngineResult};
use crate::models::{Period, Worker};

use super::query::{ReportColumn, ReportQuery, SortOrder};
use super::source::{TimeEntrySource, entries_since};

/// Decimal places of averages in a report.
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

/// One worker's line in a compliance report.
///
/// A report over a custom range fills only `average_daterange`; a report over the
/// reference periods fills the two reference averages and `compliance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The worker the row belongs to.
    pub worker: Worker,
    /// Average daily hours over the custom range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_daterange: Option<Decimal>,
    /// Average daily hours over the calendar-month reference period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_6_months: Option<Decimal>,
    /// Average daily hours over the week reference period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_24_weeks: Option<Decimal>,
    /// Whether both reference periods are compliant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<bool>,
}

impl ReportRow {
    fn averages(&self) -> [Option<Decimal>; 3] {
        [
            self.average_daterange,
            self.average_6_months,
            self.average_24_weeks,
        ]
    }

    /// Checks if the row matches a single lowercased search term.
    fn matches(&self, term: &str) -> bool {
        self.worker.display_name.to_lowercase().contains(term)
            || self
                .averages()
                .iter()
                .flatten()
                .any(|average| average.to_string().contains(term))
    }

    fn compare(&self, other: &Self, column: ReportColumn) -> Ordering {
        match column {
            ReportColumn::Worker => self
                .worker
                .display_name
                .to_lowercase()
                .cmp(&other.worker.display_name.to_lowercase()),
            ReportColumn::Average6Months => self.average_6_months.cmp(&other.average_6_months),
            ReportColumn::Average24Weeks => self.average_24_weeks.cmp(&other.average_24_weeks),
        }
    }
}

/// One page of a compliance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    /// The rows of the requested page.
    pub rows: Vec<ReportRow>,
    /// The page number, starting at 1.
    pub page: usize,
    /// The maximum number of rows per page.
    pub page_size: usize,
    /// The number of rows across all pages, after searching.
    pub total_rows: usize,
    /// The number of pages.
    pub total_pages: usize,
}

/// Rounds an average for presentation, half away from zero.
///
/// # Example
///
/// ```
/// use working_time_engine::report::round_average;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_average(46.0 / 6.0).unwrap(), Decimal::from_str("7.67").unwrap());
/// assert_eq!(round_average(0.125).unwrap(), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_average(average: f64) -> EngineResult<Decimal> {
    let value = Decimal::try_from(average).map_err(|e| EngineError::CalculationError {
        message: format!("Average {} cannot be represented: {}", average, e),
    })?;

    Ok(value.round_dp_with_strategy(
        AVERAGE_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    ))
}

/// Builds compliance reports for groups of workers.
///
/// # Example
///
/// ```
/// use working_time_engine::compliance::ComplianceEngine;
/// use working_time_engine::models::{TimeEntry, Worker};
/// use working_time_engine::report::{ComplianceReporter, InMemoryEntrySource, ReportQuery};
/// use chrono::{DateTime, NaiveDate};
///
/// let engine = ComplianceEngine::default();
/// let day = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
/// let source = InMemoryEntrySource::new().with_entries("w_001", vec![TimeEntry::on_date(day, 8 * 3600)]);
/// let workers = vec![Worker::new("w_001", "Anna Schmidt")];
///
/// let now = DateTime::parse_from_rfc3339("2026-10-16T12:00:00+02:00").unwrap();
/// let page = ComplianceReporter::new(&engine, &source)
///     .build(&workers, &ReportQuery::default(), now)
///     .unwrap();
///
/// assert_eq!(page.total_rows, 1);
/// assert_eq!(page.rows[0].compliance, Some(true));
/// ```
pub struct ComplianceReporter<'a, S: TimeEntrySource + ?Sized> {
    engine: &'a ComplianceEngine,
    source: &'a S,
}

impl<'a, S: TimeEntrySource + ?Sized> ComplianceReporter<'a, S> {
    /// Creates a reporter evaluating entries from `source` with `engine`.
    pub fn new(engine: &'a ComplianceEngine, source: &'a S) -> Self {
        Self { engine, source }
    }

    /// Builds a report page.
    ///
    /// Without a custom range in `query`, the reference periods are counted back
    /// from `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is invalid, if the custom range is reversed, if
    /// a reference period cannot be computed, or if the entry source fails.
    pub fn build(
        &self,
        workers: &[Worker],
        query: &ReportQuery,
        now: DateTime<FixedOffset>,
    ) -> EngineResult<ReportPage> {
        query.validate()?;
        let custom_period = query.custom_period()?;

        let selected: Vec<&Worker> = if query.workers.is_empty() {
            workers.iter().collect()
        } else {
            workers
                .iter()
                .filter(|worker| query.workers.contains(&worker.id))
                .collect()
        };

        let mut rows = Vec::with_capacity(selected.len());
        match custom_period {
            Some(period) => {
                for worker in &selected {
                    rows.push(self.custom_range_row(worker, &period)?);
                }
            }
            None => {
                let (months_period, weeks_period) = self.reference_periods(now)?;
                for worker in &selected {
                    rows.push(self.reference_periods_row(worker, &months_period, &weeks_period)?);
                }
            }
        }

        let terms = query.search_terms();
        rows.retain(|row| terms.iter().all(|term| row.matches(term)));

        rows.sort_by(|a, b| {
            let ordering = a.compare(b, query.order_by);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let page = paginate(rows, query.page, query.page_size);

        info!(
            workers = selected.len(),
            custom_range = custom_period.is_some(),
            total_rows = page.total_rows,
            page = page.page,
            "Built compliance report"
        );

        Ok(page)
    }

    /// Computes the calendar-month and week reference periods ending at `now`.
    pub fn reference_periods(&self, now: DateTime<FixedOffset>) -> EngineResult<(Period, Period)> {
        let references = self.engine.rule().reference_periods;

        // Day of month is clamped to the target month's last day (31 Aug -> 28 Feb)
        let months_start = now
            .checked_sub_months(Months::new(references.months))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("Cannot go back {} months from {}", references.months, now),
            })?;
        let weeks_start = TimeDelta::try_weeks(i64::from(references.weeks))
            .and_then(|weeks| now.checked_sub_signed(weeks))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("Cannot go back {} weeks from {}", references.weeks, now),
            })?;

        Ok((Period::new(months_start, now)?, Period::new(weeks_start, now)?))
    }

    fn custom_range_row(&self, worker: &Worker, period: &Period) -> EngineResult<ReportRow> {
        let entries = self.source.time_entries(worker, period)?;
        let result = self
            .engine
            .evaluate_period(&entries, worker.holiday_group.as_ref(), period);

        Ok(ReportRow {
            worker: worker.clone(),
            average_daterange: Some(round_average(result.average)?),
            average_6_months: None,
            average_24_weeks: None,
            compliance: None,
        })
    }

    fn reference_periods_row(
        &self,
        worker: &Worker,
        months_period: &Period,
        weeks_period: &Period,
    ) -> EngineResult<ReportRow> {
        // One fetch covers both windows
        let fetch_start = months_period.start().min(weeks_period.start());
        let fetch_period = Period::new(fetch_start, months_period.end())?;
        let entries = self.source.time_entries(worker, &fetch_period)?;

        let group = worker.holiday_group.as_ref();
        let months_entries = entries_since(&entries, months_period.start());
        let weeks_entries = entries_since(&entries, weeks_period.start());

        let months = self
            .engine
            .evaluate_period(&months_entries, group, months_period);
        let weeks = self.engine.evaluate_period(&weeks_entries, group, weeks_period);

        Ok(ReportRow {
            worker: worker.clone(),
            average_daterange: None,
            average_6_months: Some(round_average(months.average)?),
            average_24_weeks: Some(round_average(weeks.average)?),
            compliance: Some(months.compliance && weeks.compliance),
        })
    }
}

fn paginate(rows: Vec<ReportRow>, page: usize, page_size: usize) -> ReportPage {
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size);
    let skip = (page - 1).saturating_mul(page_size);

    ReportPage {
        rows: rows.into_iter().skip(skip).take(page_size).collect(),
        page,
        page_size,
        total_rows,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::StaticHolidayCalendar;
    use crate::models::{PublicHoliday, TimeEntry};
    use crate::report::InMemoryEntrySource;
    use chrono::NaiveDate;
    use std::str::FromStr;
    use std::sync::Arc;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn now() -> DateTime<FixedOffset> {
        instant("2026-10-16T12:00:00+02:00")
    }

    fn days(from: &str, to: &str, hours: u64) -> Vec<TimeEntry> {
        make_date(from)
            .iter_days()
            .take_while(|day| *day <= make_date(to))
            .map(|day| TimeEntry::on_date(day, hours * 3600))
            .collect()
    }

    fn workers() -> Vec<Worker> {
        vec![
            Worker::new("w_001", "anna Schmidt"),
            Worker::new("w_002", "Jonas Weber"),
            Worker::new("w_003", "Lea Braun"),
        ]
    }

    fn custom_query(begin: &str, end: &str) -> ReportQuery {
        ReportQuery {
            begin: Some(instant(begin)),
            end: Some(instant(end)),
            ..ReportQuery::default()
        }
    }

    /// Monday 2026-01-05 through Sunday 2026-01-11 with 46 hours for w_001
    fn week_source() -> InMemoryEntrySource {
        let mut entries = days("2026-01-05", "2026-01-09", 8);
        entries.push(TimeEntry::on_date(make_date("2026-01-10"), 6 * 3600));
        entries.push(TimeEntry::on_date(make_date("2026-01-11"), 5 * 3600));

        InMemoryEntrySource::new()
            .with_entries("w_001", entries)
            .with_entries("w_002", days("2026-01-05", "2026-01-10", 9))
    }

    /// RP-001: custom range rows carry only the range average
    #[test]
    fn test_rp_001_custom_range_row() {
        let engine = ComplianceEngine::default();
        let source = week_source();
        let query = custom_query("2026-01-05T00:00:00+01:00", "2026-01-11T23:59:59+01:00");

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers(), &query, now())
            .unwrap();

        assert_eq!(page.total_rows, 3);
        let anna = &page.rows[0];
        assert_eq!(anna.worker.id, "w_001");
        assert_eq!(anna.average_daterange, Some(dec("7.67")));
        assert_eq!(anna.average_6_months, None);
        assert_eq!(anna.compliance, None);

        // Worker without entries still gets a row
        let lea = &page.rows[2];
        assert_eq!(lea.worker.id, "w_003");
        assert_eq!(lea.average_daterange, Some(Decimal::ZERO));
    }

    /// RP-002: reference periods fill both averages and the compliance flag
    #[test]
    fn test_rp_002_reference_periods_row() {
        let engine = ComplianceEngine::default();
        // Two weeks of work for Anna, ten hours on every day of both windows for Jonas
        let source = InMemoryEntrySource::new()
            .with_entries("w_001", days("2026-09-07", "2026-09-19", 8))
            .with_entries("w_002", days("2026-04-16", "2026-10-16", 10));

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers(), &ReportQuery::default(), now())
            .unwrap();

        let anna = &page.rows[0];
        assert_eq!(anna.average_daterange, None);
        assert!(anna.average_6_months.is_some());
        assert!(anna.average_24_weeks.unwrap() > anna.average_6_months.unwrap());
        assert_eq!(anna.compliance, Some(true));

        let jonas = page.rows.iter().find(|row| row.worker.id == "w_002").unwrap();
        assert_eq!(jonas.compliance, Some(false));
    }

    /// RP-003: entries before the week window only count for the month window
    #[test]
    fn test_rp_003_week_window_excludes_older_entries() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new().with_entries(
            "w_001",
            vec![TimeEntry::starting_at(
                instant("2026-05-01T08:00:00+02:00"),
                8 * 3600,
            )],
        );
        let query = ReportQuery {
            workers: vec!["w_001".to_string()],
            ..ReportQuery::default()
        };

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers(), &query, now())
            .unwrap();

        assert_eq!(page.rows.len(), 1);
        assert!(page.rows[0].average_6_months.unwrap() > Decimal::ZERO);
        assert_eq!(page.rows[0].average_24_weeks, Some(Decimal::ZERO));
    }

    #[test]
    fn test_reference_period_bounds() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new();
        let reporter = ComplianceReporter::new(&engine, &source);

        let (months, weeks) = reporter.reference_periods(now()).unwrap();

        assert_eq!(months.start(), instant("2026-04-16T12:00:00+02:00"));
        assert_eq!(weeks.start(), instant("2026-05-01T12:00:00+02:00"));
        assert_eq!(months.end(), now());
        assert_eq!(weeks.end(), now());
    }

    #[test]
    fn test_month_arithmetic_clamps_to_month_end() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new();
        let reporter = ComplianceReporter::new(&engine, &source);

        let (months, _) = reporter
            .reference_periods(instant("2026-08-31T10:00:00+02:00"))
            .unwrap();

        assert_eq!(months.start(), instant("2026-02-28T10:00:00+02:00"));

        let (months, _) = reporter
            .reference_periods(instant("2026-03-31T10:00:00+02:00"))
            .unwrap();

        assert_eq!(months.start(), instant("2025-09-30T10:00:00+02:00"));
    }

    #[test]
    fn test_month_end_window_keeps_last_day_of_short_month() {
        let engine = ComplianceEngine::default();
        // 28 Feb lies inside the clamped window; a rolled-over start (3 Mar) would drop it
        let source = InMemoryEntrySource::new().with_entries(
            "w_001",
            vec![TimeEntry::starting_at(
                instant("2026-02-28T12:00:00+01:00"),
                8 * 3600,
            )],
        );
        let query = ReportQuery {
            workers: vec!["w_001".to_string()],
            ..ReportQuery::default()
        };

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers(), &query, instant("2026-08-31T10:00:00+02:00"))
            .unwrap();

        assert_eq!(page.rows.len(), 1);
        assert!(page.rows[0].average_6_months.unwrap() > Decimal::ZERO);
        assert_eq!(page.rows[0].average_24_weeks, Some(Decimal::ZERO));
    }

    #[test]
    fn test_holiday_group_applied_per_worker() {
        let calendar = StaticHolidayCalendar::new().with_group(
            "de-by",
            vec![PublicHoliday {
                date: make_date("2026-01-06"),
                name: "Heilige Drei Könige".to_string(),
            }],
        );
        let engine = ComplianceEngine::default().with_holiday_lookup(Arc::new(calendar));
        let source = InMemoryEntrySource::new()
            .with_entries("w_001", days("2026-01-05", "2026-01-09", 8))
            .with_entries("w_002", days("2026-01-05", "2026-01-09", 8));
        let workers = vec![
            Worker::new("w_001", "Anna Schmidt").with_holiday_group("de-by"),
            Worker::new("w_002", "Jonas Weber"),
        ];
        let query = custom_query("2026-01-05T00:00:00+01:00", "2026-01-09T23:59:59+01:00");

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers, &query, now())
            .unwrap();

        // Holiday removed from the working days, its hours no longer count
        assert_eq!(page.rows[0].average_daterange, Some(dec("8")));
        assert_eq!(page.rows[1].average_daterange, Some(dec("8")));
    }

    #[test]
    fn test_worker_selection() {
        let engine = ComplianceEngine::default();
        let source = week_source();
        let query = ReportQuery {
            workers: vec!["w_002".to_string(), "w_999".to_string()],
            ..custom_query("2026-01-05T00:00:00+01:00", "2026-01-11T23:59:59+01:00")
        };

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers(), &query, now())
            .unwrap();

        assert_eq!(page.total_rows, 1);
        assert_eq!(page.rows[0].worker.id, "w_002");
        assert_eq!(page.rows[0].average_daterange, Some(dec("9")));
    }

    #[test]
    fn test_search_by_name_and_average() {
        let engine = ComplianceEngine::default();
        let source = week_source();
        let reporter = ComplianceReporter::new(&engine, &source);

        let query = ReportQuery {
            search: Some("ANNA".to_string()),
            ..custom_query("2026-01-05T00:00:00+01:00", "2026-01-11T23:59:59+01:00")
        };
        let page = reporter.build(&workers(), &query, now()).unwrap();
        assert_eq!(page.total_rows, 1);
        assert_eq!(page.rows[0].worker.id, "w_001");

        let query = ReportQuery {
            search: Some("7.67".to_string()),
            ..custom_query("2026-01-05T00:00:00+01:00", "2026-01-11T23:59:59+01:00")
        };
        let page = reporter.build(&workers(), &query, now()).unwrap();
        assert_eq!(page.total_rows, 1);

        // Every term must match
        let query = ReportQuery {
            search: Some("anna weber".to_string()),
            ..custom_query("2026-01-05T00:00:00+01:00", "2026-01-11T23:59:59+01:00")
        };
        let page = reporter.build(&workers(), &query, now()).unwrap();
        assert_eq!(page.total_rows, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_sort_by_worker_case_insensitive() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new();
        let reporter = ComplianceReporter::new(&engine, &source);

        let page = reporter
            .build(&workers(), &ReportQuery::default(), now())
            .unwrap();
        let names: Vec<&str> = page
            .rows
            .iter()
            .map(|row| row.worker.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["anna Schmidt", "Jonas Weber", "Lea Braun"]);

        let query = ReportQuery {
            order: SortOrder::Desc,
            ..ReportQuery::default()
        };
        let page = reporter.build(&workers(), &query, now()).unwrap();
        assert_eq!(page.rows[0].worker.display_name, "Lea Braun");
    }

    #[test]
    fn test_sort_by_average_desc() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new()
            .with_entries("w_001", days("2026-09-07", "2026-09-11", 8))
            .with_entries("w_002", days("2026-09-07", "2026-09-11", 10));
        let query = ReportQuery {
            order_by: ReportColumn::Average24Weeks,
            order: SortOrder::Desc,
            ..ReportQuery::default()
        };

        let page = ComplianceReporter::new(&engine, &source)
            .build(&workers(), &query, now())
            .unwrap();

        let ids: Vec<&str> = page.rows.iter().map(|row| row.worker.id.as_str()).collect();
        assert_eq!(ids, vec!["w_002", "w_001", "w_003"]);
    }

    #[test]
    fn test_pagination() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new();
        let reporter = ComplianceReporter::new(&engine, &source);

        let query = ReportQuery {
            page: 2,
            page_size: 2,
            ..ReportQuery::default()
        };
        let page = reporter.build(&workers(), &query, now()).unwrap();
        assert_eq!(page.total_rows, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].worker.display_name, "Lea Braun");

        let query = ReportQuery {
            page: 5,
            page_size: 2,
            ..ReportQuery::default()
        };
        let page = reporter.build(&workers(), &query, now()).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.page, 5);
    }

    #[test]
    fn test_invalid_query_rejected() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new();
        let query = ReportQuery {
            page_size: 0,
            ..ReportQuery::default()
        };

        let result = ComplianceReporter::new(&engine, &source).build(&workers(), &query, now());
        assert!(matches!(result, Err(EngineError::InvalidQuery { .. })));
    }

    #[test]
    fn test_reversed_custom_range_rejected() {
        let engine = ComplianceEngine::default();
        let source = InMemoryEntrySource::new();
        let query = custom_query("2026-01-11T00:00:00+01:00", "2026-01-05T00:00:00+01:00");

        let result = ComplianceReporter::new(&engine, &source).build(&workers(), &query, now());
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_round_average_half_away_from_zero() {
        assert_eq!(round_average(7.125).unwrap(), dec("7.13"));
        assert_eq!(round_average(9.8).unwrap(), dec("9.8"));
        assert_eq!(round_average(0.0).unwrap(), Decimal::ZERO);
        assert!(matches!(
            round_average(f64::NAN),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_row_serialization_skips_absent_columns() {
        let row = ReportRow {
            worker: Worker::new("w_001", "Anna Schmidt"),
            average_daterange: Some(dec("7.67")),
            average_6_months: None,
            average_24_weeks: None,
            compliance: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("average_daterange").is_some());
        assert!(json.get("average_6_months").is_none());
        assert!(json.get("compliance").is_none());
    }
}
