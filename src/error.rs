//! Error types for the Working Time Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating working-time compliance.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// The main error type for the Working Time Engine.
///
/// Only [`EngineError::InvalidRange`] ever aborts a compliance evaluation. Holiday
/// lookup errors are produced by [`HolidayLookup`](crate::compliance::HolidayLookup)
/// implementations and absorbed by the working-day filter.
///
/// # Example
///
/// ```
/// use working_time_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The period start lies after the period end.
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidRange {
        /// The requested period start.
        start: DateTime<FixedOffset>,
        /// The requested period end.
        end: DateTime<FixedOffset>,
    },

    /// No holiday calendar is known for the requested group.
    #[error("Holiday group not found: {group}")]
    HolidayGroupNotFound {
        /// The group identifier that was not found.
        group: String,
    },

    /// The holiday data source failed to answer.
    #[error("Holiday lookup failed for group '{group}': {message}")]
    HolidayLookupFailed {
        /// The group identifier that was queried.
        group: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A report query contained an unusable value.
    #[error("Invalid query field '{field}': {message}")]
    InvalidQuery {
        /// The query field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
