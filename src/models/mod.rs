//! Core data models for the Working Time Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compliance_result;
mod period;
mod time_entry;
mod worker;

pub use compliance_result::ComplianceResult;
pub use period::{HolidayGroupId, Period, PublicHoliday};
pub use time_entry::{SECONDS_PER_HOUR, TimeEntry};
pub use worker::Worker;
