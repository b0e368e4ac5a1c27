//! Configuration loading and management for the Working Time Engine.
//!
//! This module provides functionality to load the working-time rule from YAML files,
//! including rule metadata, limits, reference periods and public holiday calendars.
//!
//! # Example
//!
//! ```no_run
//! use working_time_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/arbzg").unwrap();
//! println!("Loaded rule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_REFERENCE_MONTHS, DEFAULT_REFERENCE_WEEKS, HolidayGroupFile, ReferencePeriods,
    RuleConfig, RuleFile, RuleMetadata, WorkingTimeRule,
};
