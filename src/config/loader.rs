//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading working-time rule
//! configurations from YAML files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::compliance::{ComplianceEngine, StaticHolidayCalendar};
use crate::error::{EngineError, EngineResult};

use super::types::{HolidayGroupFile, RuleConfig, RuleMetadata, RuleFile, WorkingTimeRule};

/// Loads and provides access to rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/arbzg/
/// ├── rule.yaml        # Rule metadata and limits
/// └── holidays/        # Optional, one file per holiday group
///     ├── de.yaml
///     └── de-by.yaml
/// ```
///
/// Without a `holidays/` directory the engine runs without holiday data and every
/// day except the non-working weekday counts as a working day.
///
/// # Example
///
/// ```no_run
/// use working_time_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/arbzg").unwrap();
/// println!("Loaded rule: {}", loader.metadata().name);
///
/// let engine = loader.engine();
/// assert!(engine.has_holiday_lookup());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RuleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `rule.yaml` is missing, or if any file contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use working_time_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/arbzg")?;
    /// # Ok::<(), working_time_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rule_file = Self::load_yaml::<RuleFile>(&path.join("rule.yaml"))?;
        let holiday_calendar = Self::load_holidays(&path.join("holidays"))?;

        info!(
            rule = %rule_file.rule.code,
            holiday_groups = holiday_calendar.as_ref().map_or(0, StaticHolidayCalendar::group_count),
            "Loaded working time configuration"
        );

        let config = RuleConfig::new(rule_file.rule, rule_file.limits, holiday_calendar);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday group files from the holidays directory.
    ///
    /// Returns `None` when the directory does not exist or holds no group files.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Option<StaticHolidayCalendar>> {
        if !holidays_dir.exists() {
            return Ok(None);
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Ok(None);
        }

        let mut calendar = StaticHolidayCalendar::new();
        for path in paths {
            let group_file = Self::load_yaml::<HolidayGroupFile>(&path)?;
            debug!(
                group = %group_file.group,
                name = %group_file.name,
                holidays = group_file.holidays.len(),
                "Loaded holiday group"
            );
            calendar.set_group_name(group_file.group.clone(), group_file.name);
            calendar.insert_group(group_file.group, group_file.holidays);
        }

        Ok(Some(calendar))
    }

    /// Returns the underlying rule configuration.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Returns the rule metadata.
    pub fn metadata(&self) -> &RuleMetadata {
        self.config.metadata()
    }

    /// Returns the rule parameters.
    pub fn rule(&self) -> &WorkingTimeRule {
        self.config.rule()
    }

    /// Builds a compliance engine for the loaded rule.
    ///
    /// The configured holiday calendars are wired in as the engine's holiday lookup.
    pub fn engine(&self) -> ComplianceEngine {
        let engine = ComplianceEngine::new(self.config.rule().clone());

        match self.config.holiday_calendar() {
            Some(calendar) => engine.with_holiday_lookup(Arc::new(calendar.clone())),
            None => engine,
        }
    }
}
