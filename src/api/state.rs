//! Application state for the Working Time Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::compliance::ComplianceEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the loaded rule
/// configuration and the compliance engine built from it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule configuration.
    config: Arc<ConfigLoader>,
    /// The engine evaluating requests.
    engine: Arc<ComplianceEngine>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let engine = config.engine();
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the compliance engine.
    pub fn engine(&self) -> &ComplianceEngine {
        &self.engine
    }
}
