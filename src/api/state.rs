//! Shared application state for the payroll API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// State cloned into every request handler.
///
/// Holds the loaded company, attendance and payroll policies.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
