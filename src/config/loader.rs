//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AttendanceConfigFile, AttendancePolicy, CompanyMetadata, EngineConfig, PayrollConfigFile,
    PayrollPolicy, VariationPolicy,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/okboz/
/// ├── company.yaml     # Company metadata
/// ├── attendance.yaml  # Generator rules and variation moduli
/// └── payroll.yaml     # Days in period and salary split
/// ```
///
/// # Example
///
/// ```no_run
/// use okboz_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/okboz").unwrap();
/// println!("Loaded policy for: {}", loader.company().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// describes an inconsistent policy.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use okboz_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/okboz")?;
    /// # Ok::<(), okboz_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let attendance = Self::load_yaml::<AttendanceConfigFile>(&path.join("attendance.yaml"))?;
        let payroll = Self::load_yaml::<PayrollConfigFile>(&path.join("payroll.yaml"))?;

        let config = EngineConfig::new(
            metadata,
            attendance.attendance,
            attendance.variation,
            payroll.payroll,
        )?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the attendance generation policy.
    pub fn attendance(&self) -> &AttendancePolicy {
        self.config.attendance()
    }

    /// Returns the variation policy.
    pub fn variation(&self) -> &VariationPolicy {
        self.config.variation()
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        self.config.payroll()
    }
}
