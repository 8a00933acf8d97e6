//! Configuration loading and management for the payroll engine.
//!
//! This module loads the attendance and payroll policies from YAML files. All
//! policies fall back to built-in defaults when used without a configuration
//! directory.
//!
//! # Example
//!
//! ```no_run
//! use okboz_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/okboz").unwrap();
//! println!("Days in period: {}", config.payroll().days_in_period);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendancePolicy, CompanyMetadata, DrawMode, EngineConfig, PayrollPolicy, SalarySplitPolicy,
    VariationPolicy,
};
