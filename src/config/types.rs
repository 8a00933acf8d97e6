//! Configuration types for attendance generation and payroll.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. Every policy has a `Default`
//! carrying the values the payroll page has always used.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the company the engine is configured for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyMetadata {
    /// The company's display name.
    pub name: String,
    /// ISO currency code salaries are expressed in.
    pub currency: String,
    /// The version or effective date of this policy set.
    pub version: String,
}

impl Default for CompanyMetadata {
    fn default() -> Self {
        Self {
            name: "OK BOZ".to_string(),
            currency: "INR".to_string(),
            version: "2025-11-01".to_string(),
        }
    }
}

/// Where the generator's uniform draws come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Reproducible draws keyed by employee identifier and date.
    #[default]
    Seeded,
    /// Fresh thread-local randomness on every call.
    Ambient,
}

/// Rules for generating a month of attendance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendancePolicy {
    /// Days of the month that are always marked absent.
    pub mock_absence_days: Vec<u32>,
    /// A draw above this value becomes paid leave.
    pub paid_leave_threshold: f64,
    /// A draw above this value (but not above the paid-leave threshold)
    /// becomes a half day.
    pub half_day_threshold: f64,
    /// Probability that a present day is marked late.
    pub late_probability: f64,
    /// Display check-in time for present days.
    pub check_in: String,
    /// Display check-out time for present days.
    pub check_out: String,
    /// Source of uniform draws.
    #[serde(default)]
    pub draw_mode: DrawMode,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            mock_absence_days: vec![1, 14, 19],
            paid_leave_threshold: 0.95,
            half_day_threshold: 0.9,
            late_probability: 0.4,
            check_in: "09:30 AM".to_string(),
            check_out: "06:30 PM".to_string(),
            draw_mode: DrawMode::Seeded,
        }
    }
}

impl AttendancePolicy {
    /// Checks that the thresholds describe valid probabilities.
    pub fn validate(&self) -> EngineResult<()> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.paid_leave_threshold)
            || !in_unit(self.half_day_threshold)
            || !in_unit(self.late_probability)
        {
            return Err(EngineError::InvalidPolicy {
                message: "attendance thresholds and late probability must lie in [0, 1]"
                    .to_string(),
            });
        }
        if self.half_day_threshold > self.paid_leave_threshold {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "half_day_threshold {} exceeds paid_leave_threshold {}",
                    self.half_day_threshold, self.paid_leave_threshold
                ),
            });
        }
        Ok(())
    }
}

/// Moduli for the per-employee variation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VariationPolicy {
    /// Present days whose `(index + seed)` is a multiple of this become absent.
    pub absent_modulus: u32,
    /// Present days whose `(index + seed)` is a multiple of this become half days.
    pub half_day_modulus: u32,
}

impl Default for VariationPolicy {
    fn default() -> Self {
        Self {
            absent_modulus: 15,
            half_day_modulus: 7,
        }
    }
}

impl VariationPolicy {
    /// Checks that neither modulus is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.absent_modulus == 0 || self.half_day_modulus == 0 {
            return Err(EngineError::InvalidPolicy {
                message: "variation moduli must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// How gross earnings are split into salary components.
///
/// The three fractions must sum to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SalarySplitPolicy {
    /// Fraction of gross paid as basic salary.
    pub basic: Decimal,
    /// Fraction of gross paid as house rent allowance.
    pub hra: Decimal,
    /// Fraction of gross paid as special allowance.
    pub special_allowance: Decimal,
}

impl Default for SalarySplitPolicy {
    fn default() -> Self {
        Self {
            basic: Decimal::new(50, 2),
            hra: Decimal::new(30, 2),
            special_allowance: Decimal::new(20, 2),
        }
    }
}

impl SalarySplitPolicy {
    /// Checks that every fraction is non-negative and that they sum to one.
    pub fn validate(&self) -> EngineResult<()> {
        let parts = [self.basic, self.hra, self.special_allowance];
        if parts.iter().any(|p| p.is_sign_negative()) {
            return Err(EngineError::InvalidPolicy {
                message: "salary split fractions must not be negative".to_string(),
            });
        }
        let total: Decimal = parts.iter().sum();
        if total != Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                message: format!("salary split sums to {}, expected 1", total.normalize()),
            });
        }
        Ok(())
    }
}

/// Rules for reducing attendance to a salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayrollPolicy {
    /// The fixed divisor applied to the monthly salary, independent of the
    /// calendar length of the month.
    pub days_in_period: u32,
    /// The earnings split.
    pub split: SalarySplitPolicy,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            days_in_period: 30,
            split: SalarySplitPolicy::default(),
        }
    }
}

impl PayrollPolicy {
    /// Checks the divisor and the split.
    pub fn validate(&self) -> EngineResult<()> {
        if self.days_in_period == 0 {
            return Err(EngineError::InvalidPolicy {
                message: "days_in_period must be greater than zero".to_string(),
            });
        }
        self.split.validate()
    }
}

/// Structure of `attendance.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfigFile {
    /// Generator rules.
    pub attendance: AttendancePolicy,
    /// Variation layer moduli.
    #[serde(default)]
    pub variation: VariationPolicy,
}

/// Structure of `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfigFile {
    /// Payroll rules.
    pub payroll: PayrollPolicy,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    metadata: CompanyMetadata,
    attendance: AttendancePolicy,
    variation: VariationPolicy,
    payroll: PayrollPolicy,
}

impl EngineConfig {
    /// Creates a configuration from its parts, validating each policy.
    pub fn new(
        metadata: CompanyMetadata,
        attendance: AttendancePolicy,
        variation: VariationPolicy,
        payroll: PayrollPolicy,
    ) -> EngineResult<Self> {
        attendance.validate()?;
        variation.validate()?;
        payroll.validate()?;
        Ok(Self {
            metadata,
            attendance,
            variation,
            payroll,
        })
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the attendance generation policy.
    pub fn attendance(&self) -> &AttendancePolicy {
        &self.attendance
    }

    /// Returns the variation policy.
    pub fn variation(&self) -> &VariationPolicy {
        &self.variation
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        &self.payroll
    }
}
