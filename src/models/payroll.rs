//! Payroll models.
//!
//! [`PayrollBreakdown`] is the pure arithmetic output of the payroll reducer.
//! [`PayrollEntry`] is the row a payroll page edits: it starts from a
//! breakdown and then carries caller-owned state (bonus, deductions, status).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendancePeriod;

/// Whether a payroll entry has been paid out. Always caller-assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollStatus {
    /// Salary has been disbursed.
    Paid,
    /// Salary has not yet been disbursed.
    #[default]
    Pending,
}

/// The arithmetic result of reducing a month of attendance against a salary.
///
/// `basic`, `hra` and `special_allowance` are each rounded independently from
/// `gross_earned`, so their sum may differ from it by one or two units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Days counted toward salary (0.5 granularity).
    pub payable_days: Decimal,
    /// The fixed number of days the monthly salary is divided by.
    pub total_days: u32,
    /// Monthly salary divided by `total_days`, unrounded.
    pub per_day_salary: Decimal,
    /// Pro-rated salary for the payable days, rounded to whole units.
    pub gross_earned: Decimal,
    /// Basic salary component.
    pub basic: Decimal,
    /// House rent allowance component.
    pub hra: Decimal,
    /// Special allowance component.
    pub special_allowance: Decimal,
    /// Reported allowances (`hra + special_allowance`).
    pub allowances: Decimal,
    /// Bonus (zero unless set by the caller).
    pub bonus: Decimal,
    /// Deductions (zero: there is no automatic deduction policy).
    pub deductions: Decimal,
    /// `basic + allowances + bonus - deductions`.
    pub net_pay: Decimal,
}

/// A payroll row for one employee.
///
/// # Example
///
/// ```
/// use okboz_payroll::models::{PayrollEntry, PayrollStatus};
/// use rust_decimal::Decimal;
///
/// let entry = PayrollEntry {
///     employee_id: "E001".to_string(),
///     payable_days: Decimal::new(30, 0),
///     total_days: 30,
///     basic: Decimal::new(15000, 0),
///     allowances: Decimal::new(9000, 0),
///     bonus: Decimal::ZERO,
///     deductions: Decimal::ZERO,
///     status: PayrollStatus::Pending,
/// };
///
/// let adjusted = entry.with_bonus(Decimal::new(1000, 0)).with_deductions(Decimal::new(500, 0));
/// assert_eq!(adjusted.net_pay(), Decimal::new(24500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// Days counted toward salary.
    pub payable_days: Decimal,
    /// The fixed number of days in the pay period.
    pub total_days: u32,
    /// Basic salary.
    pub basic: Decimal,
    /// HRA plus special allowance.
    pub allowances: Decimal,
    /// Manually entered bonus.
    #[serde(default)]
    pub bonus: Decimal,
    /// Manually entered deductions.
    #[serde(default)]
    pub deductions: Decimal,
    /// Caller-assigned payout status.
    #[serde(default)]
    pub status: PayrollStatus,
}

impl PayrollEntry {
    /// Creates an entry from a computed breakdown.
    pub fn from_breakdown(
        employee_id: impl Into<String>,
        breakdown: &PayrollBreakdown,
        status: PayrollStatus,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            payable_days: breakdown.payable_days,
            total_days: breakdown.total_days,
            basic: breakdown.basic,
            allowances: breakdown.allowances,
            bonus: breakdown.bonus,
            deductions: breakdown.deductions,
            status,
        }
    }

    /// `basic + allowances + bonus - deductions`.
    pub fn net_pay(&self) -> Decimal {
        self.basic + self.allowances + self.bonus - self.deductions
    }

    /// Returns the entry with a manually entered bonus.
    pub fn with_bonus(mut self, bonus: Decimal) -> Self {
        self.bonus = bonus;
        self
    }

    /// Returns the entry with manually entered deductions.
    pub fn with_deductions(mut self, deductions: Decimal) -> Self {
        self.deductions = deductions;
        self
    }

    /// Returns the entry with a new payout status.
    pub fn with_status(mut self, status: PayrollStatus) -> Self {
        self.status = status;
        self
    }
}

/// A past salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySlip {
    /// The month the slip covers.
    pub period: AttendancePeriod,
    /// The amount paid for the month.
    pub amount: Decimal,
    /// Payout status.
    pub status: PayrollStatus,
    /// The date the salary was paid out.
    pub payout_date: NaiveDate,
}
