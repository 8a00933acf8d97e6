//! Request types for the payroll API.
//!
//! Employee records arrive as the staff form stores them: every field may be
//! missing or loosely typed. Conversion into [`Employee`] never fails; bad
//! values degrade the same way the engine degrades them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PayrollEntry};

/// Employee information in a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role label.
    #[serde(default)]
    pub role: String,
    /// Department label.
    #[serde(default)]
    pub department: String,
    /// Monthly salary, as a string or a number.
    #[serde(default)]
    pub salary: SalaryField,
    /// Joining date as `YYYY-MM-DD`. Anything unparseable is ignored.
    #[serde(default, alias = "joiningDate")]
    pub joining_date: Option<String>,
    /// Weekly day off; Sunday when absent.
    #[serde(default, alias = "weekOff")]
    pub week_off: Option<String>,
}

/// A salary as entered: either text or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryField {
    /// String-encoded salary, e.g. `"85000"`.
    Text(String),
    /// Numeric salary, e.g. `85000`.
    Number(serde_json::Number),
}

impl Default for SalaryField {
    fn default() -> Self {
        SalaryField::Text(String::new())
    }
}

impl From<SalaryField> for String {
    fn from(field: SalaryField) -> Self {
        match field {
            SalaryField::Text(text) => text,
            SalaryField::Number(number) => number.to_string(),
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        let defaults = Employee::default();
        Employee {
            id: req.id,
            name: req.name,
            role: req.role,
            department: req.department,
            salary: req.salary.into(),
            joining_date: req
                .joining_date
                .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()),
            week_off: req.week_off.unwrap_or(defaults.week_off),
        }
    }
}

/// Request body for `POST /attendance` and `POST /payroll/breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The employee whose month is derived.
    pub employee: EmployeeRequest,
    /// Calendar year.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// The reference date; the server's local date when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Every employee to pay.
    pub employees: Vec<EmployeeRequest>,
    /// Calendar year.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// The reference date; the server's local date when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Entries from an earlier run whose payout status is carried forward.
    #[serde(default)]
    pub previous: Vec<PayrollEntry>,
}

/// Request body for `POST /salary-history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryHistoryRequest {
    /// The employee whose history is listed.
    pub employee: EmployeeRequest,
    /// Year of the context month.
    pub year: i32,
    /// 1-based context month; history starts the month before.
    pub month: u32,
    /// How many months to list at most.
    #[serde(default = "default_history_months")]
    pub months: usize,
}

fn default_history_months() -> usize {
    6
}
