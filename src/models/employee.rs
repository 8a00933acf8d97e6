//! Employee model and related helpers.
//!
//! The employee record is owned by the staff-management layer; the engine only
//! reads it. Salaries stay string-encoded as they are entered on the staff
//! form and are parsed leniently when payroll needs them.

use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a staff member whose attendance and payroll are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "E001"). May be empty.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role label (e.g., "Sales Manager").
    #[serde(default)]
    pub role: String,
    /// Department label (e.g., "Sales").
    #[serde(default)]
    pub department: String,
    /// Monthly salary as entered on the staff form (e.g., "85000").
    #[serde(default)]
    pub salary: String,
    /// The date the employee joined. `None` means no pre-joining days.
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// The configured weekly day off (e.g., "Sunday").
    #[serde(default = "default_week_off")]
    pub week_off: String,
}

fn default_week_off() -> String {
    "Sunday".to_string()
}

impl Default for Employee {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            role: String::new(),
            department: String::new(),
            salary: String::new(),
            joining_date: None,
            week_off: default_week_off(),
        }
    }
}

impl Employee {
    /// Returns the monthly salary, or zero when none is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use okboz_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
    ///     id: "E001".to_string(),
    ///     name: "Alice Johnson".to_string(),
    ///     role: "Sales Manager".to_string(),
    ///     department: "Sales".to_string(),
    ///     salary: "85000".to_string(),
    ///     joining_date: None,
    ///     week_off: "Sunday".to_string(),
    /// };
    /// assert_eq!(employee.monthly_salary(), Decimal::new(85000, 0));
    ///
    /// employee.salary = "not a number".to_string();
    /// assert_eq!(employee.monthly_salary(), Decimal::ZERO);
    /// ```
    pub fn monthly_salary(&self) -> Decimal {
        parse_salary(&self.salary)
    }

    /// Resolves the configured week-off name to a weekday.
    pub fn week_off_day(&self) -> Option<Weekday> {
        weekday_from_name(&self.week_off)
    }

    /// Returns the seed that differentiates this employee's attendance.
    pub fn variation_seed(&self) -> u32 {
        crate::calculation::variation_seed(&self.id)
    }

    /// Returns true if the employee had not yet joined on `date`.
    pub fn joined_after(&self, date: NaiveDate) -> bool {
        self.joining_date.is_some_and(|joined| date < joined)
    }
}

/// Parses a string-encoded salary.
///
/// Empty, malformed, and non-finite inputs all parse to zero: a missing salary
/// means "no salary configured", not an error.
pub fn parse_salary(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a weekday from its English name, ignoring case and surrounding
/// whitespace. Only full names are accepted.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
