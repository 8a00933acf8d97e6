//! Composed attendance for one employee and month.
//!
//! Generation followed by exactly one pass of the variation layer. This is the
//! attendance every other part of the engine (payroll, dashboards, payslips)
//! works from.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::models::{AttendancePeriod, DailyAttendanceRecord, Employee};

use super::attendance_generator::generate_attendance;
use super::draws::{DrawSource, draw_source};
use super::variation::apply_variation;

/// Generates and varies a month of attendance using the given draw source.
pub fn employee_attendance<D: DrawSource + ?Sized>(
    employee: &Employee,
    period: &AttendancePeriod,
    today: NaiveDate,
    config: &EngineConfig,
    draws: &mut D,
) -> Vec<DailyAttendanceRecord> {
    let base = generate_attendance(employee, period, today, config.attendance(), draws);
    apply_variation(base, employee.variation_seed(), config.variation())
}

/// Generates and varies a month of attendance with the configured draw mode.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::attendance_for;
/// use okboz_payroll::config::EngineConfig;
/// use okboz_payroll::models::{AttendancePeriod, Employee};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "E002".to_string(),
///     name: "Bob Smith".to_string(),
///     role: "Sales Executive".to_string(),
///     department: "Sales".to_string(),
///     salary: "45000".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2023, 3, 10),
///     week_off: "Sunday".to_string(),
/// };
/// let period = AttendancePeriod::new(2025, 11).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
/// let config = EngineConfig::default();
///
/// let first = attendance_for(&employee, &period, today, &config);
/// let second = attendance_for(&employee, &period, today, &config);
/// assert_eq!(first, second);
/// ```
pub fn attendance_for(
    employee: &Employee,
    period: &AttendancePeriod,
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<DailyAttendanceRecord> {
    let mut draws = draw_source(config.attendance().draw_mode, &employee.id);
    employee_attendance(employee, period, today, config, draws.as_mut())
}
