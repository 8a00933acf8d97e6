//! Past salary slips for one employee.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{AttendancePeriod, Employee, PayrollStatus, SalarySlip};

use super::payroll::round_currency;

/// Lists up to `months` slips for the months before `context`, newest first.
///
/// The listing stops at the employee's joining month. A joining month that
/// started after the 1st is pro-rated over the calendar days worked; every
/// other month pays the full monthly salary. Slips are paid out on the 1st of
/// the following month.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::salary_history;
/// use okboz_payroll::models::{AttendancePeriod, Employee};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "E001".to_string(),
///     salary: "85000".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2025, 8, 1),
///     ..Employee::default()
/// };
/// let context = AttendancePeriod::new(2025, 11).unwrap();
/// let slips = salary_history(&employee, &context, 6);
///
/// // October, September, August; nothing before joining.
/// assert_eq!(slips.len(), 3);
/// assert_eq!(slips[0].period, AttendancePeriod::new(2025, 10).unwrap());
/// ```
pub fn salary_history(
    employee: &Employee,
    context: &AttendancePeriod,
    months: usize,
) -> Vec<SalarySlip> {
    let salary = employee.monthly_salary();
    let joined = employee
        .joining_date
        .and_then(|date| AttendancePeriod::containing(date).ok().map(|period| (date, period)));

    std::iter::successors(context.previous(), AttendancePeriod::previous)
        .take_while(|period| joined.is_none_or(|(_, joining_period)| *period >= joining_period))
        .take(months)
        .filter_map(|period| {
            let amount = match joined {
                Some((date, joining_period)) if period == joining_period && date.day() > 1 => {
                    let days_worked = period.days_in_month() - date.day() + 1;
                    pro_rate(salary, period.days_in_month(), days_worked)
                }
                _ => salary,
            };
            let payout_date = period.next()?.first_day();
            Some(SalarySlip {
                period,
                amount,
                status: PayrollStatus::Paid,
                payout_date,
            })
        })
        .collect()
}

fn pro_rate(salary: Decimal, days_in_month: u32, days_worked: u32) -> Decimal {
    salary
        .checked_mul(Decimal::from(days_worked))
        .and_then(|earned| earned.checked_div(Decimal::from(days_in_month)))
        .map(round_currency)
        .unwrap_or(Decimal::ZERO)
}
