//! Monthly attendance generation.
//!
//! This module produces one [`DailyAttendanceRecord`] per calendar day of a
//! month for one employee, from the employee's joining date and week-off, a
//! reference "today", a handful of fixed absence days, and uniform draws.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::AttendancePolicy;
use crate::models::{
    AttendancePeriod, AttendanceStatus, DailyAttendanceRecord, Employee, PeriodPosition,
};

use super::draws::DrawSource;

/// Returns the last day of `period` whose attendance is considered decided.
///
/// - Months before the month of `today` are fully decided (last day).
/// - Months after it are not decided at all (0).
/// - The current month is decided up to today's day of month.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::anchor_day;
/// use okboz_payroll::models::AttendancePeriod;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
/// assert_eq!(anchor_day(&AttendancePeriod::new(2025, 10).unwrap(), today), 31);
/// assert_eq!(anchor_day(&AttendancePeriod::new(2025, 11).unwrap(), today), 15);
/// assert_eq!(anchor_day(&AttendancePeriod::new(2025, 12).unwrap(), today), 0);
/// ```
pub fn anchor_day(period: &AttendancePeriod, today: NaiveDate) -> u32 {
    match period.position_relative_to(today) {
        PeriodPosition::Past => period.days_in_month(),
        PeriodPosition::Current => today.day(),
        PeriodPosition::Future => 0,
    }
}

/// Maps a uniform draw to the status of an undetermined working day.
pub fn classify_draw(draw: f64, policy: &AttendancePolicy) -> AttendanceStatus {
    if draw > policy.paid_leave_threshold {
        AttendanceStatus::PaidLeave
    } else if draw > policy.half_day_threshold {
        AttendanceStatus::HalfDay
    } else {
        AttendanceStatus::Present
    }
}

/// Generates a month of attendance for one employee.
///
/// Records are returned in ascending date order, exactly one per calendar day
/// of `period`. For each day, in order of precedence:
///
/// 1. before the joining date, after the anchor day, or equal to `today`:
///    [`AttendanceStatus::NotMarked`] (today must be punched explicitly);
/// 2. Sunday or the employee's week-off: [`AttendanceStatus::WeekOff`];
/// 3. one of the policy's mock absence days: [`AttendanceStatus::Absent`];
/// 4. otherwise a draw decides paid leave, half day or present, and a second
///    draw decides whether a present day was late.
///
/// Present days carry the policy's display check-in and check-out times.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::{generate_attendance, SeededDraws};
/// use okboz_payroll::config::AttendancePolicy;
/// use okboz_payroll::models::{AttendancePeriod, AttendanceStatus, Employee};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "E001".to_string(),
///     name: "Alice Johnson".to_string(),
///     role: "Sales Manager".to_string(),
///     department: "Sales".to_string(),
///     salary: "85000".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2023, 1, 15),
///     week_off: "Sunday".to_string(),
/// };
/// let period = AttendancePeriod::new(2025, 12).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
///
/// let records = generate_attendance(
///     &employee,
///     &period,
///     today,
///     &AttendancePolicy::default(),
///     &mut SeededDraws::for_employee(&employee.id),
/// );
///
/// // A future month is never empty, just undecided.
/// assert_eq!(records.len(), 31);
/// assert!(records.iter().all(|r| r.status == AttendanceStatus::NotMarked));
/// ```
pub fn generate_attendance<D: DrawSource + ?Sized>(
    employee: &Employee,
    period: &AttendancePeriod,
    today: NaiveDate,
    policy: &AttendancePolicy,
    draws: &mut D,
) -> Vec<DailyAttendanceRecord> {
    let anchor = anchor_day(period, today);
    let week_off = employee.week_off_day();

    period
        .dates()
        .map(|date| {
            let day = date.day();

            if employee.joined_after(date) || day > anchor || date == today {
                return DailyAttendanceRecord::not_marked(date);
            }

            let weekday = date.weekday();
            if weekday == Weekday::Sun || week_off == Some(weekday) {
                return DailyAttendanceRecord::with_status(date, AttendanceStatus::WeekOff);
            }

            if policy.mock_absence_days.contains(&day) {
                return DailyAttendanceRecord::with_status(date, AttendanceStatus::Absent);
            }

            let status = classify_draw(draws.draw(date), policy);
            if status != AttendanceStatus::Present {
                return DailyAttendanceRecord::with_status(date, status);
            }

            DailyAttendanceRecord {
                date,
                status,
                is_late: draws.draw(date) < policy.late_probability,
                check_in: Some(policy.check_in.clone()),
                check_out: Some(policy.check_out.clone()),
            }
        })
        .collect()
}
