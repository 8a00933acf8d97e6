//! Per-status counts over a month of attendance.

use serde::Serialize;

use crate::models::{AttendanceStatus, DailyAttendanceRecord};

/// How many days of a month fell into each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    /// Days marked present.
    pub present: u32,
    /// Days marked absent.
    pub absent: u32,
    /// Days marked half day.
    pub half_day: u32,
    /// Days on paid leave.
    pub paid_leave: u32,
    /// Weekly days off.
    pub week_off: u32,
    /// Days not yet marked (future, today, or before joining).
    pub not_marked: u32,
    /// Present days with a late arrival.
    pub late: u32,
}

/// Counts the records of a month by status.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::summarize_attendance;
/// use okboz_payroll::models::{AttendanceStatus, DailyAttendanceRecord};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
/// let records = vec![
///     DailyAttendanceRecord::with_status(date, AttendanceStatus::Present),
///     DailyAttendanceRecord::with_status(date, AttendanceStatus::WeekOff),
/// ];
/// let summary = summarize_attendance(&records);
/// assert_eq!(summary.present, 1);
/// assert_eq!(summary.week_off, 1);
/// ```
pub fn summarize_attendance(records: &[DailyAttendanceRecord]) -> AttendanceSummary {
    records
        .iter()
        .fold(AttendanceSummary::default(), |mut summary, record| {
            match record.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::HalfDay => summary.half_day += 1,
                AttendanceStatus::PaidLeave => summary.paid_leave += 1,
                AttendanceStatus::WeekOff => summary.week_off += 1,
                AttendanceStatus::NotMarked => summary.not_marked += 1,
            }
            if record.is_late {
                summary.late += 1;
            }
            summary
        })
}
