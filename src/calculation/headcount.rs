//! Daily headcount across a roster.
//!
//! Present means at work (present or half day), absent means away with or
//! without pay. Week-offs and unmarked days count towards neither.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{DailyAttendanceRecord, Employee};

/// One employee together with their derived attendance.
#[derive(Debug, Clone)]
pub struct StaffAttendance {
    /// The employee.
    pub employee: Employee,
    /// Attendance records, usually one month.
    pub records: Vec<DailyAttendanceRecord>,
}

impl StaffAttendance {
    fn on(&self, date: NaiveDate) -> Option<&DailyAttendanceRecord> {
        self.records.iter().find(|r| r.date == date)
    }
}

/// Headcount for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyHeadcount {
    /// The day counted.
    pub date: NaiveDate,
    /// Everyone on the roster, whether or not they have a record for the day.
    pub total_staff: usize,
    /// Staff at work.
    pub present: usize,
    /// Staff away.
    pub absent: usize,
    /// Staff at work whose job takes them into the field.
    pub on_field: usize,
}

/// Field staff work in Sales or hold a lead role.
pub fn is_field_staff(employee: &Employee) -> bool {
    employee.department == "Sales" || employee.role.contains("Lead")
}

/// Counts who was at work and who was away on `date`.
pub fn daily_headcount(roster: &[StaffAttendance], date: NaiveDate) -> DailyHeadcount {
    let mut headcount = DailyHeadcount {
        date,
        total_staff: roster.len(),
        present: 0,
        absent: 0,
        on_field: 0,
    };

    for staff in roster {
        let Some(record) = staff.on(date) else {
            continue;
        };
        if record.status.is_at_work() {
            headcount.present += 1;
            if is_field_staff(&staff.employee) {
                headcount.on_field += 1;
            }
        } else if record.status.is_away() {
            headcount.absent += 1;
        }
    }

    headcount
}

/// Headcount for each of the `days` days ending at `end_date`, oldest first.
pub fn headcount_trend(
    roster: &[StaffAttendance],
    end_date: NaiveDate,
    days: u32,
) -> Vec<DailyHeadcount> {
    (0..days)
        .rev()
        .filter_map(|offset| end_date.checked_sub_signed(Duration::days(i64::from(offset))))
        .map(|date| daily_headcount(roster, date))
        .collect()
}
