//! Daily attendance records.
//!
//! This module defines [`AttendanceStatus`] and [`DailyAttendanceRecord`], the
//! per-day output of the attendance generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The attendance status of a single calendar day.
///
/// # Example
///
/// ```
/// use okboz_payroll::models::AttendanceStatus;
///
/// let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
/// assert_eq!(json, "\"HALF_DAY\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Worked the full day.
    Present,
    /// Did not work and is not on paid leave.
    Absent,
    /// Worked half the day.
    HalfDay,
    /// On paid leave.
    PaidLeave,
    /// The employee's weekly day off (or Sunday).
    WeekOff,
    /// Not yet decided: before joining, in the future, or today.
    NotMarked,
}

impl AttendanceStatus {
    /// Returns true if the employee was at work (fully or partially).
    pub fn is_at_work(self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::HalfDay)
    }

    /// Returns true if the employee was away on a working day.
    pub fn is_away(self) -> bool {
        matches!(self, AttendanceStatus::Absent | AttendanceStatus::PaidLeave)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "PRESENT"),
            AttendanceStatus::Absent => write!(f, "ABSENT"),
            AttendanceStatus::HalfDay => write!(f, "HALF_DAY"),
            AttendanceStatus::PaidLeave => write!(f, "PAID_LEAVE"),
            AttendanceStatus::WeekOff => write!(f, "WEEK_OFF"),
            AttendanceStatus::NotMarked => write!(f, "NOT_MARKED"),
        }
    }
}

/// One day of attendance for one employee.
///
/// `check_in` and `check_out` are display strings and are only set on
/// [`AttendanceStatus::Present`] records coming out of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendanceRecord {
    /// The calendar date (serialized as `YYYY-MM-DD`).
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Whether the employee arrived late. Only meaningful when present.
    #[serde(default)]
    pub is_late: bool,
    /// Display check-in time (e.g., "09:30 AM").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    /// Display check-out time (e.g., "06:30 PM").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
}

impl DailyAttendanceRecord {
    /// Creates an undecided record for `date`.
    pub fn not_marked(date: NaiveDate) -> Self {
        Self::with_status(date, AttendanceStatus::NotMarked)
    }

    /// Creates a record with the given status and no punch times.
    pub fn with_status(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            date,
            status,
            is_late: false,
            check_in: None,
            check_out: None,
        }
    }

    /// Returns true unless the record is [`AttendanceStatus::NotMarked`].
    pub fn is_marked(&self) -> bool {
        self.status != AttendanceStatus::NotMarked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_serialization() {
        let cases = [
            (AttendanceStatus::Present, "\"PRESENT\""),
            (AttendanceStatus::Absent, "\"ABSENT\""),
            (AttendanceStatus::HalfDay, "\"HALF_DAY\""),
            (AttendanceStatus::PaidLeave, "\"PAID_LEAVE\""),
            (AttendanceStatus::WeekOff, "\"WEEK_OFF\""),
            (AttendanceStatus::NotMarked, "\"NOT_MARKED\""),
        ];
        for (status, expected) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
            assert_eq!(status.to_string(), expected.trim_matches('"'));
        }
    }

    #[test]
    fn test_present_record_serialization() {
        let record = DailyAttendanceRecord {
            date: date(2025, 11, 12),
            status: AttendanceStatus::Present,
            is_late: true,
            check_in: Some("09:30 AM".to_string()),
            check_out: Some("06:30 PM".to_string()),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2025-11-12\""));
        assert!(json.contains("\"status\":\"PRESENT\""));
        assert!(json.contains("\"is_late\":true"));
        assert!(json.contains("\"check_in\":\"09:30 AM\""));
    }

    #[test]
    fn test_not_marked_record_omits_times() {
        let record = DailyAttendanceRecord::not_marked(date(2025, 11, 1));
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("check_in"));
        assert!(!json.contains("check_out"));
        assert!(!record.is_marked());
    }

    #[test]
    fn test_deserialize_record_defaults() {
        let json = r#"{"date": "2025-11-03", "status": "WEEK_OFF"}"#;
        let record: DailyAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, AttendanceStatus::WeekOff);
        assert!(!record.is_late);
        assert_eq!(record.check_in, None);
        assert!(record.is_marked());
    }

    #[test]
    fn test_at_work_and_away_partition() {
        assert!(AttendanceStatus::Present.is_at_work());
        assert!(AttendanceStatus::HalfDay.is_at_work());
        assert!(AttendanceStatus::Absent.is_away());
        assert!(AttendanceStatus::PaidLeave.is_away());
        assert!(!AttendanceStatus::WeekOff.is_at_work());
        assert!(!AttendanceStatus::WeekOff.is_away());
        assert!(!AttendanceStatus::NotMarked.is_at_work());
        assert!(!AttendanceStatus::NotMarked.is_away());
    }
}
