//! Per-employee attendance variation.
//!
//! Generated months look alike for everyone sharing a week-off. This layer
//! turns some present days into absences or half days based on a seed derived
//! from the employee identifier, so staff differ from each other but each
//! employee's month is the same on every request.
//!
//! The layer must be applied exactly once to raw generator output; applying it
//! to its own output can compound overrides.

use crate::config::VariationPolicy;
use crate::models::{AttendanceStatus, DailyAttendanceRecord};

/// Derives the variation seed from an employee identifier.
///
/// The seed is the identifier's last UTF-16 code unit, or 0 when the
/// identifier is empty. An identifier ending outside the Basic Multilingual
/// Plane therefore seeds from the low surrogate of its last character.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::variation_seed;
///
/// assert_eq!(variation_seed("E001"), 49); // '1'
/// assert_eq!(variation_seed(""), 0);
/// ```
pub fn variation_seed(employee_id: &str) -> u32 {
    employee_id.encode_utf16().last().map_or(0, u32::from)
}

/// Applies the seeded variation to a generated month.
///
/// For each present record at zero-based index `i`:
/// - if `(i + seed)` is a multiple of the absent modulus, the day becomes
///   [`AttendanceStatus::Absent`] and its punch times are cleared;
/// - otherwise, if it is a multiple of the half-day modulus, the day becomes
///   [`AttendanceStatus::HalfDay`] and keeps its punch times.
///
/// Records with any other status pass through untouched.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::apply_variation;
/// use okboz_payroll::config::VariationPolicy;
/// use okboz_payroll::models::{AttendanceStatus, DailyAttendanceRecord};
/// use chrono::NaiveDate;
///
/// let records: Vec<DailyAttendanceRecord> = (1..=3)
///     .map(|d| {
///         let date = NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
///         DailyAttendanceRecord::with_status(date, AttendanceStatus::Present)
///     })
///     .collect();
///
/// // Seed 14: index 0 -> 14 (half day), index 1 -> 15 (absent), index 2 -> 16 (kept).
/// let varied = apply_variation(records, 14, &VariationPolicy::default());
/// assert_eq!(varied[0].status, AttendanceStatus::HalfDay);
/// assert_eq!(varied[1].status, AttendanceStatus::Absent);
/// assert_eq!(varied[2].status, AttendanceStatus::Present);
/// ```
pub fn apply_variation(
    records: Vec<DailyAttendanceRecord>,
    seed: u32,
    policy: &VariationPolicy,
) -> Vec<DailyAttendanceRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            if record.status != AttendanceStatus::Present {
                return record;
            }

            let position = index as u64 + u64::from(seed);
            if is_multiple(position, policy.absent_modulus) {
                record.status = AttendanceStatus::Absent;
                record.check_in = None;
                record.check_out = None;
            } else if is_multiple(position, policy.half_day_modulus) {
                record.status = AttendanceStatus::HalfDay;
            }
            record
        })
        .collect()
}

// A zero modulus never matches.
fn is_multiple(value: u64, modulus: u32) -> bool {
    value
        .checked_rem(u64::from(modulus))
        .is_some_and(|rem| rem == 0)
}
