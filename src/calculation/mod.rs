//! Calculation logic for the payroll engine.
//!
//! Attendance is derived, never stored: the generator lays out a month from
//! fixed rules and uniform draws, the variation layer differentiates staff, and
//! the payroll reducer turns the result into a salary breakdown. Everything
//! here is pure apart from the draw source.

mod attendance_generator;
mod attendance_summary;
mod draws;
mod employee_attendance;
mod headcount;
mod payroll;
mod payroll_run;
mod salary_history;
mod variation;

pub use attendance_generator::{anchor_day, classify_draw, generate_attendance};
pub use attendance_summary::{AttendanceSummary, summarize_attendance};
pub use draws::{AmbientDraws, DrawSource, SeededDraws, draw_source};
pub use employee_attendance::{attendance_for, employee_attendance};
pub use headcount::{
    DailyHeadcount, StaffAttendance, daily_headcount, headcount_trend, is_field_staff,
};
pub use payroll::{
    PayrollCalculation, compute_payroll, compute_payroll_with_audit, count_payable_days,
    payable_weight, round_currency,
};
pub use payroll_run::{PayrollRun, PayrollTotals, run_payroll};
pub use salary_history::salary_history;
pub use variation::{apply_variation, variation_seed};
