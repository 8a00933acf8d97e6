//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod employee;
mod payroll;
mod period;

pub use attendance::{AttendanceStatus, DailyAttendanceRecord};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use employee::{Employee, parse_salary, weekday_from_name};
pub use payroll::{PayrollBreakdown, PayrollEntry, PayrollStatus, SalarySlip};
pub use period::{AttendancePeriod, PeriodPosition};
