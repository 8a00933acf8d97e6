//! Attendance and payroll engine for OK BOZ staff management.
//!
//! Attendance is derived rather than recorded: a month is laid out from fixed
//! rules (joining date, week-offs, configured absence days) and seeded draws,
//! then varied per employee. Payroll reduces that month to payable days and a
//! salary breakdown. The [`api`] module exposes both over JSON.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
