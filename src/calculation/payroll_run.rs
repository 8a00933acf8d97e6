//! A payroll run across the whole staff for one month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{AttendancePeriod, Employee, PayrollEntry, PayrollStatus};

use super::employee_attendance::attendance_for;
use super::payroll::compute_payroll;

/// Aggregate figures for a payroll run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PayrollTotals {
    /// Number of entries in the run.
    pub employee_count: usize,
    /// Sum of net pay over all entries.
    pub total_payout: Decimal,
    /// Sum of net pay over entries still pending.
    pub pending_payout: Decimal,
}

impl PayrollTotals {
    /// Aggregates a set of entries.
    pub fn from_entries(entries: &[PayrollEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut totals, entry| {
            let net = entry.net_pay();
            totals.employee_count += 1;
            totals.total_payout += net;
            if entry.status == PayrollStatus::Pending {
                totals.pending_payout += net;
            }
            totals
        })
    }
}

/// The result of running payroll for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollRun {
    /// The month paid.
    pub period: AttendancePeriod,
    /// One entry per employee, in roster order.
    pub entries: Vec<PayrollEntry>,
    /// Totals over `entries`.
    pub totals: PayrollTotals,
}

/// Computes a payroll entry for every employee.
///
/// Entries in `previous` with a matching employee identifier carry their
/// payout status forward; bonus and deductions are recalculated as zero.
pub fn run_payroll(
    employees: &[Employee],
    period: &AttendancePeriod,
    today: NaiveDate,
    config: &EngineConfig,
    previous: &[PayrollEntry],
) -> PayrollRun {
    let entries: Vec<PayrollEntry> = employees
        .iter()
        .map(|employee| {
            let records = attendance_for(employee, period, today, config);
            let breakdown = compute_payroll(&records, &employee.salary, config.payroll());
            let status = previous
                .iter()
                .find(|entry| entry.employee_id == employee.id)
                .map(|entry| entry.status)
                .unwrap_or_default();

            debug!(
                employee_id = %employee.id,
                payable_days = %breakdown.payable_days,
                net_pay = %breakdown.net_pay,
                "Computed payroll entry"
            );

            PayrollEntry::from_breakdown(employee.id.clone(), &breakdown, status)
        })
        .collect();

    let totals = PayrollTotals::from_entries(&entries);
    PayrollRun {
        period: *period,
        entries,
        totals,
    }
}
