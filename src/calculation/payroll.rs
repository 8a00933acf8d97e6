//! Payroll derivation from a month of attendance.
//!
//! A month of attendance is reduced to payable days, the monthly salary is
//! pro-rated over a fixed number of days, and the gross is split into basic,
//! HRA and special allowance. All rounding is half away from zero to whole
//! currency units. Invalid input degrades to zero; nothing here fails.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayrollPolicy;
use crate::models::{
    AttendanceStatus, AuditStep, AuditTrace, AuditWarning, DailyAttendanceRecord,
    PayrollBreakdown, parse_salary,
};

use super::attendance_summary::summarize_attendance;

/// The contribution of one day with `status` to payable days.
///
/// Present, week-off and paid-leave days count fully, half days count half,
/// and absent or unmarked days count nothing.
pub fn payable_weight(status: AttendanceStatus) -> Decimal {
    match status {
        AttendanceStatus::Present | AttendanceStatus::WeekOff | AttendanceStatus::PaidLeave => {
            Decimal::ONE
        }
        AttendanceStatus::HalfDay => Decimal::new(5, 1),
        AttendanceStatus::Absent | AttendanceStatus::NotMarked => Decimal::ZERO,
    }
}

/// Sums [`payable_weight`] over a month of records.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::count_payable_days;
/// use okboz_payroll::models::{AttendanceStatus, DailyAttendanceRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
/// let records = vec![
///     DailyAttendanceRecord::with_status(date, AttendanceStatus::Present),
///     DailyAttendanceRecord::with_status(date, AttendanceStatus::HalfDay),
///     DailyAttendanceRecord::with_status(date, AttendanceStatus::Absent),
/// ];
/// assert_eq!(count_payable_days(&records), Decimal::new(15, 1));
/// ```
pub fn count_payable_days(records: &[DailyAttendanceRecord]) -> Decimal {
    records.iter().map(|r| payable_weight(r.status)).sum()
}

/// Rounds to whole currency units, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Reduces a month of attendance and a string-encoded monthly salary to a
/// salary breakdown.
///
/// A malformed or empty salary is treated as zero. An empty attendance
/// sequence yields zero payable days and zero net pay.
///
/// # Example
///
/// ```
/// use okboz_payroll::calculation::compute_payroll;
/// use okboz_payroll::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_payroll(&[], "50000", &PayrollPolicy::default());
/// assert_eq!(breakdown.payable_days, Decimal::ZERO);
/// assert_eq!(breakdown.net_pay, Decimal::ZERO);
/// ```
pub fn compute_payroll(
    records: &[DailyAttendanceRecord],
    monthly_salary: &str,
    policy: &PayrollPolicy,
) -> PayrollBreakdown {
    derive_breakdown(count_payable_days(records), parse_salary(monthly_salary), policy)
}

/// A payroll breakdown together with the audit trace explaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollCalculation {
    /// The arithmetic result.
    pub breakdown: PayrollBreakdown,
    /// Every rule applied, in order, plus warnings for degraded inputs.
    pub audit_trace: AuditTrace,
}

/// Like [`compute_payroll`], but also records each step of the derivation.
pub fn compute_payroll_with_audit(
    records: &[DailyAttendanceRecord],
    monthly_salary: &str,
    policy: &PayrollPolicy,
) -> PayrollCalculation {
    let salary = parse_salary(monthly_salary);
    let breakdown = derive_breakdown(count_payable_days(records), salary, policy);
    let summary = summarize_attendance(records);

    let mut warnings = Vec::new();
    if salary.is_zero() {
        let message = if monthly_salary.trim().is_empty() {
            "No salary configured; treated as 0".to_string()
        } else {
            format!(
                "Salary '{}' is not a number or is zero; treated as 0",
                monthly_salary
            )
        };
        warnings.push(AuditWarning {
            code: "SALARY_NOT_CONFIGURED".to_string(),
            message,
            severity: "medium".to_string(),
        });
    }
    if records.is_empty() {
        warnings.push(AuditWarning {
            code: "NO_ATTENDANCE".to_string(),
            message: "No attendance records supplied; payable days are 0".to_string(),
            severity: "low".to_string(),
        });
    }

    let steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "payable_days".to_string(),
            rule_name: "Payable Days".to_string(),
            input: serde_json::json!({
                "present": summary.present,
                "week_off": summary.week_off,
                "paid_leave": summary.paid_leave,
                "half_day": summary.half_day,
                "absent": summary.absent,
                "not_marked": summary.not_marked
            }),
            output: serde_json::json!({
                "payable_days": breakdown.payable_days.normalize().to_string()
            }),
            reasoning: format!(
                "{} present + {} week off + {} paid leave + {} half day x 0.5 = {}",
                summary.present,
                summary.week_off,
                summary.paid_leave,
                summary.half_day,
                breakdown.payable_days.normalize()
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "per_day_salary".to_string(),
            rule_name: "Per-Day Salary".to_string(),
            input: serde_json::json!({
                "monthly_salary": salary.normalize().to_string(),
                "days_in_period": policy.days_in_period
            }),
            output: serde_json::json!({
                "per_day_salary": breakdown.per_day_salary.normalize().to_string()
            }),
            reasoning: format!(
                "{} / {} = {}",
                salary.normalize(),
                policy.days_in_period,
                breakdown.per_day_salary.round_dp(2).normalize()
            ),
        },
        AuditStep {
            step_number: 3,
            rule_id: "gross_earned".to_string(),
            rule_name: "Gross Earned".to_string(),
            input: serde_json::json!({
                "monthly_salary": salary.normalize().to_string(),
                "payable_days": breakdown.payable_days.normalize().to_string(),
                "days_in_period": policy.days_in_period
            }),
            output: serde_json::json!({
                "gross_earned": breakdown.gross_earned.to_string()
            }),
            reasoning: format!(
                "round({} x {} / {}) = {}",
                salary.normalize(),
                breakdown.payable_days.normalize(),
                policy.days_in_period,
                breakdown.gross_earned
            ),
        },
        AuditStep {
            step_number: 4,
            rule_id: "salary_split".to_string(),
            rule_name: "Salary Split".to_string(),
            input: serde_json::json!({
                "gross_earned": breakdown.gross_earned.to_string(),
                "basic_fraction": policy.split.basic.normalize().to_string(),
                "hra_fraction": policy.split.hra.normalize().to_string(),
                "special_allowance_fraction": policy.split.special_allowance.normalize().to_string()
            }),
            output: serde_json::json!({
                "basic": breakdown.basic.to_string(),
                "hra": breakdown.hra.to_string(),
                "special_allowance": breakdown.special_allowance.to_string(),
                "allowances": breakdown.allowances.to_string()
            }),
            reasoning: format!(
                "basic {} + HRA {} + special allowance {} (each rounded from {})",
                breakdown.basic, breakdown.hra, breakdown.special_allowance, breakdown.gross_earned
            ),
        },
        AuditStep {
            step_number: 5,
            rule_id: "net_pay".to_string(),
            rule_name: "Net Pay".to_string(),
            input: serde_json::json!({
                "basic": breakdown.basic.to_string(),
                "allowances": breakdown.allowances.to_string(),
                "bonus": breakdown.bonus.to_string(),
                "deductions": breakdown.deductions.to_string()
            }),
            output: serde_json::json!({
                "net_pay": breakdown.net_pay.to_string()
            }),
            reasoning: format!(
                "{} + {} + {} - {} = {}",
                breakdown.basic,
                breakdown.allowances,
                breakdown.bonus,
                breakdown.deductions,
                breakdown.net_pay
            ),
        },
    ];

    PayrollCalculation {
        breakdown,
        audit_trace: AuditTrace { steps, warnings },
    }
}

fn derive_breakdown(
    payable_days: Decimal,
    monthly_salary: Decimal,
    policy: &PayrollPolicy,
) -> PayrollBreakdown {
    // Overflow or a zero divisor degrade to zero like any other invalid input.
    let days_in_period = Decimal::from(policy.days_in_period);
    let per_day_salary = monthly_salary
        .checked_div(days_in_period)
        .unwrap_or(Decimal::ZERO);
    // Multiply before dividing so an exact half is not truncated below the midpoint.
    let gross_earned = monthly_salary
        .checked_mul(payable_days)
        .and_then(|earned| earned.checked_div(days_in_period))
        .map(round_currency)
        .unwrap_or(Decimal::ZERO);

    let share = |fraction: Decimal| {
        gross_earned
            .checked_mul(fraction)
            .map(round_currency)
            .unwrap_or(Decimal::ZERO)
    };
    let basic = share(policy.split.basic);
    let hra = share(policy.split.hra);
    let special_allowance = share(policy.split.special_allowance);
    let allowances = hra + special_allowance;

    let bonus = Decimal::ZERO;
    let deductions = Decimal::ZERO;

    PayrollBreakdown {
        payable_days,
        total_days: policy.days_in_period,
        per_day_salary,
        gross_earned,
        basic,
        hra,
        special_allowance,
        allowances,
        bonus,
        deductions,
        net_pay: basic + allowances + bonus - deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SalarySplitPolicy;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn month(statuses: &[(AttendanceStatus, usize)]) -> Vec<DailyAttendanceRecord> {
        let mut records = Vec::new();
        let mut day = 1;
        for (status, count) in statuses {
            for _ in 0..*count {
                let date = NaiveDate::from_ymd_opt(2025, 12, day).unwrap();
                records.push(DailyAttendanceRecord::with_status(date, *status));
                day += 1;
            }
        }
        records
    }

    #[test]
    fn test_payable_weights() {
        assert_eq!(payable_weight(AttendanceStatus::Present), dec("1"));
        assert_eq!(payable_weight(AttendanceStatus::WeekOff), dec("1"));
        assert_eq!(payable_weight(AttendanceStatus::PaidLeave), dec("1"));
        assert_eq!(payable_weight(AttendanceStatus::HalfDay), dec("0.5"));
        assert_eq!(payable_weight(AttendanceStatus::Absent), dec("0"));
        assert_eq!(payable_weight(AttendanceStatus::NotMarked), dec("0"));
    }

    #[test]
    fn test_empty_attendance_yields_zero() {
        let breakdown = compute_payroll(&[], "50000", &PayrollPolicy::default());
        assert_eq!(breakdown.payable_days, Decimal::ZERO);
        assert_eq!(breakdown.gross_earned, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, Decimal::ZERO);
        assert_eq!(breakdown.total_days, 30);
    }

    #[test]
    fn test_full_month_present_at_thirty_thousand() {
        let records = month(&[(AttendanceStatus::Present, 30)]);
        let breakdown = compute_payroll(&records, "30000", &PayrollPolicy::default());

        assert_eq!(breakdown.payable_days, dec("30"));
        assert_eq!(breakdown.per_day_salary, dec("1000"));
        assert_eq!(breakdown.gross_earned, dec("30000"));
        assert_eq!(breakdown.basic, dec("15000"));
        assert_eq!(breakdown.hra, dec("9000"));
        assert_eq!(breakdown.special_allowance, dec("6000"));
        assert_eq!(breakdown.allowances, dec("15000"));
        assert_eq!(breakdown.bonus, Decimal::ZERO);
        assert_eq!(breakdown.deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, dec("30000"));
    }

    #[test]
    fn test_thirty_one_day_month_still_divides_by_thirty() {
        let records = month(&[(AttendanceStatus::Present, 31)]);
        let breakdown = compute_payroll(&records, "30000", &PayrollPolicy::default());

        assert_eq!(breakdown.payable_days, dec("31"));
        assert_eq!(breakdown.gross_earned, dec("31000"));
    }

    #[test]
    fn test_mixed_month_with_half_days() {
        // 20 present + 4 week off + 1 paid leave + 3 half days + 2 absent = 26.5
        let records = month(&[
            (AttendanceStatus::Present, 20),
            (AttendanceStatus::WeekOff, 4),
            (AttendanceStatus::PaidLeave, 1),
            (AttendanceStatus::HalfDay, 3),
            (AttendanceStatus::Absent, 2),
        ]);
        let breakdown = compute_payroll(&records, "45000", &PayrollPolicy::default());

        assert_eq!(breakdown.payable_days, dec("26.5"));
        // 1500 x 26.5 = 39750
        assert_eq!(breakdown.gross_earned, dec("39750"));
        assert_eq!(breakdown.basic, dec("19875"));
        assert_eq!(breakdown.hra, dec("11925"));
        assert_eq!(breakdown.special_allowance, dec("7950"));
        assert_eq!(breakdown.net_pay, dec("39750"));
    }

    #[test]
    fn test_gross_rounds_half_away_from_zero() {
        // 85000 / 30 = 2833.33.. ; x 0.5 = 1416.66.. -> 1417
        let records = month(&[(AttendanceStatus::HalfDay, 1)]);
        let breakdown = compute_payroll(&records, "85000", &PayrollPolicy::default());
        assert_eq!(breakdown.gross_earned, dec("1417"));
        // 1417 x 0.5 = 708.5 -> 709 ; x 0.3 = 425.1 -> 425 ; x 0.2 = 283.4 -> 283
        assert_eq!(breakdown.basic, dec("709"));
        assert_eq!(breakdown.hra, dec("425"));
        assert_eq!(breakdown.special_allowance, dec("283"));
        // Independent rounding: components sum to 1417 here, net follows them.
        assert_eq!(breakdown.net_pay, dec("1417"));
    }

    #[test]
    fn test_independent_rounding_may_drift_from_gross() {
        // 3 x 0.5 = 1.5 -> 2 ; 3 x 0.3 = 0.9 -> 1 ; 3 x 0.2 = 0.6 -> 1  => 4 vs gross 3
        let records = month(&[(AttendanceStatus::Present, 3)]);
        let breakdown = compute_payroll(&records, "30", &PayrollPolicy::default());
        assert_eq!(breakdown.gross_earned, dec("3"));
        assert_eq!(breakdown.basic + breakdown.hra + breakdown.special_allowance, dec("4"));
        assert_eq!(breakdown.net_pay, dec("4"));
    }

    #[test]
    fn test_exact_half_gross_rounds_up() {
        // 23785 x 3 / 30 = 2378.5 exactly.
        let records = month(&[(AttendanceStatus::Present, 3)]);
        let breakdown = compute_payroll(&records, "23785", &PayrollPolicy::default());
        assert_eq!(breakdown.gross_earned, dec("2379"));

        // 1 x 15 / 30 = 0.5 exactly.
        let records = month(&[(AttendanceStatus::Present, 15)]);
        let breakdown = compute_payroll(&records, "1", &PayrollPolicy::default());
        assert_eq!(breakdown.gross_earned, dec("1"));

        // Half days: 45001 x 0.5 / 30 = 750.0166.. stays below the midpoint.
        let records = month(&[(AttendanceStatus::HalfDay, 1)]);
        let breakdown = compute_payroll(&records, "45001", &PayrollPolicy::default());
        assert_eq!(breakdown.gross_earned, dec("750"));
    }

    #[test]
    fn test_gross_step_shows_salary_over_days() {
        let records = month(&[(AttendanceStatus::Present, 3)]);
        let calc = compute_payroll_with_audit(&records, "23785", &PayrollPolicy::default());
        let step = &calc.audit_trace.steps[2];
        assert_eq!(step.rule_id, "gross_earned");
        assert_eq!(step.reasoning, "round(23785 x 3 / 30) = 2379");
        assert_eq!(step.output["gross_earned"], "2379");
    }

    #[test]
    fn test_round_currency_midpoints() {
        assert_eq!(round_currency(dec("2.5")), dec("3"));
        assert_eq!(round_currency(dec("-2.5")), dec("-3"));
        assert_eq!(round_currency(dec("2.49")), dec("2"));
    }

    #[test]
    fn test_malformed_salary_is_zero() {
        let records = month(&[(AttendanceStatus::Present, 30)]);
        for salary in ["", "abc", "  ", "NaN"] {
            let breakdown = compute_payroll(&records, salary, &PayrollPolicy::default());
            assert_eq!(breakdown.payable_days, dec("30"), "salary {:?}", salary);
            assert_eq!(breakdown.net_pay, Decimal::ZERO, "salary {:?}", salary);
        }
    }

    #[test]
    fn test_zero_days_in_period_degrades_to_zero() {
        let policy = PayrollPolicy {
            days_in_period: 0,
            split: SalarySplitPolicy::default(),
        };
        let records = month(&[(AttendanceStatus::Present, 30)]);
        let breakdown = compute_payroll(&records, "30000", &policy);
        assert_eq!(breakdown.per_day_salary, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_custom_split_policy() {
        let policy = PayrollPolicy {
            days_in_period: 30,
            split: SalarySplitPolicy {
                basic: dec("0.40"),
                hra: dec("0.40"),
                special_allowance: dec("0.20"),
            },
        };
        let records = month(&[(AttendanceStatus::Present, 30)]);
        let breakdown = compute_payroll(&records, "30000", &policy);
        assert_eq!(breakdown.basic, dec("12000"));
        assert_eq!(breakdown.hra, dec("12000"));
        assert_eq!(breakdown.allowances, dec("18000"));
    }

    #[test]
    fn test_audit_trace_records_each_rule_in_order() {
        let records = month(&[(AttendanceStatus::Present, 30)]);
        let calculation = compute_payroll_with_audit(&records, "30000", &PayrollPolicy::default());

        let rule_ids: Vec<&str> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["payable_days", "per_day_salary", "gross_earned", "salary_split", "net_pay"]
        );
        let numbers: Vec<u32> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(calculation.audit_trace.warnings.is_empty());
        assert_eq!(calculation.audit_trace.steps[0].output["payable_days"], "30");
        assert_eq!(calculation.audit_trace.steps[4].reasoning, "15000 + 15000 + 0 - 0 = 30000");
    }

    #[test]
    fn test_audit_trace_matches_plain_computation() {
        let records = month(&[(AttendanceStatus::Present, 12), (AttendanceStatus::HalfDay, 5)]);
        let plain = compute_payroll(&records, "65000", &PayrollPolicy::default());
        let audited = compute_payroll_with_audit(&records, "65000", &PayrollPolicy::default());
        assert_eq!(audited.breakdown, plain);
    }

    #[test]
    fn test_audit_warns_on_degraded_inputs() {
        let calculation = compute_payroll_with_audit(&[], "n/a", &PayrollPolicy::default());
        let codes: Vec<&str> = calculation
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["SALARY_NOT_CONFIGURED", "NO_ATTENDANCE"]);
        assert!(calculation.audit_trace.warnings[0].message.contains("n/a"));
    }
}
