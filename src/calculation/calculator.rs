//! Payslip assembly.
//!
//! This module composes the individual calculation steps into the
//! compute-one-payslip operation: pay period resolution, monthly gross
//! derivation, the earnings split, statutory deductions, and the
//! negative-net validation policy.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, AuditWarning, CompensationRecord, EmployeeIdentity, Payslip, PayslipComputation,
    PayslipStatus,
};

use super::deductions::calculate_deductions;
use super::earnings_split::split_earnings;
use super::effective_period::resolve_effective_period;
use super::monthly_gross::calculate_monthly_gross;

/// Working/present days stamped on every payslip. A full-attendance
/// placeholder, not a figure derived from attendance records.
pub const FULL_ATTENDANCE_DAYS: u32 = 22;

/// Computes one payslip from one compensation record.
///
/// The computation is a pure function of its arguments: calling it twice
/// with the same inputs yields an identical payslip and audit trace.
///
/// # Arguments
///
/// * `record` - The compensation revision to compute a payslip for
/// * `identity` - The employee the payslip belongs to
/// * `config` - Statutory rates, rounding mode, and validation policy
///
/// # Returns
///
/// Returns the payslip and its audit trace, or an error if:
/// - The record's CTC figure is missing, non-numeric, or non-positive
///   (`InvalidCompensation`)
/// - The record's effective date is unparseable (`InvalidDate`)
/// - The net salary comes out negative and the validation policy rejects
///   negative net pay (`NegativeNetSalary`)
///
/// When the policy allows negative net pay, the payslip is emitted and a
/// high-severity `negative_net_salary` warning is attached to the trace.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::compute_payslip;
/// use payslip_engine::config::StatutoryConfig;
/// use payslip_engine::models::{CompensationRecord, EmployeeIdentity};
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord::new("500000", "2024-06-15");
/// let identity = EmployeeIdentity {
///     employee_id: "emp_001".to_string(),
///     name: "Asha Verma".to_string(),
///     email: "asha.verma@example.com".to_string(),
///     department: "Engineering".to_string(),
///     position: "Software Engineer".to_string(),
/// };
///
/// let computation =
///     compute_payslip(&record, &identity, &StatutoryConfig::default()).unwrap();
/// assert_eq!(computation.payslip.net_salary, Decimal::new(37867, 0));
/// ```
pub fn compute_payslip(
    record: &CompensationRecord,
    identity: &EmployeeIdentity,
    config: &StatutoryConfig,
) -> EngineResult<PayslipComputation> {
    let period = resolve_effective_period(&record.effective_date, 1)?;
    let gross = calculate_monthly_gross(record, identity, config, 2)?;
    let earnings = split_earnings(gross.gross_monthly, config.rounding, 3);
    let deductions = calculate_deductions(config, 4);

    let gross_earnings = gross.gross_monthly;
    let net_salary = gross_earnings - deductions.total_deductions;

    let mut warnings = Vec::new();
    if net_salary < Decimal::ZERO {
        if config.validation.reject_negative_net {
            return Err(EngineError::NegativeNetSalary {
                employee_id: identity.employee_id.clone(),
                year: period.year,
                month: period.month,
                net_salary,
            });
        }
        warnings.push(AuditWarning {
            code: "negative_net_salary".to_string(),
            message: format!(
                "Net salary {} is negative for period {}-{:02}; CTC {} is below the statutory floor",
                net_salary,
                period.year,
                period.month,
                gross.ctc_yearly.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    let payslip = Payslip {
        employee_id: identity.employee_id.clone(),
        month: period.month,
        year: period.year,
        pay_period: period.period,
        basic_salary: earnings.basic_salary,
        hra: earnings.hra,
        special_allowance: earnings.special_allowance,
        transport_allowance: Decimal::ZERO,
        medical_allowance: Decimal::ZERO,
        performance_bonus: Decimal::ZERO,
        other_allowances: Decimal::ZERO,
        overtime_amount: Decimal::ZERO,
        gross_earnings,
        pf_employer: config.provident_fund.employer_monthly,
        esi_employer: Decimal::ZERO,
        pf_employee: deductions.pf_employee,
        professional_tax: deductions.professional_tax,
        income_tax: deductions.income_tax,
        total_deductions: deductions.total_deductions,
        net_salary,
        working_days: FULL_ATTENDANCE_DAYS,
        present_days: FULL_ATTENDANCE_DAYS,
        status: PayslipStatus::Processed,
    };

    let audit_trace = AuditTrace {
        steps: vec![
            period.audit_step,
            gross.audit_step,
            earnings.audit_step,
            deductions.audit_step,
        ],
        warnings,
    };

    Ok(PayslipComputation {
        payslip,
        audit_trace,
    })
}
