//! Monthly gross pay derivation.
//!
//! This module parses a compensation record's yearly CTC figure and
//! derives the monthly gross pay: the yearly employer PF contribution is
//! carved out of CTC, and the remainder is spread over twelve months.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::StatutoryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CompensationRecord, EmployeeIdentity};

/// Months in a pay year; the divisor for yearly-to-monthly conversion.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The result of deriving monthly gross pay, including the audit step.
#[derive(Debug, Clone)]
pub struct MonthlyGrossResult {
    /// The parsed yearly cost-to-company figure.
    pub ctc_yearly: Decimal,
    /// Yearly gross: CTC minus the yearly employer PF contribution.
    pub gross_yearly: Decimal,
    /// Monthly gross: yearly gross over twelve months, rounded.
    pub gross_monthly: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives monthly gross pay from a compensation record.
///
/// The yearly CTC figure is parsed from the raw record; a missing,
/// non-numeric, or non-positive figure fails with `InvalidCompensation`
/// naming the employee and the offending value, never a silent coercion
/// to zero.
///
/// A CTC at or below the yearly employer PF contribution yields a zero or
/// negative gross. That is not rejected here; the negative-net policy is
/// applied once the full payslip is assembled.
///
/// # Arguments
///
/// * `record` - The compensation record carrying the raw CTC figure
/// * `identity` - The employee the record belongs to (for error context)
/// * `config` - The statutory configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_monthly_gross;
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
/// let result =
///     calculate_monthly_gross(&record, &identity, &StatutoryConfig::default(), 2).unwrap();
/// assert_eq!(result.gross_yearly, Decimal::new(478400, 0));
/// assert_eq!(result.gross_monthly, Decimal::new(39867, 0));
/// ```
pub fn calculate_monthly_gross(
    record: &CompensationRecord,
    identity: &EmployeeIdentity,
    config: &StatutoryConfig,
    step_number: u32,
) -> EngineResult<MonthlyGrossResult> {
    let raw = record.ctc_yearly.trim();

    if raw.is_empty() {
        return Err(EngineError::InvalidCompensation {
            employee_id: identity.employee_id.clone(),
            ctc_yearly: record.ctc_yearly.clone(),
            message: "ctc_yearly is missing".to_string(),
        });
    }

    let ctc_yearly =
        Decimal::from_str(raw).map_err(|_| EngineError::InvalidCompensation {
            employee_id: identity.employee_id.clone(),
            ctc_yearly: record.ctc_yearly.clone(),
            message: "ctc_yearly is not a number".to_string(),
        })?;

    if ctc_yearly <= Decimal::ZERO {
        return Err(EngineError::InvalidCompensation {
            employee_id: identity.employee_id.clone(),
            ctc_yearly: record.ctc_yearly.clone(),
            message: "ctc_yearly must be positive".to_string(),
        });
    }

    let employer_pf_yearly = config.provident_fund.employer_yearly;
    let gross_yearly = ctc_yearly - employer_pf_yearly;
    let gross_monthly = config
        .rounding
        .round_to_unit(gross_yearly / Decimal::from(MONTHS_PER_YEAR));

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_gross".to_string(),
        rule_name: "Monthly Gross Derivation".to_string(),
        input: serde_json::json!({
            "ctc_yearly": ctc_yearly.normalize().to_string(),
            "employer_pf_yearly": employer_pf_yearly.normalize().to_string(),
        }),
        output: serde_json::json!({
            "gross_yearly": gross_yearly.normalize().to_string(),
            "gross_monthly": gross_monthly.normalize().to_string(),
        }),
        reasoning: format!(
            "{} - {} = {} gross yearly; over {} months, rounded to {} monthly",
            ctc_yearly.normalize(),
            employer_pf_yearly.normalize(),
            gross_yearly.normalize(),
            MONTHS_PER_YEAR,
            gross_monthly.normalize()
        ),
    };

    Ok(MonthlyGrossResult {
        ctc_yearly,
        gross_yearly,
        gross_monthly,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_identity() -> EmployeeIdentity {
        EmployeeIdentity {
            employee_id: "emp_001".to_string(),
            name: "Asha Verma".to_string(),
            email: "asha.verma@example.com".to_string(),
            department: "Engineering".to_string(),
            position: "Software Engineer".to_string(),
        }
    }

    fn gross_for(ctc: &str) -> EngineResult<MonthlyGrossResult> {
        let record = CompensationRecord::new(ctc, "2024-06-15");
        calculate_monthly_gross(
            &record,
            &create_test_identity(),
            &StatutoryConfig::default(),
            2,
        )
    }

    /// MG-001: reference figures for 500000 CTC
    #[test]
    fn test_reference_ctc_500000() {
        let result = gross_for("500000").unwrap();

        assert_eq!(result.ctc_yearly, dec("500000"));
        assert_eq!(result.gross_yearly, dec("478400"));
        assert_eq!(result.gross_monthly, dec("39867"));
    }

    /// MG-002: CTC equal to the yearly employer PF floor yields zero gross
    #[test]
    fn test_ctc_at_pf_floor_yields_zero() {
        let result = gross_for("21600").unwrap();

        assert_eq!(result.gross_yearly, dec("0"));
        assert_eq!(result.gross_monthly, dec("0"));
    }

    /// MG-003: CTC below the floor yields negative gross, not an error
    #[test]
    fn test_ctc_below_floor_yields_negative() {
        let result = gross_for("10000").unwrap();

        assert_eq!(result.gross_yearly, dec("-11600"));
        assert!(result.gross_monthly < Decimal::ZERO);
    }

    /// MG-004: non-numeric CTC fails with InvalidCompensation
    #[test]
    fn test_non_numeric_ctc_fails() {
        let result = gross_for("N/A");

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidCompensation {
                employee_id,
                ctc_yearly,
                message,
            } => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(ctc_yearly, "N/A");
                assert!(message.contains("not a number"));
            }
            other => panic!("Expected InvalidCompensation, got {:?}", other),
        }
    }

    /// MG-005: missing CTC fails with InvalidCompensation
    #[test]
    fn test_missing_ctc_fails() {
        let result = gross_for("");

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidCompensation { message, .. } => {
                assert!(message.contains("missing"));
            }
            other => panic!("Expected InvalidCompensation, got {:?}", other),
        }
    }

    /// MG-006: zero and negative CTC fail with InvalidCompensation
    #[test]
    fn test_non_positive_ctc_fails() {
        for ctc in ["0", "-500000"] {
            let result = gross_for(ctc);
            assert!(result.is_err(), "ctc {} should be rejected", ctc);
            match result.unwrap_err() {
                EngineError::InvalidCompensation { message, .. } => {
                    assert!(message.contains("positive"));
                }
                other => panic!("Expected InvalidCompensation, got {:?}", other),
            }
        }
    }

    /// MG-007: midpoint months round away from zero
    #[test]
    fn test_monthly_rounding_at_midpoint() {
        // 21606 - 21600 = 6 yearly, 0.5 monthly, rounds up to 1.
        let result = gross_for("21606").unwrap();
        assert_eq!(result.gross_monthly, dec("1"));
    }

    #[test]
    fn test_whitespace_around_ctc_tolerated() {
        let result = gross_for(" 500000 ").unwrap();
        assert_eq!(result.ctc_yearly, dec("500000"));
    }

    #[test]
    fn test_audit_step_records_derivation() {
        let result = gross_for("500000").unwrap();

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "monthly_gross");
        assert_eq!(
            result.audit_step.input["ctc_yearly"].as_str().unwrap(),
            "500000"
        );
        assert_eq!(
            result.audit_step.output["gross_monthly"].as_str().unwrap(),
            "39867"
        );
        assert!(result.audit_step.reasoning.contains("478400"));
    }
}
