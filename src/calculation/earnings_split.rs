//! Earnings breakdown calculation.
//!
//! This module splits the monthly gross into its earnings components:
//! basic salary, house rent allowance, and a special allowance absorbing
//! the residual. Only basic and HRA are rounded; the special allowance is
//! a plain subtraction so the three components always sum exactly to the
//! monthly gross.

use rust_decimal::Decimal;

use crate::config::RoundingMode;
use crate::models::AuditStep;

/// Returns the basic salary share of monthly gross (0.5).
pub fn basic_share() -> Decimal {
    Decimal::new(5, 1)
}

/// Returns the HRA share of basic salary (0.4).
pub fn hra_share() -> Decimal {
    Decimal::new(4, 1)
}

/// The result of splitting monthly gross into earnings components.
#[derive(Debug, Clone)]
pub struct EarningsSplitResult {
    /// Basic salary: half of monthly gross, rounded.
    pub basic_salary: Decimal,
    /// House rent allowance: 40% of basic salary, rounded.
    pub hra: Decimal,
    /// The unrounded residual of monthly gross after basic and HRA.
    pub special_allowance: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits monthly gross pay into basic salary, HRA, and special allowance.
///
/// `basic = round(gross * 0.5)`, `hra = round(basic * 0.4)`,
/// `special = gross - basic - hra`. The residual is never independently
/// rounded, which guarantees the components sum exactly to the input.
///
/// # Arguments
///
/// * `gross_monthly` - The monthly gross pay to split
/// * `rounding` - The rounding mode for basic and HRA
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::split_earnings;
/// use payslip_engine::config::RoundingMode;
/// use rust_decimal::Decimal;
///
/// let result = split_earnings(Decimal::new(39867, 0), RoundingMode::default(), 3);
/// assert_eq!(result.basic_salary, Decimal::new(19934, 0));
/// assert_eq!(result.hra, Decimal::new(7974, 0));
/// assert_eq!(result.special_allowance, Decimal::new(11959, 0));
/// ```
pub fn split_earnings(
    gross_monthly: Decimal,
    rounding: RoundingMode,
    step_number: u32,
) -> EarningsSplitResult {
    let basic_salary = rounding.round_to_unit(gross_monthly * basic_share());
    let hra = rounding.round_to_unit(basic_salary * hra_share());
    let special_allowance = gross_monthly - basic_salary - hra;

    let audit_step = AuditStep {
        step_number,
        rule_id: "earnings_split".to_string(),
        rule_name: "Earnings Split".to_string(),
        input: serde_json::json!({
            "gross_monthly": gross_monthly.normalize().to_string(),
            "basic_share": basic_share().to_string(),
            "hra_share": hra_share().to_string(),
        }),
        output: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "hra": hra.normalize().to_string(),
            "special_allowance": special_allowance.normalize().to_string(),
        }),
        reasoning: format!(
            "basic = round({} x 0.5) = {}; hra = round({} x 0.4) = {}; special = residual {}",
            gross_monthly.normalize(),
            basic_salary.normalize(),
            basic_salary.normalize(),
            hra.normalize(),
            special_allowance.normalize()
        ),
    };

    EarningsSplitResult {
        basic_salary,
        hra,
        special_allowance,
        audit_step,
    }
}
