//! Statutory deduction calculation.
//!
//! This module applies the fixed statutory deductions: employee provident
//! fund, professional tax, and an income tax placeholder held at zero
//! ("as applicable"; real tax-bracket computation is out of scope).

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::AuditStep;

/// The result of applying statutory deductions.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// Employee provident fund deduction.
    pub pf_employee: Decimal,
    /// Professional tax deduction.
    pub professional_tax: Decimal,
    /// Income tax placeholder (always zero).
    pub income_tax: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the fixed statutory deductions from configuration.
///
/// Deductions do not scale with gross pay: the same figures apply to every
/// payslip regardless of compensation level.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_deductions;
/// use payslip_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_deductions(&StatutoryConfig::default(), 4);
/// assert_eq!(result.pf_employee, Decimal::new(1800, 0));
/// assert_eq!(result.professional_tax, Decimal::new(200, 0));
/// assert_eq!(result.income_tax, Decimal::ZERO);
/// assert_eq!(result.total_deductions, Decimal::new(2000, 0));
/// ```
pub fn calculate_deductions(config: &StatutoryConfig, step_number: u32) -> DeductionsResult {
    let pf_employee = config.provident_fund.employee_monthly;
    let professional_tax = config.professional_tax.monthly;
    let income_tax = Decimal::ZERO;
    let total_deductions = pf_employee + professional_tax + income_tax;

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        input: serde_json::json!({
            "pf_employee_monthly": pf_employee.normalize().to_string(),
            "professional_tax_monthly": professional_tax.normalize().to_string(),
        }),
        output: serde_json::json!({
            "pf_employee": pf_employee.normalize().to_string(),
            "professional_tax": professional_tax.normalize().to_string(),
            "income_tax": income_tax.to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
        }),
        reasoning: format!(
            "{} PF + {} professional tax + {} income tax = {} total",
            pf_employee.normalize(),
            professional_tax.normalize(),
            income_tax,
            total_deductions.normalize()
        ),
    };

    DeductionsResult {
        pf_employee,
        professional_tax,
        income_tax,
        total_deductions,
        audit_step,
    }
}
