//! Payslip models for the payslip computation engine.
//!
//! This module contains the [`Payslip`] type and its associated structures
//! that capture all outputs from a payslip computation, including the
//! earnings breakdown, statutory deductions, totals, and audit traces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Represents the lifecycle status of a payslip.
///
/// The engine only ever emits [`PayslipStatus::Processed`]; the transition
/// to [`PayslipStatus::Paid`] belongs to the external record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// The payslip has been computed and is ready for persistence.
    Processed,
    /// The payslip has been paid out.
    Paid,
}

/// A fully itemized monthly payslip.
///
/// Several earnings fields are fixed at zero by this engine
/// (`transport_allowance`, `medical_allowance`, `performance_bonus`,
/// `other_allowances`, `overtime_amount`); they are retained for schema
/// compatibility with manually issued slips. `working_days` and
/// `present_days` carry a full-attendance placeholder, not figures derived
/// from actual attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The ID of the employee the payslip is for.
    pub employee_id: String,
    /// The pay period month (1-12).
    pub month: u32,
    /// The pay period year.
    pub year: i32,
    /// The calendar month this payslip covers.
    pub pay_period: PayPeriod,
    /// Basic salary, half of the monthly gross (rounded).
    pub basic_salary: Decimal,
    /// House rent allowance, 40% of basic salary (rounded).
    pub hra: Decimal,
    /// The residual of monthly gross after basic and HRA.
    pub special_allowance: Decimal,
    /// Transport allowance (fixed at zero).
    pub transport_allowance: Decimal,
    /// Medical allowance (fixed at zero).
    pub medical_allowance: Decimal,
    /// Performance bonus (fixed at zero).
    pub performance_bonus: Decimal,
    /// Other allowances (fixed at zero).
    pub other_allowances: Decimal,
    /// Overtime amount (fixed at zero).
    pub overtime_amount: Decimal,
    /// Total earnings before deductions.
    pub gross_earnings: Decimal,
    /// Employer provident fund contribution.
    pub pf_employer: Decimal,
    /// Employer state insurance contribution (fixed at zero).
    pub esi_employer: Decimal,
    /// Employee provident fund deduction.
    pub pf_employee: Decimal,
    /// Professional tax deduction.
    pub professional_tax: Decimal,
    /// Income tax deduction ("as applicable" placeholder, fixed at zero).
    pub income_tax: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross earnings minus total deductions.
    pub net_salary: Decimal,
    /// Working days in the period (full-attendance placeholder).
    pub working_days: u32,
    /// Days present in the period (full-attendance placeholder).
    pub present_days: u32,
    /// The lifecycle status of the payslip.
    pub status: PayslipStatus,
}

impl Payslip {
    /// Sums every earnings component, including the zero-valued
    /// placeholders. Always equals `gross_earnings` for payslips emitted by
    /// this engine.
    pub fn earnings_total(&self) -> Decimal {
        self.basic_salary
            + self.hra
            + self.special_allowance
            + self.transport_allowance
            + self.medical_allowance
            + self.performance_bonus
            + self.other_allowances
            + self.overtime_amount
    }

    /// Sums every deduction component. Always equals `total_deductions`
    /// for payslips emitted by this engine.
    pub fn deductions_total(&self) -> Decimal {
        self.pf_employee + self.professional_tax + self.income_tax
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of
/// the payslip derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during computation.
///
/// Warnings indicate potential issues that don't prevent computation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one payslip computation.
///
/// Records every decision made during the computation. The trace is fully
/// deterministic: recomputing the same record yields an identical trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during computation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of one payslip computation: the payslip itself plus
/// the audit trace explaining how it was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipComputation {
    /// The computed payslip.
    pub payslip: Payslip,
    /// The audit trace for the computation.
    pub audit_trace: AuditTrace,
}
