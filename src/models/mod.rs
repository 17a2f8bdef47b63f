//! Core data models for the payslip computation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod employee;
mod pay_period;
mod payslip;

pub use compensation::{CompensationLedger, CompensationRecord};
pub use employee::EmployeeIdentity;
pub use pay_period::PayPeriod;
pub use payslip::{
    AuditStep, AuditTrace, AuditWarning, Payslip, PayslipComputation, PayslipStatus,
};
