//! Compensation-to-payslip computation engine.
//!
//! This crate derives fully itemized monthly payslips from an employee's
//! history of compensation revisions (yearly cost-to-company figures with
//! effective dates), applying fixed statutory deductions and a deterministic
//! earnings breakdown.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
