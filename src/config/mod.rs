//! Statutory rate configuration for the payslip computation engine.
//!
//! This module provides functionality to load statutory rates from a YAML
//! file, including provident fund contributions, professional tax, the
//! rounding mode, and the validation policy.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/statutory.yaml").unwrap();
//! println!("Employee PF: {}", loader.config().provident_fund.employee_monthly);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ProfessionalTaxRate, ProvidentFundRates, RoundingMode, StatutoryConfig, ValidationPolicy,
};
