//! Error types for the payslip computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while deriving payslips from
//! compensation records.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payslip computation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A compensation record carried a missing, non-numeric, or
    /// non-positive yearly CTC figure.
    #[error("Invalid compensation '{ctc_yearly}' for employee '{employee_id}': {message}")]
    InvalidCompensation {
        /// The employee the record belongs to.
        employee_id: String,
        /// The raw CTC figure as entered.
        ctc_yearly: String,
        /// A description of what made the figure invalid.
        message: String,
    },

    /// A compensation record carried an effective date that could not be
    /// parsed as a year and month.
    #[error("Invalid effective date '{effective_date}': {message}")]
    InvalidDate {
        /// The raw effective date as entered.
        effective_date: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The computed net salary came out negative and the validation policy
    /// rejects negative net pay.
    #[error(
        "Negative net salary {net_salary} for employee '{employee_id}' in period {year}-{month:02}"
    )]
    NegativeNetSalary {
        /// The employee the payslip was computed for.
        employee_id: String,
        /// The pay period year.
        year: i32,
        /// The pay period month (1-12).
        month: u32,
        /// The computed net salary.
        net_salary: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/statutory.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/statutory.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_compensation_names_record() {
        let error = EngineError::InvalidCompensation {
            employee_id: "emp_001".to_string(),
            ctc_yearly: "N/A".to_string(),
            message: "ctc_yearly is not a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid compensation 'N/A' for employee 'emp_001': ctc_yearly is not a number"
        );
    }

    #[test]
    fn test_invalid_date_displays_raw_value() {
        let error = EngineError::InvalidDate {
            effective_date: "June 2024".to_string(),
            message: "expected YYYY-MM or YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid effective date 'June 2024': expected YYYY-MM or YYYY-MM-DD"
        );
    }

    #[test]
    fn test_negative_net_salary_displays_period_and_amount() {
        let error = EngineError::NegativeNetSalary {
            employee_id: "emp_001".to_string(),
            year: 2024,
            month: 6,
            net_salary: Decimal::from_str("-2000").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Negative net salary -2000 for employee 'emp_001' in period 2024-06"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
