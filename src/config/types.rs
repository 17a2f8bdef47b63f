//! Configuration types for statutory rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the statutory YAML configuration file. Defaults
//! match the rates the engine shipped with, so the engine is usable
//! without a configuration file.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

/// Provident fund contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProvidentFundRates {
    /// The employer's monthly PF contribution.
    pub employer_monthly: Decimal,
    /// The employer's yearly PF contribution, subtracted from CTC to
    /// derive gross pay.
    pub employer_yearly: Decimal,
    /// The employee's monthly PF deduction.
    pub employee_monthly: Decimal,
}

impl Default for ProvidentFundRates {
    fn default() -> Self {
        Self {
            employer_monthly: Decimal::new(1800, 0),
            employer_yearly: Decimal::new(21600, 0),
            employee_monthly: Decimal::new(1800, 0),
        }
    }
}

/// Professional tax rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfessionalTaxRate {
    /// The monthly professional tax deduction.
    pub monthly: Decimal,
}

impl Default for ProfessionalTaxRate {
    fn default() -> Self {
        Self {
            monthly: Decimal::new(200, 0),
        }
    }
}

/// The rounding applied when deriving whole-unit monthly amounts.
///
/// # Example
///
/// ```
/// use payslip_engine::config::RoundingMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mode = RoundingMode::default();
/// let rounded = mode.round_to_unit(Decimal::from_str("19933.5").unwrap());
/// assert_eq!(rounded, Decimal::from_str("19934").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Nearest integer, ties rounding away from zero (0.5 rounds up).
    MidpointAwayFromZero,
    /// Nearest integer, ties rounding to the nearest even integer.
    MidpointNearestEven,
    /// Nearest integer, ties rounding toward zero.
    MidpointTowardZero,
}

impl RoundingMode {
    /// Rounds a value to a whole unit under this mode.
    pub fn round_to_unit(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(0, self.strategy())
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::MidpointAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::MidpointNearestEven => RoundingStrategy::MidpointNearestEven,
            Self::MidpointTowardZero => RoundingStrategy::MidpointTowardZero,
        }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        Self::MidpointAwayFromZero
    }
}

/// Validation policy toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValidationPolicy {
    /// Whether a computed negative net salary fails the record instead of
    /// flowing through. The legacy system let negative figures through
    /// unguarded; the default here is to reject.
    #[serde(default = "default_reject_negative_net")]
    pub reject_negative_net: bool,
}

fn default_reject_negative_net() -> bool {
    true
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            reject_negative_net: true,
        }
    }
}

/// The complete statutory configuration consumed by the calculator.
///
/// # Example
///
/// ```
/// use payslip_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// assert_eq!(config.provident_fund.employee_monthly, Decimal::new(1800, 0));
/// assert!(config.validation.reject_negative_net);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatutoryConfig {
    /// Provident fund contribution rates.
    #[serde(default)]
    pub provident_fund: ProvidentFundRates,
    /// Professional tax rate.
    #[serde(default)]
    pub professional_tax: ProfessionalTaxRate,
    /// The rounding mode for monthly amount derivation.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Validation policy toggles.
    #[serde(default)]
    pub validation: ValidationPolicy,
}

impl StatutoryConfig {
    /// Returns a configuration that lets negative net salaries flow
    /// through instead of rejecting them, matching the legacy behavior.
    pub fn permissive() -> Self {
        Self {
            validation: ValidationPolicy {
                reject_negative_net: false,
            },
            ..Self::default()
        }
    }
}
