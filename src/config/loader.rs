//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RoundingMode, StatutoryConfig};

/// Loads and provides access to statutory configuration.
///
/// The `ConfigLoader` reads a single YAML file holding the statutory rates
/// the calculator applies.
///
/// # File Structure
///
/// ```text
/// provident_fund:
///   employer_monthly: 1800
///   employer_yearly: 21600
///   employee_monthly: 1800
/// professional_tax:
///   monthly: 200
/// rounding: midpoint_away_from_zero
/// validation:
///   reject_negative_net: true
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory.yaml").unwrap();
/// println!("Professional tax: {}", loader.config().professional_tax.monthly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads statutory configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/statutory.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or fails validation (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payslip_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/statutory.yaml")?;
    /// # Ok::<(), payslip_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: StatutoryConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&config, &path_str)?;

        Ok(Self { config })
    }

    /// Rejects rate figures a calculator could never meaningfully apply.
    fn validate(config: &StatutoryConfig, path: &str) -> EngineResult<()> {
        let pf = &config.provident_fund;
        if pf.employer_monthly.is_sign_negative()
            || pf.employer_yearly.is_sign_negative()
            || pf.employee_monthly.is_sign_negative()
            || config.professional_tax.monthly.is_sign_negative()
        {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "statutory rates must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the configured rounding mode.
    pub fn rounding(&self) -> RoundingMode {
        self.config.rounding
    }

    /// Returns whether negative net salaries are rejected.
    pub fn reject_negative_net(&self) -> bool {
        self.config.validation.reject_negative_net
    }
}
