//! Effective pay period resolution.
//!
//! This module parses a compensation record's effective date and resolves
//! the calendar month it falls in. The day component is accepted but
//! ignored: a revision effective mid-month is paid for the whole month.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PayPeriod};

/// The result of resolving an effective date, including the pay period and
/// audit step.
#[derive(Debug, Clone)]
pub struct EffectivePeriodResult {
    /// The pay period year.
    pub year: i32,
    /// The pay period month (1-12).
    pub month: u32,
    /// The calendar month the payslip covers.
    pub period: PayPeriod,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the pay period for a raw effective date.
///
/// Accepts `YYYY-MM-DD` or `YYYY-MM`. The pay period is the calendar month
/// containing the effective date: day 1 through the last day of the month
/// at 23:59:59.
///
/// # Arguments
///
/// * `effective_date` - The raw effective date as entered
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `EffectivePeriodResult`, or `InvalidDate` when the input is
/// not parseable as a year and month.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::resolve_effective_period;
/// use chrono::NaiveDate;
///
/// let result = resolve_effective_period("2024-06-15", 1).unwrap();
/// assert_eq!((result.year, result.month), (2024, 6));
/// assert_eq!(
///     result.period.start_date,
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
/// );
///
/// assert!(resolve_effective_period("June 2024", 1).is_err());
/// ```
pub fn resolve_effective_period(
    effective_date: &str,
    step_number: u32,
) -> EngineResult<EffectivePeriodResult> {
    let raw = effective_date.trim();

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .map_err(|_| EngineError::InvalidDate {
            effective_date: effective_date.to_string(),
            message: "expected YYYY-MM or YYYY-MM-DD".to_string(),
        })?;

    let year = parsed.year();
    let month = parsed.month();
    let period = PayPeriod::for_month(year, month).ok_or_else(|| EngineError::InvalidDate {
        effective_date: effective_date.to_string(),
        message: "month is outside the representable calendar range".to_string(),
    })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "effective_period".to_string(),
        rule_name: "Effective Period Resolution".to_string(),
        input: serde_json::json!({
            "effective_date": effective_date,
        }),
        output: serde_json::json!({
            "year": year,
            "month": month,
            "period_start": period.start_date.to_string(),
            "period_end": period.end_date.to_string(),
        }),
        reasoning: format!(
            "Effective date {} falls in {}-{:02}; pay period runs {} through {}",
            raw, year, month, period.start_date, period.end_date
        ),
    };

    Ok(EffectivePeriodResult {
        year,
        month,
        period,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// EP-001: full date resolves to its calendar month
    #[test]
    fn test_full_date_resolves_month() {
        let result = resolve_effective_period("2024-06-15", 1).unwrap();

        assert_eq!(result.year, 2024);
        assert_eq!(result.month, 6);
        assert_eq!(
            result.period.start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            result.period.end_date,
            NaiveDate::from_ymd_opt(2024, 6, 30)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap()
        );
    }

    /// EP-002: day component is ignored
    #[test]
    fn test_day_component_ignored() {
        let first = resolve_effective_period("2024-06-01", 1).unwrap();
        let mid = resolve_effective_period("2024-06-15", 1).unwrap();
        let last = resolve_effective_period("2024-06-30", 1).unwrap();

        assert_eq!(first.period, mid.period);
        assert_eq!(mid.period, last.period);
    }

    /// EP-003: year-month form accepted
    #[test]
    fn test_year_month_form_accepted() {
        let result = resolve_effective_period("2024-06", 1).unwrap();
        assert_eq!((result.year, result.month), (2024, 6));
    }

    /// EP-004: unparseable date returns InvalidDate
    #[test]
    fn test_unparseable_date_returns_error() {
        let result = resolve_effective_period("June 2024", 1);

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidDate {
                effective_date,
                message,
            } => {
                assert_eq!(effective_date, "June 2024");
                assert!(message.contains("YYYY-MM"));
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    /// EP-005: empty date returns InvalidDate
    #[test]
    fn test_empty_date_returns_error() {
        assert!(resolve_effective_period("", 1).is_err());
        assert!(resolve_effective_period("   ", 1).is_err());
    }

    /// EP-006: nonexistent calendar day rejected
    #[test]
    fn test_nonexistent_day_rejected() {
        assert!(resolve_effective_period("2023-02-29", 1).is_err());
        assert!(resolve_effective_period("2024-13-01", 1).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        let result = resolve_effective_period(" 2024-06-15 ", 1).unwrap();
        assert_eq!((result.year, result.month), (2024, 6));
    }

    #[test]
    fn test_audit_step_records_resolution() {
        let result = resolve_effective_period("2024-06-15", 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "effective_period");
        assert_eq!(result.audit_step.output["year"], 2024);
        assert_eq!(result.audit_step.output["month"], 6);
        assert_eq!(
            result.audit_step.output["period_start"].as_str().unwrap(),
            "2024-06-01"
        );
        assert!(result.audit_step.reasoning.contains("2024-06"));
    }

    #[test]
    fn test_december_period_end() {
        let result = resolve_effective_period("2024-12-05", 1).unwrap();
        assert_eq!(
            result.period.end_date.date(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }
}
