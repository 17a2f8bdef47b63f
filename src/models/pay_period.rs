//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing the calendar
//! month a payslip covers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The calendar month a payslip covers.
///
/// A pay period always spans one full calendar month: the first day of the
/// month through the last day of the month at end-of-day (23:59:59).
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::for_month(2024, 6).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(period.end_date.to_string(), "2024-06-30 23:59:59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first calendar day of the period.
    pub start_date: NaiveDate,
    /// The last calendar day of the period, at end-of-day.
    pub end_date: NaiveDateTime,
}

impl PayPeriod {
    /// Builds the pay period for a given calendar month.
    ///
    /// Returns `None` if `month` is not in `1..=12` or the date is out of
    /// chrono's representable range.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::PayPeriod;
    ///
    /// // February in a leap year runs through the 29th.
    /// let period = PayPeriod::for_month(2024, 2).unwrap();
    /// assert_eq!(period.end_date.to_string(), "2024-02-29 23:59:59");
    ///
    /// assert!(PayPeriod::for_month(2024, 13).is_none());
    /// ```
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end_date = first_of_next.pred_opt()?.and_hms_opt(23, 59, 59)?;
        Some(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PP-001: June 2024 runs 1st through 30th end-of-day
    #[test]
    fn test_for_month_june() {
        let period = PayPeriod::for_month(2024, 6).unwrap();
        assert_eq!(
            period.start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            period.end_date,
            NaiveDate::from_ymd_opt(2024, 6, 30)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap()
        );
    }

    /// PP-002: December rolls the year for the end bound
    #[test]
    fn test_for_month_december() {
        let period = PayPeriod::for_month(2024, 12).unwrap();
        assert_eq!(
            period.end_date.date(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    /// PP-003: leap and non-leap February
    #[test]
    fn test_for_month_february() {
        let leap = PayPeriod::for_month(2024, 2).unwrap();
        assert_eq!(
            leap.end_date.date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let non_leap = PayPeriod::for_month(2023, 2).unwrap();
        assert_eq!(
            non_leap.end_date.date(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    /// PP-004: invalid month yields None
    #[test]
    fn test_for_month_invalid_month() {
        assert!(PayPeriod::for_month(2024, 0).is_none());
        assert!(PayPeriod::for_month(2024, 13).is_none());
    }

    #[test]
    fn test_contains_date_bounds() {
        let period = PayPeriod::for_month(2024, 6).unwrap();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::for_month(2024, 6).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2024-06-01\""));
        assert!(json.contains("\"end_date\":\"2024-06-30T23:59:59\""));
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "start_date": "2024-06-01",
            "end_date": "2024-06-30T23:59:59"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, PayPeriod::for_month(2024, 6).unwrap());
    }
}
