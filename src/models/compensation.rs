//! Compensation revision models.
//!
//! This module defines the [`CompensationRecord`] and [`CompensationLedger`]
//! types. A compensation record is a dated yearly cost-to-company figure as
//! entered by an administrator; a ledger is one employee's ordered history
//! of such revisions.

use serde::{Deserialize, Serialize};

/// A single compensation revision as entered by an administrator.
///
/// Both fields are kept as raw strings: parsing and validation happen at
/// computation time so that a non-numeric CTC or an unparseable date fails
/// loudly for that record instead of being silently coerced.
///
/// # Example
///
/// ```
/// use payslip_engine::models::CompensationRecord;
///
/// let record = CompensationRecord::new("500000", "2024-06-15");
/// assert_eq!(record.ctc_yearly, "500000");
/// assert_eq!(record.effective_date, "2024-06-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRecord {
    /// The yearly cost-to-company figure as entered (e.g., "500000").
    pub ctc_yearly: String,
    /// The effective date as entered ("YYYY-MM-DD" or "YYYY-MM"; the day
    /// is ignored for pay period derivation).
    pub effective_date: String,
}

impl CompensationRecord {
    /// Creates a new compensation record from raw input.
    pub fn new(ctc_yearly: impl Into<String>, effective_date: impl Into<String>) -> Self {
        Self {
            ctc_yearly: ctc_yearly.into(),
            effective_date: effective_date.into(),
        }
    }
}

/// One employee's history of compensation revisions, in insertion order.
///
/// The batch generator processes records in this order, not by effective
/// date, matching how revisions are typically entered sequentially during
/// onboarding. The ledger performs no de-duplication and no reordering.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{CompensationLedger, CompensationRecord};
///
/// let mut ledger = CompensationLedger::new();
/// ledger.push(CompensationRecord::new("500000", "2024-06-15"));
/// ledger.push(CompensationRecord::new("550000", "2024-09-01"));
/// assert_eq!(ledger.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationLedger {
    records: Vec<CompensationRecord>,
}

impl CompensationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a compensation revision to the ledger.
    pub fn push(&mut self, record: CompensationRecord) {
        self.records.push(record);
    }

    /// Returns the revisions in insertion order.
    pub fn records(&self) -> &[CompensationRecord] {
        &self.records
    }

    /// Returns the number of revisions in the ledger.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the ledger holds no revisions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CompensationRecord>> for CompensationLedger {
    fn from(records: Vec<CompensationRecord>) -> Self {
        Self { records }
    }
}
