//! Batch payslip generation across a compensation ledger.
//!
//! This module drives the calculator over every revision in an employee's
//! ledger. Payroll generation is a best-effort side effect of onboarding:
//! a single malformed revision is recorded as a failure and never blocks
//! generation for the remaining revisions.

use std::collections::HashSet;

use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::StatutoryConfig;
use crate::error::EngineError;
use crate::models::{CompensationLedger, CompensationRecord, EmployeeIdentity, Payslip};

use super::calculator::compute_payslip;

/// A compensation record that could not be turned into a payslip.
#[derive(Debug)]
pub struct BatchFailure {
    /// The record's position in the ledger.
    pub index: usize,
    /// The offending record.
    pub record: CompensationRecord,
    /// Why the computation failed.
    pub error: EngineError,
}

/// The result of running the calculator across a ledger: the payslips that
/// could be computed plus the records that failed.
///
/// `emitted.len() + failures.len()` always equals the ledger length.
/// Callers are expected to persist the payslips through their own record
/// store and surface the failures as non-fatal warnings.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully computed payslips, in ledger order.
    pub emitted: Vec<Payslip>,
    /// Records that failed, in ledger order, with their errors.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Returns the number of records processed (successes plus failures).
    pub fn total(&self) -> usize {
        self.emitted.len() + self.failures.len()
    }
}

/// Generates a payslip for every compensation revision in the ledger.
///
/// Records are processed strictly in ledger (insertion) order. Each failure
/// is caught, logged, and recorded; the batch always runs to completion.
/// Two records resolving to the same calendar month both emit a payslip —
/// the engine does not de-duplicate periods, it only logs the collision.
/// An empty ledger yields an empty outcome.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::generate_payslips;
/// use payslip_engine::config::StatutoryConfig;
/// use payslip_engine::models::{CompensationLedger, CompensationRecord, EmployeeIdentity};
///
/// let ledger = CompensationLedger::from(vec![
///     CompensationRecord::new("500000", "2024-06-15"),
///     CompensationRecord::new("N/A", "2024-09-01"),
/// ]);
/// let identity = EmployeeIdentity {
///     employee_id: "emp_001".to_string(),
///     name: "Asha Verma".to_string(),
///     email: "asha.verma@example.com".to_string(),
///     department: "Engineering".to_string(),
///     position: "Software Engineer".to_string(),
/// };
///
/// let outcome = generate_payslips(&ledger, &identity, &StatutoryConfig::default());
/// assert_eq!(outcome.emitted.len(), 1);
/// assert_eq!(outcome.failures.len(), 1);
/// assert_eq!(outcome.total(), ledger.len());
/// ```
pub fn generate_payslips(
    ledger: &CompensationLedger,
    identity: &EmployeeIdentity,
    config: &StatutoryConfig,
) -> BatchOutcome {
    let span = info_span!(
        "payslip_batch",
        batch_id = %Uuid::new_v4(),
        employee_id = %identity.employee_id,
        records = ledger.len()
    );
    let _guard = span.enter();

    let mut emitted: Vec<Payslip> = Vec::with_capacity(ledger.len());
    let mut failures: Vec<BatchFailure> = Vec::new();
    let mut seen_periods: HashSet<(i32, u32)> = HashSet::new();

    for (index, record) in ledger.records().iter().enumerate() {
        match compute_payslip(record, identity, config) {
            Ok(computation) => {
                for warning in &computation.audit_trace.warnings {
                    warn!(index, code = %warning.code, "{}", warning.message);
                }

                let payslip = computation.payslip;
                if !seen_periods.insert((payslip.year, payslip.month)) {
                    warn!(
                        index,
                        year = payslip.year,
                        month = payslip.month,
                        "Ledger holds a second revision for this pay period; emitting both payslips"
                    );
                }
                emitted.push(payslip);
            }
            Err(error) => {
                warn!(index, error = %error, "Skipping compensation record");
                failures.push(BatchFailure {
                    index,
                    record: record.clone(),
                    error,
                });
            }
        }
    }

    info!(
        emitted = emitted.len(),
        failed = failures.len(),
        "Payslip batch complete"
    );

    BatchOutcome { emitted, failures }
}
