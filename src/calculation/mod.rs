//! Calculation logic for the payslip computation engine.
//!
//! This module contains all the calculation steps for deriving a payslip
//! from a compensation record: resolving the effective pay period,
//! deriving monthly gross pay from yearly CTC, splitting gross into
//! earnings components, applying statutory deductions, assembling the
//! final payslip, and driving the whole pipeline across a compensation
//! ledger.

mod batch;
mod calculator;
mod deductions;
mod earnings_split;
mod effective_period;
mod monthly_gross;

pub use batch::{BatchFailure, BatchOutcome, generate_payslips};
pub use calculator::{FULL_ATTENDANCE_DAYS, compute_payslip};
pub use deductions::{DeductionsResult, calculate_deductions};
pub use earnings_split::{EarningsSplitResult, basic_share, hra_share, split_earnings};
pub use effective_period::{EffectivePeriodResult, resolve_effective_period};
pub use monthly_gross::{MONTHS_PER_YEAR, MonthlyGrossResult, calculate_monthly_gross};
