//! Loan charge, schedule and deduction computation.
//!
//! This module implements:
//! - Charge rate schemes (by range, by member type, by term)
//! - Installment counts, amounts and suggested terms
//! - Automatic loan deductions
//! - Fines and interest per installment period

pub mod charges;
pub mod deduction;
pub mod error;
pub mod fines;
pub mod interest;
pub mod schedule;
pub mod types;

#[cfg(test)]
mod schedule_props;

pub use charges::{
    AmountBand, ChargesRateScheme, MAX_RATE_TIERS, RangeBand, RateTier, TermSchedule, last_rate,
    period_charge,
};
pub use deduction::{Annualization, AutomaticLoanDeduction};
pub use error::LoanError;
pub use fines::{FinesInput, GracePeriodTable, MATURITY_THRESHOLD_DAYS, compute_fines};
pub use interest::{periodic_interest, straight_interest};
pub use schedule::{LoanSchedule, installment_amount, number_of_installments, suggested_terms};
pub use types::{LoanModeOfPayment, LoanTransaction};
