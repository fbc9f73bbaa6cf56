//! Ledger aggregation and loan/savings computation for cooperative banks.
//!
//! This crate contains pure computation with ZERO I/O.
//! Callers supply entries, account metadata and loan/savings parameters;
//! every operation returns plain values.
//!
//! # Modules
//!
//! - `decimal` - Exact money arithmetic and rounding
//! - `ledger` - Sign conventions, balance aggregation, running balances
//! - `loan` - Charge schemes, schedules, deductions, fines and interest
//! - `savings` - Savings interest accrual and ending balances
//! - `error` - Error taxonomy shared by the modules

pub mod decimal;
pub mod error;
pub mod ledger;
pub mod loan;
pub mod savings;

pub use decimal::{DecimalService, MONEY_SCALE, RoundingMode};
pub use error::ErrorKind;
pub use ledger::LedgerError;
pub use loan::LoanError;
