//! Ledger balance aggregation.
//!
//! This module implements:
//! - Account metadata and the caller-supplied account lookup
//! - Classification sign conventions
//! - Entry kinds and their common view
//! - Balance aggregation and strict double-entry checks
//! - Running balance stamping for general-ledger lines

pub mod account;
pub mod balance;
pub mod classification;
pub mod entry;
pub mod error;
pub mod running;

#[cfg(test)]
mod balance_props;

pub use account::{Account, AccountLookup, AccountType, index_accounts};
pub use balance::{BalanceAggregator, BalanceRequest, BalanceSummary, EntryTotals};
pub use classification::{AccountClassification, NormalBalance, signed_delta};
pub use entry::{
    AdjustmentEntry, CashCheckVoucherEntry, EntryKind, EntrySource, GeneralLedgerEntry,
    JournalVoucherEntry, LoanTransactionEntry,
};
pub use error::LedgerError;
pub use running::{RunningBalance, stamp_running_balances};
