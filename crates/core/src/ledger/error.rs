//! Ledger error types for aggregation and balance checks.

use coop_shared::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::EntryKind;
use crate::error::ErrorKind;

/// Errors that can occur during ledger aggregation.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// A collection slot held no entry.
    #[error("Nil {kind} entry at index {index}")]
    NilEntry {
        /// Collection the slot belongs to.
        kind: EntryKind,
        /// Position within the collection.
        index: usize,
    },

    /// An entry has no account reference.
    #[error("{kind} entry at index {index} has no account")]
    MissingAccount {
        /// Collection the entry belongs to.
        kind: EntryKind,
        /// Position within the collection.
        index: usize,
    },

    // ========== Lookup Errors ==========
    /// The account lookup could not resolve a reference.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    // ========== Imbalance Errors ==========
    /// Total debits differ from total credits.
    #[error("Entries are not balanced. Debit: {debit}, Credit: {credit}, Delta: {delta}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
        /// `debit - credit`.
        delta: Decimal,
    },

    /// The signed balance is not zero.
    #[error("Signed balance is not zero. Delta: {delta}")]
    NonZeroBalance {
        /// The computed signed balance.
        delta: Decimal,
    },

    /// Total debits are negative.
    #[error("Total debit is negative: {debit}")]
    NegativeDebit {
        /// Total debit amount.
        debit: Decimal,
        /// Signed balance at the time of the check.
        delta: Decimal,
    },
}

impl LedgerError {
    /// Returns the error class.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NilEntry { .. } | Self::MissingAccount { .. } => ErrorKind::Validation,
            Self::AccountNotFound(_) => ErrorKind::Lookup,
            Self::Unbalanced { .. } | Self::NonZeroBalance { .. } | Self::NegativeDebit { .. } => {
                ErrorKind::Imbalance
            }
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NilEntry { .. } => "NIL_ENTRY",
            Self::MissingAccount { .. } => "MISSING_ACCOUNT",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::Unbalanced { .. } => "UNBALANCED_ENTRIES",
            Self::NonZeroBalance { .. } => "NON_ZERO_BALANCE",
            Self::NegativeDebit { .. } => "NEGATIVE_DEBIT",
        }
    }

    /// Returns the numeric delta carried by imbalance errors.
    #[must_use]
    pub const fn delta(&self) -> Option<Decimal> {
        match self {
            Self::Unbalanced { delta, .. }
            | Self::NonZeroBalance { delta }
            | Self::NegativeDebit { delta, .. } => Some(*delta),
            _ => None,
        }
    }
}
