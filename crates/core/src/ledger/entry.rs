//! Entry kinds consumed by the balance aggregator.
//!
//! Every kind exposes the same view through [`EntrySource`]: debit and
//! credit amounts, an optional account reference, an optional date, an
//! optional currency and the add-on flag.

use chrono::{DateTime, Utc};
use coop_shared::types::{AccountId, CurrencyId, EntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The collection an entry came from, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// General ledger.
    GeneralLedger,
    /// Adjustment entry.
    Adjustment,
    /// Loan transaction entry.
    LoanTransaction,
    /// Cash/check voucher request entry.
    CashCheckVoucher,
    /// Journal voucher request entry.
    JournalVoucher,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::GeneralLedger => "general ledger",
            Self::Adjustment => "adjustment",
            Self::LoanTransaction => "loan transaction",
            Self::CashCheckVoucher => "cash/check voucher",
            Self::JournalVoucher => "journal voucher",
        };
        f.write_str(name)
    }
}

/// Common read-only view of a debit/credit entry.
pub trait EntrySource {
    /// Collection this entry kind belongs to.
    const KIND: EntryKind;

    /// Debit amount.
    fn debit(&self) -> Decimal;

    /// Credit amount.
    fn credit(&self) -> Decimal;

    /// Owning account, if the reference is set.
    fn account_id(&self) -> Option<AccountId>;

    /// Date the entry was posted, if known.
    fn entry_date(&self) -> Option<DateTime<Utc>>;

    /// Entry currency, if recorded on the entry itself.
    fn currency_id(&self) -> Option<CurrencyId> {
        None
    }

    /// Whether this entry is loan interest capitalized into principal.
    fn is_add_on(&self) -> bool {
        false
    }
}

/// A posted general-ledger line.
///
/// `balance` is the only mutable field; the running-balance stamper
/// writes the account's post-entry total into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralLedgerEntry {
    /// Entry ID.
    pub id: EntryId,
    /// Owning account.
    pub account_id: Option<AccountId>,
    /// Entry currency.
    pub currency_id: Option<CurrencyId>,
    /// Posting date.
    pub entry_date: DateTime<Utc>,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Running account balance after this entry.
    #[serde(default)]
    pub balance: Decimal,
}

impl GeneralLedgerEntry {
    /// Creates an entry with a zero running balance.
    #[must_use]
    pub fn new(
        account_id: Option<AccountId>,
        entry_date: DateTime<Utc>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            id: EntryId::new(),
            account_id,
            currency_id: None,
            entry_date,
            debit,
            credit,
            balance: Decimal::ZERO,
        }
    }
}

impl EntrySource for GeneralLedgerEntry {
    const KIND: EntryKind = EntryKind::GeneralLedger;

    fn debit(&self) -> Decimal {
        self.debit
    }

    fn credit(&self) -> Decimal {
        self.credit
    }

    fn account_id(&self) -> Option<AccountId> {
        self.account_id
    }

    fn entry_date(&self) -> Option<DateTime<Utc>> {
        Some(self.entry_date)
    }

    fn currency_id(&self) -> Option<CurrencyId> {
        self.currency_id
    }
}

/// A loan transaction line (release, amortization, capitalized interest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTransactionEntry {
    /// Entry ID.
    pub id: EntryId,
    /// Owning account.
    pub account_id: Option<AccountId>,
    /// Entry currency.
    pub currency_id: Option<CurrencyId>,
    /// Posting date.
    pub entry_date: DateTime<Utc>,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Loan interest capitalized into principal.
    #[serde(default)]
    pub is_add_on: bool,
}

impl LoanTransactionEntry {
    /// Creates an ordinary (non add-on) loan entry.
    #[must_use]
    pub fn new(
        account_id: Option<AccountId>,
        entry_date: DateTime<Utc>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            id: EntryId::new(),
            account_id,
            currency_id: None,
            entry_date,
            debit,
            credit,
            is_add_on: false,
        }
    }

    /// Marks the entry as capitalized add-on interest.
    #[must_use]
    pub fn add_on(mut self) -> Self {
        self.is_add_on = true;
        self
    }
}

impl EntrySource for LoanTransactionEntry {
    const KIND: EntryKind = EntryKind::LoanTransaction;

    fn debit(&self) -> Decimal {
        self.debit
    }

    fn credit(&self) -> Decimal {
        self.credit
    }

    fn account_id(&self) -> Option<AccountId> {
        self.account_id
    }

    fn entry_date(&self) -> Option<DateTime<Utc>> {
        Some(self.entry_date)
    }

    fn currency_id(&self) -> Option<CurrencyId> {
        self.currency_id
    }

    fn is_add_on(&self) -> bool {
        self.is_add_on
    }
}

/// Generates entry kinds whose date may be missing (drafts, requests).
macro_rules! undated_entry {
    ($name:ident, $kind:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// Entry ID.
            pub id: EntryId,
            /// Owning account.
            pub account_id: Option<AccountId>,
            /// Entry currency.
            pub currency_id: Option<CurrencyId>,
            /// Entry date, when one has been assigned.
            pub entry_date: Option<DateTime<Utc>>,
            /// Debit amount.
            pub debit: Decimal,
            /// Credit amount.
            pub credit: Decimal,
        }

        impl $name {
            /// Creates an entry.
            #[must_use]
            pub fn new(
                account_id: Option<AccountId>,
                entry_date: Option<DateTime<Utc>>,
                debit: Decimal,
                credit: Decimal,
            ) -> Self {
                Self {
                    id: EntryId::new(),
                    account_id,
                    currency_id: None,
                    entry_date,
                    debit,
                    credit,
                }
            }
        }

        impl EntrySource for $name {
            const KIND: EntryKind = $kind;

            fn debit(&self) -> Decimal {
                self.debit
            }

            fn credit(&self) -> Decimal {
                self.credit
            }

            fn account_id(&self) -> Option<AccountId> {
                self.account_id
            }

            fn entry_date(&self) -> Option<DateTime<Utc>> {
                self.entry_date
            }

            fn currency_id(&self) -> Option<CurrencyId> {
                self.currency_id
            }
        }
    };
}

undated_entry!(
    AdjustmentEntry,
    EntryKind::Adjustment,
    "A manual adjustment line."
);
undated_entry!(
    CashCheckVoucherEntry,
    EntryKind::CashCheckVoucher,
    "A line of a cash or check voucher request."
);
undated_entry!(
    JournalVoucherEntry,
    EntryKind::JournalVoucher,
    "A line of a journal voucher request."
);
