//! Account metadata consumed by the aggregator.

use std::collections::{BTreeMap, HashMap};

use coop_shared::types::{AccountId, CurrencyId};
use serde::{Deserialize, Serialize};

use super::classification::AccountClassification;

/// Operational type of an account.
///
/// Deserializes through [`AccountType::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum AccountType {
    /// Savings deposit.
    Deposit,
    /// Time deposit.
    TimeDeposit,
    /// Loan receivable.
    Loan,
    /// Fines receivable.
    Fines,
    /// Interest receivable or payable.
    Interest,
    /// Share-capital/SVF ledger.
    SvfLedger,
    /// Written-off receivables.
    WriteOff,
    /// Accounts payable ledger.
    ApLedger,
    /// Accounts receivable ledger.
    ArLedger,
    /// Accounts receivable aging.
    ArAging,
    /// Anything else.
    Other,
}

impl AccountType {
    /// Parses a stored account-type label (e.g. `"A/R-Ledger"`, `"Time Deposit"`).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "deposit" => Self::Deposit,
            "timedeposit" => Self::TimeDeposit,
            "loan" => Self::Loan,
            "fines" => Self::Fines,
            "interest" => Self::Interest,
            "svfledger" => Self::SvfLedger,
            "woff" | "writeoff" => Self::WriteOff,
            "apledger" => Self::ApLedger,
            "arledger" => Self::ArLedger,
            "araging" => Self::ArAging,
            _ => Self::Other,
        }
    }
}

impl From<String> for AccountType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// A ledger account as seen by the engine. Read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account ID.
    pub id: AccountId,
    /// General-ledger classification, which fixes the sign convention.
    pub classification: AccountClassification,
    /// Operational type.
    pub account_type: AccountType,
    /// Currency the account is kept in.
    pub currency_id: Option<CurrencyId>,
}

/// Resolves account references to account metadata.
///
/// Supplied by the caller; the engine never loads accounts itself.
pub trait AccountLookup {
    /// Returns the account for `id`, if known.
    fn account(&self, id: AccountId) -> Option<&Account>;
}

impl AccountLookup for HashMap<AccountId, Account> {
    fn account(&self, id: AccountId) -> Option<&Account> {
        self.get(&id)
    }
}

impl AccountLookup for BTreeMap<AccountId, Account> {
    fn account(&self, id: AccountId) -> Option<&Account> {
        self.get(&id)
    }
}

/// Builds a lookup map from a list of accounts.
#[must_use]
pub fn index_accounts<I>(accounts: I) -> HashMap<AccountId, Account>
where
    I: IntoIterator<Item = Account>,
{
    accounts.into_iter().map(|a| (a.id, a)).collect()
}
