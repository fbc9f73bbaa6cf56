//! General-ledger classification and normal-balance rules.
//!
//! - Assets/Expenses: balance += debit - credit (debit-normal)
//! - Liabilities/Equity/Revenue: balance += credit - debit (credit-normal)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::DecimalService;

/// General-ledger classification of an account.
///
/// Deserializes through [`AccountClassification::from_name`], so stored
/// names in any case or number are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AccountClassification {
    /// Assets.
    Assets,
    /// Liabilities.
    Liabilities,
    /// Equity.
    Equity,
    /// Revenue.
    Revenue,
    /// Expenses.
    Expenses,
    /// A classification the engine does not recognize.
    ///
    /// Follows the Assets convention.
    Other,
}

impl AccountClassification {
    /// Parses a stored classification name, case-insensitively.
    ///
    /// Singular and plural spellings are both accepted. Anything else
    /// becomes [`AccountClassification::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "asset" | "assets" => Self::Assets,
            "liability" | "liabilities" => Self::Liabilities,
            "equity" => Self::Equity,
            "revenue" | "revenues" | "income" => Self::Revenue,
            "expense" | "expenses" => Self::Expenses,
            _ => Self::Other,
        }
    }

    /// Returns the side that increases this account's balance.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Liabilities | Self::Equity | Self::Revenue => NormalBalance::Credit,
            // Other intentionally shares the asset rule
            Self::Assets | Self::Expenses | Self::Other => NormalBalance::Debit,
        }
    }
}

impl From<String> for AccountClassification {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for AccountClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// The side on which an account normally carries its balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Assets, Expenses).
    Debit,
    /// Credit-normal accounts (Liabilities, Equity, Revenue).
    Credit,
}

impl NormalBalance {
    /// Calculates the balance change for an entry.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => DecimalService::subtract(debit, credit),
            Self::Credit => DecimalService::subtract(credit, debit),
        }
    }
}

/// Signed effect of one entry on an account of the given classification.
#[must_use]
pub fn signed_delta(
    classification: AccountClassification,
    debit: Decimal,
    credit: Decimal,
) -> Decimal {
    classification.normal_balance().balance_change(debit, credit)
}
