//! Savings value types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::DecimalService;

/// Which daily balance stands for the whole period.
///
/// Unrecognized labels deserialize as [`SavingsPolicy::Lowest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SavingsPolicy {
    /// Lowest daily balance.
    #[default]
    Lowest,
    /// Highest daily balance.
    Highest,
    /// Mean of the daily balances.
    Average,
    /// First daily balance.
    Start,
    /// Last daily balance.
    End,
}

impl SavingsPolicy {
    /// Parses a policy label, falling back to [`SavingsPolicy::Lowest`].
    #[must_use]
    pub fn parse_or_default(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Picks the representative balance. Zero for an empty slice.
    #[must_use]
    pub fn select(self, balances: &[Decimal]) -> Decimal {
        let (Some(first), Some(last)) = (balances.first(), balances.last()) else {
            return Decimal::ZERO;
        };
        match self {
            Self::Lowest => balances.iter().copied().fold(*first, DecimalService::min),
            Self::Highest => balances.iter().copied().fold(*first, DecimalService::max),
            Self::Average => DecimalService::divide(
                DecimalService::add_many(balances),
                Decimal::from(balances.len()),
            ),
            Self::Start => *first,
            Self::End => *last,
        }
    }
}

impl fmt::Display for SavingsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lowest => "lowest",
            Self::Highest => "highest",
            Self::Average => "average",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

impl From<String> for SavingsPolicy {
    fn from(label: String) -> Self {
        Self::parse_or_default(&label)
    }
}

/// Error returned when a policy label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown savings policy: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for SavingsPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lowest" => Ok(Self::Lowest),
            "highest" => Ok(Self::Highest),
            "average" => Ok(Self::Average),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// How a savings product computes interest, as configured on the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsComputationType {
    /// Lowest balance of each day.
    DailyLowestBalance,
    /// Average daily balance.
    AverageDailyBalance,
    /// Lowest month-end balance.
    MonthlyEndLowestBalance,
    /// Average daily balance, paid on the ending balance.
    AdbEndBalance,
    /// Average of monthly lowest balances.
    MonthlyLowestBalanceAverage,
    /// Average of month-end balances.
    MonthlyEndBalanceAverage,
    /// Total of month-end balances.
    MonthlyEndBalanceTotal,
}

impl SavingsComputationType {
    /// Returns the balance-selection policy used for this computation type.
    #[must_use]
    pub const fn policy(self) -> SavingsPolicy {
        match self {
            Self::DailyLowestBalance
            | Self::MonthlyEndLowestBalance
            | Self::MonthlyLowestBalanceAverage => SavingsPolicy::Lowest,
            Self::AverageDailyBalance | Self::MonthlyEndBalanceAverage => SavingsPolicy::Average,
            Self::AdbEndBalance | Self::MonthlyEndBalanceTotal => SavingsPolicy::End,
        }
    }
}
