//! Loan value types.

use std::fmt;
use std::str::FromStr;

use coop_shared::types::MemberTypeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LoanError;

/// Installment cadence of a loan.
///
/// Deserializes through the tolerant [`FromStr`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum LoanModeOfPayment {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Twice a month.
    SemiMonthly,
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    SemiAnnual,
    /// Single payment at maturity.
    Lumpsum,
    /// Every N days, N given by the loan's fixed-days count.
    FixedDays,
}

impl LoanModeOfPayment {
    /// All modes, in cadence order.
    pub const ALL: [Self; 8] = [
        Self::Daily,
        Self::Weekly,
        Self::SemiMonthly,
        Self::Monthly,
        Self::Quarterly,
        Self::SemiAnnual,
        Self::Lumpsum,
        Self::FixedDays,
    ];

    /// Returns the snake_case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::SemiMonthly => "semi_monthly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::SemiAnnual => "semi_annual",
            Self::Lumpsum => "lumpsum",
            Self::FixedDays => "fixed_days",
        }
    }
}

impl fmt::Display for LoanModeOfPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanModeOfPayment {
    type Err = LoanError;

    /// Accepts any spelling that differs only in case or separators
    /// (`"semi-monthly"`, `"Semi Monthly"`, `"semi_monthly"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "semimonthly" => Ok(Self::SemiMonthly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "semiannual" => Ok(Self::SemiAnnual),
            "lumpsum" => Ok(Self::Lumpsum),
            "fixeddays" => Ok(Self::FixedDays),
            _ => Err(LoanError::UnsupportedModeOfPayment(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoanModeOfPayment {
    type Error = LoanError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// The loan being priced or scheduled. Read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTransaction {
    /// Applied principal.
    pub applied: Decimal,
    /// Term count, in months.
    pub terms: u32,
    /// Installment cadence.
    pub mode_of_payment: LoanModeOfPayment,
    /// Day interval, only meaningful for [`LoanModeOfPayment::FixedDays`].
    #[serde(default)]
    pub fixed_days: u32,
    /// Member type of the borrower.
    #[serde(default)]
    pub member_type_id: Option<MemberTypeId>,
}

impl LoanTransaction {
    /// Creates a loan without fixed days or member type.
    #[must_use]
    pub const fn new(applied: Decimal, terms: u32, mode_of_payment: LoanModeOfPayment) -> Self {
        Self {
            applied,
            terms,
            mode_of_payment,
            fixed_days: 0,
            member_type_id: None,
        }
    }
}
