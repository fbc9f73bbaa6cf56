//! Automatic loan deductions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::types::LoanTransaction;
use crate::decimal::DecimalService;

/// How a deduction is spread over the loan term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annualization {
    /// No month count configured (`0`).
    Unset,
    /// Scale by `terms / 12` (`-1`).
    ByTerms,
    /// Scale by `terms / N`.
    Months(u32),
    /// Any other negative value; no scaling.
    Ignored,
}

impl Annualization {
    /// Decodes the stored "number of months" directive.
    #[must_use]
    pub fn from_raw(number_of_months: i32) -> Self {
        match number_of_months {
            0 => Self::Unset,
            -1 => Self::ByTerms,
            n if n > 0 => Self::Months(n.unsigned_abs()),
            _ => Self::Ignored,
        }
    }
}

/// A rule that deducts a charge when a loan is released.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomaticLoanDeduction {
    /// Principal below this is not charged, when positive.
    pub min_amount: Decimal,
    /// Principal above this is not charged, when positive.
    pub max_amount: Decimal,
    /// First percentage multiplier.
    pub charges_percentage_1: Decimal,
    /// Second percentage multiplier, preferred for add-on loans when both are set.
    pub charges_percentage_2: Decimal,
    /// Whether the loan's interest is added on.
    pub add_on: bool,
    /// Divisor of the "divide then multiply by flat amount" step.
    pub charges_divisor: Decimal,
    /// Flat amount of that step, and the fallback result.
    pub charges_amount: Decimal,
    /// Raw "number of months" directive, see [`Annualization::from_raw`].
    pub number_of_months: i32,
    /// Divide by 12 when no month count is configured.
    pub annum: bool,
}

impl AutomaticLoanDeduction {
    /// Returns the decoded annualization directive.
    #[must_use]
    pub fn annualization(&self) -> Annualization {
        Annualization::from_raw(self.number_of_months)
    }

    /// Returns the percentage multiplier that applies, if any.
    #[must_use]
    pub fn percentage(&self) -> Option<Decimal> {
        let first = self.charges_percentage_1 > Decimal::ZERO;
        let second = self.charges_percentage_2 > Decimal::ZERO;
        match (first, second) {
            (true, true) if self.add_on => Some(self.charges_percentage_2),
            (true, _) => Some(self.charges_percentage_1),
            (false, true) => Some(self.charges_percentage_2),
            (false, false) => None,
        }
    }

    /// Computes the deduction for `loan`.
    ///
    /// Zero when the principal is outside the configured bounds. When no
    /// step changes the principal, the flat `charges_amount` is returned
    /// as is; otherwise the result is rounded to 2 places.
    #[must_use]
    pub fn apply(&self, loan: &LoanTransaction) -> Decimal {
        let principal = loan.applied;

        if self.min_amount > Decimal::ZERO && principal < self.min_amount {
            trace!(%principal, min = %self.min_amount, "Principal below deduction minimum");
            return Decimal::ZERO;
        }
        if self.max_amount > Decimal::ZERO && principal > self.max_amount {
            trace!(%principal, max = %self.max_amount, "Principal above deduction maximum");
            return Decimal::ZERO;
        }

        let mut result = principal;

        if let Some(percent) = self.percentage() {
            result = DecimalService::percentage_of(result, percent);
        }

        if self.charges_divisor > Decimal::ZERO && result > Decimal::ZERO {
            result = DecimalService::multiply(
                DecimalService::divide(result, self.charges_divisor),
                self.charges_amount,
            );
        }

        let terms = Decimal::from(loan.terms);
        let twelve = Decimal::from(12);
        result = match self.annualization() {
            Annualization::Unset if self.annum => DecimalService::divide(result, twelve),
            Annualization::ByTerms => {
                DecimalService::divide(DecimalService::multiply(result, terms), twelve)
            }
            Annualization::Months(n) => {
                DecimalService::divide(DecimalService::multiply(result, terms), Decimal::from(n))
            }
            Annualization::Unset | Annualization::Ignored => result,
        };

        if DecimalService::is_equal(result, principal) {
            return self.charges_amount;
        }
        DecimalService::round_money(result)
    }
}
