//! Installment counts and amounts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::error::LoanError;
use super::types::{LoanModeOfPayment, LoanTransaction};
use crate::decimal::DecimalService;

/// Installment plan derived from a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Number of installments.
    pub installments: u32,
    /// Amount of each installment, rounded to 2 places.
    pub installment_amount: Decimal,
}

impl LoanSchedule {
    /// Computes both the count and the amount.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`number_of_installments`] and
    /// [`installment_amount`].
    pub fn for_loan(loan: &LoanTransaction) -> Result<Self, LoanError> {
        Ok(Self {
            installments: number_of_installments(loan.mode_of_payment, loan.terms, loan.fixed_days)?,
            installment_amount: installment_amount(loan)?,
        })
    }
}

/// Returns how many installments `terms` months produce under `mode`.
///
/// Quarterly and semi-annual counts truncate.
///
/// # Errors
///
/// `InvalidFixedDays` for fixed-days mode without a positive day count.
pub fn number_of_installments(
    mode: LoanModeOfPayment,
    terms: u32,
    fixed_days: u32,
) -> Result<u32, LoanError> {
    Ok(match mode {
        LoanModeOfPayment::Daily => terms.saturating_mul(30),
        LoanModeOfPayment::Weekly => terms.saturating_mul(4),
        LoanModeOfPayment::SemiMonthly => terms.saturating_mul(2),
        LoanModeOfPayment::Monthly => terms,
        LoanModeOfPayment::Quarterly => terms / 3,
        LoanModeOfPayment::SemiAnnual => terms / 6,
        LoanModeOfPayment::Lumpsum => 1,
        LoanModeOfPayment::FixedDays => {
            if fixed_days == 0 {
                return Err(LoanError::InvalidFixedDays { fixed_days });
            }
            terms
        }
    })
}

/// Returns the amount of one installment, rounded to 2 places.
///
/// # Errors
///
/// - `InvalidTerms` when terms is zero (every mode except lumpsum)
/// - `InvalidFixedDays` for fixed-days mode without a positive day count
pub fn installment_amount(loan: &LoanTransaction) -> Result<Decimal, LoanError> {
    let principal = loan.applied;

    if loan.mode_of_payment == LoanModeOfPayment::Lumpsum {
        return Ok(DecimalService::round_money(principal));
    }
    if loan.terms == 0 {
        return Err(LoanError::InvalidTerms { terms: loan.terms });
    }

    let terms = Decimal::from(loan.terms);
    let per_month = DecimalService::divide(principal, terms);

    let amount = match loan.mode_of_payment {
        LoanModeOfPayment::Daily => DecimalService::divide(per_month, Decimal::from(30)),
        LoanModeOfPayment::Weekly => DecimalService::divide(per_month, Decimal::from(4)),
        LoanModeOfPayment::SemiMonthly => DecimalService::divide(per_month, Decimal::TWO),
        LoanModeOfPayment::Monthly => per_month,
        LoanModeOfPayment::Quarterly => {
            DecimalService::divide(principal, DecimalService::divide(terms, Decimal::from(3)))
        }
        LoanModeOfPayment::SemiAnnual => {
            DecimalService::divide(principal, DecimalService::divide(terms, Decimal::from(6)))
        }
        LoanModeOfPayment::FixedDays => {
            if loan.fixed_days == 0 {
                return Err(LoanError::InvalidFixedDays {
                    fixed_days: loan.fixed_days,
                });
            }
            per_month
        }
        LoanModeOfPayment::Lumpsum => principal,
    };

    Ok(DecimalService::round_money(amount))
}

/// Suggests the term count that brings each installment near `target`.
///
/// The result is rounded up and never below 1.
///
/// # Errors
///
/// - `InvalidPaymentAmount` when `target` is not positive
/// - `InvalidPrincipal` when `principal` is not positive
/// - `InvalidFixedDays` for fixed-days mode without a positive day count
pub fn suggested_terms(
    target: Decimal,
    principal: Decimal,
    mode: LoanModeOfPayment,
    fixed_days: u32,
) -> Result<u32, LoanError> {
    if target <= Decimal::ZERO {
        return Err(LoanError::InvalidPaymentAmount(target));
    }
    if principal <= Decimal::ZERO {
        return Err(LoanError::InvalidPrincipal(principal));
    }

    let base = DecimalService::divide(principal, target);
    let terms = match mode {
        LoanModeOfPayment::Daily => DecimalService::divide(base, Decimal::from(30)),
        LoanModeOfPayment::Weekly => DecimalService::divide(base, Decimal::from(4)),
        LoanModeOfPayment::SemiMonthly => DecimalService::divide(base, Decimal::TWO),
        LoanModeOfPayment::Monthly => base,
        LoanModeOfPayment::Quarterly => DecimalService::multiply(base, Decimal::from(3)),
        LoanModeOfPayment::SemiAnnual => DecimalService::multiply(base, Decimal::from(6)),
        LoanModeOfPayment::Lumpsum => Decimal::ONE,
        LoanModeOfPayment::FixedDays => {
            if fixed_days == 0 {
                return Err(LoanError::InvalidFixedDays { fixed_days });
            }
            base
        }
    };

    Ok(terms.ceil().to_u32().unwrap_or(u32::MAX).max(1))
}
