//! Loan interest per installment period.

use rust_decimal::Decimal;

use super::types::LoanModeOfPayment;
use crate::decimal::DecimalService;

/// Interest on `balance` for one installment period, rounded to 2 places.
///
/// `rate_percent` is a monthly rate.
#[must_use]
pub fn periodic_interest(balance: Decimal, rate_percent: Decimal, mode: LoanModeOfPayment) -> Decimal {
    let monthly = DecimalService::divide(rate_percent, Decimal::ONE_HUNDRED);
    let daily = DecimalService::divide(monthly, Decimal::from(30));

    let multiplier = match mode {
        LoanModeOfPayment::Monthly | LoanModeOfPayment::Lumpsum => monthly,
        LoanModeOfPayment::Daily | LoanModeOfPayment::FixedDays => daily,
        LoanModeOfPayment::SemiMonthly => DecimalService::multiply(daily, Decimal::from(15)),
        LoanModeOfPayment::Weekly => DecimalService::multiply(daily, Decimal::from(7)),
        LoanModeOfPayment::Quarterly => DecimalService::multiply(monthly, Decimal::from(3)),
        LoanModeOfPayment::SemiAnnual => DecimalService::multiply(monthly, Decimal::from(6)),
    };

    DecimalService::round_money(DecimalService::multiply(balance, multiplier))
}

/// Straight (flat) interest over the whole term, rounded to 2 places.
///
/// Zero when the rate or the balance is not positive.
#[must_use]
pub fn straight_interest(balance: Decimal, rate_percent: Decimal, terms: u32) -> Decimal {
    if rate_percent <= Decimal::ZERO || balance <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut interest = DecimalService::percentage_of(balance, rate_percent);
    if terms > 1 {
        interest = DecimalService::multiply(interest, Decimal::from(terms));
    }
    DecimalService::round_money(interest)
}
