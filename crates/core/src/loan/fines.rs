//! Fines on missed amortizations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::LoanModeOfPayment;
use crate::decimal::DecimalService;

/// Skipped days beyond which the maturity rate applies.
pub const MATURITY_THRESHOLD_DAYS: u32 = 30;

/// Grace percentages per mode of payment, configured on the loan account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GracePeriodTable {
    /// Daily and fixed-days amortizations.
    pub daily: Decimal,
    /// Weekly amortizations.
    pub weekly: Decimal,
    /// Semi-monthly amortizations.
    pub semi_monthly: Decimal,
    /// Monthly amortizations.
    pub monthly: Decimal,
    /// Quarterly amortizations.
    pub quarterly: Decimal,
    /// Semi-annual amortizations.
    pub semi_annual: Decimal,
    /// Lumpsum loans.
    pub lumpsum: Decimal,
}

impl GracePeriodTable {
    /// Returns the grace percentage for `mode`.
    #[must_use]
    pub const fn percentage_for(&self, mode: LoanModeOfPayment) -> Decimal {
        match mode {
            LoanModeOfPayment::Daily | LoanModeOfPayment::FixedDays => self.daily,
            LoanModeOfPayment::Weekly => self.weekly,
            LoanModeOfPayment::SemiMonthly => self.semi_monthly,
            LoanModeOfPayment::Monthly => self.monthly,
            LoanModeOfPayment::Quarterly => self.quarterly,
            LoanModeOfPayment::SemiAnnual => self.semi_annual,
            LoanModeOfPayment::Lumpsum => self.lumpsum,
        }
    }
}

/// Inputs of a fines computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinesInput {
    /// Outstanding balance.
    pub balance: Decimal,
    /// Rate percent for skipped amortizations.
    pub amortization_rate: Decimal,
    /// Rate percent once more than 30 days were skipped.
    pub maturity_rate: Decimal,
    /// Days since the missed payment.
    pub days_skipped: u32,
    /// Installment cadence.
    pub mode_of_payment: LoanModeOfPayment,
    /// Ignore the grace table.
    #[serde(default)]
    pub no_grace_period: bool,
    /// Grace percentages.
    #[serde(default)]
    pub grace: GracePeriodTable,
}

/// Computes fines, rounded to 2 places.
#[must_use]
pub fn compute_fines(input: &FinesInput) -> Decimal {
    if input.days_skipped == 0 {
        return Decimal::ZERO;
    }

    let mut rate = if input.days_skipped > MATURITY_THRESHOLD_DAYS {
        input.maturity_rate
    } else {
        input.amortization_rate
    };
    if rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if !input.no_grace_period {
        let grace = input.grace.percentage_for(input.mode_of_payment);
        if grace >= Decimal::ONE_HUNDRED {
            return Decimal::ZERO;
        }
        if grace > Decimal::ZERO {
            rate = DecimalService::subtract_percentage(rate, grace);
        }
    }

    let days = Decimal::from(input.days_skipped);
    let periods = match input.mode_of_payment {
        LoanModeOfPayment::Daily | LoanModeOfPayment::FixedDays => days,
        LoanModeOfPayment::Weekly => DecimalService::divide(days, Decimal::from(7)),
        LoanModeOfPayment::SemiMonthly => DecimalService::divide(days, Decimal::from(15)),
        LoanModeOfPayment::Monthly => DecimalService::divide(days, Decimal::from(30)),
        LoanModeOfPayment::Quarterly => DecimalService::divide(days, Decimal::from(90)),
        LoanModeOfPayment::SemiAnnual => DecimalService::divide(days, Decimal::from(180)),
        LoanModeOfPayment::Lumpsum => {
            let lumpsum_rate = if input.maturity_rate > Decimal::ZERO {
                input.maturity_rate
            } else {
                input.amortization_rate
            };
            return DecimalService::round_money(DecimalService::percentage_of(
                input.balance,
                lumpsum_rate,
            ));
        }
    };

    DecimalService::round_money(DecimalService::multiply(
        DecimalService::percentage_of(input.balance, rate),
        periods,
    ))
}
