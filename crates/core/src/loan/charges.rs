//! Charge rate schemes.
//!
//! Resolution never fails: a scheme that does not apply to a loan
//! produces a zero charge. Results are unrounded.

use coop_shared::types::MemberTypeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::types::{LoanModeOfPayment, LoanTransaction};
use crate::decimal::DecimalService;

/// Maximum number of rate tiers consulted per band or schedule.
pub const MAX_RATE_TIERS: usize = 22;

/// A principal range with a percentage or flat charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBand {
    /// Lower bound, inclusive.
    pub from: Decimal,
    /// Upper bound, inclusive.
    pub to: Decimal,
    /// Percentage of principal; takes precedence over `amount` when positive.
    #[serde(default)]
    pub charge_percent: Decimal,
    /// Flat charge.
    #[serde(default)]
    pub amount: Decimal,
    /// Charges at or above this value are clamped down to it, when positive.
    #[serde(default)]
    pub minimum_amount: Decimal,
}

/// One (term threshold, monthly rate percent) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Minimum term count at which the rate applies.
    pub threshold: u32,
    /// Monthly-equivalent rate, in percent.
    pub rate: Decimal,
}

/// A principal range with term-tiered rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBand {
    /// Lower bound, inclusive.
    pub from: Decimal,
    /// Upper bound, inclusive.
    pub to: Decimal,
    /// Ordered rate tiers.
    pub tiers: Vec<RateTier>,
}

/// Term-tiered rates for one mode of payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSchedule {
    /// Mode of payment these rates apply to.
    pub mode_of_payment: LoanModeOfPayment,
    /// Ordered rate tiers.
    pub tiers: Vec<RateTier>,
}

/// How a loan charge is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChargesRateScheme {
    /// Ordered principal bands.
    ByRange {
        /// Bands, scanned in order.
        bands: Vec<RangeBand>,
    },
    /// Amount bands with term tiers, optionally restricted to a member
    /// type and a mode of payment.
    ByType {
        /// Only loans of members of this type are charged.
        #[serde(default)]
        member_type: Option<MemberTypeId>,
        /// Only loans with this mode of payment are charged.
        #[serde(default)]
        mode_of_payment: Option<LoanModeOfPayment>,
        /// Bands, scanned in order.
        bands: Vec<AmountBand>,
    },
    /// Term tiers keyed by mode of payment.
    ByTerm {
        /// Schedules, scanned in order.
        schedules: Vec<TermSchedule>,
    },
}

impl ChargesRateScheme {
    /// Resolves the charge for `loan`.
    #[must_use]
    pub fn charge_for(&self, loan: &LoanTransaction) -> Decimal {
        let charge = match self {
            Self::ByRange { bands } => by_range(bands, loan),
            Self::ByType {
                member_type,
                mode_of_payment,
                bands,
            } => {
                if member_type.is_some_and(|t| loan.member_type_id != Some(t)) {
                    trace!("Member type filter excludes loan");
                    return Decimal::ZERO;
                }
                if mode_of_payment.is_some_and(|m| m != loan.mode_of_payment) {
                    trace!("Mode of payment filter excludes loan");
                    return Decimal::ZERO;
                }
                first_positive(
                    bands
                        .iter()
                        .filter(|b| within(loan.applied, b.from, b.to))
                        .map(|b| b.tiers.as_slice()),
                    loan,
                )
            }
            Self::ByTerm { schedules } => {
                if loan.terms < 1 {
                    return Decimal::ZERO;
                }
                first_positive(
                    schedules
                        .iter()
                        .filter(|s| s.mode_of_payment == loan.mode_of_payment)
                        .map(|s| s.tiers.as_slice()),
                    loan,
                )
            }
        };
        trace!(%charge, applied = %loan.applied, "Resolved loan charge");
        charge
    }
}

fn within(value: Decimal, from: Decimal, to: Decimal) -> bool {
    DecimalService::is_greater_than_or_equal(value, from)
        && DecimalService::is_less_than_or_equal(value, to)
}

fn by_range(bands: &[RangeBand], loan: &LoanTransaction) -> Decimal {
    for band in bands.iter().filter(|b| within(loan.applied, b.from, b.to)) {
        let charge = if band.charge_percent > Decimal::ZERO {
            DecimalService::percentage_of(loan.applied, band.charge_percent)
        } else if band.amount > Decimal::ZERO {
            band.amount
        } else {
            Decimal::ZERO
        };

        if charge > Decimal::ZERO {
            if band.minimum_amount > Decimal::ZERO
                && DecimalService::is_greater_than_or_equal(charge, band.minimum_amount)
            {
                return band.minimum_amount;
            }
            return charge;
        }
    }
    Decimal::ZERO
}

fn first_positive<'a, I>(tier_lists: I, loan: &LoanTransaction) -> Decimal
where
    I: Iterator<Item = &'a [RateTier]>,
{
    tier_lists
        .map(|tiers| period_charge(loan, last_rate(tiers, loan.terms)))
        .find(|charge| *charge > Decimal::ZERO)
        .unwrap_or(Decimal::ZERO)
}

/// Returns the rate of the last tier reached by `terms`.
///
/// The scan stops at the first tier whose threshold exceeds `terms` or
/// whose rate is not positive.
#[must_use]
pub fn last_rate(tiers: &[RateTier], terms: u32) -> Decimal {
    let mut last = Decimal::ZERO;
    for tier in tiers.iter().take(MAX_RATE_TIERS) {
        if tier.threshold > terms || tier.rate <= Decimal::ZERO {
            break;
        }
        last = tier.rate;
    }
    last
}

/// Converts a monthly rate percent into a charge for one installment period.
#[must_use]
pub fn period_charge(loan: &LoanTransaction, rate: Decimal) -> Decimal {
    if rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let base = DecimalService::percentage_of(loan.applied, rate);
    let thirty = Decimal::from(30);

    match loan.mode_of_payment {
        LoanModeOfPayment::Daily => DecimalService::divide(base, thirty),
        LoanModeOfPayment::Weekly => {
            DecimalService::divide(DecimalService::multiply(base, Decimal::from(7)), thirty)
        }
        LoanModeOfPayment::SemiMonthly => {
            DecimalService::divide(DecimalService::multiply(base, Decimal::from(15)), thirty)
        }
        LoanModeOfPayment::Monthly => base,
        LoanModeOfPayment::Quarterly => DecimalService::multiply(base, Decimal::from(3)),
        LoanModeOfPayment::SemiAnnual => DecimalService::multiply(base, Decimal::from(6)),
        LoanModeOfPayment::Lumpsum | LoanModeOfPayment::FixedDays => Decimal::ZERO,
    }
}
