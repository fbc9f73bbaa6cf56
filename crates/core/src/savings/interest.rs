//! Savings interest accrual.

use coop_shared::config::SavingsConfig;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::types::SavingsPolicy;
use crate::decimal::DecimalService;

/// Daily balances required before interest accrues, unless configured otherwise.
pub const DEFAULT_MINIMUM_DAYS: usize = 30;

/// Days in the interest year, unless configured otherwise.
pub const DEFAULT_ANNUAL_DIVISOR: u32 = 360;

/// One account's accrual request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsInterestInput {
    /// Closing balance of each day in the period, oldest first.
    pub daily_balances: Vec<Decimal>,
    /// Annual interest rate as a fraction (`0.01` is 1%).
    pub interest_rate: Decimal,
    /// Withholding tax rate as a fraction of the interest.
    #[serde(default)]
    pub interest_tax_rate: Decimal,
    /// Balance-selection policy; the calculator's default when absent.
    #[serde(default)]
    pub policy: Option<SavingsPolicy>,
    /// Days in the interest year; the calculator's default when absent.
    #[serde(default)]
    pub annual_divisor: Option<u32>,
    /// Tax-exempt accounts accrue interest with no withholding.
    #[serde(default = "taxable_by_default")]
    pub taxable: bool,
}

const fn taxable_by_default() -> bool {
    true
}

/// Outcome of one accrual. Amounts are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavingsInterestResult {
    /// Representative balance chosen by the policy.
    pub balance: Decimal,
    /// Interest earned.
    pub interest: Decimal,
    /// Tax withheld on the interest.
    pub interest_tax: Decimal,
    /// `balance + interest`.
    pub ending_balance: Decimal,
}

impl SavingsInterestResult {
    fn without_interest(balance: Decimal) -> Self {
        Self {
            balance,
            interest: Decimal::ZERO,
            interest_tax: Decimal::ZERO,
            ending_balance: balance,
        }
    }
}

/// Accrues savings interest by balance-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsInterestCalculator {
    /// Fewer daily balances than this accrue nothing.
    pub minimum_days: usize,
    /// Annual divisor used when an input does not carry one.
    pub annual_divisor: u32,
    /// Policy used when an input does not carry one.
    pub default_policy: SavingsPolicy,
}

impl Default for SavingsInterestCalculator {
    fn default() -> Self {
        Self {
            minimum_days: DEFAULT_MINIMUM_DAYS,
            annual_divisor: DEFAULT_ANNUAL_DIVISOR,
            default_policy: SavingsPolicy::Lowest,
        }
    }
}

impl From<&SavingsConfig> for SavingsInterestCalculator {
    fn from(config: &SavingsConfig) -> Self {
        Self {
            minimum_days: config.minimum_days,
            annual_divisor: config.annual_divisor,
            default_policy: SavingsPolicy::parse_or_default(&config.default_policy),
        }
    }
}

impl SavingsInterestCalculator {
    /// Returns the policy that applies to a request.
    #[must_use]
    pub fn policy_for(&self, requested: Option<SavingsPolicy>) -> SavingsPolicy {
        requested.unwrap_or(self.default_policy)
    }

    /// Accrues interest for one account.
    ///
    /// `interest = balance × rate × (days / annual_divisor)` and
    /// `tax = interest × tax_rate`, where `days` is the number of daily
    /// balances. Short histories and non-positive representative balances
    /// accrue nothing. The tax is zero for accounts that are not taxable.
    #[must_use]
    pub fn compute(&self, input: &SavingsInterestInput) -> SavingsInterestResult {
        let days = input.daily_balances.len();
        let balance = self.policy_for(input.policy).select(&input.daily_balances);

        if days < self.minimum_days {
            trace!(days, minimum = self.minimum_days, "History too short for accrual");
            return SavingsInterestResult::without_interest(balance);
        }
        if balance <= Decimal::ZERO {
            trace!(%balance, "Non-positive balance does not accrue");
            return SavingsInterestResult::without_interest(balance);
        }

        let divisor = input.annual_divisor.unwrap_or(self.annual_divisor);
        let year_fraction = DecimalService::divide(Decimal::from(days), Decimal::from(divisor));
        let interest =
            DecimalService::multiply_many(&[balance, input.interest_rate, year_fraction]);
        let interest_tax = if input.taxable {
            DecimalService::multiply(interest, input.interest_tax_rate)
        } else {
            Decimal::ZERO
        };

        SavingsInterestResult {
            balance,
            interest,
            interest_tax,
            ending_balance: DecimalService::add(balance, interest),
        }
    }

    /// Accrues many accounts in parallel. Results keep input order.
    #[must_use]
    pub fn compute_batch(&self, inputs: &[SavingsInterestInput]) -> Vec<SavingsInterestResult> {
        let results: Vec<SavingsInterestResult> =
            inputs.par_iter().map(|input| self.compute(input)).collect();

        let accrued = results.iter().filter(|r| !r.interest.is_zero()).count();
        debug!(accounts = inputs.len(), accrued, "Computed savings interest batch");

        results
    }
}
