//! Ending balance after interest has been computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::interest::SavingsInterestCalculator;
use super::types::SavingsPolicy;
use crate::decimal::DecimalService;

/// Request for an ending balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsBalanceInput {
    /// Closing balance of each day in the period, oldest first.
    pub daily_balances: Vec<Decimal>,
    /// Balance-selection policy; the calculator's default when absent.
    #[serde(default)]
    pub policy: Option<SavingsPolicy>,
    /// Interest already computed for the period.
    pub interest_amount: Decimal,
    /// Tax already computed for the period.
    #[serde(default)]
    pub interest_tax: Decimal,
}

/// Ending balance with the interest figures it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsBalanceResult {
    /// Representative balance plus interest.
    pub balance: Decimal,
    /// Interest, as given.
    pub interest_amount: Decimal,
    /// Tax, as given. Not deducted from `balance`.
    pub interest_tax: Decimal,
}

impl SavingsInterestCalculator {
    /// Adds precomputed interest to the policy's representative balance.
    ///
    /// There is no minimum history; an empty history has a zero
    /// representative balance.
    #[must_use]
    pub fn ending_balance(&self, input: &SavingsBalanceInput) -> SavingsBalanceResult {
        let representative = self.policy_for(input.policy).select(&input.daily_balances);
        SavingsBalanceResult {
            balance: DecimalService::add(representative, input.interest_amount),
            interest_amount: input.interest_amount,
            interest_tax: input.interest_tax,
        }
    }
}
