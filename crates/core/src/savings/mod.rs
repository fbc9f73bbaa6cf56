//! Savings interest and ending balances.
//!
//! This module implements:
//! - Balance-selection policies over a period's daily balances
//! - Interest accrual, single and batched
//! - Ending balances from precomputed interest
//! - Day-by-day period summaries

pub mod ending;
pub mod interest;
pub mod summary;
pub mod types;

#[cfg(test)]
mod interest_props;

pub use ending::{SavingsBalanceInput, SavingsBalanceResult};
pub use interest::{
    DEFAULT_ANNUAL_DIVISOR, DEFAULT_MINIMUM_DAYS, SavingsInterestCalculator, SavingsInterestInput,
    SavingsInterestResult,
};
pub use summary::{BalanceChange, DailyBalance, DailyBalanceSummary, summarize_daily_balances};
pub use types::{SavingsComputationType, SavingsPolicy, UnknownPolicy};
