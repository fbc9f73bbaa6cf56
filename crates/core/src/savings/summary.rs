//! Day-by-day view of a savings period.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::DecimalService;

/// Movement of a day's balance against the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceChange {
    /// Higher than the previous day.
    Increase,
    /// Lower than the previous day.
    Decrease,
    /// Same as the previous day, or the first day.
    NoChange,
}

/// One day of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBalance {
    /// Calendar day.
    pub date: NaiveDate,
    /// Closing balance.
    pub balance: Decimal,
    /// Movement against the previous day.
    #[serde(rename = "type")]
    pub change: BalanceChange,
}

/// Statistics over a period's daily balances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyBalanceSummary {
    /// First day's balance.
    pub beginning_balance: Decimal,
    /// Last day's balance.
    pub ending_balance: Decimal,
    /// Mean of all days.
    pub average_daily_balance: Decimal,
    /// Lowest day.
    pub lowest_balance: Decimal,
    /// Highest day.
    pub highest_balance: Decimal,
    /// One row per day, oldest first.
    pub daily_balance: Vec<DailyBalance>,
}

/// Summarizes daily balances starting at `start`.
///
/// Day `i` is dated `start + i`. Rows whose date would overflow the
/// calendar are dropped.
#[must_use]
pub fn summarize_daily_balances(start: NaiveDate, balances: &[Decimal]) -> DailyBalanceSummary {
    let (Some(&first), Some(&last)) = (balances.first(), balances.last()) else {
        return DailyBalanceSummary::default();
    };

    let mut lowest = first;
    let mut highest = first;
    let mut previous: Option<Decimal> = None;
    let mut rows = Vec::with_capacity(balances.len());

    for (offset, &balance) in (0u64..).zip(balances) {
        let change = match previous {
            Some(prev) if DecimalService::is_greater_than(balance, prev) => BalanceChange::Increase,
            Some(prev) if DecimalService::is_less_than(balance, prev) => BalanceChange::Decrease,
            _ => BalanceChange::NoChange,
        };
        if let Some(date) = start.checked_add_days(Days::new(offset)) {
            rows.push(DailyBalance {
                date,
                balance,
                change,
            });
        }

        lowest = DecimalService::min(lowest, balance);
        highest = DecimalService::max(highest, balance);
        previous = Some(balance);
    }

    DailyBalanceSummary {
        beginning_balance: first,
        ending_balance: last,
        average_daily_balance: DecimalService::divide(
            DecimalService::add_many(balances),
            Decimal::from(balances.len()),
        ),
        lowest_balance: lowest,
        highest_balance: highest,
        daily_balance: rows,
    }
}
