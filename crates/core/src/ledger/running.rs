//! Running balance stamping for general-ledger lines.

use std::collections::HashMap;

use coop_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::account::AccountLookup;
use super::classification::signed_delta;
use super::entry::GeneralLedgerEntry;
use crate::decimal::DecimalService;

/// Per-account running state while stamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningBalance {
    /// Number of entries applied to the account so far.
    pub entry_count: u64,
    /// Balance before the latest entry.
    pub previous_balance: Decimal,
    /// Balance after the latest entry.
    pub current_balance: Decimal,
}

impl RunningBalance {
    /// Running state after the first entry on an account.
    #[must_use]
    pub fn first_entry(balance_change: Decimal) -> Self {
        Self {
            entry_count: 1,
            previous_balance: Decimal::ZERO,
            current_balance: balance_change,
        }
    }

    /// Running state after applying `balance_change` on top of `previous`.
    #[must_use]
    pub fn next_entry(previous: &Self, balance_change: Decimal) -> Self {
        Self {
            entry_count: previous.entry_count + 1,
            previous_balance: previous.current_balance,
            current_balance: DecimalService::add(previous.current_balance, balance_change),
        }
    }
}

/// Sorts `entries` by date and writes each account's post-entry balance.
///
/// The sort is stable, so same-dated entries keep their input order.
/// Entries without an account reference, or whose account the lookup
/// cannot resolve, are left untouched and do not move any total.
///
/// Returns the final running state per account.
pub fn stamp_running_balances<L>(
    entries: &mut [GeneralLedgerEntry],
    accounts: &L,
) -> HashMap<AccountId, RunningBalance>
where
    L: AccountLookup + ?Sized,
{
    entries.sort_by_key(|e| e.entry_date);

    let mut running: HashMap<AccountId, RunningBalance> = HashMap::new();
    let mut skipped = 0usize;

    for entry in entries.iter_mut() {
        let Some(account) = entry.account_id.and_then(|id| accounts.account(id)) else {
            trace!(entry_id = %entry.id, "Skipping entry without resolvable account");
            skipped += 1;
            continue;
        };

        let change = signed_delta(account.classification, entry.debit, entry.credit);
        let state = match running.get(&account.id) {
            Some(previous) => RunningBalance::next_entry(previous, change),
            None => RunningBalance::first_entry(change),
        };
        entry.balance = state.current_balance;
        running.insert(account.id, state);
    }

    debug!(
        entries = entries.len(),
        accounts = running.len(),
        skipped,
        "Stamped running balances"
    );

    running
}
