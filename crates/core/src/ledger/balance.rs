//! Balance aggregation over heterogeneous entry collections.
//!
//! The aggregator is all-or-nothing: a nil entry, an entry without an
//! account reference, or an account the lookup cannot resolve aborts the
//! whole fold and no partial summary is returned.

use chrono::{DateTime, Utc};
use coop_shared::types::{AccountId, CurrencyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::account::AccountLookup;
use super::classification::signed_delta;
use super::entry::{
    AdjustmentEntry, CashCheckVoucherEntry, EntrySource, GeneralLedgerEntry, JournalVoucherEntry,
    LoanTransactionEntry,
};
use super::error::LedgerError;
use crate::decimal::DecimalService;

/// Input collections and filters for one aggregation.
///
/// A `None` slot is a nil entry and fails the aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceRequest<'a> {
    /// General-ledger lines.
    pub general_ledgers: &'a [Option<GeneralLedgerEntry>],
    /// Adjustment lines.
    pub adjustments: &'a [Option<AdjustmentEntry>],
    /// Loan transaction lines.
    pub loan_transactions: &'a [Option<LoanTransactionEntry>],
    /// Cash/check voucher request lines.
    pub cash_check_vouchers: &'a [Option<CashCheckVoucherEntry>],
    /// Journal voucher request lines.
    pub journal_vouchers: &'a [Option<JournalVoucherEntry>],
    /// Only accumulate entries of this account.
    pub account_id: Option<AccountId>,
    /// Only accumulate entries in this currency.
    ///
    /// An entry without its own currency is matched on its account's currency.
    pub currency_id: Option<CurrencyId>,
    /// Accumulate `add_on_amount` from entries flagged as add-on interest.
    pub include_add_on: bool,
}

/// Debit/credit totals of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether the batch is balanced (debits == credits).
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: DecimalService::is_equal(debit, credit),
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        DecimalService::subtract(self.debit, self.credit)
    }
}

/// Result of folding entry collections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Sum of per-entry signed deltas under each account's sign convention.
    pub balance: Decimal,
    /// Number of entries with a nonzero debit.
    pub count_debit: usize,
    /// Number of entries with a nonzero credit.
    pub count_credit: usize,
    /// Most recent date of an entry with a nonzero debit.
    pub last_debit: Option<DateTime<Utc>>,
    /// Most recent date of an entry with a nonzero credit.
    pub last_credit: Option<DateTime<Utc>>,
    /// Most recent date of an entry that reduced its account's normal balance.
    pub last_payment: Option<DateTime<Utc>>,
    /// Debit + credit of add-on entries, when requested.
    pub add_on_amount: Decimal,
    /// Whether total debit equals total credit.
    pub is_balanced: bool,
}

impl BalanceSummary {
    /// Returns the debit/credit totals.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        EntryTotals::new(self.debit, self.credit)
    }

    fn apply<E: EntrySource>(&mut self, entry: &E, delta: Decimal, include_add_on: bool) {
        let debit = entry.debit();
        let credit = entry.credit();
        let date = entry.entry_date();

        self.debit = DecimalService::add(self.debit, debit);
        self.credit = DecimalService::add(self.credit, credit);
        self.balance = DecimalService::add(self.balance, delta);

        if !debit.is_zero() {
            self.count_debit += 1;
            self.last_debit = self.last_debit.max(date);
        }
        if !credit.is_zero() {
            self.count_credit += 1;
            self.last_credit = self.last_credit.max(date);
        }
        if delta.is_sign_negative() && !delta.is_zero() {
            self.last_payment = self.last_payment.max(date);
        }
        if include_add_on && entry.is_add_on() {
            self.add_on_amount =
                DecimalService::add_many(&[self.add_on_amount, debit, credit]);
        }
    }
}

/// Folds entry collections into balances.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Aggregates every collection of the request.
    ///
    /// # Errors
    ///
    /// - `NilEntry` for an empty slot
    /// - `MissingAccount` for an entry without an account reference
    /// - `AccountNotFound` when `accounts` cannot resolve a reference
    ///   that passed the account filter
    pub fn calculate<L>(
        request: &BalanceRequest<'_>,
        accounts: &L,
    ) -> Result<BalanceSummary, LedgerError>
    where
        L: AccountLookup + ?Sized,
    {
        let mut summary = BalanceSummary::default();

        Self::fold(&mut summary, request.general_ledgers, request, accounts)?;
        Self::fold(&mut summary, request.adjustments, request, accounts)?;
        Self::fold(&mut summary, request.loan_transactions, request, accounts)?;
        Self::fold(&mut summary, request.cash_check_vouchers, request, accounts)?;
        Self::fold(&mut summary, request.journal_vouchers, request, accounts)?;

        summary.is_balanced = DecimalService::is_equal(summary.debit, summary.credit);

        debug!(
            debit = %summary.debit,
            credit = %summary.credit,
            balance = %summary.balance,
            count_debit = summary.count_debit,
            count_credit = summary.count_credit,
            "Aggregated ledger balance"
        );

        Ok(summary)
    }

    /// Aggregates and enforces the double-entry invariant.
    ///
    /// Succeeds only when debit == credit, the signed balance is zero,
    /// and the debit total is not negative.
    ///
    /// # Errors
    ///
    /// Any error of [`BalanceAggregator::calculate`], or an imbalance
    /// error carrying the computed delta.
    pub fn calculate_strict<L>(
        request: &BalanceRequest<'_>,
        accounts: &L,
    ) -> Result<BalanceSummary, LedgerError>
    where
        L: AccountLookup + ?Sized,
    {
        let summary = Self::calculate(request, accounts)?;

        let result = if !summary.is_balanced {
            Err(LedgerError::Unbalanced {
                debit: summary.debit,
                credit: summary.credit,
                delta: summary.totals().difference(),
            })
        } else if !summary.balance.is_zero() {
            Err(LedgerError::NonZeroBalance {
                delta: summary.balance,
            })
        } else if summary.debit.is_sign_negative() && !summary.debit.is_zero() {
            Err(LedgerError::NegativeDebit {
                debit: summary.debit,
                delta: summary.balance,
            })
        } else {
            Ok(summary)
        };

        if let Err(err) = &result {
            warn!(delta = ?err.delta(), error = %err, "Strict balance check failed");
        }
        result
    }

    /// Checks that a journal voucher's lines balance.
    ///
    /// Lines are not resolved against accounts; only the two totals matter.
    ///
    /// # Errors
    ///
    /// Returns `Unbalanced` when debits differ from credits.
    pub fn validate_voucher_balance(
        entries: &[JournalVoucherEntry],
    ) -> Result<EntryTotals, LedgerError> {
        let debits: Vec<Decimal> = entries.iter().map(|e| e.debit).collect();
        let credits: Vec<Decimal> = entries.iter().map(|e| e.credit).collect();
        let totals = EntryTotals::new(
            DecimalService::add_many(&debits),
            DecimalService::add_many(&credits),
        );

        if totals.is_balanced {
            Ok(totals)
        } else {
            Err(LedgerError::Unbalanced {
                debit: totals.debit,
                credit: totals.credit,
                delta: totals.difference(),
            })
        }
    }

    fn fold<E, L>(
        summary: &mut BalanceSummary,
        entries: &[Option<E>],
        request: &BalanceRequest<'_>,
        accounts: &L,
    ) -> Result<(), LedgerError>
    where
        E: EntrySource,
        L: AccountLookup + ?Sized,
    {
        let kind = E::KIND;
        for (index, slot) in entries.iter().enumerate() {
            let Some(entry) = slot else {
                warn!(%kind, index, "Aborting aggregation on nil entry");
                return Err(LedgerError::NilEntry { kind, index });
            };
            let Some(account_id) = entry.account_id() else {
                warn!(%kind, index, "Aborting aggregation on entry without account");
                return Err(LedgerError::MissingAccount { kind, index });
            };

            if request.account_id.is_some_and(|wanted| wanted != account_id) {
                continue;
            }

            let account = accounts.account(account_id).ok_or_else(|| {
                warn!(%account_id, "Aborting aggregation on unknown account");
                LedgerError::AccountNotFound(account_id)
            })?;

            if let Some(wanted) = request.currency_id {
                let currency = entry.currency_id().or(account.currency_id);
                if currency != Some(wanted) {
                    continue;
                }
            }

            let delta = signed_delta(account.classification, entry.debit(), entry.credit());
            summary.apply(entry, delta, request.include_add_on);
        }

        Ok(())
    }
}
