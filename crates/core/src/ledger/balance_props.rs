//! Property-based tests for balance aggregation and running balances.

use chrono::{DateTime, TimeZone, Utc};
use coop_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::account::{Account, AccountType, index_accounts};
use super::balance::{BalanceAggregator, BalanceRequest};
use super::classification::AccountClassification;
use super::entry::GeneralLedgerEntry;
use super::error::LedgerError;
use super::running::stamp_running_balances;

/// Strategy to generate non-negative amounts (0.00 to 10,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn classification() -> impl Strategy<Value = AccountClassification> {
    prop_oneof![
        Just(AccountClassification::Assets),
        Just(AccountClassification::Liabilities),
        Just(AccountClassification::Equity),
        Just(AccountClassification::Revenue),
        Just(AccountClassification::Expenses),
        Just(AccountClassification::Other),
    ]
}

/// (day offset, debit, credit) triples.
fn lines() -> impl Strategy<Value = Vec<(u32, Decimal, Decimal)>> {
    prop::collection::vec((1u32..28, amount(), amount()), 0..20)
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 0, 0, 0).unwrap()
}

fn make_account(classification: AccountClassification) -> Account {
    Account {
        id: AccountId::new(),
        classification,
        account_type: AccountType::Other,
        currency_id: None,
    }
}

fn make_entries(account: &Account, lines: &[(u32, Decimal, Decimal)]) -> Vec<GeneralLedgerEntry> {
    lines
        .iter()
        .map(|&(d, debit, credit)| GeneralLedgerEntry::new(Some(account.id), day(d), debit, credit))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Debit and credit totals equal the plain sums, and the balanced flag
    /// follows their equality.
    #[test]
    fn prop_totals_match_sums(class in classification(), lines in lines()) {
        let account = make_account(class);
        let entries: Vec<Option<GeneralLedgerEntry>> =
            make_entries(&account, &lines).into_iter().map(Some).collect();
        let accounts = index_accounts([account]);
        let request = BalanceRequest { general_ledgers: &entries, ..BalanceRequest::default() };

        let summary = BalanceAggregator::calculate(&request, &accounts).unwrap();

        let debit: Decimal = lines.iter().map(|l| l.1).sum();
        let credit: Decimal = lines.iter().map(|l| l.2).sum();
        prop_assert_eq!(summary.debit, debit);
        prop_assert_eq!(summary.credit, credit);
        prop_assert_eq!(summary.is_balanced, debit == credit);
        prop_assert_eq!(summary.count_debit, lines.iter().filter(|l| !l.1.is_zero()).count());
        prop_assert_eq!(summary.count_credit, lines.iter().filter(|l| !l.2.is_zero()).count());
    }

    /// Aggregation does not depend on entry order.
    #[test]
    fn prop_order_independent(class in classification(), lines in lines()) {
        let account = make_account(class);
        let forward: Vec<Option<GeneralLedgerEntry>> =
            make_entries(&account, &lines).into_iter().map(Some).collect();
        let mut backward = forward.clone();
        backward.reverse();
        let accounts = index_accounts([account]);

        let a = BalanceAggregator::calculate(
            &BalanceRequest { general_ledgers: &forward, ..BalanceRequest::default() },
            &accounts,
        ).unwrap();
        let b = BalanceAggregator::calculate(
            &BalanceRequest { general_ledgers: &backward, ..BalanceRequest::default() },
            &accounts,
        ).unwrap();

        prop_assert_eq!(a, b);
    }

    /// A debit and credit of the same amount on one account pass the strict check.
    #[test]
    fn prop_self_offsetting_pair_is_strictly_balanced(
        class in classification(),
        amount in positive_amount(),
    ) {
        let account = make_account(class);
        let entries = vec![
            Some(GeneralLedgerEntry::new(Some(account.id), day(1), amount, Decimal::ZERO)),
            Some(GeneralLedgerEntry::new(Some(account.id), day(2), Decimal::ZERO, amount)),
        ];
        let accounts = index_accounts([account]);
        let request = BalanceRequest { general_ledgers: &entries, ..BalanceRequest::default() };

        let summary = BalanceAggregator::calculate_strict(&request, &accounts).unwrap();
        prop_assert!(summary.balance.is_zero());
    }

    /// Unequal debit and credit totals are rejected with their difference.
    #[test]
    fn prop_unbalanced_rejected_with_delta(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        prop_assume!(debit != credit);

        let account = make_account(AccountClassification::Assets);
        let entries = vec![
            Some(GeneralLedgerEntry::new(Some(account.id), day(1), debit, Decimal::ZERO)),
            Some(GeneralLedgerEntry::new(Some(account.id), day(1), Decimal::ZERO, credit)),
        ];
        let accounts = index_accounts([account]);
        let request = BalanceRequest { general_ledgers: &entries, ..BalanceRequest::default() };

        let err = BalanceAggregator::calculate_strict(&request, &accounts).unwrap_err();
        prop_assert!(
            matches!(err, LedgerError::Unbalanced { delta, .. } if delta == debit - credit),
            "expected Unbalanced with delta {}", debit - credit
        );
    }

    /// The last stamped balance equals the aggregated signed balance.
    #[test]
    fn prop_running_balance_ends_at_aggregate(class in classification(), lines in lines()) {
        prop_assume!(!lines.is_empty());

        let account = make_account(class);
        let mut entries = make_entries(&account, &lines);
        let wrapped: Vec<Option<GeneralLedgerEntry>> = entries.iter().cloned().map(Some).collect();
        let accounts = index_accounts([account]);

        let summary = BalanceAggregator::calculate(
            &BalanceRequest { general_ledgers: &wrapped, ..BalanceRequest::default() },
            &accounts,
        ).unwrap();
        stamp_running_balances(&mut entries, &accounts);

        prop_assert_eq!(entries.last().map(|e| e.balance), Some(summary.balance));
        for pair in entries.windows(2) {
            prop_assert!(pair[0].entry_date <= pair[1].entry_date);
        }
    }
}
