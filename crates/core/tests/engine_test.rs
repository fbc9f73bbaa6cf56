//! Integration tests for the computation engine's public API.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use coop_core::decimal::DecimalService;
use coop_core::error::ErrorKind;
use coop_core::ledger::{
    Account, AccountClassification, AccountType, AdjustmentEntry, BalanceAggregator,
    BalanceRequest, GeneralLedgerEntry, JournalVoucherEntry, LedgerError, LoanTransactionEntry,
    index_accounts, stamp_running_balances,
};
use coop_core::loan::{
    ChargesRateScheme, LoanModeOfPayment, LoanTransaction, RangeBand, installment_amount,
    number_of_installments,
};
use coop_core::savings::{
    SavingsInterestCalculator, SavingsInterestInput, SavingsPolicy, summarize_daily_balances,
};
use coop_shared::AppError;
use coop_shared::types::AccountId;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, d, 8, 0, 0).unwrap()
}

fn account(classification: AccountClassification, account_type: AccountType) -> Account {
    Account {
        id: AccountId::new(),
        classification,
        account_type,
        currency_id: None,
    }
}

// ============================================================================
// Ledger aggregation
// ============================================================================

#[test]
fn test_loan_release_across_collections() {
    let loan = account(AccountClassification::Assets, AccountType::Loan);
    let cash = account(AccountClassification::Assets, AccountType::Other);
    let interest = account(AccountClassification::Revenue, AccountType::Interest);

    let general_ledgers = vec![
        Some(GeneralLedgerEntry::new(Some(loan.id), day(1), dec!(10000), dec!(0))),
        Some(GeneralLedgerEntry::new(Some(cash.id), day(1), dec!(0), dec!(9500))),
    ];
    let loan_transactions = vec![
        Some(LoanTransactionEntry::new(Some(interest.id), day(1), dec!(0), dec!(500)).add_on()),
    ];
    let accounts = index_accounts([loan, cash, interest]);

    let request = BalanceRequest {
        general_ledgers: &general_ledgers,
        loan_transactions: &loan_transactions,
        include_add_on: true,
        ..BalanceRequest::default()
    };
    let summary = BalanceAggregator::calculate(&request, &accounts).unwrap();

    assert_eq!(summary.debit, dec!(10000));
    assert_eq!(summary.credit, dec!(10000));
    assert!(summary.is_balanced);
    assert_eq!(summary.add_on_amount, dec!(500));
    // loan +10000, cash -9500, interest income +500
    assert_eq!(summary.balance, dec!(1000));
    assert_eq!(summary.last_payment, Some(day(1)));
}

#[test]
fn test_strict_balance_is_all_or_nothing() {
    let cash = account(AccountClassification::Assets, AccountType::Other);
    let general_ledgers = vec![
        Some(GeneralLedgerEntry::new(Some(cash.id), day(1), dec!(100), dec!(0))),
        Some(GeneralLedgerEntry::new(Some(cash.id), day(2), dec!(0), dec!(100))),
    ];
    let adjustments = vec![
        Some(AdjustmentEntry::new(Some(cash.id), None, dec!(1), dec!(1))),
        None,
    ];
    let accounts = index_accounts([cash]);

    let request = BalanceRequest {
        general_ledgers: &general_ledgers,
        adjustments: &adjustments,
        ..BalanceRequest::default()
    };

    let err = BalanceAggregator::calculate_strict(&request, &accounts).unwrap_err();
    assert!(matches!(err, LedgerError::NilEntry { index: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);

    let request = BalanceRequest {
        adjustments: &adjustments[..1],
        ..request
    };
    let summary = BalanceAggregator::calculate_strict(&request, &accounts).unwrap();
    assert_eq!(summary.debit, dec!(101));
}

#[test]
fn test_imbalance_maps_to_business_rule() {
    let cash = account(AccountClassification::Assets, AccountType::Other);
    let entries = vec![Some(GeneralLedgerEntry::new(Some(cash.id), day(1), dec!(75), dec!(0)))];
    let accounts = index_accounts([cash]);
    let request = BalanceRequest {
        general_ledgers: &entries,
        ..BalanceRequest::default()
    };

    let err = BalanceAggregator::calculate_strict(&request, &accounts).unwrap_err();
    assert_eq!(err.delta(), Some(dec!(75)));

    let app: AppError = err.into();
    assert_eq!(app.status_code(), 422);
}

#[test]
fn test_voucher_validation() {
    let lines = vec![
        JournalVoucherEntry::new(None, Some(day(3)), dec!(250.50), dec!(0)),
        JournalVoucherEntry::new(None, Some(day(3)), dec!(0), dec!(250.50)),
    ];
    assert!(BalanceAggregator::validate_voucher_balance(&lines).unwrap().is_balanced);
}

#[test]
fn test_running_balance_stamping() {
    let cash = account(AccountClassification::Assets, AccountType::Other);
    let mut entries = vec![
        GeneralLedgerEntry::new(Some(cash.id), day(2), dec!(100), dec!(0)),
        GeneralLedgerEntry::new(Some(cash.id), day(3), dec!(200), dec!(0)),
        GeneralLedgerEntry::new(Some(cash.id), day(1), dec!(0), dec!(50)),
    ];
    let accounts = index_accounts([cash]);

    stamp_running_balances(&mut entries, &accounts);

    let dates: Vec<DateTime<Utc>> = entries.iter().map(|e| e.entry_date).collect();
    let balances: Vec<Decimal> = entries.iter().map(|e| e.balance).collect();
    assert_eq!(dates, vec![day(1), day(2), day(3)]);
    assert_eq!(balances, vec![dec!(-50), dec!(50), dec!(250)]);
}

// ============================================================================
// Decimal arithmetic
// ============================================================================

#[test]
fn test_division_by_zero_is_zero() {
    assert_eq!(DecimalService::divide(dec!(100), Decimal::ZERO), Decimal::ZERO);
}

// ============================================================================
// Loans
// ============================================================================

#[test]
fn test_monthly_schedule() {
    let loan = LoanTransaction::new(dec!(1200), 12, LoanModeOfPayment::Monthly);
    assert_eq!(number_of_installments(loan.mode_of_payment, loan.terms, 0).unwrap(), 12);
    assert_eq!(installment_amount(&loan).unwrap(), dec!(100));
}

#[test]
fn test_daily_schedule() {
    assert_eq!(number_of_installments(LoanModeOfPayment::Daily, 3, 0).unwrap(), 90);
}

#[test]
fn test_range_charge_clamped_to_minimum() {
    let scheme = ChargesRateScheme::ByRange {
        bands: vec![RangeBand {
            from: dec!(1000),
            to: dec!(10000),
            charge_percent: dec!(2),
            amount: Decimal::ZERO,
            minimum_amount: dec!(50),
        }],
    };
    let loan = LoanTransaction::new(dec!(5000), 12, LoanModeOfPayment::Monthly);
    assert_eq!(scheme.charge_for(&loan), dec!(50));
}

// ============================================================================
// Savings
// ============================================================================

fn savings(balances: Vec<Decimal>) -> SavingsInterestInput {
    SavingsInterestInput {
        daily_balances: balances,
        interest_rate: dec!(0.01),
        interest_tax_rate: Decimal::ZERO,
        policy: Some(SavingsPolicy::Lowest),
        annual_divisor: Some(360),
        taxable: true,
    }
}

#[test]
fn test_savings_floor_and_accrual() {
    let calculator = SavingsInterestCalculator::default();

    let short = calculator.compute(&savings(vec![dec!(1000); 29]));
    assert_eq!(short.interest, Decimal::ZERO);

    let full = calculator.compute(&savings(vec![dec!(1000); 30]));
    assert_eq!(full.interest.round_dp(4), dec!(0.8333));
}

#[test]
fn test_daily_summary_dates() {
    let start = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    let summary = summarize_daily_balances(start, &[dec!(10), dec!(20)]);
    assert_eq!(
        summary.daily_balance[1].date,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    );
    assert_eq!(summary.average_daily_balance, dec!(15));
}
