//! Request formats and command handlers.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use coop_core::decimal::{DecimalService, RoundingMode};
use coop_core::ledger::{
    Account, AdjustmentEntry, BalanceAggregator, BalanceRequest, CashCheckVoucherEntry,
    GeneralLedgerEntry, JournalVoucherEntry, LoanTransactionEntry, index_accounts,
    stamp_running_balances,
};
use coop_core::loan::{
    AutomaticLoanDeduction, ChargesRateScheme, FinesInput, LoanModeOfPayment, LoanSchedule,
    LoanTransaction, compute_fines, periodic_interest, straight_interest, suggested_terms,
};
use coop_core::savings::{
    SavingsBalanceInput, SavingsInterestCalculator, SavingsInterestInput, summarize_daily_balances,
};
use coop_shared::EngineConfig;
use coop_shared::types::{AccountId, CurrencyId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

/// Reads and parses a JSON request file.
pub fn read<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse request file {}", path.display()))
}

fn display(value: Decimal, config: &EngineConfig) -> Decimal {
    DecimalService::round(value, config.money.scale, RoundingMode::Nearest)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BalanceFile {
    accounts: Vec<Account>,
    general_ledgers: Vec<Option<GeneralLedgerEntry>>,
    adjustments: Vec<Option<AdjustmentEntry>>,
    loan_transactions: Vec<Option<LoanTransactionEntry>>,
    cash_check_vouchers: Vec<Option<CashCheckVoucherEntry>>,
    journal_vouchers: Vec<Option<JournalVoucherEntry>>,
    account_id: Option<AccountId>,
    currency_id: Option<CurrencyId>,
    include_add_on: bool,
}

pub fn balance(file: &BalanceFile, strict: bool) -> anyhow::Result<Value> {
    let accounts = index_accounts(file.accounts.iter().cloned());
    let request = BalanceRequest {
        general_ledgers: &file.general_ledgers,
        adjustments: &file.adjustments,
        loan_transactions: &file.loan_transactions,
        cash_check_vouchers: &file.cash_check_vouchers,
        journal_vouchers: &file.journal_vouchers,
        account_id: file.account_id,
        currency_id: file.currency_id,
        include_add_on: file.include_add_on,
    };

    let summary = if strict {
        BalanceAggregator::calculate_strict(&request, &accounts)?
    } else {
        BalanceAggregator::calculate(&request, &accounts)?
    };
    info!(balanced = summary.is_balanced, "Balance computed");
    Ok(serde_json::to_value(summary)?)
}

#[derive(Debug, Deserialize)]
pub struct StampFile {
    accounts: Vec<Account>,
    entries: Vec<GeneralLedgerEntry>,
}

pub fn stamp(mut file: StampFile) -> Value {
    let accounts = index_accounts(file.accounts);
    let totals = stamp_running_balances(&mut file.entries, &accounts);
    info!(accounts = totals.len(), "Running balances stamped");
    json!({ "entries": file.entries })
}

#[derive(Debug, Deserialize)]
pub struct ChargesFile {
    scheme: ChargesRateScheme,
    loan: LoanTransaction,
}

pub fn charges(file: &ChargesFile, config: &EngineConfig) -> Value {
    let charge = file.scheme.charge_for(&file.loan);
    json!({
        "charge": charge,
        "display": display(charge, config),
    })
}

#[derive(Debug, Deserialize)]
pub struct ScheduleFile {
    loan: LoanTransaction,
    #[serde(default)]
    target_payment: Option<Decimal>,
}

pub fn schedule(file: &ScheduleFile) -> anyhow::Result<Value> {
    let schedule = LoanSchedule::for_loan(&file.loan)?;
    let suggested = file
        .target_payment
        .map(|target| {
            suggested_terms(
                target,
                file.loan.applied,
                file.loan.mode_of_payment,
                file.loan.fixed_days,
            )
        })
        .transpose()?;

    Ok(json!({
        "installments": schedule.installments,
        "installment_amount": schedule.installment_amount,
        "suggested_terms": suggested,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DeductionFile {
    rule: AutomaticLoanDeduction,
    loan: LoanTransaction,
}

pub fn deduction(file: &DeductionFile) -> Value {
    json!({ "deduction": file.rule.apply(&file.loan) })
}

pub fn fines(input: &FinesInput) -> Value {
    json!({ "fines": compute_fines(input) })
}

#[derive(Debug, Deserialize)]
pub struct InterestFile {
    balance: Decimal,
    rate: Decimal,
    mode_of_payment: LoanModeOfPayment,
    #[serde(default)]
    terms: u32,
}

pub fn interest(file: &InterestFile) -> Value {
    json!({
        "periodic": periodic_interest(file.balance, file.rate, file.mode_of_payment),
        "straight": straight_interest(file.balance, file.rate, file.terms),
    })
}

#[derive(Debug, Deserialize)]
pub struct SavingsInterestFile {
    accounts: Vec<SavingsInterestInput>,
}

pub fn savings_interest(file: &SavingsInterestFile, config: &EngineConfig) -> Value {
    let calculator = SavingsInterestCalculator::from(&config.savings);
    let results: Vec<Value> = calculator
        .compute_batch(&file.accounts)
        .into_iter()
        .map(|r| {
            json!({
                "balance": r.balance,
                "interest": display(r.interest, config),
                "interest_tax": display(r.interest_tax, config),
                "ending_balance": display(r.ending_balance, config),
            })
        })
        .collect();
    info!(accounts = results.len(), "Savings interest computed");
    json!({ "results": results })
}

pub fn savings_ending(input: &SavingsBalanceInput, config: &EngineConfig) -> Value {
    let calculator = SavingsInterestCalculator::from(&config.savings);
    let result = calculator.ending_balance(input);
    json!({
        "balance": display(result.balance, config),
        "interest_amount": result.interest_amount,
        "interest_tax": result.interest_tax,
    })
}

#[derive(Debug, Deserialize)]
pub struct DailySummaryFile {
    start_date: NaiveDate,
    daily_balances: Vec<Decimal>,
}

pub fn daily_summary(file: &DailySummaryFile) -> anyhow::Result<Value> {
    let summary = summarize_daily_balances(file.start_date, &file.daily_balances);
    Ok(serde_json::to_value(summary)?)
}
