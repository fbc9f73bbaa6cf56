//! Property-based tests for loan schedules and charges.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::charges::{ChargesRateScheme, RangeBand, RateTier, last_rate};
use super::deduction::AutomaticLoanDeduction;
use super::schedule::{installment_amount, number_of_installments, suggested_terms};
use super::types::{LoanModeOfPayment, LoanTransaction};

/// Strategy to generate principals (1.00 to 1,000,000.00).
fn principal() -> impl Strategy<Value = Decimal> {
    (100i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn mode() -> impl Strategy<Value = LoanModeOfPayment> {
    prop::sample::select(LoanModeOfPayment::ALL.to_vec())
}

fn tiers() -> impl Strategy<Value = Vec<RateTier>> {
    prop::collection::vec((0u32..60, -200i64..1_000i64), 0..30).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(threshold, rate)| RateTier {
                threshold,
                rate: Decimal::new(rate, 2),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Installment amounts carry at most 2 decimal places and are never negative.
    #[test]
    fn prop_installment_amount_is_money(
        applied in principal(),
        terms in 1u32..360,
        mode in mode(),
    ) {
        let loan = LoanTransaction { fixed_days: 7, ..LoanTransaction::new(applied, terms, mode) };
        let amount = installment_amount(&loan).unwrap();
        prop_assert!(amount.scale() <= 2);
        prop_assert!(amount >= Decimal::ZERO);
    }

    /// Monthly installments times terms stay within one cent per installment of the principal.
    #[test]
    fn prop_monthly_installments_cover_principal(applied in principal(), terms in 1u32..120) {
        let loan = LoanTransaction::new(applied, terms, LoanModeOfPayment::Monthly);
        let count = number_of_installments(loan.mode_of_payment, loan.terms, 0).unwrap();
        let amount = installment_amount(&loan).unwrap();
        let total = amount * Decimal::from(count);
        let tolerance = Decimal::new(1, 2) * Decimal::from(count);
        prop_assert!((total - applied).abs() <= tolerance);
    }

    /// Suggested terms are at least 1 and, for monthly loans, pay off the principal.
    #[test]
    fn prop_suggested_terms_cover_principal(
        applied in principal(),
        target in principal(),
    ) {
        let terms = suggested_terms(target, applied, LoanModeOfPayment::Monthly, 0).unwrap();
        prop_assert!(terms >= 1);
        prop_assert!(target * Decimal::from(terms) >= applied);
    }

    /// The selected tier rate is one of the tier rates, or zero.
    #[test]
    fn prop_last_rate_is_a_positive_tier_rate(tiers in tiers(), terms in 0u32..60) {
        let rate = last_rate(&tiers, terms);
        prop_assert!(
            rate.is_zero() || tiers.iter().any(|t| t.rate == rate && t.threshold <= terms)
        );
        prop_assert!(rate >= Decimal::ZERO);
    }

    /// A range band with a minimum never charges more than the minimum.
    #[test]
    fn prop_range_charge_never_exceeds_minimum(
        applied in principal(),
        percent in 1i64..1_000i64,
        minimum in 1i64..100_000i64,
    ) {
        let minimum = Decimal::new(minimum, 2);
        let scheme = ChargesRateScheme::ByRange {
            bands: vec![RangeBand {
                from: Decimal::ZERO,
                to: Decimal::new(100_000_000, 2),
                charge_percent: Decimal::new(percent, 2),
                amount: Decimal::ZERO,
                minimum_amount: minimum,
            }],
        };
        let loan = LoanTransaction::new(applied, 12, LoanModeOfPayment::Monthly);
        prop_assert!(scheme.charge_for(&loan) <= minimum);
    }

    /// A deduction outside its bounds is zero.
    #[test]
    fn prop_deduction_outside_bounds_is_zero(applied in principal()) {
        let rule = AutomaticLoanDeduction {
            min_amount: applied + Decimal::ONE,
            charges_percentage_1: Decimal::ONE,
            ..AutomaticLoanDeduction::default()
        };
        let loan = LoanTransaction::new(applied, 12, LoanModeOfPayment::Monthly);
        prop_assert_eq!(rule.apply(&loan), Decimal::ZERO);
    }
}
