//! Property-based tests for savings accrual.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::interest::{SavingsInterestCalculator, SavingsInterestInput};
use super::types::SavingsPolicy;

/// Strategy to generate daily balances (-1,000.00 to 100,000.00).
fn balance() -> impl Strategy<Value = Decimal> {
    (-100_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn policy() -> impl Strategy<Value = SavingsPolicy> {
    prop_oneof![
        Just(SavingsPolicy::Lowest),
        Just(SavingsPolicy::Highest),
        Just(SavingsPolicy::Average),
        Just(SavingsPolicy::Start),
        Just(SavingsPolicy::End),
    ]
}

fn request(balances: Vec<Decimal>, policy: SavingsPolicy) -> SavingsInterestInput {
    SavingsInterestInput {
        daily_balances: balances,
        interest_rate: Decimal::new(3, 2),
        interest_tax_rate: Decimal::new(20, 2),
        policy: Some(policy),
        annual_divisor: Some(360),
        taxable: true,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The representative balance lies between the lowest and highest day.
    #[test]
    fn prop_selection_within_range(
        balances in prop::collection::vec(balance(), 1..60),
        policy in policy(),
    ) {
        let selected = policy.select(&balances);
        let lowest = balances.iter().copied().fold(balances[0], Decimal::min);
        let highest = balances.iter().copied().fold(balances[0], Decimal::max);
        prop_assert!(selected >= lowest && selected <= highest);
    }

    /// Histories shorter than the floor never accrue.
    #[test]
    fn prop_short_history_accrues_nothing(
        balances in prop::collection::vec(balance(), 0..30),
        policy in policy(),
    ) {
        let result = SavingsInterestCalculator::default().compute(&request(balances, policy));
        prop_assert!(result.interest.is_zero());
        prop_assert!(result.interest_tax.is_zero());
    }

    /// Interest is never negative and tax never exceeds interest.
    #[test]
    fn prop_interest_non_negative(
        balances in prop::collection::vec(balance(), 30..90),
        policy in policy(),
    ) {
        let result = SavingsInterestCalculator::default().compute(&request(balances, policy));
        prop_assert!(result.interest >= Decimal::ZERO);
        prop_assert!(result.interest_tax >= Decimal::ZERO);
        prop_assert!(result.interest_tax <= result.interest);
    }

    /// Batch accrual equals one-by-one accrual, in order.
    #[test]
    fn prop_batch_matches_single(
        histories in prop::collection::vec(prop::collection::vec(balance(), 25..40), 0..12),
        policy in policy(),
    ) {
        let calculator = SavingsInterestCalculator::default();
        let inputs: Vec<SavingsInterestInput> =
            histories.into_iter().map(|h| request(h, policy)).collect();

        let batch = calculator.compute_batch(&inputs);
        let single: Vec<_> = inputs.iter().map(|i| calculator.compute(i)).collect();
        prop_assert_eq!(batch, single);
    }
}
