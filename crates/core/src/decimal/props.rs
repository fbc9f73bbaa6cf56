//! Property-based tests for the decimal service.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{DecimalService, RoundingMode};

/// Strategy for money amounts (-100,000.00 to 100,000.00).
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for rounding modes.
fn rounding_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Nearest),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Bankers),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Division by zero never panics and always yields zero.
    #[test]
    fn prop_divide_by_zero_is_zero(numerator in amount_strategy()) {
        prop_assert_eq!(DecimalService::divide(numerator, Decimal::ZERO), Decimal::ZERO);
    }

    /// Adding then subtracting the same value is exact.
    #[test]
    fn prop_add_subtract_roundtrip(a in amount_strategy(), b in amount_strategy()) {
        let sum = DecimalService::add(a, b);
        prop_assert_eq!(DecimalService::subtract(sum, b), a);
    }

    /// Rounding is idempotent for every mode.
    #[test]
    fn prop_round_idempotent(value in amount_strategy(), mode in rounding_strategy()) {
        let once = DecimalService::round(value, 1, mode);
        prop_assert_eq!(DecimalService::round(once, 1, mode), once);
    }

    /// Rounding down never moves away from zero; rounding up never moves toward it.
    #[test]
    fn prop_round_direction(value in amount_strategy()) {
        let down = DecimalService::round(value, 1, RoundingMode::Down);
        let up = DecimalService::round(value, 1, RoundingMode::Up);
        prop_assert!(down.abs() <= value.abs());
        prop_assert!(up.abs() >= value.abs());
    }

    /// min and max partition the pair.
    #[test]
    fn prop_min_max(a in amount_strategy(), b in amount_strategy()) {
        let lo = DecimalService::min(a, b);
        let hi = DecimalService::max(a, b);
        prop_assert!(lo <= hi);
        prop_assert_eq!(lo + hi, a + b);
    }

    /// Adding and subtracting the same percentage are symmetric around the value.
    #[test]
    fn prop_percentage_symmetry(value in amount_strategy(), pct in 0i64..10_000i64) {
        let pct = Decimal::new(pct, 2);
        let up = DecimalService::add_percentage(value, pct);
        let down = DecimalService::subtract_percentage(value, pct);
        prop_assert_eq!(up + down, value + value);
    }
}
