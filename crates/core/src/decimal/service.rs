//! Exact money arithmetic.
//!
//! CRITICAL: every money computation in the engine routes through these
//! helpers. `f64` only appears in [`DecimalService::from_f64`] and
//! [`DecimalService::to_f64`], which exist for callers whose storage or
//! display layer still speaks binary floating point.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Rounding mode for [`DecimalService::round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Half away from zero (2.345 → 2.35). Conventional money rounding.
    #[default]
    Nearest,
    /// Away from zero (2.341 → 2.35).
    Up,
    /// Toward zero (2.349 → 2.34).
    Down,
    /// Half to even (2.345 → 2.34, 2.355 → 2.36).
    Bankers,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Nearest => RoundingStrategy::MidpointAwayFromZero,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Bankers => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Decimal places used for money results the engine rounds itself.
pub const MONEY_SCALE: u32 = 2;

/// Decimal arithmetic service.
///
/// All functions are pure. Division by zero (and any overflowing division)
/// yields `0` instead of an error; callers that need to tell "zero" apart
/// from "undefined" must check the divisor themselves.
///
/// Addition, subtraction and multiplication use the panicking operators
/// and are documented under `# Panics`. Their range (about ±7.9 × 10²⁸)
/// is far beyond any ledger amount. [`DecimalService::compound_interest`]
/// repeats a multiplication an input-controlled number of times and
/// returns `0` on overflow instead.
pub struct DecimalService;

impl DecimalService {
    /// `a + b`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn add(a: Decimal, b: Decimal) -> Decimal {
        a + b
    }

    /// `a - b`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn subtract(a: Decimal, b: Decimal) -> Decimal {
        a - b
    }

    /// `a × b`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn multiply(a: Decimal, b: Decimal) -> Decimal {
        a * b
    }

    /// `a ÷ b`, or `0` when `b` is zero.
    #[must_use]
    pub fn divide(a: Decimal, b: Decimal) -> Decimal {
        a.checked_div(b).unwrap_or(Decimal::ZERO)
    }

    /// Sum of all values. An empty slice sums to `0`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn add_many(values: &[Decimal]) -> Decimal {
        values.iter().copied().sum()
    }

    /// Product of all values. An empty slice yields `0`, not `1`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn multiply_many(values: &[Decimal]) -> Decimal {
        match values.split_first() {
            Some((first, rest)) => rest.iter().fold(*first, |acc, v| acc * *v),
            None => Decimal::ZERO,
        }
    }

    /// `value × percent / 100`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn percentage_of(value: Decimal, percent: Decimal) -> Decimal {
        value * percent / Decimal::ONE_HUNDRED
    }

    /// `value + value × percent / 100`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn add_percentage(value: Decimal, percent: Decimal) -> Decimal {
        value + Self::percentage_of(value, percent)
    }

    /// `value - value × percent / 100`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `Decimal`'s 96-bit mantissa.
    #[must_use]
    pub fn subtract_percentage(value: Decimal, percent: Decimal) -> Decimal {
        value - Self::percentage_of(value, percent)
    }

    /// Rounds `value` to `decimal_places` using `mode`.
    #[must_use]
    pub fn round(value: Decimal, decimal_places: u32, mode: RoundingMode) -> Decimal {
        value.round_dp_with_strategy(decimal_places, mode.strategy())
    }

    /// Rounds to [`MONEY_SCALE`] places, half away from zero.
    #[must_use]
    pub fn round_money(value: Decimal) -> Decimal {
        Self::round(value, MONEY_SCALE, RoundingMode::Nearest)
    }

    /// `a == b` by value (`1.0 == 1.00`).
    #[must_use]
    pub fn is_equal(a: Decimal, b: Decimal) -> bool {
        a == b
    }

    /// `a > b`.
    #[must_use]
    pub fn is_greater_than(a: Decimal, b: Decimal) -> bool {
        a > b
    }

    /// `a < b`.
    #[must_use]
    pub fn is_less_than(a: Decimal, b: Decimal) -> bool {
        a < b
    }

    /// `a >= b`.
    #[must_use]
    pub fn is_greater_than_or_equal(a: Decimal, b: Decimal) -> bool {
        a >= b
    }

    /// `a <= b`.
    #[must_use]
    pub fn is_less_than_or_equal(a: Decimal, b: Decimal) -> bool {
        a <= b
    }

    /// `|value|`.
    #[must_use]
    pub fn abs(value: Decimal) -> Decimal {
        value.abs()
    }

    /// The smaller of `a` and `b`.
    #[must_use]
    pub fn min(a: Decimal, b: Decimal) -> Decimal {
        a.min(b)
    }

    /// The larger of `a` and `b`.
    #[must_use]
    pub fn max(a: Decimal, b: Decimal) -> Decimal {
        a.max(b)
    }

    /// Simple interest: `principal × rate × time`.
    ///
    /// `rate` is a fraction per unit of `time` (0.05 for 5% a year with
    /// `time` in years).
    #[must_use]
    pub fn simple_interest(principal: Decimal, rate: Decimal, time: Decimal) -> Decimal {
        principal * rate * time
    }

    /// Compound interest earned: `principal × (1 + rate/n)^(n×years) − principal`.
    ///
    /// `rate` is the annual rate as a fraction and `n` the compounding
    /// periods per year. Returns `0` when `n` is zero or the growth factor
    /// overflows.
    #[must_use]
    pub fn compound_interest(
        principal: Decimal,
        rate: Decimal,
        periods_per_year: u32,
        years: u32,
    ) -> Decimal {
        if periods_per_year == 0 {
            return Decimal::ZERO;
        }
        let Some(periods) = periods_per_year.checked_mul(years) else {
            return Decimal::ZERO;
        };

        let growth = Decimal::ONE + Self::divide(rate, Decimal::from(periods_per_year));
        let factor = (0..periods).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(growth));

        match factor.and_then(|f| principal.checked_mul(f)) {
            Some(amount) => amount - principal,
            None => Decimal::ZERO,
        }
    }

    /// Converts a boundary `f64` into a `Decimal`.
    ///
    /// NaN and infinities become `0`.
    #[must_use]
    pub fn from_f64(value: f64) -> Decimal {
        Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
    }

    /// Converts a `Decimal` into an `f64` for a boundary that requires one.
    #[must_use]
    pub fn to_f64(value: Decimal) -> f64 {
        value.to_f64().unwrap_or_default()
    }
}
