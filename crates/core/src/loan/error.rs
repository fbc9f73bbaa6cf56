//! Loan computation errors.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that can occur in schedule computation.
///
/// Charge resolution never fails; a scheme with no match yields zero.
#[derive(Debug, Error)]
pub enum LoanError {
    /// Term count must be positive.
    #[error("Invalid terms: {terms}, must be greater than 0")]
    InvalidTerms {
        /// The rejected term count.
        terms: u32,
    },

    /// Fixed-days mode needs a positive day count.
    #[error("Invalid fixed days: {fixed_days}, must be greater than 0")]
    InvalidFixedDays {
        /// The rejected day count.
        fixed_days: u32,
    },

    /// Target payment must be positive.
    #[error("Suggested amount must be greater than zero, got {0}")]
    InvalidPaymentAmount(Decimal),

    /// Principal must be positive.
    #[error("Invalid total loan amount: {0}")]
    InvalidPrincipal(Decimal),

    /// A mode of payment label with no defined behavior.
    #[error("Unsupported mode of payment: {0}")]
    UnsupportedModeOfPayment(String),
}

impl LoanError {
    /// Returns the error class.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedModeOfPayment(_) => ErrorKind::Lookup,
            _ => ErrorKind::Validation,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTerms { .. } => "INVALID_TERMS",
            Self::InvalidFixedDays { .. } => "INVALID_FIXED_DAYS",
            Self::InvalidPaymentAmount(_) => "INVALID_PAYMENT_AMOUNT",
            Self::InvalidPrincipal(_) => "INVALID_PRINCIPAL",
            Self::UnsupportedModeOfPayment(_) => "UNSUPPORTED_MODE_OF_PAYMENT",
        }
    }
}
